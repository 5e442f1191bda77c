use crate::{ClientError, Result};
use ferelight_api::path;
use ferelight_api::{
    ObjectInfo, ObjectInfosRequest, QueryByExampleRequest, QueryRequest, QueryResult,
    SegmentByTimeRequest, SegmentInfo, SegmentInfosRequest,
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// FereLight REST API Client
///
/// Holds the base server URL and a shared `reqwest` transport. The client
/// keeps no per-call state, so one instance can be used concurrently from
/// any number of tasks.
pub struct Client {
    base_url: String,
    client: HttpClient,
}

impl Client {
    /// Create a new client connected to the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling across multiple FereLight instances)
    pub fn with_client(client: HttpClient, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, client }
    }

    /// Base server URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get metadata for a single object
    pub async fn get_object_info(&self, database: &str, object_id: &str) -> Result<ObjectInfo> {
        tracing::debug!(database, object_id, "Fetching object info");
        self.get(&path::object_info(database, object_id)).await
    }

    /// Get metadata for a single segment
    pub async fn get_segment_info(&self, database: &str, segment_id: &str) -> Result<SegmentInfo> {
        tracing::debug!(database, segment_id, "Fetching segment info");
        self.get(&path::segment_info(database, segment_id)).await
    }

    /// Get all segments belonging to one object, in server-defined order
    pub async fn get_object_segments(
        &self,
        database: &str,
        object_id: &str,
    ) -> Result<Vec<SegmentInfo>> {
        tracing::debug!(database, object_id, "Fetching object segments");
        self.get(&path::object_segments(database, object_id)).await
    }

    /// Get metadata for a batch of objects
    pub async fn get_object_infos(
        &self,
        database: &str,
        object_ids: Vec<String>,
    ) -> Result<Vec<ObjectInfo>> {
        tracing::debug!(database, count = object_ids.len(), "Fetching object infos");
        let req = ObjectInfosRequest {
            database: database.to_string(),
            object_ids,
        };
        self.post(path::OBJECT_INFOS, &req).await
    }

    /// Get metadata for a batch of segments
    pub async fn get_segment_infos(
        &self,
        database: &str,
        segment_ids: Vec<String>,
    ) -> Result<Vec<SegmentInfo>> {
        tracing::debug!(database, count = segment_ids.len(), "Fetching segment infos");
        let req = SegmentInfosRequest {
            database: database.to_string(),
            segment_ids,
        };
        self.post(path::SEGMENT_INFOS, &req).await
    }

    /// Run a similarity/text query and return the ranked hits
    pub async fn query(&self, request: &QueryRequest) -> Result<Vec<QueryResult>> {
        tracing::debug!(database = %request.database, "Running query");
        self.post(path::QUERY, request).await
    }

    /// Run a similarity query using an existing segment as the anchor
    pub async fn query_by_example(
        &self,
        database: &str,
        segment_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<QueryResult>> {
        tracing::debug!(database, segment_id, "Running query by example");
        let req = QueryByExampleRequest {
            database: database.to_string(),
            segment_id: segment_id.to_string(),
            limit,
        };
        self.post(path::QUERY_BY_EXAMPLE, &req).await
    }

    /// Resolve which segment of an object contains the given absolute
    /// timestamp, returning its segment id
    pub async fn segment_by_time(
        &self,
        database: &str,
        object_id: &str,
        timestamp: f64,
    ) -> Result<String> {
        tracing::debug!(database, object_id, timestamp, "Resolving segment by time");
        let req = SegmentByTimeRequest {
            database: database.to_string(),
            object_id: object_id.to_string(),
            timestamp,
        };
        self.post(path::SEGMENT_BY_TIME, &req).await
    }

    // ---- private helpers ----

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    /// Check the status and decode the body. The body is read as text
    /// first so that transport failures surface as `Request` and JSON
    /// failures (including missing mandatory fields) as `Decode`.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
