use serde::{Deserialize, Serialize};

/// ObjectInfo describes one multimedia object stored in a database.
///
/// Every field is mandatory in a well-formed server response; a body
/// missing any of them fails deserialization rather than filling in a
/// default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectInfo {
    #[serde(rename = "objectid")]
    pub object_id: String,
    #[serde(rename = "mediatype")]
    pub media_type: i32,
    pub name: String,
    pub path: String,
}

/// SegmentInfo describes one time-bounded segment of an object.
///
/// `segment_start`/`segment_end` are frame or index bounds;
/// `segment_start_abs`/`segment_end_abs` are absolute time bounds in
/// seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentInfo {
    #[serde(rename = "segmentid")]
    pub segment_id: String,
    #[serde(rename = "objectid")]
    pub object_id: String,
    #[serde(rename = "segmentnumber")]
    pub segment_number: i32,
    #[serde(rename = "segmentstart")]
    pub segment_start: i32,
    #[serde(rename = "segmentend")]
    pub segment_end: i32,
    #[serde(rename = "segmentstartabs")]
    pub segment_start_abs: f64,
    #[serde(rename = "segmentendabs")]
    pub segment_end_abs: f64,
}

/// QueryResult is one ranked hit from a similarity/text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(rename = "segmentid")]
    pub segment_id: String,
    pub score: f64,
}

/// Request body for `POST /objectinfos` (batch object lookup).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectInfosRequest {
    pub database: String,
    #[serde(rename = "objectids")]
    pub object_ids: Vec<String>,
}

/// Request body for `POST /segmentinfos` (batch segment lookup).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentInfosRequest {
    pub database: String,
    #[serde(rename = "segmentids")]
    pub segment_ids: Vec<String>,
}

/// Request body for `POST /query`.
///
/// All query signals are optional; absent ones are omitted from the
/// serialized body entirely, not sent as `null`. `merge_type` names a
/// server-defined strategy for combining multiple signals into one
/// ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryRequest {
    pub database: String,
    #[serde(rename = "similaritytext", skip_serializing_if = "Option::is_none")]
    pub similarity_text: Option<String>,
    #[serde(rename = "ocrtext", skip_serializing_if = "Option::is_none")]
    pub ocr_text: Option<String>,
    #[serde(rename = "asrtext", skip_serializing_if = "Option::is_none")]
    pub asr_text: Option<String>,
    #[serde(rename = "mergetype", skip_serializing_if = "Option::is_none")]
    pub merge_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl QueryRequest {
    /// Create a query against `database` with no signals set.
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..Default::default()
        }
    }
}

/// Request body for `POST /querybyexample`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryByExampleRequest {
    pub database: String,
    #[serde(rename = "segmentid")]
    pub segment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Request body for `POST /segmentbytime`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentByTimeRequest {
    pub database: String,
    #[serde(rename = "objectid")]
    pub object_id: String,
    pub timestamp: f64,
}
