//! FereLight Client Library
//!
//! HTTP client for connecting to FereLight multimedia-retrieval API servers.

mod client;

pub use client::Client;
pub use ferelight_api::{ObjectInfo, QueryRequest, QueryResult, SegmentInfo};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
