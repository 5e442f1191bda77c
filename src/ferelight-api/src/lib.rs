//! FereLight API Contract
//!
//! This crate provides the wire contract shared between the FereLight
//! client and server, including:
//! - Response records (objects, segments, query hits)
//! - Request body types for the POST endpoints
//! - Path helpers for the GET endpoints

pub mod models;
pub mod path;

// Re-export commonly used types
pub use models::*;
