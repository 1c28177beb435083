//! Unified error handling for the IssueTrack library
//!
//! This module provides the typed error hierarchy shared by the store and
//! the query pipeline. HTTP-facing error mapping lives in the server crate.

use thiserror::Error;

/// The main error type for the IssueTrack library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IssueTrackError {
    /// Referenced issue does not exist in the store
    #[error("Issue not found: {0}")]
    IssueNotFound(u64),

    /// Input rejected before reaching the store
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl IssueTrackError {
    /// Create a validation error with the given message
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a validation error for an unknown enum label
    pub fn unknown_label(field: &str, value: &str) -> Self {
        Self::Validation(format!("unknown {field} value: '{value}'"))
    }
}

/// Result type alias for IssueTrack operations
pub type Result<T> = std::result::Result<T, IssueTrackError>;
