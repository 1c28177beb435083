//! # IssueTrack
//!
//! An in-memory issue tracking store with a filter/sort/paginate query
//! pipeline.
//!
//! ## Features
//!
//! - **Issue Lifecycle**: Create, fetch, and partially update issue records
//! - **Query Pipeline**: Combinable AND filters, per-field sorting, and
//!   page-envelope pagination executed fresh per request
//! - **Closed Enumerations**: Status and priority modeled as tagged enums
//!   with fixed string labels, rejected at the boundary when unknown
//! - **Async API**: Storage behind an async trait, safe to share across a
//!   concurrent request-serving runtime
//!
//! ## Quick Start
//!
//! ```rust
//! use issuetrack::{CreateIssueRequest, IssueQuery, IssueStorage, MemoryIssueStorage};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a store pre-loaded with sample data
//! let storage = MemoryIssueStorage::with_sample_issues();
//!
//! // Create an issue; status and priority fall back to their defaults
//! let issue = storage
//!     .create_issue(CreateIssueRequest {
//!         title: "Fix flaky test".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Query the collection
//! let page = storage.list_issues(&IssueQuery::default()).await?;
//! println!("{} of {} issues", page.issues.len(), page.total);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Issue records, storage, and the query pipeline
pub mod issues;

/// Error types used throughout the library
pub mod error;

// Re-export core types
pub use error::{IssueTrackError, Result};
pub use issues::query::{
    IssueFilter, IssueQuery, Pagination, SortField, SortOrder, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use issues::storage::{IssueStorage, MemoryIssueStorage};
pub use issues::{
    CreateIssueRequest, Issue, IssueId, IssuePage, IssuePriority, IssueStatus, UpdateIssueRequest,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
