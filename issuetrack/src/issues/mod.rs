//! Issue record schema and request/response types
//!
//! This module defines the sole entity of the system, the [`Issue`], along
//! with the request payloads used to create and patch records and the page
//! envelope returned by list queries.
//!
//! ## Features
//!
//! - **Integer IDs**: Strong-typed issue IDs assigned monotonically from 1
//! - **Closed Enumerations**: Status and priority carry fixed string labels;
//!   unknown labels fail to parse instead of becoming free text
//! - **JSON Serialization**: Full serde support for the HTTP surface
//! - **Partial Updates**: Patch requests where omitted fields mean
//!   "leave unchanged"
//!
//! ## Basic Usage
//!
//! ```rust
//! use issuetrack::issues::{CreateIssueRequest, Issue, IssueId, IssuePriority, IssueStatus};
//!
//! let issue = Issue::new(
//!     IssueId::new(1),
//!     CreateIssueRequest {
//!         title: "Fix login bug".to_string(),
//!         description: Some("Users cannot login".to_string()),
//!         status: IssueStatus::Open,
//!         priority: IssuePriority::High,
//!         assignee: None,
//!     },
//! );
//! assert_eq!(issue.id.value(), 1);
//! assert_eq!(issue.created_at, issue.updated_at);
//! ```

use crate::error::{IssueTrackError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query pipeline: filtering, sorting, and pagination
pub mod query;
/// Storage trait and the in-memory implementation
pub mod storage;

/// Type-safe wrapper for issue IDs to prevent mixing with other integers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct IssueId(u64);

impl IssueId {
    /// Create an issue ID from a raw integer
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for IssueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for IssueId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<IssueId> for u64 {
    fn from(value: IssueId) -> Self {
        value.0
    }
}

/// Lifecycle state of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    /// Newly reported, not yet picked up
    Open,
    /// Actively being worked on
    InProgress,
    /// Closed without necessarily being fixed
    Closed,
    /// Fixed and verified
    Resolved,
}

impl IssueStatus {
    /// The fixed string label used on the wire and for sorting
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Open => "open",
            IssueStatus::InProgress => "in_progress",
            IssueStatus::Closed => "closed",
            IssueStatus::Resolved => "resolved",
        }
    }
}

impl Default for IssueStatus {
    fn default() -> Self {
        IssueStatus::Open
    }
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for IssueStatus {
    type Err = IssueTrackError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "open" => Ok(IssueStatus::Open),
            "in_progress" => Ok(IssueStatus::InProgress),
            "closed" => Ok(IssueStatus::Closed),
            "resolved" => Ok(IssueStatus::Resolved),
            _ => Err(IssueTrackError::unknown_label("status", s)),
        }
    }
}

/// Urgency classification of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssuePriority {
    /// Can wait
    Low,
    /// Default urgency
    Medium,
    /// Should be addressed soon
    High,
    /// Drop everything
    Critical,
}

impl IssuePriority {
    /// The fixed string label used on the wire and for sorting
    pub fn as_str(&self) -> &'static str {
        match self {
            IssuePriority::Low => "low",
            IssuePriority::Medium => "medium",
            IssuePriority::High => "high",
            IssuePriority::Critical => "critical",
        }
    }
}

impl Default for IssuePriority {
    fn default() -> Self {
        IssuePriority::Medium
    }
}

impl std::fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for IssuePriority {
    type Err = IssueTrackError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(IssuePriority::Low),
            "medium" => Ok(IssuePriority::Medium),
            "high" => Ok(IssuePriority::High),
            "critical" => Ok(IssuePriority::Critical),
            _ => Err(IssueTrackError::unknown_label("priority", s)),
        }
    }
}

/// A single trackable work item record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique identifier, assigned monotonically starting at 1
    pub id: IssueId,
    /// Title of the issue
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Lifecycle state
    pub status: IssueStatus,
    /// Urgency classification
    pub priority: IssuePriority,
    /// Optional person the issue is assigned to
    pub assignee: Option<String>,
    /// When the issue was created; never modified afterwards
    pub created_at: DateTime<Utc>,
    /// When the issue was last updated; refreshed on every update
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    /// Create a new issue with both timestamps set to the current instant
    pub fn new(id: IssueId, request: CreateIssueRequest) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: request.title,
            description: request.description,
            status: request.status,
            priority: request.priority,
            assignee: request.assignee,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, overwriting only the supplied fields
    ///
    /// `updated_at` refreshes on every call, even when the patch is empty or
    /// every supplied value equals the old one.
    pub fn apply_update(&mut self, patch: UpdateIssueRequest) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = Some(assignee);
        }
        self.updated_at = Utc::now();
    }
}

/// Request type for creating a new issue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateIssueRequest {
    /// Title for the new issue
    pub title: String,
    /// Optional longer description
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle state, `open` when omitted
    #[serde(default)]
    pub status: IssueStatus,
    /// Urgency classification, `medium` when omitted
    #[serde(default)]
    pub priority: IssuePriority,
    /// Optional person the issue is assigned to
    #[serde(default)]
    pub assignee: Option<String>,
}

/// Request type for partially updating an existing issue
///
/// Fields left as `None` (omitted from the JSON body, or explicitly `null`)
/// keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateIssueRequest {
    /// New title, if changing
    #[serde(default)]
    pub title: Option<String>,
    /// New description, if changing
    #[serde(default)]
    pub description: Option<String>,
    /// New lifecycle state, if changing
    #[serde(default)]
    pub status: Option<IssueStatus>,
    /// New urgency classification, if changing
    #[serde(default)]
    pub priority: Option<IssuePriority>,
    /// New assignee, if changing
    #[serde(default)]
    pub assignee: Option<String>,
}

impl UpdateIssueRequest {
    /// Whether the patch carries no field at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
    }
}

/// A response wrapper containing one page of results plus totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuePage {
    /// The slice of issues for the requested page
    pub issues: Vec<Issue>,
    /// Count of issues matching the filters, across all pages
    pub total: usize,
    /// The 1-based page number that was requested
    pub page: u32,
    /// The page size that was requested
    pub page_size: u32,
    /// Number of pages needed to cover `total` at `page_size`
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_labels_round_trip() {
        for status in [
            IssueStatus::Open,
            IssueStatus::InProgress,
            IssueStatus::Closed,
            IssueStatus::Resolved,
        ] {
            assert_eq!(IssueStatus::from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_status_rejects_unknown_label() {
        let result = IssueStatus::from_str("reopened");
        assert!(matches!(result, Err(IssueTrackError::Validation(_))));
    }

    #[test]
    fn test_priority_rejects_unknown_label() {
        let result = IssuePriority::from_str("urgent");
        assert!(matches!(result, Err(IssueTrackError::Validation(_))));
    }

    #[test]
    fn test_status_serializes_as_snake_case() {
        let json = serde_json::to_string(&IssueStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn test_create_request_defaults() {
        let request: CreateIssueRequest =
            serde_json::from_str(r#"{"title": "Just a title"}"#).unwrap();
        assert_eq!(request.status, IssueStatus::Open);
        assert_eq!(request.priority, IssuePriority::Medium);
        assert_eq!(request.description, None);
        assert_eq!(request.assignee, None);
    }

    #[test]
    fn test_update_request_null_means_unchanged() {
        let patch: UpdateIssueRequest =
            serde_json::from_str(r#"{"title": null, "assignee": "Jane"}"#).unwrap();
        assert_eq!(patch.title, None);
        assert_eq!(patch.assignee.as_deref(), Some("Jane"));
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_new_issue_timestamps_match() {
        let issue = Issue::new(
            IssueId::new(7),
            CreateIssueRequest {
                title: "Timestamps".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(issue.created_at, issue.updated_at);
    }

    #[test]
    fn test_apply_update_touches_only_supplied_fields() {
        let mut issue = Issue::new(
            IssueId::new(1),
            CreateIssueRequest {
                title: "Original".to_string(),
                description: Some("Description".to_string()),
                status: IssueStatus::Open,
                priority: IssuePriority::High,
                assignee: Some("John".to_string()),
            },
        );

        issue.apply_update(UpdateIssueRequest {
            status: Some(IssueStatus::Closed),
            ..Default::default()
        });

        assert_eq!(issue.title, "Original");
        assert_eq!(issue.description.as_deref(), Some("Description"));
        assert_eq!(issue.status, IssueStatus::Closed);
        assert_eq!(issue.priority, IssuePriority::High);
        assert_eq!(issue.assignee.as_deref(), Some("John"));
    }

    #[test]
    fn test_apply_update_refreshes_updated_at_on_empty_patch() {
        let mut issue = Issue::new(
            IssueId::new(1),
            CreateIssueRequest {
                title: "No-op".to_string(),
                ..Default::default()
            },
        );
        let before = issue.updated_at;

        issue.apply_update(UpdateIssueRequest::default());

        assert!(issue.updated_at >= before);
        assert_eq!(issue.created_at, before);
    }
}
