//! Storage trait and the in-memory issue store
//!
//! The store owns the ordered issue collection and the id counter. Both live
//! behind one `RwLock` so that id allocation and insertion happen in a
//! single critical section and list queries observe a consistent snapshot.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{IssueTrackError, Result};
use crate::issues::query::IssueQuery;
use crate::issues::{
    CreateIssueRequest, Issue, IssueId, IssuePage, IssuePriority, IssueStatus, UpdateIssueRequest,
};

/// Trait for issue storage operations
#[async_trait]
pub trait IssueStorage: Send + Sync {
    /// Create a new issue with an auto-assigned id
    async fn create_issue(&self, request: CreateIssueRequest) -> Result<Issue>;

    /// Get a specific issue by id
    async fn get_issue(&self, id: IssueId) -> Result<Issue>;

    /// Apply a partial update to an existing issue
    async fn update_issue(&self, id: IssueId, patch: UpdateIssueRequest) -> Result<Issue>;

    /// Run a list query over the collection
    async fn list_issues(&self, query: &IssueQuery) -> Result<IssuePage>;
}

/// Collection plus id allocator, guarded together
struct StoreInner {
    /// Issue records in insertion order
    issues: Vec<Issue>,
    /// Next id to assign; starts at 1 and never resets
    next_id: u64,
}

/// In-memory issue storage implementation
///
/// Cloning is cheap and every clone shares the same underlying collection,
/// so a store handle can be passed freely to request handlers.
#[derive(Clone)]
pub struct MemoryIssueStorage {
    inner: Arc<RwLock<StoreInner>>,
}

impl MemoryIssueStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                issues: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a store seeded with the fixed set of sample issues
    pub fn with_sample_issues() -> Self {
        let mut issues = Vec::new();
        let mut next_id = 1u64;
        for request in sample_issues() {
            issues.push(Issue::new(IssueId::new(next_id), request));
            next_id += 1;
        }
        Self {
            inner: Arc::new(RwLock::new(StoreInner { issues, next_id })),
        }
    }

    /// Number of issues currently stored
    pub async fn len(&self) -> usize {
        self.inner.read().await.issues.len()
    }

    /// Whether the store holds no issues
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryIssueStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IssueStorage for MemoryIssueStorage {
    async fn create_issue(&self, request: CreateIssueRequest) -> Result<Issue> {
        let mut inner = self.inner.write().await;

        let id = IssueId::new(inner.next_id);
        let issue = Issue::new(id, request);
        inner.issues.push(issue.clone());
        inner.next_id += 1;

        debug!(id = %issue.id, title = %issue.title, "created issue");
        Ok(issue)
    }

    async fn get_issue(&self, id: IssueId) -> Result<Issue> {
        let inner = self.inner.read().await;

        inner
            .issues
            .iter()
            .find(|issue| issue.id == id)
            .cloned()
            .ok_or(IssueTrackError::IssueNotFound(id.value()))
    }

    async fn update_issue(&self, id: IssueId, patch: UpdateIssueRequest) -> Result<Issue> {
        let mut inner = self.inner.write().await;

        let issue = inner
            .issues
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or(IssueTrackError::IssueNotFound(id.value()))?;

        issue.apply_update(patch);

        debug!(id = %issue.id, "updated issue");
        Ok(issue.clone())
    }

    async fn list_issues(&self, query: &IssueQuery) -> Result<IssuePage> {
        // Snapshot under the read lock; the pipeline runs on owned data.
        let snapshot = {
            let inner = self.inner.read().await;
            inner.issues.clone()
        };

        Ok(query.execute(snapshot))
    }
}

/// The fixed sample records loaded by [`MemoryIssueStorage::with_sample_issues`]
fn sample_issues() -> Vec<CreateIssueRequest> {
    vec![
        CreateIssueRequest {
            title: "Fix login bug".to_string(),
            description: Some(
                "Users cannot login with special characters in password".to_string(),
            ),
            status: IssueStatus::Open,
            priority: IssuePriority::High,
            assignee: Some("John Doe".to_string()),
        },
        CreateIssueRequest {
            title: "Add dark mode".to_string(),
            description: Some("Implement dark theme for better user experience".to_string()),
            status: IssueStatus::InProgress,
            priority: IssuePriority::Medium,
            assignee: Some("Jane Smith".to_string()),
        },
        CreateIssueRequest {
            title: "Update documentation".to_string(),
            description: Some("Update API documentation with new endpoints".to_string()),
            status: IssueStatus::Closed,
            priority: IssuePriority::Low,
            assignee: Some("Bob Johnson".to_string()),
        },
        CreateIssueRequest {
            title: "Performance optimization".to_string(),
            description: Some("Optimize database queries for better performance".to_string()),
            status: IssueStatus::Open,
            priority: IssuePriority::Critical,
            assignee: Some("Alice Brown".to_string()),
        },
        CreateIssueRequest {
            title: "Add unit tests".to_string(),
            description: Some(
                "Write comprehensive unit tests for core functionality".to_string(),
            ),
            status: IssueStatus::InProgress,
            priority: IssuePriority::Medium,
            assignee: Some("Charlie Wilson".to_string()),
        },
    ]
}
