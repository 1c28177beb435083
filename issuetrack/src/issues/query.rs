//! Query pipeline over the issue collection
//!
//! List queries run three fixed stages, fresh per request: filter, then
//! sort, then paginate. There is no caching and no materialized index;
//! the pipeline is a pure function of the current collection and the query.
//!
//! Status and priority sort by their string labels (so `closed` orders
//! before `open`, and `critical` before `low`), not by severity rank.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{IssueTrackError, Result};
use crate::issues::{Issue, IssuePage, IssuePriority, IssueStatus};

/// Page size used when the caller does not specify one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size a caller may request
pub const MAX_PAGE_SIZE: u32 = 100;

/// Optional AND-combined filter conditions for a list query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueFilter {
    /// Keep issues whose title contains this text, case-insensitively
    pub search: Option<String>,
    /// Keep issues with exactly this status
    pub status: Option<IssueStatus>,
    /// Keep issues with exactly this priority
    pub priority: Option<IssuePriority>,
    /// Keep issues whose assignee contains this text, case-insensitively;
    /// unassigned issues never match while this is set
    pub assignee: Option<String>,
}

impl IssueFilter {
    /// Whether the given issue passes every active condition
    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(search) = &self.search {
            if !issue
                .title
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        if let Some(status) = self.status {
            if issue.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if issue.priority != priority {
                return false;
            }
        }
        if let Some(assignee) = &self.assignee {
            match &issue.assignee {
                Some(value) => {
                    if !value.to_lowercase().contains(&assignee.to_lowercase()) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }

    /// Whether any condition is active
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
    }
}

/// A recognized issue field to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Sort by issue ID
    Id,
    /// Sort by title
    Title,
    /// Sort by status label
    Status,
    /// Sort by priority label
    Priority,
    /// Sort by assignee; unassigned issues order first
    Assignee,
    /// Sort by creation timestamp
    CreatedAt,
    /// Sort by last-update timestamp
    UpdatedAt,
}

impl SortField {
    /// Resolve a field name to a sort field
    ///
    /// Unrecognized names yield `None`, which disables sorting rather than
    /// failing the request. Callers that want strict behavior can treat
    /// `None` as an error themselves.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(SortField::Id),
            "title" => Some(SortField::Title),
            "status" => Some(SortField::Status),
            "priority" => Some(SortField::Priority),
            "assignee" => Some(SortField::Assignee),
            "created_at" => Some(SortField::CreatedAt),
            "updated_at" => Some(SortField::UpdatedAt),
            _ => None,
        }
    }

    /// Compare two issues on this field, ascending
    pub fn compare(&self, a: &Issue, b: &Issue) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Status => a.status.as_str().cmp(b.status.as_str()),
            SortField::Priority => a.priority.as_str().cmp(b.priority.as_str()),
            SortField::Assignee => a.assignee.cmp(&b.assignee),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

/// Direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first
    Asc,
    /// Largest first
    Desc,
}

impl SortOrder {
    /// Resolve an order name; only the exact string `desc` selects
    /// descending, everything else is ascending
    pub fn parse(name: &str) -> Self {
        if name == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}

/// 1-based pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number, starting at 1
    pub page: u32,
    /// Number of issues per page, 1 to [`MAX_PAGE_SIZE`]
    pub page_size: u32,
}

impl Pagination {
    /// Check the window bounds, as enforced at the request boundary
    pub fn validate(&self) -> Result<()> {
        if self.page < 1 {
            return Err(IssueTrackError::validation("page must be at least 1"));
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(IssueTrackError::validation(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(())
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A complete list query: filters, sort, and pagination
#[derive(Debug, Clone, PartialEq)]
pub struct IssueQuery {
    /// AND-combined filter conditions
    pub filter: IssueFilter,
    /// Field to sort by; `None` leaves the filtered order untouched
    pub sort_by: Option<SortField>,
    /// Sort direction
    pub sort_order: SortOrder,
    /// Pagination window
    pub pagination: Pagination,
}

impl Default for IssueQuery {
    fn default() -> Self {
        Self {
            filter: IssueFilter::default(),
            sort_by: Some(SortField::UpdatedAt),
            sort_order: SortOrder::Desc,
            pagination: Pagination::default(),
        }
    }
}

impl IssueQuery {
    /// Run the filter/sort/paginate pipeline over a snapshot of the
    /// collection and build the page envelope
    pub fn execute(&self, issues: Vec<Issue>) -> IssuePage {
        let mut filtered: Vec<Issue> = issues
            .into_iter()
            .filter(|issue| self.filter.matches(issue))
            .collect();

        if let Some(field) = self.sort_by {
            // Stable sort, so equal keys keep their filtered order.
            filtered.sort_by(|a, b| {
                let ordering = field.compare(a, b);
                match self.sort_order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        let total = filtered.len();
        let page_size = self.pagination.page_size;
        let total_pages = total.div_ceil(page_size as usize) as u32;
        let start = (self.pagination.page as usize - 1) * page_size as usize;
        let issues: Vec<Issue> = filtered
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();

        IssuePage {
            issues,
            total,
            page: self.pagination.page,
            page_size,
            total_pages,
        }
    }
}
