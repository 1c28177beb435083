//! Request handlers for the issue API
//!
//! All boundary validation happens here: query parameters arrive as raw
//! strings and are parsed into a typed [`IssueQuery`] before the store is
//! touched, so malformed enum labels and out-of-range pagination never
//! reach it. JSON body schema violations are normalized onto the same
//! error envelope.

use std::str::FromStr;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use issuetrack::{
    CreateIssueRequest, Issue, IssueFilter, IssueId, IssuePage, IssuePriority, IssueQuery,
    IssueStatus, IssueTrackError, Pagination, SortField, SortOrder, UpdateIssueRequest,
    DEFAULT_PAGE_SIZE,
};

use super::AppState;

/// Error type for API handlers, rendered as a JSON error envelope
#[derive(Debug, Error)]
pub enum ApiError {
    /// Referenced issue does not exist
    #[error("Issue not found")]
    NotFound,
    /// Request rejected before reaching the store
    #[error("{0}")]
    Validation(String),
    /// Unexpected failure inside the store
    #[error("Internal server error")]
    Internal(String),
}

impl From<IssueTrackError> for ApiError {
    fn from(err: IssueTrackError) -> Self {
        match err {
            IssueTrackError::IssueNotFound(_) => ApiError::NotFound,
            IssueTrackError::Validation(msg) => ApiError::Validation(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// JSON body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description of what was rejected
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests
    pub status: String,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Raw query parameters of GET /issues, before validation
#[derive(Debug, Default, Deserialize)]
pub struct ListIssuesParams {
    /// Case-insensitive title substring
    pub search: Option<String>,
    /// Status label to match exactly
    pub status: Option<String>,
    /// Priority label to match exactly
    pub priority: Option<String>,
    /// Case-insensitive assignee substring
    pub assignee: Option<String>,
    /// Field name to sort by; unrecognized names disable sorting
    pub sort_by: Option<String>,
    /// `desc` for descending, anything else ascending
    pub sort_order: Option<String>,
    /// 1-based page number
    pub page: Option<u32>,
    /// Issues per page, 1 to 100
    pub page_size: Option<u32>,
}

impl ListIssuesParams {
    /// Validate and resolve the raw parameters into a typed query
    pub fn into_query(self) -> Result<IssueQuery, ApiError> {
        let status = self
            .status
            .as_deref()
            .map(IssueStatus::from_str)
            .transpose()?;
        let priority = self
            .priority
            .as_deref()
            .map(IssuePriority::from_str)
            .transpose()?;

        // An absent sort_by falls back to the default field; a present but
        // unrecognized one disables sorting instead of erroring.
        let sort_by = match self.sort_by.as_deref() {
            None => Some(SortField::UpdatedAt),
            Some(name) => SortField::parse(name),
        };
        let sort_order = self
            .sort_order
            .as_deref()
            .map(SortOrder::parse)
            .unwrap_or_default();

        let pagination = Pagination {
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        };
        pagination.validate()?;

        Ok(IssueQuery {
            filter: IssueFilter {
                search: self.search,
                status,
                priority,
                assignee: self.assignee,
            },
            sort_by,
            sort_order,
            pagination,
        })
    }
}

/// GET /issues
pub async fn list_issues(
    State(storage): State<AppState>,
    params: Result<Query<ListIssuesParams>, QueryRejection>,
) -> Result<Json<IssuePage>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let query = params.into_query()?;

    debug!(?query, "listing issues");
    let page = storage.list_issues(&query).await?;
    Ok(Json(page))
}

/// GET /issues/:id
pub async fn get_issue(
    State(storage): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Issue>, ApiError> {
    let Path(id) = id.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    let issue = storage.get_issue(IssueId::new(id)).await?;
    Ok(Json(issue))
}

/// POST /issues
pub async fn create_issue(
    State(storage): State<AppState>,
    payload: Result<Json<CreateIssueRequest>, JsonRejection>,
) -> Result<Json<Issue>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    let issue = storage.create_issue(request).await?;
    Ok(Json(issue))
}

/// PUT /issues/:id
pub async fn update_issue(
    State(storage): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<UpdateIssueRequest>, JsonRejection>,
) -> Result<Json<Issue>, ApiError> {
    let Path(id) = id.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let Json(patch) =
        payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    let issue = storage.update_issue(IssueId::new(id), patch).await?;
    Ok(Json(issue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_query_defaults() {
        let query = ListIssuesParams::default().into_query().unwrap();

        assert!(query.filter.is_empty());
        assert_eq!(query.sort_by, Some(SortField::UpdatedAt));
        assert_eq!(query.sort_order, SortOrder::Desc);
        assert_eq!(query.pagination.page, 1);
        assert_eq!(query.pagination.page_size, 10);
    }

    #[test]
    fn test_into_query_rejects_unknown_status() {
        let params = ListIssuesParams {
            status: Some("banana".to_string()),
            ..Default::default()
        };

        match params.into_query() {
            Err(ApiError::Validation(msg)) => assert!(msg.contains("banana")),
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_into_query_rejects_pagination_out_of_bounds() {
        let params = ListIssuesParams {
            page: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            params.into_query(),
            Err(ApiError::Validation(_))
        ));

        let params = ListIssuesParams {
            page_size: Some(101),
            ..Default::default()
        };
        assert!(matches!(
            params.into_query(),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_into_query_tolerates_unknown_sort_field() {
        let params = ListIssuesParams {
            sort_by: Some("karma".to_string()),
            ..Default::default()
        };

        let query = params.into_query().unwrap();
        assert_eq!(query.sort_by, None);
    }

    #[test]
    fn test_into_query_parses_filters() {
        let params = ListIssuesParams {
            search: Some("login".to_string()),
            status: Some("in_progress".to_string()),
            priority: Some("critical".to_string()),
            assignee: Some("jane".to_string()),
            sort_by: Some("title".to_string()),
            sort_order: Some("asc".to_string()),
            page: Some(2),
            page_size: Some(25),
        };

        let query = params.into_query().unwrap();
        assert_eq!(query.filter.search.as_deref(), Some("login"));
        assert_eq!(query.filter.status, Some(IssueStatus::InProgress));
        assert_eq!(query.filter.priority, Some(IssuePriority::Critical));
        assert_eq!(query.filter.assignee.as_deref(), Some("jane"));
        assert_eq!(query.sort_by, Some(SortField::Title));
        assert_eq!(query.sort_order, SortOrder::Asc);
        assert_eq!(query.pagination.page, 2);
        assert_eq!(query.pagination.page_size, 25);
    }

    #[test]
    fn test_api_error_from_library_error() {
        let err: ApiError = IssueTrackError::IssueNotFound(9).into();
        assert!(matches!(err, ApiError::NotFound));

        let err: ApiError = IssueTrackError::validation("bad input").into();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
