//! HTTP API surface
//!
//! Provides:
//! - Liveness probe (`GET /health`)
//! - List/search/filter/sort/paginate (`GET /issues`)
//! - Fetch one (`GET /issues/:id`)
//! - Create (`POST /issues`)
//! - Partial update (`PUT /issues/:id`)

pub mod routes;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use issuetrack::IssueStorage;

/// Store handle shared across request handlers
pub type AppState = Arc<dyn IssueStorage>;

/// Create the API router
///
/// The CORS layer is permissive; the service fronts a browser frontend and
/// carries no credentials of its own.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route(
            "/issues",
            get(routes::list_issues).post(routes::create_issue),
        )
        .route(
            "/issues/:id",
            get(routes::get_issue).put(routes::update_issue),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
