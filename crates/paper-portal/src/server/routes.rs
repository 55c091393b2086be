//! HTTP routes.
//!
//! Every handler sanitizes its inputs before use and maps failures to a JSON
//! `{error}` body. Provider and internal error text stays in the logs.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::catalog;
use crate::error::SearchError;
use crate::models::{RawSearchQuery, RawSecondaryQuery, SearchParams};
use crate::sanitize::sanitize;
use crate::search::SearchService;
use crate::secondary::SecondarySource;

/// Shared state for HTTP handlers.
pub struct AppState {
    /// Primary search orchestrator.
    pub search: SearchService,
    /// Opt-in alternate source.
    pub secondary: Arc<dyn SecondarySource>,
}

/// A JSON error response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Create an error with a client-facing message.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// Map a search failure. Internal errors use `fallback` as their message.
    fn from_search(err: &SearchError, fallback: &str) -> Self {
        match err {
            SearchError::Validation { .. } => {
                Self::new(StatusCode::BAD_REQUEST, err.to_user_message())
            }
            SearchError::Provider(_) => Self::new(StatusCode::BAD_GATEWAY, err.to_user_message()),
            SearchError::Internal(_) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, fallback),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Create the HTTP router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/search", get(handle_search))
        .route("/papers", get(handle_papers))
        .route("/secondary-search", get(handle_secondary_search))
        .route("/filters", get(handle_filters))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "paper-portal",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ready",
        "service": "paper-portal",
        "version": env!("CARGO_PKG_VERSION"),
        "hasApiKey": state.search.has_api_key(),
        "secondarySource": state.secondary.name()
    }))
}

/// `GET /search`: provider search with sample-data fallback.
async fn handle_search(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<RawSearchQuery>,
) -> Result<Response, ApiError> {
    let params = SearchParams::from(raw);

    match state.search.search(&params).await {
        Ok(papers) => Ok(Json(json!({ "papers": papers })).into_response()),
        Err(e) => {
            if e.is_validation() {
                tracing::debug!(error = %e, "Rejected search request");
                return Err(ApiError::from_search(&e, "Failed to perform search"));
            }
            tracing::error!(error = %e, "Search failed");
            Err(ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to perform search"))
        }
    }
}

/// `GET /papers`: provider search without fallback.
async fn handle_papers(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<RawSearchQuery>,
) -> Result<Response, ApiError> {
    let params = SearchParams::from(raw);

    match state.search.search_provider(&params).await {
        Ok(papers) => Ok(Json(json!({ "papers": papers })).into_response()),
        Err(e) => {
            if !e.is_validation() {
                tracing::error!(error = %e, "Provider search failed");
            }
            Err(ApiError::from_search(&e, "Failed to fetch papers"))
        }
    }
}

/// `GET /secondary-search`: opt-in alternate source.
async fn handle_secondary_search(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<RawSecondaryQuery>,
) -> Result<Response, ApiError> {
    let query = match raw.query.as_deref() {
        None | Some("") => {
            return Err(ApiError::new(StatusCode::BAD_REQUEST, "Query parameter is required"));
        }
        Some(q) => sanitize(q),
    };

    match state.secondary.search(&query).await {
        Ok(results) => Ok(Json(json!({ "results": results })).into_response()),
        Err(e) => {
            tracing::error!(source = state.secondary.name(), error = %e, "Secondary search failed");
            Err(ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to search secondary source",
            ))
        }
    }
}

/// `GET /filters`: topic and year choices.
async fn handle_filters() -> impl IntoResponse {
    Json(json!({
        "topics": catalog::TOPICS,
        "years": catalog::years()
    }))
}
