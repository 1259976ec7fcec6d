//! HTTP handlers for the suggestion endpoints.
//!
//! Bodies are taken as raw bytes and validated by the core request parsers,
//! so a missing `Content-Type` header or a malformed payload still produces
//! the structured error envelope instead of an extractor rejection.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::Json;

use taskhint_core::request::{CategoryRequest, SimilarRequest};

use super::dto::{CategoryResponse, HealthResponse, SimilarResponse};
use super::error::ApiErrorResponse;
use super::AppState;

type Body = Result<Bytes, BytesRejection>;

/// `POST /api/suggestions/similar`
pub async fn similar_tasks(
    State(state): State<AppState>,
    body: Body,
) -> Result<Json<SimilarResponse>, ApiErrorResponse> {
    let request = SimilarRequest::from_slice(&body?)?;
    tracing::debug!(
        text_len = request.text.len(),
        existing_tasks = request.existing_tasks.len(),
        "similar request"
    );

    let service = Arc::clone(&state.service);
    let outcome = state
        .run_blocking(move || service.similar(&request))
        .await?;

    Ok(Json(SimilarResponse::from(outcome)))
}

/// `POST /api/suggestions/category`
pub async fn suggest_category(
    State(state): State<AppState>,
    body: Body,
) -> Result<Json<CategoryResponse>, ApiErrorResponse> {
    let request = CategoryRequest::from_slice(&body?)?;

    let service = Arc::clone(&state.service);
    let category = state
        .run_blocking(move || service.category(&request))
        .await?;

    Ok(Json(CategoryResponse::new(category)))
}

/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        catalog_entries: state.service.catalog().len(),
    })
}

pub async fn not_found(uri: Uri) -> ApiErrorResponse {
    ApiErrorResponse::not_found(format!("no route for {}", uri.path()))
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiErrorResponse {
    ApiErrorResponse::method_not_allowed(format!("{} not allowed on {}", method, uri.path()))
}
