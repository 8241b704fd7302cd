//! Slides API route.

use axum::extract::State;
use axum::http::header::HOST;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use serde::Serialize;

use crate::services::slides::{Slide, SlidesError};
use crate::state::AppState;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load slides";

#[derive(Debug, Serialize)]
pub struct SlidesResponse {
    pub slides: Vec<Slide>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /api/slides`: every slide in the deck, ascending by id.
pub async fn list_slides(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SlidesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let origin = request_origin(&headers);
    let slides = state
        .slides
        .load_all(origin.as_deref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, store = state.slides.kind(), "error reading slides");
            slides_error_to_response(&e)
        })?;

    let total = slides.len();
    Ok(Json(SlidesResponse { slides, total }))
}

/// Every store failure collapses to one generic 500 body.
pub(crate) fn slides_error_to_response(_err: &SlidesError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: LOAD_FAILED_MESSAGE.to_owned() }),
    )
}

/// Scheme + authority of the incoming request, from `Host` and
/// `X-Forwarded-Proto`.
pub(crate) fn request_origin(headers: &HeaderMap) -> Option<String> {
    let host = headers.get(HOST)?.to_str().ok()?.trim();
    if host.is_empty() {
        return None;
    }
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| matches!(*v, "http" | "https"))
        .unwrap_or("http");
    Some(format!("{scheme}://{host}"))
}

#[cfg(test)]
#[path = "slides_test.rs"]
mod slides_test;
