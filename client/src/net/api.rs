//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the deck is only fetched
//! from the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed slide fetch
//! degrades to an empty deck without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Slide;
#[cfg(feature = "hydrate")]
use super::types::{ApiErrorResponse, SlidesResponse};

pub const SLIDES_ENDPOINT: &str = "/api/slides";

#[cfg(any(test, feature = "hydrate"))]
fn slides_request_failed_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.trim().is_empty() => format!("slides request failed: {status} ({})", detail.trim()),
        _ => format!("slides request failed: {status}"),
    }
}

/// Fetch the whole deck from `GET /api/slides`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body cannot be decoded.
pub async fn fetch_slides() -> Result<Vec<Slide>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SLIDES_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let detail = resp.json::<ApiErrorResponse>().await.ok().map(|b| b.error);
            return Err(slides_request_failed_message(resp.status(), detail.as_deref()));
        }
        let body: SlidesResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.slides)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
