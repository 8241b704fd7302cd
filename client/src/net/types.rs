//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the `GET /api/slides` payloads so serde round-trips stay
//! lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One pre-rendered slide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Numeric suffix of `filename`; decks are ordered by it.
    pub id: u32,
    /// Source file name (`slide-N.html`).
    pub filename: String,
    /// Complete HTML document rendered inside a sandboxed frame.
    pub content: String,
}

/// Successful `GET /api/slides` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidesResponse {
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub total: usize,
}

/// Error body returned with non-2xx statuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
