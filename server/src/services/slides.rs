//! Slide store: reads the HTML slide deck served by `GET /api/slides`.
//!
//! DESIGN
//! ======
//! Two stores exist with different contracts and one is chosen at startup:
//! `FsSlideStore` scans a directory (dynamic, unbounded, creates the directory
//! when missing) and `RemoteSlideStore` fetches a fixed list of ten filenames
//! over HTTP from the deployment origin. The two are never combined.
//!
//! ERROR HANDLING
//! ==============
//! A single slide that cannot be read or fetched is dropped from the deck.
//! Only failures of the store as a whole surface as `SlidesError`.

#[cfg(test)]
#[path = "slides_test.rs"]
mod slides_test;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const SLIDE_FILE_PREFIX: &str = "slide-";
pub const SLIDE_FILE_SUFFIX: &str = ".html";

/// Candidate files fetched by the remote store, in request order.
pub const REMOTE_SLIDE_FILES: [&str; 10] = [
    "slide-1.html",
    "slide-2.html",
    "slide-3.html",
    "slide-4.html",
    "slide-5.html",
    "slide-6.html",
    "slide-7.html",
    "slide-8.html",
    "slide-9.html",
    "slide-10.html",
];

// =============================================================================
// TYPES
// =============================================================================

/// One rendered slide. `id` is the numeric suffix of `filename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: u32,
    pub filename: String,
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SlidesError {
    /// The slides directory could not be created or listed.
    #[error("slides directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client for the remote store could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// Neither a configured nor a request-derived origin is available.
    #[error("no origin available for remote slides")]
    MissingOrigin,
}

/// Source of the slide deck.
#[async_trait::async_trait]
pub trait SlideStore: Send + Sync {
    /// Short name used in logs.
    fn kind(&self) -> &'static str;

    /// Load every available slide, sorted by ascending id.
    ///
    /// `origin` is the scheme + authority of the incoming request, used by
    /// stores that read from the deployment's own static files.
    async fn load_all(&self, origin: Option<&str>) -> Result<Vec<Slide>, SlidesError>;
}

// =============================================================================
// FILENAMES
// =============================================================================

/// Extract `N` from `slide-N.html`. Returns `None` for any other name,
/// including digits that overflow `u32`.
#[must_use]
pub fn parse_slide_id(filename: &str) -> Option<u32> {
    let digits = filename
        .strip_prefix(SLIDE_FILE_PREFIX)?
        .strip_suffix(SLIDE_FILE_SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Order slides by id; equal ids fall back to filename so output is stable.
pub fn sort_slides(slides: &mut [Slide]) {
    slides.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.filename.cmp(&b.filename)));
}

// =============================================================================
// FILESYSTEM STORE
// =============================================================================

/// Directory-backed store. Every `slide-N.html` in the directory is a slide.
pub struct FsSlideStore {
    dir: PathBuf,
}

impl FsSlideStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn io_error(&self, source: std::io::Error) -> SlidesError {
        SlidesError::Io { path: self.dir.clone(), source }
    }
}

#[async_trait::async_trait]
impl SlideStore for FsSlideStore {
    fn kind(&self) -> &'static str {
        "fs"
    }

    async fn load_all(&self, _origin: Option<&str>) -> Result<Vec<Slide>, SlidesError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| self.io_error(e))?;
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| self.io_error(e))?;

        let mut slides = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| self.io_error(e))? {
            let Ok(filename) = entry.file_name().into_string() else {
                continue;
            };
            let Some(id) = parse_slide_id(&filename) else {
                debug!(file = %filename, "ignoring non-slide file");
                continue;
            };
            match tokio::fs::read_to_string(entry.path()).await {
                Ok(content) => slides.push(Slide { id, filename, content }),
                Err(e) => warn!(file = %filename, error = %e, "skipping unreadable slide"),
            }
        }

        sort_slides(&mut slides);
        Ok(slides)
    }
}

// =============================================================================
// REMOTE STORE
// =============================================================================

/// HTTP-backed store probing `REMOTE_SLIDE_FILES` under `<origin>/slides/`.
pub struct RemoteSlideStore {
    client: reqwest::Client,
    origin: Option<String>,
}

impl RemoteSlideStore {
    /// Build a remote store. A configured `origin` takes precedence over the
    /// request origin passed to `load_all`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(origin: Option<String>, timeout: Duration) -> Result<Self, SlidesError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SlidesError::HttpClientBuild(e.to_string()))?;
        let origin = origin.map(|o| o.trim_end_matches('/').to_owned());
        Ok(Self { client, origin })
    }

    async fn fetch_one(&self, base: &str, filename: &str) -> Option<Slide> {
        let id = parse_slide_id(filename).unwrap_or(0);
        let url = format!("{base}/slides/{filename}");
        let resp = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                debug!(%url, error = %e, "slide fetch failed");
                return None;
            }
        };
        if !resp.status().is_success() {
            debug!(%url, status = resp.status().as_u16(), "slide not available");
            return None;
        }
        match resp.text().await {
            Ok(content) => Some(Slide { id, filename: filename.to_owned(), content }),
            Err(e) => {
                debug!(%url, error = %e, "slide body read failed");
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl SlideStore for RemoteSlideStore {
    fn kind(&self) -> &'static str {
        "remote"
    }

    async fn load_all(&self, origin: Option<&str>) -> Result<Vec<Slide>, SlidesError> {
        let base = self
            .origin
            .as_deref()
            .or(origin)
            .map(|o| o.trim_end_matches('/'))
            .ok_or(SlidesError::MissingOrigin)?;

        let fetches = REMOTE_SLIDE_FILES
            .iter()
            .map(|filename| self.fetch_one(base, filename));
        let mut slides: Vec<Slide> = futures::future::join_all(fetches)
            .await
            .into_iter()
            .flatten()
            .collect();

        sort_slides(&mut slides);
        Ok(slides)
    }
}
