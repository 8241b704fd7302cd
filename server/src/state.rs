//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the slide store chosen at startup, the directory served under
//! `/slides` and the public site origin. Nothing in it is mutated after
//! construction.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{DEFAULT_SITE_URL, ServerConfig, SlideSourceKind};
use crate::services::slides::{FsSlideStore, RemoteSlideStore, SlideStore, SlidesError};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub slides: Arc<dyn SlideStore>,
    /// Directory exposed as static files under `/slides`.
    pub slides_dir: PathBuf,
    /// Public origin for absolute links, without a trailing slash.
    pub site_url: String,
}

impl AppState {
    #[must_use]
    pub fn new(slides: Arc<dyn SlideStore>, slides_dir: PathBuf) -> Self {
        Self { slides, slides_dir, site_url: DEFAULT_SITE_URL.to_owned() }
    }

    #[must_use]
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into();
        self
    }

    /// Build state for the configured slide source.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote store's HTTP client cannot be built.
    pub fn from_config(config: &ServerConfig) -> Result<Self, SlidesError> {
        if config.uses_request_origin() {
            tracing::warn!(
                "SLIDES_SOURCE=remote without SLIDES_REMOTE_ORIGIN: slide fetches follow the client-supplied Host header; set SLIDES_REMOTE_ORIGIN in production"
            );
        }
        let store: Arc<dyn SlideStore> = match config.slide_source {
            SlideSourceKind::Filesystem => Arc::new(FsSlideStore::new(&config.slides_dir)),
            SlideSourceKind::Remote => Arc::new(RemoteSlideStore::new(
                config.remote_origin.clone(),
                Duration::from_secs(config.fetch_timeout_secs),
            )?),
        };
        Ok(Self::new(store, config.slides_dir.clone()).with_site_url(config.site_url.clone()))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
