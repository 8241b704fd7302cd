//! Server configuration parsed from environment variables.
//!
//! A `.env` file is loaded (when present) by `main` before this runs, so the
//! same variables can come from either source.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SLIDES_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SITE_URL: &str = "https://ppt-studio.com";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Which slide store backs `GET /api/slides`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideSourceKind {
    /// Scan `slides_dir` on every request.
    Filesystem,
    /// Fetch the fixed candidate list over HTTP.
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub slides_dir: PathBuf,
    pub slide_source: SlideSourceKind,
    pub remote_origin: Option<String>,
    pub fetch_timeout_secs: u64,
    /// Public origin used for absolute links in `/sitemap.xml`.
    pub site_url: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SLIDES_DIR`: default `public/slides` at the workspace root
    /// - `SLIDES_SOURCE`: `fs` (default) or `remote`
    /// - `SLIDES_REMOTE_ORIGIN`: origin for the remote store; request origin when absent
    /// - `SLIDES_FETCH_TIMEOUT_SECS`: default 10
    /// - `SITE_URL`: default `https://ppt-studio.com`
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let port = parse_port(get("PORT").as_deref())?;
        let slides_dir = get("SLIDES_DIR").map_or_else(default_slides_dir, PathBuf::from);
        let slide_source = parse_slide_source(get("SLIDES_SOURCE").as_deref())?;
        let remote_origin = get("SLIDES_REMOTE_ORIGIN").map(|v| trim_origin(&v)).filter(|v| !v.is_empty());
        let fetch_timeout_secs = parse_timeout(get("SLIDES_FETCH_TIMEOUT_SECS").as_deref())?;
        let site_url = get("SITE_URL")
            .map(|v| trim_origin(&v))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_owned());

        Ok(Self { port, slides_dir, slide_source, remote_origin, fetch_timeout_secs, site_url })
    }

    /// True when the remote store will derive its origin from each request's
    /// `Host` header, which clients control.
    #[must_use]
    pub fn uses_request_origin(&self) -> bool {
        self.slide_source == SlideSourceKind::Remote && self.remote_origin.is_none()
    }
}

fn trim_origin(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn default_slides_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public/slides")
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var: "PORT", value: v.to_owned() }),
    }
}

fn parse_slide_source(raw: Option<&str>) -> Result<SlideSourceKind, ConfigError> {
    match raw.map(str::trim).unwrap_or("fs") {
        "fs" | "filesystem" => Ok(SlideSourceKind::Filesystem),
        "remote" => Ok(SlideSourceKind::Remote),
        other => Err(ConfigError::Invalid { var: "SLIDES_SOURCE", value: other.to_owned() }),
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(DEFAULT_SLIDES_FETCH_TIMEOUT_SECS),
        Some(v) => match v.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::Invalid { var: "SLIDES_FETCH_TIMEOUT_SECS", value: v.to_owned() }),
        },
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
