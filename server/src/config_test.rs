use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.slide_source, SlideSourceKind::Filesystem);
    assert_eq!(cfg.remote_origin, None);
    assert_eq!(cfg.fetch_timeout_secs, DEFAULT_SLIDES_FETCH_TIMEOUT_SECS);
    assert!(cfg.slides_dir.ends_with("public/slides"));
    assert_eq!(cfg.site_url, DEFAULT_SITE_URL);
}

#[test]
fn from_lookup_parses_remote_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("SLIDES_DIR", "/srv/deck"),
        ("SLIDES_SOURCE", "remote"),
        ("SLIDES_REMOTE_ORIGIN", "https://ppt-studio.example/ "),
        ("SLIDES_FETCH_TIMEOUT_SECS", "3"),
        ("SITE_URL", "https://slides.example.org/"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.slides_dir, PathBuf::from("/srv/deck"));
    assert_eq!(cfg.slide_source, SlideSourceKind::Remote);
    assert_eq!(cfg.remote_origin.as_deref(), Some("https://ppt-studio.example"));
    assert_eq!(cfg.fetch_timeout_secs, 3);
    assert_eq!(cfg.site_url, "https://slides.example.org");
}

#[test]
fn from_lookup_blank_values_fall_back() {
    let cfg = ServerConfig::from_lookup(lookup(&[("SLIDES_DIR", "  "), ("SLIDES_REMOTE_ORIGIN", "")])).unwrap();
    assert!(cfg.slides_dir.ends_with("public/slides"));
    assert_eq!(cfg.remote_origin, None);
}

#[test]
fn from_lookup_blank_port_and_timeout_fall_back() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", ""),
        ("SLIDES_FETCH_TIMEOUT_SECS", " "),
        ("SLIDES_SOURCE", ""),
        ("SITE_URL", "  "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.fetch_timeout_secs, DEFAULT_SLIDES_FETCH_TIMEOUT_SECS);
    assert_eq!(cfg.slide_source, SlideSourceKind::Filesystem);
    assert_eq!(cfg.site_url, DEFAULT_SITE_URL);
}

#[test]
fn uses_request_origin_only_for_remote_without_origin() {
    let remote = ServerConfig::from_lookup(lookup(&[("SLIDES_SOURCE", "remote")])).unwrap();
    assert!(remote.uses_request_origin());

    let pinned = ServerConfig::from_lookup(lookup(&[
        ("SLIDES_SOURCE", "remote"),
        ("SLIDES_REMOTE_ORIGIN", "https://cdn.example"),
    ]))
    .unwrap();
    assert!(!pinned.uses_request_origin());

    let fs = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert!(!fs.uses_request_origin());
}

#[test]
fn from_lookup_unknown_source_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("SLIDES_SOURCE", "s3")])).unwrap_err();
    assert!(err.to_string().contains("SLIDES_SOURCE"));
}

#[test]
fn from_lookup_bad_port_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "99999")])).unwrap_err();
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn from_lookup_zero_timeout_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("SLIDES_FETCH_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(err.to_string().contains("SLIDES_FETCH_TIMEOUT_SECS"));
}

#[test]
fn parse_slide_source_accepts_aliases() {
    assert_eq!(parse_slide_source(None).unwrap(), SlideSourceKind::Filesystem);
    assert_eq!(parse_slide_source(Some("filesystem")).unwrap(), SlideSourceKind::Filesystem);
    assert_eq!(parse_slide_source(Some(" remote ")).unwrap(), SlideSourceKind::Remote);
}
