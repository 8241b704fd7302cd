use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::*;
use crate::state::test_helpers::{TempSlidesDir, test_app_state};

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

// =============================================================================
// build_sitemap
// =============================================================================

#[test]
fn build_sitemap_lists_home_then_every_locale() {
    let xml = build_sitemap("https://ppt-studio.com", Locale::all(), "2026-01-02T03:04:05Z");

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("xmlns:xhtml=\"http://www.w3.org/1999/xhtml\""));
    assert_eq!(xml.matches("<url>").count(), Locale::all().len() + 1);

    let locs: Vec<&str> = xml
        .lines()
        .filter_map(|l| l.trim().strip_prefix("<loc>")?.strip_suffix("</loc>"))
        .collect();
    assert_eq!(locs[0], "https://ppt-studio.com");
    assert_eq!(locs[1], "https://ppt-studio.com/en");
    assert_eq!(locs.last().copied(), Some("https://ppt-studio.com/pt"));
}

#[test]
fn build_sitemap_every_entry_has_all_alternates_and_x_default() {
    let xml = build_sitemap("https://ppt-studio.com", Locale::all(), "2026-01-02T03:04:05Z");
    let entries = Locale::all().len() + 1;

    assert_eq!(
        xml.matches("hreflang=\"x-default\" href=\"https://ppt-studio.com/en\"").count(),
        entries
    );
    assert_eq!(
        xml.matches("hreflang=\"zh\" href=\"https://ppt-studio.com/zh\"").count(),
        entries
    );
    assert_eq!(xml.matches("<xhtml:link ").count(), entries * (Locale::all().len() + 1));
    assert_eq!(xml.matches("<lastmod>2026-01-02T03:04:05Z</lastmod>").count(), entries);
}

#[test]
fn build_sitemap_trims_trailing_slash_and_escapes() {
    let xml = build_sitemap("https://a.example/?x=1&y=2/", &[Locale::De], "");
    assert!(xml.contains("<loc>https://a.example/?x=1&amp;y=2</loc>"));
    assert!(xml.contains("<loc>https://a.example/?x=1&amp;y=2/de</loc>"));
    assert!(!xml.contains("&y"));
}

#[test]
fn build_sitemap_omits_empty_lastmod() {
    let xml = build_sitemap("https://ppt-studio.com", &[Locale::En], "");
    assert!(!xml.contains("<lastmod>"));
}

// =============================================================================
// sitemap_xml
// =============================================================================

#[tokio::test]
async fn sitemap_xml_serves_xml_for_configured_site() {
    let dir = TempSlidesDir::new();
    let state = test_app_state(dir.path()).with_site_url("https://slides.example.org");

    let resp = sitemap_xml(State(state)).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[CONTENT_TYPE], SITEMAP_CONTENT_TYPE);

    let body = body_text(resp).await;
    assert!(body.contains("<loc>https://slides.example.org</loc>"));
    assert!(body.contains("<loc>https://slides.example.org/ja</loc>"));
    assert_eq!(body.matches("<lastmod>").count(), Locale::all().len() + 1);
}
