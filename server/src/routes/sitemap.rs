//! `GET /sitemap.xml`: one entry for the site root plus one per locale, each
//! listing every locale as an `hreflang` alternate.

use std::fmt::Write;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use studio_ui::i18n::Locale;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::state::AppState;

pub const SITEMAP_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let lastmod = OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "sitemap lastmod formatting failed");
        String::new()
    });
    let body = build_sitemap(&state.site_url, Locale::all(), &lastmod);
    ([(CONTENT_TYPE, SITEMAP_CONTENT_TYPE)], body)
}

/// Render the sitemap document. `lastmod` is omitted when empty.
///
/// The first locale is the `x-default` alternate.
#[must_use]
pub fn build_sitemap(base_url: &str, locales: &[Locale], lastmod: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    write_url(&mut out, base, base, locales, lastmod);
    for locale in locales {
        write_url(&mut out, &locale_url(base, *locale), base, locales, lastmod);
    }

    out.push_str("</urlset>\n");
    out
}

fn write_url(out: &mut String, loc: &str, base: &str, locales: &[Locale], lastmod: &str) {
    let _ = writeln!(out, "  <url>\n    <loc>{}</loc>", escape_xml(loc));
    if let Some(first) = locales.first() {
        let _ = writeln!(
            out,
            "    <xhtml:link rel=\"alternate\" hreflang=\"x-default\" href=\"{}\"/>",
            escape_xml(&locale_url(base, *first))
        );
    }
    for locale in locales {
        let _ = writeln!(
            out,
            "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>",
            locale.code(),
            escape_xml(&locale_url(base, *locale))
        );
    }
    if !lastmod.is_empty() {
        let _ = writeln!(out, "    <lastmod>{}</lastmod>", escape_xml(lastmod));
    }
    out.push_str("  </url>\n");
}

fn locale_url(base: &str, locale: Locale) -> String {
    format!("{base}/{}", locale.code())
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "sitemap_test.rs"]
mod sitemap_test;
