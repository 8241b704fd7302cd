//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the Slides API, the sitemap, the static slide directory,
//! and Leptos SSR rendering under a single Axum router. The studio lives at
//! `/{locale}`; `/` redirects to the default locale.

pub mod sitemap;
pub mod slides;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use studio_ui::i18n::Locale;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API + static slide routes shared by the SSR app and API-only mode.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let slides_service = ServeDir::new(&state.slides_dir);

    Router::new()
        .route("/", get(redirect_root_to_locale))
        .route("/api/slides", get(slides::list_slides))
        .route("/healthz", get(healthz))
        .route("/sitemap.xml", get(sitemap::sitemap_xml))
        .nest_service("/slides", slides_service)
        .layer(cors)
        .with_state(state)
}

/// Router without the Leptos frontend, used when site options are missing.
pub fn api_app(state: AppState) -> Router {
    with_common_layers(api_routes(state))
}

/// Leptos SSR frontend: API routes + studio pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section and no `LEPTOS_*` env).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(studio_ui::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || studio_ui::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(with_common_layers(
        api_routes(state)
            .merge(leptos_router)
            .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))),
    ))
}

fn with_common_layers(router: Router) -> Router {
    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn redirect_root_to_locale() -> Redirect {
    Redirect::temporary(&format!("/{}", Locale::default().code()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
