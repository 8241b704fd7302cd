#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let state = state::AppState::from_config(&config).expect("slide store init failed");
    tracing::info!(
        store = state.slides.kind(),
        slides_dir = %config.slides_dir.display(),
        "slide store ready"
    );

    // Non-fatal: the API keeps working without the compiled frontend.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos site not configured, serving API only");
            routes::api_app(state)
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "studio listening");
    axum::serve(listener, app).await.expect("server failed");
}
