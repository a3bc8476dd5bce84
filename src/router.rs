use std::path::Path;

use axum::{middleware, routing::get, Router};
use tower_http::services::ServeDir;

use crate::{handlers, i18n::redirect_missing_locale, state::AppState};

/// Build the application router with locale routing applied. Transport
/// layers (CORS, tracing, metrics) are added by the binary.
pub fn build(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // API (never localized)
        .route("/api/health", get(handlers::health_check))
        .route("/api/dictionary", get(handlers::pages::preferred_dictionary))
        .route("/api/content", get(handlers::content::list_content))
        .route("/api/content/:name", get(handlers::content::get_content))
        // Crawlers and static files
        .route("/sitemap.xml", get(handlers::sitemap::sitemap))
        .nest_service("/assets", ServeDir::new(assets_dir.as_ref()))
        // Localized pages
        .route("/:lang", get(handlers::pages::home))
        .route("/:lang/startups", get(handlers::pages::startups))
        .fallback(handlers::not_found)
        // Registered after the fallback so unrouted paths get redirected too.
        .layer(middleware::from_fn_with_state(
            state.clone(),
            redirect_missing_locale,
        ))
        .with_state(state)
}
