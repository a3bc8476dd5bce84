use std::sync::Arc;

use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use portfolio_server::config::Config;
use portfolio_server::content::ContentStore;
use portfolio_server::i18n::{DictionaryStore, SupportedLocales};
use portfolio_server::preview::PreviewFetcher;
use portfolio_server::router;
use portfolio_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing: JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "portfolio_server=info,tower_http=info"
            .parse()
            .unwrap()
    });

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("🚀 Portfolio Server starting...");

    let config = Config::from_env().expect("Failed to load configuration");
    info!("📝 Configuration loaded");

    let dictionaries =
        DictionaryStore::load(&config.dictionary_dir).expect("Failed to load dictionaries");

    let previews = PreviewFetcher::new(&config.preview).expect("Failed to build HTTP client");
    info!(
        urls = config.startup_urls.len(),
        ttl_secs = config.preview.cache_ttl.as_secs(),
        "🔗 Link previews ready"
    );

    let content = ContentStore::new(&config.content_dir);
    info!("📂 Legal content directory: {}", config.content_dir.display());

    // CORS: permissive in dev, restrictive in production.
    let cors = if config.is_dev {
        info!("🔓 CORS: permissive (dev mode)");
        CorsLayer::permissive()
    } else {
        tracing::warn!("🔒 CORS: restrictive (production mode)");
        CorsLayer::new()
    };

    let addr = config.server_addr();

    let app_state = AppState {
        locales: Arc::new(SupportedLocales::default()),
        dictionaries: Arc::new(dictionaries),
        previews,
        content,
        startup_urls: config.startup_urls.clone().into(),
        site_url: config.site_url.as_str().into(),
    };

    // Prometheus metrics layer
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = router::build(app_state, &config.assets_dir)
        .route(
            "/api/metrics",
            get(move || async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!("🎧 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
