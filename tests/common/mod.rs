// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use portfolio_server::{
    config::PreviewConfig,
    content::ContentStore,
    i18n::{DictionaryStore, Locale, SupportedLocales},
    preview::PreviewFetcher,
    router,
    state::AppState,
};

pub const IMPRINT_MD: &str = "---\ntitle: Imprint\nupdated: \"2025-01-15\"\n---\n# Imprint\n\nContact: hello@example.com\n";

/// A router backed by a temporary content directory. Keep the returned
/// `TempDir` alive for as long as the router is used.
pub struct TestApp {
    pub state: AppState,
    pub dir: TempDir,
}

impl TestApp {
    pub fn router(&self) -> Router {
        router::build(self.state.clone(), self.dir.path().join("assets"))
    }
}

pub fn test_dictionaries() -> DictionaryStore {
    DictionaryStore::from_values(
        json!({ "title": "Founder & Engineer" }),
        HashMap::from([(Locale::De, json!({ "title": "Gründer & Entwickler" }))]),
    )
}

/// Build a test app that previews `startup_urls` with a short fetch timeout.
pub fn create_test_app(startup_urls: Vec<String>) -> TestApp {
    create_test_app_with(startup_urls, Duration::from_secs(2))
}

pub fn create_test_app_with(startup_urls: Vec<String>, timeout: Duration) -> TestApp {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let legal = dir.path().join("legal");
    let assets = dir.path().join("assets");
    std::fs::create_dir_all(&legal).unwrap();
    std::fs::create_dir_all(&assets).unwrap();
    std::fs::write(legal.join("imprint.md"), IMPRINT_MD).unwrap();
    std::fs::write(assets.join("logo.svg"), "<svg/>").unwrap();

    let previews = PreviewFetcher::new(&PreviewConfig {
        timeout,
        cache_ttl: Duration::from_secs(3600),
    })
    .expect("failed to build preview fetcher");

    let state = AppState {
        locales: Arc::new(SupportedLocales::default()),
        dictionaries: Arc::new(test_dictionaries()),
        previews,
        content: ContentStore::new(legal),
        startup_urls: startup_urls.into(),
        site_url: Arc::from("https://portfolio.test"),
    };

    TestApp { state, dir }
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn get_with_language(app: Router, uri: &str, accept_language: &str) -> TestResponse {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::ACCEPT_LANGUAGE, accept_language)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

async fn send(app: Router, req: Request<Body>) -> TestResponse {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}
