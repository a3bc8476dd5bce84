pub mod content;
pub mod pages;
pub mod shared;
pub mod sitemap;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

use crate::error::AppError;

pub async fn health_check() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "portfolio-server",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// Router fallback, so unknown paths get the same JSON error shape as
/// everything else.
pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".into())
}
