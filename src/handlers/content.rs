use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    models::{ContentListDto, LegalContentDto},
    state::AppState,
};

pub const CONTENT_CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=86400";

/// GET /api/content/:name
///
/// Only allow-listed document names resolve; anything else is a 404.
pub async fn get_content(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let content = state.content.load_by_name(&name).await?;

    Ok((
        [(header::CACHE_CONTROL, CONTENT_CACHE_CONTROL)],
        Json(LegalContentDto::from(content.as_ref())),
    ))
}

/// GET /api/content
pub async fn list_content(State(state): State<AppState>) -> Json<ContentListDto> {
    Json(ContentListDto {
        documents: state.content.list_available().await,
    })
}
