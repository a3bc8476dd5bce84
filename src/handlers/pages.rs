use axum::{
    extract::{Path, State},
    Json,
};

use super::shared::require_locale;
use crate::{
    error::AppResult,
    i18n::PreferredLocale,
    models::{PageDto, StartupsPageDto},
    state::AppState,
};

/// GET /:lang
pub async fn home(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> AppResult<Json<PageDto>> {
    let locale = require_locale(&state, &lang)?;

    Ok(Json(PageDto {
        locale,
        dictionary: state.dictionaries.get(locale).clone(),
    }))
}

/// GET /:lang/startups
///
/// Previews for every configured startup URL are fetched concurrently; a
/// site that is down shows up as a placeholder card, never as an error.
pub async fn startups(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> AppResult<Json<StartupsPageDto>> {
    let locale = require_locale(&state, &lang)?;
    let startups = state.previews.fetch_all(&state.startup_urls).await;

    Ok(Json(StartupsPageDto {
        locale,
        dictionary: state.dictionaries.get(locale).clone(),
        startups,
    }))
}

/// GET /api/dictionary
///
/// Dictionary for the caller's `Accept-Language`, for clients outside the
/// localized page tree.
pub async fn preferred_dictionary(
    State(state): State<AppState>,
    PreferredLocale(locale): PreferredLocale,
) -> Json<PageDto> {
    Json(PageDto {
        locale,
        dictionary: state.dictionaries.get(locale).clone(),
    })
}
