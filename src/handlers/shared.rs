use crate::{
    error::{AppError, AppResult},
    i18n::Locale,
    state::AppState,
};

/// Resolve the `:lang` path segment, returning 404 if it is not a locale we
/// serve.
pub fn require_locale(state: &AppState, lang: &str) -> AppResult<Locale> {
    state
        .locales
        .find_exact(lang)
        .ok_or_else(|| AppError::NotFound("Page not found".into()))
}
