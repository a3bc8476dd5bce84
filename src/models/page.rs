use serde::Serialize;
use serde_json::Value;

use super::LinkPreview;
use crate::i18n::Locale;

/// Data for a localized page: the locale and its translation dictionary.
#[derive(Debug, Clone, Serialize)]
pub struct PageDto {
    pub locale: Locale,
    pub dictionary: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct StartupsPageDto {
    pub locale: Locale,
    pub dictionary: Value,
    pub startups: Vec<LinkPreview>,
}
