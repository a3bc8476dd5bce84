use std::sync::Arc;

use crate::content::ContentStore;
use crate::i18n::{DictionaryStore, SupportedLocales};
use crate::preview::PreviewFetcher;

/// Shared application state passed to all handlers and extractors.
/// Everything here is built once at startup; the stores carry their own
/// interior caches.
#[derive(Clone)]
pub struct AppState {
    pub locales: Arc<SupportedLocales>,
    pub dictionaries: Arc<DictionaryStore>,
    pub previews: PreviewFetcher,
    pub content: ContentStore,
    pub startup_urls: Arc<[String]>,
    pub site_url: Arc<str>,
}
