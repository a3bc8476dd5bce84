use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pulldown_cmark::{html, Options, Parser};
use strum::IntoEnumIterator;

use super::document::LegalDocument;
use super::front_matter::{split_front_matter, FrontMatter};
use crate::error::{AppError, AppResult};

/// A loaded legal document: parsed front matter plus its Markdown body and
/// the rendered HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalContent {
    pub document: LegalDocument,
    pub front_matter: FrontMatter,
    pub source: String,
    pub html: String,
}

/// Render Markdown with the GitHub-flavoured extensions legal pages use.
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(source, options);

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// File-backed store for the allow-listed legal documents, memoized per
/// document until invalidated.
#[derive(Clone)]
pub struct ContentStore {
    dir: PathBuf,
    cache: Arc<Mutex<HashMap<LegalDocument, Arc<LegalContent>>>>,
}

impl ContentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ContentStore {
            dir: dir.into(),
            cache: Arc::default(),
        }
    }

    fn cache(&self) -> MutexGuard<'_, HashMap<LegalDocument, Arc<LegalContent>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look a document up by its public name. Unknown names are rejected
    /// before the filesystem is touched.
    pub async fn load_by_name(&self, name: &str) -> AppResult<Arc<LegalContent>> {
        let document = LegalDocument::from_str(name)
            .map_err(|_| AppError::NotFound("Content not found".into()))?;
        self.load(document).await
    }

    pub async fn load(&self, document: LegalDocument) -> AppResult<Arc<LegalContent>> {
        let cached = self.cache().get(&document).cloned();
        if let Some(content) = cached {
            return Ok(content);
        }

        let path = self.dir.join(document.file_name());
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(%document, path = %path.display(), "Legal document missing on disk");
                return Err(AppError::NotFound("Content not found".into()));
            }
            Err(e) => {
                tracing::error!(%document, path = %path.display(), error = ?e, "Failed to read legal document");
                return Err(e.into());
            }
        };

        let (front_matter, source) = split_front_matter(&raw);
        let html = render_markdown(&source);
        let content = Arc::new(LegalContent {
            document,
            front_matter,
            source,
            html,
        });

        self.cache().insert(document, Arc::clone(&content));
        Ok(content)
    }

    /// Allow-listed documents that currently exist on disk.
    pub async fn list_available(&self) -> Vec<LegalDocument> {
        let mut available = Vec::new();
        for document in LegalDocument::iter() {
            let path = self.dir.join(document.file_name());
            if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                available.push(document);
            }
        }
        available
    }

    pub fn invalidate(&self, document: LegalDocument) -> bool {
        self.cache().remove(&document).is_some()
    }

    pub fn clear(&self) {
        self.cache().clear();
    }
}
