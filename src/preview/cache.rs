use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::models::LinkPreview;

/// In-memory memo of fetched previews keyed by URL.
///
/// Cheaply cloneable: all clones share the same map.
#[derive(Clone)]
pub struct PreviewCache {
    ttl: Duration,
    entries: Arc<Mutex<HashMap<String, (LinkPreview, Instant)>>>,
}

impl PreviewCache {
    pub fn new(ttl: Duration) -> Self {
        PreviewCache {
            ttl,
            entries: Arc::default(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, (LinkPreview, Instant)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A fresh entry for `url`. Expired entries are dropped on the way out.
    pub fn get(&self, url: &str) -> Option<LinkPreview> {
        let mut entries = self.lock();
        let (preview, cached_at) = entries.get(url)?;
        if cached_at.elapsed() < self.ttl {
            return Some(preview.clone());
        }
        entries.remove(url);
        None
    }

    pub fn insert(&self, url: &str, preview: LinkPreview) {
        self.lock()
            .insert(url.to_string(), (preview, Instant::now()));
    }

    pub fn invalidate(&self, url: &str) -> bool {
        self.lock().remove(url).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
