use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use strum::IntoEnumIterator;
use thiserror::Error;

use super::locale::Locale;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Translation dictionaries for every locale, loaded once at startup.
///
/// Locales without a usable file share the English dictionary.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    fallback: Value,
    dictionaries: HashMap<Locale, Value>,
}

impl DictionaryStore {
    /// Load `<dir>/<locale>.json` for each locale. Only the fallback locale is
    /// mandatory.
    pub fn load(dir: &Path) -> Result<Self, DictionaryError> {
        let fallback = read_dictionary(dir, Locale::DEFAULT)?;
        let mut dictionaries = HashMap::new();

        for locale in Locale::iter().filter(|l| *l != Locale::DEFAULT) {
            match read_dictionary(dir, locale) {
                Ok(dict) => {
                    dictionaries.insert(locale, dict);
                }
                Err(e) => {
                    tracing::warn!(%locale, error = %e, "Dictionary unavailable, using fallback");
                }
            }
        }

        tracing::info!(
            loaded = dictionaries.len() + 1,
            dir = %dir.display(),
            "Dictionaries loaded"
        );

        Ok(DictionaryStore {
            fallback,
            dictionaries,
        })
    }

    /// Build a store from in-memory dictionaries.
    pub fn from_values(fallback: Value, dictionaries: HashMap<Locale, Value>) -> Self {
        DictionaryStore {
            fallback,
            dictionaries,
        }
    }

    pub fn get(&self, locale: Locale) -> &Value {
        self.dictionaries.get(&locale).unwrap_or(&self.fallback)
    }
}

fn read_dictionary(dir: &Path, locale: Locale) -> Result<Value, DictionaryError> {
    let path = dir.join(format!("{locale}.json"));
    let raw = std::fs::read_to_string(&path).map_err(|source| DictionaryError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DictionaryError::Parse { path, source })
}
