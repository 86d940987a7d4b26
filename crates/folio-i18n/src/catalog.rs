//! Locale catalogs.
//!
//! A catalog directory holds one file per locale (`en.yaml`, `es.json`, ...),
//! each a flat map from content key to message.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::locale::{Locale, LocaleError};

/// A raw catalog message, possibly carrying inline markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(String);

impl Message {
    /// Create a message from its raw text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The raw message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Read-only lookup of messages by key and locale.
pub trait LocaleCatalog: Send + Sync {
    /// Find the message for a key in exactly this locale.
    fn lookup(&self, key: &str, locale: &Locale) -> Option<&Message>;

    /// Locales this catalog holds entries for, in sorted order.
    fn locales(&self) -> Vec<Locale>;
}

/// In-memory catalog loaded from disk or built in code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<Locale, HashMap<String, Message>>,
}

/// Key coverage of one locale against a declared key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    /// Locale being reported
    pub locale: Locale,
    /// Number of declared keys
    pub total: usize,
    /// Declared keys with no entry in this locale
    pub missing: Vec<String>,
    /// Entries in this locale that no declared key references
    pub unknown: Vec<String>,
}

impl Coverage {
    /// Number of declared keys this locale translates.
    pub fn translated(&self) -> usize {
        self.total - self.missing.len()
    }

    /// Whether every declared key is translated.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every catalog file in a directory.
    ///
    /// The file stem names the locale. Files with other extensions are skipped.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        if !dir.is_dir() {
            return Err(CatalogError::DirectoryNotFound(dir.display().to_string()));
        }

        let mut catalog = Self::new();

        for entry in WalkDir::new(dir)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !matches!(ext, "yaml" | "yml" | "json") {
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
            let locale = Locale::parse(stem).map_err(|source| CatalogError::InvalidLocale {
                path: path.display().to_string(),
                source,
            })?;

            if catalog.entries.contains_key(&locale) {
                return Err(CatalogError::DuplicateLocale(locale.to_string()));
            }

            let content = fs::read_to_string(path).map_err(|e| CatalogError::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            let messages = parse_messages(&content, ext).map_err(|message| CatalogError::Parse {
                path: path.display().to_string(),
                message,
            })?;

            tracing::debug!("Loaded {} messages for {} from {}", messages.len(), locale, path.display());
            catalog.extend(locale, messages);
        }

        Ok(catalog)
    }

    /// Add entries for a locale, replacing existing keys.
    ///
    /// Blank messages are skipped so that lookups fall back instead of rendering nothing.
    pub fn extend<K, V>(&mut self, locale: Locale, messages: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let table = self.entries.entry(locale.clone()).or_default();
        for (key, text) in messages {
            let key = key.into();
            let text = text.into();
            if text.trim().is_empty() {
                tracing::warn!("Skipping blank message for {} in {}", key, locale);
                continue;
            }
            table.insert(key, Message(text));
        }
    }

    /// Whether the catalog holds any entries for a locale.
    pub fn has_locale(&self, locale: &Locale) -> bool {
        self.entries.contains_key(locale)
    }

    /// Number of messages stored for a locale.
    pub fn message_count(&self, locale: &Locale) -> usize {
        self.entries.get(locale).map(|t| t.len()).unwrap_or(0)
    }

    /// Report coverage of every locale against a declared key set.
    pub fn coverage(&self, keys: &[&str]) -> Vec<Coverage> {
        self.entries
            .iter()
            .map(|(locale, table)| {
                let missing: Vec<String> = keys
                    .iter()
                    .filter(|k| !table.contains_key(**k))
                    .map(|k| k.to_string())
                    .collect();

                let mut unknown: Vec<String> = table
                    .keys()
                    .filter(|k| !keys.contains(&k.as_str()))
                    .cloned()
                    .collect();
                unknown.sort();

                Coverage {
                    locale: locale.clone(),
                    total: keys.len(),
                    missing,
                    unknown,
                }
            })
            .collect()
    }
}

impl LocaleCatalog for Catalog {
    fn lookup(&self, key: &str, locale: &Locale) -> Option<&Message> {
        self.entries.get(locale).and_then(|table| table.get(key))
    }

    fn locales(&self) -> Vec<Locale> {
        self.entries.keys().cloned().collect()
    }
}

/// Parse a flat key/message map in the given format.
fn parse_messages(content: &str, ext: &str) -> Result<BTreeMap<String, String>, String> {
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    match ext {
        "json" => serde_json::from_str(content).map_err(|e| e.to_string()),
        _ => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Errors that can occur when loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to read catalog {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse catalog {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Catalog file name is not a locale: {path}: {source}")]
    InvalidLocale {
        path: String,
        #[source]
        source: LocaleError,
    },

    #[error("Locale {0} is defined by more than one catalog file")]
    DuplicateLocale(String),
}
