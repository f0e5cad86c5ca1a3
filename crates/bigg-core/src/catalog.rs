//! The fixed, ordered menu of downloadable models.
//!
//! Keys are short ordinal strings ("1", "2", ...) shown to the user; values are
//! BiGG model identifiers. Order is insertion order so the menu is stable.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One selectable model: the key typed at the prompt and the BiGG id it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub key: String,
    pub model_id: String,
}

impl CatalogEntry {
    pub fn new(key: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            model_id: model_id.into(),
        }
    }
}

/// Built-in catalog used when the config does not supply one.
const BUILTIN: &[(&str, &str)] = &[("1", "iML1515"), ("2", "iJO1366")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCatalog {
    entries: Vec<CatalogEntry>,
}

impl ModelCatalog {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(k, id)| CatalogEntry::new(*k, *id))
                .collect(),
        }
    }

    /// Build a catalog from configured entries. Keys must be unique and non-empty.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        if entries.is_empty() {
            anyhow::bail!("catalog must contain at least one model");
        }
        let mut seen = HashSet::new();
        for e in &entries {
            let key = e.key.trim();
            if key.is_empty() {
                anyhow::bail!("catalog entry for '{}' has an empty key", e.model_id);
            }
            if !seen.insert(key.to_string()) {
                anyhow::bail!("duplicate catalog key '{}'", key);
            }
        }
        let entries = entries
            .into_iter()
            .map(|e| CatalogEntry::new(e.key.trim(), e.model_id))
            .collect();
        Ok(Self { entries })
    }

    /// Model id for `key`. Surrounding whitespace (e.g. the newline of a typed line) is ignored.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let key = key.trim();
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.model_id.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
