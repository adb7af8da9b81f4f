//! Custom category store.
//!
//! One file, one serialized list of `{label, value}` pairs. The merge
//! logic (normalize, de-duplicate, append) lives here; the file layer
//! underneath knows nothing but "read list, write list".

use crate::config::CATEGORIES_FILE;
use crate::error::Result;
use crate::model::{builtin_categories, CategoryOption};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of a category add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryAdd {
    /// The option was appended and persisted.
    Added(CategoryOption),
    /// An option with the same value key already exists; nothing written.
    Exists(String),
}

/// Store for user-defined category options.
#[derive(Debug)]
pub struct CategoryStore {
    path: PathBuf,
}

impl CategoryStore {
    /// Open the store inside the given data directory.
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(CATEGORIES_FILE),
        }
    }

    /// Load the stored custom categories, or empty when nothing (or
    /// nothing readable) is stored.
    #[must_use]
    pub fn load(&self) -> Vec<CategoryOption> {
        super::read_list(&self.path)
    }

    /// Built-in plus custom categories, in that order.
    #[must_use]
    pub fn all(&self) -> Vec<CategoryOption> {
        let mut all = builtin_categories();
        all.extend(self.load());
        all
    }

    /// Add a custom category from a free-form label.
    ///
    /// The label is normalized into a value key; if that key already
    /// exists among built-ins or stored customs the insert is skipped.
    /// Otherwise the full updated list is persisted.
    pub fn add(&self, label: &str) -> Result<CategoryAdd> {
        let candidate = CategoryOption::from_label(label);

        if self.all().iter().any(|c| c.value == candidate.value) {
            debug!(value = %candidate.value, "Category already exists, skipping");
            return Ok(CategoryAdd::Exists(candidate.value));
        }

        let mut customs = self.load();
        customs.push(candidate.clone());
        super::write_list(&self.path, &customs)?;

        Ok(CategoryAdd::Added(candidate))
    }

    /// Remove a custom category by value key.
    ///
    /// Built-ins are not stored here and therefore cannot be removed.
    pub fn remove(&self, value: &str) -> Result<CategoryOption> {
        let mut customs = self.load();
        let Some(pos) = customs.iter().position(|c| c.value == value) else {
            return Err(crate::Error::CategoryNotFound {
                value: value.to_string(),
            });
        };

        let removed = customs.remove(pos);
        super::write_list(&self.path, &customs)?;
        Ok(removed)
    }
}
