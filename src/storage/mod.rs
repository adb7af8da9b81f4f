//! JSON file stores.
//!
//! Both stores follow the same pattern: a single file holding one
//! serialized list, read whole and written whole. Reads swallow
//! missing or corrupt files (logged, treated as empty); writes go
//! through a temp file and atomic rename and do propagate errors,
//! since a mutating command must not report success it cannot back.

pub mod categories;
pub mod garage;

pub use categories::{CategoryAdd, CategoryStore};
pub use garage::Garage;

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Read a serialized list from `path`, defaulting to empty.
///
/// A missing file means "nothing stored yet"; an unreadable or
/// unparsable file is logged and treated the same way. Neither is an
/// error for the caller.
fn read_list<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    if !path.exists() {
        debug!(path = %path.display(), "Store file absent, starting empty");
        return Vec::new();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read store file");
            return Vec::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(list) => list,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to parse store file");
            Vec::new()
        }
    }
}

/// Write a full list to `path` via temp file + atomic rename.
///
/// The rename prevents partial reads if another invocation races us;
/// beyond that, last write wins.
fn write_list<T: Serialize>(path: &Path, list: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(list)?;
    let temp_path = path.with_extension("json.tmp");

    {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
    }
    fs::rename(&temp_path, path)?;

    debug!(path = %path.display(), "Store file written");
    Ok(())
}
