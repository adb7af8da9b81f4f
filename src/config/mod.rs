//! Configuration management.
//!
//! Vexim keeps all state in a single per-user data directory:
//! - `garage.json` - the working vehicle list for the session
//! - `categories.json` - user-defined category options
//!
//! The directory resolves as `--data-dir` flag > `VX_DATA_DIR` env >
//! `~/.vexim/`. Stores create their files lazily, so no explicit init
//! step exists.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// File name of the working vehicle list.
pub const GARAGE_FILE: &str = "garage.json";

/// File name of the custom category list.
pub const CATEGORIES_FILE: &str = "categories.json";

/// Get the default per-user data directory (`~/.vexim/`).
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".vexim"))
}

/// Resolve the data directory from an optional explicit override.
///
/// The `--data-dir` flag (which also reads `VX_DATA_DIR` via clap)
/// wins; otherwise the home-anchored default is used.
pub fn resolve_data_dir(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    default_data_dir().ok_or_else(|| Error::Other("could not determine home directory".into()))
}

/// Ensure the data directory exists, creating it if needed.
pub fn ensure_data_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
