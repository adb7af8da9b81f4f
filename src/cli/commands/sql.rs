//! SQL command implementation.
//!
//! Generates the `INSERT` statement from the garage and exposes it on
//! the three output surfaces: stdout (default, keyword-highlighted on
//! a terminal), the system clipboard (`--copy`), and a file (`--out`).

use crate::config::resolve_data_dir;
use crate::error::{Error, Result};
use crate::sql::{generate_insert, highlight};
use crate::storage::Garage;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Output for the sql command.
#[derive(Serialize)]
struct SqlOutput<'a> {
    sql: &'a str,
    count: usize,
}

/// Clipboard helpers to try, in order. The first one that spawns and
/// exits cleanly wins.
const CLIPBOARD_HELPERS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

/// Execute the sql command.
///
/// An empty garage is a user error: generation itself would just
/// produce an empty string, which is never useful output here.
pub fn execute(
    copy: bool,
    out: Option<&PathBuf>,
    data_dir: Option<&PathBuf>,
    json: bool,
) -> Result<()> {
    let data_dir = resolve_data_dir(data_dir.map(PathBuf::as_path))?;
    let garage = Garage::open(&data_dir);
    let vehicles = garage.load();

    if vehicles.is_empty() {
        return Err(Error::EmptyGarage);
    }

    let sql = generate_insert(&vehicles);
    debug!(count = vehicles.len(), bytes = sql.len(), "Generated INSERT statement");

    if let Some(path) = out {
        if crate::is_dry_run() {
            println!("[dry-run] Would write {} bytes to {}", sql.len(), path.display());
        } else {
            std::fs::write(path, format!("{sql}\n"))?;
            if !crate::is_silent() {
                println!("Wrote {}-row statement to {}", vehicles.len(), path.display());
            }
        }
        return Ok(());
    }

    if copy {
        if crate::is_dry_run() {
            println!("[dry-run] Would copy {} bytes to the clipboard", sql.len());
        } else {
            let helper = copy_to_clipboard(&sql)?;
            if !crate::is_silent() {
                println!(
                    "Copied SQL for {} vehicles to the clipboard (via {helper})",
                    vehicles.len()
                );
            }
        }
        return Ok(());
    }

    if json {
        let output = SqlOutput {
            sql: &sql,
            count: vehicles.len(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", highlight(&sql));
    }

    Ok(())
}

/// Pipe text into the first working platform clipboard helper.
///
/// Returns the helper name. Failure (no helper present, or the helper
/// exits non-zero) is the share-action failure of the tool: a generic
/// error notice, no retry.
fn copy_to_clipboard(text: &str) -> Result<&'static str> {
    for &(helper, args) in CLIPBOARD_HELPERS {
        let spawned = Command::new(helper)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                debug!(helper, error = %e, "Clipboard helper not available");
                continue;
            }
        };

        let write_result = child
            .stdin
            .take()
            .ok_or_else(|| Error::Share(format!("{helper}: stdin unavailable")))
            .and_then(|mut stdin| {
                stdin.write_all(text.as_bytes()).map_err(Error::Io)
            });

        if let Err(e) = write_result {
            warn!(helper, error = %e, "Failed to write to clipboard helper");
            let _ = child.wait();
            continue;
        }

        match child.wait() {
            Ok(status) if status.success() => return Ok(helper),
            Ok(status) => {
                warn!(helper, %status, "Clipboard helper failed");
            }
            Err(e) => {
                warn!(helper, error = %e, "Clipboard helper did not exit cleanly");
            }
        }
    }

    Err(Error::Share(
        "no clipboard helper found (tried pbcopy, wl-copy, xclip, xsel, clip.exe)".to_string(),
    ))
}
