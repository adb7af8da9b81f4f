//! Category command implementations (list, add, remove).

use crate::cli::CategoryCommands;
use crate::config::{ensure_data_dir, resolve_data_dir};
use crate::error::Result;
use crate::model::{normalize_value, CategoryOption, BUILTIN_CATEGORIES};
use crate::storage::{CategoryAdd, CategoryStore};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// One entry of the list output.
#[derive(Serialize)]
struct CategoryEntry {
    label: String,
    value: String,
    custom: bool,
}

#[derive(Serialize)]
struct ListOutput {
    categories: Vec<CategoryEntry>,
    count: usize,
}

#[derive(Serialize)]
struct AddOutput<'a> {
    label: &'a str,
    value: &'a str,
    added: bool,
}

#[derive(Serialize)]
struct RemoveOutput {
    value: String,
    removed: bool,
}

/// Execute a category subcommand.
pub fn execute(command: &CategoryCommands, data_dir: Option<&PathBuf>, json: bool) -> Result<()> {
    match command {
        CategoryCommands::List => execute_list(data_dir, json),
        CategoryCommands::Add { label } => execute_add(label, data_dir, json),
        CategoryCommands::Remove { value } => execute_remove(value, data_dir, json),
    }
}

fn execute_list(data_dir: Option<&PathBuf>, json: bool) -> Result<()> {
    let data_dir = resolve_data_dir(data_dir.map(PathBuf::as_path))?;
    let store = CategoryStore::open(&data_dir);

    let entries: Vec<CategoryEntry> = store
        .all()
        .into_iter()
        .map(|c| {
            let custom = !BUILTIN_CATEGORIES.iter().any(|&(_, v)| v == c.value);
            CategoryEntry {
                label: c.label,
                value: c.value,
                custom,
            }
        })
        .collect();

    if crate::is_csv() {
        println!("label,value,custom");
        for e in &entries {
            println!(
                "{},{},{}",
                crate::csv_escape(&e.label),
                e.value,
                e.custom
            );
        }
    } else if json {
        let output = ListOutput {
            count: entries.len(),
            categories: entries,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Categories ({}):", entries.len());
        println!();
        for e in &entries {
            if e.custom {
                println!("  {} ({})  {}", e.label, e.value, "custom".cyan());
            } else {
                println!("  {} ({})", e.label, e.value);
            }
        }
    }

    Ok(())
}

fn execute_add(label: &str, data_dir: Option<&PathBuf>, json: bool) -> Result<()> {
    if crate::is_dry_run() {
        let candidate = CategoryOption::from_label(label);
        println!(
            "[dry-run] Would add category: {} ({})",
            candidate.label, candidate.value
        );
        return Ok(());
    }

    let data_dir = resolve_data_dir(data_dir.map(PathBuf::as_path))?;
    ensure_data_dir(&data_dir)?;
    let store = CategoryStore::open(&data_dir);

    match store.add(label)? {
        CategoryAdd::Added(opt) => {
            debug!(value = %opt.value, "Custom category added");
            if crate::is_silent() {
                println!("{}", opt.value);
            } else if json {
                let output = AddOutput {
                    label: &opt.label,
                    value: &opt.value,
                    added: true,
                };
                println!("{}", serde_json::to_string(&output)?);
            } else {
                println!("Added category: {} ({})", opt.label, opt.value);
            }
        }
        // Duplicates are skipped, not an error: the normalized key
        // already exists somewhere in the combined set.
        CategoryAdd::Exists(value) => {
            if crate::is_silent() {
                println!("{value}");
            } else if json {
                let output = AddOutput {
                    label,
                    value: &value,
                    added: false,
                };
                println!("{}", serde_json::to_string(&output)?);
            } else {
                println!("Category already exists: {value}");
            }
        }
    }

    Ok(())
}

fn execute_remove(value: &str, data_dir: Option<&PathBuf>, json: bool) -> Result<()> {
    let data_dir = resolve_data_dir(data_dir.map(PathBuf::as_path))?;
    let store = CategoryStore::open(&data_dir);
    let value = normalize_value(value);

    if crate::is_dry_run() {
        println!("[dry-run] Would remove category: {value}");
        return Ok(());
    }

    let removed = store.remove(&value)?;

    if crate::is_silent() {
        println!("{}", removed.value);
    } else if json {
        let output = RemoveOutput {
            value: removed.value,
            removed: true,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Removed category: {} ({})", removed.label, removed.value);
    }

    Ok(())
}
