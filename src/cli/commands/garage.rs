//! Garage command implementations (add, list, remove, clear).

use crate::config::{ensure_data_dir, resolve_data_dir};
use crate::error::Result;
use crate::model::Vehicle;
use crate::storage::Garage;
use crate::validate::{parse_price, require_non_empty};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Output for the add command.
#[derive(Serialize)]
struct AddOutput<'a> {
    id: &'a str,
    name: &'a str,
    model: &'a str,
    price: f64,
    category: &'a str,
}

/// Output for the list command.
#[derive(Serialize)]
struct ListOutput {
    vehicles: Vec<Vehicle>,
    count: usize,
}

/// Output for remove/clear.
#[derive(Serialize)]
struct RemoveOutput {
    id: String,
    removed: bool,
}

#[derive(Serialize)]
struct ClearOutput {
    removed: usize,
}

/// Execute the add command.
///
/// All three free-form fields are validated before the record is
/// constructed; on any failure the garage is left untouched.
pub fn execute_add(
    model: &str,
    name: &str,
    price: &str,
    category: &str,
    data_dir: Option<&PathBuf>,
    json: bool,
) -> Result<()> {
    let model = require_non_empty("Spawn name (model)", model)?;
    let name = require_non_empty("Vehicle label (name)", name)?;
    let price = parse_price(price)?;

    let vehicle = Vehicle::new(&model, &name, price, category);
    debug!(id = %vehicle.id, model = %vehicle.model, category = %vehicle.category, "Adding vehicle");

    if crate::is_dry_run() {
        println!(
            "[dry-run] Would add: {} '{}' {} [{}]",
            vehicle.model, vehicle.name, vehicle.price, vehicle.category
        );
        return Ok(());
    }

    let data_dir = resolve_data_dir(data_dir.map(PathBuf::as_path))?;
    ensure_data_dir(&data_dir)?;
    let garage = Garage::open(&data_dir);
    garage.append(vehicle.clone())?;

    if crate::is_silent() {
        println!("{}", vehicle.id);
        return Ok(());
    }

    if json {
        let output = AddOutput {
            id: &vehicle.id,
            name: &vehicle.name,
            model: &vehicle.model,
            price: vehicle.price,
            category: &vehicle.category,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!(
            "Added: {} '{}' ${} [{}] ({})",
            vehicle.model.bold(),
            vehicle.name,
            vehicle.price,
            vehicle.category,
            vehicle.id.dimmed()
        );
    }

    Ok(())
}

/// Execute the list command.
pub fn execute_list(data_dir: Option<&PathBuf>, json: bool) -> Result<()> {
    let data_dir = resolve_data_dir(data_dir.map(PathBuf::as_path))?;
    let garage = Garage::open(&data_dir);
    let vehicles = garage.load();

    if crate::is_csv() {
        println!("id,model,name,price,category");
        for v in &vehicles {
            println!(
                "{},{},{},{},{}",
                v.id,
                crate::csv_escape(&v.model),
                crate::csv_escape(&v.name),
                v.price,
                crate::csv_escape(&v.category)
            );
        }
    } else if json {
        let output = ListOutput {
            count: vehicles.len(),
            vehicles,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else if vehicles.is_empty() {
        println!("No vehicles added yet.");
        println!("Add one: vx add <spawn-name> <display-label> <price>");
    } else {
        println!("Garage ({} vehicles):", vehicles.len());
        println!();
        for v in &vehicles {
            println!(
                "{}  {} '{}' ${} [{}]",
                v.id.dimmed(),
                v.model.bold(),
                v.name,
                v.price,
                v.category
            );
        }
    }

    Ok(())
}

/// Execute the remove command.
pub fn execute_remove(id: &str, data_dir: Option<&PathBuf>, json: bool) -> Result<()> {
    let data_dir = resolve_data_dir(data_dir.map(PathBuf::as_path))?;
    let garage = Garage::open(&data_dir);

    if crate::is_dry_run() {
        let target = garage.find(id)?;
        println!("[dry-run] Would remove: {} ({})", target.model, target.id);
        return Ok(());
    }

    let removed = garage.remove(id)?;

    if crate::is_silent() {
        println!("{}", removed.id);
        return Ok(());
    }

    if json {
        let output = RemoveOutput {
            id: removed.id,
            removed: true,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Removed: {} '{}' ({})", removed.model, removed.name, removed.id);
    }

    Ok(())
}

/// Execute the clear command.
pub fn execute_clear(data_dir: Option<&PathBuf>, json: bool) -> Result<()> {
    let data_dir = resolve_data_dir(data_dir.map(PathBuf::as_path))?;
    let garage = Garage::open(&data_dir);

    if crate::is_dry_run() {
        println!("[dry-run] Would remove {} vehicles", garage.load().len());
        return Ok(());
    }

    let removed = garage.clear()?;

    if json {
        println!("{}", serde_json::to_string(&ClearOutput { removed })?);
    } else if !crate::is_silent() {
        println!("Cleared {removed} vehicles from the garage.");
    }

    Ok(())
}
