//! Working vehicle list ("the garage").
//!
//! Session scratch state, not an archive: entries are appended by
//! `vx add`, removed individually by id, or wiped wholesale by
//! `vx clear`. A record is never mutated after creation.

use crate::config::GARAGE_FILE;
use crate::error::{Error, Result};
use crate::model::Vehicle;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Store for the working vehicle list.
#[derive(Debug)]
pub struct Garage {
    path: PathBuf,
}

impl Garage {
    /// Open the garage inside the given data directory.
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(GARAGE_FILE),
        }
    }

    /// Load the current list, or empty when nothing (or nothing
    /// readable) is stored.
    #[must_use]
    pub fn load(&self) -> Vec<Vehicle> {
        super::read_list(&self.path)
    }

    /// Append a record and persist the full list.
    pub fn append(&self, vehicle: Vehicle) -> Result<()> {
        let mut vehicles = self.load();
        debug!(id = %vehicle.id, model = %vehicle.model, "Appending vehicle");
        vehicles.push(vehicle);
        super::write_list(&self.path, &vehicles)
    }

    /// Find one record by id or unambiguous id prefix, without
    /// touching the list.
    pub fn find(&self, id: &str) -> Result<Vehicle> {
        let vehicles = self.load();
        let pos = resolve_id(&vehicles, id)?;
        Ok(vehicles[pos].clone())
    }

    /// Remove one record by id or unambiguous id prefix.
    ///
    /// Returns the removed record. Unknown ids and ambiguous prefixes
    /// are errors; the list is untouched in both cases.
    pub fn remove(&self, id: &str) -> Result<Vehicle> {
        let mut vehicles = self.load();
        let pos = resolve_id(&vehicles, id)?;

        let removed = vehicles.remove(pos);
        super::write_list(&self.path, &vehicles)?;
        Ok(removed)
    }

    /// Wipe the garage. Idempotent: clearing an empty garage is fine.
    ///
    /// Returns how many records were dropped.
    pub fn clear(&self) -> Result<usize> {
        let count = self.load().len();
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        debug!(count, "Garage cleared");
        Ok(count)
    }
}

/// Resolve an id or id prefix to a list position.
///
/// An exact match wins outright; otherwise a prefix must match exactly
/// one record.
fn resolve_id(vehicles: &[Vehicle], id: &str) -> Result<usize> {
    if let Some(pos) = vehicles.iter().position(|v| v.id == id) {
        return Ok(pos);
    }

    let matches: Vec<usize> = vehicles
        .iter()
        .enumerate()
        .filter(|(_, v)| v.id.starts_with(id))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [] => Err(Error::VehicleNotFound {
            id: id.to_string(),
            available: vehicles.iter().map(|v| v.id.clone()).collect(),
        }),
        [single] => Ok(*single),
        many => Err(Error::AmbiguousVehicleId {
            id: id.to_string(),
            matches: many.iter().map(|&i| vehicles[i].id.clone()).collect(),
        }),
    }
}
