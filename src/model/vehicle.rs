//! Vehicle record model.
//!
//! A vehicle is one row of the generated `INSERT` statement: spawn name
//! (the internal model identifier), display label, price, and category.
//! Records are created by `vx add`, never mutated afterwards, and removed
//! by `vx remove` / `vx clear`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vehicle entry in the working garage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier, generated at creation time
    pub id: String,

    /// Display label (the `name` column)
    pub name: String,

    /// Spawn name / internal model identifier (the `model` column)
    pub model: String,

    /// Price, strictly positive
    pub price: f64,

    /// Category value (built-in, custom, or ad hoc)
    pub category: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Create a new record from already-validated fields.
    ///
    /// The spawn name is stored trimmed and lowercased, the label
    /// trimmed; callers validate before constructing (see
    /// [`crate::validate`]), so no partial record ever exists.
    #[must_use]
    pub fn new(model: &str, name: &str, price: f64, category: &str) -> Self {
        let id = format!("veh_{}", &uuid::Uuid::new_v4().to_string()[..12]);
        Self {
            id,
            name: name.trim().to_string(),
            model: model.trim().to_lowercase(),
            price,
            category: category.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vehicle_normalizes_fields() {
        let v = Vehicle::new("  Buccaneer2 ", " Buccaneer Custom ", 22000.0, "muscle");

        assert!(v.id.starts_with("veh_"));
        assert_eq!(v.model, "buccaneer2");
        assert_eq!(v.name, "Buccaneer Custom");
        assert_eq!(v.category, "muscle");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Vehicle::new("adder", "Adder", 1.0, "super");
        let b = Vehicle::new("adder", "Adder", 1.0, "super");
        assert_ne!(a.id, b.id);
    }
}
