//! `INSERT` statement generation.
//!
//! Renders the working garage into a single multi-row statement for the
//! FiveM `vehicles` shop table. This is the pure core of the tool: an
//! ordered slice of records in, one string out, no I/O.

use crate::model::Vehicle;
use colored::Colorize;

/// Target table of the generated statement.
pub const TABLE: &str = "vehicles";

/// Generate one multi-row `INSERT` statement from the given records.
///
/// Returns the empty string for an empty slice. Otherwise the output is
/// exactly one statement: a `VALUES` clause with one tab-indented row
/// per record in input order, rows comma-separated, a single trailing
/// semicolon. String fields are single-quoted with embedded quotes
/// doubled.
#[must_use]
pub fn generate_insert(vehicles: &[Vehicle]) -> String {
    if vehicles.is_empty() {
        return String::new();
    }

    let mut sql = format!("INSERT INTO `{TABLE}` (name, model, price, category) VALUES\n");

    let rows: Vec<String> = vehicles
        .iter()
        .map(|v| {
            format!(
                "\t('{}','{}',{},'{}')",
                escape(&v.name),
                escape(&v.model),
                format_price(v.price),
                escape(&v.category),
            )
        })
        .collect();

    sql.push_str(&rows.join(",\n"));
    sql.push(';');
    sql
}

/// Escape a string field for a single-quoted SQL literal.
fn escape(s: &str) -> String {
    s.replace('\'', "''")
}

/// Format a price the way it was entered: integral values print
/// without a fractional part.
fn format_price(price: f64) -> String {
    // f64 Display already drops a zero fraction (18000.0 -> "18000").
    format!("{price}")
}

/// Colorize SQL keywords, the table name, and the column list for
/// terminal display.
///
/// Column coloring targets the fixed header segment only, so row data
/// containing a column name stays untouched. Display-only: the plain
/// string from [`generate_insert`] is what gets copied or written out.
#[must_use]
pub fn highlight(sql: &str) -> String {
    if sql.is_empty() {
        return String::new();
    }

    sql.replace(
        "INSERT INTO",
        &"INSERT INTO".bright_blue().bold().to_string(),
    )
    .replace("VALUES", &"VALUES".bright_blue().bold().to_string())
    .replace(
        &format!("`{TABLE}`"),
        &format!("`{TABLE}`").bright_magenta().to_string(),
    )
    .replace(
        "(name, model, price, category)",
        &format!(
            "({}, {}, {}, {})",
            "name".bright_cyan(),
            "model".bright_cyan(),
            "price".bright_cyan(),
            "category".bright_cyan()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vehicle;

    fn vehicle(name: &str, model: &str, price: f64, category: &str) -> Vehicle {
        Vehicle::new(model, name, price, category)
    }

    #[test]
    fn test_empty_garage_generates_nothing() {
        assert_eq!(generate_insert(&[]), "");
    }

    #[test]
    fn test_single_vehicle_exact_output() {
        let vehicles = vec![vehicle("Buccaneer", "buccaneer", 18000.0, "muscle")];
        assert_eq!(
            generate_insert(&vehicles),
            "INSERT INTO `vehicles` (name, model, price, category) VALUES\n\t('Buccaneer','buccaneer',18000,'muscle');"
        );
    }

    #[test]
    fn test_two_vehicles_one_statement_in_order() {
        let vehicles = vec![
            vehicle("Buccaneer", "buccaneer", 18000.0, "muscle"),
            vehicle("Adder", "adder", 1000000.0, "super"),
        ];
        let sql = generate_insert(&vehicles);

        assert_eq!(sql.matches("INSERT").count(), 1);
        assert_eq!(
            sql,
            "INSERT INTO `vehicles` (name, model, price, category) VALUES\n\
             \t('Buccaneer','buccaneer',18000,'muscle'),\n\
             \t('Adder','adder',1000000,'super');"
        );
        assert_eq!(sql.matches(';').count(), 1);
        assert!(sql.ends_with(';'));
    }

    #[test]
    fn test_fractional_price_kept() {
        let vehicles = vec![vehicle("Bati", "bati", 15000.5, "motorcycle")];
        assert!(generate_insert(&vehicles).contains(",15000.5,"));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let vehicles = vec![vehicle("Benny's Special", "bennys", 42000.0, "lowrider")];
        let sql = generate_insert(&vehicles);
        assert!(sql.contains("('Benny''s Special','bennys',42000,'lowrider')"));
    }

    #[test]
    fn test_highlight_preserves_empty() {
        assert_eq!(highlight(""), "");
    }

    #[test]
    fn test_highlight_colors_header_but_not_row_data() {
        colored::control::set_override(true);
        // Row data deliberately echoes column names and keywords.
        let vehicles = vec![vehicle("Name", "values", 1.0, "category")];
        let out = highlight(&generate_insert(&vehicles));
        colored::control::unset_override();

        // Keywords and the column list carry escape codes.
        assert!(out.contains("\u{1b}["));
        let header = out.lines().next().unwrap();
        assert!(header.matches("\u{1b}[").count() >= 6);
        // The row itself stays byte-identical.
        assert!(out.contains("\t('Name','values',1,'category')"));
    }
}
