//! Inspect command implementation.

use super::print_json;
use serde::Serialize;
use sheetdb_core::student::Student;
use sheetdb_core::{Config, SheetInfo, Store};

/// Sheet inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Entity stored in the sheet.
    pub entity: &'static str,
    /// Sheet location.
    pub location: String,
    /// Header cells as stored.
    pub header: Vec<String>,
    /// Header cells that map to a field.
    pub mapped: Vec<String>,
    /// Header cells ignored on read and dropped on the next rewrite.
    pub unmapped: Vec<String>,
    /// Fields without a column; read as defaults.
    pub missing: Vec<String>,
    /// Number of data rows.
    pub rows: usize,
}

impl InspectResult {
    fn new(entity: &'static str, info: SheetInfo) -> Self {
        Self {
            entity,
            location: info.location,
            header: info.header,
            mapped: info.mapped,
            unmapped: info.unmapped,
            missing: info.missing,
            rows: info.rows,
        }
    }
}

/// Runs the inspect command.
pub fn run(config: &Config, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store: Store<Student> = Store::open(config)?;
    let result = InspectResult::new("Student", store.inspect()?);

    match format {
        "json" => print_json(&result)?,
        _ => print_text_output(&result),
    }

    Ok(())
}

fn print_text_output(result: &InspectResult) {
    println!("SheetDB Sheet Inspection");
    println!("========================");
    println!();
    println!("Entity:   {}", result.entity);
    println!("Location: {}", result.location);
    println!("Rows:     {}", result.rows);
    println!();
    println!("Columns:");
    println!("  Header:   {}", join(&result.header));
    println!("  Mapped:   {}", join(&result.mapped));
    println!("  Unmapped: {}", join(&result.unmapped));
    println!("  Missing:  {}", join(&result.missing));
}

fn join(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
