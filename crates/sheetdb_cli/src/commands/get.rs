//! Get command implementation.

use super::{open_service, print_json, StudentView};
use sheetdb_core::Config;

/// Runs the get command.
pub fn run(config: &Config, id: i64, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let view = StudentView::from(open_service(config)?.get(id)?);

    match format {
        "json" => print_json(&view)?,
        _ => println!("{}", view.line()),
    }

    Ok(())
}
