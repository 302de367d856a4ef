//! Delete command implementation.

use super::open_service;
use sheetdb_core::Config;

/// Runs the delete command.
pub fn run(config: &Config, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    open_service(config)?.delete(id)?;
    println!("Deleted student {id}");
    Ok(())
}
