//! Update command implementation.

use super::{open_service, StudentArgs, StudentView};
use sheetdb_core::Config;

/// Runs the update command.
pub fn run(config: &Config, id: i64, args: StudentArgs) -> Result<(), Box<dyn std::error::Error>> {
    let updated = open_service(config)?.update(id, args.into())?;
    println!("Updated {}", StudentView::from(updated).line());
    Ok(())
}
