//! Create command implementation.

use super::{open_service, StudentArgs, StudentView};
use sheetdb_core::Config;

/// Runs the create command.
pub fn run(config: &Config, args: StudentArgs) -> Result<(), Box<dyn std::error::Error>> {
    let created = open_service(config)?.create(args.into())?;
    println!("Created {}", StudentView::from(created).line());
    Ok(())
}
