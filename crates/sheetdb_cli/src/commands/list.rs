//! List command implementation.

use super::{open_service, print_json, StudentView};
use sheetdb_core::Config;

/// Runs the list command.
pub fn run(
    config: &Config,
    school_id: Option<i64>,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let service = open_service(config)?;
    let students: Vec<StudentView> = service
        .list(school_id)?
        .into_iter()
        .map(StudentView::from)
        .collect();

    match format {
        "json" => print_json(&students)?,
        _ => {
            for student in &students {
                println!("{}", student.line());
            }
            println!("{} student(s)", students.len());
        }
    }

    Ok(())
}
