//! SheetDB CLI
//!
//! Command-line access to the student sheet of a SheetDB data directory.
//!
//! # Commands
//!
//! - `list` - List students, optionally for one school
//! - `get` - Show one student
//! - `create` / `update` / `delete` - Change students (refused with `--read-only`)
//! - `inspect` - Show how the sheet's columns map to the entity

mod commands;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use commands::StudentArgs;
use sheetdb_core::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// SheetDB command-line tools.
#[derive(Parser)]
#[command(name = "sheetdb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the sheet files
    #[arg(global = true, short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Refuse every command that would change a sheet
    #[arg(global = true, long)]
    read_only: bool,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List students
    List {
        /// Only students of this school
        #[arg(short, long)]
        school_id: Option<i64>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show one student
    Get {
        /// Student ID
        id: i64,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Add a student
    Create {
        /// Requested ID; replaced if unset or already taken
        #[arg(long, default_value = "0")]
        id: i64,

        #[command(flatten)]
        student: StudentFields,
    },

    /// Replace a student's fields
    Update {
        /// Student ID
        id: i64,

        #[command(flatten)]
        student: StudentFields,
    },

    /// Remove a student
    Delete {
        /// Student ID
        id: i64,
    },

    /// Show the sheet's column layout
    Inspect {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct StudentFields {
    /// Full name
    #[arg(long)]
    name: String,

    /// Phone number
    #[arg(long)]
    phone: String,

    /// Email address
    #[arg(long)]
    email: Option<String>,

    /// Age in years
    #[arg(long)]
    age: i32,

    /// Date of birth, e.g. 2005-03-01
    #[arg(long, value_parser = parse_date)]
    date_of_birth: NaiveDate,

    /// Owning school ID
    #[arg(long)]
    school_id: i64,
}

impl StudentFields {
    fn into_args(self, id: i64) -> StudentArgs {
        StudentArgs {
            id,
            name: self.name,
            phone_number: self.phone,
            email: self.email,
            age: self.age,
            date_of_birth: self.date_of_birth,
            school_id: self.school_id,
        }
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, String> {
    sheetdb_codec::parse_date(text).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new(&cli.data_dir).create_if_missing(!cli.read_only);

    match cli.command {
        Commands::List { school_id, format } => {
            commands::list::run(&config, school_id, &format)?;
        }
        Commands::Get { id, format } => {
            commands::get::run(&config, id, &format)?;
        }
        Commands::Create { id, student } => {
            commands::ensure_writable(cli.read_only)?;
            commands::create::run(&config, student.into_args(id))?;
        }
        Commands::Update { id, student } => {
            commands::ensure_writable(cli.read_only)?;
            commands::update::run(&config, id, student.into_args(id))?;
        }
        Commands::Delete { id } => {
            commands::ensure_writable(cli.read_only)?;
            commands::delete::run(&config, id)?;
        }
        Commands::Inspect { format } => {
            commands::inspect::run(&config, &format)?;
        }
        Commands::Version => {
            println!("SheetDB CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("SheetDB Core v{}", sheetdb_core::VERSION);
        }
    }

    Ok(())
}
