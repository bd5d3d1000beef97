//! `area-form` CLI: validate common-area documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a full form document (stdin → stdout)
//! cat area.json | area-form validate
//!
//! # Validate only a weekly schedule from a file
//! area-form validate --schedule-only -i schedule.json
//!
//! # Print an empty form to start from
//! area-form template -o area.json
//! ```
//!
//! `validate` prints the error mapping as JSON and exits with status 0 when the
//! document is valid, 2 when it has validation errors, and 1 when it cannot be
//! read or parsed.

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use area_schedule::{CommonAreaData, ValidationErrors, WeekSchedule};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "area-form",
    version,
    about = "Validate common-area form and schedule documents"
)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a form (or schedule) JSON document
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Treat the input as a bare weekly schedule instead of a full form
        #[arg(long)]
        schedule_only: bool,
    },
    /// Print an empty document with one blank session per day
    Template {
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit only the weekly schedule
        #[arg(long)]
        schedule_only: bool,
    },
}

/// Exit status when the document parsed but has validation errors.
const EXIT_INVALID: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Commands::Validate {
            input,
            schedule_only,
        } => run_validate(input.as_deref(), schedule_only),
        Commands::Template {
            output,
            schedule_only,
        } => run_template(output.as_deref(), schedule_only).map(|()| 0),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run_validate(input: Option<&str>, schedule_only: bool) -> Result<u8> {
    let raw = read_input(input)?;

    let errors: ValidationErrors = if schedule_only {
        let schedule: WeekSchedule =
            serde_json::from_str(&raw).context("Failed to parse schedule JSON")?;
        area_schedule::validate(&schedule)
    } else {
        let data: CommonAreaData =
            serde_json::from_str(&raw).context("Failed to parse form JSON")?;
        area_schedule::validate_form(&data)
    };

    tracing::info!(errors = errors.len(), "validation finished");

    let pretty = serde_json::to_string_pretty(&errors)?;
    println!("{}", pretty);

    Ok(if errors.is_empty() { 0 } else { EXIT_INVALID })
}

fn run_template(output: Option<&str>, schedule_only: bool) -> Result<()> {
    let pretty = if schedule_only {
        serde_json::to_string_pretty(&WeekSchedule::empty())?
    } else {
        serde_json::to_string_pretty(&CommonAreaData::default())?
    };
    write_output(output, &pretty)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
