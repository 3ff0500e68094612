//! `meetslot`: resolve meeting slots from a JSON schedule document.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve slots (stdin → stdout, JSON)
//! cat day.json | meetslot resolve
//!
//! # Read from a file, print one slot per line
//! meetslot resolve -i day.json --format text
//!
//! # Include how many optional attendees the slots accommodate
//! meetslot resolve -i day.json --explain
//!
//! # Validate a document without resolving it
//! meetslot check -i day.json
//! ```
//!
//! Set `RUST_LOG=meeting_resolver=debug` to see the optional-attendee search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_resolver::document::{resolution_to_json, slots_to_json};
use meeting_resolver::{query_report, validate_inputs, Resolution, ScheduleDocument};
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "meetslot",
    version,
    about = "Find the times in a day when a meeting can be held"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the slots where the requested meeting fits
    Resolve {
        /// Input schedule document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Also report optional-attendee outcome
        #[arg(long)]
        explain: bool,
    },
    /// Validate a schedule document without resolving it
    Check {
        /// Input schedule document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            input,
            output,
            format,
            explain,
        } => {
            let doc = read_document(input.as_deref())?;
            let resolution =
                query_report(&doc.events, &doc.request).context("Failed to resolve meeting slots")?;
            tracing::info!(slots = resolution.slots.len(), "resolved meeting slots");

            let rendered = match format {
                OutputFormat::Json if explain => resolution_to_json(&resolution)?,
                OutputFormat::Json => slots_to_json(&resolution.slots)?,
                OutputFormat::Text => render_text(&resolution, explain),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input } => {
            let doc = read_document(input.as_deref())?;
            validate_inputs(&doc.events, &doc.request).context("Invalid schedule document")?;
            println!(
                "ok: {} events, {} mandatory, {} optional attendees",
                doc.events.len(),
                doc.request.attendees.len(),
                doc.request.optional_attendees.len()
            );
        }
    }

    Ok(())
}

/// One slot per line, e.g. `09:00-10:00 (60 min)`.
fn render_text(resolution: &Resolution, explain: bool) -> String {
    let mut lines: Vec<String> = if resolution.slots.is_empty() {
        vec!["no available slots".to_string()]
    } else {
        resolution
            .slots
            .iter()
            .map(|slot| {
                format!(
                    "{}-{} ({} min)",
                    meeting_resolver::clock::format_time_of_day(slot.start),
                    meeting_resolver::clock::format_time_of_day(slot.end()),
                    slot.duration
                )
            })
            .collect()
    };

    if explain {
        lines.push(format!(
            "optional attendees accommodated: {}",
            resolution.optional_attendees_accommodated
        ));
        if !resolution.pruned_optional_attendees.is_empty() {
            lines.push(format!(
                "unavailable optional attendees: {}",
                resolution.pruned_optional_attendees.join(", ")
            ));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn read_document(path: Option<&str>) -> Result<ScheduleDocument> {
    let json = read_input(path)?;
    ScheduleDocument::from_json(&json).context("Failed to parse schedule document")
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
            print!("{}", content);
        }
    }
    Ok(())
}
