//! `meeting-planner` CLI: find common free slots from a JSON schedule.
//!
//! ## Usage
//!
//! ```sh
//! # All slots of at least 30 units inside [0, 100] (stdin → stdout)
//! cat schedule.json | meeting-planner slots --duration 30 --start 0 --end 100
//!
//! # Only the earliest slot, as plain text
//! meeting-planner slots -i schedule.json -d 30 -s 0 -e 100 --first --format text
//!
//! # Merged busy timeline across everyone
//! meeting-planner busy -i schedule.json
//!
//! # Registered participants
//! meeting-planner participants -i schedule.json
//! ```
//!
//! Schedule format:
//!
//! ```json
//! {"participants":[{"id":1,"name":"Alice","busy":[{"start":0,"end":30}]}]}
//! ```

mod schedule;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_planner::{Interval, MeetingPlanner, Participant};
use schedule::ParticipantSummary;
use serde::Serialize;
use std::io::{self, Read};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meeting-planner",
    version,
    about = "Find common free meeting slots across participants"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level (otherwise RUST_LOG, default warn)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find free slots long enough for the meeting
    Slots {
        /// Schedule JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Meeting duration, in the schedule's time unit
        #[arg(short, long, allow_hyphen_values = true)]
        duration: i64,
        /// Window start
        #[arg(short, long, allow_hyphen_values = true)]
        start: i64,
        /// Window end
        #[arg(short, long, allow_hyphen_values = true)]
        end: i64,
        /// Print only the earliest slot
        #[arg(long)]
        first: bool,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print the merged busy timeline across all participants
    Busy {
        /// Schedule JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// List participants in schedule order
    Participants {
        /// Schedule JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty-printed JSON
    Json,
    /// One line per item
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Commands::Slots {
            input,
            duration,
            start,
            end,
            first,
            format,
        } => {
            let participants = load_participants(input.as_deref())?;
            let planner = planner_for(&participants);

            if first {
                let slot = planner
                    .find_first_slot(duration, start, end)
                    .context("Failed to find available slots")?;
                match format {
                    Format::Json => print_json(&slot)?,
                    Format::Text => print_intervals(slot.as_slice()),
                }
            } else {
                let slots = planner
                    .find_available_slots(duration, start, end)
                    .context("Failed to find available slots")?;
                match format {
                    Format::Json => print_json(&slots)?,
                    Format::Text => print_intervals(&slots),
                }
            }
        }
        Commands::Busy { input, format } => {
            let participants = load_participants(input.as_deref())?;
            let busy = planner_for(&participants).merged_busy();
            match format {
                Format::Json => print_json(&busy)?,
                Format::Text => print_intervals(&busy),
            }
        }
        Commands::Participants { input, format } => {
            let participants = load_participants(input.as_deref())?;
            let summaries: Vec<ParticipantSummary> =
                participants.iter().map(ParticipantSummary::from).collect();
            match format {
                Format::Json => print_json(&summaries)?,
                Format::Text => {
                    for s in &summaries {
                        println!("{}\t{}\t{} busy", s.id, s.name, s.busy_count);
                    }
                }
            }
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `--debug` wins over `RUST_LOG`.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_participants(path: Option<&str>) -> Result<Vec<Participant>> {
    let json = read_input(path)?;
    let participants = schedule::parse_participants(&json)?;
    tracing::debug!(count = participants.len(), "schedule loaded");
    Ok(participants)
}

fn planner_for(participants: &[Participant]) -> MeetingPlanner<'_> {
    let mut planner = MeetingPlanner::new();
    for p in participants {
        planner.add_participant(p);
    }
    planner
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

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", pretty);
    Ok(())
}

fn print_intervals(intervals: &[Interval]) {
    for interval in intervals {
        println!("{}-{}", interval.start(), interval.end());
    }
}
