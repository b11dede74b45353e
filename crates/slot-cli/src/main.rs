//! `slots` CLI — render room availability and validate booking requests.
//!
//! ## Usage
//!
//! ```sh
//! # Render the 30-minute grid for a room on a date
//! slots availability --room room.json --date 2026-03-16 --timezone Europe/London
//!
//! # With an existing booking snapshot and a pinned reference instant
//! slots availability -r room.json -d 2026-03-16 -b bookings.json --now 2026-03-16T09:15:00Z
//!
//! # Validate a booking request (stdin → verdict JSON, exit 1 on rejection)
//! echo '{"roomId":"rec-room-1","startTime":"...","endTime":"..."}' | slots validate -r room.json
//!
//! # Check a candidate interval against a booking snapshot (exit 1 on conflict)
//! slots check -b bookings.json --room-id rec-room-1 \
//!     --start 2026-03-16T09:00:00Z --end 2026-03-16T10:00:00Z
//! ```
//!
//! The engine itself never reads the clock; `--now` defaults to the process
//! time here, at the boundary, and is forwarded as an explicit parameter.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use slot_engine::model::{Booking, BookingRequest, Room};
use slot_engine::{find_conflicts, generate_slots, validate_booking, EngineError};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(name = "slots", version, about = "Meeting-room slot availability CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the ordered 30-minute availability grid for a room on a date
    Availability {
        /// Room descriptor JSON file
        #[arg(short, long)]
        room: String,
        /// Date to render, strict YYYY-MM-DD
        #[arg(short, long)]
        date: String,
        /// IANA timezone the room's operating hours are anchored in
        #[arg(short, long, default_value = "UTC")]
        timezone: String,
        /// Booking snapshot JSON file (treated as empty if omitted)
        #[arg(short, long)]
        bookings: Option<String>,
        /// Reference instant, RFC 3339 (defaults to the current time)
        #[arg(long)]
        now: Option<String>,
    },
    /// Validate a booking request against a room's policies
    Validate {
        /// Room descriptor JSON file
        #[arg(short, long)]
        room: String,
        /// Request JSON file (reads from stdin if omitted)
        #[arg(long)]
        request: Option<String>,
        /// IANA timezone the room's operating hours are anchored in
        #[arg(short, long, default_value = "UTC")]
        timezone: String,
        /// Reference instant, RFC 3339 (defaults to the current time)
        #[arg(long)]
        now: Option<String>,
    },
    /// Check a candidate interval against a booking snapshot for overlaps
    Check {
        /// Booking snapshot JSON file
        #[arg(short, long)]
        bookings: String,
        /// Room the candidate targets
        #[arg(long)]
        room_id: String,
        /// Candidate start, RFC 3339
        #[arg(long)]
        start: String,
        /// Candidate end, RFC 3339
        #[arg(long)]
        end: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Availability {
            room,
            date,
            timezone,
            bookings,
            now,
        } => {
            let room: Room = read_json(&room)?;
            let date = slot_engine::parse_date(&date)?;
            let tz = parse_timezone(&timezone)?;
            let bookings: Vec<Booking> = match bookings {
                Some(path) => read_json(&path)?,
                None => Vec::new(),
            };
            let now = parse_now(now.as_deref())?;

            let slots = generate_slots(&room, date, tz, &bookings, now)?;
            println!("{}", serde_json::to_string_pretty(&slots)?);
        }
        Commands::Validate {
            room,
            request,
            timezone,
            now,
        } => {
            let room: Room = read_json(&room)?;
            let tz = parse_timezone(&timezone)?;
            let now = parse_now(now.as_deref())?;

            let raw = read_input(request.as_deref())?;
            let request: BookingRequest =
                serde_json::from_str(&raw).context("Failed to parse booking request")?;

            // The request must target the room we were handed.
            if request.room_id.trim() != room.id {
                return Err(EngineError::RoomNotFound(request.room_id.trim().to_string()).into());
            }

            let verdict = validate_booking(&request, &room, tz, now);
            println!("{}", serde_json::to_string_pretty(&verdict)?);
            if !verdict.is_accepted() {
                process::exit(1);
            }
        }
        Commands::Check {
            bookings,
            room_id,
            start,
            end,
        } => {
            let bookings: Vec<Booking> = read_json(&bookings)?;
            let start = parse_instant(&start)?;
            let end = parse_instant(&end)?;

            let conflicts = find_conflicts(&room_id, start, end, &bookings);
            println!("{}", serde_json::to_string_pretty(&conflicts)?);
            if !conflicts.is_empty() {
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Read and deserialize a JSON file.
fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {path}"))
}

/// Read from the given file, or from stdin when no path was provided.
fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("Failed to read input file {p}"))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn parse_timezone(raw: &str) -> Result<Tz> {
    raw.parse()
        .map_err(|_| EngineError::InvalidTimezone(raw.to_string()).into())
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("Invalid RFC 3339 instant: {raw}"))?
        .with_timezone(&Utc))
}

fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(s) => parse_instant(s),
        None => Ok(Utc::now()),
    }
}
