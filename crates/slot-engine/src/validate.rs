//! Booking request validation.
//!
//! Pure, fail-fast policy checks: the first violated rule wins and becomes
//! the single rejection reason. Checks run in a fixed order — structural,
//! temporal sanity, operating-hours containment, duration cap. Conflict
//! detection against existing bookings is deliberately NOT part of
//! validation; see [`crate::conflict`] for why it must happen at write time.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::localtime::seconds_since_local_midnight;
use crate::model::{BookingRequest, NormalizedBooking, Room, MAX_NOTE_CHARS, SECONDS_PER_DAY};

/// Machine-readable rejection tag, serialized snake_case for the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    InvalidFormat,
    InvalidRange,
    OutsideHours,
    DurationExceeded,
    AlreadyEnded,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            RejectReason::InvalidFormat => "invalid_format",
            RejectReason::InvalidRange => "invalid_range",
            RejectReason::OutsideHours => "outside_hours",
            RejectReason::DurationExceeded => "duration_exceeded",
            RejectReason::AlreadyEnded => "already_ended",
        };
        f.write_str(tag)
    }
}

/// Outcome of validating a booking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verdict {
    /// Request passed every check; carries the normalized payload.
    Accepted(NormalizedBooking),
    /// Request violated a policy; carries the first violation found.
    Rejected { reason: RejectReason },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Verdict::Accepted(_) => None,
            Verdict::Rejected { reason } => Some(*reason),
        }
    }
}

/// Validate a proposed booking against a room's policies.
///
/// Check order (first violation wins):
///
/// 1. structural — room id shape, parseable instants, note length;
/// 2. temporal sanity — `end > start`, and the booking has not already
///    ended (`end > now`; a booking already in progress is accepted);
/// 3. operating hours — both endpoints, projected to seconds since local
///    midnight in `tz`, land inside the room's window, honoring
///    midnight-crossing windows;
/// 4. duration — fractional hours within the room cap (or the global
///    default), boundary equality accepted.
///
/// Pure: `now` and `tz` are explicit inputs. Never panics; malformed input
/// yields `Rejected { reason: InvalidFormat }` rather than an error.
pub fn validate_booking(
    request: &BookingRequest,
    room: &Room,
    tz: Tz,
    now: DateTime<Utc>,
) -> Verdict {
    let rejected = |reason| Verdict::Rejected { reason };

    // 1. Structural checks on the untrusted payload.
    let room_id = request.room_id.trim();
    if room_id.is_empty() || !room_id.chars().all(is_id_char) {
        return rejected(RejectReason::InvalidFormat);
    }
    let (start, end) = match (
        parse_instant(&request.start_time),
        parse_instant(&request.end_time),
    ) {
        (Some(s), Some(e)) => (s, e),
        _ => return rejected(RejectReason::InvalidFormat),
    };
    let note = request.note.as_deref().unwrap_or("").trim();
    if note.chars().count() > MAX_NOTE_CHARS {
        return rejected(RejectReason::InvalidFormat);
    }

    // 2. Temporal sanity.
    if end <= start {
        return rejected(RejectReason::InvalidRange);
    }
    if end <= now {
        return rejected(RejectReason::AlreadyEnded);
    }

    // 3. Operating-hours containment, each endpoint on its own local day.
    if !within_hours(room, seconds_since_local_midnight(tz, start))
        || !within_hours(room, seconds_since_local_midnight(tz, end))
    {
        return rejected(RejectReason::OutsideHours);
    }

    // 4. Duration cap, equality accepted.
    let hours = (end - start).num_seconds() as f64 / 3600.0;
    if hours > room.max_hours() {
        return rejected(RejectReason::DurationExceeded);
    }

    Verdict::Accepted(NormalizedBooking {
        room_id: room_id.to_string(),
        start_time: start,
        end_time: end,
        note: note.to_string(),
    })
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Seconds-since-midnight containment test for one endpoint.
fn within_hours(room: &Room, secs: u32) -> bool {
    if room.is_always_open() {
        return true;
    }
    if room.crosses_midnight() {
        return secs >= room.start_time || secs <= room.end_time;
    }
    // An endpoint at exactly local midnight counts as 24:00 for a room that
    // closes at the end of the day.
    let secs = if secs == 0 && room.end_time == SECONDS_PER_DAY {
        SECONDS_PER_DAY
    } else {
        secs
    };
    secs >= room.start_time && secs <= room.end_time
}
