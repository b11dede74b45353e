//! Detect overlaps between a candidate interval and a booking snapshot.
//!
//! The engine only answers "would this candidate conflict with the bookings I
//! was handed" — it holds no lock and cannot prevent a race. Two concurrent
//! writers can both pass this check against stale snapshots ("time-of-check
//! to time-of-use"). The caller must re-run it against a freshly fetched
//! booking list immediately before the write, and the store itself is the
//! single linearization point that rejects the second overlapping writer.
//!
//! Adjacent bookings (one ends exactly when the other starts) are NOT
//! conflicts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Booking;

/// A detected overlap between a candidate interval and an existing booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// Id of the existing booking the candidate overlaps.
    pub booking_id: String,
    pub overlap_minutes: i64,
}

/// Find every non-cancelled booking for `room_id` that overlaps
/// `[start, end)`.
///
/// Two intervals overlap iff `start < b.end && b.start < end`, which
/// excludes the adjacent case. The overlap duration is
/// `min(end, b.end) - max(start, b.start)`.
pub fn find_conflicts(
    room_id: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    bookings: &[Booking],
) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for b in bookings {
        if b.room != room_id || !b.blocks() {
            continue;
        }
        if start < b.end_time && b.start_time < end {
            let overlap_start = start.max(b.start_time);
            let overlap_end = end.min(b.end_time);
            conflicts.push(Conflict {
                booking_id: b.id.clone(),
                overlap_minutes: (overlap_end - overlap_start).num_minutes(),
            });
        }
    }

    conflicts
}

/// True iff the candidate interval overlaps any non-cancelled booking for
/// the room in the given snapshot.
pub fn would_conflict(
    room_id: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    bookings: &[Booking],
) -> bool {
    bookings
        .iter()
        .any(|b| b.room == room_id && b.blocks() && start < b.end_time && b.start_time < end)
}
