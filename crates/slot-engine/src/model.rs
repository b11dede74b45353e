//! Value objects shared across the engine.
//!
//! `Room` and `Booking` mirror the records the caller fetches from its store;
//! `Slot` is derived and never persisted. All three are immutable values —
//! a slot points back at a room and (when occupied) a booking by id only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds in a day; `end_time == 86400` closes exactly at the following midnight.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Fixed slot width. Every candidate slot is exactly this long.
pub const SLOT_MINUTES: u32 = 30;

/// Maximum booking length when a room sets no `max_meeting_hours` of its own.
pub const DEFAULT_MAX_MEETING_HOURS: f64 = 8.0;

/// Longest accepted free-text note on a booking request, in characters.
pub const MAX_NOTE_CHARS: usize = 500;

/// A bookable room with a daily operating window.
///
/// `start_time` and `end_time` are seconds since local midnight. When
/// `end_time <= start_time` the window crosses midnight (e.g. 18:00 → 01:00
/// the next day); `start_time = 0, end_time = 86400` is a 24-hour room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Opaque store identifier, non-empty.
    pub id: String,
    pub capacity: u32,
    /// Opening time, seconds since local midnight, `0..86400`.
    pub start_time: u32,
    /// Closing time, seconds since local midnight, `0..=86400`.
    pub end_time: u32,
    /// Per-room duration cap in hours (fractional allowed). Falls back to
    /// [`DEFAULT_MAX_MEETING_HOURS`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_meeting_hours: Option<f64>,
}

impl Room {
    /// True iff the operating window wraps past midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time <= self.start_time && !self.is_always_open()
    }

    /// True for the `0..86400` all-day window.
    pub fn is_always_open(&self) -> bool {
        self.start_time == 0 && self.end_time == SECONDS_PER_DAY
    }

    /// Effective duration cap in hours.
    pub fn max_hours(&self) -> f64 {
        self.max_meeting_hours.unwrap_or(DEFAULT_MAX_MEETING_HOURS)
    }
}

/// Lifecycle state of a booking. Bookings are never edited in place; the only
/// mutation is the Confirmed → Cancelled transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A persisted booking record, as fetched from the external store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    /// Id of the room this booking belongs to.
    pub room: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
}

impl Booking {
    /// Cancelled bookings never occupy slots or conflict with candidates.
    pub fn blocks(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }
}

/// A derived 30-minute candidate interval with availability flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// `HH:MM` rendering of `start_time` in the room's local wall clock.
    pub label: String,
    /// `!occupied && !past`.
    pub available: bool,
    /// Overlaps a non-cancelled booking for this room.
    pub occupied: bool,
    /// Ends at or before the reference "now".
    pub past: bool,
    /// Id of the first overlapping booking, when occupied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
}

/// Raw, untrusted booking request as received from the caller layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub room_id: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// An accepted, normalized booking payload ready for the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBooking {
    pub room_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Trimmed note, `""` when the request carried none.
    pub note: String,
}
