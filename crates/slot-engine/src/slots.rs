//! Slot generation — renders a room's bookable 30-minute grid for one date.
//!
//! Walks the operating window in fixed 30-minute steps starting at the room's
//! opening offset (which need not sit on the hour), anchored to the requested
//! date in the room's local timezone. Windows that cross midnight extend the
//! closing boundary by a day, so trailing slots land on the next calendar
//! date in correct chronological order. A final slot narrower than 30 minutes
//! is never emitted.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::{EngineError, Result};
use crate::localtime::resolve_local;
use crate::model::{Booking, Room, Slot, SECONDS_PER_DAY, SLOT_MINUTES};

const MINUTES_PER_DAY: i64 = 1_440;

/// Generate the ordered candidate slots for `room` on `date`.
///
/// Pure and deterministic: the reference instant `now` is an explicit input,
/// never the process clock. Each slot carries:
///
/// - `occupied` — overlaps a non-cancelled booking for this room
///   (`slot_start < booking_end && slot_end > booking_start`);
/// - `past` — the slot's end is at or before `now`;
/// - `available` — `!occupied && !past`.
///
/// # Errors
/// Returns [`EngineError::InvalidOperatingHours`] when the room's operating
/// seconds fall outside `[0, 86400]`.
pub fn generate_slots(
    room: &Room,
    date: NaiveDate,
    tz: Tz,
    bookings: &[Booking],
    now: DateTime<Utc>,
) -> Result<Vec<Slot>> {
    if room.start_time >= SECONDS_PER_DAY || room.end_time > SECONDS_PER_DAY {
        return Err(EngineError::InvalidOperatingHours(format!(
            "startTime={} endTime={} out of range for room {}",
            room.start_time, room.end_time, room.id
        )));
    }

    let open_minutes = i64::from(room.start_time / 60);
    let mut close_minutes = i64::from(room.end_time / 60);
    // Closing at or before opening means the window wraps past midnight.
    if close_minutes <= open_minutes {
        close_minutes += MINUTES_PER_DAY;
    }

    let step = i64::from(SLOT_MINUTES);
    let mut slots = Vec::with_capacity(((close_minutes - open_minutes) / step) as usize);
    let mut offset = open_minutes;

    while offset + step <= close_minutes {
        let start = resolve_local(tz, local_at(date, offset));
        let end = resolve_local(tz, local_at(date, offset + step));

        let minute_of_day = offset % MINUTES_PER_DAY;
        let label = format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60);

        let hit = bookings
            .iter()
            .find(|b| b.room == room.id && b.blocks() && start < b.end_time && end > b.start_time);
        let occupied = hit.is_some();
        let past = end <= now;

        slots.push(Slot {
            start_time: start,
            end_time: end,
            label,
            available: !occupied && !past,
            occupied,
            past,
            booking_id: hit.map(|b| b.id.clone()),
        });

        offset += step;
    }

    Ok(slots)
}

/// Local wall-clock time at `minutes` past midnight on `date`.
/// Offsets past 1440 carry into the next calendar day.
fn local_at(date: NaiveDate, minutes: i64) -> chrono::NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::minutes(minutes)
}
