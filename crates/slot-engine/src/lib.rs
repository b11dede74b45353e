//! # slot-engine
//!
//! Deterministic meeting-room slot availability and booking validation.
//!
//! The engine is the pure core of a room-booking system: given a room's
//! operating hours, a calendar date, and a snapshot of existing bookings, it
//! computes the bookable 30-minute grid and validates new booking requests
//! against operating hours, duration caps, and temporal sanity. Persistence,
//! transport, and authentication live with the caller; the engine performs no
//! I/O and never reads the process clock — every time-dependent function
//! takes its reference instant and timezone as explicit inputs.
//!
//! ## Modules
//!
//! - [`slots`] — room + date + bookings → ordered 30-minute slot grid
//! - [`validate`] — booking request → `Accepted | Rejected(reason)` verdict
//! - [`conflict`] — candidate interval vs booking-snapshot overlap checks
//! - [`date`] — strict `YYYY-MM-DD` parsing
//! - [`localtime`] — wall-clock → UTC resolution policy
//! - [`ratelimit`] — fixed-window per-identifier request limiter
//! - [`model`] — `Room`, `Booking`, `Slot` and request/payload value objects
//! - [`error`] — error types

pub mod conflict;
pub mod date;
pub mod error;
pub mod localtime;
pub mod model;
pub mod ratelimit;
pub mod slots;
pub mod validate;

pub use conflict::{find_conflicts, would_conflict, Conflict};
pub use date::parse_date;
pub use error::EngineError;
pub use model::{
    Booking, BookingRequest, BookingStatus, NormalizedBooking, Room, Slot,
    DEFAULT_MAX_MEETING_HOURS, SLOT_MINUTES,
};
pub use ratelimit::RateLimiter;
pub use slots::generate_slots;
pub use validate::{validate_booking, RejectReason, Verdict};
