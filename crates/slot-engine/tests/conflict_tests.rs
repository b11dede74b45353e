//! Tests for candidate-vs-snapshot conflict detection.

use chrono::{DateTime, Utc};
use slot_engine::model::{Booking, BookingStatus};
use slot_engine::{find_conflicts, would_conflict};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn instant(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn booking(id: &str, room: &str, start: &str, end: &str) -> Booking {
    Booking {
        id: id.to_string(),
        room: room.to_string(),
        start_time: instant(start),
        end_time: instant(end),
        status: BookingStatus::Confirmed,
    }
}

// ── Overlap detection ───────────────────────────────────────────────────────

#[test]
fn overlapping_booking_is_a_conflict() {
    let snapshot = vec![booking(
        "bk-1",
        "rec-room-1",
        "2026-03-16T09:00:00Z",
        "2026-03-16T10:00:00Z",
    )];

    let conflicts = find_conflicts(
        "rec-room-1",
        instant("2026-03-16T09:30:00Z"),
        instant("2026-03-16T10:30:00Z"),
        &snapshot,
    );

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].booking_id, "bk-1");
    assert_eq!(conflicts[0].overlap_minutes, 30);
}

#[test]
fn adjacent_bookings_are_not_conflicts() {
    let snapshot = vec![booking(
        "bk-1",
        "rec-room-1",
        "2026-03-16T09:00:00Z",
        "2026-03-16T10:00:00Z",
    )];

    // Candidate starts exactly when the existing booking ends.
    assert!(!would_conflict(
        "rec-room-1",
        instant("2026-03-16T10:00:00Z"),
        instant("2026-03-16T11:00:00Z"),
        &snapshot,
    ));
    // And ends exactly when it starts.
    assert!(!would_conflict(
        "rec-room-1",
        instant("2026-03-16T08:00:00Z"),
        instant("2026-03-16T09:00:00Z"),
        &snapshot,
    ));
}

#[test]
fn candidate_contained_inside_existing_booking_conflicts() {
    let snapshot = vec![booking(
        "bk-1",
        "rec-room-1",
        "2026-03-16T09:00:00Z",
        "2026-03-16T12:00:00Z",
    )];

    let conflicts = find_conflicts(
        "rec-room-1",
        instant("2026-03-16T10:00:00Z"),
        instant("2026-03-16T10:30:00Z"),
        &snapshot,
    );

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].overlap_minutes, 30);
}

#[test]
fn cancelled_bookings_never_conflict() {
    let mut b = booking(
        "bk-1",
        "rec-room-1",
        "2026-03-16T09:00:00Z",
        "2026-03-16T10:00:00Z",
    );
    b.status = BookingStatus::Cancelled;

    assert!(!would_conflict(
        "rec-room-1",
        instant("2026-03-16T09:00:00Z"),
        instant("2026-03-16T10:00:00Z"),
        &[b],
    ));
}

#[test]
fn other_rooms_never_conflict() {
    let snapshot = vec![booking(
        "bk-1",
        "rec-room-2",
        "2026-03-16T09:00:00Z",
        "2026-03-16T10:00:00Z",
    )];

    assert!(!would_conflict(
        "rec-room-1",
        instant("2026-03-16T09:00:00Z"),
        instant("2026-03-16T10:00:00Z"),
        &snapshot,
    ));
}

#[test]
fn every_overlapping_booking_is_reported() {
    let snapshot = vec![
        booking(
            "bk-1",
            "rec-room-1",
            "2026-03-16T09:00:00Z",
            "2026-03-16T10:00:00Z",
        ),
        booking(
            "bk-2",
            "rec-room-1",
            "2026-03-16T10:30:00Z",
            "2026-03-16T11:30:00Z",
        ),
        booking(
            "bk-3",
            "rec-room-1",
            "2026-03-16T13:00:00Z",
            "2026-03-16T14:00:00Z",
        ),
    ];

    let conflicts = find_conflicts(
        "rec-room-1",
        instant("2026-03-16T09:30:00Z"),
        instant("2026-03-16T11:00:00Z"),
        &snapshot,
    );

    let ids: Vec<&str> = conflicts.iter().map(|c| c.booking_id.as_str()).collect();
    assert_eq!(ids, vec!["bk-1", "bk-2"]);
}
