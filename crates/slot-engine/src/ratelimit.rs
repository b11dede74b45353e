//! Fixed-window request rate limiting keyed by identifier.
//!
//! Each identifier owns an independent (count, window start) pair. A window
//! resets once its age reaches the configured width; there is no sliding
//! behavior. The reference instant is an explicit parameter so the component
//! stays deterministic under test — the caller layer, which owns the
//! instance, supplies its clock.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    started_at: DateTime<Utc>,
}

/// Per-identifier fixed-window counter.
#[derive(Debug, Default)]
pub struct RateLimiter {
    windows: HashMap<String, Window>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one request for `identifier` and report whether it is allowed.
    ///
    /// Allows up to `max_requests` per window of `window` duration; the
    /// window for an identifier starts at its first request and resets once
    /// `now - started_at >= window`. Identifiers never affect each other.
    pub fn allow(
        &mut self,
        identifier: &str,
        max_requests: u32,
        window: Duration,
        now: DateTime<Utc>,
    ) -> bool {
        let entry = self
            .windows
            .entry(identifier.to_string())
            .or_insert(Window {
                count: 0,
                started_at: now,
            });

        if now - entry.started_at >= window {
            entry.count = 0;
            entry.started_at = now;
        }

        if entry.count < max_requests {
            entry.count += 1;
            true
        } else {
            false
        }
    }

    /// Drop windows whose reset instant has passed. Optional housekeeping so
    /// long-lived callers do not accumulate one entry per identifier forever.
    pub fn prune(&mut self, window: Duration, now: DateTime<Utc>) {
        self.windows.retain(|_, w| now - w.started_at < window);
    }
}
