//! Wall-clock → UTC resolution policy.
//!
//! The engine constructs every slot boundary as a local wall-clock time in the
//! room's timezone and maps it to UTC here. One policy, applied everywhere
//! (slot boundaries, hour containment, labels):
//!
//! - unambiguous local times map directly;
//! - ambiguous local times (DST fall-back repeats an hour) take the earliest
//!   offset;
//! - nonexistent local times (DST spring-forward gap) shift forward minute by
//!   minute to the first valid instant.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Resolve a local wall-clock time to a UTC instant under the engine policy.
pub fn resolve_local(tz: Tz, local: NaiveDateTime) -> DateTime<Utc> {
    let mut candidate = local;
    loop {
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(dt) => return dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
            // DST gaps are at most an hour wide in practice, so this terminates.
            LocalResult::None => candidate += Duration::minutes(1),
        }
    }
}

/// Project a UTC instant to seconds since local midnight in `tz`.
pub fn seconds_since_local_midnight(tz: Tz, instant: DateTime<Utc>) -> u32 {
    use chrono::Timelike;
    instant.with_timezone(&tz).time().num_seconds_from_midnight()
}
