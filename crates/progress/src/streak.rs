//! Daily streak arithmetic.
//!
//! Streaks are counted in calendar days of a given time zone; the time of day
//! is discarded before comparing.

use chrono::TimeZone;
use ecolearn_core::Time;

/// What a streak update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Already active today
    Unchanged,
    /// Active yesterday; streak grew to the contained value
    Extended(u32),
    /// Gap, clock skew, or first activity; streak restarted at 1
    Reset,
}

/// Calendar days from `last` to `now` in `tz`. Negative if `now` is earlier.
pub fn day_gap<Tz: TimeZone>(last: &Time, now: &Time, tz: &Tz) -> i64 {
    let last_day = last.with_timezone(tz).date_naive();
    let today = now.with_timezone(tz).date_naive();
    (today - last_day).num_days()
}

/// Decide how a streak of `current` days changes for activity at `now`.
pub fn evaluate<Tz: TimeZone>(
    current: u32,
    last_active: Option<&Time>,
    now: &Time,
    tz: &Tz,
) -> StreakChange {
    match last_active.map(|last| day_gap(last, now, tz)) {
        Some(0) => StreakChange::Unchanged,
        Some(1) => StreakChange::Extended(current.saturating_add(1)),
        _ => StreakChange::Reset,
    }
}
