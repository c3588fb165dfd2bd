//! Tracker configuration.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use crate::error::{ProgressError, Result};

/// Default storage key for the progress record.
pub const DEFAULT_STORAGE_KEY: &str = "ecolearn-progress";

/// Points awarded per newly completed lesson.
pub const POINTS_PER_LESSON: u64 = 100;

/// Largest accepted `utc_offset_minutes` magnitude (just under a day).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 23 * 60 + 59;

/// Configuration for a [`crate::ProgressTracker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Key the progress record is stored under
    pub storage_key: String,

    /// Offset from UTC, in minutes, for streak calendar days. `None` uses the
    /// system's local time zone.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            utc_offset_minutes: None,
        }
    }
}

impl TrackerConfig {
    /// Use a different storage key, e.g. one per learner.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Count streak days at a fixed UTC offset instead of local time.
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = Some(minutes);
        self
    }

    /// The configured fixed offset. `Ok(None)` means local time; an offset
    /// outside +/-23:59 is an error.
    pub fn fixed_offset(&self) -> Result<Option<FixedOffset>> {
        let Some(minutes) = self.utc_offset_minutes else {
            return Ok(None);
        };
        if minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES.unsigned_abs() {
            return Err(ProgressError::InvalidUtcOffset(minutes));
        }
        FixedOffset::east_opt(minutes * 60)
            .map(Some)
            .ok_or(ProgressError::InvalidUtcOffset(minutes))
    }

    /// Check the configuration before use.
    pub fn validate(&self) -> Result<()> {
        self.fixed_offset().map(|_| ())
    }
}
