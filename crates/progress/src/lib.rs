//! Progress Tracking
//!
//! Lesson completion, milestone badges, and daily streaks, persisted through
//! `ecolearn-storage`.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod milestones;
pub mod streak;
pub mod summary;
pub mod tracker;

pub use config::TrackerConfig;
pub use error::{ProgressError, Result};
pub use milestones::{Milestone, MILESTONES};
pub use streak::StreakChange;
pub use summary::CertificateSummary;
pub use tracker::{ProgressStore, ProgressTracker};
