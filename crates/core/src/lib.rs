//! EcoLearn core data models.
//!
//! This crate defines the learner progress record, the badge catalog, and
//! the small helpers (clock, quiz shuffling) the progress engine builds on.

#![warn(missing_docs)]

// Identities
mod id;

// Progress & badges
pub mod badge;
mod progress;

// Lessons
pub mod quiz;

// Support
mod error;
pub mod time;

// Re-exports
pub use id::{BadgeId, LessonId};
pub use badge::{Badge, BadgeTier, BadgeTemplate};
pub use progress::UserProgress;
pub use quiz::QuizQuestion;
pub use error::{Error, Result};
pub use time::Clock;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
