//! Progress engine errors.

use ecolearn_storage::StorageError;

/// Result alias for progress operations.
pub type Result<T> = std::result::Result<T, ProgressError>;

/// Errors surfaced by the progress tracker.
///
/// State transitions themselves never fail; only persistence and
/// configuration checks can.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// Configured UTC offset is outside +/-23:59
    #[error("invalid UTC offset: {0} minutes")]
    InvalidUtcOffset(i32),

    /// Reading or writing the progress record failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
