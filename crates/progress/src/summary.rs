//! Flat summary record consumed by the certificate export.

use serde::{Deserialize, Serialize};
use ecolearn_core::UserProgress;

/// Everything the certificate needs, flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSummary {
    /// Learner display name
    pub name: String,
    /// Total points
    pub points: u64,
    /// Badges held
    pub badge_count: usize,
    /// Distinct lessons completed
    pub lesson_count: usize,
    /// Current streak in days
    pub streak: u32,
    /// Real-world eco actions logged
    pub action_count: u32,
}

impl CertificateSummary {
    /// Build a summary from a progress record.
    ///
    /// Eco actions are tracked by the hosted service, so the caller supplies
    /// the count.
    pub fn from_progress(name: impl Into<String>, progress: &UserProgress, action_count: u32) -> Self {
        Self {
            name: name.into(),
            points: progress.points,
            badge_count: progress.badge_count(),
            lesson_count: progress.lesson_count(),
            streak: progress.streak,
            action_count,
        }
    }
}
