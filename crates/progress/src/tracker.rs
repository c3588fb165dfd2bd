//! Progress tracking service.

use async_trait::async_trait;
use chrono::Local;
use ecolearn_core::{Badge, Clock, LessonId, UserProgress};
use ecolearn_storage::{load_json, save_json, Storage, StorageError};
use tracing::{debug, info, warn};

use crate::config::{TrackerConfig, POINTS_PER_LESSON};
use crate::error::Result;
use crate::milestones;
use crate::streak::{self, StreakChange};
use crate::summary::CertificateSummary;

/// The progress contract the presentation layer talks to.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Current progress record.
    fn progress(&self) -> &UserProgress;

    /// Mark a lesson complete. Returns the badges this call awarded; completing
    /// an already completed lesson changes nothing and returns an empty list.
    async fn complete_lesson(&mut self, lesson: LessonId) -> Result<Vec<Badge>>;

    /// Append a badge. No duplicate check.
    async fn add_badge(&mut self, badge: Badge) -> Result<()>;

    /// Record today's activity against the daily streak.
    async fn update_streak(&mut self) -> Result<StreakChange>;
}

/// Progress tracker persisting to a [`Storage`] after every mutation.
///
/// Mutations are applied in memory first. If the write that follows fails the
/// error is returned but the in-memory state keeps the change; the next
/// successful write persists it.
pub struct ProgressTracker<S: Storage> {
    storage: S,
    config: TrackerConfig,
    clock: Clock,
    state: UserProgress,
}

impl<S: Storage> ProgressTracker<S> {
    /// Load the tracker from storage using the system clock.
    pub async fn load(storage: S, config: TrackerConfig) -> Result<Self> {
        Self::load_with_clock(storage, config, Clock::default()).await
    }

    /// Load the tracker from storage with an explicit clock.
    ///
    /// A missing record starts from the default. An unparseable one is logged
    /// and also replaced by the default. I/O errors and an invalid
    /// configuration are returned.
    pub async fn load_with_clock(storage: S, config: TrackerConfig, clock: Clock) -> Result<Self> {
        config.validate()?;

        let state = match load_json::<UserProgress, _>(&storage, &config.storage_key).await {
            Ok(Some(state)) => {
                debug!(
                    "Loaded progress {}: {} lessons, {} badges",
                    config.storage_key,
                    state.lesson_count(),
                    state.badge_count()
                );
                state
            }
            Ok(None) => {
                debug!("No progress stored under {}, starting fresh", config.storage_key);
                UserProgress::default()
            }
            Err(StorageError::Json(e)) => {
                warn!("Discarding unreadable progress record {}: {}", config.storage_key, e);
                UserProgress::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            storage,
            config,
            clock,
            state,
        })
    }

    /// Tracker configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Clock the tracker reads time from.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Mutable access to the clock, for driving time in tests.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Summary for the certificate export.
    pub fn summary(&self, name: impl Into<String>, action_count: u32) -> CertificateSummary {
        CertificateSummary::from_progress(name, &self.state, action_count)
    }

    /// Give back the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    async fn persist(&mut self) -> Result<()> {
        save_json(&mut self.storage, &self.config.storage_key, &self.state).await?;
        Ok(())
    }
}

#[async_trait]
impl<S: Storage> ProgressStore for ProgressTracker<S> {
    fn progress(&self) -> &UserProgress {
        &self.state
    }

    async fn complete_lesson(&mut self, lesson: LessonId) -> Result<Vec<Badge>> {
        if self.state.has_completed(&lesson) {
            debug!("Lesson {} already completed", lesson);
            return Ok(Vec::new());
        }

        self.state.completed_lessons.push(lesson);
        self.state.points = self.state.points.saturating_add(POINTS_PER_LESSON);

        let awarded = milestones::earned(&self.state, self.clock.now());
        for badge in &awarded {
            info!("Awarded badge {} ({})", badge.id, badge.tier.as_str());
        }
        self.state.badges.extend(awarded.iter().cloned());

        self.persist().await?;
        Ok(awarded)
    }

    async fn add_badge(&mut self, badge: Badge) -> Result<()> {
        info!("Adding badge {}", badge.id);
        self.state.badges.push(badge);
        self.persist().await
    }

    async fn update_streak(&mut self) -> Result<StreakChange> {
        let now = self.clock.now();
        let last = self.state.last_active_date.as_ref();
        let change = match self.config.fixed_offset()? {
            Some(offset) => streak::evaluate(self.state.streak, last, &now, &offset),
            None => streak::evaluate(self.state.streak, last, &now, &Local),
        };

        match change {
            StreakChange::Unchanged => return Ok(change),
            StreakChange::Extended(days) => {
                info!("Streak extended to {} days", days);
                self.state.streak = days;
            }
            StreakChange::Reset => {
                info!("Streak reset (was {} days)", self.state.streak);
                self.state.streak = 1;
            }
        }
        self.state.last_active_date = Some(now);

        self.persist().await?;
        Ok(change)
    }
}
