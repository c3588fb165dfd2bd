//! The learner's progress record.

use serde::{Deserialize, Serialize};
use crate::badge::Badge;
use crate::id::LessonId;
use crate::Time;

/// Local learning progress for one learner. Persisted as a single JSON record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    /// Completed lessons, in completion order, no duplicates
    pub completed_lessons: Vec<LessonId>,

    /// Earned badges, append-only
    pub badges: Vec<Badge>,

    /// Consecutive active days
    pub streak: u32,

    /// Most recent streak-qualifying activity
    pub last_active_date: Option<Time>,

    /// Total points
    pub points: u64,
}

impl UserProgress {
    /// Whether the lesson has been completed.
    pub fn has_completed(&self, lesson: &LessonId) -> bool {
        self.completed_lessons.contains(lesson)
    }

    /// Whether a badge with this identifier is held.
    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|b| b.id == id)
    }

    /// Number of distinct completed lessons.
    pub fn lesson_count(&self) -> usize {
        self.completed_lessons.len()
    }

    /// Number of badges held.
    pub fn badge_count(&self) -> usize {
        self.badges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::{find_template, FIRST_LESSON};
    use crate::time::fixed_now;

    #[test]
    fn test_default_is_zero() {
        let p = UserProgress::default();
        assert!(p.completed_lessons.is_empty());
        assert!(p.badges.is_empty());
        assert_eq!(p.streak, 0);
        assert_eq!(p.points, 0);
        assert!(p.last_active_date.is_none());
    }

    #[test]
    fn test_round_trip() {
        let progress = UserProgress {
            completed_lessons: vec!["carbon-cycle".into(), "sea-level".into()],
            badges: vec![find_template(FIRST_LESSON).unwrap().award(fixed_now())],
            streak: 4,
            last_active_date: Some(fixed_now()),
            points: 200,
        };

        let json = serde_json::to_string(&progress).unwrap();
        let back: UserProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, progress);
    }

    #[test]
    fn test_field_names_are_camel_case() {
        let json = serde_json::to_value(UserProgress::default()).unwrap();
        assert!(json.get("completedLessons").is_some());
        assert!(json.get("lastActiveDate").is_some());
    }

    #[test]
    fn test_queries() {
        let mut p = UserProgress::default();
        p.completed_lessons.push("a".into());
        p.badges.push(find_template(FIRST_LESSON).unwrap().award(fixed_now()));

        assert!(p.has_completed(&"a".into()));
        assert!(!p.has_completed(&"b".into()));
        assert!(p.has_badge(FIRST_LESSON));
        assert_eq!(p.lesson_count(), 1);
        assert_eq!(p.badge_count(), 1);
    }
}
