//! Lesson-count milestones and the badges they award.

use ecolearn_core::badge::{self, find_template, BadgeTemplate};
use ecolearn_core::{Badge, Time, UserProgress};

/// A completion-count threshold that awards a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    /// Exact number of distinct completed lessons
    pub lessons: usize,
    /// Catalog id of the awarded badge
    pub badge: &'static str,
}

impl Milestone {
    /// The catalog entry for this milestone's badge.
    pub fn template(&self) -> Option<&'static BadgeTemplate> {
        find_template(self.badge)
    }
}

/// Milestones, evaluated in this order.
pub const MILESTONES: &[Milestone] = &[
    Milestone { lessons: 1, badge: badge::FIRST_LESSON },
    Milestone { lessons: 3, badge: badge::GETTING_STARTED },
    Milestone { lessons: 6, badge: badge::MASTERY },
];

/// Badges `progress` has just earned at its current lesson count and does not
/// yet hold.
pub fn earned(progress: &UserProgress, now: Time) -> Vec<Badge> {
    let count = progress.lesson_count();
    MILESTONES
        .iter()
        .filter(|m| m.lessons == count && !progress.has_badge(m.badge))
        .filter_map(|m| m.template())
        .map(|t| t.award(now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecolearn_core::time::fixed_now;

    fn with_lessons(n: usize) -> UserProgress {
        let mut p = UserProgress::default();
        for i in 0..n {
            p.completed_lessons.push(format!("lesson-{}", i).into());
        }
        p
    }

    #[test]
    fn test_every_milestone_in_catalog() {
        for m in MILESTONES {
            assert!(m.template().is_some(), "missing catalog entry for {}", m.badge);
        }
    }

    #[test]
    fn test_thresholds() {
        let cases = [
            (0, None),
            (1, Some(badge::FIRST_LESSON)),
            (2, None),
            (3, Some(badge::GETTING_STARTED)),
            (4, None),
            (5, None),
            (6, Some(badge::MASTERY)),
            (7, None),
        ];
        for (n, expected) in cases {
            let got = earned(&with_lessons(n), fixed_now());
            let ids: Vec<_> = got.iter().map(|b| b.id.as_str()).collect();
            assert_eq!(ids, expected.into_iter().collect::<Vec<_>>(), "at {} lessons", n);
        }
    }

    #[test]
    fn test_held_badge_not_reawarded() {
        let mut p = with_lessons(3);
        p.badges.push(find_template(badge::GETTING_STARTED).unwrap().award(fixed_now()));
        assert!(earned(&p, fixed_now()).is_empty());
    }

    #[test]
    fn test_tiers() {
        assert_eq!(earned(&with_lessons(1), fixed_now())[0].tier, ecolearn_core::BadgeTier::Bronze);
        assert_eq!(earned(&with_lessons(3), fixed_now())[0].tier, ecolearn_core::BadgeTier::Silver);
        assert_eq!(earned(&with_lessons(6), fixed_now())[0].tier, ecolearn_core::BadgeTier::Gold);
    }
}
