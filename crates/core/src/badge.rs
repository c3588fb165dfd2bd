//! Badge model and the catalog of known badges.

use serde::{Deserialize, Serialize};
use crate::id::BadgeId;
use crate::Time;

/// Badge for completing the first lesson.
pub const FIRST_LESSON: &str = "first-lesson";
/// Badge for completing three lessons.
pub const GETTING_STARTED: &str = "getting-started";
/// Badge for completing six lessons.
pub const MASTERY: &str = "mastery";
/// Badge for a seven-day streak.
pub const WEEK_STREAK: &str = "week-streak";
/// Badge for a perfect quiz score.
pub const QUIZ_ACE: &str = "quiz-ace";
/// Badge for logging an eco action.
pub const ECO_ACTION: &str = "eco-action";
/// Badge for a first forum post.
pub const COMMUNITY_VOICE: &str = "community-voice";

/// Badge tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    /// Highest tier
    Gold,
    /// Middle tier
    Silver,
    /// Entry tier
    Bronze,
}

impl BadgeTier {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTier::Gold => "gold",
            BadgeTier::Silver => "silver",
            BadgeTier::Bronze => "bronze",
        }
    }
}

/// An awarded achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Catalog identifier
    pub id: BadgeId,

    /// Display name
    pub name: String,

    /// What the badge was awarded for
    pub description: String,

    /// Icon glyph
    pub icon: String,

    /// When it was earned
    pub earned_at: Time,

    /// Tier
    pub tier: BadgeTier,
}

/// A catalog entry: everything about a badge except when it was earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeTemplate {
    /// Catalog identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Description
    pub description: &'static str,
    /// Icon glyph
    pub icon: &'static str,
    /// Tier
    pub tier: BadgeTier,
}

impl BadgeTemplate {
    /// Award this badge at the given time.
    pub fn award(&self, earned_at: Time) -> Badge {
        Badge {
            id: BadgeId::new(self.id),
            name: self.name.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            earned_at,
            tier: self.tier,
        }
    }
}

const CATALOG: &[BadgeTemplate] = &[
    BadgeTemplate {
        id: FIRST_LESSON,
        name: "First Steps",
        description: "Completed your first climate lesson",
        icon: "🌱",
        tier: BadgeTier::Bronze,
    },
    BadgeTemplate {
        id: GETTING_STARTED,
        name: "Getting Started",
        description: "Completed three climate lessons",
        icon: "🌿",
        tier: BadgeTier::Silver,
    },
    BadgeTemplate {
        id: MASTERY,
        name: "Climate Master",
        description: "Completed six climate lessons",
        icon: "🌳",
        tier: BadgeTier::Gold,
    },
    BadgeTemplate {
        id: WEEK_STREAK,
        name: "Week Warrior",
        description: "Learned seven days in a row",
        icon: "🔥",
        tier: BadgeTier::Silver,
    },
    BadgeTemplate {
        id: QUIZ_ACE,
        name: "Quiz Ace",
        description: "Answered every question in a quiz correctly",
        icon: "🎯",
        tier: BadgeTier::Gold,
    },
    BadgeTemplate {
        id: ECO_ACTION,
        name: "Eco Hero",
        description: "Logged a real-world climate action",
        icon: "♻️",
        tier: BadgeTier::Bronze,
    },
    BadgeTemplate {
        id: COMMUNITY_VOICE,
        name: "Community Voice",
        description: "Started a discussion in the forum",
        icon: "💬",
        tier: BadgeTier::Bronze,
    },
];

/// All known badges, in display order.
pub fn catalog() -> &'static [BadgeTemplate] {
    CATALOG
}

/// Look up a catalog entry by identifier.
pub fn find_template(id: &str) -> Option<&'static BadgeTemplate> {
    CATALOG.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<_> = catalog().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_find_template() {
        let t = find_template(MASTERY).unwrap();
        assert_eq!(t.tier, BadgeTier::Gold);
        assert!(find_template("no-such-badge").is_none());
    }

    #[test]
    fn test_award_copies_template() {
        let badge = find_template(FIRST_LESSON).unwrap().award(fixed_now());
        assert_eq!(badge.id, FIRST_LESSON);
        assert_eq!(badge.tier, BadgeTier::Bronze);
        assert_eq!(badge.earned_at, fixed_now());
    }

    #[test]
    fn test_badge_json_shape() {
        let badge = find_template(GETTING_STARTED).unwrap().award(fixed_now());
        let json = serde_json::to_value(&badge).unwrap();
        assert_eq!(json["id"], "getting-started");
        assert_eq!(json["tier"], "silver");
        assert!(json.get("earnedAt").is_some());
    }
}
