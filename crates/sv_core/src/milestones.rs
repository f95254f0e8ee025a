//! Streak milestone configuration.
//!
//! Milestones are single-day trigger points: a streak value matches by
//! equality, not by threshold, so a user whose first check after day 7 lands
//! on day 8 does not retroactively collect the day-7 bonus.

/// Event type tag recorded on every milestone bonus. Together with the
/// synthesized description it forms the per-(user, milestone) idempotency
/// key.
pub const STREAK_MILESTONE_EVENT: &str = "streak_milestone";

/// One row of the static milestone table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakMilestone {
    pub streak_length: u32,
    pub xp_reward: i64,
    pub message: &'static str,
}

impl StreakMilestone {
    /// Idempotency-key description recorded on the bonus event.
    pub fn description(&self) -> String {
        format!("{}-day streak", self.streak_length)
    }

    /// Celebration line handed back to the caller on a fresh award.
    pub fn celebration(&self) -> String {
        format!("🔥 {} +{} XP", self.message, self.xp_reward)
    }
}

/// Static milestone table, strictly increasing in streak length.
pub const STREAK_MILESTONES: &[StreakMilestone] = &[
    StreakMilestone {
        streak_length: 3,
        xp_reward: 10,
        message: "Three days in a row! You're building momentum.",
    },
    StreakMilestone {
        streak_length: 7,
        xp_reward: 25,
        message: "A full week of showing up. Keep it going!",
    },
    StreakMilestone {
        streak_length: 14,
        xp_reward: 50,
        message: "Two weeks strong. This is becoming a habit.",
    },
    StreakMilestone {
        streak_length: 30,
        xp_reward: 100,
        message: "Thirty days straight. Seriously impressive.",
    },
    StreakMilestone {
        streak_length: 60,
        xp_reward: 250,
        message: "Two months without missing a beat.",
    },
    StreakMilestone {
        streak_length: 90,
        xp_reward: 500,
        message: "Ninety days of consistency. You're unstoppable.",
    },
    StreakMilestone {
        streak_length: 180,
        xp_reward: 1000,
        message: "Half a year, every single day. Remarkable.",
    },
    StreakMilestone {
        streak_length: 365,
        xp_reward: 2500,
        message: "A full year. Legendary dedication.",
    },
];

/// Exact-match lookup; `None` for a non-milestone streak value.
pub fn milestone_for(streak_length: u32) -> Option<&'static StreakMilestone> {
    STREAK_MILESTONES.iter().find(|m| m.streak_length == streak_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_strictly_increasing() {
        for pair in STREAK_MILESTONES.windows(2) {
            assert!(pair[0].streak_length < pair[1].streak_length);
            assert!(pair[0].xp_reward < pair[1].xp_reward);
        }
    }

    #[test]
    fn test_rewards_positive() {
        for milestone in STREAK_MILESTONES {
            assert!(milestone.xp_reward > 0);
        }
    }

    #[test]
    fn test_exact_match_lookup() {
        assert_eq!(milestone_for(3).unwrap().xp_reward, 10);
        assert_eq!(milestone_for(7).unwrap().xp_reward, 25);
        assert_eq!(milestone_for(365).unwrap().xp_reward, 2500);

        // Near misses are not milestones
        assert!(milestone_for(0).is_none());
        assert!(milestone_for(4).is_none());
        assert!(milestone_for(8).is_none());
        assert!(milestone_for(366).is_none());
    }

    #[test]
    fn test_description_format() {
        assert_eq!(milestone_for(7).unwrap().description(), "7-day streak");
        assert_eq!(milestone_for(180).unwrap().description(), "180-day streak");
    }

    #[test]
    fn test_celebration_names_reward() {
        let line = milestone_for(30).unwrap().celebration();
        assert!(line.contains("+100 XP"));
    }
}
