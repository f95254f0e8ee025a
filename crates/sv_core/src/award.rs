//! Award orchestration over the ledger collaborator.

use crate::error::{Result, XpError};
use crate::ledger::{EventId, LedgerAccessor, StoreError, XpAward};
use crate::leveling::{compute_level, LevelState};
use crate::milestones::{milestone_for, STREAK_MILESTONE_EVENT};

/// Outcome of a streak milestone check.
///
/// The zero shape (`xp_awarded == 0`, no message) covers three cases the
/// caller treats identically: the streak value is not a milestone, the bonus
/// was already granted, or the ledger failed and the check degraded to a
/// no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneResult {
    pub xp_awarded: i64,
    pub message: Option<String>,
}

impl MilestoneResult {
    pub fn none() -> Self {
        Self { xp_awarded: 0, message: None }
    }
}

/// Orchestrates XP awards and derived reads against one ledger backend.
///
/// Holds no state beyond the backend handle; every read reflects the
/// ledger's current contents, with no local caching.
pub struct AwardCoordinator<L: LedgerAccessor> {
    ledger: L,
}

impl<L: LedgerAccessor> AwardCoordinator<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    /// Backend handle, for callers that need direct ledger access.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Record one XP award for a user.
    ///
    /// `amount` must be positive: totals are derived sums over the ledger
    /// and must never decrease. A ledger failure propagates to the caller
    /// unchanged; there is no retry and no compensating action, since this
    /// is a single external write.
    pub fn award_xp(
        &self,
        user_id: &str,
        amount: i64,
        event_type: &str,
        description: &str,
    ) -> Result<EventId> {
        if amount <= 0 {
            return Err(XpError::InvalidParameter(format!(
                "XP award amount must be positive, got {}",
                amount
            )));
        }
        let award = XpAward::new(
            user_id.to_string(),
            amount,
            event_type.to_string(),
            description.to_string(),
        );
        Ok(self.ledger.append(award)?)
    }

    /// Current XP total for a user, summed from the ledger on every call.
    pub fn total_xp(&self, user_id: &str) -> Result<i64> {
        Ok(self.ledger.sum_xp(user_id)?)
    }

    /// Derived level state for a user.
    ///
    /// Composed read: sum first, derive second. An award landing between the
    /// two steps shows up on the next call; that staleness is accepted.
    pub fn user_level(&self, user_id: &str) -> Result<LevelState> {
        compute_level(self.total_xp(user_id)?)
    }

    /// Award the bonus for `current_streak`, at most once per user and
    /// milestone.
    ///
    /// Best-effort by policy: a non-milestone streak value, an already
    /// granted bonus, and any ledger failure all come back as the zero
    /// result. Failures are logged and never surface to the caller; a
    /// missed celebration bonus is not worth failing the request that
    /// triggered the check.
    pub fn check_and_award_streak_milestone(
        &self,
        user_id: &str,
        current_streak: u32,
    ) -> MilestoneResult {
        let Some(milestone) = milestone_for(current_streak) else {
            return MilestoneResult::none();
        };
        let description = milestone.description();

        match self.ledger.find_event(user_id, STREAK_MILESTONE_EVENT, &description) {
            Ok(Some(_)) => return MilestoneResult::none(),
            Ok(None) => {}
            Err(err) => {
                log::warn!("milestone idempotency check failed for user {}: {}", user_id, err);
                return MilestoneResult::none();
            }
        }

        match self.award_xp(user_id, milestone.xp_reward, STREAK_MILESTONE_EVENT, &description) {
            Ok(_) => MilestoneResult {
                xp_awarded: milestone.xp_reward,
                message: Some(milestone.celebration()),
            },
            // A backend uniqueness constraint lost us the race to a
            // concurrent check; the bonus is already on the ledger.
            Err(XpError::Store(StoreError::Duplicate(_))) => {
                log::debug!("milestone {} already awarded to user {}", description, user_id);
                MilestoneResult::none()
            }
            Err(err) => {
                log::warn!("milestone award failed for user {}: {}", user_id, err);
                MilestoneResult::none()
            }
        }
    }
}
