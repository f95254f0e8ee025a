//! # sv_core - Gamified Productivity Progression Core
//!
//! Library core for the Striver productivity app: an append-only XP event
//! ledger abstraction, a non-uniform leveling curve, and idempotent streak
//! milestone bonuses.
//!
//! ## Features
//! - Total XP is always derived by summing the event ledger, never stored
//! - Non-uniform level curve: clearing level L costs (L + 1) * 100 XP
//! - At most one streak milestone bonus per (user, milestone) pair
//! - Milestone checking is best-effort: ledger failures degrade to a no-op

pub mod award;
pub mod error;
pub mod ledger;
pub mod leveling;
pub mod milestones;

// Re-export the coordinator and its result type
pub use award::{AwardCoordinator, MilestoneResult};

// Re-export the error taxonomy
pub use error::{Result, XpError};

// Re-export the ledger collaborator interface
pub use ledger::{EventId, InMemoryLedger, LedgerAccessor, StoreError, XpAward, XpEvent};

// Re-export level derivation
pub use leveling::{compute_level, LevelState};

// Re-export milestone configuration
pub use milestones::{milestone_for, StreakMilestone, STREAK_MILESTONES, STREAK_MILESTONE_EVENT};
