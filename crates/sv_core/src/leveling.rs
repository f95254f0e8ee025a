//! Level curve derivation.
//!
//! The curve is non-uniform: clearing level `L` (0-indexed) costs
//! `(L + 1) * 100` XP, so the cumulative XP needed to reach level `L` from
//! zero is the triangular sum `50 * L * (L + 1)`. Level state is recomputed
//! from the ledger total on every query and never stored.

use serde::{Deserialize, Serialize};

use crate::error::{Result, XpError};

/// Derived progression snapshot for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelState {
    pub level: u32,
    pub xp_in_current_level: i64,
    pub xp_to_next_level: i64,
    pub progress_percent: f32,
}

/// Cumulative XP required to reach `level` from zero.
fn xp_to_reach(level: i64) -> i128 {
    50 * level as i128 * (level as i128 + 1)
}

/// Derive the level state for a non-negative XP total.
///
/// Runs in O(1) regardless of the total: the level is the triangular inverse
/// of the total (float estimate corrected by at most a couple of integer
/// steps), so a billion-XP total costs the same as a hundred.
///
/// A negative total is a caller bug and fails with
/// [`XpError::InvalidParameter`] rather than clamping to zero.
pub fn compute_level(total_xp: i64) -> Result<LevelState> {
    if total_xp < 0 {
        return Err(XpError::InvalidParameter(format!(
            "total XP must be non-negative, got {}",
            total_xp
        )));
    }

    // Largest L with 50 * L * (L + 1) <= total, via the quadratic inverse.
    let estimate = ((total_xp as f64 / 50.0 + 0.25).sqrt() - 0.5).floor() as i64;
    let mut level = estimate.max(0);
    // f64 rounding can land one step off near a threshold
    while xp_to_reach(level + 1) <= total_xp as i128 {
        level += 1;
    }
    while level > 0 && xp_to_reach(level) > total_xp as i128 {
        level -= 1;
    }

    let xp_in_current_level = total_xp - xp_to_reach(level) as i64;
    let xp_to_next_level = (level + 1) * 100;
    // For large levels a near-full balance can round up to exactly 100 in
    // the f32 cast; the derived percent must stay strictly below it.
    let mut progress_percent =
        (100.0 * xp_in_current_level as f64 / xp_to_next_level as f64) as f32;
    if progress_percent >= 100.0 {
        progress_percent = 100.0f32.next_down();
    }

    Ok(LevelState {
        level: level as u32,
        xp_in_current_level,
        xp_to_next_level,
        progress_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Straight transcription of the subtract-and-loop definition, as a
    /// cross-check for the closed form.
    fn compute_level_iterative(total_xp: i64) -> LevelState {
        let mut level: i64 = 0;
        let mut remaining = total_xp;
        while remaining >= (level + 1) * 100 {
            remaining -= (level + 1) * 100;
            level += 1;
        }
        let xp_to_next_level = (level + 1) * 100;
        LevelState {
            level: level as u32,
            xp_in_current_level: remaining,
            xp_to_next_level,
            progress_percent: (100.0 * remaining as f64 / xp_to_next_level as f64) as f32,
        }
    }

    #[test]
    fn test_zero_total() {
        let state = compute_level(0).unwrap();
        assert_eq!(state.level, 0);
        assert_eq!(state.xp_in_current_level, 0);
        assert_eq!(state.xp_to_next_level, 100);
        assert_eq!(state.progress_percent, 0.0);
    }

    #[test]
    fn test_just_below_first_level() {
        let state = compute_level(99).unwrap();
        assert_eq!(state.level, 0);
        assert_eq!(state.xp_in_current_level, 99);
        assert_eq!(state.xp_to_next_level, 100);
        assert_eq!(state.progress_percent, 99.0);
    }

    #[test]
    fn test_exact_first_threshold() {
        let state = compute_level(100).unwrap();
        assert_eq!(state.level, 1);
        assert_eq!(state.xp_in_current_level, 0);
        assert_eq!(state.xp_to_next_level, 200);
        assert_eq!(state.progress_percent, 0.0);
    }

    #[test]
    fn test_mid_second_level() {
        // 100 consumed reaching level 1, 150 of the 200 toward level 2 remain
        let state = compute_level(250).unwrap();
        assert_eq!(state.level, 1);
        assert_eq!(state.xp_in_current_level, 150);
        assert_eq!(state.xp_to_next_level, 200);
        assert_eq!(state.progress_percent, 75.0);
    }

    #[test]
    fn test_exact_second_threshold() {
        let state = compute_level(300).unwrap();
        assert_eq!(state.level, 2);
        assert_eq!(state.xp_in_current_level, 0);
        assert_eq!(state.xp_to_next_level, 300);
    }

    #[test]
    fn test_negative_total_rejected() {
        assert!(matches!(compute_level(-1), Err(XpError::InvalidParameter(_))));
    }

    #[test]
    fn test_large_total_terminates() {
        let state = compute_level(1_000_000_007).unwrap();
        // 50 * 4471 * 4472 = 999_715_600 <= total < 50 * 4472 * 4473
        assert_eq!(state.level, 4471);
        assert_eq!(state.xp_in_current_level, 1_000_000_007 - 999_715_600);
        assert_eq!(state.xp_to_next_level, 447_200);
        assert!(state.xp_in_current_level < state.xp_to_next_level);
    }

    #[test]
    fn test_very_large_total_invariants() {
        let state = compute_level(1_000_000_000_000_000).unwrap();
        assert!(state.xp_in_current_level >= 0);
        assert!(state.xp_in_current_level < state.xp_to_next_level);
        assert_eq!(state.xp_to_next_level, (state.level as i64 + 1) * 100);
        assert!(state.progress_percent >= 0.0);
        assert!(state.progress_percent < 100.0);
    }

    #[test]
    fn test_progress_stays_below_100_near_threshold() {
        // One XP short of clearing a ten-million-deep level: the in-level
        // balance is so close to full that an unclamped f32 cast rounds the
        // percent up to exactly 100
        let total = 50i64 * 10_000_001 * 10_000_002 - 1;
        let state = compute_level(total).unwrap();
        assert_eq!(state.level, 10_000_000);
        assert_eq!(state.xp_in_current_level, state.xp_to_next_level - 1);
        assert!(state.progress_percent < 100.0);
    }

    proptest! {
        #[test]
        fn prop_in_level_bounds(total in 0i64..i64::MAX) {
            let state = compute_level(total).unwrap();
            prop_assert!(state.xp_in_current_level >= 0);
            prop_assert!(state.xp_in_current_level < state.xp_to_next_level);
            prop_assert!(state.progress_percent >= 0.0);
            prop_assert!(state.progress_percent < 100.0);
            prop_assert_eq!(state.xp_to_next_level, (state.level as i64 + 1) * 100);
        }

        #[test]
        fn prop_level_monotonic(a in 0i64..1_000_000_000, b in 0i64..1_000_000_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(compute_level(lo).unwrap().level <= compute_level(hi).unwrap().level);
        }

        #[test]
        fn prop_matches_iterative_definition(total in 0i64..10_000_000) {
            prop_assert_eq!(compute_level(total).unwrap(), compute_level_iterative(total));
        }
    }
}
