//! Scoring module - placement points, line points and the clear streak
//!
//! Rules:
//! - Every placement earns `POINTS_PER_BLOCK` per block, cleared lines or not.
//! - A placement that clears at least one line extends the streak by one; the
//!   streak bonus `(streak - 1) * STREAK_STEP_POINTS` is added to every line
//!   cleared in that turn, uniformly.
//! - A placement that clears nothing resets the streak to zero.

use crate::types::{LINE_BASE_POINTS, POINTS_PER_BLOCK, STREAK_STEP_POINTS};

/// Score calculation result for one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnScore {
    /// Points for the blocks placed.
    pub placement_points: u32,
    /// Per-line bonus from the streak (0 when nothing was cleared).
    pub streak_bonus: u32,
    /// Points for the lines cleared, streak bonus included.
    pub line_points: u32,
    pub total: u32,
    /// Streak after this turn.
    pub new_streak: u32,
}

/// Calculate placement points
pub fn calculate_placement_points(block_count: u32) -> u32 {
    block_count.saturating_mul(POINTS_PER_BLOCK)
}

/// Calculate the per-line streak bonus for a given (already incremented) streak
pub fn calculate_streak_bonus(streak: u32) -> u32 {
    streak.saturating_sub(1).saturating_mul(STREAK_STEP_POINTS)
}

/// Calculate the complete score for one placement.
pub fn compute_turn_score(block_count: u32, cleared_count: u32, previous_streak: u32) -> TurnScore {
    let placement_points = calculate_placement_points(block_count);

    let (new_streak, streak_bonus, line_points) = if cleared_count > 0 {
        let new_streak = previous_streak.saturating_add(1);
        let streak_bonus = calculate_streak_bonus(new_streak);
        let line_points =
            cleared_count.saturating_mul(LINE_BASE_POINTS.saturating_add(streak_bonus));
        (new_streak, streak_bonus, line_points)
    } else {
        (0, 0, 0)
    };

    TurnScore {
        placement_points,
        streak_bonus,
        line_points,
        total: placement_points.saturating_add(line_points),
        new_streak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_points() {
        assert_eq!(calculate_placement_points(1), 10);
        assert_eq!(calculate_placement_points(9), 90);
    }

    #[test]
    fn test_streak_bonus() {
        assert_eq!(calculate_streak_bonus(0), 0);
        assert_eq!(calculate_streak_bonus(1), 0);
        assert_eq!(calculate_streak_bonus(2), 10);
        assert_eq!(calculate_streak_bonus(5), 40);
    }

    #[test]
    fn test_no_clear_only_awards_placement() {
        let result = compute_turn_score(5, 0, 0);
        assert_eq!(result.placement_points, 50);
        assert_eq!(result.line_points, 0);
        assert_eq!(result.total, 50);
        assert_eq!(result.new_streak, 0);
    }

    #[test]
    fn test_first_clear_has_no_bonus() {
        let result = compute_turn_score(3, 1, 0);
        assert_eq!(result.new_streak, 1);
        assert_eq!(result.streak_bonus, 0);
        assert_eq!(result.line_points, 100);
        assert_eq!(result.total, 130);
    }

    #[test]
    fn test_four_blocks_streak_two_one_line() {
        let result = compute_turn_score(4, 1, 2);
        assert_eq!(result.placement_points, 40);
        assert_eq!(result.new_streak, 3);
        assert_eq!(result.streak_bonus, 20);
        assert_eq!(result.line_points, 120);
        assert_eq!(result.total, 160);
    }

    #[test]
    fn test_multi_line_bonus_is_uniform_per_line() {
        // Streak 3 after this turn, two lines at once: 2 * (100 + 20).
        let result = compute_turn_score(1, 2, 2);
        assert_eq!(result.line_points, 240);
    }

    #[test]
    fn test_streak_resets_regardless_of_previous() {
        for prev in [0, 1, 7, 1000] {
            assert_eq!(compute_turn_score(2, 0, prev).new_streak, 0);
        }
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let result = compute_turn_score(u32::MAX, 16, u32::MAX);
        assert_eq!(result.total, u32::MAX);
        assert_eq!(result.new_streak, u32::MAX);
    }
}
