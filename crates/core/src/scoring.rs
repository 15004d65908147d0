//! Scoring module - line-clear scoring, level progression, gravity policy
//!
//! Scoring is a fixed base table indexed by lines cleared in one lock,
//! multiplied by the current level. The level starts at 1 and advances by
//! one whenever a clear pushes the cumulative line count across the
//! `level * 10` threshold. Gravity speeds up 100ms per level with a 100ms
//! floor.

use webtris_types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Calculate line clear score.
/// lines: number of lines cleared in one lock (0-4)
/// level: current level (1-based)
///
/// Clearing 0 lines always scores 0 regardless of level.
pub fn calculate_score(lines: usize, level: u32) -> u32 {
    if lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Whether a clear advances the level.
///
/// `total_lines` is the cumulative count AFTER adding this clear; the level
/// bumps when that count reaches the current level's 10-line threshold.
pub fn advances_level(total_lines: u32, level: u32, cleared: usize) -> bool {
    cleared > 0 && total_lines >= level.saturating_mul(LINES_PER_LEVEL)
}

/// Gravity interval for a level (milliseconds):
/// `max(100, 1000 - (level - 1) * 100)`
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(DROP_STEP_MS))
        .max(DROP_INTERVAL_MIN_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table() {
        assert_eq!(calculate_score(0, 1), 0);
        assert_eq!(calculate_score(1, 1), 100);
        assert_eq!(calculate_score(2, 1), 300);
        assert_eq!(calculate_score(3, 1), 500);
        assert_eq!(calculate_score(4, 1), 800);
    }

    #[test]
    fn test_score_scales_with_level() {
        assert_eq!(calculate_score(1, 3), 300);
        assert_eq!(calculate_score(4, 1), 800);
        assert_eq!(calculate_score(0, 5), 0);
        assert_eq!(calculate_score(2, 4), 1200);
    }

    #[test]
    fn test_score_out_of_table_range() {
        assert_eq!(calculate_score(5, 3), 0);
    }

    #[test]
    fn test_level_advance_threshold() {
        // Level 1 advances at 10 cumulative lines
        assert!(!advances_level(9, 1, 1));
        assert!(advances_level(10, 1, 1));
        assert!(advances_level(11, 1, 2));

        // Level 2 advances at 20
        assert!(!advances_level(19, 2, 1));
        assert!(advances_level(20, 2, 1));
    }

    #[test]
    fn test_no_advance_without_clear() {
        assert!(!advances_level(10, 1, 0));
    }

    #[test]
    fn test_drop_interval_by_level() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(5), 600);
        assert_eq!(drop_interval_ms(10), 100);
    }

    #[test]
    fn test_drop_interval_floor() {
        assert_eq!(drop_interval_ms(11), 100);
        assert_eq!(drop_interval_ms(100), 100);
    }

    #[test]
    fn test_drop_interval_level_zero_saturates() {
        // Level 0 is not reachable in play, but the policy must not underflow
        assert_eq!(drop_interval_ms(0), 1000);
    }
}
