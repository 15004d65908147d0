//! Snapshot module - plain-value form of an in-progress session
//!
//! The persistence collaborator stores exactly one snapshot per user and
//! overwrites it on save; the engine's contract toward it is plain board and
//! counter values with no embedded behavior. The falling piece is not part
//! of the snapshot - a fresh one spawns when the resumed session starts.

use webtris_types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, CELL_EMPTY, START_LEVEL};

/// Persistable state of an in-progress session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    /// Board grid, row-major, row 0 at the top (0 = empty, 1 = filled)
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub paused: bool,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            board: [[CELL_EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            score: 0,
            level: START_LEVEL,
            lines: 0,
            paused: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_fresh_session() {
        let snap = SessionSnapshot::default();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.level, START_LEVEL);
        assert_eq!(snap.lines, 0);
        assert!(!snap.paused);
        assert!(snap
            .board
            .iter()
            .all(|row| row.iter().all(|&c| c == CELL_EMPTY)));
    }
}
