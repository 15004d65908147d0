//! Persistence interchange module - plain values toward the storage layer
//!
//! The engine never talks to storage itself. At the end of a session the
//! surrounding application appends a [`ScoreRecord`] to the user's score
//! history, and mid-session it saves a [`SavedGame`] snapshot (one per
//! user, overwritten on save). Both are plain JSON values; this module owns
//! their wire form and the leaderboard/history list processing over them.
//!
//! # Wire Format
//!
//! `SavedGame` serializes the board as nested row arrays so the stored JSON
//! matches what the web layer reads and writes:
//!
//! ```json
//! {"board":[[0,0,...],[...]],"score":1200,"level":2,"lines":14,"paused":false}
//! ```
//!
//! Decoding validates the grid dimensions; a snapshot with the wrong shape
//! is a hard error, not a recoverable state.
//!
//! # Leaderboard Semantics
//!
//! The cross-user leaderboard deduplicates to each user's personal best and
//! sorts by score descending before taking the top N. A user's own history
//! is simply their records, best first.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use webtris_core::{Session, SessionSnapshot};
use webtris_types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// JSON wire form of an in-progress session snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    /// Board rows, top to bottom (0 = empty, 1 = filled)
    pub board: Vec<Vec<Cell>>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub paused: bool,
}

impl SavedGame {
    /// Capture the persistable state of a live session
    pub fn from_session(session: &Session) -> Self {
        Self::from_snapshot(&session.snapshot())
    }

    /// Convert a plain snapshot into its wire form
    pub fn from_snapshot(snap: &SessionSnapshot) -> Self {
        Self {
            board: snap.board.iter().map(|row| row.to_vec()).collect(),
            score: snap.score,
            level: snap.level,
            lines: snap.lines,
            paused: snap.paused,
        }
    }

    /// Convert back into a snapshot, validating the grid dimensions
    pub fn to_snapshot(&self) -> Result<SessionSnapshot> {
        if self.board.len() != BOARD_HEIGHT as usize {
            bail!(
                "saved board has {} rows, expected {}",
                self.board.len(),
                BOARD_HEIGHT
            );
        }
        let mut snap = SessionSnapshot {
            score: self.score,
            level: self.level,
            lines: self.lines,
            paused: self.paused,
            ..SessionSnapshot::default()
        };
        for (y, row) in self.board.iter().enumerate() {
            if row.len() != BOARD_WIDTH as usize {
                bail!(
                    "saved board row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    BOARD_WIDTH
                );
            }
            snap.board[y].copy_from_slice(row);
        }
        Ok(snap)
    }

    /// Encode to the stored JSON form
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to encode saved game")
    }

    /// Decode from the stored JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to decode saved game")
    }
}

/// One finished session in a user's score history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub user: String,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl ScoreRecord {
    /// Capture the final counters of a finished session
    pub fn from_session(user: impl Into<String>, session: &Session) -> Self {
        Self {
            user: user.into(),
            score: session.score(),
            level: session.level(),
            lines: session.lines(),
        }
    }
}

/// Cross-user leaderboard: each user's personal best, score descending,
/// truncated to `limit` rows
pub fn leaderboard(records: &[ScoreRecord], limit: usize) -> Vec<ScoreRecord> {
    let mut best: HashMap<&str, &ScoreRecord> = HashMap::new();
    for record in records {
        best.entry(record.user.as_str())
            .and_modify(|current| {
                if record.score > current.score {
                    *current = record;
                }
            })
            .or_insert(record);
    }

    let mut rows: Vec<ScoreRecord> = best.into_values().cloned().collect();
    rows.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.user.cmp(&b.user)));
    rows.truncate(limit);
    rows
}

/// One user's own scores, best first, truncated to `limit` rows
pub fn personal_history(records: &[ScoreRecord], user: &str, limit: usize) -> Vec<ScoreRecord> {
    let mut rows: Vec<ScoreRecord> = records
        .iter()
        .filter(|record| record.user == user)
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.score.cmp(&a.score));
    rows.truncate(limit);
    rows
}
