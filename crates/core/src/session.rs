//! Session module - manages the complete game state
//!
//! Ties together board, pieces, piece source, and scoring. The session is
//! single-threaded and synchronous: the caller drives gravity by calling
//! [`Session::step`] on a timer (interval from
//! [`Session::drop_interval_ms`]) and applies input events through
//! [`Session::apply_action`]. No two transitions can race because every
//! operation takes `&mut self`.
//!
//! Per-piece lifecycle: spawn at top-center -> fall -> lock on a failed
//! downward move -> merge, clear lines, score -> spawn the next piece.
//! A blocked spawn is the terminal game-over condition until reset.

use webtris_types::{GameAction, PieceKind, SPAWN_POSITION, START_LEVEL};

use crate::board::Board;
use crate::pieces::{canonical_shape, Shape};
use crate::rng::{NextSlot, PieceSource, RandomSource};
use crate::scoring::{advances_level, calculate_score, drop_interval_ms};
use crate::snapshot::SessionSnapshot;

/// Active falling piece: kind, current occupancy matrix, anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at spawn position in spawn orientation
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            shape: canonical_shape(kind),
            x,
            y,
        }
    }

    /// Display color of this piece
    pub fn color(&self) -> &'static str {
        self.kind.color()
    }

    /// Check whether the piece fits on the board at its current position
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid_placement(&self.shape, self.x, self.y)
    }
}

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing happened (paused, game over, or not started)
    Idle,
    /// The active piece fell one row
    Fell,
    /// The active piece locked into the board
    Locked {
        /// Rows cleared by this lock (0-4)
        cleared: usize,
        /// Points awarded for those rows
        awarded: u32,
    },
}

/// Complete game session state
#[derive(Debug)]
pub struct Session {
    board: Board,
    active: Option<Tetromino>,
    queue: NextSlot,
    score: u32,
    level: u32,
    lines: u32,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl Session {
    /// Create a new session with a seeded uniform-random piece source
    pub fn new(seed: u32) -> Self {
        Self::with_source(Box::new(RandomSource::new(seed)))
    }

    /// Create a new session with a custom piece source
    pub fn with_source(source: Box<dyn PieceSource + Send>) -> Self {
        Self {
            board: Board::new(),
            active: None,
            queue: NextSlot::new(source),
            score: 0,
            level: START_LEVEL,
            lines: 0,
            paused: false,
            game_over: false,
            started: false,
        }
    }

    /// Start the session and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Kind of the queued next piece (single-slot lookahead)
    pub fn next_piece(&self) -> PieceKind {
        self.queue.peek()
    }

    /// Gravity interval for the caller's timer at the current level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Spawn the queued piece at top-center and refill the queue.
    ///
    /// A blocked spawn position sets the terminal game-over flag and leaves
    /// the queue slot untouched.
    fn spawn_piece(&mut self) -> bool {
        let piece = Tetromino::spawn(self.queue.peek());
        if !piece.is_valid(&self.board) {
            self.game_over = true;
            return false;
        }
        self.queue.take();
        self.active = Some(piece);
        true
    }

    /// One gravity step: move the active piece down, or lock it.
    ///
    /// Call this on the timer interval given by
    /// [`drop_interval_ms`](Self::drop_interval_ms).
    pub fn step(&mut self) -> StepOutcome {
        if self.paused || self.game_over || !self.started {
            return StepOutcome::Idle;
        }
        if self.active.is_none() {
            return StepOutcome::Idle;
        }

        if self.shift_active(0, 1) {
            StepOutcome::Fell
        } else {
            let (cleared, awarded) = self.lock_active();
            StepOutcome::Locked { cleared, awarded }
        }
    }

    /// Try to move the active piece by (dx, dy).
    /// Rejected while paused or after game over.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        self.shift_active(dx, dy)
    }

    fn shift_active(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let nx = active.x + dx;
        let ny = active.y + dy;
        if self.board.is_valid_placement(&active.shape, nx, ny) {
            self.active = Some(Tetromino {
                x: nx,
                y: ny,
                ..active
            });
            return true;
        }
        false
    }

    /// Try to rotate the active piece 90 degrees clockwise in place.
    ///
    /// No wall kicks: if the rotated matrix does not fit at the current
    /// anchor, the rotation is rejected and the piece is unchanged.
    pub fn try_rotate(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotated();
        if self.board.is_valid_placement(&rotated, active.x, active.y) {
            self.active = Some(Tetromino {
                shape: rotated,
                ..active
            });
            return true;
        }
        false
    }

    /// Drop the active piece to its resting row and lock it immediately.
    /// Returns the rows cleared and points awarded by the lock.
    pub fn hard_drop(&mut self) -> (usize, u32) {
        if self.paused || self.game_over {
            return (0, 0);
        }
        let Some(active) = self.active else {
            return (0, 0);
        };

        let mut drop_distance: i8 = 0;
        while self
            .board
            .is_valid_placement(&active.shape, active.x, active.y + drop_distance + 1)
        {
            drop_distance += 1;
        }

        if drop_distance > 0 {
            self.active = Some(Tetromino {
                y: active.y + drop_distance,
                ..active
            });
        }

        self.lock_active()
    }

    /// Merge the active piece into the board, clear lines, update counters,
    /// and spawn the next piece (or end the game if the spawn is blocked).
    fn lock_active(&mut self) -> (usize, u32) {
        let Some(active) = self.active.take() else {
            return (0, 0);
        };

        self.board.merge_piece(&active.shape, active.x, active.y);
        let cleared = self.board.clear_full_rows();

        // Score with the pre-advance level, then bump the level if this
        // clear crossed the level * 10 threshold.
        let awarded = calculate_score(cleared, self.level);
        self.score = self.score.saturating_add(awarded);
        let total_lines = self.lines + cleared as u32;
        if advances_level(total_lines, self.level, cleared) {
            self.level += 1;
        }
        self.lines = total_lines;

        self.spawn_piece();
        (cleared, awarded)
    }

    /// Toggle the paused flag. Rejected after game over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Reset to a fresh session, reusing the piece source.
    /// The piece sequence continues rather than replaying.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.paused = false;
        self.game_over = false;
        self.started = true;
        self.spawn_piece();
    }

    /// Apply a game action. Returns whether the action had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.step() != StepOutcome::Idle,
            GameAction::HardDrop => {
                if self.paused || self.game_over || self.active.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Rotate => self.try_rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Write the persistable state into `out` (board, counters, paused)
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.board.write_grid(&mut out.board);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.paused = self.paused;
    }

    /// Persistable state of an in-progress session
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Resume a session from a snapshot with the given piece source.
    ///
    /// The board and counters are restored; the active piece is not
    /// persisted, so a fresh one spawns on [`start`](Self::start).
    pub fn from_snapshot(snap: &SessionSnapshot, source: Box<dyn PieceSource + Send>) -> Self {
        Self {
            board: Board::from_grid(&snap.board),
            active: None,
            queue: NextSlot::new(source),
            score: snap.score,
            level: snap.level,
            lines: snap.lines,
            paused: snap.paused,
            game_over: false,
            started: false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
