//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and session state management.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Piece selection is pluggable, so tests script sequences
//! - **Portable**: Can run in any environment (browser glue, headless, CLI)
//! - **Fast**: Zero-allocation hot paths for movement and line clearing
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with placement validation and line clearing
//! - [`pieces`]: Tetromino occupancy matrices and clockwise rotation
//! - [`rng`]: Uniform random piece selection behind a pluggable source trait
//! - [`scoring`]: Line-clear score table, level progression, gravity policy
//! - [`session`]: Complete session state, gravity steps, and input actions
//! - [`snapshot`]: Plain-value save/resume form of an in-progress session
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece is an independent uniform draw
//! - **In-place rotation**: 90 degrees clockwise, no wall kicks - a rotation
//!   that does not fit is rejected
//! - **Above-board leniency**: cells above the top edge are valid during
//!   movement and rotation, and are dropped silently when a piece locks
//! - **Scoring**: 100/300/500/800 base points for 1-4 lines, times level
//! - **Levels**: start at 1, advance every 10 cumulative lines, each level
//!   shortens the gravity interval by 100ms down to a 100ms floor
//!
//! # Example
//!
//! ```
//! use webtris_core::{Session, StepOutcome};
//! use webtris_types::GameAction;
//!
//! // Create and start a game
//! let mut session = Session::new(12345);
//! session.start();
//!
//! // Apply input events, then drive gravity on the caller's timer
//! session.apply_action(GameAction::MoveRight);
//! session.apply_action(GameAction::Rotate);
//! let outcome = session.step();
//! assert_ne!(outcome, StepOutcome::Idle);
//!
//! // The timer interval follows the level
//! assert_eq!(session.drop_interval_ms(), 1000);
//! ```

pub mod board;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use webtris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use pieces::{canonical_shape, Shape};
pub use rng::{NextSlot, PieceSource, RandomSource, ScriptedSource, SimpleRng};
pub use scoring::{advances_level, calculate_score, drop_interval_ms};
pub use session::{Session, StepOutcome, Tetromino};
pub use snapshot::SessionSnapshot;
