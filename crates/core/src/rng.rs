//! RNG module - random piece selection
//!
//! Piece selection is a policy parameter: the session draws through the
//! [`PieceSource`] trait so tests can substitute a deterministic sequence.
//! The default [`RandomSource`] picks uniformly among the seven kinds using
//! a simple seeded LCG, so a given seed replays the same game.

use std::fmt;

use webtris_types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Source of the next piece kind.
///
/// Implementations must be infallible: a source always produces a kind.
pub trait PieceSource: fmt::Debug {
    /// Draw the next piece kind
    fn draw(&mut self) -> PieceKind;
}

/// Uniform random piece source backed by [`SimpleRng`]
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: SimpleRng,
}

impl RandomSource {
    /// Create a new source with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Current RNG state
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl PieceSource for RandomSource {
    fn draw(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Deterministic piece source that cycles a fixed sequence.
///
/// Intended for tests and scripted scenarios.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    sequence: Vec<PieceKind>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source that repeats `sequence` forever.
    /// The sequence must be non-empty.
    pub fn new(sequence: Vec<PieceKind>) -> Self {
        assert!(!sequence.is_empty(), "sequence must be non-empty");
        Self {
            sequence,
            cursor: 0,
        }
    }
}

impl PieceSource for ScriptedSource {
    fn draw(&mut self) -> PieceKind {
        let kind = self.sequence[self.cursor];
        self.cursor = (self.cursor + 1) % self.sequence.len();
        kind
    }
}

/// Single-slot lookahead queue over a piece source.
///
/// Holds exactly one pre-generated piece so the UI can preview "next";
/// the slot is refilled from the source on every take.
#[derive(Debug)]
pub struct NextSlot {
    slot: PieceKind,
    source: Box<dyn PieceSource + Send>,
}

impl NextSlot {
    /// Create a queue over the given source, pre-filling the slot
    pub fn new(mut source: Box<dyn PieceSource + Send>) -> Self {
        let slot = source.draw();
        Self { slot, source }
    }

    /// Peek at the queued piece without consuming it
    pub fn peek(&self) -> PieceKind {
        self.slot
    }

    /// Take the queued piece and refill the slot from the source
    pub fn take(&mut self) -> PieceKind {
        let kind = self.slot;
        self.slot = self.source.draw();
        kind
    }
}
