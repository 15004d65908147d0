//! Pieces module - tetromino occupancy matrices and rotation
//!
//! Each piece kind has a canonical square occupancy matrix (I: 4x4, O: 2x2,
//! the rest: 3x3). Rotation is 90 degrees clockwise via transpose-then-reverse:
//! the new cell at (row, col) is the old cell at (size - 1 - col, row).
//! Rotating always produces a new matrix; the canonical tables are never
//! mutated. There are no wall kicks in this ruleset - a rotation that does
//! not fit in place is simply rejected by the caller.

use arrayvec::ArrayVec;

use webtris_types::{Cell, PieceKind, CELL_EMPTY, CELL_FILLED};

/// Largest matrix edge among the seven kinds (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Every shape occupies exactly four cells
pub const CELLS_PER_PIECE: usize = 4;

/// Square occupancy matrix for one rotation state of a piece.
///
/// Stored as a fixed 4x4 grid of which only the `size x size` prefix is
/// meaningful, so shapes stay `Copy` with no allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    rows: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Edge length of the matrix (2, 3 or 4)
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Cell value at (x, y) within the matrix.
    /// Callers must stay within `0..size()` on both axes.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    /// Offsets of the four occupied cells, relative to the anchor,
    /// in row-major scan order
    pub fn occupied_offsets(&self) -> ArrayVec<(i8, i8), CELLS_PER_PIECE> {
        let mut offsets = ArrayVec::new();
        let size = self.size as usize;
        for y in 0..size {
            for x in 0..size {
                if self.rows[y][x] != CELL_EMPTY {
                    offsets.push((x as i8, y as i8));
                }
            }
        }
        offsets
    }

    /// A new matrix rotated 90 degrees clockwise.
    ///
    /// new(row, col) = old(size - 1 - col, row). Does not mutate `self`.
    pub fn rotated(&self) -> Shape {
        let size = self.size as usize;
        let mut rows = [[CELL_EMPTY; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (row, out) in rows.iter_mut().enumerate().take(size) {
            for (col, cell) in out.iter_mut().enumerate().take(size) {
                *cell = self.rows[size - 1 - col][row];
            }
        }
        Shape {
            size: self.size,
            rows,
        }
    }

    #[cfg(test)]
    fn from_rows(rows_2d: &[&[Cell]]) -> Shape {
        let size = rows_2d.len();
        assert!(size <= MAX_SHAPE_SIZE);
        let mut rows = [[CELL_EMPTY; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows_2d.iter().enumerate() {
            assert_eq!(row.len(), size);
            rows[y][..size].copy_from_slice(row);
        }
        Shape {
            size: size as u8,
            rows,
        }
    }
}

const E: Cell = CELL_EMPTY;
const F: Cell = CELL_FILLED;

const I_SHAPE: Shape = Shape {
    size: 4,
    rows: [[E, E, E, E], [F, F, F, F], [E, E, E, E], [E, E, E, E]],
};

const O_SHAPE: Shape = Shape {
    size: 2,
    rows: [[F, F, E, E], [F, F, E, E], [E, E, E, E], [E, E, E, E]],
};

const T_SHAPE: Shape = Shape {
    size: 3,
    rows: [[E, F, E, E], [F, F, F, E], [E, E, E, E], [E, E, E, E]],
};

const S_SHAPE: Shape = Shape {
    size: 3,
    rows: [[E, F, F, E], [F, F, E, E], [E, E, E, E], [E, E, E, E]],
};

const Z_SHAPE: Shape = Shape {
    size: 3,
    rows: [[F, F, E, E], [E, F, F, E], [E, E, E, E], [E, E, E, E]],
};

const J_SHAPE: Shape = Shape {
    size: 3,
    rows: [[F, E, E, E], [F, F, F, E], [E, E, E, E], [E, E, E, E]],
};

const L_SHAPE: Shape = Shape {
    size: 3,
    rows: [[E, E, F, E], [F, F, F, E], [E, E, E, E], [E, E, E, E]],
};

/// Canonical spawn-orientation matrix for a piece kind
pub fn canonical_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}
