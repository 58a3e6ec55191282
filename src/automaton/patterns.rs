//! Named seed patterns stamped onto a grid.
//!
//! Patterns are stamped, not wrapped: cells that fall off the grid edge are
//! dropped by `add_pattern`, or rejected outright by `try_add_pattern`.

use tracing::debug;

use super::grid::{in_bounds, index_of, BinaryGrid};
use crate::config::{OFF, ON};
use crate::error::{Result, SimError};

const GLIDER: &[&str] = &[
    "..O", //
    "O.O", //
    ".OO",
];

const EXPLODER: &[&str] = &[
    ".OOO.", //
    "O...O", //
    "O.O.O", //
    "O...O", //
    ".OOO.",
];

const NEGATIVE_SPACESHIP: &[&str] = &[
    ".O..OO..OO..OO..OO...",
    "OO.O.O.O.O.O.O.O.O...",
    ".O.OO.OO.OO.OO.OO....",
    ".O..OO..OO..OO..OO...",
];

const GOSPER_ROWS: usize = 11;
const GOSPER_COLS: usize = 38;
#[rustfmt::skip]
const GOSPER_GLIDER_GUN: &[(usize, usize)] = &[
    // left block
    (5, 1), (5, 2), (6, 1), (6, 2),
    // left ship
    (3, 13), (3, 14), (4, 12), (4, 16), (5, 11), (5, 17),
    (6, 11), (6, 15), (6, 17), (6, 18), (7, 11), (7, 17),
    (8, 12), (8, 16), (9, 13), (9, 14),
    // right ship
    (1, 25), (2, 23), (2, 25), (3, 21), (3, 22), (4, 21),
    (4, 22), (5, 21), (5, 22), (6, 23), (6, 25), (7, 25),
    // right block
    (3, 35), (3, 36), (4, 35), (4, 36),
];

/// Offsets of the four exploders placed by `add_quad_exploder`.
const QUAD_OFFSETS: [(isize, isize); 4] = [(-10, 0), (10, 0), (0, -10), (0, 10)];

/// Fixed seed patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Small spaceship travelling one cell down and right every 4 generations.
    Glider,
    /// Gosper's gun, emitting a glider every 30 generations.
    GosperGliderGun,
    /// Symmetric cluster that expands and then oscillates.
    Exploder,
    /// Wide striped cluster; four rows of alternating pairs.
    NegativeSpaceship,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Glider,
        Pattern::GosperGliderGun,
        Pattern::Exploder,
        Pattern::NegativeSpaceship,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Glider => "glider",
            Pattern::GosperGliderGun => "gosper_glider_gun",
            Pattern::Exploder => "exploder",
            Pattern::NegativeSpaceship => "negative_spaceship",
        }
    }

    /// Map a C-side pattern id onto a pattern, in `ALL` order.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// (rows, cols) of the pattern's bounding box.
    pub fn size(self) -> (usize, usize) {
        match self {
            Pattern::GosperGliderGun => (GOSPER_ROWS, GOSPER_COLS),
            _ => {
                let art = self.art();
                (art.len(), art[0].len())
            }
        }
    }

    /// Row-major ON/OFF values covering the bounding box.
    pub fn cells(self) -> Vec<u8> {
        match self {
            Pattern::GosperGliderGun => {
                let mut cells = vec![OFF; GOSPER_ROWS * GOSPER_COLS];
                for &(i, j) in GOSPER_GLIDER_GUN {
                    cells[i * GOSPER_COLS + j] = ON;
                }
                cells
            }
            _ => self
                .art()
                .iter()
                .flat_map(|row| row.bytes())
                .map(|b| if b == b'O' { ON } else { OFF })
                .collect(),
        }
    }

    fn art(self) -> &'static [&'static str] {
        match self {
            Pattern::Glider => GLIDER,
            Pattern::Exploder => EXPLODER,
            Pattern::NegativeSpaceship => NEGATIVE_SPACESHIP,
            Pattern::GosperGliderGun => &[],
        }
    }
}

/// Stamp `pattern` with its top-left cell at (i, j), overwriting the covered
/// rectangle. Cells outside the grid are dropped.
///
/// # Returns
/// Number of cells written.
pub fn add_pattern(grid: &mut BinaryGrid, pattern: Pattern, i: isize, j: isize) -> usize {
    let (rows, cols) = pattern.size();
    let cells = pattern.cells();
    let mut written = 0;

    for r in 0..rows {
        for c in 0..cols {
            let (gi, gj) = (i + r as isize, j + c as isize);
            if !in_bounds(grid.n, gi, gj) {
                continue;
            }
            grid.cells[index_of(grid.n, gi as usize, gj as usize)] = cells[r * cols + c];
            written += 1;
        }
    }

    if written < rows * cols {
        debug!(
            pattern = pattern.name(),
            i,
            j,
            n = grid.n,
            dropped = rows * cols - written,
            "pattern clipped at grid edge"
        );
    }

    written
}

/// Like `add_pattern`, but refuses placements that would run off the grid.
/// The grid is untouched on error.
pub fn try_add_pattern(grid: &mut BinaryGrid, pattern: Pattern, i: isize, j: isize) -> Result<()> {
    let (rows, cols) = pattern.size();
    let fits = in_bounds(grid.n, i, j)
        && in_bounds(grid.n, i + rows as isize - 1, j + cols as isize - 1);
    if !fits {
        return Err(SimError::PatternOutOfBounds {
            pattern: pattern.name(),
            i,
            j,
            n: grid.n,
        });
    }

    add_pattern(grid, pattern, i, j);
    Ok(())
}

/// Place four exploders in a cross around (center_i, center_j).
///
/// # Returns
/// Total number of cells written.
pub fn add_quad_exploder(grid: &mut BinaryGrid, center_i: isize, center_j: isize) -> usize {
    QUAD_OFFSETS
        .iter()
        .map(|&(di, dj)| add_pattern(grid, Pattern::Exploder, center_i + di, center_j + dj))
        .sum()
}
