//! Binary grid storage, construction, and toroidal cell access.

use rand::Rng;

use crate::config::{check_probability, OFF, ON};
use crate::error::{check_dimension, Result, SimError};
use crate::random::rng_from_seed;

/// An N×N toroidal grid of ON/OFF cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    pub(crate) n: usize,
    pub(crate) cells: Vec<u8>, // ON or OFF, nothing else
    pub(crate) generation: u64,
}

/// Create an all-OFF grid of size n×n.
pub fn create_grid(n: usize) -> Result<BinaryGrid> {
    check_dimension(n)?;
    Ok(BinaryGrid {
        n,
        cells: vec![OFF; n * n],
        generation: 0,
    })
}

/// Create a grid where every cell is independently ON with probability `on_probability`.
pub fn random_grid(n: usize, on_probability: f64, seed: Option<u64>) -> Result<BinaryGrid> {
    check_dimension(n)?;
    check_probability(on_probability)?;

    let mut rng = rng_from_seed(seed);
    let cells = (0..n * n)
        .map(|_| if rng.random_bool(on_probability) { ON } else { OFF })
        .collect();

    Ok(BinaryGrid {
        n,
        cells,
        generation: 0,
    })
}

/// Calculate the linear index for a (row, column) coordinate.
#[inline]
pub fn index_of(n: usize, i: usize, j: usize) -> usize {
    i * n + j
}

/// Check if a signed coordinate lies on the grid (no wrapping).
#[inline]
pub fn in_bounds(n: usize, i: isize, j: isize) -> bool {
    i >= 0 && j >= 0 && (i as usize) < n && (j as usize) < n
}

/// Wrap a signed coordinate onto the torus.
#[inline]
pub fn wrap(k: isize, n: usize) -> usize {
    k.rem_euclid(n as isize) as usize
}

/// Count ON cells among the 8 toroidal neighbors of (i, j).
///
/// On grids smaller than 3×3 some neighbors coincide with each other or with
/// the cell itself; each is counted once per direction.
pub fn count_neighbors(grid: &BinaryGrid, i: usize, j: usize) -> u8 {
    let n = grid.n;
    let up = (i + n - 1) % n;
    let down = (i + 1) % n;
    let left = (j + n - 1) % n;
    let right = (j + 1) % n;

    [
        (i, left),
        (i, right),
        (up, j),
        (down, j),
        (up, left),
        (up, right),
        (down, left),
        (down, right),
    ]
    .iter()
    .filter(|&&(r, c)| grid.cells[index_of(n, r, c)] == ON)
    .count() as u8
}

impl BinaryGrid {
    /// Wrap existing cell values, checking shape and the ON/OFF invariant.
    pub fn from_cells(n: usize, cells: Vec<u8>) -> Result<Self> {
        check_dimension(n)?;
        if cells.len() != n * n {
            return Err(SimError::ShapeMismatch {
                expected: n * n,
                actual: cells.len(),
            });
        }
        if let Some((index, &value)) = cells
            .iter()
            .enumerate()
            .find(|(_, v)| **v != ON && **v != OFF)
        {
            return Err(SimError::InvalidCellValue { index, value });
        }
        Ok(BinaryGrid {
            n,
            cells,
            generation: 0,
        })
    }

    /// Build a grid from rows of ON/OFF values. Rows must form a square.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        check_dimension(n)?;
        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(SimError::ShapeMismatch {
                    expected: n * n,
                    actual: n * row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Self::from_cells(n, cells)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Row-major cell values, each ON or OFF.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Whether (i, j) is ON. Coordinates wrap around the torus.
    pub fn is_on(&self, i: isize, j: isize) -> bool {
        self.cells[index_of(self.n, wrap(i, self.n), wrap(j, self.n))] == ON
    }

    /// Set (i, j) ON or OFF. Coordinates wrap around the torus.
    pub fn set(&mut self, i: isize, j: isize, alive: bool) {
        let idx = index_of(self.n, wrap(i, self.n), wrap(j, self.n));
        self.cells[idx] = if alive { ON } else { OFF };
    }

    /// Number of ON cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == ON).count()
    }

    /// Reset every cell to OFF. The generation counter is kept.
    pub fn clear(&mut self) {
        self.cells.fill(OFF);
    }
}
