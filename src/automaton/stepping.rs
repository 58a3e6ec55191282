//! Cellular automaton stepping on the torus.

use rayon::prelude::*;

use super::grid::{count_neighbors, index_of, BinaryGrid};
use super::rule::Rule;
use crate::config::{OFF, ON};

/// Compute the next generation of `grid` under `rule`.
///
/// Every cell is computed from the unchanged input grid, so no update is
/// visible to a neighbor within the same generation. Rows are computed in
/// parallel.
pub fn next_generation(grid: &BinaryGrid, rule: &Rule) -> BinaryGrid {
    let n = grid.n;
    let mut next_cells = vec![OFF; grid.cells.len()];

    next_cells
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(i, row)| {
            for (j, cell) in row.iter_mut().enumerate() {
                let alive = grid.cells[index_of(n, i, j)] == ON;
                let neighbors = count_neighbors(grid, i, j);
                *cell = if rule.next_state(alive, neighbors) {
                    ON
                } else {
                    OFF
                };
            }
        });

    BinaryGrid {
        n,
        cells: next_cells,
        generation: grid.generation + 1,
    }
}

/// Step the automaton forward by one generation, replacing the grid's cells.
pub fn step_automaton(grid: &mut BinaryGrid, rule: &Rule) {
    *grid = next_generation(grid, rule);
}

/// One generation of Conway's Game of Life (B3/S23).
pub fn step_life(grid: &BinaryGrid) -> BinaryGrid {
    next_generation(grid, &Rule::CONWAY)
}
