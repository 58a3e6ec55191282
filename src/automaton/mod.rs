//! Binary life-like automaton on an N×N torus.
//!
//! This module holds the grid, the birth/survival rule, the synchronous step,
//! seed patterns, and region copies used by the FFI layer in `ffi/`.

pub mod grid;
pub mod patterns;
pub mod region;
pub mod rule;
pub mod stepping;

pub use grid::{count_neighbors, create_grid, in_bounds, index_of, random_grid, wrap, BinaryGrid};
pub use patterns::{add_pattern, add_quad_exploder, try_add_pattern, Pattern};
pub use region::{extract_region, import_region};
pub use rule::Rule;
pub use stepping::{next_generation, step_automaton, step_life};
