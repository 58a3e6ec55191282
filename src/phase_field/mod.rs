//! Phase-field (spinodal decomposition) model on an N×N torus.

pub mod field;
pub mod neighbors;
pub mod stepping;

pub use field::{create_field, random_field, ScalarField};
pub use neighbors::{pbc_neighbors, NeighborSums};
pub use stepping::{step_conserved, step_non_conserved};
