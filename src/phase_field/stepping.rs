//! Non-conserved and conserved phase-field updates.
//!
//! Both updates relax η through `AA · tanh(η)` plus a weighted Laplacian with
//! orthogonal neighbors at 1/6 and diagonal neighbors at 1/12. The conserved
//! update then removes the neighbor-coupling drift between the relaxed field
//! and the input, which keeps `Σ η` fixed up to rounding.

use rayon::prelude::*;

use super::field::ScalarField;
use super::neighbors::{pbc_neighbors, NeighborSums};
use crate::config::PhaseParameters;

/// `AA · tanh(η) + d · (A1/6 + A2/12 − η)` for every cell.
fn relax(field: &ScalarField, sums: &NeighborSums, params: &PhaseParameters) -> Vec<f64> {
    let PhaseParameters { aa, d } = *params;
    field
        .values
        .par_iter()
        .zip(sums.orthogonal.par_iter())
        .zip(sums.diagonal.par_iter())
        .map(|((&eta, &a1), &a2)| aa * eta.tanh() + d * (a1 / 6.0 + a2 / 12.0 - eta))
        .collect()
}

/// One non-conserved step. Values are not clamped or normalized.
pub fn step_non_conserved(field: &ScalarField, params: &PhaseParameters) -> ScalarField {
    let sums = pbc_neighbors(field);
    ScalarField {
        n: field.n,
        values: relax(field, &sums, params),
        generation: field.generation + 1,
    }
}

/// One conserved step.
///
/// The A sums are taken over the input field and reused for the correction;
/// the B sums are taken over the relaxed intermediate field. `tanh` is
/// applied once per step.
pub fn step_conserved(field: &ScalarField, params: &PhaseParameters) -> ScalarField {
    let a = pbc_neighbors(field);
    let relaxed = ScalarField {
        n: field.n,
        values: relax(field, &a, params),
        generation: field.generation,
    };
    let b = pbc_neighbors(&relaxed);

    let values = relaxed
        .values
        .par_iter()
        .enumerate()
        .map(|(idx, &st)| {
            st - (b.orthogonal[idx] - a.orthogonal[idx]) / 6.0
                - (b.diagonal[idx] - a.diagonal[idx]) / 12.0
        })
        .collect();

    ScalarField {
        n: field.n,
        values,
        generation: field.generation + 1,
    }
}
