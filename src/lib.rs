//! Lattice Sims - toroidal grid simulations
//!
//! Two independent simulation families on an N×N periodic lattice:
//!
//! - [`automaton`]: a binary life-like cellular automaton (B3/S23 by default).
//! - [`phase_field`]: spinodal decomposition of an order-parameter field, in
//!   non-conserved and conserved variants.
//!
//! Each step reads a whole grid and returns the next one. [`simulation`]
//! drives a bounded run and hands every frame to the caller; [`ffi`] exposes
//! the same operations over a C ABI.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod phase_field;
mod random;
pub mod simulation;


pub use automaton::{BinaryGrid, Pattern, Rule};
pub use config::{
    Dynamics, FieldProfile, LifeParameters, PhaseParameters, SimulationParameters,
    DEFAULT_AA, DEFAULT_ON_PROBABILITY, OFF, ON,
};
pub use error::{Result, SimError};
pub use phase_field::{NeighborSums, ScalarField};
pub use simulation::{
    evolve, run_life, run_phase_field, Automaton, ConservedField, Evolution, NonConservedField,
    Runner, Stepper,
};
