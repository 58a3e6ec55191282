//! C FFI layer for external renderers and hosts.
//!
//! This module exports C ABI functions so a display loop written in another
//! language can seed, step, and read back grids and fields.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` and `phase_field` modules. These
//! functions are thin wrappers that handle null checks, pointer safety, and
//! C-to-Rust conversions.

pub mod field;
pub mod grid;
pub mod region;

pub use field::{
    ls_field_copy_values, ls_field_create, ls_field_destroy, ls_field_generation, ls_field_get,
    ls_field_set, ls_field_step,
};
pub use grid::{
    ls_grid_add_pattern, ls_grid_create, ls_grid_create_random, ls_grid_destroy,
    ls_grid_generation, ls_grid_get_cell, ls_grid_set_cell, ls_grid_size, ls_grid_step,
};
pub use region::{ls_grid_extract_region, ls_grid_import_region};
