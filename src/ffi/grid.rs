//! Automaton grid lifecycle, cell access, stepping, and pattern seeding.

use std::ptr;

use tracing::warn;

use crate::automaton::{self, BinaryGrid, Pattern, Rule};
use crate::config::{OFF, ON};

fn into_handle(grid: crate::error::Result<BinaryGrid>) -> *mut BinaryGrid {
    match grid {
        Ok(grid) => Box::into_raw(Box::new(grid)),
        Err(err) => {
            warn!(%err, "grid creation rejected");
            ptr::null_mut()
        }
    }
}

/// Creates an all-OFF n×n grid.
///
/// # Returns
/// A pointer to the new grid, or null if `n` is not positive.
/// The pointer must be freed with `ls_grid_destroy()`.
#[no_mangle]
pub extern "C" fn ls_grid_create(n: i32) -> *mut BinaryGrid {
    if n <= 0 {
        return ptr::null_mut();
    }
    into_handle(automaton::create_grid(n as usize))
}

/// Creates an n×n grid with each cell ON with probability `on_probability`.
/// A `seed` of 0 draws from OS entropy.
///
/// # Returns
/// A pointer to the new grid, or null on invalid arguments.
#[no_mangle]
pub extern "C" fn ls_grid_create_random(n: i32, on_probability: f64, seed: u64) -> *mut BinaryGrid {
    if n <= 0 {
        return ptr::null_mut();
    }
    let seed = (seed != 0).then_some(seed);
    into_handle(automaton::random_grid(n as usize, on_probability, seed))
}

/// Destroys a grid and frees its memory.
///
/// # Safety
/// `ptr` must be null or a pointer returned by `ls_grid_create*()`, and must
/// not be used after this call.
#[no_mangle]
pub unsafe extern "C" fn ls_grid_destroy(ptr: *mut BinaryGrid) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the grid size n, or 0 for a null pointer.
///
/// # Safety
/// `ptr` must be null or a valid grid pointer.
#[no_mangle]
pub unsafe extern "C" fn ls_grid_size(ptr: *const BinaryGrid) -> i32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).n() as i32
}

/// Sets a cell ON (non-zero) or OFF (0). Coordinates wrap around the torus.
///
/// # Safety
/// `ptr` must be null or a valid grid pointer.
#[no_mangle]
pub unsafe extern "C" fn ls_grid_set_cell(ptr: *mut BinaryGrid, i: i32, j: i32, alive: u8) {
    if ptr.is_null() {
        return;
    }
    (*ptr).set(i as isize, j as isize, alive != 0);
}

/// Gets a cell value: 255 (ON) or 0 (OFF). Coordinates wrap around the torus.
///
/// # Safety
/// `ptr` must be null or a valid grid pointer.
///
/// # Returns
/// 0 for a null pointer.
#[no_mangle]
pub unsafe extern "C" fn ls_grid_get_cell(ptr: *const BinaryGrid, i: i32, j: i32) -> u8 {
    if ptr.is_null() {
        return OFF;
    }
    if (*ptr).is_on(i as isize, j as isize) {
        ON
    } else {
        OFF
    }
}

/// Advances the grid one generation with Conway's rule (B3/S23).
///
/// # Safety
/// `ptr` must be null or a valid grid pointer.
#[no_mangle]
pub unsafe extern "C" fn ls_grid_step(ptr: *mut BinaryGrid) {
    if ptr.is_null() {
        return;
    }
    automaton::step_automaton(&mut *ptr, &Rule::CONWAY);
}

/// Gets the generation counter, or 0 for a null pointer.
///
/// # Safety
/// `ptr` must be null or a valid grid pointer.
#[no_mangle]
pub unsafe extern "C" fn ls_grid_generation(ptr: *const BinaryGrid) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Stamps a pattern with its top-left cell at (i, j), clipping at the edges.
///
/// Pattern ids: 0 = glider, 1 = Gosper glider gun, 2 = exploder,
/// 3 = negative spaceship, 4 = quad exploder centered on (i, j).
///
/// # Safety
/// `ptr` must be null or a valid grid pointer.
///
/// # Returns
/// Number of cells written, or -1 for a null pointer or unknown pattern.
#[no_mangle]
pub unsafe extern "C" fn ls_grid_add_pattern(
    ptr: *mut BinaryGrid,
    pattern: u8,
    i: i32,
    j: i32,
) -> i64 {
    if ptr.is_null() {
        return -1;
    }

    let grid = &mut *ptr;
    let (i, j) = (i as isize, j as isize);
    match Pattern::from_id(pattern) {
        Some(pattern) => automaton::add_pattern(grid, pattern, i, j) as i64,
        None if pattern == Pattern::ALL.len() as u8 => {
            automaton::add_quad_exploder(grid, i, j) as i64
        }
        None => -1,
    }
}
