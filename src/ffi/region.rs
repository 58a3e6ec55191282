//! Region extraction and import FFI functions.

use crate::automaton::{self, BinaryGrid};

fn region_len(min_i: i32, min_j: i32, max_i: i32, max_j: i32) -> usize {
    let rows = (max_i as i64 - min_i as i64).max(0) as usize;
    let cols = (max_j as i64 - min_j as i64).max(0) as usize;
    rows * cols
}

/// Extracts the rectangle `[min_i, max_i) × [min_j, max_j)` into a flat buffer.
///
/// # Layout
/// Row by row (i changes slowest, j changes fastest). This matches the layout
/// expected by `ls_grid_import_region`. Cells are 255 (ON) or 0 (OFF).
///
/// # Safety
/// - `ptr` must be null or a valid grid pointer
/// - `out_buf` must point to at least `(max_i - min_i) * (max_j - min_j)` bytes
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn ls_grid_extract_region(
    ptr: *const BinaryGrid,
    out_buf: *mut u8,
    min_i: i32,
    min_j: i32,
    max_i: i32,
    max_j: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let grid = &*ptr;
    let buf_slice = std::slice::from_raw_parts_mut(out_buf, region_len(min_i, min_j, max_i, max_j));
    automaton::extract_region(
        grid,
        buf_slice,
        min_i as isize,
        min_j as isize,
        max_i as isize,
        max_j as isize,
    ) as u64
}

/// Imports the rectangle `[min_i, max_i) × [min_j, max_j)` from a flat buffer.
///
/// # Layout
/// Same as `ls_grid_extract_region`. Input values are normalized:
/// 0 = OFF, non-zero = ON.
///
/// # Safety
/// - `ptr` must be null or a valid grid pointer
/// - `in_buf` must point to at least `(max_i - min_i) * (max_j - min_j)` bytes
///
/// # Returns
/// Number of bytes read, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn ls_grid_import_region(
    ptr: *mut BinaryGrid,
    in_buf: *const u8,
    min_i: i32,
    min_j: i32,
    max_i: i32,
    max_j: i32,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let grid = &mut *ptr;
    let buf_slice = std::slice::from_raw_parts(in_buf, region_len(min_i, min_j, max_i, max_j));
    automaton::import_region(
        grid,
        buf_slice,
        min_i as isize,
        min_j as isize,
        max_i as isize,
        max_j as isize,
    ) as u64
}
