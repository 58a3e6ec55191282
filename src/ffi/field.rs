//! FFI interface for phase-field operations.

use std::ptr;

use tracing::warn;

use crate::config::{FieldProfile, PhaseParameters};
use crate::phase_field::{random_field, step_conserved, step_non_conserved, ScalarField};

/// Create an n×n field with random initial values.
///
/// `profile`: 0 = symmetric noise, 1 = off-critical noise, 2 = center seed.
/// A `seed` of 0 draws from OS entropy.
///
/// Returns a pointer to the allocated field, or NULL on invalid arguments.
#[no_mangle]
pub extern "C" fn ls_field_create(n: i32, profile: u8, seed: u64) -> *mut ScalarField {
    if n <= 0 {
        return ptr::null_mut();
    }
    let Some(profile) = FieldProfile::from_id(profile) else {
        return ptr::null_mut();
    };

    match random_field(n as usize, profile, (seed != 0).then_some(seed)) {
        Ok(field) => Box::into_raw(Box::new(field)),
        Err(err) => {
            warn!(%err, "field creation rejected");
            ptr::null_mut()
        }
    }
}

/// Destroy a field and free its memory.
/// Safe to call with null pointer (no-op).
///
/// # Safety
/// `field` must be null or a pointer returned by `ls_field_create`, and must
/// not be used after this call.
#[no_mangle]
pub unsafe extern "C" fn ls_field_destroy(field: *mut ScalarField) {
    if !field.is_null() {
        drop(Box::from_raw(field));
    }
}

/// Set a value. Coordinates wrap around the torus.
///
/// # Safety
/// `field` must be null or a pointer returned by `ls_field_create`.
#[no_mangle]
pub unsafe extern "C" fn ls_field_set(field: *mut ScalarField, i: i32, j: i32, value: f64) {
    if field.is_null() {
        return;
    }

    (*field).set(i as isize, j as isize, value);
}

/// Get a value. Coordinates wrap around the torus.
/// Returns 0.0 for a null pointer.
///
/// # Safety
/// `field` must be null or a pointer returned by `ls_field_create`.
#[no_mangle]
pub unsafe extern "C" fn ls_field_get(field: *const ScalarField, i: i32, j: i32) -> f64 {
    if field.is_null() {
        return 0.0;
    }

    (*field).get(i as isize, j as isize)
}

/// Step the field forward by one time-step.
/// `conserved` selects the mass-conserving update when non-zero.
///
/// # Safety
/// `field` must be null or a pointer returned by `ls_field_create`.
#[no_mangle]
pub unsafe extern "C" fn ls_field_step(field: *mut ScalarField, conserved: u8, aa: f64, d: f64) {
    if field.is_null() {
        return;
    }

    let params = PhaseParameters::new(aa, d);
    let current = &mut *field;
    *current = if conserved != 0 {
        step_conserved(current, &params)
    } else {
        step_non_conserved(current, &params)
    };
}

/// Get the current generation number of the field.
///
/// # Safety
/// `field` must be null or a pointer returned by `ls_field_create`.
#[no_mangle]
pub unsafe extern "C" fn ls_field_generation(field: *const ScalarField) -> u64 {
    if field.is_null() {
        return 0;
    }

    (*field).generation()
}

/// Copy all values, row-major, into `out_buf` for rendering.
///
/// # Safety
/// `out_buf` must point to at least `len` doubles.
///
/// # Returns
/// Number of values copied, or 0 if `len` is smaller than n².
#[no_mangle]
pub unsafe extern "C" fn ls_field_copy_values(
    field: *const ScalarField,
    out_buf: *mut f64,
    len: usize,
) -> usize {
    if field.is_null() || out_buf.is_null() {
        return 0;
    }

    let values = (*field).values();
    if len < values.len() {
        return 0;
    }

    let out = std::slice::from_raw_parts_mut(out_buf, values.len());
    out.copy_from_slice(values);
    values.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_destroy_field() {
        let field = ls_field_create(8, 0, 42);
        assert!(!field.is_null());

        unsafe {
            assert_eq!((*field).n(), 8);
            assert_eq!((*field).generation(), 0);
            ls_field_destroy(field);
        }
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(ls_field_create(0, 0, 1).is_null());
        assert!(ls_field_create(-3, 0, 1).is_null());
        assert!(ls_field_create(4, 7, 1).is_null());
    }

    #[test]
    fn test_set_get_wraps() {
        unsafe {
            let field = ls_field_create(4, 0, 1);
            ls_field_set(field, 1, 2, 0.5);
            assert_eq!(ls_field_get(field, 1, 2), 0.5);
            assert_eq!(ls_field_get(field, 5, -2), 0.5);
            ls_field_destroy(field);
        }
    }

    #[test]
    fn test_conserved_step_keeps_sum() {
        unsafe {
            let field = ls_field_create(16, 0, 77);
            let before = (*field).sum();

            for _ in 0..5 {
                ls_field_step(field, 1, 1.3, 0.5);
            }

            assert_eq!(ls_field_generation(field), 5);
            let after = (*field).sum();
            assert!((after - before).abs() < 1e-9);
            ls_field_destroy(field);
        }
    }

    #[test]
    fn test_non_conserved_without_coupling() {
        unsafe {
            let field = ls_field_create(4, 0, 5);
            ls_field_set(field, 0, 0, 0.05);
            ls_field_step(field, 0, 1.3, 0.0);
            assert_eq!(ls_field_get(field, 0, 0), 1.3 * 0.05f64.tanh());
            ls_field_destroy(field);
        }
    }

    #[test]
    fn test_copy_values() {
        unsafe {
            let field = ls_field_create(3, 2, 8);
            let mut out = vec![0.0; 9];
            assert_eq!(ls_field_copy_values(field, out.as_mut_ptr(), out.len()), 9);
            assert_eq!(out[4], 1.0); // center seed

            let mut short = vec![0.0; 4];
            assert_eq!(ls_field_copy_values(field, short.as_mut_ptr(), short.len()), 0);
            ls_field_destroy(field);
        }
    }

    #[test]
    fn test_handle_functions_require_unsafe() {
        let destroy: unsafe extern "C" fn(*mut ScalarField) = ls_field_destroy;
        let set: unsafe extern "C" fn(*mut ScalarField, i32, i32, f64) = ls_field_set;
        let get: unsafe extern "C" fn(*const ScalarField, i32, i32) -> f64 = ls_field_get;
        let step: unsafe extern "C" fn(*mut ScalarField, u8, f64, f64) = ls_field_step;
        let generation: unsafe extern "C" fn(*const ScalarField) -> u64 = ls_field_generation;

        unsafe {
            let field = ls_field_create(4, 0, 3);
            set(field, 2, 2, 0.25);
            assert_eq!(get(field, 2, 2), 0.25);
            step(field, 1, 1.3, 0.5);
            assert_eq!(generation(field), 1);
            destroy(field);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            ls_field_destroy(ptr::null_mut());
            ls_field_set(ptr::null_mut(), 0, 0, 1.0);
            ls_field_step(ptr::null_mut(), 1, 1.3, 0.5);
            assert_eq!(ls_field_get(ptr::null(), 0, 0), 0.0);
            assert_eq!(ls_field_generation(ptr::null()), 0);
            assert_eq!(ls_field_copy_values(ptr::null(), ptr::null_mut(), 0), 0);
        }
    }
}
