//! Scalar order-parameter field on an N×N torus.

use rand::Rng;

use crate::config::FieldProfile;
use crate::error::{check_dimension, Result, SimError};
use crate::random::rng_from_seed;

/// An N×N field of order-parameter values η, stored row-major.
/// No bound is enforced on the values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    pub(crate) n: usize,
    pub(crate) values: Vec<f64>,
    pub(crate) generation: u64,
}

/// Initialize an all-zero field of size n×n.
pub fn create_field(n: usize) -> Result<ScalarField> {
    check_dimension(n)?;
    Ok(ScalarField {
        n,
        values: vec![0.0; n * n],
        generation: 0,
    })
}

/// Initialize a field with random values following `profile`.
pub fn random_field(n: usize, profile: FieldProfile, seed: Option<u64>) -> Result<ScalarField> {
    check_dimension(n)?;
    let mut rng = rng_from_seed(seed);

    let mut values: Vec<f64> = (0..n * n)
        .map(|_| {
            let r: f64 = rng.random();
            match profile {
                FieldProfile::Symmetric => 0.1 * (2.0 * r - 1.0),
                FieldProfile::Offset => 0.1 * (2.0 * r - 4.0),
                FieldProfile::CenterSeed => 0.001 * (2.0 * r - 1.0),
            }
        })
        .collect();

    if profile == FieldProfile::CenterSeed {
        let mid = n / 2;
        values[mid * n + mid] = 1.0;
    }

    Ok(ScalarField {
        n,
        values,
        generation: 0,
    })
}

impl ScalarField {
    /// Wrap existing values as an n×n field.
    pub fn from_values(n: usize, values: Vec<f64>) -> Result<Self> {
        check_dimension(n)?;
        if values.len() != n * n {
            return Err(SimError::ShapeMismatch {
                expected: n * n,
                actual: values.len(),
            });
        }
        Ok(ScalarField {
            n,
            values,
            generation: 0,
        })
    }

    /// Build a field from square rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        check_dimension(n)?;
        let mut values = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(SimError::ShapeMismatch {
                    expected: n * n,
                    actual: n * row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Self::from_values(n, values)
    }

    /// A field with every cell set to `value`.
    pub fn constant(n: usize, value: f64) -> Result<Self> {
        check_dimension(n)?;
        Ok(ScalarField {
            n,
            values: vec![value; n * n],
            generation: 0,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at (i, j); coordinates wrap around the torus.
    pub fn get(&self, i: isize, j: isize) -> f64 {
        let n = self.n as isize;
        self.values[(i.rem_euclid(n) * n + j.rem_euclid(n)) as usize]
    }

    /// Set the value at (i, j); coordinates wrap around the torus.
    pub fn set(&mut self, i: isize, j: isize, value: f64) {
        let n = self.n as isize;
        self.values[(i.rem_euclid(n) * n + j.rem_euclid(n)) as usize] = value;
    }

    /// Sum over all cells (the conserved quantity of the conserved step).
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn mean(&self) -> f64 {
        self.sum() / self.values.len() as f64
    }

    /// Smallest and largest value in the field.
    pub fn min_max(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_field() {
        let field = create_field(8).unwrap();
        assert_eq!(field.n(), 8);
        assert_eq!(field.values().len(), 64);
        assert_eq!(field.generation(), 0);
        assert!(field.values().iter().all(|&v| v == 0.0));
        assert!(create_field(0).is_err());
    }

    #[test]
    fn test_set_get_wraps() {
        let mut field = create_field(4).unwrap();
        field.set(-1, 0, 2.5);
        assert_eq!(field.get(3, 0), 2.5);
        assert_eq!(field.get(7, 4), 2.5);
        assert_eq!(field.get(0, 0), 0.0);
    }

    #[test]
    fn test_symmetric_profile_range() {
        let field = random_field(32, FieldProfile::Symmetric, Some(3)).unwrap();
        assert!(field.values().iter().all(|&v| (-0.1..0.1).contains(&v)));
        let (lo, hi) = field.min_max();
        assert!(lo < 0.0 && hi > 0.0);
        assert!(field.mean().abs() < 0.02);
    }

    #[test]
    fn test_offset_profile_range() {
        let field = random_field(16, FieldProfile::Offset, Some(3)).unwrap();
        assert!(field.values().iter().all(|&v| (-0.4..-0.2).contains(&v)));
    }

    #[test]
    fn test_center_seed_profile() {
        let field = random_field(9, FieldProfile::CenterSeed, Some(3)).unwrap();
        assert_eq!(field.get(4, 4), 1.0);
        let others = field
            .values()
            .iter()
            .enumerate()
            .filter(|&(idx, _)| idx != 4 * 9 + 4);
        for (_, &v) in others {
            assert!(v.abs() < 0.001);
        }
    }

    #[test]
    fn test_seeded_fields_repeat() {
        let a = random_field(10, FieldProfile::Symmetric, Some(11)).unwrap();
        let b = random_field(10, FieldProfile::Symmetric, Some(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shape_checks() {
        assert!(matches!(
            ScalarField::from_values(3, vec![0.0; 10]),
            Err(SimError::ShapeMismatch {
                expected: 9,
                actual: 10
            })
        ));
        let rows = vec![vec![0.0, 1.0], vec![2.0]];
        assert!(matches!(
            ScalarField::from_rows(&rows),
            Err(SimError::ShapeMismatch { .. })
        ));
        let rows = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
        let field = ScalarField::from_rows(&rows).unwrap();
        assert_eq!(field.get(1, 0), 2.0);
        assert_eq!(field.sum(), 6.0);
    }
}
