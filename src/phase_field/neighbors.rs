//! Periodic nearest and next-nearest neighbor sums.

use rayon::prelude::*;

use super::field::ScalarField;

/// Per-cell neighbor sums of a field.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborSums {
    n: usize,
    /// `A1`: sum of the 4 orthogonally adjacent cells.
    pub orthogonal: Vec<f64>,
    /// `A2`: sum of the 4 diagonally adjacent cells.
    pub diagonal: Vec<f64>,
}

impl NeighborSums {
    pub fn n(&self) -> usize {
        self.n
    }

    /// (A1, A2) at (i, j).
    pub fn at(&self, i: usize, j: usize) -> (f64, f64) {
        let idx = i * self.n + j;
        (self.orthogonal[idx], self.diagonal[idx])
    }
}

/// Compute (A1, A2) for every cell with periodic boundaries.
///
/// Equivalent to summing circular shifts of the field by ±1 along each axis,
/// and the four row-shift/column-shift compositions for the diagonals. The
/// summation order is fixed so results are reproducible bit for bit.
pub fn pbc_neighbors(field: &ScalarField) -> NeighborSums {
    let n = field.n;
    let f = &field.values;
    let mut orthogonal = vec![0.0; n * n];
    let mut diagonal = vec![0.0; n * n];

    orthogonal
        .par_chunks_mut(n)
        .zip(diagonal.par_chunks_mut(n))
        .enumerate()
        .for_each(|(i, (a1_row, a2_row))| {
            let up = (i + n - 1) % n;
            let down = (i + 1) % n;
            for j in 0..n {
                let left = (j + n - 1) % n;
                let right = (j + 1) % n;
                a1_row[j] =
                    f[up * n + j] + f[down * n + j] + f[i * n + left] + f[i * n + right];
                a2_row[j] = f[up * n + left]
                    + f[down * n + left]
                    + f[up * n + right]
                    + f[down * n + right];
            }
        });

    NeighborSums {
        n,
        orthogonal,
        diagonal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `out[i][j] = f[i - di][j - dj]`, wrapping.
    fn roll(field: &ScalarField, di: isize, dj: isize) -> Vec<f64> {
        let n = field.n() as isize;
        let mut out = vec![0.0; (n * n) as usize];
        for i in 0..n {
            for j in 0..n {
                out[(i * n + j) as usize] = field.get(i - di, j - dj);
            }
        }
        out
    }

    #[test]
    fn test_constant_field() {
        for n in 1..=7 {
            let field = ScalarField::constant(n, 0.75).unwrap();
            let sums = pbc_neighbors(&field);
            assert!(sums.orthogonal.iter().all(|&a| a == 3.0), "n = {n}");
            assert!(sums.diagonal.iter().all(|&a| a == 3.0), "n = {n}");
        }
    }

    #[test]
    fn test_single_spike() {
        let mut field = ScalarField::constant(5, 0.0).unwrap();
        field.set(2, 3, 1.0);
        let sums = pbc_neighbors(&field);

        for (i, j) in [(1, 3), (3, 3), (2, 2), (2, 4)] {
            assert_eq!(sums.at(i, j), (1.0, 0.0));
        }
        for (i, j) in [(1, 2), (1, 4), (3, 2), (3, 4)] {
            assert_eq!(sums.at(i, j), (0.0, 1.0));
        }
        assert_eq!(sums.at(2, 3), (0.0, 0.0));
        assert_eq!(sums.orthogonal.iter().sum::<f64>(), 4.0);
        assert_eq!(sums.diagonal.iter().sum::<f64>(), 4.0);
    }

    #[test]
    fn test_spike_on_corner_wraps() {
        let mut field = ScalarField::constant(4, 0.0).unwrap();
        field.set(0, 0, 1.0);
        let sums = pbc_neighbors(&field);
        assert_eq!(sums.at(3, 0), (1.0, 0.0));
        assert_eq!(sums.at(0, 3), (1.0, 0.0));
        assert_eq!(sums.at(3, 3), (0.0, 1.0));
    }

    #[test]
    fn test_two_by_two_counts_neighbors_twice() {
        let field = ScalarField::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let sums = pbc_neighbors(&field);
        // Both row shifts land on the other row, both column shifts on the other column
        assert_eq!(sums.at(0, 0), (3.0 + 3.0 + 2.0 + 2.0, 4.0 * 4.0));
    }

    #[test]
    fn test_matches_circular_shifts() {
        let values: Vec<f64> = (0..36).map(|k| ((k * 7) % 11) as f64 - 5.0).collect();
        let field = ScalarField::from_values(6, values).unwrap();
        let sums = pbc_neighbors(&field);

        let shifts = |pairs: [(isize, isize); 4]| -> Vec<f64> {
            let rolled: Vec<Vec<f64>> = pairs
                .iter()
                .map(|&(di, dj)| roll(&field, di, dj))
                .collect();
            (0..36)
                .map(|k| rolled[0][k] + rolled[1][k] + rolled[2][k] + rolled[3][k])
                .collect()
        };

        assert_eq!(
            sums.orthogonal,
            shifts([(1, 0), (-1, 0), (0, 1), (0, -1)])
        );
        assert_eq!(sums.diagonal, shifts([(1, 1), (-1, 1), (1, -1), (-1, -1)]));
    }
}
