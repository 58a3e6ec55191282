//! Region extraction and import operations.

use super::grid::{index_of, BinaryGrid};
use crate::config::{OFF, ON};

/// Clamp a half-open rectangle to the grid. Returns `None` for empty regions.
fn clamp_region(
    n: usize,
    min_i: isize,
    min_j: isize,
    max_i: isize,
    max_j: isize,
) -> Option<(usize, usize, usize, usize)> {
    let clamp = |k: isize| k.max(0).min(n as isize) as usize;
    let (min_i, min_j, max_i, max_j) = (clamp(min_i), clamp(min_j), clamp(max_i), clamp(max_j));

    if min_i >= max_i || min_j >= max_j {
        return None;
    }
    Some((min_i, min_j, max_i, max_j))
}

/// Extract a rectangular region of the grid into a flat buffer.
///
/// # Layout
/// The buffer is filled row by row (i changes slowest, j changes fastest),
/// the same order `import_region` reads.
///
/// # Returns
/// Number of bytes written to the buffer, or 0 on error.
pub fn extract_region(
    grid: &BinaryGrid,
    out_buf: &mut [u8],
    min_i: isize,
    min_j: isize,
    max_i: isize,
    max_j: isize,
) -> usize {
    let Some((min_i, min_j, max_i, max_j)) = clamp_region(grid.n, min_i, min_j, max_i, max_j)
    else {
        return 0;
    };

    let width = max_j - min_j;
    let total_size = (max_i - min_i) * width;
    if out_buf.len() < total_size {
        return 0;
    }

    for (row, i) in (min_i..max_i).enumerate() {
        let start = index_of(grid.n, i, min_j);
        out_buf[row * width..(row + 1) * width]
            .copy_from_slice(&grid.cells[start..start + width]);
    }

    total_size
}

/// Import a rectangular region from a flat buffer into the grid.
///
/// Input values are normalized: 0 = OFF, any non-zero = ON.
///
/// # Returns
/// Number of bytes read from the buffer, or 0 on error.
pub fn import_region(
    grid: &mut BinaryGrid,
    in_buf: &[u8],
    min_i: isize,
    min_j: isize,
    max_i: isize,
    max_j: isize,
) -> usize {
    let Some((min_i, min_j, max_i, max_j)) = clamp_region(grid.n, min_i, min_j, max_i, max_j)
    else {
        return 0;
    };

    let width = max_j - min_j;
    let total_size = (max_i - min_i) * width;
    if in_buf.len() < total_size {
        return 0;
    }

    for (row, i) in (min_i..max_i).enumerate() {
        for (col, j) in (min_j..max_j).enumerate() {
            let value = in_buf[row * width + col];
            grid.cells[index_of(grid.n, i, j)] = if value == 0 { OFF } else { ON };
        }
    }

    total_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::grid::create_grid;

    #[test]
    fn test_extract_region_basic() {
        let mut grid = create_grid(8).unwrap();
        grid.set(2, 2, true);
        grid.set(2, 3, true);
        grid.set(3, 2, true);

        let mut buffer = vec![0u8; 16];
        let written = extract_region(&grid, &mut buffer, 2, 2, 6, 6);

        assert_eq!(written, 16);
        assert_eq!(buffer[0], ON); // (2,2)
        assert_eq!(buffer[1], ON); // (2,3)
        assert_eq!(buffer[4], ON); // (3,2)
        assert_eq!(buffer[5], OFF); // (3,3)
    }

    #[test]
    fn test_extract_region_clamps() {
        let mut grid = create_grid(4).unwrap();
        grid.set(0, 0, true);

        let mut buffer = vec![0u8; 16];
        let written = extract_region(&grid, &mut buffer, -5, -5, 100, 100);
        assert_eq!(written, 16);
        assert_eq!(buffer[0], ON);
        assert_eq!(buffer.iter().filter(|&&c| c == ON).count(), 1);
    }

    #[test]
    fn test_extract_region_rejects_small_buffer() {
        let grid = create_grid(4).unwrap();
        let mut buffer = vec![0u8; 3];
        assert_eq!(extract_region(&grid, &mut buffer, 0, 0, 2, 2), 0);
    }

    #[test]
    fn test_empty_or_inverted_region() {
        let mut grid = create_grid(4).unwrap();
        let mut buffer = vec![0u8; 16];
        assert_eq!(extract_region(&grid, &mut buffer, 2, 2, 2, 4), 0);
        assert_eq!(import_region(&mut grid, &buffer, 3, 3, 1, 1), 0);
    }

    #[test]
    fn test_import_region_normalizes() {
        let mut grid = create_grid(4).unwrap();
        let input = [0u8, 1, 7, 0];

        let read = import_region(&mut grid, &input, 1, 1, 3, 3);
        assert_eq!(read, 4);
        assert!(!grid.is_on(1, 1));
        assert!(grid.is_on(1, 2));
        assert!(grid.is_on(2, 1));
        assert!(!grid.is_on(2, 2));
        assert!(grid.cells().iter().all(|&c| c == ON || c == OFF));
    }

    #[test]
    fn test_import_then_extract() {
        let mut grid = create_grid(6).unwrap();
        let input = [ON, OFF, ON, OFF, ON, OFF];
        assert_eq!(import_region(&mut grid, &input, 0, 0, 2, 3), 6);

        let mut out = [0u8; 6];
        assert_eq!(extract_region(&grid, &mut out, 0, 0, 2, 3), 6);
        assert_eq!(out, input);
    }
}
