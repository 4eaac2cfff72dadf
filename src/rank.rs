use crate::matrix::Matrix;
use crate::traits::RealScalar;

/// Compute the rank of a matrix by forward Gaussian elimination.
///
/// Operates on a private clone; the caller's matrix is never mutated.
///
/// Pivoting picks the *first* row from the current one downward whose entry
/// in the column exceeds [`RealScalar::rank_tol`] in magnitude (`1e-8` for
/// `f64`). Columns with no such entry are skipped without consuming a pivot
/// row. This is deliberately not the same routine as the solver's
/// elimination, which pivots on maximal magnitude with a tighter tolerance —
/// see [`solve`](crate::solve()).
///
/// # Examples
///
/// ```
/// use rowreduce::{rank, Matrix};
///
/// // Row 2 is twice row 1
/// let m = Matrix::from_rows(3, 3, &[
///     1.0, 2.0, 3.0,
///     2.0, 4.0, 6.0,
///     0.0, 0.0, 1.0,
/// ]);
/// assert_eq!(rank(&m), 2);
///
/// let id = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
/// assert_eq!(rank(&id), 3);
/// ```
pub fn rank<T: RealScalar>(m: &Matrix<T>) -> usize {
    let mut mat = m.clone();
    let nrows = mat.nrows();
    let ncols = mat.ncols();
    let tol = T::rank_tol();

    let mut rank = 0;
    let mut row = 0;

    for col in 0..ncols {
        if row >= nrows {
            break;
        }

        // First row at or below `row` with a non-negligible entry in `col`
        let pivot = (row..nrows).find(|&i| mat[(i, col)].abs() > tol);
        let pivot = match pivot {
            Some(p) => p,
            None => continue, // column is zero from `row` down
        };

        mat.swap_rows(row, pivot);

        // Zero the column below the pivot
        for i in (row + 1)..nrows {
            let f = mat[(i, col)] / mat[(row, col)];
            if f != T::zero() {
                mat.add_scaled_row(i, row, -f);
            }
        }

        rank += 1;
        row += 1;
    }

    rank
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_rank_square() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(rank(&m), 2);
    }

    #[test]
    fn dependent_rows() {
        let m = Matrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 0.0, 1.0]);
        assert_eq!(rank(&m), 2);
    }

    #[test]
    fn zero_matrix() {
        let m = Matrix::<f64>::zeros(3, 4);
        assert_eq!(rank(&m), 0);
    }

    #[test]
    fn single_nonzero_entry() {
        let mut m = Matrix::<f64>::zeros(2, 2);
        m[(1, 1)] = 5.0;
        assert_eq!(rank(&m), 1);
    }

    #[test]
    fn wide_matrix() {
        // 2 rows of a 2x4 matrix, independent
        let m = Matrix::from_rows(2, 4, &[1.0, 0.0, 2.0, 1.0, 0.0, 1.0, 1.0, 1.0]);
        assert_eq!(rank(&m), 2);
    }

    #[test]
    fn tall_matrix() {
        let m = Matrix::from_rows(4, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0]);
        assert_eq!(rank(&m), 2);
    }

    #[test]
    fn rank_bounded_by_min_dimension() {
        let m = Matrix::from_fn(3, 5, |i, j| ((i + 1) * (j + 2)) as f64);
        assert!(rank(&m) <= 3);
    }

    #[test]
    fn leading_zero_column() {
        // First column all zero: pivot search must skip it without
        // consuming a pivot row.
        let m = Matrix::from_rows(2, 3, &[0.0, 1.0, 2.0, 0.0, 3.0, 4.0]);
        assert_eq!(rank(&m), 2);
    }

    #[test]
    fn near_zero_entries_below_tolerance() {
        let m = Matrix::from_rows(2, 2, &[1e-9, 0.0, 0.0, 1e-9]);
        assert_eq!(rank(&m), 0);
    }

    #[test]
    fn input_not_mutated() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let before = m.clone();
        let _ = rank(&m);
        assert_eq!(m, before);
    }

    #[test]
    fn cancellation_noise_absorbed() {
        // Second row equals the first after elimination, up to float noise
        let m = Matrix::from_rows(2, 2, &[3.0, 1.0, 1.0, 1.0 / 3.0]);
        assert_eq!(rank(&m), 1);
    }
}
