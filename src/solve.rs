use alloc::vec::Vec;
use core::fmt;

use crate::matrix::Matrix;
use crate::traits::RealScalar;

/// Outcome of solving a linear system from its augmented matrix.
///
/// Values are the exact computed reals; rounding for display is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution<T> {
    /// Exactly one solution; `values[i]` is the value of variable `x_{i+1}`.
    Unique(Vec<T>),
    /// Infinitely many solutions: the system's rank is below its variable
    /// count and no row is inconsistent.
    Infinite { rank: usize, vars: usize },
    /// An inconsistent system: some row reduces to `0 = c` with `c` nonzero.
    NoSolution,
}

impl<T: fmt::Display> fmt::Display for Solution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Unique(values) => {
                write!(f, "unique solution:")?;
                for (i, v) in values.iter().enumerate() {
                    write!(f, " x{} = {}", i + 1, v)?;
                }
                Ok(())
            }
            Solution::Infinite { rank, vars } => write!(
                f,
                "infinitely many solutions: rank {} < {} variables",
                rank, vars
            ),
            Solution::NoSolution => write!(f, "no solution (inconsistent system)"),
        }
    }
}

/// Solve the linear system `Ax = B` given as an augmented matrix.
///
/// The last column of `m` is the constants vector `B`; all preceding
/// columns are coefficients, so the system has `ncols - 1` variables.
/// Operates on a private clone; the caller's matrix is never mutated.
///
/// The routine runs full Gauss-Jordan elimination to reduced row-echelon
/// form with *maximal-magnitude* partial pivoting (for numerical
/// stability), normalizing each pivot row and eliminating the pivot column
/// both above and below. Classification and pivoting use
/// [`RealScalar::solve_tol`] (`1e-10` for `f64`), tighter than the rank
/// engine's tolerance; the two eliminations are intentionally separate
/// routines — see [`rank`](crate::rank()).
///
/// After elimination:
/// - any row with an all-zero coefficient part and a nonzero constant
///   makes the system inconsistent ([`Solution::NoSolution`]);
/// - otherwise, fewer independent coefficient rows than variables means
///   [`Solution::Infinite`];
/// - otherwise the RREF has pivots in diagonal order and the solution is
///   read straight from the constants column ([`Solution::Unique`]).
///
/// # Examples
///
/// ```
/// use rowreduce::{solve, Matrix, Solution};
///
/// // x + y = 3, x - y = 1  =>  x = 2, y = 1
/// let m: Matrix<f64> = Matrix::from_rows(2, 3, &[
///     1.0, 1.0, 3.0,
///     1.0, -1.0, 1.0,
/// ]);
/// match solve(&m) {
///     Solution::Unique(x) => {
///         assert!((x[0] - 2.0).abs() < 1e-12);
///         assert!((x[1] - 1.0).abs() < 1e-12);
///     }
///     other => panic!("expected unique solution, got {:?}", other),
/// }
/// ```
pub fn solve<T: RealScalar>(m: &Matrix<T>) -> Solution<T> {
    let mut mat = m.clone();
    let nrows = mat.nrows();
    let ncols = mat.ncols();
    assert!(ncols >= 1, "augmented matrix needs a constants column");
    let vars = ncols - 1;
    let tol = T::solve_tol();

    // Gauss-Jordan: reduce to RREF with max-magnitude partial pivoting.
    let mut pivot_row = 0;
    for col in 0..vars {
        if pivot_row >= nrows {
            break;
        }

        let mut max_row = pivot_row;
        for i in (pivot_row + 1)..nrows {
            if mat[(i, col)].abs() > mat[(max_row, col)].abs() {
                max_row = i;
            }
        }
        if mat[(max_row, col)].abs() < tol {
            continue; // column is zero from here down
        }

        mat.swap_rows(pivot_row, max_row);

        // Normalize the pivot row so the pivot entry becomes 1
        let pivot = mat[(pivot_row, col)];
        mat.scale_row(pivot_row, T::one() / pivot);

        // Eliminate the column everywhere else, above and below
        for i in 0..nrows {
            if i != pivot_row {
                let factor = mat[(i, col)];
                if factor != T::zero() {
                    mat.add_scaled_row(i, pivot_row, -factor);
                }
            }
        }

        pivot_row += 1;
    }

    classify(&mat, vars, tol)
}

/// Classify an RREF augmented matrix.
fn classify<T: RealScalar>(mat: &Matrix<T>, vars: usize, tol: T) -> Solution<T> {
    // Inconsistent row: zero coefficients, nonzero constant
    for i in 0..mat.nrows() {
        let coeffs_zero = (0..vars).all(|j| mat[(i, j)].abs() <= tol);
        if coeffs_zero && mat[(i, vars)].abs() > tol {
            return Solution::NoSolution;
        }
    }

    // Rank: rows with at least one nonzero coefficient entry
    let rank = (0..mat.nrows())
        .filter(|&i| (0..vars).any(|j| mat[(i, j)].abs() > tol))
        .count();

    if rank < vars {
        return Solution::Infinite { rank, vars };
    }

    // RREF with a pivot in every variable column: x_i sits in row i
    let values = (0..vars).map(|i| mat[(i, vars)]).collect();
    Solution::Unique(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unique(m: &Matrix<f64>, expected: &[f64]) {
        match solve(m) {
            Solution::Unique(values) => {
                assert_eq!(values.len(), expected.len());
                for (got, want) in values.iter().zip(expected) {
                    assert!(
                        (got - want).abs() < 1e-10,
                        "got {:?}, expected {:?}",
                        values,
                        expected
                    );
                }
            }
            other => panic!("expected unique solution, got {:?}", other),
        }
    }

    #[test]
    fn already_reduced() {
        let m = Matrix::from_rows(2, 3, &[1.0, 0.0, 2.0, 0.0, 1.0, 3.0]);
        assert_unique(&m, &[2.0, 3.0]);
    }

    #[test]
    fn three_by_three() {
        // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3
        let m = Matrix::from_rows(
            3,
            4,
            &[
                2.0, 1.0, -1.0, 8.0, //
                -3.0, -1.0, 2.0, -11.0, //
                -2.0, 1.0, 2.0, -3.0,
            ],
        );
        assert_unique(&m, &[2.0, 3.0, -1.0]);
    }

    #[test]
    fn needs_row_swap() {
        // Zero pivot in the first position forces a swap
        let m = Matrix::from_rows(2, 3, &[0.0, 1.0, 3.0, 1.0, 0.0, 2.0]);
        assert_unique(&m, &[2.0, 3.0]);
    }

    #[test]
    fn infinite_solutions() {
        let m = Matrix::from_rows(2, 3, &[1.0, 1.0, 2.0, 2.0, 2.0, 4.0]);
        assert_eq!(solve(&m), Solution::Infinite { rank: 1, vars: 2 });
    }

    #[test]
    fn no_solution() {
        let m = Matrix::from_rows(2, 3, &[1.0, 1.0, 2.0, 1.0, 1.0, 5.0]);
        assert_eq!(solve(&m), Solution::NoSolution);
    }

    #[test]
    fn underdetermined_consistent() {
        // One equation, two unknowns
        let m = Matrix::from_rows(1, 3, &[1.0, 2.0, 3.0]);
        assert_eq!(solve(&m), Solution::Infinite { rank: 1, vars: 2 });
    }

    #[test]
    fn overdetermined_consistent() {
        // Three equations, two unknowns, third is the sum of the others
        let m = Matrix::from_rows(
            3,
            3,
            &[
                1.0, 0.0, 2.0, //
                0.0, 1.0, 3.0, //
                1.0, 1.0, 5.0,
            ],
        );
        assert_unique(&m, &[2.0, 3.0]);
    }

    #[test]
    fn overdetermined_inconsistent() {
        let m = Matrix::from_rows(
            3,
            3,
            &[
                1.0, 0.0, 2.0, //
                0.0, 1.0, 3.0, //
                1.0, 1.0, 6.0,
            ],
        );
        assert_eq!(solve(&m), Solution::NoSolution);
    }

    #[test]
    fn homogeneous_square() {
        // x = y = 0 is the only solution
        let m = Matrix::from_rows(2, 3, &[1.0, 1.0, 0.0, 1.0, -1.0, 0.0]);
        assert_unique(&m, &[0.0, 0.0]);
    }

    #[test]
    fn pivoting_handles_small_leading_entry() {
        // Tiny but meaningful leading coefficient: max-magnitude pivoting
        // keeps the arithmetic stable.
        let m = Matrix::from_rows(2, 3, &[1e-3, 1.0, 1.0, 1.0, 1.0, 2.0]);
        match solve(&m) {
            Solution::Unique(values) => {
                // x = 1/(1 - 1e-3), y = (1 - 2e-3)/(1 - 1e-3)
                let x: f64 = 1.0 / (1.0 - 1e-3);
                let y: f64 = (1.0 - 2e-3) / (1.0 - 1e-3);
                assert!((values[0] - x).abs() < 1e-12);
                assert!((values[1] - y).abs() < 1e-12);
            }
            other => panic!("expected unique solution, got {:?}", other),
        }
    }

    #[test]
    fn input_not_mutated() {
        let m = Matrix::from_rows(2, 3, &[1.0, 1.0, 3.0, 1.0, -1.0, 1.0]);
        let before = m.clone();
        let _ = solve(&m);
        assert_eq!(m, before);
    }

    #[test]
    fn display_variants() {
        let s = alloc::format!("{}", Solution::Unique(alloc::vec![2.0, 3.0]));
        assert_eq!(s, "unique solution: x1 = 2 x2 = 3");
        let s = alloc::format!("{}", Solution::<f64>::Infinite { rank: 1, vars: 2 });
        assert_eq!(s, "infinitely many solutions: rank 1 < 2 variables");
        let s = alloc::format!("{}", Solution::<f64>::NoSolution);
        assert_eq!(s, "no solution (inconsistent system)");
    }
}
