use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// Dynamically-sized heap-allocated dense matrix.
///
/// Row-major `Vec<T>` storage: elementary row operations (swap, scale,
/// add-a-multiple) act on contiguous slices. Dimensions are set at runtime;
/// every matrix has at least the shape it was constructed with — the type
/// itself does not forbid `0 x n`, but [`parse_matrix`](crate::parse_matrix)
/// never produces one and the elimination routines treat it as rank 0.
///
/// # Examples
///
/// ```
/// use rowreduce::Matrix;
///
/// let mut m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(m[(0, 1)], 2.0);
/// assert_eq!(m.nrows(), 2);
///
/// m.swap_rows(0, 1);
/// assert_eq!(m[(0, 0)], 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use rowreduce::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use rowreduce::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        Self {
            data: row_major.to_vec(),
            nrows,
            ncols,
        }
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }
}

impl<T> Matrix<T> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use rowreduce::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Row `i` as a contiguous slice.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Row `i` as a contiguous mutable slice.
    #[inline]
    pub fn row_slice_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Iterate over rows as slices, in order.
    ///
    /// ```
    /// use rowreduce::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let rows: Vec<&[f64]> = m.rows().collect();
    /// assert_eq!(rows[1], &[3.0, 4.0]);
    /// ```
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.ncols)
    }

    /// Mutable references to two distinct rows at once.
    ///
    /// Needed by `add_scaled_row`, where one row is read while the other
    /// is written. Panics if `a == b`.
    fn row_pair_mut(&mut self, a: usize, b: usize) -> (&mut [T], &mut [T]) {
        assert_ne!(a, b, "row_pair_mut requires distinct rows");
        let n = self.ncols;
        if a < b {
            let (lo, hi) = self.data.split_at_mut(b * n);
            (&mut lo[a * n..(a + 1) * n], &mut hi[..n])
        } else {
            let (lo, hi) = self.data.split_at_mut(a * n);
            (&mut hi[..n], &mut lo[b * n..(b + 1) * n])
        }
    }
}

// ── Elementary row operations ───────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Swap rows `a` and `b` in place. No-op when `a == b`.
    ///
    /// ```
    /// use rowreduce::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// m.swap_rows(0, 1);
    /// assert_eq!(m.row_slice(0), &[3.0, 4.0]);
    /// ```
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            let n = self.ncols;
            for j in 0..n {
                self.data.swap(a * n + j, b * n + j);
            }
        }
    }

    /// Scale row `i` by `k` in place: `R_i <- k * R_i`.
    ///
    /// `k = 0` is allowed and zeroes the row; row-reduction rules call that
    /// a degenerate step, and the engine leaves the judgement to the caller.
    ///
    /// ```
    /// use rowreduce::Matrix;
    /// let mut m = Matrix::from_rows(1, 3, &[1.0, -2.0, 4.0]);
    /// m.scale_row(0, 3.0);
    /// assert_eq!(m.row_slice(0), &[3.0, -6.0, 12.0]);
    /// ```
    pub fn scale_row(&mut self, i: usize, k: T) {
        for x in self.row_slice_mut(i) {
            *x = *x * k;
        }
    }

    /// Add `k` times row `src` to row `dst` in place: `R_dst <- R_dst + k * R_src`.
    ///
    /// `src` is unaffected. Panics if `dst == src`.
    ///
    /// ```
    /// use rowreduce::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 10.0, 20.0]);
    /// m.add_scaled_row(0, 1, 2.0);
    /// assert_eq!(m.row_slice(0), &[21.0, 42.0]);
    /// assert_eq!(m.row_slice(1), &[10.0, 20.0]);
    /// ```
    pub fn add_scaled_row(&mut self, dst: usize, src: usize, k: T) {
        let (d, s) = self.row_pair_mut(dst, src);
        for (x, &y) in d.iter_mut().zip(s.iter()) {
            *x = *x + k * y;
        }
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

// ── Plain-text round trip ───────────────────────────────────────────

impl<T: fmt::Display> Matrix<T> {
    /// Format as plain text: one line per row, entries separated by single
    /// spaces. The output reparses via [`parse_matrix`](crate::parse_matrix)
    /// to an equal matrix.
    ///
    /// ```
    /// use rowreduce::{parse_matrix, Matrix};
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.5, -3.0, 4.0]);
    /// let back: Matrix<f64> = parse_matrix(&m.to_text()).unwrap();
    /// assert_eq!(back, m);
    /// ```
    pub fn to_text(&self) -> String {
        use core::fmt::Write as _;
        let mut out = String::new();
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                if j > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{}", self[(i, j)]);
            }
            out.push('\n');
        }
        out
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// Aligned display with one bracketed line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Measure column widths first so entries line up.
        let mut widths = vec![0usize; self.ncols];
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                let w = alloc::format!("{}", self[(i, j)]).len();
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for i in 0..self.nrows {
            write!(f, "[")?;
            for j in 0..self.ncols {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = widths[j])?;
            }
            write!(f, "]")?;
            if i + 1 < self.nrows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let m = Matrix::<f64>::zeros(3, 4);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn from_rows() {
        let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_wrong_length() {
        let _ = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn index_mut() {
        let mut m = Matrix::<f64>::zeros(2, 2);
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
    }

    #[test]
    fn swap_rows() {
        let mut m = Matrix::from_rows(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        m.swap_rows(0, 2);
        assert_eq!(m.row_slice(0), &[5.0, 6.0]);
        assert_eq!(m.row_slice(1), &[3.0, 4.0]);
        assert_eq!(m.row_slice(2), &[1.0, 2.0]);
    }

    #[test]
    fn swap_rows_same_is_noop() {
        let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let before = m.clone();
        m.swap_rows(1, 1);
        assert_eq!(m, before);
    }

    #[test]
    fn scale_row() {
        let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        m.scale_row(1, -2.0);
        assert_eq!(m.row_slice(0), &[1.0, 2.0]);
        assert_eq!(m.row_slice(1), &[-6.0, -8.0]);
    }

    #[test]
    fn scale_row_by_zero() {
        let mut m = Matrix::from_rows(1, 3, &[1.0, 2.0, 3.0]);
        m.scale_row(0, 0.0);
        assert_eq!(m.row_slice(0), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn add_scaled_row() {
        let mut m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 10.0, 20.0, 30.0]);
        m.add_scaled_row(1, 0, -10.0);
        assert_eq!(m.row_slice(0), &[1.0, 2.0, 3.0]);
        assert_eq!(m.row_slice(1), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn add_scaled_row_dst_before_src() {
        let mut m = Matrix::from_rows(2, 2, &[1.0, 1.0, 2.0, 3.0]);
        m.add_scaled_row(0, 1, 2.0);
        assert_eq!(m.row_slice(0), &[5.0, 7.0]);
        assert_eq!(m.row_slice(1), &[2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "distinct rows")]
    fn add_scaled_row_same_row_panics() {
        let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        m.add_scaled_row(0, 0, 1.0);
    }

    #[test]
    fn rows_iterator() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let rows: Vec<&[f64]> = m.rows().collect();
        assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
    }

    #[test]
    fn display_aligned() {
        let m = Matrix::from_rows(2, 2, &[1.0, 20.0, 300.0, 4.0]);
        let s = alloc::format!("{}", m);
        assert_eq!(s, "[  1  20]\n[300   4]");
    }

    #[test]
    fn clone_eq() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = a.clone();
        assert_eq!(a, b);
    }
}
