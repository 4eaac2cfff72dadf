use alloc::vec::Vec;
use core::fmt;

use crate::matrix::Matrix;
use crate::rank::rank;
use crate::traits::RealScalar;

/// An elementary row operation.
///
/// Row indices are zero-based. Applied operations double as the step log:
/// `Display` renders the classroom notation with 1-based row labels.
///
/// ```
/// use rowreduce::RowOp;
///
/// let op = RowOp::Add { dst: 0, src: 1, k: 2.0 };
/// assert_eq!(op.to_string(), "R1 → R1 + 2R2");
/// assert_eq!(RowOp::<f64>::Swap { a: 0, b: 2 }.to_string(), "R1 ↔ R3");
/// assert_eq!(RowOp::Scale { row: 1, k: 3.0 }.to_string(), "R2 → 3R2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowOp<T> {
    /// `R_dst <- R_dst + k * R_src`; `src` is unaffected.
    Add { dst: usize, src: usize, k: T },
    /// `R_row <- k * R_row`. `k = 0` is allowed: it produces a degenerate
    /// zero row, exactly as it would on paper, and remains undoable.
    Scale { row: usize, k: T },
    /// Exchange rows `a` and `b`.
    Swap { a: usize, b: usize },
}

impl<T: fmt::Display> fmt::Display for RowOp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOp::Add { dst, src, k } => {
                write!(f, "R{} → R{} + {}R{}", dst + 1, dst + 1, k, src + 1)
            }
            RowOp::Scale { row, k } => write!(f, "R{} → {}R{}", row + 1, k, row + 1),
            RowOp::Swap { a, b } => write!(f, "R{} ↔ R{}", a + 1, b + 1),
        }
    }
}

/// Errors from applying a row operation.
///
/// Raised before any mutation: a rejected operation leaves the matrix,
/// history, and step log exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpError {
    /// A row index is out of bounds for this matrix.
    RowOutOfRange { index: usize, nrows: usize },
    /// The multiplier is NaN or infinite.
    NonFiniteMultiplier,
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpError::RowOutOfRange { index, nrows } => write!(
                f,
                "row {} is out of range for a matrix with {} rows",
                index + 1,
                nrows
            ),
            OpError::NonFiniteMultiplier => write!(f, "multiplier must be a finite number"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OpError {}

/// Verdict of checking a proposed rank against a session's matrices.
///
/// The guess is correct only when it matches the rank of both the matrix
/// as entered and the current row-reduced matrix (elementary row
/// operations cannot change rank, so a mismatch between the two would
/// point at a degenerate step such as scaling by zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankCheck {
    /// The rank proposed by the user.
    pub guess: usize,
    /// Rank of the matrix as originally entered.
    pub original: usize,
    /// Rank of the current (row-reduced) matrix.
    pub reduced: usize,
}

impl RankCheck {
    /// Whether the guess matches both computed ranks.
    pub fn is_correct(&self) -> bool {
        self.guess == self.original && self.guess == self.reduced
    }
}

/// An interactive row-reduction session.
///
/// Owns the starting matrix, the current working matrix, a history of
/// snapshots for undo, and the log of applied operations. All state lives
/// in the session — nothing global — and is dropped with it.
///
/// Each successful apply snapshots the matrix as it was immediately before
/// the operation, mutates in place, and appends the operation to the log;
/// [`undo`](Session::undo) pops both in lockstep, so history and log always
/// describe exactly the operations applied and not yet undone.
///
/// # Examples
///
/// ```
/// use rowreduce::{parse_matrix, Session};
///
/// let m = parse_matrix("1 2\n3 4").unwrap();
/// let mut s = Session::new(m);
///
/// s.apply_add(1, 0, -3.0).unwrap(); // R2 → R2 - 3R1
/// assert_eq!(s.matrix().row_slice(1), &[0.0, -2.0]);
/// assert_eq!(s.log().len(), 1);
///
/// s.undo();
/// assert_eq!(s.matrix().row_slice(1), &[3.0, 4.0]);
/// assert!(!s.can_undo());
/// ```
#[derive(Debug, Clone)]
pub struct Session<T> {
    original: Matrix<T>,
    current: Matrix<T>,
    history: Vec<Matrix<T>>,
    log: Vec<RowOp<T>>,
}

impl<T: RealScalar> Session<T> {
    /// Start a session from a validated matrix.
    pub fn new(matrix: Matrix<T>) -> Self {
        Self {
            current: matrix.clone(),
            original: matrix,
            history: Vec::new(),
            log: Vec::new(),
        }
    }

    /// The current working matrix.
    pub fn matrix(&self) -> &Matrix<T> {
        &self.current
    }

    /// The matrix as it was when the session started.
    pub fn original(&self) -> &Matrix<T> {
        &self.original
    }

    /// Operations applied and not undone, oldest first.
    pub fn log(&self) -> &[RowOp<T>] {
        &self.log
    }

    /// Number of operations applied and not undone.
    pub fn steps_applied(&self) -> usize {
        self.log.len()
    }

    /// Whether there is anything to undo.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Validate and apply an elementary row operation.
    ///
    /// Validation happens before any mutation; on error the session is
    /// untouched. On success the pre-operation matrix is pushed onto the
    /// undo history and the operation is appended to the log.
    pub fn apply(&mut self, op: RowOp<T>) -> Result<(), OpError> {
        self.validate(&op)?;

        self.history.push(self.current.clone());
        match op {
            RowOp::Add { dst, src, k } => {
                if dst == src {
                    // R_i + k*R_i is just a scale by (1 + k)
                    self.current.scale_row(dst, T::one() + k);
                } else {
                    self.current.add_scaled_row(dst, src, k);
                }
            }
            RowOp::Scale { row, k } => self.current.scale_row(row, k),
            RowOp::Swap { a, b } => self.current.swap_rows(a, b),
        }
        self.log.push(op);
        Ok(())
    }

    /// Apply `R_i <- R_i + k * R_j`.
    pub fn apply_add(&mut self, i: usize, j: usize, k: T) -> Result<(), OpError> {
        self.apply(RowOp::Add { dst: i, src: j, k })
    }

    /// Apply `R_i <- k * R_i`.
    pub fn apply_scale(&mut self, i: usize, k: T) -> Result<(), OpError> {
        self.apply(RowOp::Scale { row: i, k })
    }

    /// Exchange rows `i` and `j`.
    pub fn apply_swap(&mut self, i: usize, j: usize) -> Result<(), OpError> {
        self.apply(RowOp::Swap { a: i, b: j })
    }

    /// Undo the most recent operation.
    ///
    /// Restores the exact pre-operation matrix and drops the matching log
    /// entry. Returns `false` (and does nothing) when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.current = snapshot;
                self.log.pop();
                true
            }
            None => false,
        }
    }

    /// Discard all operations and return to the starting matrix.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
        self.history.clear();
        self.log.clear();
    }

    /// Check a proposed rank against both the original and the current
    /// matrix.
    ///
    /// ```
    /// use rowreduce::{parse_matrix, Session};
    ///
    /// let s: Session<f64> = Session::new(parse_matrix("1 2\n2 4").unwrap());
    /// assert!(s.check_rank(1).is_correct());
    /// assert!(!s.check_rank(2).is_correct());
    /// ```
    pub fn check_rank(&self, guess: usize) -> RankCheck {
        RankCheck {
            guess,
            original: rank(&self.original),
            reduced: rank(&self.current),
        }
    }

    fn validate(&self, op: &RowOp<T>) -> Result<(), OpError> {
        let nrows = self.current.nrows();
        let check_row = |index: usize| {
            if index < nrows {
                Ok(())
            } else {
                Err(OpError::RowOutOfRange { index, nrows })
            }
        };
        let check_mult = |k: T| {
            if k.is_finite() {
                Ok(())
            } else {
                Err(OpError::NonFiniteMultiplier)
            }
        };

        match *op {
            RowOp::Add { dst, src, k } => {
                check_row(dst)?;
                check_row(src)?;
                check_mult(k)
            }
            RowOp::Scale { row, k } => {
                check_row(row)?;
                check_mult(k)
            }
            RowOp::Swap { a, b } => {
                check_row(a)?;
                check_row(b)
            }
        }
    }
}
