use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::matrix::Matrix;
use crate::traits::Scalar;

/// Errors from matrix text parsing and validation.
///
/// Every variant carries enough context to render a message the user can
/// act on; the caller decides how to present it.
///
/// ```
/// use rowreduce::{parse_matrix, ParseError};
///
/// let err = parse_matrix::<f64>("  \n\n").unwrap_err();
/// assert_eq!(err, ParseError::Empty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input contained no non-blank lines.
    Empty,
    /// A row's length differs from the first row's length.
    ///
    /// `line` is the 1-based position among non-blank lines.
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A token could not be parsed as a number.
    BadToken { line: usize, token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "matrix cannot be empty"),
            ParseError::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} entries, expected {}",
                line, found, expected
            ),
            ParseError::BadToken { line, token } => {
                write!(f, "row {}: '{}' is not a number", line, token)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Parse a matrix from plain text and validate it as rectangular numeric.
///
/// One row per non-blank line, entries separated by whitespace; leading and
/// trailing whitespace per line is ignored. Line order is preserved. The
/// result always has at least one row and one column, and all rows have the
/// first row's length — there is no way to obtain an unvalidated matrix.
/// Tokens that fail numeric conversion, including a literal `NaN`, are
/// rejected.
///
/// Pure: no state is touched on either success or failure.
///
/// # Examples
///
/// ```
/// use rowreduce::parse_matrix;
///
/// let m = parse_matrix::<f64>("1 2 3\n4 5 6\n").unwrap();
/// assert_eq!(m.nrows(), 2);
/// assert_eq!(m.ncols(), 3);
/// assert_eq!(m[(1, 2)], 6.0);
///
/// // Blank lines are skipped, per-line whitespace is forgiven
/// let m = parse_matrix::<f64>("\n  1 2  \n\n  3 4\n").unwrap();
/// assert_eq!(m.nrows(), 2);
///
/// assert!(parse_matrix::<f64>("1 2\n3").is_err());
/// assert!(parse_matrix::<f64>("1 x").is_err());
/// ```
pub fn parse_matrix<T: Scalar + FromStr>(text: &str) -> Result<Matrix<T>, ParseError> {
    let mut data: Vec<T> = Vec::new();
    let mut nrows = 0;
    let mut ncols = 0;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let mut found = 0;
        for token in line.split_whitespace() {
            let value = token.parse::<T>().ok().filter(is_number).ok_or_else(|| {
                ParseError::BadToken {
                    line: nrows + 1,
                    token: token.to_string(),
                }
            })?;
            data.push(value);
            found += 1;
        }
        if nrows == 0 {
            ncols = found;
        } else if found != ncols {
            return Err(ParseError::Ragged {
                line: nrows + 1,
                expected: ncols,
                found,
            });
        }
        nrows += 1;
    }

    // A non-blank line always yields at least one token, so ncols > 0 here.
    if nrows == 0 {
        return Err(ParseError::Empty);
    }

    Ok(Matrix::from_vec(nrows, ncols, data))
}

/// NaN is the only value that differs from itself. "NaN" parses as a
/// float but is not a usable matrix entry.
#[allow(clippy::eq_op)]
fn is_number<T: PartialEq>(v: &T) -> bool {
    v == v
}
