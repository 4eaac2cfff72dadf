//! # rowreduce
//!
//! Pure-Rust engine for teaching Gaussian elimination, no-std compatible.
//! Parse a dense real matrix from text, apply elementary row operations
//! step by step with full undo, compute rank, and solve linear systems
//! with unique / infinite / no-solution classification. Built to sit
//! behind an interactive UI layer, which owns all presentation.
//!
//! ## Quick start
//!
//! ```
//! use rowreduce::{parse_matrix, rank, solve, Session, Solution};
//!
//! // Rank of a matrix as entered
//! let m = parse_matrix::<f64>("1 2 3\n2 4 6\n0 0 1").unwrap();
//! assert_eq!(rank(&m), 2);
//!
//! // Reduce interactively, then check a proposed rank
//! let mut session = Session::new(m);
//! session.apply_add(1, 0, -2.0).unwrap(); // R2 → R2 - 2R1
//! assert!(session.check_rank(2).is_correct());
//!
//! // Solve x = 2, y = 3 from its augmented matrix
//! let system = parse_matrix("1 0 2\n0 1 3").unwrap();
//! assert_eq!(solve(&system), Solution::Unique(vec![2.0, 3.0]));
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated `Matrix<T>` with runtime dimensions.
//!   Row-major `Vec<T>` storage, so the elementary row operations
//!   (`swap_rows`, `scale_row`, `add_scaled_row`) act on contiguous
//!   slices. Indexing by `(row, col)`, aligned `Display`, and `to_text`
//!   for re-parseable plain output.
//!
//! - [`parse`] — [`parse_matrix`]: whitespace/newline text into a
//!   validated rectangular matrix. Rejects empty input, ragged rows, and
//!   non-numeric tokens with a structured [`ParseError`].
//!
//! - [`session`] — [`Session`]: an owned interactive reduction session.
//!   Applies [`RowOp`]s with eager validation (apply-or-reject, never
//!   partial), keeps snapshot history for exact undo, logs each step in
//!   classroom notation, and checks proposed ranks.
//!
//! - [`rank`](mod@rank) — [`rank()`]: forward elimination with
//!   first-nonzero partial pivoting and an epsilon zero test.
//!
//! - [`solve`](mod@solve) — [`solve()`]: full Gauss-Jordan elimination to
//!   reduced row-echelon form with maximal-magnitude partial pivoting,
//!   returning a [`Solution`]. Kept deliberately separate from the rank
//!   routine: different pivot rule, tighter tolerance.
//!
//! - [`traits`] — [`Scalar`] element bound and [`RealScalar`], which
//!   carries the per-float-width elimination tolerances.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | `std::error::Error` impls, hardware FPU via system libm |
//! | `libm`  | no       | Pure-Rust software float fallback for no-std targets |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod matrix;
pub mod parse;
pub mod rank;
pub mod session;
pub mod solve;
pub mod traits;

pub use matrix::Matrix;
pub use parse::{parse_matrix, ParseError};
pub use rank::rank;
pub use session::{OpError, RankCheck, RowOp, Session};
pub use solve::{solve, Solution};
pub use traits::{RealScalar, Scalar};
