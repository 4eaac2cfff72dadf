use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point matrix elements.
///
/// Required by the elimination routines ([`rank`](crate::rank()) and
/// [`solve`](crate::solve())), which need `abs`, division, and an
/// epsilon-based zero test. Carries the two tolerance constants as
/// associated functions so each float width gets a sensible default.
///
/// The two tolerances are intentionally different:
///
/// - [`rank_tol`](RealScalar::rank_tol) — zero test used by the rank
///   engine's forward elimination.
/// - [`solve_tol`](RealScalar::solve_tol) — tighter zero test used by the
///   Gauss-Jordan solver for pivot selection and system classification.
pub trait RealScalar: Scalar + Float {
    /// Zero tolerance for rank computation.
    fn rank_tol() -> Self;

    /// Zero tolerance for system solving and classification.
    fn solve_tol() -> Self;
}

macro_rules! impl_real_scalar {
    ($($t:ty => ($rank:expr, $solve:expr)),* $(,)?) => {
        $(
            impl RealScalar for $t {
                #[inline] fn rank_tol() -> $t { $rank }
                #[inline] fn solve_tol() -> $t { $solve }
            }
        )*
    };
}

impl_real_scalar!(
    f64 => (1e-8, 1e-10),
    f32 => (1e-4, 1e-5),
);
