//! Scalar domains shared by the algebraic reasoning engines
//!
//! Exact rationals carry every linear-combination coefficient. The other
//! three carriers give each AR domain its right-hand-side arithmetic:
//! angles live on the additive circle R/Z, multiplicative ratios live in
//! the positive reals (with addition mapped to multiplication), and exact
//! multiplicative constants are formal products of prime powers.

mod add_circle;
mod posreal;
mod root_rat;
mod util;

pub use add_circle::{circle_approx_eq, circle_approx_eq_rat, AddCircle, CircleCarrier};
pub use posreal::{posreal_approx_eq, Posreal};
pub use root_rat::{posreal_approx_eq_root_rat, RootRat};
pub use util::{
    approx_eq, approx_eq_nnrat, approx_eq_rat, integer_nth_root, integer_sqrt, known_sin_squares,
    nnrat_to_f64, nnrat_to_rat, nnrat_to_string, rat_nth_root, rat_sqrt, rat_to_f64,
    rat_to_nnrat, rat_to_string, EPS, REL_TOL,
};

use num_rational::Ratio;

/// Signed integers backing [`Rat`].
pub type Int = i64;
/// Unsigned integers backing [`NNRat`].
pub type Nat = u64;

/// Exact signed rationals; every AR coefficient lives here.
pub type Rat = Ratio<Int>;

/// Exact non-negative rationals (ratio constants, squared lengths).
pub type NNRat = Ratio<Nat>;
