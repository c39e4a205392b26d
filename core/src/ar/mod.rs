//! Algebraic reasoning: four linear engines over one shared machinery
//!
//! Each engine reduces geometric facts to linear equations over a scalar
//! domain: additive lengths, additive squared lengths, multiplicative
//! "sine-or-squared-length" ratios, and slope angles mod π. The domains
//! differ only in their variable atoms and right-hand-side carriers, which
//! the [`ArVar`] trait captures; the row-echelon store, the reduction
//! scratchpad, and the equation algebra are written once.

mod equation;
mod linear_combination;
mod linear_system;
mod reduced_equation;

pub use equation::Equation;
pub use linear_combination::LinearCombination;
pub use linear_system::{EchelonRow, LinearSystem, RowId};
pub use reduced_equation::ReducedEquation;

use crate::geometry::{Angle, Dist, Problem, SinOrDist, SlopeAngle, SquaredDist};
use crate::numbers::{
    approx_eq_rat, posreal_approx_eq_root_rat, rat_to_f64, AddCircle, Posreal, Rat, RootRat,
};
use crate::numbers::circle_approx_eq_rat;

/// Right-hand-side carriers of AR equations.
///
/// Arithmetic is written as explicit methods rather than operator bounds so
/// that the three carriers (exact rationals, the rational circle, formal
/// radicals) share one vocabulary.
pub trait RhsValue: Clone + PartialEq + Eq + std::hash::Hash + std::fmt::Debug {
    fn zero() -> Self;
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
    fn add(&mut self, other: &Self);
    fn sub(&mut self, other: &Self);
    fn scale(&mut self, coeff: &Rat);
    fn neg(&self) -> Self;
    fn sub_scaled(&mut self, coeff: &Rat, other: &Self) {
        let mut t = other.clone();
        t.scale(coeff);
        self.sub(&t);
    }
}

impl RhsValue for Rat {
    fn zero() -> Self {
        Rat::from_integer(0)
    }
    fn add(&mut self, other: &Self) {
        *self += other;
    }
    fn sub(&mut self, other: &Self) {
        *self -= other;
    }
    fn scale(&mut self, coeff: &Rat) {
        *self *= coeff;
    }
    fn neg(&self) -> Self {
        -*self
    }
}

impl RhsValue for AddCircle<Rat> {
    fn zero() -> Self {
        AddCircle::default()
    }
    fn add(&mut self, other: &Self) {
        *self += *other;
    }
    fn sub(&mut self, other: &Self) {
        *self -= *other;
    }
    fn scale(&mut self, coeff: &Rat) {
        *self *= coeff;
    }
    fn neg(&self) -> Self {
        -*self
    }
}

impl RhsValue for RootRat {
    fn zero() -> Self {
        RootRat::one()
    }
    fn add(&mut self, other: &Self) {
        *self += other;
    }
    fn sub(&mut self, other: &Self) {
        *self -= other;
    }
    fn scale(&mut self, coeff: &Rat) {
        *self *= coeff;
    }
    fn neg(&self) -> Self {
        -self.clone()
    }
}

/// Numerical carriers that linear combinations evaluate into.
pub trait EvalValue {
    fn zero() -> Self;
    fn accumulate(&mut self, term: Self);
    fn scale(&mut self, coeff: &Rat);
}

impl EvalValue for f64 {
    fn zero() -> Self {
        0.0
    }
    fn accumulate(&mut self, term: Self) {
        *self += term;
    }
    fn scale(&mut self, coeff: &Rat) {
        *self *= rat_to_f64(coeff);
    }
}

impl EvalValue for AddCircle<f64> {
    fn zero() -> Self {
        AddCircle::default()
    }
    fn accumulate(&mut self, term: Self) {
        *self += term;
    }
    fn scale(&mut self, coeff: &Rat) {
        *self *= coeff;
    }
}

impl EvalValue for Posreal {
    fn zero() -> Self {
        Posreal::default()
    }
    fn accumulate(&mut self, term: Self) {
        *self += term;
    }
    fn scale(&mut self, coeff: &Rat) {
        *self *= coeff;
    }
}

/// A variable atom of one of the AR domains.
pub trait ArVar: Copy + Ord + Eq + std::hash::Hash + std::fmt::Debug {
    type Rhs: RhsValue;
    type Eval: EvalValue;

    /// Wraparound right-hand sides (angles mod 1) need the
    /// denominator-clearing solved test; see [`ReducedEquation::is_solved`].
    const WRAPAROUND_RHS: bool = false;

    /// Human-readable name of the engine, used in proof output.
    const AR_LABEL: &'static str;

    fn eval_var(&self, prob: &Problem) -> Self::Eval;

    fn rhs_approx_eq(eval: &Self::Eval, rhs: &Self::Rhs) -> bool;
}

impl ArVar for Dist {
    type Rhs = Rat;
    type Eval = f64;
    const AR_LABEL: &'static str = "length chasing";

    fn eval_var(&self, prob: &Problem) -> f64 {
        self.eval(prob)
    }

    fn rhs_approx_eq(eval: &f64, rhs: &Rat) -> bool {
        approx_eq_rat(*eval, rhs)
    }
}

impl ArVar for SquaredDist {
    type Rhs = Rat;
    type Eval = f64;
    const AR_LABEL: &'static str = "squared lengths chasing";

    fn eval_var(&self, prob: &Problem) -> f64 {
        self.eval(prob)
    }

    fn rhs_approx_eq(eval: &f64, rhs: &Rat) -> bool {
        approx_eq_rat(*eval, rhs)
    }
}

impl ArVar for SinOrDist {
    type Rhs = RootRat;
    type Eval = Posreal;
    const AR_LABEL: &'static str = "ratio chasing";

    fn eval_var(&self, prob: &Problem) -> Posreal {
        self.eval(prob)
    }

    fn rhs_approx_eq(eval: &Posreal, rhs: &RootRat) -> bool {
        posreal_approx_eq_root_rat(eval, rhs)
    }
}

impl ArVar for SlopeAngle {
    type Rhs = AddCircle<Rat>;
    type Eval = AddCircle<f64>;
    const WRAPAROUND_RHS: bool = true;
    const AR_LABEL: &'static str = "angle chasing";

    fn eval_var(&self, prob: &Problem) -> AddCircle<f64> {
        self.eval(prob)
    }

    fn rhs_approx_eq(eval: &AddCircle<f64>, rhs: &AddCircle<Rat>) -> bool {
        circle_approx_eq_rat(eval, rhs)
    }
}

impl ArVar for Angle {
    type Rhs = AddCircle<Rat>;
    type Eval = AddCircle<f64>;
    const WRAPAROUND_RHS: bool = true;
    const AR_LABEL: &'static str = "angle chasing";

    fn eval_var(&self, prob: &Problem) -> AddCircle<f64> {
        self.eval(prob)
    }

    fn rhs_approx_eq(eval: &AddCircle<f64>, rhs: &AddCircle<Rat>) -> bool {
        circle_approx_eq_rat(eval, rhs)
    }
}

impl<V: ArVar> LinearCombination<V> {
    /// Numerical evaluation: `Σ coeff·eval(var)` in the domain's carrier.
    pub fn evaluate(&self, prob: &Problem) -> V::Eval {
        let mut acc = V::Eval::zero();
        for (v, c) in self.terms() {
            let mut t = v.eval_var(prob);
            t.scale(c);
            acc.accumulate(t);
        }
        acc
    }
}
