//! Numbers on the additive circle R/Z
//!
//! Slope angles are directions mod π; representing π as 1 puts them on the
//! unit circle R/Z. All operations reduce into `[0, 1)`.

use super::{rat_to_f64, Rat};
use crate::numbers::approx_eq;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Carriers that know how to reduce themselves modulo 1.
pub trait CircleCarrier:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + std::fmt::Debug
{
    fn zero() -> Self;
    fn mod1(self) -> Self;
    /// Scale by a rational coefficient, before reduction.
    ///
    /// When the coefficient's denominator exceeds one the true result is
    /// multivalued on the circle; this picks the representative obtained by
    /// plain multiplication.
    fn scale(self, coeff: &Rat) -> Self;
}

impl CircleCarrier for f64 {
    fn zero() -> Self {
        0.0
    }

    fn mod1(self) -> Self {
        let r = self.rem_euclid(1.0);
        if r >= 1.0 {
            0.0
        } else {
            r
        }
    }

    fn scale(self, coeff: &Rat) -> Self {
        self * rat_to_f64(coeff)
    }
}

impl CircleCarrier for Rat {
    fn zero() -> Self {
        Rat::from_integer(0)
    }

    fn mod1(self) -> Self {
        let mut r = Rat::new(self.numer().rem_euclid(*self.denom()), *self.denom());
        if r < Rat::from_integer(0) {
            r += Rat::from_integer(1);
        }
        r
    }

    fn scale(self, coeff: &Rat) -> Self {
        self * coeff
    }
}

/// A value in `[0, 1)` with arithmetic mod 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct AddCircle<T>(T);

impl<T: CircleCarrier> AddCircle<T> {
    pub fn new(value: T) -> Self {
        AddCircle(value.mod1())
    }

    /// The representative in `[0, 1)`.
    pub fn number(&self) -> T {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == T::zero()
    }
}

impl<T: CircleCarrier> Default for AddCircle<T> {
    fn default() -> Self {
        AddCircle(T::zero())
    }
}

impl<T: CircleCarrier> AddAssign for AddCircle<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = (self.0 + rhs.0).mod1();
    }
}

impl<T: CircleCarrier> SubAssign for AddCircle<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = (self.0 - rhs.0).mod1();
    }
}

impl<T: CircleCarrier> Add for AddCircle<T> {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: CircleCarrier> Sub for AddCircle<T> {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: CircleCarrier> Neg for AddCircle<T> {
    type Output = Self;
    fn neg(self) -> Self {
        AddCircle((-self.0).mod1())
    }
}

impl<T: CircleCarrier> MulAssign<&Rat> for AddCircle<T> {
    fn mul_assign(&mut self, coeff: &Rat) {
        self.0 = self.0.scale(coeff).mod1();
    }
}

impl<T: CircleCarrier> Mul<&Rat> for AddCircle<T> {
    type Output = Self;
    fn mul(mut self, coeff: &Rat) -> Self {
        self *= coeff;
        self
    }
}

impl Eq for AddCircle<Rat> {}

impl Ord for AddCircle<Rat> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl std::hash::Hash for AddCircle<Rat> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Wraparound-aware approximate equality on the circle.
pub fn circle_approx_eq(lhs: &AddCircle<f64>, rhs: &AddCircle<f64>) -> bool {
    approx_eq(lhs.number(), rhs.number())
        || approx_eq(lhs.number() + 1.0, rhs.number())
        || approx_eq(lhs.number(), rhs.number() + 1.0)
}

/// Compare a measured circle value against an exact one.
pub fn circle_approx_eq_rat(lhs: &AddCircle<f64>, rhs: &AddCircle<Rat>) -> bool {
    let r = rat_to_f64(&rhs.number());
    approx_eq(lhs.number(), r) || approx_eq(lhs.number() + 1.0, r) || approx_eq(lhs.number(), r + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_into_unit_interval() {
        assert_eq!(AddCircle::new(1.25).number(), 0.25);
        assert_eq!(AddCircle::new(-0.25).number(), 0.75);
        assert_eq!(
            AddCircle::new(Rat::new(7, 4)).number(),
            Rat::new(3, 4)
        );
        assert_eq!(
            AddCircle::new(Rat::new(-1, 4)).number(),
            Rat::new(3, 4)
        );
    }

    #[test]
    fn test_arithmetic_wraps() {
        let a = AddCircle::new(Rat::new(3, 4));
        let b = AddCircle::new(Rat::new(1, 2));
        assert_eq!((a + b).number(), Rat::new(1, 4));
        assert_eq!((b - a).number(), Rat::new(3, 4));
        assert_eq!((-a).number(), Rat::new(1, 4));
    }

    #[test]
    fn test_scalar_multiplication_picks_a_branch() {
        // 1/2 * (1/2) = 1/4: one of the two preimages, deterministically.
        let a = AddCircle::new(Rat::new(1, 2));
        assert_eq!((a * &Rat::new(1, 2)).number(), Rat::new(1, 4));
    }

    #[test]
    fn test_wraparound_approx_eq() {
        let a = AddCircle::new(1e-9_f64);
        let b = AddCircle::new(1.0 - 1e-9);
        assert!(circle_approx_eq(&a, &b));
    }
}
