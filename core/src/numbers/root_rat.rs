//! Rational numbers raised to rational exponents
//!
//! The right-hand side of a ratio-domain equation is a positive rational to
//! a rational power. Internally this is a linear combination of prime bases
//! with rational exponents, so "addition" multiplies the underlying values
//! and scalar multiplication exponentiates.

use super::{NNRat, Posreal, Rat};
use crate::ar::LinearCombination;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RootRat {
    /// Prime base → rational exponent, ordered by base.
    data: LinearCombination<u64>,
}

impl RootRat {
    /// The multiplicative identity `1`.
    pub fn one() -> Self {
        RootRat::default()
    }

    /// Represents a positive rational exactly (exponent 1).
    ///
    /// The argument must be nonzero; zero has no prime factorization.
    pub fn new(number: &NNRat) -> Self {
        debug_assert!(*number.numer() != 0, "RootRat carries positive numbers only");
        let mut numer = *number.numer();
        let mut denom = *number.denom();
        let mut data = LinearCombination::new();
        let mut base: u64 = 2;
        // Trial division; composite bases never divide because their prime
        // factors were exhausted first.
        while numer != 1 || denom != 1 {
            let mut exp: i64 = 0;
            while numer % base == 0 {
                numer /= base;
                exp += 1;
            }
            while denom % base == 0 {
                denom /= base;
                exp -= 1;
            }
            if exp != 0 {
                data += &LinearCombination::with_coeff(base, Rat::from_integer(exp));
            }
            base += 1;
        }
        RootRat { data }
    }

    /// The `exp`-th root of a positive rational.
    pub fn root(number: &NNRat, exp: i64) -> Self {
        let mut res = Self::new(number);
        res.data *= &Rat::new(1, exp);
        res
    }

    /// Extracts the exact rational value when all exponents are integral,
    /// and zero otherwise.
    pub fn as_nnrat(&self) -> NNRat {
        let mut res = NNRat::from_integer(1);
        for (base, exp) in self.data.terms() {
            if *exp.denom() != 1 {
                return NNRat::from_integer(0);
            }
            res *= zpower_nnrat(*base, *exp.numer());
        }
        res
    }

    pub fn is_one(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &LinearCombination<u64> {
        &self.data
    }

    /// Numerical value as a positive real.
    pub fn evaluate(&self) -> Posreal {
        let mut res = Posreal::default();
        for (base, exp) in self.data.terms() {
            res += Posreal::new(*base as f64) * exp;
        }
        res
    }
}

/// Approximate equality of a measured positive real against an exact
/// formal radical.
pub fn posreal_approx_eq_root_rat(a: &Posreal, b: &RootRat) -> bool {
    super::posreal_approx_eq(a, &b.evaluate())
}

fn zpower_nnrat(base: u64, exp: i64) -> NNRat {
    let mut pos = NNRat::from_integer(1);
    for _ in 0..exp.unsigned_abs() {
        pos *= NNRat::from_integer(base);
    }
    if exp >= 0 {
        pos
    } else {
        NNRat::from_integer(1) / pos
    }
}

impl AddAssign<&RootRat> for RootRat {
    fn add_assign(&mut self, other: &RootRat) {
        self.data += &other.data;
    }
}

impl SubAssign<&RootRat> for RootRat {
    fn sub_assign(&mut self, other: &RootRat) {
        self.data -= &other.data;
    }
}

impl Add for RootRat {
    type Output = Self;
    fn add(mut self, other: Self) -> Self {
        self += &other;
        self
    }
}

impl Sub for RootRat {
    type Output = Self;
    fn sub(mut self, other: Self) -> Self {
        self -= &other;
        self
    }
}

impl Neg for RootRat {
    type Output = Self;
    fn neg(mut self) -> Self {
        self.data = -self.data;
        self
    }
}

impl MulAssign<&Rat> for RootRat {
    fn mul_assign(&mut self, coeff: &Rat) {
        self.data *= coeff;
    }
}

impl Mul<&Rat> for RootRat {
    type Output = Self;
    fn mul(mut self, coeff: &Rat) -> Self {
        self *= coeff;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers::approx_eq;

    #[test]
    fn test_roundtrip_through_factorization() {
        let q = NNRat::new(12, 35);
        assert_eq!(RootRat::new(&q).as_nnrat(), q);
    }

    #[test]
    fn test_addition_is_multiplication() {
        let a = RootRat::new(&NNRat::new(2, 3));
        let b = RootRat::new(&NNRat::new(9, 4));
        assert_eq!((a + b).as_nnrat(), NNRat::new(3, 2));
    }

    #[test]
    fn test_subtraction_is_division() {
        let a = RootRat::new(&NNRat::from_integer(6));
        let b = RootRat::new(&NNRat::from_integer(3));
        assert_eq!((a - b).as_nnrat(), NNRat::from_integer(2));
    }

    #[test]
    fn test_fractional_exponent_has_no_exact_value() {
        let r = RootRat::root(&NNRat::from_integer(2), 2);
        assert_eq!(r.as_nnrat(), NNRat::from_integer(0));
        assert!(approx_eq(r.evaluate().number(), std::f64::consts::SQRT_2));
    }

    #[test]
    fn test_scalar_multiplication_is_power() {
        let r = RootRat::new(&NNRat::from_integer(4)) * &Rat::new(1, 2);
        assert_eq!(r.as_nnrat(), NNRat::from_integer(2));
    }

    #[test]
    fn test_order_by_prime_exponents() {
        let two = RootRat::new(&NNRat::from_integer(2));
        let three = RootRat::new(&NNRat::from_integer(3));
        assert!(two < three);
        assert_eq!(two.cmp(&two.clone()), std::cmp::Ordering::Equal);
    }
}
