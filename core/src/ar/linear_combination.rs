//! Sparse linear combinations over an ordered variable type
//!
//! Terms are kept sorted by variable; zero coefficients are never stored,
//! so two combinations are equal iff their term vectors match.

use crate::numbers::{Int, Rat};
use num_integer::Integer;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinearCombination<V> {
    terms: Vec<(V, Rat)>,
}

impl<V> Default for LinearCombination<V> {
    fn default() -> Self {
        LinearCombination { terms: Vec::new() }
    }
}

impl<V: Ord + Copy> LinearCombination<V> {
    /// The empty combination.
    pub fn new() -> Self {
        Self::default()
    }

    /// A single variable with coefficient 1.
    pub fn single(var: V) -> Self {
        Self::with_coeff(var, Rat::from_integer(1))
    }

    /// A single term; a zero coefficient yields the empty combination.
    pub fn with_coeff(var: V, coeff: Rat) -> Self {
        if coeff == Rat::from_integer(0) {
            Self::default()
        } else {
            LinearCombination {
                terms: vec![(var, coeff)],
            }
        }
    }

    pub fn terms(&self) -> &[(V, Rat)] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// The leading term (smallest variable in the canonical order).
    pub fn leading(&self) -> Option<(V, Rat)> {
        self.terms.first().copied()
    }

    /// The term after the leading one, if any.
    pub fn second(&self) -> Option<(V, Rat)> {
        self.terms.get(1).copied()
    }

    /// Least common multiple of all coefficient denominators.
    pub fn common_denominator(&self) -> Int {
        self.terms
            .iter()
            .fold(1, |acc, (_, c)| acc.lcm(c.denom()))
    }

    /// Merge two sorted term sequences, transforming right-hand coefficients
    /// with `map_right` and cancelling zero sums.
    fn merged(&self, other: &Self, map_right: impl Fn(&Rat) -> Rat) -> Self {
        let mut out = Vec::with_capacity(self.terms.len() + other.terms.len());
        let mut it1 = self.terms.iter().peekable();
        let mut it2 = other.terms.iter().peekable();
        loop {
            match (it1.peek(), it2.peek()) {
                (Some(&&(v1, c1)), Some(&&(v2, c2))) => {
                    if v1 < v2 {
                        out.push((v1, c1));
                        it1.next();
                    } else if v2 < v1 {
                        out.push((v2, map_right(&c2)));
                        it2.next();
                    } else {
                        let c = c1 + map_right(&c2);
                        if c != Rat::from_integer(0) {
                            out.push((v1, c));
                        }
                        it1.next();
                        it2.next();
                    }
                }
                (Some(&&(v1, c1)), None) => {
                    out.push((v1, c1));
                    it1.next();
                }
                (None, Some(&&(v2, c2))) => {
                    out.push((v2, map_right(&c2)));
                    it2.next();
                }
                (None, None) => break,
            }
        }
        LinearCombination { terms: out }
    }

    /// `self += coeff * other` in one merge pass.
    pub fn add_scaled(&mut self, coeff: &Rat, other: &Self) {
        if *coeff == Rat::from_integer(0) {
            return;
        }
        *self = self.merged(other, |c| c * coeff);
    }

    /// `a * self + b * other`.
    pub fn linear_combine(&self, a: &Rat, b: &Rat, other: &Self) -> Self {
        let mut res = self.clone() * a;
        res.add_scaled(b, other);
        res
    }
}

impl<V: Ord + Copy> AddAssign<&LinearCombination<V>> for LinearCombination<V> {
    fn add_assign(&mut self, other: &Self) {
        *self = self.merged(other, |c| *c);
    }
}

impl<V: Ord + Copy> SubAssign<&LinearCombination<V>> for LinearCombination<V> {
    fn sub_assign(&mut self, other: &Self) {
        *self = self.merged(other, |c| -c);
    }
}

impl<V: Ord + Copy> Add for LinearCombination<V> {
    type Output = Self;
    fn add(mut self, other: Self) -> Self {
        self += &other;
        self
    }
}

impl<V: Ord + Copy> Sub for LinearCombination<V> {
    type Output = Self;
    fn sub(mut self, other: Self) -> Self {
        self -= &other;
        self
    }
}

impl<V: Ord + Copy> MulAssign<&Rat> for LinearCombination<V> {
    fn mul_assign(&mut self, coeff: &Rat) {
        if *coeff == Rat::from_integer(0) {
            self.terms.clear();
            return;
        }
        for (_, c) in &mut self.terms {
            *c *= coeff;
        }
    }
}

impl<V: Ord + Copy> Mul<&Rat> for LinearCombination<V> {
    type Output = Self;
    fn mul(mut self, coeff: &Rat) -> Self {
        self *= coeff;
        self
    }
}

impl<V: Ord + Copy> Neg for LinearCombination<V> {
    type Output = Self;
    fn neg(mut self) -> Self {
        for (_, c) in &mut self.terms {
            *c = -*c;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lc(pairs: &[(u32, (i64, i64))]) -> LinearCombination<u32> {
        let mut res = LinearCombination::new();
        for &(v, (n, d)) in pairs {
            res += &LinearCombination::with_coeff(v, Rat::new(n, d));
        }
        res
    }

    #[test]
    fn test_zero_coeff_not_stored() {
        assert!(LinearCombination::with_coeff(1u32, Rat::from_integer(0)).is_empty());
    }

    #[test]
    fn test_add_sub_roundtrip() {
        let a = lc(&[(1, (1, 2)), (3, (2, 1))]);
        let b = lc(&[(2, (5, 3)), (3, (-1, 1))]);
        let sum = a.clone() + b.clone();
        assert_eq!(sum - b, a);
    }

    #[test]
    fn test_cancellation() {
        let a = lc(&[(1, (1, 1)), (2, (3, 4))]);
        assert!((a.clone() - a).is_empty());
    }

    #[test]
    fn test_multiply_by_zero_clears() {
        let a = lc(&[(1, (1, 1)), (2, (3, 4))]);
        assert!((a * &Rat::from_integer(0)).is_empty());
    }

    #[test]
    fn test_common_denominator() {
        let a = lc(&[(1, (1, 6)), (2, (3, 4))]);
        assert_eq!(a.common_denominator(), 12);
    }

    #[test]
    fn test_add_scaled_matches_expanded_form() {
        let a = lc(&[(1, (1, 1))]);
        let b = lc(&[(1, (1, 2)), (2, (1, 1))]);
        let mut c = a.clone();
        c.add_scaled(&Rat::new(2, 1), &b);
        assert_eq!(c, lc(&[(1, (2, 1)), (2, (2, 1))]));
    }

    #[test]
    fn test_terms_stay_sorted() {
        let a = lc(&[(5, (1, 1)), (1, (1, 1)), (3, (1, 1))]);
        let vars: Vec<u32> = a.terms().iter().map(|&(v, _)| v).collect();
        assert_eq!(vars, vec![1, 3, 5]);
    }
}
