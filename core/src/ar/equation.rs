//! Linear equations over a single AR domain

use super::{ArVar, LinearCombination, RhsValue};
use crate::geometry::Problem;
use crate::numbers::Rat;

/// A linear combination of domain variables equal to a domain constant.
///
/// All algebraic operations apply componentwise to both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equation<V: ArVar> {
    lhs: LinearCombination<V>,
    rhs: V::Rhs,
}

impl<V: ArVar> Default for Equation<V> {
    /// The trivial equation `0 = 0`.
    fn default() -> Self {
        Equation {
            lhs: LinearCombination::new(),
            rhs: V::Rhs::zero(),
        }
    }
}

impl<V: ArVar> Equation<V> {
    pub fn new(lhs: LinearCombination<V>, rhs: V::Rhs) -> Self {
        Equation { lhs, rhs }
    }

    /// The equation `a - b = c - d`.
    pub fn sub_eq_sub(a: V, b: V, c: V, d: V) -> Self {
        let lhs = LinearCombination::single(a) - LinearCombination::single(b)
            - LinearCombination::single(c)
            + LinearCombination::single(d);
        Equation::new(lhs, V::Rhs::zero())
    }

    /// The equation `a - b = rhs`.
    pub fn sub_eq_const(a: V, b: V, rhs: V::Rhs) -> Self {
        Equation::new(
            LinearCombination::single(a) - LinearCombination::single(b),
            rhs,
        )
    }

    pub fn lhs(&self) -> &LinearCombination<V> {
        &self.lhs
    }

    pub fn rhs(&self) -> &V::Rhs {
        &self.rhs
    }

    /// `0 = 0`?
    pub fn is_empty(&self) -> bool {
        self.lhs.is_empty() && self.rhs.is_zero()
    }

    pub fn add_assign(&mut self, other: &Self) {
        self.lhs += &other.lhs;
        self.rhs.add(&other.rhs);
    }

    pub fn sub_assign(&mut self, other: &Self) {
        self.lhs -= &other.lhs;
        self.rhs.sub(&other.rhs);
    }

    /// `self -= coeff * other` on both sides.
    pub fn sub_scaled(&mut self, coeff: &Rat, other: &Self) {
        let neg = -*coeff;
        self.lhs.add_scaled(&neg, &other.lhs);
        self.rhs.sub_scaled(coeff, &other.rhs);
    }

    pub fn scale(&mut self, coeff: &Rat) {
        self.lhs *= coeff;
        self.rhs.scale(coeff);
    }

    pub fn negated(&self) -> Self {
        let mut res = self.clone();
        res.scale(&Rat::from_integer(-1));
        res
    }

    /// Verifies the equation against the problem's coordinates.
    pub fn check_numerically(&self, prob: &Problem) -> bool {
        V::rhs_approx_eq(&self.lhs.evaluate(prob), &self.rhs)
    }

    /// Rescales so the leading coefficient is `+1`; for wraparound domains
    /// only the sign is normalized. Returns the applied scale.
    pub fn normalize(&self) -> (Rat, Equation<V>) {
        let Some((_, c)) = self.lhs.leading() else {
            return (Rat::from_integer(1), self.clone());
        };
        if V::WRAPAROUND_RHS {
            if c > Rat::from_integer(0) {
                (Rat::from_integer(1), self.clone())
            } else {
                (Rat::from_integer(-1), self.negated())
            }
        } else {
            let coeff = Rat::from_integer(1) / c;
            let mut eq = self.clone();
            eq.scale(&coeff);
            (coeff, eq)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Dist, Point, SlopeAngle};
    use crate::numbers::AddCircle;

    fn d(a: u32, b: u32) -> Dist {
        Dist::new(Point(a), Point(b))
    }

    #[test]
    fn test_normalize_makes_leading_coeff_one() {
        let lhs = LinearCombination::with_coeff(d(0, 1), Rat::new(-2, 1))
            + LinearCombination::single(d(1, 2));
        let eq = Equation::new(lhs, Rat::new(3, 1));
        let (scale, norm) = eq.normalize();
        assert_eq!(scale, Rat::new(-1, 2));
        assert_eq!(norm.lhs().leading().unwrap().1, Rat::from_integer(1));
        assert_eq!(*norm.rhs(), Rat::new(-3, 2));
        // The normalized equation is the original times the scale.
        let mut scaled = eq.clone();
        scaled.scale(&scale);
        assert_eq!(scaled, norm);
    }

    #[test]
    fn test_normalize_slope_angle_only_flips_sign() {
        let s1 = SlopeAngle::new(Point(0), Point(1));
        let s2 = SlopeAngle::new(Point(1), Point(2));
        let lhs = LinearCombination::with_coeff(s1, Rat::new(-2, 1))
            + LinearCombination::single(s2);
        let eq = Equation::new(lhs, AddCircle::new(Rat::new(1, 4)));
        let (scale, norm) = eq.normalize();
        assert_eq!(scale, Rat::from_integer(-1));
        assert_eq!(
            norm.lhs().leading().unwrap().1,
            Rat::from_integer(2),
        );
        assert_eq!(norm.rhs().number(), Rat::new(3, 4));
    }

    #[test]
    fn test_sub_scaled_cancels() {
        let eq1 = Equation::new(LinearCombination::single(d(0, 1)), Rat::new(5, 1));
        let mut eq2 = eq1.clone();
        eq2.sub_scaled(&Rat::from_integer(1), &eq1);
        assert!(eq2.is_empty());
    }
}
