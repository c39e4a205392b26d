//! Reduction scratchpads
//!
//! A [`ReducedEquation`] records how a candidate equation rewrites against
//! a system's echelon form, maintaining
//! `original = Σ combo·rows + remainder` exactly in the domain. An empty
//! remainder means the candidate is implied by the system.

use super::linear_system::RowId;
use super::{ArVar, Equation, LinearCombination, LinearSystem, RhsValue};
use crate::numbers::Rat;
use crate::solver::ProofId;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedEquation<V: ArVar> {
    original: Equation<V>,
    combo: LinearCombination<RowId>,
    remainder: Equation<V>,
}

impl<V: ArVar> ReducedEquation<V> {
    pub fn new(original: Equation<V>) -> Self {
        ReducedEquation {
            remainder: original.clone(),
            combo: LinearCombination::new(),
            original,
        }
    }

    pub fn original(&self) -> &Equation<V> {
        &self.original
    }

    pub fn combo(&self) -> &LinearCombination<RowId> {
        &self.combo
    }

    pub fn remainder(&self) -> &Equation<V> {
        &self.remainder
    }

    /// Rewrites the remainder's leading variable through the echelon form
    /// until it has no pivot (or the remainder's left side empties).
    pub fn reduce(&mut self, sys: &LinearSystem<V>) {
        while let Some((var, coeff)) = self.remainder.lhs().leading() {
            let Some(row) = sys.echelon().get(&var) else {
                break;
            };
            self.combo.add_scaled(&coeff, row.combo());
            self.remainder.sub_scaled(&coeff, row.eq());
        }
    }

    /// Whether the fact is implied by the system.
    ///
    /// For wraparound domains, scalar multiplication by a non-integer is
    /// one branch of a multivalued operation, so a nonzero remainder RHS is
    /// re-tested after clearing all combo denominators; if it still fails,
    /// the fact is not considered proved.
    pub fn is_solved(&self, sys: &LinearSystem<V>) -> bool {
        if !V::WRAPAROUND_RHS {
            return self.remainder.is_empty();
        }
        if !self.remainder.lhs().is_empty() {
            return false;
        }
        if self.remainder.rhs().is_zero() {
            return true;
        }
        let c = Rat::from_integer(self.combo.common_denominator());
        let mut rhs = self.original.rhs().clone();
        rhs.scale(&c);
        for (k, v) in self.combo.terms() {
            let a = c * v;
            debug_assert_eq!(*a.denom(), 1);
            rhs.sub_scaled(&a, sys.row(*k).0.rhs());
        }
        if !rhs.is_zero() {
            warn!("angle equation reduced to 0 = nonzero even after clearing denominators");
        }
        rhs.is_zero()
    }

    /// The proofs behind every original row this reduction used.
    pub fn dependencies(&self, sys: &LinearSystem<V>) -> Vec<ProofId> {
        self.combo
            .terms()
            .iter()
            .map(|(k, _)| sys.row(*k).1)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Dist, Point};

    fn d(a: u32, b: u32) -> Dist {
        Dist::new(Point(a), Point(b))
    }

    fn eq_of(terms: &[(Dist, i64)], rhs: i64) -> Equation<Dist> {
        let mut lhs = LinearCombination::new();
        for &(v, c) in terms {
            lhs += &LinearCombination::with_coeff(v, Rat::from_integer(c));
        }
        Equation::new(lhs, Rat::from_integer(rhs))
    }

    /// `original = Σ combo·row_equations + remainder`, checked exactly.
    fn check_invariant(red: &ReducedEquation<Dist>, sys: &LinearSystem<Dist>) {
        let mut acc = red.remainder().clone();
        for (k, c) in red.combo().terms() {
            let mut t = sys.row(*k).0.clone();
            t.scale(c);
            acc.add_assign(&t);
        }
        assert_eq!(acc, *red.original());
    }

    #[test]
    fn test_reduction_invariant_holds() {
        let mut sys = LinearSystem::new();
        for eq in [
            eq_of(&[(d(0, 1), 1), (d(1, 2), 1)], 3),
            eq_of(&[(d(1, 2), 1), (d(2, 3), 2)], 5),
        ] {
            let mut red = ReducedEquation::new(eq);
            red.reduce(&sys);
            sys.add_equation(&red, ProofId(0)).unwrap();
        }
        let mut red = ReducedEquation::new(eq_of(&[(d(0, 1), 2), (d(2, 3), 1)], 4));
        red.reduce(&sys);
        check_invariant(&red, &sys);
    }

    #[test]
    fn test_implied_fact_is_solved() {
        let mut sys = LinearSystem::new();
        let mut red = ReducedEquation::new(eq_of(&[(d(0, 1), 1), (d(1, 2), -1)], 0));
        red.reduce(&sys);
        sys.add_equation(&red, ProofId(7)).unwrap();

        // The doubled equation is implied.
        let mut dup = ReducedEquation::new(eq_of(&[(d(0, 1), 2), (d(1, 2), -2)], 0));
        dup.reduce(&sys);
        assert!(dup.is_solved(&sys));
        assert_eq!(dup.dependencies(&sys), vec![ProofId(7)]);
        check_invariant(&dup, &sys);
    }

    #[test]
    fn test_angle_branch_ambiguity_resolved_by_denominators() {
        use crate::geometry::SlopeAngle;
        use crate::numbers::AddCircle;

        let s1 = SlopeAngle::new(Point(0), Point(1));
        let s2 = SlopeAngle::new(Point(1), Point(2));
        let mut sys: LinearSystem<SlopeAngle> = LinearSystem::new();

        // 2·s1 - 2·s2 = 1/2, so s1 - s2 is either 1/4 or 3/4.
        let row = Equation::new(
            LinearCombination::with_coeff(s1, Rat::from_integer(2))
                + LinearCombination::with_coeff(s2, Rat::from_integer(-2)),
            AddCircle::new(Rat::new(1, 2)),
        );
        let mut red = ReducedEquation::new(row);
        red.reduce(&sys);
        sys.add_equation(&red, ProofId(0)).unwrap();

        let diff_eq = |rhs: Rat| {
            Equation::new(
                LinearCombination::single(s1) - LinearCombination::single(s2),
                AddCircle::new(rhs),
            )
        };

        // The branch picked by plain scaling.
        let mut quarter = ReducedEquation::new(diff_eq(Rat::new(1, 4)));
        quarter.reduce(&sys);
        assert!(quarter.is_solved(&sys));

        // The other preimage is accepted after clearing denominators.
        let mut three_quarters = ReducedEquation::new(diff_eq(Rat::new(3, 4)));
        three_quarters.reduce(&sys);
        assert!(three_quarters.is_solved(&sys));

        // A value on neither branch stays unproved.
        let mut half = ReducedEquation::new(diff_eq(Rat::new(1, 2)));
        half.reduce(&sys);
        assert!(!half.is_solved(&sys));
    }

    #[test]
    fn test_unrelated_fact_not_solved() {
        let mut sys = LinearSystem::new();
        let mut red = ReducedEquation::new(eq_of(&[(d(0, 1), 1), (d(1, 2), -1)], 0));
        red.reduce(&sys);
        sys.add_equation(&red, ProofId(0)).unwrap();

        let mut other = ReducedEquation::new(eq_of(&[(d(0, 1), 1), (d(2, 3), -1)], 0));
        other.reduce(&sys);
        assert!(!other.is_solved(&sys));
        // The leading variable was rewritten; the remainder now leads with
        // a non-pivot.
        let (lead, _) = other.remainder().lhs().leading().unwrap();
        assert!(!sys.echelon().contains_key(&lead));
    }
}
