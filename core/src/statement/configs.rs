//! Compound configurations used by the matcher and theorem factory
//!
//! These are not insertable predicates; they bundle the sub-statements a
//! theorem instance is built from.

use super::angular::{Parallel, Perpendicular};
use super::incidence::Collinear;
use crate::ar::{Equation, LinearCombination};
use crate::geometry::{Point, Problem, SlopeAngle, SquaredDist, Triangle};
use crate::numbers::Rat;

/// Two collinear triples joined by parallels: the Thales configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thales {
    left: Collinear,
    right: Collinear,
}

impl Thales {
    pub fn new(left: Collinear, right: Collinear) -> Self {
        Thales { left, right }
    }

    pub fn coll_left(&self) -> Collinear {
        self.left
    }

    pub fn coll_right(&self) -> Collinear {
        self.right
    }

    pub fn para_ab(&self) -> Parallel {
        Parallel::new(
            SlopeAngle::new(self.left.a(), self.right.a()),
            SlopeAngle::new(self.left.b(), self.right.b()),
        )
    }

    pub fn para_ac(&self) -> Parallel {
        Parallel::new(
            SlopeAngle::new(self.left.a(), self.right.a()),
            SlopeAngle::new(self.left.c(), self.right.c()),
        )
    }

    pub fn para_bc(&self) -> Parallel {
        Parallel::new(
            SlopeAngle::new(self.left.b(), self.right.b()),
            SlopeAngle::new(self.left.c(), self.right.c()),
        )
    }

    pub fn rotate(&self) -> Thales {
        Thales::new(
            Collinear::new(self.left.b(), self.left.c(), self.left.a()),
            Collinear::new(self.right.b(), self.right.c(), self.right.a()),
        )
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        for (l, r) in self
            .left
            .cyclic_permutations()
            .iter()
            .zip(self.right.cyclic_permutations().iter())
        {
            if l.is_between(prob) != r.is_between(prob) {
                return false;
            }
        }
        self.para_ab().check_nondegen(prob)
            && self.para_ac().check_nondegen(prob)
            && !Collinear::new(self.left.a(), self.left.b(), self.right.a()).check_equations(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        self.left.check_equations(prob)
            && self.right.check_equations(prob)
            && self.para_ab().check_equations(prob)
            && self.para_bc().check_equations(prob)
    }

    pub fn check_numerically(&self, prob: &Problem) -> bool {
        self.check_nondegen(prob) && self.check_equations(prob)
    }
}

/// Four points forming a parallelogram `ABCD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parallelogram {
    a: Point,
    b: Point,
    c: Point,
    d: Point,
}

impl Parallelogram {
    pub fn new(a: Point, b: Point, c: Point, d: Point) -> Self {
        Parallelogram { a, b, c, d }
    }

    pub fn para_ab_cd(&self) -> Parallel {
        Parallel::new(
            SlopeAngle::new(self.a, self.b),
            SlopeAngle::new(self.c, self.d),
        )
    }

    pub fn para_ad_bc(&self) -> Parallel {
        Parallel::new(
            SlopeAngle::new(self.a, self.d),
            SlopeAngle::new(self.b, self.c),
        )
    }

    /// `2AB² + 2BC² = AC² + BD²`: the sum of squared diagonals.
    pub fn law_equation(&self) -> Equation<SquaredDist> {
        let lhs = LinearCombination::with_coeff(
            SquaredDist::new(self.a, self.b),
            Rat::from_integer(2),
        ) + LinearCombination::with_coeff(
            SquaredDist::new(self.b, self.c),
            Rat::from_integer(2),
        ) - LinearCombination::single(SquaredDist::new(self.a, self.c))
            - LinearCombination::single(SquaredDist::new(self.b, self.d));
        Equation::new(lhs, Rat::from_integer(0))
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        !prob.is_close(self.a, self.b)
            && !prob.is_close(self.b, self.c)
            && !prob.is_close(self.c, self.d)
            && !prob.is_close(self.d, self.a)
            && !Collinear::new(self.a, self.b, self.c).check_equations(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        self.para_ab_cd().check_equations(prob) && self.para_ad_bc().check_equations(prob)
    }

    pub fn check_numerically(&self, prob: &Problem) -> bool {
        self.check_nondegen(prob) && self.check_equations(prob)
    }
}

/// A triangle together with its orthocenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsOrthocenter {
    triangle: Triangle,
    orthocenter: Point,
}

impl IsOrthocenter {
    pub fn new(triangle: Triangle, orthocenter: Point) -> Self {
        IsOrthocenter {
            triangle,
            orthocenter,
        }
    }

    pub fn perp_a(&self) -> Perpendicular {
        Perpendicular::new(
            SlopeAngle::new(self.triangle.a(), self.orthocenter),
            SlopeAngle::new(self.triangle.b(), self.triangle.c()),
        )
    }

    pub fn perp_b(&self) -> Perpendicular {
        Perpendicular::new(
            SlopeAngle::new(self.triangle.b(), self.orthocenter),
            SlopeAngle::new(self.triangle.a(), self.triangle.c()),
        )
    }

    pub fn perp_c(&self) -> Perpendicular {
        Perpendicular::new(
            SlopeAngle::new(self.triangle.c(), self.orthocenter),
            SlopeAngle::new(self.triangle.a(), self.triangle.b()),
        )
    }

    pub fn check_numerically(&self, prob: &Problem) -> bool {
        !Collinear::new(self.triangle.a(), self.triangle.b(), self.triangle.c())
            .check_equations(prob)
            && self.perp_a().check_nondegen(prob)
            && self.perp_b().check_nondegen(prob)
            && self.perp_c().check_nondegen(prob)
            && self.perp_a().check_equations(prob)
            && self.perp_b().check_equations(prob)
    }
}
