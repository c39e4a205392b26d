//! Length, squared-length, and ratio predicates

use super::Statement;
use crate::ar::{Equation, LinearCombination};
use crate::geometry::{Dist, Point, Problem, SinOrDist, SquaredDist};
use crate::numbers::{
    Rat,
    approx_eq, approx_eq_nnrat, nnrat_to_f64, nnrat_to_rat, rat_sqrt, NNRat, RootRat,
};
use serde::{Deserialize, Serialize};

/// `|AB| = |CD|` (`cong`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DistEqDist {
    left: Dist,
    right: Dist,
}

impl DistEqDist {
    pub fn new(d1: Dist, d2: Dist) -> Self {
        DistEqDist { left: d1, right: d2 }
    }

    pub fn left(&self) -> Dist {
        self.left
    }

    pub fn right(&self) -> Dist {
        self.right
    }

    pub fn points(&self) -> Vec<Point> {
        vec![
            self.left.left(),
            self.left.right(),
            self.right.left(),
            self.right.right(),
        ]
    }

    pub fn normalize(&self) -> Statement {
        if self.left > self.right {
            Statement::Cong(DistEqDist::new(self.right, self.left))
        } else {
            Statement::Cong(*self)
        }
    }

    pub fn is_refl(&self) -> bool {
        self.left == self.right
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.left.check_nondegen(prob) && self.right.check_nondegen(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        approx_eq(self.left.eval(prob), self.right.eval(prob))
    }

    pub fn as_equation_dist(&self) -> Equation<Dist> {
        Equation::sub_eq_const(self.left, self.right, Rat::from_integer(0))
    }

    pub fn as_equation_squared_dist(&self) -> Equation<SquaredDist> {
        Equation::sub_eq_const(self.left.squared(), self.right.squared(), Rat::from_integer(0))
    }

    pub fn as_equation_sin_or_dist(&self) -> Equation<SinOrDist> {
        Equation::sub_eq_const(
            SinOrDist::from_squared_dist(self.left.squared()),
            SinOrDist::from_squared_dist(self.right.squared()),
            RootRat::one(),
        )
    }

    pub fn as_ratio_squared_dist(&self) -> RatioSquaredDist {
        RatioSquaredDist::new(
            self.left.squared(),
            self.right.squared(),
            NNRat::from_integer(1),
        )
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!("{} = {}", self.left.print(prob), self.right.print(prob))
    }
}

/// `|AB| = r` (`lconst`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DistEq {
    dist: Dist,
    rhs: NNRat,
}

impl DistEq {
    pub fn new(dist: Dist, rhs: NNRat) -> Self {
        DistEq { dist, rhs }
    }

    pub fn dist(&self) -> Dist {
        self.dist
    }

    pub fn rhs(&self) -> NNRat {
        self.rhs
    }

    pub fn points(&self) -> Vec<Point> {
        self.dist.points().to_vec()
    }

    fn as_squared_dist_eq(&self) -> SquaredDistEq {
        SquaredDistEq::new(self.dist.squared(), self.rhs * self.rhs)
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.dist.check_nondegen(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        approx_eq_nnrat(self.dist.eval(prob), &self.rhs)
    }

    pub fn as_equation_dist(&self) -> Equation<Dist> {
        Equation::new(LinearCombination::single(self.dist), nnrat_to_rat(&self.rhs))
    }

    pub fn as_equation_squared_dist(&self) -> Equation<SquaredDist> {
        self.as_squared_dist_eq().as_equation_squared_dist()
    }

    pub fn as_equation_sin_or_dist(&self) -> Equation<SinOrDist> {
        self.as_squared_dist_eq().as_equation_sin_or_dist()
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!("{} = {}", self.dist.print(prob), self.rhs)
    }
}

/// `|AB|² = r` (`l2const`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SquaredDistEq {
    squared_dist: SquaredDist,
    rhs: NNRat,
}

impl SquaredDistEq {
    pub fn new(squared_dist: SquaredDist, rhs: NNRat) -> Self {
        SquaredDistEq { squared_dist, rhs }
    }

    pub fn squared_dist(&self) -> SquaredDist {
        self.squared_dist
    }

    pub fn rhs(&self) -> NNRat {
        self.rhs
    }

    pub fn points(&self) -> Vec<Point> {
        self.squared_dist.points().to_vec()
    }

    /// Lowers to `lconst` when the right-hand side is a perfect square.
    pub fn normalize(&self) -> Statement {
        match rat_sqrt(&self.rhs) {
            Some(r) => Statement::DistEq(DistEq::new(self.squared_dist.dist(), r)),
            None => Statement::SquaredDistEq(*self),
        }
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.squared_dist.check_nondegen(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        approx_eq_nnrat(self.squared_dist.eval(prob), &self.rhs)
    }

    pub fn as_equation_squared_dist(&self) -> Equation<SquaredDist> {
        Equation::new(
            LinearCombination::single(self.squared_dist),
            nnrat_to_rat(&self.rhs),
        )
    }

    pub fn as_equation_sin_or_dist(&self) -> Equation<SinOrDist> {
        Equation::new(
            LinearCombination::single(SinOrDist::from_squared_dist(self.squared_dist)),
            RootRat::new(&self.rhs),
        )
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!("{} = {}", self.squared_dist.print(prob), self.rhs)
    }
}

/// `|AB| : |CD| = r` (`rconst`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RatioDistEquals {
    left: Dist,
    right: Dist,
    ratio: NNRat,
}

impl RatioDistEquals {
    pub fn new(left: Dist, right: Dist, ratio: NNRat) -> Self {
        RatioDistEquals { left, right, ratio }
    }

    pub fn left(&self) -> Dist {
        self.left
    }

    pub fn right(&self) -> Dist {
        self.right
    }

    pub fn ratio(&self) -> NNRat {
        self.ratio
    }

    pub fn points(&self) -> Vec<Point> {
        vec![
            self.left.left(),
            self.left.right(),
            self.right.left(),
            self.right.right(),
        ]
    }

    fn swapped(&self) -> Self {
        RatioDistEquals::new(self.right, self.left, NNRat::from_integer(1) / self.ratio)
    }

    /// Orders the two distances; a unit ratio intentionally does not
    /// collapse to `cong`.
    pub fn normalize(&self) -> Statement {
        if self.left < self.right {
            Statement::RatioDist(*self)
        } else {
            Statement::RatioDist(self.swapped())
        }
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.left.check_nondegen(prob) && self.right.check_nondegen(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        approx_eq(
            self.left.eval(prob),
            nnrat_to_f64(&self.ratio) * self.right.eval(prob),
        )
    }

    pub fn as_equation_dist(&self) -> Equation<Dist> {
        let lhs = LinearCombination::single(self.left)
            - LinearCombination::with_coeff(self.right, nnrat_to_rat(&self.ratio));
        Equation::new(lhs, Rat::from_integer(0))
    }

    pub fn as_ratio_squared_dist(&self) -> RatioSquaredDist {
        RatioSquaredDist::new(
            self.left.squared(),
            self.right.squared(),
            self.ratio * self.ratio,
        )
    }

    pub fn as_equation_squared_dist(&self) -> Equation<SquaredDist> {
        self.as_ratio_squared_dist().as_equation_squared_dist()
    }

    pub fn as_equation_sin_or_dist(&self) -> Equation<SinOrDist> {
        self.as_ratio_squared_dist().as_equation_sin_or_dist()
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{}:{} = {}",
            self.left.print(prob),
            self.right.print(prob),
            self.ratio
        )
    }
}

/// `|AB|² : |CD|² = r` (`r2const`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RatioSquaredDist {
    left: SquaredDist,
    right: SquaredDist,
    ratio: NNRat,
}

impl RatioSquaredDist {
    pub fn new(left: SquaredDist, right: SquaredDist, ratio: NNRat) -> Self {
        RatioSquaredDist { left, right, ratio }
    }

    pub fn left(&self) -> SquaredDist {
        self.left
    }

    pub fn right(&self) -> SquaredDist {
        self.right
    }

    pub fn ratio(&self) -> NNRat {
        self.ratio
    }

    pub fn points(&self) -> Vec<Point> {
        vec![
            self.left.left(),
            self.left.right(),
            self.right.left(),
            self.right.right(),
        ]
    }

    /// Lowers to `rconst` when the ratio is a perfect square, else orders
    /// the two squared distances.
    pub fn normalize(&self) -> Statement {
        if let Some(r) = rat_sqrt(&self.ratio) {
            return RatioDistEquals::new(self.left.dist(), self.right.dist(), r).normalize();
        }
        if self.left > self.right {
            Statement::RatioSquaredDist(RatioSquaredDist::new(
                self.right,
                self.left,
                NNRat::from_integer(1) / self.ratio,
            ))
        } else {
            Statement::RatioSquaredDist(*self)
        }
    }

    /// Normalization used for solver-generated candidates: a unit ratio
    /// becomes a plain congruence.
    pub fn normalize_solved(&self) -> Statement {
        if self.ratio == NNRat::from_integer(1) {
            Statement::Cong(DistEqDist::new(self.left.dist(), self.right.dist()))
        } else {
            self.normalize()
        }
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.left.check_nondegen(prob) && self.right.check_nondegen(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        approx_eq(
            self.left.eval(prob),
            self.right.eval(prob) * nnrat_to_f64(&self.ratio),
        )
    }

    pub fn as_equation_squared_dist(&self) -> Equation<SquaredDist> {
        let lhs = LinearCombination::single(self.left)
            - LinearCombination::with_coeff(self.right, nnrat_to_rat(&self.ratio));
        Equation::new(lhs, Rat::from_integer(0))
    }

    pub fn as_equation_sin_or_dist(&self) -> Equation<SinOrDist> {
        Equation::sub_eq_const(
            SinOrDist::from_squared_dist(self.left),
            SinOrDist::from_squared_dist(self.right),
            RootRat::new(&self.ratio),
        )
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{} = {}·{}",
            self.left.print(prob),
            self.ratio,
            self.right.print(prob)
        )
    }
}

/// `|AB|:|CD| = |EF|:|GH|` (`eqratio`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EqualRatios {
    num_left: Dist,
    den_left: Dist,
    num_right: Dist,
    den_right: Dist,
}

impl EqualRatios {
    pub fn new(num_left: Dist, den_left: Dist, num_right: Dist, den_right: Dist) -> Self {
        EqualRatios {
            num_left,
            den_left,
            num_right,
            den_right,
        }
    }

    pub fn points(&self) -> Vec<Point> {
        let mut res = Vec::with_capacity(8);
        for d in [self.num_left, self.den_left, self.num_right, self.den_right] {
            res.extend(d.points());
        }
        res
    }

    /// Canonicalizes under the ratio-equality symmetries: swapping the two
    /// sides, swapping numerators with denominators, and swapping the
    /// means.
    pub fn normalize(&self) -> Statement {
        let (mut a, mut b, mut c, mut d) =
            (self.num_left, self.den_left, self.num_right, self.den_right);
        if a.min(b) > c.min(d) {
            std::mem::swap(&mut a, &mut c);
            std::mem::swap(&mut b, &mut d);
        }
        if a > b {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut c, &mut d);
        }
        if b > c {
            std::mem::swap(&mut b, &mut c);
        }
        Statement::EqRatio(EqualRatios::new(a, b, c, d))
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        [self.num_left, self.den_left, self.num_right, self.den_right]
            .iter()
            .all(|d| d.check_nondegen(prob))
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        approx_eq(
            self.num_left.eval(prob) * self.den_right.eval(prob),
            self.num_right.eval(prob) * self.den_left.eval(prob),
        )
    }

    pub fn as_equation_sin_or_dist(&self) -> Equation<SinOrDist> {
        let lhs = LinearCombination::single(SinOrDist::from_squared_dist(self.num_left.squared()))
            - LinearCombination::single(SinOrDist::from_squared_dist(self.den_left.squared()))
            - LinearCombination::single(SinOrDist::from_squared_dist(self.num_right.squared()))
            + LinearCombination::single(SinOrDist::from_squared_dist(self.den_right.squared()));
        Equation::new(lhs, RootRat::one())
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{}:{} = {}:{}",
            self.num_left.print(prob),
            self.den_left.print(prob),
            self.num_right.print(prob),
            self.den_right.print(prob)
        )
    }
}
