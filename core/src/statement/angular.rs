//! Direction and angle predicates

use super::Statement;
use crate::ar::Equation;
use crate::geometry::{Angle, Point, Problem, SlopeAngle};
use crate::numbers::{approx_eq, circle_approx_eq, circle_approx_eq_rat, AddCircle, Rat};
use serde::{Deserialize, Serialize};

/// `AB ∥ CD` (`para`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Parallel {
    left: SlopeAngle,
    right: SlopeAngle,
}

impl Parallel {
    pub fn new(s1: SlopeAngle, s2: SlopeAngle) -> Self {
        Parallel { left: s1, right: s2 }
    }

    pub fn left(&self) -> SlopeAngle {
        self.left
    }

    pub fn right(&self) -> SlopeAngle {
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
            Statement::Para(Parallel::new(self.right, self.left))
        } else {
            Statement::Para(*self)
        }
    }

    pub fn is_refl(&self) -> bool {
        self.left == self.right
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.left.check_nondegen(prob) && self.right.check_nondegen(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        circle_approx_eq(&self.left.eval(prob), &self.right.eval(prob))
    }

    pub fn as_equation_slope_angle(&self) -> Equation<SlopeAngle> {
        Equation::sub_eq_const(self.left, self.right, AddCircle::default())
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{}{} ∥ {}{}",
            prob.point_name(self.left.left()),
            prob.point_name(self.left.right()),
            prob.point_name(self.right.left()),
            prob.point_name(self.right.right())
        )
    }
}

/// `AB ⟂ CD` (`perp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Perpendicular {
    left: SlopeAngle,
    right: SlopeAngle,
}

impl Perpendicular {
    pub fn new(s1: SlopeAngle, s2: SlopeAngle) -> Self {
        Perpendicular { left: s1, right: s2 }
    }

    pub fn left(&self) -> SlopeAngle {
        self.left
    }

    pub fn right(&self) -> SlopeAngle {
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
            Statement::Perp(Perpendicular::new(self.right, self.left))
        } else {
            Statement::Perp(*self)
        }
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.left.check_nondegen(prob) && self.right.check_nondegen(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        let dx1 = prob.x(self.left.right()) - prob.x(self.left.left());
        let dy1 = prob.y(self.left.right()) - prob.y(self.left.left());
        let dx2 = prob.x(self.right.right()) - prob.x(self.right.left());
        let dy2 = prob.y(self.right.right()) - prob.y(self.right.left());
        approx_eq(dx1 * dx2, -dy1 * dy2)
    }

    pub fn as_equation_slope_angle(&self) -> Equation<SlopeAngle> {
        Equation::sub_eq_const(self.left, self.right, AddCircle::new(Rat::new(1, 2)))
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{}{} ⟂ {}{}",
            prob.point_name(self.left.left()),
            prob.point_name(self.left.right()),
            prob.point_name(self.right.left()),
            prob.point_name(self.right.right())
        )
    }
}

/// Equality of two three-point angles (`equal_angles`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EqualAngles {
    left: Angle,
    right: Angle,
}

impl EqualAngles {
    pub fn new(a1: Angle, a2: Angle) -> Self {
        EqualAngles { left: a1, right: a2 }
    }

    pub fn left_angle(&self) -> Angle {
        self.left
    }

    pub fn right_angle(&self) -> Angle {
        self.right
    }

    pub fn points(&self) -> Vec<Point> {
        let mut res = self.left.points().to_vec();
        res.extend(self.right.points());
        res
    }

    pub fn to_equal_line_angles(&self) -> EqualLineAngles {
        EqualLineAngles::new(
            self.left.left_side(),
            self.left.right_side(),
            self.right.left_side(),
            self.right.right_side(),
        )
    }

    fn permutations(&self) -> [EqualAngles; 4] {
        [
            *self,
            EqualAngles::new(self.right, self.left),
            EqualAngles::new(-self.left, -self.right),
            EqualAngles::new(-self.right, -self.left),
        ]
    }

    pub fn normalize(&self) -> Statement {
        Statement::EqualAngles(*self.permutations().iter().min().unwrap_or(self))
    }

    pub fn is_refl(&self) -> bool {
        self.left == self.right
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.to_equal_line_angles().check_nondegen(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        self.to_equal_line_angles().check_equations(prob)
    }

    pub fn as_equation_slope_angle(&self) -> Equation<SlopeAngle> {
        self.to_equal_line_angles().as_equation_slope_angle()
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!("{} = {}", self.left.print(prob), self.right.print(prob))
    }
}

/// Equality of two line angles given by four directions (`eqangle`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EqualLineAngles {
    left_left: SlopeAngle,
    left_right: SlopeAngle,
    right_left: SlopeAngle,
    right_right: SlopeAngle,
}

impl EqualLineAngles {
    pub fn new(
        left_left: SlopeAngle,
        left_right: SlopeAngle,
        right_left: SlopeAngle,
        right_right: SlopeAngle,
    ) -> Self {
        EqualLineAngles {
            left_left,
            left_right,
            right_left,
            right_right,
        }
    }

    pub fn points(&self) -> Vec<Point> {
        let mut res = Vec::with_capacity(8);
        for s in [
            self.left_left,
            self.left_right,
            self.right_left,
            self.right_right,
        ] {
            res.extend(s.points());
        }
        res
    }

    pub fn normalize(&self) -> Statement {
        Statement::EqualLineAngles(*self)
    }

    pub fn is_refl(&self) -> bool {
        self.left_left == self.right_left && self.left_right == self.right_right
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.left_left.check_nondegen(prob)
            && self.left_right.check_nondegen(prob)
            && self.right_left.check_nondegen(prob)
            && self.right_right.check_nondegen(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        circle_approx_eq(
            &(self.left_right.eval(prob) - self.left_left.eval(prob)),
            &(self.right_right.eval(prob) - self.right_left.eval(prob)),
        )
    }

    pub fn as_equation_slope_angle(&self) -> Equation<SlopeAngle> {
        Equation::sub_eq_sub(
            self.left_right,
            self.left_left,
            self.right_right,
            self.right_left,
        )
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "∠({}{}, {}{}) = ∠({}{}, {}{})",
            prob.point_name(self.left_left.left()),
            prob.point_name(self.left_left.right()),
            prob.point_name(self.left_right.left()),
            prob.point_name(self.left_right.right()),
            prob.point_name(self.right_left.left()),
            prob.point_name(self.right_left.right()),
            prob.point_name(self.right_right.left()),
            prob.point_name(self.right_right.right())
        )
    }
}

/// A three-point angle equal to a rational multiple of π (`aconst`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AngleEq {
    angle: Angle,
    rhs: AddCircle<Rat>,
}

impl AngleEq {
    pub fn new(angle: Angle, rhs: AddCircle<Rat>) -> Self {
        AngleEq { angle, rhs }
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn rhs(&self) -> AddCircle<Rat> {
        self.rhs
    }

    pub fn points(&self) -> Vec<Point> {
        self.angle.points().to_vec()
    }

    pub fn normalize(&self) -> Statement {
        if self.angle.left() < self.angle.right() {
            Statement::AngleEq(*self)
        } else {
            Statement::AngleEq(AngleEq::new(-self.angle, -self.rhs))
        }
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.angle.check_nondegen(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        circle_approx_eq_rat(&self.angle.eval(prob), &self.rhs)
    }

    pub fn as_equation_slope_angle(&self) -> Equation<SlopeAngle> {
        Equation::sub_eq_const(self.angle.right_side(), self.angle.left_side(), self.rhs)
    }

    pub fn to_line_angle_eq(&self) -> LineAngleEq {
        LineAngleEq::new(self.angle.left_side(), self.angle.right_side(), self.rhs)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!("{} = {}π", self.angle.print(prob), self.rhs.number())
    }
}

/// The angle between two lines equal to a rational multiple of π
/// (`aconst`, four-point form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineAngleEq {
    left: SlopeAngle,
    right: SlopeAngle,
    rhs: AddCircle<Rat>,
}

impl LineAngleEq {
    pub fn new(left: SlopeAngle, right: SlopeAngle, rhs: AddCircle<Rat>) -> Self {
        LineAngleEq { left, right, rhs }
    }

    pub fn left(&self) -> SlopeAngle {
        self.left
    }

    pub fn right(&self) -> SlopeAngle {
        self.right
    }

    pub fn rhs(&self) -> AddCircle<Rat> {
        self.rhs
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
        Statement::LineAngleEq(*self)
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.left.check_nondegen(prob) && self.right.check_nondegen(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        circle_approx_eq_rat(
            &(self.right.eval(prob) - self.left.eval(prob)),
            &self.rhs,
        )
    }

    pub fn as_equation_slope_angle(&self) -> Equation<SlopeAngle> {
        Equation::sub_eq_const(self.right, self.left, self.rhs)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "∠({}{}, {}{}) = {}π",
            prob.point_name(self.left.left()),
            prob.point_name(self.left.right()),
            prob.point_name(self.right.left()),
            prob.point_name(self.right.right()),
            self.rhs.number()
        )
    }
}
