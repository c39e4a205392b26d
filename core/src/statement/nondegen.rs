//! Orientation and non-degeneracy predicates
//!
//! These are verified numerically only; they never enter an AR system.

use super::incidence::Collinear;
use super::Statement;
use crate::geometry::{Angle, Point, Problem, SlopeAngle, Triangle};
use crate::numbers::EPS;
use serde::{Deserialize, Serialize};

/// Three non-collinear points (`ncoll`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NonCollinear {
    a: Point,
    b: Point,
    c: Point,
}

impl NonCollinear {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        NonCollinear { a, b, c }
    }

    pub fn points(&self) -> Vec<Point> {
        vec![self.a, self.b, self.c]
    }

    pub fn normalize(&self) -> Statement {
        let mut pts = [self.a, self.b, self.c];
        pts.sort();
        Statement::Ncoll(NonCollinear::new(pts[0], pts[1], pts[2]))
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        !prob.is_close(self.a, self.b)
            && !prob.is_close(self.b, self.c)
            && !prob.is_close(self.a, self.c)
            && !Collinear::new(self.a, self.b, self.c).check_equations(prob)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{} ∉ {}{}",
            prob.point_name(self.a),
            prob.point_name(self.b),
            prob.point_name(self.c)
        )
    }
}

/// Two distinct points (`diff`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotEqual {
    left: Point,
    right: Point,
}

impl NotEqual {
    pub fn new(left: Point, right: Point) -> Self {
        NotEqual { left, right }
    }

    pub fn points(&self) -> Vec<Point> {
        vec![self.left, self.right]
    }

    pub fn normalize(&self) -> Statement {
        Statement::Diff(NotEqual::new(
            self.left.min(self.right),
            self.left.max(self.right),
        ))
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        !prob.is_close(self.left, self.right)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{} ≠ {}",
            prob.point_name(self.left),
            prob.point_name(self.right)
        )
    }
}

/// Two non-parallel lines (`npara`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NonParallel {
    left: SlopeAngle,
    right: SlopeAngle,
}

impl NonParallel {
    pub fn new(left: SlopeAngle, right: SlopeAngle) -> Self {
        NonParallel { left, right }
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
        Statement::Npara(NonParallel::new(
            self.left.min(self.right),
            self.left.max(self.right),
        ))
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.left.check_nondegen(prob)
            && self.right.check_nondegen(prob)
            && !super::angular::Parallel::new(self.left, self.right).check_equations(prob)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{}{} ∦ {}{}",
            prob.point_name(self.left.left()),
            prob.point_name(self.left.right()),
            prob.point_name(self.right.left()),
            prob.point_name(self.right.right())
        )
    }
}

/// Two non-perpendicular lines (`nperp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NonPerpendicular {
    left: SlopeAngle,
    right: SlopeAngle,
}

impl NonPerpendicular {
    pub fn new(left: SlopeAngle, right: SlopeAngle) -> Self {
        NonPerpendicular { left, right }
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
        Statement::Nperp(NonPerpendicular::new(
            self.left.min(self.right),
            self.left.max(self.right),
        ))
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.left.check_nondegen(prob)
            && self.right.check_nondegen(prob)
            && !super::angular::Perpendicular::new(self.left, self.right).check_equations(prob)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{}{} ⟂̸ {}{}",
            prob.point_name(self.left.left()),
            prob.point_name(self.left.right()),
            prob.point_name(self.right.left()),
            prob.point_name(self.right.right())
        )
    }
}

/// The rays of an angle point in opposite half-planes (`obtuse_angle`);
/// used to witness betweenness of collinear points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObtuseAngle {
    angle: Angle,
}

impl ObtuseAngle {
    pub fn new(angle: Angle) -> Self {
        ObtuseAngle { angle }
    }

    pub fn from_coll(coll: &Collinear) -> Self {
        ObtuseAngle::new(Angle::new(coll.a(), coll.b(), coll.c()))
    }

    pub fn points(&self) -> Vec<Point> {
        self.angle.points().to_vec()
    }

    pub fn normalize(&self) -> Statement {
        if self.angle.left() < self.angle.right() {
            Statement::ObtuseAngle(*self)
        } else {
            Statement::ObtuseAngle(ObtuseAngle::new(-self.angle))
        }
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.angle.dot_product(prob) < -EPS
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!("{} > π/2", self.angle.print(prob))
    }
}

/// Two triangles with the same orientation (`sameclock`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SameClock {
    left: Triangle,
    right: Triangle,
}

impl SameClock {
    pub fn new(left: Triangle, right: Triangle) -> Self {
        SameClock { left, right }
    }

    pub fn points(&self) -> Vec<Point> {
        let mut res = self.left.points().to_vec();
        res.extend(self.right.points());
        res
    }

    pub fn normalize(&self) -> Statement {
        Statement::SameClock(*self)
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        let coll = |t: &Triangle| Collinear::new(t.a(), t.b(), t.c()).check_equations(prob);
        !coll(&self.left)
            && !coll(&self.right)
            && ((self.left.area(prob) > 0.0) == (self.right.area(prob) > 0.0))
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{} oriented the same way as {}",
            self.left.print(prob),
            self.right.print(prob)
        )
    }
}

/// Two point triples with dot products of the same sign (`sameside`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SameSignDot {
    a: Point,
    b: Point,
    c: Point,
    d: Point,
    e: Point,
    f: Point,
}

impl SameSignDot {
    pub fn new(a: Point, b: Point, c: Point, d: Point, e: Point, f: Point) -> Self {
        SameSignDot { a, b, c, d, e, f }
    }

    pub fn from_colls(left: &Collinear, right: &Collinear) -> Self {
        SameSignDot::new(left.a(), left.b(), left.c(), right.a(), right.b(), right.c())
    }

    pub fn points(&self) -> Vec<Point> {
        vec![self.a, self.b, self.c, self.d, self.e, self.f]
    }

    pub fn normalize(&self) -> Statement {
        Statement::SameSide(*self)
    }

    fn dots(&self, prob: &Problem) -> (f64, f64) {
        let dot = |a: Point, b: Point, c: Point| {
            (prob.x(b) - prob.x(a)) * (prob.x(c) - prob.x(a))
                + (prob.y(b) - prob.y(a)) * (prob.y(c) - prob.y(a))
        };
        (dot(self.a, self.b, self.c), dot(self.d, self.e, self.f))
    }

    fn pairwise_distinct(&self, prob: &Problem) -> bool {
        !prob.is_close(self.a, self.b)
            && !prob.is_close(self.b, self.c)
            && !prob.is_close(self.a, self.c)
            && !prob.is_close(self.d, self.e)
            && !prob.is_close(self.e, self.f)
            && !prob.is_close(self.d, self.f)
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        let (l, r) = self.dots(prob);
        self.pairwise_distinct(prob) && ((l > 0.0) == (r > 0.0))
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{} on the same side of [{},{}] as {} of [{},{}]",
            prob.point_name(self.a),
            prob.point_name(self.b),
            prob.point_name(self.c),
            prob.point_name(self.d),
            prob.point_name(self.e),
            prob.point_name(self.f)
        )
    }
}

/// Two point triples with dot products of opposite signs (`nsameside`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiffSignDot {
    a: Point,
    b: Point,
    c: Point,
    d: Point,
    e: Point,
    f: Point,
}

impl DiffSignDot {
    pub fn new(a: Point, b: Point, c: Point, d: Point, e: Point, f: Point) -> Self {
        DiffSignDot { a, b, c, d, e, f }
    }

    pub fn points(&self) -> Vec<Point> {
        vec![self.a, self.b, self.c, self.d, self.e, self.f]
    }

    pub fn normalize(&self) -> Statement {
        Statement::NSameSide(*self)
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        let same = SameSignDot::new(self.a, self.b, self.c, self.d, self.e, self.f);
        let (l, r) = same.dots(prob);
        same.pairwise_distinct(prob) && ((l > 0.0) != (r > 0.0))
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{} on the other side of [{},{}] than {} of [{},{}]",
            prob.point_name(self.a),
            prob.point_name(self.b),
            prob.point_name(self.c),
            prob.point_name(self.d),
            prob.point_name(self.e),
            prob.point_name(self.f)
        )
    }
}
