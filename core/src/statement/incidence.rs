//! Incidence predicates: collinearity, midpoints, circles

use super::angular::EqualAngles;
use super::linear::DistEqDist;
use super::nondegen::ObtuseAngle;
use super::Statement;
use crate::geometry::{Angle, Dist, Point, Problem, Triangle};
use crate::numbers::approx_eq;
use serde::{Deserialize, Serialize};

/// Three collinear points (`coll`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Collinear {
    a: Point,
    b: Point,
    c: Point,
}

impl Collinear {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Collinear { a, b, c }
    }

    pub fn a(&self) -> Point {
        self.a
    }

    pub fn b(&self) -> Point {
        self.b
    }

    pub fn c(&self) -> Point {
        self.c
    }

    pub fn points(&self) -> Vec<Point> {
        vec![self.a, self.b, self.c]
    }

    pub fn normalize(&self) -> Statement {
        let mut pts = [self.a, self.b, self.c];
        pts.sort();
        Statement::Coll(Collinear::new(pts[0], pts[1], pts[2]))
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        !prob.is_close(self.a, self.b)
            && !prob.is_close(self.b, self.c)
            && !prob.is_close(self.a, self.c)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        let lhs = (prob.x(self.b) - prob.x(self.a)) * (prob.y(self.c) - prob.y(self.a));
        let rhs = (prob.y(self.b) - prob.y(self.a)) * (prob.x(self.c) - prob.x(self.a));
        approx_eq(lhs, rhs)
    }

    pub fn cyclic_permutations(&self) -> [Collinear; 3] {
        [
            *self,
            Collinear::new(self.b, self.c, self.a),
            Collinear::new(self.c, self.a, self.b),
        ]
    }

    /// Whether `b` lies strictly between `a` and `c`.
    pub fn is_between(&self, prob: &Problem) -> bool {
        ObtuseAngle::new(Angle::new(self.a, self.b, self.c)).check_nondegen(prob)
    }

    /// `AB:BC = A'B':B'C'` against another collinear triple.
    pub fn eqratio_ab_bc(&self, other: &Collinear) -> super::linear::EqualRatios {
        super::linear::EqualRatios::new(
            Dist::new(self.a, self.b),
            Dist::new(self.b, self.c),
            Dist::new(other.a, other.b),
            Dist::new(other.b, other.c),
        )
    }

    /// `AB:AC = A'B':A'C'` against another collinear triple.
    pub fn eqratio_ab_ac(&self, other: &Collinear) -> super::linear::EqualRatios {
        super::linear::EqualRatios::new(
            Dist::new(self.a, self.b),
            Dist::new(self.a, self.c),
            Dist::new(other.a, other.b),
            Dist::new(other.a, other.c),
        )
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{} ∈ {}{}",
            prob.point_name(self.a),
            prob.point_name(self.b),
            prob.point_name(self.c)
        )
    }
}

/// `M` is the midpoint of `AB` (`midp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Midpoint {
    left: Point,
    middle: Point,
    right: Point,
}

impl Midpoint {
    pub fn new(left: Point, middle: Point, right: Point) -> Self {
        Midpoint {
            left,
            middle,
            right,
        }
    }

    pub fn left(&self) -> Point {
        self.left
    }

    pub fn middle(&self) -> Point {
        self.middle
    }

    pub fn right(&self) -> Point {
        self.right
    }

    pub fn points(&self) -> Vec<Point> {
        vec![self.left, self.middle, self.right]
    }

    pub fn to_coll(&self) -> Collinear {
        Collinear::new(self.left, self.middle, self.right)
    }

    pub fn to_cong(&self) -> DistEqDist {
        DistEqDist::new(
            Dist::new(self.left, self.middle),
            Dist::new(self.middle, self.right),
        )
    }

    pub fn normalize(&self) -> Statement {
        if self.left < self.right {
            Statement::Midpoint(*self)
        } else {
            Statement::Midpoint(Midpoint::new(self.right, self.middle, self.left))
        }
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.to_coll().check_nondegen(prob) && !prob.is_close(self.left, self.right)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        self.to_coll().check_equations(prob) && self.to_cong().check_equations(prob)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{} is the midpoint of {}{}",
            prob.point_name(self.middle),
            prob.point_name(self.left),
            prob.point_name(self.right)
        )
    }
}

/// Four concyclic points (`cyclic`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CyclicQuadrangle {
    a: Point,
    b: Point,
    c: Point,
    d: Point,
}

impl CyclicQuadrangle {
    pub fn new(a: Point, b: Point, c: Point, d: Point) -> Self {
        CyclicQuadrangle { a, b, c, d }
    }

    pub fn a(&self) -> Point {
        self.a
    }

    pub fn b(&self) -> Point {
        self.b
    }

    pub fn c(&self) -> Point {
        self.c
    }

    pub fn d(&self) -> Point {
        self.d
    }

    pub fn points(&self) -> Vec<Point> {
        vec![self.a, self.b, self.c, self.d]
    }

    pub fn normalize(&self) -> Statement {
        let mut pts = [self.a, self.b, self.c, self.d];
        pts.sort();
        Statement::Cyclic(CyclicQuadrangle::new(pts[0], pts[1], pts[2], pts[3]))
    }

    /// The inscribed angles `∠CAD = ∠CBD` on the chord `CD`.
    pub fn equal_angles_cad_cbd(&self) -> EqualAngles {
        EqualAngles::new(
            Angle::new(self.c, self.a, self.d),
            Angle::new(self.c, self.b, self.d),
        )
    }

    pub fn equal_angles_bad_bcd(&self) -> EqualAngles {
        EqualAngles::new(
            Angle::new(self.b, self.a, self.d),
            Angle::new(self.b, self.c, self.d),
        )
    }

    pub fn equal_angles_abd_acd(&self) -> EqualAngles {
        EqualAngles::new(
            Angle::new(self.a, self.b, self.d),
            Angle::new(self.a, self.c, self.d),
        )
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.equal_angles_cad_cbd().check_nondegen(prob)
            && self.equal_angles_bad_bcd().check_nondegen(prob)
            && !Collinear::new(self.a, self.b, self.c).check_equations(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        self.equal_angles_cad_cbd().check_equations(prob)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{} ∈ ω({}{}{})",
            prob.point_name(self.a),
            prob.point_name(self.b),
            prob.point_name(self.c),
            prob.point_name(self.d)
        )
    }
}

/// `O` is the circumcenter of a triangle (`circle`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Circumcenter {
    center: Point,
    triangle: Triangle,
}

impl Circumcenter {
    pub fn new(center: Point, triangle: Triangle) -> Self {
        Circumcenter { center, triangle }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn triangle(&self) -> Triangle {
        self.triangle
    }

    pub fn a(&self) -> Point {
        self.triangle.a()
    }

    pub fn b(&self) -> Point {
        self.triangle.b()
    }

    pub fn c(&self) -> Point {
        self.triangle.c()
    }

    pub fn cong_ab(&self) -> DistEqDist {
        DistEqDist::new(
            Dist::new(self.center, self.a()),
            Dist::new(self.center, self.b()),
        )
    }

    pub fn cong_bc(&self) -> DistEqDist {
        DistEqDist::new(
            Dist::new(self.center, self.b()),
            Dist::new(self.center, self.c()),
        )
    }

    pub fn cong_ac(&self) -> DistEqDist {
        DistEqDist::new(
            Dist::new(self.center, self.a()),
            Dist::new(self.center, self.c()),
        )
    }

    pub fn points(&self) -> Vec<Point> {
        vec![self.center, self.a(), self.b(), self.c()]
    }

    pub fn normalize(&self) -> Statement {
        Statement::Circle(Circumcenter::new(self.center, self.triangle.sorted()))
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        !Collinear::new(self.a(), self.b(), self.c()).check_equations(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        self.cong_ab().check_equations(prob) && self.cong_bc().check_equations(prob)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{} = circumcenter({})",
            prob.point_name(self.center),
            self.triangle.print(prob)
        )
    }
}
