//! Three-point angles

use super::{Point, Problem, SlopeAngle};
use crate::numbers::AddCircle;
use serde::{Deserialize, Serialize};
use std::ops::Neg;

/// The signed angle from line `V-L` to line `V-R`, taken modulo π.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Angle {
    left: Point,
    vertex: Point,
    right: Point,
}

impl Angle {
    /// Builds the angle; the vertex must differ from both rays' endpoints.
    pub fn new(left: Point, vertex: Point, right: Point) -> Self {
        assert_ne!(vertex, left, "degenerate angle");
        assert_ne!(vertex, right, "degenerate angle");
        Angle {
            left,
            vertex,
            right,
        }
    }

    pub fn left(&self) -> Point {
        self.left
    }

    pub fn vertex(&self) -> Point {
        self.vertex
    }

    pub fn right(&self) -> Point {
        self.right
    }

    pub fn points(&self) -> [Point; 3] {
        [self.left, self.vertex, self.right]
    }

    pub fn left_side(&self) -> SlopeAngle {
        SlopeAngle::new(self.vertex, self.left)
    }

    pub fn right_side(&self) -> SlopeAngle {
        SlopeAngle::new(self.vertex, self.right)
    }

    pub fn eval(&self, prob: &Problem) -> AddCircle<f64> {
        self.right_side().eval(prob) - self.left_side().eval(prob)
    }

    /// Dot product of the two rays, used for betweenness detection.
    pub fn dot_product(&self, prob: &Problem) -> f64 {
        (prob.x(self.left) - prob.x(self.vertex)) * (prob.x(self.right) - prob.x(self.vertex))
            + (prob.y(self.left) - prob.y(self.vertex))
                * (prob.y(self.right) - prob.y(self.vertex))
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        !prob.is_close(self.vertex, self.left) && !prob.is_close(self.vertex, self.right)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "∠({} {} {})",
            prob.point_name(self.left),
            prob.point_name(self.vertex),
            prob.point_name(self.right)
        )
    }
}

impl Neg for Angle {
    type Output = Angle;
    /// The reversed angle `∠(R V L)`.
    fn neg(self) -> Angle {
        Angle {
            left: self.right,
            vertex: self.vertex,
            right: self.left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers::approx_eq;

    #[test]
    fn test_right_angle_measures_half() {
        let mut prob = Problem::new();
        let a = prob.add_point("A", 1.0, 0.0).unwrap();
        let v = prob.add_point("V", 0.0, 0.0).unwrap();
        let b = prob.add_point("B", 0.0, 1.0).unwrap();
        let ang = Angle::new(a, v, b);
        assert!(approx_eq(ang.eval(&prob).number(), 0.5));
    }

    #[test]
    fn test_negation_swaps_rays() {
        let a = Angle::new(Point(0), Point(1), Point(2));
        assert_eq!(-a, Angle::new(Point(2), Point(1), Point(0)));
    }
}
