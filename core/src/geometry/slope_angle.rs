//! Slope angles: line directions modulo π

use super::{Point, Problem};
use crate::numbers::AddCircle;
use serde::{Deserialize, Serialize};

/// The direction of the line `AB` modulo π, represented in `[0, 1)` with
/// 1 ≡ π. Endpoints are canonicalized to `left < right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlopeAngle {
    left: Point,
    right: Point,
}

impl SlopeAngle {
    /// Builds the atom; the two points must be distinct.
    pub fn new(p1: Point, p2: Point) -> Self {
        assert_ne!(p1, p2, "cannot take the slope of a degenerate segment");
        SlopeAngle {
            left: p1.min(p2),
            right: p1.max(p2),
        }
    }

    pub fn left(&self) -> Point {
        self.left
    }

    pub fn right(&self) -> Point {
        self.right
    }

    pub fn points(&self) -> [Point; 2] {
        [self.left, self.right]
    }

    pub fn eval(&self, prob: &Problem) -> AddCircle<f64> {
        let dx = prob.x(self.right) - prob.x(self.left);
        let dy = prob.y(self.right) - prob.y(self.left);
        AddCircle::new(dy.atan2(dx) / std::f64::consts::PI)
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        !prob.is_close(self.left, self.right)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "∠({}-{})",
            prob.point_name(self.left),
            prob.point_name(self.right)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers::approx_eq;

    #[test]
    fn test_direction_is_mod_pi() {
        let mut prob = Problem::new();
        let a = prob.add_point("A", 0.0, 0.0).unwrap();
        let b = prob.add_point("B", -1.0, -1.0).unwrap();
        // The direction of AB is 45°, i.e. 1/4 of π, regardless of endpoint
        // order.
        let s = SlopeAngle::new(b, a);
        assert!(approx_eq(s.eval(&prob).number(), 0.25));
    }

    #[test]
    fn test_vertical_line() {
        let mut prob = Problem::new();
        let a = prob.add_point("A", 0.0, 0.0).unwrap();
        let b = prob.add_point("B", 0.0, 2.0).unwrap();
        assert!(approx_eq(SlopeAngle::new(a, b).eval(&prob).number(), 0.5));
    }
}
