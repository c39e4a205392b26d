//! Distance and squared-distance atoms

use super::{Point, Problem};
use serde::{Deserialize, Serialize};

/// The undirected distance `|AB|`, endpoints canonicalized to `left < right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dist {
    left: Point,
    right: Point,
}

impl Dist {
    /// Builds the atom; the two points must be distinct.
    pub fn new(p1: Point, p2: Point) -> Self {
        assert_ne!(p1, p2, "cannot measure a distance between equal points");
        Dist {
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

    pub fn squared(&self) -> SquaredDist {
        SquaredDist {
            left: self.left,
            right: self.right,
        }
    }

    pub fn eval(&self, prob: &Problem) -> f64 {
        self.squared().eval(prob).sqrt()
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        !prob.is_close(self.left, self.right)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!("|{}-{}|", prob.point_name(self.left), prob.point_name(self.right))
    }
}

/// The squared distance `|AB|²`, with the same canonicalization as [`Dist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SquaredDist {
    left: Point,
    right: Point,
}

impl SquaredDist {
    pub fn new(p1: Point, p2: Point) -> Self {
        Dist::new(p1, p2).squared()
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

    pub fn dist(&self) -> Dist {
        Dist {
            left: self.left,
            right: self.right,
        }
    }

    pub fn eval(&self, prob: &Problem) -> f64 {
        let dx = prob.x(self.right) - prob.x(self.left);
        let dy = prob.y(self.right) - prob.y(self.left);
        dx * dx + dy * dy
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        !prob.is_close(self.left, self.right)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "|{}-{}|²",
            prob.point_name(self.left),
            prob.point_name(self.right)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers::approx_eq;

    fn sample() -> Problem {
        let mut prob = Problem::new();
        prob.add_point("A", 0.0, 0.0).unwrap();
        prob.add_point("B", 3.0, 4.0).unwrap();
        prob
    }

    #[test]
    fn test_endpoints_canonicalized() {
        let a = Point(0);
        let b = Point(1);
        assert_eq!(Dist::new(b, a), Dist::new(a, b));
        assert_eq!(Dist::new(b, a).left(), a);
    }

    #[test]
    fn test_eval() {
        let prob = sample();
        let d = Dist::new(Point(0), Point(1));
        assert!(approx_eq(d.eval(&prob), 5.0));
        assert!(approx_eq(d.squared().eval(&prob), 25.0));
    }
}
