//! Triangles as ordered point triples

use super::{Angle, Dist, Point, Problem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triangle {
    a: Point,
    b: Point,
    c: Point,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Triangle { a, b, c }
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

    pub fn points(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Signed area; the sign carries the orientation.
    pub fn area(&self, prob: &Problem) -> f64 {
        ((prob.y(self.c) - prob.y(self.a)) * (prob.x(self.b) - prob.x(self.a))
            - (prob.x(self.c) - prob.x(self.a)) * (prob.y(self.b) - prob.y(self.a)))
            / 2.0
    }

    pub fn angle_a(&self) -> Angle {
        Angle::new(self.c, self.a, self.b)
    }

    pub fn angle_b(&self) -> Angle {
        Angle::new(self.a, self.b, self.c)
    }

    pub fn angle_c(&self) -> Angle {
        Angle::new(self.b, self.c, self.a)
    }

    pub fn dist_ab(&self) -> Dist {
        Dist::new(self.a, self.b)
    }

    pub fn dist_ac(&self) -> Dist {
        Dist::new(self.a, self.c)
    }

    pub fn dist_bc(&self) -> Dist {
        Dist::new(self.b, self.c)
    }

    pub fn cyclic_rotations(&self) -> [Triangle; 3] {
        [
            *self,
            Triangle::new(self.b, self.c, self.a),
            Triangle::new(self.c, self.a, self.b),
        ]
    }

    pub fn permutations(&self) -> [Triangle; 6] {
        [
            *self,
            Triangle::new(self.b, self.c, self.a),
            Triangle::new(self.c, self.a, self.b),
            Triangle::new(self.a, self.c, self.b),
            Triangle::new(self.c, self.b, self.a),
            Triangle::new(self.b, self.a, self.c),
        ]
    }

    pub fn sorted(&self) -> Triangle {
        let mut pts = self.points();
        pts.sort();
        Triangle::new(pts[0], pts[1], pts[2])
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "▵{} {} {}",
            prob.point_name(self.a),
            prob.point_name(self.b),
            prob.point_name(self.c)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_sign_tracks_orientation() {
        let mut prob = Problem::new();
        let a = prob.add_point("A", 0.0, 0.0).unwrap();
        let b = prob.add_point("B", 1.0, 0.0).unwrap();
        let c = prob.add_point("C", 0.0, 1.0).unwrap();
        let t = Triangle::new(a, b, c);
        let r = Triangle::new(a, c, b);
        assert!(t.area(&prob) > 0.0);
        assert!(r.area(&prob) < 0.0);
        assert_eq!(t.area(&prob), -r.area(&prob));
    }

    #[test]
    fn test_sorted_is_a_permutation() {
        let t = Triangle::new(Point(2), Point(0), Point(1));
        assert_eq!(t.sorted(), Triangle::new(Point(0), Point(1), Point(2)));
    }
}
