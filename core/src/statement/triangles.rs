//! Similar and congruent triangle predicates

use super::angular::EqualAngles;
use super::linear::{DistEqDist, EqualRatios};
use super::nondegen::SameClock;
use super::Statement;
use crate::geometry::{Point, Problem, Triangle};
use serde::{Deserialize, Serialize};

/// Two similar triangles, with an orientation bit (`simtri`/`simtrir`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SimilarTriangles {
    left: Triangle,
    right: Triangle,
    same_clockwise: bool,
}

impl SimilarTriangles {
    pub fn new(left: Triangle, right: Triangle, same_clockwise: bool) -> Self {
        SimilarTriangles {
            left,
            right,
            same_clockwise,
        }
    }

    pub fn left(&self) -> Triangle {
        self.left
    }

    pub fn right(&self) -> Triangle {
        self.right
    }

    pub fn same_clockwise(&self) -> bool {
        self.same_clockwise
    }

    pub fn points(&self) -> Vec<Point> {
        let mut res = self.left.points().to_vec();
        res.extend(self.right.points());
        res
    }

    pub fn to_same_clock(&self) -> SameClock {
        if self.same_clockwise {
            SameClock::new(self.left, self.right)
        } else {
            SameClock::new(
                self.left,
                Triangle::new(self.right.a(), self.right.c(), self.right.b()),
            )
        }
    }

    pub fn permutations(&self) -> [SimilarTriangles; 12] {
        let l = self.left.permutations();
        let r = self.right.permutations();
        let mut res = [*self; 12];
        for i in 0..6 {
            res[i] = SimilarTriangles::new(l[i], r[i], self.same_clockwise);
            res[6 + i] = SimilarTriangles::new(r[i], l[i], self.same_clockwise);
        }
        res
    }

    pub fn cyclic_rotations(&self) -> [SimilarTriangles; 3] {
        let l = self.left.cyclic_rotations();
        let r = self.right.cyclic_rotations();
        [
            SimilarTriangles::new(l[0], r[0], self.same_clockwise),
            SimilarTriangles::new(l[1], r[1], self.same_clockwise),
            SimilarTriangles::new(l[2], r[2], self.same_clockwise),
        ]
    }

    pub fn normalize(&self) -> Statement {
        Statement::SimTri(*self.permutations().iter().min().unwrap_or(self))
    }

    pub fn eqratio_abbc(&self) -> EqualRatios {
        EqualRatios::new(
            self.left.dist_ab(),
            self.left.dist_bc(),
            self.right.dist_ab(),
            self.right.dist_bc(),
        )
    }

    pub fn eqratio_abac(&self) -> EqualRatios {
        EqualRatios::new(
            self.left.dist_ab(),
            self.left.dist_ac(),
            self.right.dist_ab(),
            self.right.dist_ac(),
        )
    }

    pub fn eqratio_bcac(&self) -> EqualRatios {
        EqualRatios::new(
            self.left.dist_bc(),
            self.left.dist_ac(),
            self.right.dist_bc(),
            self.right.dist_ac(),
        )
    }

    fn oriented(&self, ang: crate::geometry::Angle) -> crate::geometry::Angle {
        if self.same_clockwise {
            ang
        } else {
            -ang
        }
    }

    pub fn equal_angles_abc(&self) -> EqualAngles {
        EqualAngles::new(self.left.angle_b(), self.oriented(self.right.angle_b()))
    }

    pub fn equal_angles_bca(&self) -> EqualAngles {
        EqualAngles::new(self.left.angle_c(), self.oriented(self.right.angle_c()))
    }

    pub fn equal_angles_acb(&self) -> EqualAngles {
        EqualAngles::new(-self.left.angle_c(), self.oriented(-self.right.angle_c()))
    }

    pub fn equal_angles_cab(&self) -> EqualAngles {
        EqualAngles::new(self.left.angle_a(), self.oriented(self.right.angle_a()))
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        let coll = |t: &Triangle| {
            super::incidence::Collinear::new(t.a(), t.b(), t.c()).check_equations(prob)
        };
        !coll(&self.left)
            && !coll(&self.right)
            && (self.same_clockwise
                == ((self.left.area(prob) > 0.0) == (self.right.area(prob) > 0.0)))
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        self.eqratio_abac().check_equations(prob) && self.eqratio_bcac().check_equations(prob)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{} ∼{} {}",
            self.left.print(prob),
            if self.same_clockwise { "" } else { "r" },
            self.right.print(prob)
        )
    }
}

/// Two congruent triangles (`contri`/`contrir`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CongruentTriangles {
    left: Triangle,
    right: Triangle,
    same_clockwise: bool,
}

impl CongruentTriangles {
    pub fn new(left: Triangle, right: Triangle, same_clockwise: bool) -> Self {
        CongruentTriangles {
            left,
            right,
            same_clockwise,
        }
    }

    pub fn left(&self) -> Triangle {
        self.left
    }

    pub fn right(&self) -> Triangle {
        self.right
    }

    pub fn same_clockwise(&self) -> bool {
        self.same_clockwise
    }

    pub fn as_similar(&self) -> SimilarTriangles {
        SimilarTriangles::new(self.left, self.right, self.same_clockwise)
    }

    pub fn points(&self) -> Vec<Point> {
        self.as_similar().points()
    }

    pub fn normalize(&self) -> Statement {
        let Statement::SimTri(sim) = self.as_similar().normalize() else {
            return Statement::ConTri(*self);
        };
        Statement::ConTri(CongruentTriangles::new(
            sim.left(),
            sim.right(),
            sim.same_clockwise(),
        ))
    }

    pub fn cong_ab(&self) -> DistEqDist {
        DistEqDist::new(self.left.dist_ab(), self.right.dist_ab())
    }

    pub fn cong_bc(&self) -> DistEqDist {
        DistEqDist::new(self.left.dist_bc(), self.right.dist_bc())
    }

    pub fn cong_ac(&self) -> DistEqDist {
        DistEqDist::new(self.left.dist_ac(), self.right.dist_ac())
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        self.as_similar().check_nondegen(prob)
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        self.cong_ab().check_equations(prob)
            && self.cong_bc().check_equations(prob)
            && self.cong_ac().check_equations(prob)
    }

    pub fn print(&self, prob: &Problem) -> String {
        format!(
            "{} ≅{} {}",
            self.left.print(prob),
            if self.same_clockwise { "" } else { "r" },
            self.right.print(prob)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn tri(a: u32, b: u32, c: u32) -> Triangle {
        Triangle::new(Point(a), Point(b), Point(c))
    }

    #[test]
    fn test_similar_normalization_idempotent() {
        let s = SimilarTriangles::new(tri(3, 1, 2), tri(4, 5, 0), true);
        let n1 = s.normalize();
        let n2 = n1.normalize();
        assert_eq!(n1, n2);
    }

    #[test]
    fn test_congruent_normalizes_like_similar() {
        let c = CongruentTriangles::new(tri(3, 1, 2), tri(4, 5, 0), false);
        let Statement::ConTri(n) = c.normalize() else {
            panic!("normalization changed the predicate kind");
        };
        let Statement::SimTri(s) = c.as_similar().normalize() else {
            panic!("normalization changed the predicate kind");
        };
        assert_eq!(n.left(), s.left());
        assert_eq!(n.right(), s.right());
    }
}
