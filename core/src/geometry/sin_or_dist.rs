//! Atoms of the multiplicative ratio domain

use super::{Angle, Point, Problem, SquaredDist};
use crate::numbers::Posreal;
use serde::{Deserialize, Serialize};

/// Either `sin²` of a three-point angle or a squared distance.
///
/// Both evaluate to positive reals, which is what makes the ratio engine a
/// single linear system over [`Posreal`]. Sines order before squared
/// distances; the suspected-ratio generator relies on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SinOrDist {
    Sin(Angle),
    Dist(SquaredDist),
}

impl SinOrDist {
    /// Wraps an angle, canonicalized so that `a` and `-a` coincide.
    pub fn from_angle(a: Angle) -> Self {
        SinOrDist::Sin(a.min(-a))
    }

    pub fn from_squared_dist(d: SquaredDist) -> Self {
        SinOrDist::Dist(d)
    }

    pub fn is_sin(&self) -> bool {
        matches!(self, SinOrDist::Sin(_))
    }

    pub fn is_squared_dist(&self) -> bool {
        matches!(self, SinOrDist::Dist(_))
    }

    pub fn angle(&self) -> Option<&Angle> {
        match self {
            SinOrDist::Sin(a) => Some(a),
            SinOrDist::Dist(_) => None,
        }
    }

    pub fn squared_dist(&self) -> Option<SquaredDist> {
        match self {
            SinOrDist::Sin(_) => None,
            SinOrDist::Dist(d) => Some(*d),
        }
    }

    pub fn points(&self) -> Vec<Point> {
        match self {
            SinOrDist::Sin(a) => a.points().to_vec(),
            SinOrDist::Dist(d) => d.points().to_vec(),
        }
    }

    pub fn eval(&self, prob: &Problem) -> Posreal {
        match self {
            SinOrDist::Sin(a) => {
                let s = (a.eval(prob).number() * std::f64::consts::PI).sin();
                Posreal::new(s * s)
            }
            SinOrDist::Dist(d) => Posreal::new(d.eval(prob)),
        }
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        match self {
            SinOrDist::Sin(a) => a.check_nondegen(prob),
            SinOrDist::Dist(d) => d.check_nondegen(prob),
        }
    }

    pub fn print(&self, prob: &Problem) -> String {
        match self {
            SinOrDist::Sin(a) => format!("sin²{}", a.print(prob)),
            SinOrDist::Dist(d) => d.print(prob),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers::approx_eq;

    #[test]
    fn test_angle_canonicalization() {
        let a = Angle::new(Point(2), Point(1), Point(0));
        assert_eq!(SinOrDist::from_angle(a), SinOrDist::from_angle(-a));
    }

    #[test]
    fn test_sins_order_before_dists() {
        let a = Angle::new(Point(0), Point(1), Point(2));
        let d = SquaredDist::new(Point(0), Point(1));
        assert!(SinOrDist::from_angle(a) < SinOrDist::from_squared_dist(d));
    }

    #[test]
    fn test_eval_sin_squared() {
        let mut prob = Problem::new();
        let a = prob.add_point("A", 1.0, 0.0).unwrap();
        let v = prob.add_point("V", 0.0, 0.0).unwrap();
        let b = prob.add_point("B", 1.0, 1.0).unwrap();
        let v45 = SinOrDist::from_angle(Angle::new(a, v, b)).eval(&prob);
        assert!(approx_eq(v45.number(), 0.5));
    }
}
