//! The predicate catalog
//!
//! Every geometric fact the solver can track is one variant of
//! [`Statement`]. Statements are interned by their normalized value, so
//! the enum derives `Eq`/`Hash`; all numeric checks take the owning
//! [`Problem`] explicitly.

mod angular;
mod configs;
mod incidence;
mod linear;
mod nondegen;
mod triangles;

pub use angular::{AngleEq, EqualAngles, EqualLineAngles, LineAngleEq, Parallel, Perpendicular};
pub use configs::{IsOrthocenter, Parallelogram, Thales};
pub use incidence::{Circumcenter, Collinear, CyclicQuadrangle, Midpoint};
pub use linear::{
    DistEq, DistEqDist, EqualRatios, RatioDistEquals, RatioSquaredDist, SquaredDistEq,
};
pub use nondegen::{
    DiffSignDot, NonCollinear, NonParallel, NonPerpendicular, NotEqual, ObtuseAngle, SameClock,
    SameSignDot,
};
pub use triangles::{CongruentTriangles, SimilarTriangles};

use crate::ar::Equation;
use crate::geometry::{Angle, Dist, Point, Problem, SinOrDist, SlopeAngle, SquaredDist};
use serde_json::{json, Value};

/// A single geometric predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Coll(Collinear),
    Ncoll(NonCollinear),
    Cong(DistEqDist),
    DistEq(DistEq),
    SquaredDistEq(SquaredDistEq),
    RatioDist(RatioDistEquals),
    RatioSquaredDist(RatioSquaredDist),
    EqRatio(EqualRatios),
    Para(Parallel),
    Npara(NonParallel),
    Perp(Perpendicular),
    Nperp(NonPerpendicular),
    Diff(NotEqual),
    EqualAngles(EqualAngles),
    EqualLineAngles(EqualLineAngles),
    AngleEq(AngleEq),
    LineAngleEq(LineAngleEq),
    Cyclic(CyclicQuadrangle),
    Circle(Circumcenter),
    Midpoint(Midpoint),
    SimTri(SimilarTriangles),
    ConTri(CongruentTriangles),
    ObtuseAngle(ObtuseAngle),
    SameClock(SameClock),
    SameSide(SameSignDot),
    NSameSide(DiffSignDot),
    EqnDist(Equation<Dist>),
    EqnSquaredDist(Equation<SquaredDist>),
    EqnSinOrDist(Equation<SinOrDist>),
    EqnAngle(Equation<Angle>),
}

impl Statement {
    pub fn name(&self) -> &'static str {
        match self {
            Statement::Coll(_) => "coll",
            Statement::Ncoll(_) => "ncoll",
            Statement::Cong(_) => "cong",
            Statement::DistEq(_) => "lconst",
            Statement::SquaredDistEq(_) => "l2const",
            Statement::RatioDist(_) => "rconst",
            Statement::RatioSquaredDist(_) => "r2const",
            Statement::EqRatio(_) => "eqratio",
            Statement::Para(_) => "para",
            Statement::Npara(_) => "npara",
            Statement::Perp(_) => "perp",
            Statement::Nperp(_) => "nperp",
            Statement::Diff(_) => "diff",
            Statement::EqualAngles(_) => "equal_angles",
            Statement::EqualLineAngles(_) => "eqangle",
            Statement::AngleEq(_) | Statement::LineAngleEq(_) => "aconst",
            Statement::Cyclic(_) => "cyclic",
            Statement::Circle(_) => "circle",
            Statement::Midpoint(_) => "midp",
            Statement::SimTri(p) => {
                if p.same_clockwise() {
                    "simtri"
                } else {
                    "simtrir"
                }
            }
            Statement::ConTri(p) => {
                if p.same_clockwise() {
                    "contri"
                } else {
                    "contrir"
                }
            }
            Statement::ObtuseAngle(_) => "obtuse_angle",
            Statement::SameClock(_) => "sameclock",
            Statement::SameSide(_) => "sameside",
            Statement::NSameSide(_) => "nsameside",
            Statement::EqnDist(_) => "equation_dist",
            Statement::EqnSquaredDist(_) => "equation_squared_dist",
            Statement::EqnSinOrDist(_) => "equation_sin_or_dist",
            Statement::EqnAngle(_) => "equation_angle",
        }
    }

    pub fn points(&self) -> Vec<Point> {
        match self {
            Statement::Coll(p) => p.points(),
            Statement::Ncoll(p) => p.points(),
            Statement::Cong(p) => p.points(),
            Statement::DistEq(p) => p.points(),
            Statement::SquaredDistEq(p) => p.points(),
            Statement::RatioDist(p) => p.points(),
            Statement::RatioSquaredDist(p) => p.points(),
            Statement::EqRatio(p) => p.points(),
            Statement::Para(p) => p.points(),
            Statement::Npara(p) => p.points(),
            Statement::Perp(p) => p.points(),
            Statement::Nperp(p) => p.points(),
            Statement::Diff(p) => p.points(),
            Statement::EqualAngles(p) => p.points(),
            Statement::EqualLineAngles(p) => p.points(),
            Statement::AngleEq(p) => p.points(),
            Statement::LineAngleEq(p) => p.points(),
            Statement::Cyclic(p) => p.points(),
            Statement::Circle(p) => p.points(),
            Statement::Midpoint(p) => p.points(),
            Statement::SimTri(p) => p.points(),
            Statement::ConTri(p) => p.points(),
            Statement::ObtuseAngle(p) => p.points(),
            Statement::SameClock(p) => p.points(),
            Statement::SameSide(p) => p.points(),
            Statement::NSameSide(p) => p.points(),
            Statement::EqnDist(eq) => eqn_points(eq, |v| v.points().to_vec()),
            Statement::EqnSquaredDist(eq) => eqn_points(eq, |v| v.points().to_vec()),
            Statement::EqnSinOrDist(eq) => eqn_points(eq, |v| v.points()),
            Statement::EqnAngle(eq) => eqn_points(eq, |v| v.points().to_vec()),
        }
    }

    pub fn normalize(&self) -> Statement {
        match self {
            Statement::Coll(p) => p.normalize(),
            Statement::Ncoll(p) => p.normalize(),
            Statement::Cong(p) => p.normalize(),
            Statement::DistEq(_) => self.clone(),
            Statement::SquaredDistEq(p) => p.normalize(),
            Statement::RatioDist(p) => p.normalize(),
            Statement::RatioSquaredDist(p) => p.normalize(),
            Statement::EqRatio(p) => p.normalize(),
            Statement::Para(p) => p.normalize(),
            Statement::Npara(p) => p.normalize(),
            Statement::Perp(p) => p.normalize(),
            Statement::Nperp(p) => p.normalize(),
            Statement::Diff(p) => p.normalize(),
            Statement::EqualAngles(p) => p.normalize(),
            Statement::EqualLineAngles(p) => p.normalize(),
            Statement::AngleEq(p) => p.normalize(),
            Statement::LineAngleEq(p) => p.normalize(),
            Statement::Cyclic(p) => p.normalize(),
            Statement::Circle(p) => p.normalize(),
            Statement::Midpoint(p) => p.normalize(),
            Statement::SimTri(p) => p.normalize(),
            Statement::ConTri(p) => p.normalize(),
            Statement::ObtuseAngle(p) => p.normalize(),
            Statement::SameClock(p) => p.normalize(),
            Statement::SameSide(p) => p.normalize(),
            Statement::NSameSide(p) => p.normalize(),
            Statement::EqnDist(eq) => Statement::EqnDist(eq.normalize().1),
            Statement::EqnSquaredDist(eq) => Statement::EqnSquaredDist(eq.normalize().1),
            Statement::EqnSinOrDist(eq) => Statement::EqnSinOrDist(eq.normalize().1),
            Statement::EqnAngle(eq) => Statement::EqnAngle(eq.normalize().1),
        }
    }

    pub fn check_nondegen(&self, prob: &Problem) -> bool {
        match self {
            Statement::Coll(p) => p.check_nondegen(prob),
            Statement::Ncoll(p) => p.check_nondegen(prob),
            Statement::Cong(p) => p.check_nondegen(prob),
            Statement::DistEq(p) => p.check_nondegen(prob),
            Statement::SquaredDistEq(p) => p.check_nondegen(prob),
            Statement::RatioDist(p) => p.check_nondegen(prob),
            Statement::RatioSquaredDist(p) => p.check_nondegen(prob),
            Statement::EqRatio(p) => p.check_nondegen(prob),
            Statement::Para(p) => p.check_nondegen(prob),
            Statement::Npara(p) => p.check_nondegen(prob),
            Statement::Perp(p) => p.check_nondegen(prob),
            Statement::Nperp(p) => p.check_nondegen(prob),
            Statement::Diff(p) => p.check_nondegen(prob),
            Statement::EqualAngles(p) => p.check_nondegen(prob),
            Statement::EqualLineAngles(p) => p.check_nondegen(prob),
            Statement::AngleEq(p) => p.check_nondegen(prob),
            Statement::LineAngleEq(p) => p.check_nondegen(prob),
            Statement::Cyclic(p) => p.check_nondegen(prob),
            Statement::Circle(p) => p.check_nondegen(prob),
            Statement::Midpoint(p) => p.check_nondegen(prob),
            Statement::SimTri(p) => p.check_nondegen(prob),
            Statement::ConTri(p) => p.check_nondegen(prob),
            Statement::ObtuseAngle(p) => p.check_nondegen(prob),
            Statement::SameClock(p) => p.check_nondegen(prob),
            Statement::SameSide(p) => p.check_nondegen(prob),
            Statement::NSameSide(p) => p.check_nondegen(prob),
            Statement::EqnDist(_) | Statement::EqnSquaredDist(_) => true,
            Statement::EqnSinOrDist(eq) => {
                eq.lhs().terms().iter().all(|(v, _)| v.check_nondegen(prob))
            }
            Statement::EqnAngle(eq) => {
                eq.lhs().terms().iter().all(|(v, _)| v.check_nondegen(prob))
            }
        }
    }

    pub fn check_equations(&self, prob: &Problem) -> bool {
        match self {
            Statement::Coll(p) => p.check_equations(prob),
            Statement::Cong(p) => p.check_equations(prob),
            Statement::DistEq(p) => p.check_equations(prob),
            Statement::SquaredDistEq(p) => p.check_equations(prob),
            Statement::RatioDist(p) => p.check_equations(prob),
            Statement::RatioSquaredDist(p) => p.check_equations(prob),
            Statement::EqRatio(p) => p.check_equations(prob),
            Statement::Para(p) => p.check_equations(prob),
            Statement::Perp(p) => p.check_equations(prob),
            Statement::EqualAngles(p) => p.check_equations(prob),
            Statement::EqualLineAngles(p) => p.check_equations(prob),
            Statement::AngleEq(p) => p.check_equations(prob),
            Statement::LineAngleEq(p) => p.check_equations(prob),
            Statement::Cyclic(p) => p.check_equations(prob),
            Statement::Circle(p) => p.check_equations(prob),
            Statement::Midpoint(p) => p.check_equations(prob),
            Statement::SimTri(p) => p.check_equations(prob),
            Statement::ConTri(p) => p.check_equations(prob),
            Statement::EqnDist(eq) => eq.check_numerically(prob),
            Statement::EqnSquaredDist(eq) => eq.check_numerically(prob),
            Statement::EqnSinOrDist(eq) => eq.check_numerically(prob),
            Statement::EqnAngle(eq) => eq.check_numerically(prob),
            // Orientation predicates carry no equations.
            Statement::Ncoll(_)
            | Statement::Npara(_)
            | Statement::Nperp(_)
            | Statement::Diff(_)
            | Statement::ObtuseAngle(_)
            | Statement::SameClock(_)
            | Statement::SameSide(_)
            | Statement::NSameSide(_) => true,
        }
    }

    pub fn check_numerically(&self, prob: &Problem) -> bool {
        self.check_nondegen(prob) && self.check_equations(prob)
    }

    /// `a = a` instances that hold by reflexivity.
    pub fn is_refl(&self) -> bool {
        match self {
            Statement::Cong(p) => p.is_refl(),
            Statement::Para(p) => p.is_refl(),
            Statement::EqualAngles(p) => p.is_refl(),
            Statement::EqualLineAngles(p) => p.is_refl(),
            _ => false,
        }
    }

    /// Predicates with no algebraic content, verified numerically once at
    /// insertion.
    pub fn numerical_only(&self) -> bool {
        matches!(
            self,
            Statement::Ncoll(_)
                | Statement::Npara(_)
                | Statement::Nperp(_)
                | Statement::Diff(_)
                | Statement::ObtuseAngle(_)
                | Statement::SameClock(_)
                | Statement::SameSide(_)
                | Statement::NSameSide(_)
        )
    }

    pub fn as_ratio_squared_dist(&self) -> Option<RatioSquaredDist> {
        match self {
            Statement::Cong(p) => Some(p.as_ratio_squared_dist()),
            Statement::RatioDist(p) => Some(p.as_ratio_squared_dist()),
            Statement::RatioSquaredDist(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_equation_dist(&self) -> Option<Equation<Dist>> {
        match self {
            Statement::Cong(p) => Some(p.as_equation_dist()),
            Statement::DistEq(p) => Some(p.as_equation_dist()),
            Statement::RatioDist(p) => Some(p.as_equation_dist()),
            Statement::EqnDist(eq) => Some(eq.clone()),
            _ => None,
        }
    }

    pub fn as_equation_squared_dist(&self) -> Option<Equation<SquaredDist>> {
        match self {
            Statement::Cong(p) => Some(p.as_equation_squared_dist()),
            Statement::DistEq(p) => Some(p.as_equation_squared_dist()),
            Statement::SquaredDistEq(p) => Some(p.as_equation_squared_dist()),
            Statement::RatioDist(p) => Some(p.as_equation_squared_dist()),
            Statement::RatioSquaredDist(p) => Some(p.as_equation_squared_dist()),
            Statement::EqnSquaredDist(eq) => Some(eq.clone()),
            _ => None,
        }
    }

    pub fn as_equation_sin_or_dist(&self) -> Option<Equation<SinOrDist>> {
        match self {
            Statement::Cong(p) => Some(p.as_equation_sin_or_dist()),
            Statement::DistEq(p) => Some(p.as_equation_sin_or_dist()),
            Statement::SquaredDistEq(p) => Some(p.as_equation_sin_or_dist()),
            Statement::RatioDist(p) => Some(p.as_equation_sin_or_dist()),
            Statement::RatioSquaredDist(p) => Some(p.as_equation_sin_or_dist()),
            Statement::EqRatio(p) => Some(p.as_equation_sin_or_dist()),
            Statement::EqnSinOrDist(eq) => Some(eq.clone()),
            _ => None,
        }
    }

    pub fn as_equation_slope_angle(&self) -> Option<Equation<SlopeAngle>> {
        match self {
            Statement::Para(p) => Some(p.as_equation_slope_angle()),
            Statement::Perp(p) => Some(p.as_equation_slope_angle()),
            Statement::EqualAngles(p) => Some(p.as_equation_slope_angle()),
            Statement::EqualLineAngles(p) => Some(p.as_equation_slope_angle()),
            Statement::AngleEq(p) => Some(p.as_equation_slope_angle()),
            Statement::LineAngleEq(p) => Some(p.as_equation_slope_angle()),
            Statement::EqnAngle(eq) => Some(angle_equation_to_slope_angle_equation(eq)),
            _ => None,
        }
    }

    pub fn print(&self, prob: &Problem) -> String {
        match self {
            Statement::Coll(p) => p.print(prob),
            Statement::Ncoll(p) => p.print(prob),
            Statement::Cong(p) => p.print(prob),
            Statement::DistEq(p) => p.print(prob),
            Statement::SquaredDistEq(p) => p.print(prob),
            Statement::RatioDist(p) => p.print(prob),
            Statement::RatioSquaredDist(p) => p.print(prob),
            Statement::EqRatio(p) => p.print(prob),
            Statement::Para(p) => p.print(prob),
            Statement::Npara(p) => p.print(prob),
            Statement::Perp(p) => p.print(prob),
            Statement::Nperp(p) => p.print(prob),
            Statement::Diff(p) => p.print(prob),
            Statement::EqualAngles(p) => p.print(prob),
            Statement::EqualLineAngles(p) => p.print(prob),
            Statement::AngleEq(p) => p.print(prob),
            Statement::LineAngleEq(p) => p.print(prob),
            Statement::Cyclic(p) => p.print(prob),
            Statement::Circle(p) => p.print(prob),
            Statement::Midpoint(p) => p.print(prob),
            Statement::SimTri(p) => p.print(prob),
            Statement::ConTri(p) => p.print(prob),
            Statement::ObtuseAngle(p) => p.print(prob),
            Statement::SameClock(p) => p.print(prob),
            Statement::SameSide(p) => p.print(prob),
            Statement::NSameSide(p) => p.print(prob),
            Statement::EqnDist(eq) => print_eqn(eq, prob, |v, prob| v.print(prob)),
            Statement::EqnSquaredDist(eq) => print_eqn(eq, prob, |v, prob| v.print(prob)),
            Statement::EqnSinOrDist(eq) => print_eqn(eq, prob, |v, prob| v.print(prob)),
            Statement::EqnAngle(eq) => print_eqn(eq, prob, |v, prob| v.print(prob)),
        }
    }

    /// Newclid-compatible JSON: `{name, points}` with the constants of the
    /// `*const` predicates appended to the point list.
    pub fn to_json(&self, prob: &Problem) -> Value {
        let names = |pts: Vec<Point>| -> Vec<String> {
            pts.iter().map(|p| prob.point_name(*p).to_string()).collect()
        };
        match self {
            Statement::Midpoint(p) => json!({
                "name": "midp",
                "points": names(vec![p.middle(), p.left(), p.right()]),
            }),
            Statement::DistEq(p) => {
                let mut args = names(self.points());
                args.push(p.rhs().to_string());
                json!({ "name": "lconst", "points": args })
            }
            Statement::SquaredDistEq(p) => {
                let mut args = names(self.points());
                args.push(p.rhs().to_string());
                json!({ "name": "l2const", "points": args })
            }
            Statement::RatioDist(p) => {
                let mut args = names(self.points());
                args.push(p.ratio().to_string());
                json!({ "name": "rconst", "points": args })
            }
            Statement::RatioSquaredDist(p) => {
                let mut args = names(self.points());
                args.push(p.ratio().to_string());
                json!({ "name": "r2const", "points": args })
            }
            Statement::AngleEq(p) => {
                let line_eq = p.to_line_angle_eq();
                Statement::LineAngleEq(line_eq).to_json(prob)
            }
            Statement::LineAngleEq(p) => {
                let mut args = names(self.points());
                args.push(p.rhs().number().to_string());
                json!({ "name": "aconst", "points": args })
            }
            Statement::EqualAngles(p) => {
                Statement::EqualLineAngles(p.to_equal_line_angles()).to_json(prob)
            }
            _ => json!({ "name": self.name(), "points": names(self.points()) }),
        }
    }
}

fn eqn_points<V: crate::ar::ArVar>(
    eq: &Equation<V>,
    points_of: impl Fn(&V) -> Vec<Point>,
) -> Vec<Point> {
    let mut res = Vec::new();
    for (v, _) in eq.lhs().terms() {
        res.extend(points_of(v));
    }
    res
}

fn print_eqn<V: crate::ar::ArVar>(
    eq: &Equation<V>,
    prob: &Problem,
    print_var: impl Fn(&V, &Problem) -> String,
) -> String {
    let mut out = String::new();
    for (i, (v, c)) in eq.lhs().terms().iter().enumerate() {
        if i > 0 {
            out.push_str(" + ");
        }
        out.push_str(&format!("{}·{}", c, print_var(v, prob)));
    }
    if out.is_empty() {
        out.push('0');
    }
    out.push_str(" = …");
    out
}

/// Converts an equation over three-point angles into one over slope
/// angles: each `c·∠(LVR)` contributes `c·slope(VR) − c·slope(VL)`.
pub fn angle_equation_to_slope_angle_equation(eq: &Equation<Angle>) -> Equation<SlopeAngle> {
    let mut lhs = crate::ar::LinearCombination::new();
    for (var, coeff) in eq.lhs().terms() {
        lhs += &crate::ar::LinearCombination::with_coeff(var.right_side(), *coeff);
        lhs -= &crate::ar::LinearCombination::with_coeff(var.left_side(), *coeff);
    }
    Equation::new(lhs, *eq.rhs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Angle, Triangle};
    use crate::numbers::{AddCircle, NNRat, Rat};

    fn four_point_problem() -> Problem {
        let mut prob = Problem::new();
        prob.add_point("A", 0.0, 0.0).unwrap();
        prob.add_point("B", 2.0, 0.0).unwrap();
        prob.add_point("C", 1.0, 1.0).unwrap();
        prob.add_point("D", 3.0, 1.0).unwrap();
        prob
    }

    fn all_kinds() -> Vec<Statement> {
        let a = Point(0);
        let b = Point(1);
        let c = Point(2);
        let d = Point(3);
        vec![
            Statement::Coll(Collinear::new(c, a, b)),
            Statement::Ncoll(NonCollinear::new(c, b, a)),
            Statement::Cong(DistEqDist::new(Dist::new(c, d), Dist::new(a, b))),
            Statement::DistEq(DistEq::new(Dist::new(a, b), NNRat::from_integer(2))),
            Statement::SquaredDistEq(SquaredDistEq::new(
                SquaredDist::new(a, b),
                NNRat::new(3, 1),
            )),
            Statement::RatioDist(RatioDistEquals::new(
                Dist::new(c, d),
                Dist::new(a, b),
                NNRat::new(1, 2),
            )),
            Statement::RatioSquaredDist(RatioSquaredDist::new(
                SquaredDist::new(c, d),
                SquaredDist::new(a, b),
                NNRat::new(1, 3),
            )),
            Statement::EqRatio(EqualRatios::new(
                Dist::new(c, d),
                Dist::new(a, b),
                Dist::new(a, c),
                Dist::new(b, d),
            )),
            Statement::Para(Parallel::new(SlopeAngle::new(c, d), SlopeAngle::new(a, b))),
            Statement::Perp(Perpendicular::new(
                SlopeAngle::new(c, d),
                SlopeAngle::new(a, b),
            )),
            Statement::EqualAngles(EqualAngles::new(
                Angle::new(c, a, b),
                Angle::new(d, b, c),
            )),
            Statement::AngleEq(AngleEq::new(
                Angle::new(c, a, b),
                AddCircle::new(Rat::new(1, 4)),
            )),
            Statement::Cyclic(CyclicQuadrangle::new(d, c, b, a)),
            Statement::Circle(Circumcenter::new(a, Triangle::new(d, b, c))),
            Statement::Midpoint(Midpoint::new(d, c, a)),
            Statement::SimTri(SimilarTriangles::new(
                Triangle::new(c, a, b),
                Triangle::new(d, b, c),
                false,
            )),
            Statement::ConTri(CongruentTriangles::new(
                Triangle::new(c, a, b),
                Triangle::new(d, b, c),
                true,
            )),
        ]
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for stmt in all_kinds() {
            let once = stmt.normalize();
            let twice = once.normalize();
            assert_eq!(once, twice, "normalize not idempotent for {:?}", stmt.name());
        }
    }

    #[test]
    fn test_symmetric_forms_normalize_equal() {
        let a = Point(0);
        let b = Point(1);
        let c = Point(2);
        let coll1 = Statement::Coll(Collinear::new(a, b, c)).normalize();
        let coll2 = Statement::Coll(Collinear::new(c, a, b)).normalize();
        assert_eq!(coll1, coll2);

        let cong1 = Statement::Cong(DistEqDist::new(Dist::new(a, b), Dist::new(b, c))).normalize();
        let cong2 = Statement::Cong(DistEqDist::new(Dist::new(c, b), Dist::new(b, a))).normalize();
        assert_eq!(cong1, cong2);
    }

    #[test]
    fn test_refl_detection() {
        let a = Point(0);
        let b = Point(1);
        let cong = Statement::Cong(DistEqDist::new(Dist::new(a, b), Dist::new(b, a)));
        assert!(cong.is_refl());
        let para = Statement::Para(Parallel::new(SlopeAngle::new(a, b), SlopeAngle::new(a, b)));
        assert!(para.is_refl());
    }

    #[test]
    fn test_r2const_with_square_ratio_lowers_to_rconst() {
        let a = Point(0);
        let b = Point(1);
        let c = Point(2);
        let d = Point(3);
        let stmt = Statement::RatioSquaredDist(RatioSquaredDist::new(
            SquaredDist::new(a, b),
            SquaredDist::new(c, d),
            NNRat::new(1, 4),
        ))
        .normalize();
        assert!(matches!(stmt, Statement::RatioDist(_)));
    }

    #[test]
    fn test_rconst_unit_ratio_stays_rconst() {
        let a = Point(0);
        let b = Point(1);
        let c = Point(2);
        let d = Point(3);
        let stmt = Statement::RatioDist(RatioDistEquals::new(
            Dist::new(a, b),
            Dist::new(c, d),
            NNRat::from_integer(1),
        ))
        .normalize();
        assert!(matches!(stmt, Statement::RatioDist(_)));
    }

    #[test]
    fn test_midpoint_numeric_check() {
        let mut prob = Problem::new();
        let a = prob.add_point("A", 0.0, 0.0).unwrap();
        let m = prob.add_point("M", 1.0, 0.0).unwrap();
        let b = prob.add_point("B", 2.0, 0.0).unwrap();
        let stmt = Statement::Midpoint(Midpoint::new(a, m, b));
        assert!(stmt.check_numerically(&prob));
        let wrong = Statement::Midpoint(Midpoint::new(m, a, b));
        assert!(!wrong.check_equations(&prob));
    }

    #[test]
    fn test_angle_equation_lowering() {
        let a = Point(0);
        let b = Point(1);
        let c = Point(2);
        let ang = Angle::new(c, a, b);
        let eq_rat: Equation<Angle> = Equation::new(
            crate::ar::LinearCombination::single(ang),
            AddCircle::new(Rat::new(1, 8)),
        );
        let lowered = angle_equation_to_slope_angle_equation(&eq_rat);
        // One angle term expands into its two ray slopes.
        assert_eq!(lowered.lhs().len(), 2);
        assert_eq!(lowered.rhs().number(), Rat::new(1, 8));
    }

    #[test]
    fn test_numerical_only_partition() {
        let prob = four_point_problem();
        for stmt in all_kinds() {
            if stmt.numerical_only() {
                assert!(stmt.check_equations(&prob));
            }
        }
    }
}
