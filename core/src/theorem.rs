//! Theorems: immutable (hypotheses, conclusions) pairs
//!
//! The matcher instantiates these factories for concrete point tuples; the
//! solver then tracks each instance as a pending application. `rule_id`
//! carries the external rule identifier (`r13`, `r41`, ...); rules proved
//! through raw equations have no external counterpart and use `ignore`.

use crate::ar::{Equation, LinearCombination};
use crate::geometry::{Angle, Dist, Point, Problem, SinOrDist, SlopeAngle, SquaredDist, Triangle};
use crate::numbers::{known_sin_squares, AddCircle, Rat, RootRat};
use crate::statement::{
    AngleEq, Circumcenter, Collinear, CongruentTriangles, CyclicQuadrangle, DistEqDist,
    EqualAngles, EqualRatios, IsOrthocenter, Midpoint, NonCollinear, NonParallel,
    NonPerpendicular, NotEqual, ObtuseAngle, Parallel, Parallelogram, Perpendicular,
    RatioDistEquals, SameSignDot, SimilarTriangles, Statement, Thales,
};

#[derive(Debug, Clone)]
pub struct Theorem {
    name: &'static str,
    rule_id: &'static str,
    hypotheses: Vec<Statement>,
    conclusions: Vec<Statement>,
}

impl Theorem {
    fn new(name: &'static str, rule_id: &'static str) -> Self {
        Theorem {
            name,
            rule_id,
            hypotheses: Vec::new(),
            conclusions: Vec::new(),
        }
    }

    fn hyp(mut self, p: Statement) -> Self {
        self.hypotheses.push(p);
        self
    }

    fn concl(mut self, p: Statement) -> Self {
        self.conclusions.push(p);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rule_id(&self) -> &'static str {
        self.rule_id
    }

    pub fn hypotheses(&self) -> &[Statement] {
        &self.hypotheses
    }

    pub fn conclusions(&self) -> &[Statement] {
        &self.conclusions
    }

    pub fn check_hypotheses_numerically(&self, prob: &Problem) -> bool {
        self.hypotheses.iter().all(|p| p.check_numerically(prob))
    }

    pub fn check_conclusions_numerically(&self, prob: &Problem) -> bool {
        self.conclusions.iter().all(|p| p.check_numerically(prob))
    }

    pub fn check_numerically(&self, prob: &Problem) -> bool {
        self.check_hypotheses_numerically(prob) && self.check_conclusions_numerically(prob)
    }

    pub fn normalize(&self) -> Theorem {
        Theorem {
            name: self.name,
            rule_id: self.rule_id,
            hypotheses: self.hypotheses.iter().map(Statement::normalize).collect(),
            conclusions: self.conclusions.iter().map(Statement::normalize).collect(),
        }
    }

    /// Swaps hypotheses and conclusions. Private on purpose: the converse
    /// of a correct theorem is often incorrect.
    fn converse(&self, name: &'static str, rule_id: &'static str) -> Theorem {
        Theorem {
            name,
            rule_id,
            hypotheses: self.conclusions.clone(),
            conclusions: self.hypotheses.clone(),
        }
    }

    /// The maximal point index used anywhere in the theorem.
    pub fn max_point(&self) -> Point {
        self.hypotheses
            .iter()
            .chain(&self.conclusions)
            .flat_map(|p| p.points())
            .max()
            .unwrap_or(Point(0))
    }

    fn with_same_clock(self, p: &SimilarTriangles) -> Self {
        self.hyp(Statement::SameClock(p.to_same_clock()))
    }

    // ----- isosceles triangles -----

    /// `|VA| = |VB|` implies the base angles are equal.
    pub fn equal_angles_of_cong(vertex: Point, left: Point, right: Point) -> Theorem {
        Theorem::new("Angles in an isosceles triangle", "r13")
            .hyp(Statement::Cong(DistEqDist::new(
                Dist::new(vertex, left),
                Dist::new(vertex, right),
            )))
            .concl(Statement::EqualAngles(EqualAngles::new(
                Angle::new(vertex, left, right),
                Angle::new(left, right, vertex),
            )))
    }

    pub fn cong_of_equal_angles(vertex: Point, left: Point, right: Point) -> Theorem {
        Theorem::new("Sides of an isosceles triangle", "r14")
            .hyp(Statement::EqualAngles(EqualAngles::new(
                Angle::new(vertex, left, right),
                Angle::new(left, right, vertex),
            )))
            .hyp(Statement::Ncoll(NonCollinear::new(vertex, left, right)))
            .concl(Statement::Cong(DistEqDist::new(
                Dist::new(vertex, left),
                Dist::new(vertex, right),
            )))
    }

    // ----- similar and congruent triangles -----

    pub fn similar_triangles_properties(p: &SimilarTriangles) -> Theorem {
        Theorem::new(
            "Properties of similar triangles",
            if p.same_clockwise() { "r52" } else { "r53" },
        )
        .hyp(Statement::SimTri(*p))
        .with_same_clock(p)
        .concl(Statement::EqualAngles(p.equal_angles_abc()))
        .concl(Statement::EqualAngles(p.equal_angles_bca()))
        .concl(Statement::EqRatio(p.eqratio_abbc()))
        .concl(Statement::EqRatio(p.eqratio_abac()))
    }

    /// Two proportional sides and the angle between them. Call once per
    /// cyclic rotation.
    pub fn similar_triangles_of_sas(p: &SimilarTriangles) -> Theorem {
        Theorem::new(
            "Similarity of triangles by 2 sides and an angle between them",
            if p.same_clockwise() { "r62" } else { "r63" },
        )
        .hyp(Statement::EqRatio(p.eqratio_abbc()))
        .hyp(Statement::EqualAngles(p.equal_angles_abc()))
        .with_same_clock(p)
        .concl(Statement::SimTri(*p))
    }

    /// Two pairs of equal angles; rotations are equivalent up to angle
    /// chase, so one call suffices.
    pub fn similar_triangles_of_aa(p: &SimilarTriangles) -> Theorem {
        Theorem::new(
            "Similarity of triangles by 2 angles",
            if p.same_clockwise() { "r34" } else { "r35" },
        )
        .hyp(Statement::EqualAngles(p.equal_angles_abc()))
        .hyp(Statement::EqualAngles(p.equal_angles_acb()))
        .with_same_clock(p)
        .concl(Statement::SimTri(*p))
    }

    pub fn similar_triangles_of_sss(p: &SimilarTriangles) -> Theorem {
        Theorem::new(
            "Similarity of triangles by proportionality of sides",
            if p.same_clockwise() { "r60" } else { "r61" },
        )
        .hyp(Statement::EqRatio(p.eqratio_abbc()))
        .hyp(Statement::EqRatio(p.eqratio_abac()))
        .with_same_clock(p)
        .concl(Statement::SimTri(*p))
    }

    pub fn congruent_triangles_of_similar_triangles(p: &CongruentTriangles) -> Theorem {
        Theorem::new(
            "Similarity without scaling",
            if p.same_clockwise() { "r68" } else { "r69" },
        )
        .hyp(Statement::SimTri(p.as_similar()))
        .hyp(Statement::Cong(p.cong_ab()))
        .concl(Statement::ConTri(*p))
    }

    pub fn congruent_triangles_properties(p: &CongruentTriangles) -> Theorem {
        Theorem::congruent_triangles_of_similar_triangles(p).converse(
            "Congruent triangles are similar with coeff 1",
            if p.same_clockwise() { "r77" } else { "r78" },
        )
    }

    // ----- cyclic quadrilaterals -----

    /// `∠CAD = ∠CBD` puts the four points on one circle. Call for the
    /// three essentially different splittings of the quadruple.
    pub fn cyclic_of_equal_angles(p: &CyclicQuadrangle) -> Theorem {
        Theorem::new("Recognize a cyclic quadrilateral", "r04")
            .hyp(Statement::EqualAngles(p.equal_angles_cad_cbd()))
            .hyp(Statement::Ncoll(NonCollinear::new(p.a(), p.c(), p.d())))
            .concl(Statement::Cyclic(*p))
    }

    pub fn cyclic_properties(p: &CyclicQuadrangle) -> Theorem {
        Theorem::new("Properties of a cyclic quadrilateral", "r03")
            .hyp(Statement::Cyclic(*p))
            .concl(Statement::EqualAngles(p.equal_angles_cad_cbd()))
            .concl(Statement::EqualAngles(p.equal_angles_bad_bcd()))
            .concl(Statement::EqualAngles(p.equal_angles_abd_acd()))
    }

    pub fn equal_angles_of_cong_cyclic(a: Point, b: Point, c: Point, d: Point) -> Theorem {
        Theorem::new("Congruent chords have equal arc measure", "r80")
            .hyp(Statement::Cyclic(CyclicQuadrangle::new(a, b, c, d)))
            .hyp(Statement::Cong(DistEqDist::new(
                Dist::new(a, b),
                Dist::new(c, d),
            )))
            .hyp(Statement::Npara(NonParallel::new(
                SlopeAngle::new(a, c),
                SlopeAngle::new(b, d),
            )))
            .concl(Statement::EqualAngles(EqualAngles::new(
                Angle::new(a, c, b),
                Angle::new(c, b, d),
            )))
    }

    pub fn equal_angles_of_iso_trapezoid(a: Point, b: Point, c: Point, d: Point) -> Theorem {
        Theorem::new("Equal angles in an iso trapezoid", "r91")
            .hyp(Statement::Cong(DistEqDist::new(
                Dist::new(a, b),
                Dist::new(c, d),
            )))
            .hyp(Statement::Para(Parallel::new(
                SlopeAngle::new(a, d),
                SlopeAngle::new(b, c),
            )))
            .hyp(Statement::Npara(NonParallel::new(
                SlopeAngle::new(a, b),
                SlopeAngle::new(c, d),
            )))
            .concl(Statement::EqualAngles(EqualAngles::new(
                Angle::new(a, c, b),
                Angle::new(c, b, d),
            )))
    }

    // ----- collinearity and betweenness -----

    /// `AB + BC = AC` forces `B` between `A` and `C`.
    pub fn coll_of_add_length(p: &Collinear) -> Theorem {
        let lhs = LinearCombination::single(Dist::new(p.a(), p.b()))
            + LinearCombination::single(Dist::new(p.b(), p.c()))
            - LinearCombination::single(Dist::new(p.a(), p.c()));
        Theorem::new("If `AB+BC=AC`, then `B` is between `A` and `C`.", "ignore")
            .hyp(Statement::EqnDist(Equation::new(lhs, Rat::from_integer(0))))
            .concl(Statement::Coll(*p))
    }

    pub fn add_length_of_between(p: &Collinear) -> Theorem {
        let lhs = LinearCombination::single(Dist::new(p.a(), p.b()))
            + LinearCombination::single(Dist::new(p.b(), p.c()))
            - LinearCombination::single(Dist::new(p.a(), p.c()));
        Theorem::new("If `B` is between `A` and `C`, then `AB+BC=AC`", "ignore")
            .hyp(Statement::Coll(*p))
            .hyp(Statement::ObtuseAngle(ObtuseAngle::from_coll(p)))
            .concl(Statement::EqnDist(Equation::new(lhs, Rat::from_integer(0))))
    }

    pub fn coll_of_para(c: &Collinear) -> Theorem {
        Theorem::new("If `AB||BC`, then `A`, `B`, `C` are collinear.", "r28")
            .hyp(Statement::Para(Parallel::new(
                SlopeAngle::new(c.a(), c.b()),
                SlopeAngle::new(c.b(), c.c()),
            )))
            .concl(Statement::Coll(*c))
    }

    pub fn para_of_coll(c: &Collinear) -> Theorem {
        Theorem::new(
            "If `A`, `B`, `C` are collinear, then `AB||BC` and `AB||AC`.",
            "r82",
        )
        .hyp(Statement::Coll(*c))
        .hyp(Statement::Diff(NotEqual::new(c.a(), c.b())))
        .hyp(Statement::Diff(NotEqual::new(c.a(), c.c())))
        .hyp(Statement::Diff(NotEqual::new(c.b(), c.c())))
        .concl(Statement::Para(Parallel::new(
            SlopeAngle::new(c.a(), c.b()),
            SlopeAngle::new(c.b(), c.c()),
        )))
        .concl(Statement::Para(Parallel::new(
            SlopeAngle::new(c.a(), c.b()),
            SlopeAngle::new(c.a(), c.c()),
        )))
    }

    pub fn rotate_equal_ratio_of_same_side(left: &Collinear, right: &Collinear) -> Theorem {
        Theorem::new("Resolution of ratios for collinear points", "r71")
            .hyp(Statement::Coll(*left))
            .hyp(Statement::Coll(*right))
            .hyp(Statement::SameSide(SameSignDot::from_colls(left, right)))
            .hyp(Statement::EqRatio(left.eqratio_ab_ac(right)))
            .concl(Statement::EqRatio(left.eqratio_ab_bc(right)))
    }

    // ----- Thales -----

    pub fn thales_para_of_eqratio(p: &Thales) -> Theorem {
        Theorem::new("Thales Theorem 3", "r41")
            .hyp(Statement::Coll(p.coll_left()))
            .hyp(Statement::Coll(p.coll_right()))
            .hyp(Statement::Para(p.para_bc()))
            .hyp(Statement::EqRatio(
                p.coll_left().eqratio_ab_ac(&p.coll_right()),
            ))
            .hyp(Statement::SameSide(SameSignDot::from_colls(
                &p.coll_left(),
                &p.coll_right(),
            )))
            .concl(Statement::Para(p.para_ab()))
    }

    pub fn thales_eqratio_of_para(p: &Thales) -> Theorem {
        Theorem::new("Thales Theorem 4", "r42")
            .hyp(Statement::Coll(p.coll_left()))
            .hyp(Statement::Coll(p.coll_right()))
            .hyp(Statement::Para(p.para_ab()))
            .hyp(Statement::Para(p.para_bc()))
            .hyp(Statement::Ncoll(NonCollinear::new(
                p.coll_left().a(),
                p.coll_right().a(),
                p.coll_left().b(),
            )))
            .concl(Statement::EqRatio(
                p.coll_left().eqratio_ab_bc(&p.coll_right()),
            ))
            .concl(Statement::EqRatio(
                p.coll_left().eqratio_ab_ac(&p.coll_right()),
            ))
    }

    // ----- circumcenters and circles -----

    pub fn circumcenter_of_cong(p: &Circumcenter) -> Theorem {
        Theorem::new("Definition of circumcenter", "r73")
            .hyp(Statement::Cong(p.cong_ab()))
            .hyp(Statement::Cong(p.cong_bc()))
            .concl(Statement::Circle(*p))
    }

    pub fn cong_of_circumcenter(p: &Circumcenter) -> Theorem {
        Theorem::circumcenter_of_cong(p).converse("Definition of circumcenter", "r72")
    }

    /// `∠ABC + ∠CAO = π/2` for the circumcenter `O`: the inscribed angle
    /// against half the central angle, without introducing a factor of 2.
    pub fn arc_of_circumcenter(p: &Circumcenter) -> Theorem {
        let mut thm = Theorem::new("Arc angle and central angle", "ignore")
            .hyp(Statement::Circle(*p));
        for t in p.triangle().cyclic_rotations() {
            let eqn = Equation::sub_eq_const(
                Angle::new(t.a(), t.b(), t.c()),
                Angle::new(p.center(), t.a(), t.c()),
                AddCircle::new(Rat::new(1, 2)),
            );
            thm = thm.concl(Statement::EqnAngle(eqn));
        }
        thm
    }

    pub fn circumcenter_of_arc(p: &Circumcenter) -> Theorem {
        let eqn = Equation::sub_eq_const(
            Angle::new(p.a(), p.b(), p.c()),
            Angle::new(p.center(), p.a(), p.c()),
            AddCircle::new(Rat::new(1, 2)),
        );
        Theorem::new("Circumcenter of arc's angle", "ignore")
            .hyp(Statement::Cong(p.cong_ac()))
            .hyp(Statement::EqnAngle(eqn))
            .concl(Statement::Circle(*p))
    }

    pub fn cong_of_circumcenter_of_cyclic(p: &Circumcenter, pt: Point) -> Theorem {
        Theorem::new("Recognize center of cyclic", "r49")
            .hyp(Statement::Circle(*p))
            .hyp(Statement::Cyclic(CyclicQuadrangle::new(pt, p.a(), p.b(), p.c())))
            .concl(Statement::Cong(DistEqDist::new(
                Dist::new(p.center(), p.a()),
                Dist::new(p.center(), pt),
            )))
    }

    pub fn center_of_cyclic_of_cong_of_cong(p: &CyclicQuadrangle, pt: Point) -> Theorem {
        Theorem::new("Recognize center of cyclic from cong", "r50")
            .hyp(Statement::Cyclic(*p))
            .hyp(Statement::Cong(DistEqDist::new(
                Dist::new(pt, p.a()),
                Dist::new(pt, p.b()),
            )))
            .hyp(Statement::Cong(DistEqDist::new(
                Dist::new(pt, p.c()),
                Dist::new(pt, p.d()),
            )))
            .hyp(Statement::Npara(NonParallel::new(
                SlopeAngle::new(p.a(), p.b()),
                SlopeAngle::new(p.c(), p.d()),
            )))
            .concl(Statement::Cong(DistEqDist::new(
                Dist::new(pt, p.a()),
                Dist::new(pt, p.c()),
            )))
    }

    // ----- perpendicularity -----

    /// `AB ⟂ CD` implies `AC² + BD² = AD² + BC²`.
    pub fn sum_squares_of_perp(p: &Perpendicular) -> Theorem {
        Theorem::new("AB ⟂ CD implies AC²+BD²=AD²+BC²", "ignore")
            .hyp(Statement::Perp(*p))
            .hyp(Statement::Diff(NotEqual::new(p.left().left(), p.right().left())))
            .hyp(Statement::Diff(NotEqual::new(p.left().left(), p.right().right())))
            .hyp(Statement::Diff(NotEqual::new(p.left().right(), p.right().left())))
            .hyp(Statement::Diff(NotEqual::new(p.left().right(), p.right().right())))
            .concl(Statement::EqnSquaredDist(perp_sum_squares_equation(p)))
    }

    pub fn perp_of_sum_squares(p: &Perpendicular) -> Theorem {
        Theorem::new("If `AC² + BD² = AD² + BC²`, then `AB ⟂ CD`.", "ignore")
            .hyp(Statement::EqnSquaredDist(perp_sum_squares_equation(p)))
            .hyp(Statement::Diff(NotEqual::new(p.left().left(), p.right().left())))
            .hyp(Statement::Diff(NotEqual::new(p.left().left(), p.right().right())))
            .hyp(Statement::Diff(NotEqual::new(p.left().right(), p.right().left())))
            .hyp(Statement::Diff(NotEqual::new(p.left().right(), p.right().right())))
            .concl(Statement::Perp(*p))
    }

    pub fn pythagoras_of_perp(ang: &Angle) -> Theorem {
        Theorem::new("Pythagoras theorem of perpendicularity", "ignore")
            .hyp(Statement::Diff(NotEqual::new(ang.vertex(), ang.left())))
            .hyp(Statement::Diff(NotEqual::new(ang.vertex(), ang.right())))
            .hyp(Statement::Perp(Perpendicular::new(
                ang.left_side(),
                ang.right_side(),
            )))
            .concl(Statement::EqnSquaredDist(pythagoras_equation(ang)))
    }

    pub fn pythagoras_of_sum_squares(ang: &Angle) -> Theorem {
        Theorem::new("Pythagoras theorem of sum of squares", "ignore")
            .hyp(Statement::Diff(NotEqual::new(ang.vertex(), ang.left())))
            .hyp(Statement::Diff(NotEqual::new(ang.vertex(), ang.right())))
            .hyp(Statement::EqnSquaredDist(pythagoras_equation(ang)))
            .concl(Statement::Perp(Perpendicular::new(
                ang.left_side(),
                ang.right_side(),
            )))
    }

    pub fn orthocenter(p: &IsOrthocenter) -> Theorem {
        Theorem::new("Orthocenter theorem", "r43")
            .hyp(Statement::Perp(p.perp_a()))
            .hyp(Statement::Perp(p.perp_b()))
            .concl(Statement::Perp(p.perp_c()))
    }

    // ----- midpoints -----

    pub fn midpoint_ratio_dist(p: &Midpoint) -> Theorem {
        Theorem::new("Midpoint splits in two", "r51")
            .hyp(Statement::Midpoint(*p))
            .concl(Statement::RatioDist(RatioDistEquals::new(
                Dist::new(p.left(), p.middle()),
                Dist::new(p.left(), p.right()),
                crate::numbers::NNRat::new(1, 2),
            )))
            .concl(Statement::RatioDist(RatioDistEquals::new(
                Dist::new(p.right(), p.middle()),
                Dist::new(p.left(), p.right()),
                crate::numbers::NNRat::new(1, 2),
            )))
    }

    pub fn midpoint_of_coll_cong(p: &Midpoint) -> Theorem {
        Theorem::new("Definition of midpoint", "r54")
            .hyp(Statement::Coll(p.to_coll()))
            .hyp(Statement::Cong(p.to_cong()))
            .concl(Statement::Midpoint(*p))
    }

    pub fn cong_of_midpoint(p: &Midpoint) -> Theorem {
        Theorem::new("Properties of midpoint (cong)", "r55")
            .hyp(Statement::Midpoint(*p))
            .concl(Statement::Cong(p.to_cong()))
    }

    pub fn coll_of_midpoint(p: &Midpoint) -> Theorem {
        Theorem::new("Properties of midpoint (coll)", "r56")
            .hyp(Statement::Midpoint(*p))
            .concl(Statement::Coll(p.to_coll()))
    }

    pub fn hypotenuse_is_diameter(p: &Midpoint, pt: Point) -> Theorem {
        Theorem::new("Hypotenuse is diameter", "r19")
            .hyp(Statement::Perp(Perpendicular::new(
                SlopeAngle::new(p.left(), pt),
                SlopeAngle::new(p.right(), pt),
            )))
            .hyp(Statement::Midpoint(*p))
            .concl(Statement::Cong(DistEqDist::new(
                Dist::new(p.left(), p.middle()),
                Dist::new(pt, p.middle()),
            )))
    }

    /// `4AM² + BC² = 2AB² + 2AC²` for the midpoint `M` of `BC`; holds for
    /// any fourth point, collinear ones included.
    pub fn sum_squares_of_midpoint(p: &Midpoint, pt: Point) -> Theorem {
        let lhs = LinearCombination::with_coeff(
            SquaredDist::new(pt, p.middle()),
            Rat::from_integer(4),
        ) + LinearCombination::single(SquaredDist::new(p.left(), p.right()))
            - LinearCombination::with_coeff(SquaredDist::new(pt, p.left()), Rat::from_integer(2))
            - LinearCombination::with_coeff(SquaredDist::new(pt, p.right()), Rat::from_integer(2));
        Theorem::new("Sum of squares for a median", "ignore")
            .hyp(Statement::Cong(p.to_cong()))
            .hyp(Statement::Coll(p.to_coll()))
            .concl(Statement::EqnSquaredDist(Equation::new(
                lhs,
                Rat::from_integer(0),
            )))
    }

    // ----- parallelograms -----

    pub fn parallelogram_law(p: &Parallelogram) -> Theorem {
        Theorem::new("Parallelogram law", "ignore")
            .hyp(Statement::Para(p.para_ab_cd()))
            .hyp(Statement::Para(p.para_ad_bc()))
            .concl(Statement::EqnSquaredDist(p.law_equation()))
    }

    // ----- bisectors and centers -----

    pub fn triangle_bisector_of_equal_angles(point: Point, angle: &Angle) -> Theorem {
        Theorem::new("Property of a bisector in a triangle.", "r12")
            .hyp(Statement::EqualAngles(EqualAngles::new(
                Angle::new(angle.left(), angle.vertex(), point),
                Angle::new(point, angle.vertex(), angle.right()),
            )))
            .hyp(Statement::Ncoll(NonCollinear::new(
                angle.left(),
                angle.vertex(),
                angle.right(),
            )))
            .hyp(Statement::Coll(Collinear::new(
                angle.left(),
                point,
                angle.right(),
            )))
            .concl(Statement::EqRatio(EqualRatios::new(
                Dist::new(point, angle.left()),
                Dist::new(point, angle.right()),
                Dist::new(angle.vertex(), angle.left()),
                Dist::new(angle.vertex(), angle.right()),
            )))
    }

    pub fn triangle_bisector_of_eqratio(point: Point, angle: &Angle) -> Theorem {
        Theorem::new("Property of a bisector in a triangle.", "r11")
            .hyp(Statement::Ncoll(NonCollinear::new(
                angle.left(),
                angle.vertex(),
                angle.right(),
            )))
            .hyp(Statement::Coll(Collinear::new(
                angle.left(),
                point,
                angle.right(),
            )))
            .hyp(Statement::EqRatio(EqualRatios::new(
                Dist::new(point, angle.left()),
                Dist::new(point, angle.right()),
                Dist::new(angle.vertex(), angle.left()),
                Dist::new(angle.vertex(), angle.right()),
            )))
            .concl(Statement::EqualAngles(EqualAngles::new(
                Angle::new(angle.left(), angle.vertex(), point),
                Angle::new(point, angle.vertex(), angle.right()),
            )))
    }

    pub fn incenter(point: Point, angle: &Angle) -> Theorem {
        Theorem::new("Incenter theorem", "r46")
            .hyp(Statement::EqualAngles(EqualAngles::new(
                Angle::new(angle.vertex(), angle.left(), point),
                Angle::new(point, angle.left(), angle.right()),
            )))
            .hyp(Statement::EqualAngles(EqualAngles::new(
                Angle::new(angle.left(), angle.right(), point),
                Angle::new(point, angle.right(), angle.vertex()),
            )))
            .hyp(Statement::Ncoll(NonCollinear::new(
                angle.left(),
                angle.vertex(),
                angle.right(),
            )))
            .concl(Statement::EqualAngles(EqualAngles::new(
                Angle::new(angle.left(), angle.vertex(), point),
                Angle::new(point, angle.vertex(), angle.right()),
            )))
    }

    pub fn angle_bisector_meets_bisector(ang: &Angle, pt: Point) -> Theorem {
        Theorem::new("Angle bisector meets side bisector on the circumcircle.", "r74")
            .hyp(Statement::EqualAngles(EqualAngles::new(
                Angle::new(ang.left(), ang.vertex(), pt),
                Angle::new(pt, ang.vertex(), ang.right()),
            )))
            .hyp(Statement::Cong(DistEqDist::new(
                Dist::new(ang.left(), pt),
                Dist::new(ang.right(), pt),
            )))
            .hyp(Statement::Ncoll(NonCollinear::new(
                ang.left(),
                ang.vertex(),
                ang.right(),
            )))
            .hyp(Statement::Nperp(NonPerpendicular::new(
                SlopeAngle::new(ang.vertex(), pt),
                SlopeAngle::new(ang.left(), ang.right()),
            )))
            .concl(Statement::Cyclic(CyclicQuadrangle::new(
                pt,
                ang.left(),
                ang.vertex(),
                ang.right(),
            )))
    }

    // ----- sines -----

    /// `sin² α = sin² β` gives `α = ±β`; the matcher picks the branch that
    /// holds numerically.
    pub fn equal_angles_of_sin_eq_sin(p: &EqualAngles) -> Theorem {
        let eq = Equation::sub_eq_const(
            SinOrDist::from_angle(p.right_angle()),
            SinOrDist::from_angle(p.left_angle()),
            RootRat::one(),
        );
        Theorem::new("equal angles of sin eq sin", "ignore")
            .hyp(Statement::EqnSinOrDist(eq))
            .concl(Statement::EqualAngles(*p))
    }

    pub fn sin_eq_sin_of_equal_angles(p: &EqualAngles) -> Theorem {
        Theorem::equal_angles_of_sin_eq_sin(p).converse("sin eq sin of equal angles", "ignore")
    }

    pub fn law_of_sines(t: &Triangle) -> Theorem {
        let eq = Equation::sub_eq_sub(
            SinOrDist::from_squared_dist(t.dist_bc().squared()),
            SinOrDist::from_angle(t.angle_a()),
            SinOrDist::from_squared_dist(t.dist_ac().squared()),
            SinOrDist::from_angle(t.angle_b()),
        );
        Theorem::new("law of sines", "ignore")
            .hyp(Statement::Ncoll(NonCollinear::new(t.a(), t.b(), t.c())))
            .concl(Statement::EqnSinOrDist(eq))
    }

    /// `∠ = rπ` for a well-known `r` pins down `sin² ∠` exactly.
    pub fn sin_eq_of_angle_eq(ang: &Angle, ind: usize) -> Theorem {
        let (ang_val, sin_val) = known_sin_squares()[ind];
        let eqn = Equation::new(
            LinearCombination::single(SinOrDist::from_angle(*ang)),
            RootRat::new(&sin_val),
        );
        Theorem::new("Sine of a known angle", "ignore")
            .hyp(Statement::AngleEq(AngleEq::new(*ang, AddCircle::new(ang_val))))
            .concl(Statement::EqnSinOrDist(eqn))
    }

    pub fn angle_eq_of_sin_eq(ang: &Angle, ind: usize) -> Theorem {
        Theorem::sin_eq_of_angle_eq(ang, ind).converse("Find angle by its sine", "ignore")
    }
}

/// `AC² + BD² − AD² − BC²` for the segments of a perpendicularity.
fn perp_sum_squares_equation(p: &Perpendicular) -> Equation<SquaredDist> {
    let lhs = LinearCombination::single(SquaredDist::new(p.left().left(), p.right().left()))
        - LinearCombination::single(SquaredDist::new(p.left().left(), p.right().right()))
        - LinearCombination::single(SquaredDist::new(p.left().right(), p.right().left()))
        + LinearCombination::single(SquaredDist::new(p.left().right(), p.right().right()));
    Equation::new(lhs, Rat::from_integer(0))
}

/// `VL² + VR² − LR²` at the vertex of an angle.
fn pythagoras_equation(ang: &Angle) -> Equation<SquaredDist> {
    let lhs = LinearCombination::single(SquaredDist::new(ang.vertex(), ang.left()))
        + LinearCombination::single(SquaredDist::new(ang.vertex(), ang.right()))
        - LinearCombination::single(SquaredDist::new(ang.left(), ang.right()));
    Equation::new(lhs, Rat::from_integer(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn isosceles_problem() -> Problem {
        let mut prob = Problem::new();
        prob.add_point("A", 0.0, 0.0).unwrap();
        prob.add_point("B", 2.0, 0.0).unwrap();
        prob.add_point("C", 1.0, 1.732).unwrap();
        prob
    }

    #[test]
    fn test_isosceles_theorem_checks_numerically() {
        let prob = isosceles_problem();
        // |CA| = |CB| in this triangle, so the instance at vertex C holds.
        let thm = Theorem::equal_angles_of_cong(Point(2), Point(0), Point(1));
        assert!(thm.check_numerically(&prob));
    }

    #[test]
    fn test_converse_swaps_sides() {
        let p = Circumcenter::new(Point(0), Triangle::new(Point(1), Point(2), Point(0)));
        let thm = Theorem::circumcenter_of_cong(&p);
        let conv = Theorem::cong_of_circumcenter(&p);
        assert_eq!(thm.hypotheses().len(), conv.conclusions().len());
        assert_eq!(thm.conclusions().len(), conv.hypotheses().len());
        assert_eq!(conv.rule_id(), "r72");
    }

    #[test]
    fn test_max_point() {
        let thm = Theorem::equal_angles_of_cong(Point(2), Point(0), Point(5));
        assert_eq!(thm.max_point(), Point(5));
    }

    #[test]
    fn test_normalize_normalizes_every_statement() {
        let thm = Theorem::cong_of_equal_angles(Point(2), Point(1), Point(0)).normalize();
        for p in thm.hypotheses().iter().chain(thm.conclusions()) {
            assert_eq!(*p, p.normalize());
        }
    }
}
