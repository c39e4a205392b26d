//! Numerical theorem matching
//!
//! Runs once at solver startup: enumerates geometric coincidences in the
//! problem's coordinates (similar triangles, betweenness, equal angles,
//! circles, parallelograms, perpendiculars) by sorting and bucketing, then
//! emits numerically verified theorem instances.

use crate::config::SolverConfig;
use crate::geometry::{Angle, Dist, Point, Problem, SinOrDist, SlopeAngle, Triangle};
use crate::numbers::{rat_to_f64, EPS, REL_TOL};
use crate::statement::{
    Circumcenter, Collinear, CongruentTriangles, CyclicQuadrangle, IsOrthocenter, Midpoint,
    Parallel, Parallelogram, Perpendicular, SimilarTriangles, Thales,
};
use crate::theorem::Theorem;
use rustc_hash::FxHashSet;
use tracing::warn;

/// Bucket boundaries over a slice sorted by `key`: consecutive items stay
/// in one bucket while their keys advance by less than [`EPS`]. A bucket
/// stretching past `10·EPS` from its start hints at drift accumulation and
/// is logged.
fn bucket_ranges<T>(items: &[T], key: impl Fn(&T) -> f64) -> Vec<std::ops::Range<usize>> {
    let mut res = Vec::new();
    if items.is_empty() {
        return res;
    }
    let mut start = 0;
    let mut start_key = key(&items[0]);
    let mut last_key = start_key;
    for (ind, item) in items.iter().enumerate().skip(1) {
        let k = key(item);
        if k < last_key + EPS {
            if k >= start_key + 10.0 * EPS {
                warn!("bucket tolerance 10x overflow while grouping items");
            }
        } else {
            res.push(start..ind);
            start = ind;
            start_key = k;
        }
        last_key = k;
    }
    res.push(start..items.len());
    res
}

/// All pairs within each bucket of a sorted `(key, item)` vector.
fn for_each_pair<T>(items: &[(f64, T)], mut callback: impl FnMut(&T, &T)) {
    for range in bucket_ranges(items, |p| p.0) {
        let bucket = &items[range];
        for i in 0..bucket.len() {
            for j in i + 1..bucket.len() {
                callback(&bucket[i].1, &bucket[j].1);
            }
        }
    }
}

/// Items of a sorted `(key, item)` vector whose key is within tolerance of
/// `target`.
fn equal_range<T>(items: &[(f64, T)], target: f64) -> &[(f64, T)] {
    let start = items.partition_point(|p| p.0 < target - EPS);
    let end = items.partition_point(|p| p.0 <= target + EPS);
    &items[start..end]
}

pub struct TheoremMatcher<'a> {
    problem: &'a Problem,
    config: &'a SolverConfig,
    theorems: Vec<Theorem>,
}

impl<'a> TheoremMatcher<'a> {
    /// Enumerates every theorem instance supported by the coordinates.
    pub fn run(problem: &'a Problem, config: &'a SolverConfig) -> Vec<Theorem> {
        let mut matcher = TheoremMatcher {
            problem,
            config,
            theorems: Vec::new(),
        };
        matcher.match_similar_triangles();
        matcher.match_between();
        let important_angles = matcher.match_equal_angles();
        matcher.match_law_sin(&important_angles);
        matcher.match_circles();
        matcher.match_parallelograms();
        if config.ar_squared_enabled && config.eqn_statements_enabled {
            matcher.match_perpendiculars();
        } else {
            matcher.match_orthocenters();
        }
        matcher.theorems
    }

    fn insert_theorem(&mut self, thm: Theorem) {
        if !thm.check_numerically(self.problem) {
            return;
        }
        self.theorems.push(thm.normalize());
    }

    // ----- similar triangles -----

    /// Triangles in the canonical side order `|AB| ≤ |BC| ≤ |AC|` (with
    /// relative slack), keyed by the two side ratios.
    fn all_triangles(&self) -> Vec<(f64, f64, Triangle)> {
        let prob = self.problem;
        let mut res = Vec::new();
        for pt_a in prob.all_points() {
            for pt_b in prob.all_points() {
                if prob.is_close(pt_a, pt_b) {
                    continue;
                }
                for pt_c in prob.all_points() {
                    if Collinear::new(pt_a, pt_b, pt_c).check_equations(prob) {
                        continue;
                    }
                    let dist_ab = Dist::new(pt_a, pt_b).eval(prob);
                    let dist_ac = Dist::new(pt_a, pt_c).eval(prob);
                    let dist_bc = Dist::new(pt_b, pt_c).eval(prob);
                    if dist_ab > (1.0 + REL_TOL) * dist_bc {
                        continue;
                    }
                    if dist_bc > (1.0 + REL_TOL) * dist_ac {
                        continue;
                    }
                    res.push((
                        dist_ab / dist_ac,
                        dist_ab / dist_bc,
                        Triangle::new(pt_a, pt_b, pt_c),
                    ));
                }
            }
        }
        res
    }

    fn match_similar_triangles(&mut self) {
        let mut triangles = all_sorted(self.all_triangles());
        for outer in bucket_ranges(&triangles, |t| t.0) {
            let bucket = &mut triangles[outer];
            bucket.sort_by(|x, y| x.1.total_cmp(&y.1));
            for inner in bucket_ranges(bucket, |t| t.1) {
                let pairs: Vec<(f64, f64, Triangle)> = bucket[inner].to_vec();
                self.on_span_triangles(&pairs);
            }
        }
    }

    fn on_span_triangles(&mut self, bucket: &[(f64, f64, Triangle)]) {
        for left in 0..bucket.len() {
            let area_left = bucket[left].2.area(self.problem);
            for right in left + 1..bucket.len() {
                let same_clockwise =
                    (area_left > 0.0) == (bucket[right].2.area(self.problem) > 0.0);
                self.on_similar_triangles(&SimilarTriangles::new(
                    bucket[left].2,
                    bucket[right].2,
                    same_clockwise,
                ));
            }
        }
    }

    fn on_similar_triangles(&mut self, simtri: &SimilarTriangles) {
        for rotated in simtri.cyclic_rotations() {
            self.insert_theorem(Theorem::similar_triangles_of_sas(&rotated));
        }
        let congtri = CongruentTriangles::new(
            simtri.left(),
            simtri.right(),
            simtri.same_clockwise(),
        );
        if congtri.check_nondegen(self.problem) && congtri.check_equations(self.problem) {
            self.insert_theorem(Theorem::congruent_triangles_of_similar_triangles(&congtri));
            self.insert_theorem(Theorem::congruent_triangles_properties(&congtri));
        }
        self.insert_theorem(Theorem::similar_triangles_properties(simtri));
        self.insert_theorem(Theorem::similar_triangles_of_aa(simtri));
        self.insert_theorem(Theorem::similar_triangles_of_sss(simtri));
    }

    // ----- betweenness -----

    fn sorted_between(&mut self) -> Vec<(f64, Collinear)> {
        let prob = self.problem;
        let mut all = Vec::new();
        for right in prob.all_points() {
            for middle in prob.all_points() {
                for left in right.up_to() {
                    let pred = Collinear::new(left, middle, right);
                    if !pred.check_nondegen(prob)
                        || !pred.check_equations(prob)
                        || !pred.is_between(prob)
                    {
                        continue;
                    }
                    self.on_between(&pred);
                    let dist_left = Dist::new(left, middle).eval(prob);
                    let dist_right = Dist::new(middle, right).eval(prob);
                    if dist_left <= (1.0 + REL_TOL) * dist_right {
                        all.push((dist_left / (dist_left + dist_right), pred));
                        if dist_right <= (1.0 + REL_TOL) * dist_left {
                            self.on_midpoint(&Midpoint::new(left, middle, right));
                        }
                    }
                    if dist_right <= (1.0 + REL_TOL) * dist_left {
                        all.push((
                            dist_right / (dist_right + dist_left),
                            Collinear::new(right, middle, left),
                        ));
                    }
                }
            }
        }
        all.sort_by(|x, y| x.0.total_cmp(&y.0));
        all
    }

    fn on_between(&mut self, pred: &Collinear) {
        if self.config.ar_dist_enabled && self.config.eqn_statements_enabled {
            self.insert_theorem(Theorem::coll_of_add_length(pred));
            self.insert_theorem(Theorem::add_length_of_between(pred));
        }
        for perm in pred.cyclic_permutations() {
            self.insert_theorem(Theorem::coll_of_para(&perm));
            self.insert_theorem(Theorem::para_of_coll(&perm));
        }
    }

    fn on_midpoint(&mut self, pred: &Midpoint) {
        if self.config.ar_squared_enabled && self.config.eqn_statements_enabled {
            for other in self.problem.all_points() {
                if other == pred.left() || other == pred.middle() || other == pred.right() {
                    continue;
                }
                self.insert_theorem(Theorem::sum_squares_of_midpoint(pred, other));
            }
        }
        if !self.config.ar_dist_enabled {
            self.insert_theorem(Theorem::midpoint_ratio_dist(pred));
        }
        if !self.config.eqn_statements_enabled {
            for other in self.problem.all_points() {
                if other == pred.left() || other == pred.middle() || other == pred.right() {
                    continue;
                }
                let perp = Perpendicular::new(
                    SlopeAngle::new(pred.left(), other),
                    SlopeAngle::new(other, pred.right()),
                );
                if perp.check_nondegen(self.problem) && perp.check_equations(self.problem) {
                    self.insert_theorem(Theorem::hypotenuse_is_diameter(pred, other));
                }
            }
        }
        self.insert_theorem(Theorem::midpoint_of_coll_cong(pred));
        self.insert_theorem(Theorem::coll_of_midpoint(pred));
        self.insert_theorem(Theorem::cong_of_midpoint(pred));
    }

    fn match_between(&mut self) {
        let all = self.sorted_between();
        let mut pairs = Vec::new();
        for_each_pair(&all, |left, right| pairs.push((*left, *right)));
        for (left, right) in pairs {
            self.on_between_equal_ratio(&left, &right);
        }
    }

    fn on_between_equal_ratio(&mut self, left: &Collinear, right: &Collinear) {
        self.insert_theorem(Theorem::rotate_equal_ratio_of_same_side(left, right));
        self.insert_theorem(Theorem::rotate_equal_ratio_of_same_side(
            &Collinear::new(left.b(), left.c(), left.a()),
            &Collinear::new(right.b(), right.c(), right.a()),
        ));
        self.insert_theorem(Theorem::rotate_equal_ratio_of_same_side(
            &Collinear::new(left.c(), left.a(), left.b()),
            &Collinear::new(right.c(), right.a(), right.b()),
        ));
        if left.a() == right.a() || left.b() == right.b() || left.c() == right.c() {
            return;
        }
        let thales = Thales::new(*left, *right);
        if !thales.check_numerically(self.problem) {
            return;
        }
        self.insert_theorem(Theorem::thales_para_of_eqratio(&thales));
        self.insert_theorem(Theorem::thales_para_of_eqratio(&thales.rotate()));
        self.insert_theorem(Theorem::thales_para_of_eqratio(&thales.rotate().rotate()));
        self.insert_theorem(Theorem::thales_eqratio_of_para(&thales));
    }

    // ----- equal angles -----

    fn all_angles(&self) -> Vec<(f64, Angle)> {
        let prob = self.problem;
        let mut all = Vec::new();
        for left in prob.all_points() {
            for vertex in prob.all_points() {
                for right in prob.all_points() {
                    if !Collinear::new(left, vertex, right).check_equations(prob) {
                        let ang = Angle::new(left, vertex, right);
                        all.push((ang.eval(prob).number(), ang));
                    }
                }
            }
        }
        all.sort_by(|x, y| x.0.total_cmp(&y.0));
        all
    }

    fn match_equal_angles(&mut self) -> FxHashSet<SinOrDist> {
        let all = self.all_angles();
        let mut important_angles = FxHashSet::default();

        for range in bucket_ranges(&all, |p| p.0) {
            let bucket: Vec<Angle> = all[range].iter().map(|p| p.1).collect();
            for (left, ang) in bucket.iter().enumerate() {
                important_angles.insert(SinOrDist::from_angle(*ang));
                for right in &bucket[left + 1..] {
                    self.on_equal_angles(ang, right);
                }
            }
        }

        if self.config.ar_squared_enabled && self.config.eqn_statements_enabled {
            let right_angles: Vec<Angle> =
                equal_range(&all, 0.5).iter().map(|p| p.1).collect();
            for ang in right_angles {
                self.insert_theorem(Theorem::pythagoras_of_perp(&ang));
                self.insert_theorem(Theorem::pythagoras_of_sum_squares(&ang));
            }
        }

        // Bridges like `sin² ABC = 1/4 ↔ ∠ABC = π/6`.
        if self.config.eqn_statements_enabled && self.config.ar_sin_enabled {
            for (i, (ang_val, _)) in crate::numbers::known_sin_squares().iter().enumerate() {
                let matching: Vec<Angle> = equal_range(&all, rat_to_f64(ang_val))
                    .iter()
                    .map(|p| p.1)
                    .collect();
                for ang in matching {
                    self.insert_theorem(Theorem::sin_eq_of_angle_eq(&ang, i));
                    self.insert_theorem(Theorem::angle_eq_of_sin_eq(&ang, i));
                }
            }
        }

        important_angles
    }

    fn on_equal_angles(&mut self, left: &Angle, right: &Angle) {
        // `∠ABD = ∠ACD` with `B, C < A < D` is a cyclic quadrilateral,
        // matched exactly once per quadruple.
        if left.left() == right.left()
            && left.right() == right.right()
            && left.left() < left.right()
            && left.vertex() < left.left()
            && right.vertex() < right.left()
        {
            self.on_cyclic(&CyclicQuadrangle::new(
                left.vertex(),
                right.vertex(),
                left.left(),
                left.right(),
            ));
        }

        // `∠ABC = ∠CBD` with `A < D` marks `BC` as a bisector, each one
        // matched once.
        if left.vertex() == right.vertex() {
            if left.right() == right.left() && left.left() < right.right() {
                self.on_point_on_bisector(
                    left.right(),
                    &Angle::new(left.left(), left.vertex(), right.right()),
                );
            } else if left.left() == right.right() && right.left() < left.right() {
                self.on_point_on_bisector(
                    left.left(),
                    &Angle::new(right.left(), left.vertex(), left.right()),
                );
            }
        }

        // `α = β ↔ sin² α = sin² β`, excluding right angles (the
        // reflexive sine identity would otherwise yield `AB ⟂ BC` free).
        if self.config.ar_sin_enabled && self.config.eqn_statements_enabled {
            if SinOrDist::from_angle(*left) != SinOrDist::from_angle(*right) {
                self.insert_theorem(Theorem::sin_eq_sin_of_equal_angles(
                    &crate::statement::EqualAngles::new(*left, *right),
                ));
            }
            if !Perpendicular::new(left.left_side(), left.right_side())
                .check_equations(self.problem)
            {
                self.insert_theorem(Theorem::equal_angles_of_sin_eq_sin(
                    &crate::statement::EqualAngles::new(*left, *right),
                ));
            }
        }
    }

    fn on_cyclic(&mut self, pred: &CyclicQuadrangle) {
        self.insert_theorem(Theorem::cyclic_of_equal_angles(pred));
        self.insert_theorem(Theorem::cyclic_of_equal_angles(&CyclicQuadrangle::new(
            pred.a(),
            pred.c(),
            pred.b(),
            pred.d(),
        )));
        self.insert_theorem(Theorem::cyclic_of_equal_angles(&CyclicQuadrangle::new(
            pred.b(),
            pred.c(),
            pred.a(),
            pred.d(),
        )));
        self.insert_theorem(Theorem::cyclic_properties(pred));
        let para = |p1: Point, p2: Point, q1: Point, q2: Point| {
            Parallel::new(SlopeAngle::new(p1, p2), SlopeAngle::new(q1, q2))
                .check_equations(self.problem)
        };
        if para(pred.a(), pred.b(), pred.c(), pred.d()) {
            self.on_isosceles_trapezoid(pred.c(), pred.a(), pred.b(), pred.d());
        }
        if para(pred.a(), pred.c(), pred.b(), pred.d()) {
            self.on_isosceles_trapezoid(pred.b(), pred.a(), pred.c(), pred.d());
        }
        if para(pred.a(), pred.d(), pred.b(), pred.c()) {
            self.on_isosceles_trapezoid(pred.a(), pred.b(), pred.c(), pred.d());
        }
    }

    fn on_isosceles_trapezoid(&mut self, pt_a: Point, pt_b: Point, pt_c: Point, pt_d: Point) {
        self.insert_theorem(Theorem::equal_angles_of_cong_cyclic(pt_a, pt_b, pt_c, pt_d));
        self.insert_theorem(Theorem::equal_angles_of_cong_cyclic(pt_a, pt_c, pt_b, pt_d));
        self.insert_theorem(Theorem::equal_angles_of_iso_trapezoid(pt_a, pt_b, pt_c, pt_d));
        self.insert_theorem(Theorem::equal_angles_of_iso_trapezoid(pt_a, pt_c, pt_b, pt_d));
    }

    fn on_point_on_bisector(&mut self, point: Point, angle: &Angle) {
        self.insert_theorem(Theorem::angle_bisector_meets_bisector(angle, point));
        if !self.config.ar_sin_enabled || !self.config.eqn_statements_enabled {
            self.insert_theorem(Theorem::triangle_bisector_of_equal_angles(point, angle));
            self.insert_theorem(Theorem::triangle_bisector_of_eqratio(point, angle));
        }
        self.insert_theorem(Theorem::incenter(point, angle));
    }

    // ----- circles -----

    fn match_circles(&mut self) {
        let prob = self.problem;
        for center in prob.all_points() {
            let mut pts = Vec::new();
            for other in prob.all_points() {
                if !prob.is_close(center, other) {
                    pts.push((Dist::new(center, other).eval(prob), other));
                }
            }
            pts.sort_by(|x, y| x.0.total_cmp(&y.0));
            for range in bucket_ranges(&pts, |p| p.0) {
                let bucket: Vec<Point> = pts[range].iter().map(|p| p.1).collect();
                self.on_circle(center, &bucket);
            }
        }
    }

    fn on_circle(&mut self, center: Point, points: &[Point]) {
        for (i, &pt_a) in points.iter().enumerate() {
            for (j, &pt_b) in points.iter().enumerate().skip(i + 1) {
                self.on_isosceles_triangle(center, pt_a, pt_b);
                for (k, &pt_c) in points.iter().enumerate().skip(j + 1) {
                    self.on_circumcenter(&Circumcenter::new(
                        center,
                        Triangle::new(pt_a, pt_b, pt_c),
                    ));
                    for &pt_d in points.iter().skip(k + 1) {
                        self.on_quadrangle_circumcenter(
                            center,
                            &CyclicQuadrangle::new(pt_a, pt_b, pt_c, pt_d),
                        );
                    }
                }
            }
        }
    }

    fn on_isosceles_triangle(&mut self, vertex: Point, left: Point, right: Point) {
        if Collinear::new(vertex, left, right).check_equations(self.problem) {
            return;
        }
        self.insert_theorem(Theorem::equal_angles_of_cong(vertex, left, right));
        self.insert_theorem(Theorem::cong_of_equal_angles(vertex, left, right));
    }

    fn on_circumcenter(&mut self, pred: &Circumcenter) {
        if self.config.eqn_statements_enabled {
            self.insert_theorem(Theorem::arc_of_circumcenter(pred));
            for tri in pred.triangle().cyclic_rotations() {
                self.insert_theorem(Theorem::circumcenter_of_arc(&Circumcenter::new(
                    pred.center(),
                    tri,
                )));
            }
        }
        self.insert_theorem(Theorem::circumcenter_of_cong(pred));
        self.insert_theorem(Theorem::cong_of_circumcenter(pred));
    }

    fn on_quadrangle_circumcenter(&mut self, center: Point, cyc: &CyclicQuadrangle) {
        // With equation statements available the same facts follow from
        // the arc equations.
        if !self.config.eqn_statements_enabled {
            let triples = [
                (Triangle::new(cyc.a(), cyc.b(), cyc.c()), cyc.d()),
                (Triangle::new(cyc.b(), cyc.c(), cyc.d()), cyc.a()),
                (Triangle::new(cyc.c(), cyc.d(), cyc.a()), cyc.b()),
                (Triangle::new(cyc.d(), cyc.a(), cyc.b()), cyc.c()),
            ];
            for (tri, fourth) in triples {
                self.insert_theorem(Theorem::cong_of_circumcenter_of_cyclic(
                    &Circumcenter::new(center, tri),
                    fourth,
                ));
            }
        }
        self.insert_theorem(Theorem::center_of_cyclic_of_cong_of_cong(cyc, center));
        self.insert_theorem(Theorem::center_of_cyclic_of_cong_of_cong(
            &CyclicQuadrangle::new(cyc.a(), cyc.c(), cyc.b(), cyc.d()),
            center,
        ));
        self.insert_theorem(Theorem::center_of_cyclic_of_cong_of_cong(
            &CyclicQuadrangle::new(cyc.a(), cyc.d(), cyc.b(), cyc.c()),
            center,
        ));
    }

    // ----- parallelograms, perpendiculars, orthocenters -----

    fn match_parallelograms(&mut self) {
        if !(self.config.ar_squared_enabled && self.config.eqn_statements_enabled) {
            return;
        }
        let prob = self.problem;
        for pt_d in prob.all_points() {
            for pt_c in pt_d.up_to() {
                for pt_a in pt_c.up_to() {
                    for pt_b in prob.all_points() {
                        if pt_b == pt_a || pt_b == pt_c || pt_b == pt_d {
                            continue;
                        }
                        let pred = Parallelogram::new(pt_a, pt_b, pt_c, pt_d);
                        self.insert_theorem(Theorem::parallelogram_law(&pred));
                    }
                }
            }
        }
    }

    fn match_perpendiculars(&mut self) {
        let prob = self.problem;
        for pt_b in prob.all_points() {
            for pt_a in pt_b.up_to() {
                for pt_d in pt_b.up_to() {
                    for pt_c in pt_d.up_to() {
                        if pt_a == pt_c || pt_a == pt_d {
                            continue;
                        }
                        let pred = Perpendicular::new(
                            SlopeAngle::new(pt_a, pt_b),
                            SlopeAngle::new(pt_c, pt_d),
                        );
                        if pred.check_equations(prob) {
                            self.insert_theorem(Theorem::perp_of_sum_squares(&pred));
                            self.insert_theorem(Theorem::sum_squares_of_perp(&pred));
                        }
                    }
                }
            }
        }
    }

    fn match_orthocenters(&mut self) {
        let prob = self.problem;
        for pt_d in prob.all_points() {
            for pt_c in pt_d.up_to() {
                for pt_b in pt_c.up_to() {
                    for pt_a in pt_b.up_to() {
                        let tri = Triangle::new(pt_a, pt_b, pt_c);
                        let pred = IsOrthocenter::new(tri, pt_d);
                        if pred.check_numerically(prob) {
                            self.insert_theorem(Theorem::orthocenter(&pred));
                            self.insert_theorem(Theorem::orthocenter(&IsOrthocenter::new(
                                Triangle::new(pt_b, pt_c, pt_a),
                                pt_d,
                            )));
                            self.insert_theorem(Theorem::orthocenter(&IsOrthocenter::new(
                                Triangle::new(pt_c, pt_a, pt_b),
                                pt_d,
                            )));
                        }
                    }
                }
            }
        }
    }

    fn match_law_sin(&mut self, angles: &FxHashSet<SinOrDist>) {
        if !(self.config.ar_sin_enabled && self.config.eqn_statements_enabled) {
            return;
        }
        let prob = self.problem;
        for pt_c in prob.all_points() {
            for pt_b in pt_c.up_to() {
                for pt_a in pt_b.up_to() {
                    if Collinear::new(pt_a, pt_b, pt_c).check_equations(prob) {
                        continue;
                    }
                    let tri = Triangle::new(pt_a, pt_b, pt_c);
                    let sin_a = angles.contains(&SinOrDist::from_angle(tri.angle_a()));
                    let sin_b = angles.contains(&SinOrDist::from_angle(tri.angle_b()));
                    let sin_c = angles.contains(&SinOrDist::from_angle(tri.angle_c()));
                    if sin_a && sin_b {
                        self.insert_theorem(Theorem::law_of_sines(&tri));
                    }
                    if sin_b && sin_c {
                        self.insert_theorem(Theorem::law_of_sines(&Triangle::new(
                            tri.b(),
                            tri.c(),
                            tri.a(),
                        )));
                    }
                    if sin_a && !sin_b && sin_c {
                        self.insert_theorem(Theorem::law_of_sines(&Triangle::new(
                            tri.c(),
                            tri.a(),
                            tri.b(),
                        )));
                    }
                }
            }
        }
    }
}

fn all_sorted(mut items: Vec<(f64, f64, Triangle)>) -> Vec<(f64, f64, Triangle)> {
    items.sort_by(|x, y| x.0.total_cmp(&y.0));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_ranges_groups_close_keys() {
        let items: Vec<f64> = vec![1.0, 1.0 + 1e-9, 2.0, 3.0, 3.0 + 1e-9, 3.0 + 2e-9];
        let ranges = bucket_ranges(&items, |x| *x);
        assert_eq!(ranges, vec![0..2, 2..3, 3..6]);
    }

    #[test]
    fn test_equal_range_tolerance() {
        let items: Vec<(f64, u32)> = vec![(0.1, 0), (0.5 - 1e-9, 1), (0.5, 2), (0.9, 3)];
        let hits = equal_range(&items, 0.5);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_matcher_finds_isosceles_rules() {
        let mut prob = Problem::new();
        prob.add_point("A", 0.0, 0.0).unwrap();
        prob.add_point("B", 2.0, 0.0).unwrap();
        prob.add_point("C", 1.0, 1.732).unwrap();
        let config = SolverConfig::default();
        let theorems = TheoremMatcher::run(&prob, &config);
        // C is equidistant from A and B, so the isosceles rules fire.
        assert!(theorems.iter().any(|t| t.rule_id() == "r13"));
        assert!(theorems.iter().any(|t| t.rule_id() == "r14"));
    }

    #[test]
    fn test_matcher_finds_circle_rules() {
        let mut prob = Problem::new();
        prob.add_point("O", 0.0, 0.0).unwrap();
        prob.add_point("A", 1.0, 0.0).unwrap();
        prob.add_point("B", 0.0, 1.0).unwrap();
        prob.add_point("C", -1.0, 0.0).unwrap();
        let config = SolverConfig::default();
        let theorems = TheoremMatcher::run(&prob, &config);
        assert!(theorems.iter().any(|t| t.rule_id() == "r72"));
        assert!(theorems.iter().any(|t| t.rule_id() == "r73"));
    }
}
