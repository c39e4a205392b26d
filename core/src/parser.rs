//! Line-oriented problem input
//!
//! ```text
//! name <free-form text>
//! point <Name> <x> <y>
//! assume <predicate> <args...>
//! prove <predicate> <args...>
//! ```
//!
//! Rational constants parse as integers, `p/q` fractions, or decimals.

use crate::error::{Error, Result};
use crate::geometry::{Angle, Dist, Point, Problem, SlopeAngle, SquaredDist, Triangle};
use crate::numbers::{AddCircle, NNRat, Rat};
use crate::statement::{
    AngleEq, Circumcenter, Collinear, CongruentTriangles, CyclicQuadrangle, DiffSignDot, DistEq,
    DistEqDist, EqualAngles, EqualLineAngles, EqualRatios, LineAngleEq, Midpoint, NonCollinear,
    NonParallel, NonPerpendicular, NotEqual, ObtuseAngle, Parallel, Perpendicular,
    RatioDistEquals, RatioSquaredDist, SameClock, SameSignDot, SimilarTriangles, SquaredDistEq,
    Statement,
};

pub fn parse_problem(input: &str) -> Result<Problem> {
    let mut prob = Problem::new();
    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        parse_line(&mut prob, trimmed).map_err(|e| match e {
            Error::Parse(msg) => Error::Parse(format!("{msg} in line `{line}`")),
            other => other,
        })?;
    }
    Ok(prob)
}

fn parse_line(prob: &mut Problem, line: &str) -> Result<()> {
    if let Some(rest) = line.strip_prefix("name ") {
        prob.set_name(rest.trim());
        return Ok(());
    }
    let mut tokens = line.split_whitespace();
    let action = tokens
        .next()
        .ok_or_else(|| Error::Parse("empty line".into()))?;
    match action {
        "point" => {
            let name = next_token(&mut tokens)?;
            if !name.chars().next().is_some_and(|c| c.is_alphabetic()) {
                return Err(Error::Parse(format!("invalid point name `{name}`")));
            }
            let x = parse_coord(next_token(&mut tokens)?)?;
            let y = parse_coord(next_token(&mut tokens)?)?;
            prob.add_point(name, x, y)?;
            Ok(())
        }
        "assume" | "prove" => {
            let head = next_token(&mut tokens)?;
            let statements = parse_statements(prob, head, &mut tokens)?;
            for p in statements {
                if action == "assume" {
                    prob.add_hypothesis(p);
                } else {
                    prob.add_goal(p);
                }
            }
            Ok(())
        }
        _ => Err(Error::Parse(format!("unknown action `{action}`"))),
    }
}

fn next_token<'b>(tokens: &mut impl Iterator<Item = &'b str>) -> Result<&'b str> {
    tokens
        .next()
        .ok_or_else(|| Error::Parse("unexpected end of line".into()))
}

fn parse_coord(token: &str) -> Result<f64> {
    token
        .parse()
        .map_err(|_| Error::Parse(format!("invalid coordinate `{token}`")))
}

/// `p/q`, integer, or decimal literal.
fn parse_nnrat(token: &str) -> Result<NNRat> {
    let bad = || Error::Parse(format!("invalid rational `{token}`"));
    if let Some((num, den)) = token.split_once('/') {
        let n: u64 = num.parse().map_err(|_| bad())?;
        let d: u64 = den.parse().map_err(|_| bad())?;
        if d == 0 {
            return Err(bad());
        }
        return Ok(NNRat::new(n, d));
    }
    if let Some((int_part, frac_part)) = token.split_once('.') {
        let int: u64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| bad())?
        };
        let frac: u64 = frac_part.parse().map_err(|_| bad())?;
        let scale = 10u64.pow(frac_part.len() as u32);
        return Ok(NNRat::new(int * scale + frac, scale));
    }
    let n: u64 = token.parse().map_err(|_| bad())?;
    Ok(NNRat::from_integer(n))
}

fn parse_rat(token: &str) -> Result<Rat> {
    if let Some(rest) = token.strip_prefix('-') {
        let q = parse_nnrat(rest)?;
        return Ok(-Rat::new(*q.numer() as i64, *q.denom() as i64));
    }
    let q = parse_nnrat(token)?;
    Ok(Rat::new(*q.numer() as i64, *q.denom() as i64))
}

struct Args<'a, 'b, I: Iterator<Item = &'b str>> {
    prob: &'a Problem,
    tokens: I,
}

impl<'a, 'b, I: Iterator<Item = &'b str>> Args<'a, 'b, I> {
    fn point(&mut self) -> Result<Point> {
        self.prob.find_point(next_token(&mut self.tokens)?)
    }

    fn opt_point(&mut self) -> Result<Option<Point>> {
        match self.tokens.next() {
            None => Ok(None),
            Some(tok) => Ok(Some(self.prob.find_point(tok)?)),
        }
    }

    fn dist(&mut self) -> Result<Dist> {
        let p1 = self.point()?;
        let p2 = self.point()?;
        if p1 == p2 {
            return Err(Error::Parse("degenerate segment".into()));
        }
        Ok(Dist::new(p1, p2))
    }

    fn squared_dist(&mut self) -> Result<SquaredDist> {
        Ok(self.dist()?.squared())
    }

    fn slope_angle(&mut self) -> Result<SlopeAngle> {
        let p1 = self.point()?;
        let p2 = self.point()?;
        if p1 == p2 {
            return Err(Error::Parse("degenerate line".into()));
        }
        Ok(SlopeAngle::new(p1, p2))
    }

    fn angle(&mut self) -> Result<Angle> {
        let left = self.point()?;
        let vertex = self.point()?;
        let right = self.point()?;
        if vertex == left || vertex == right {
            return Err(Error::Parse("degenerate angle".into()));
        }
        Ok(Angle::new(left, vertex, right))
    }

    fn triangle(&mut self) -> Result<Triangle> {
        Ok(Triangle::new(self.point()?, self.point()?, self.point()?))
    }

    fn nnrat(&mut self) -> Result<NNRat> {
        parse_nnrat(next_token(&mut self.tokens)?)
    }

    fn rat(&mut self) -> Result<Rat> {
        parse_rat(next_token(&mut self.tokens)?)
    }
}

fn parse_statements<'b>(
    prob: &Problem,
    head: &str,
    tokens: &mut impl Iterator<Item = &'b str>,
) -> Result<Vec<Statement>> {
    let mut args = Args { prob, tokens };
    let mut res = Vec::new();
    match head {
        "coll" => {
            let mut a = args.point()?;
            let mut b = args.point()?;
            let mut c = args.point()?;
            res.push(Statement::Coll(Collinear::new(a, b, c)));
            while let Some(next) = args.opt_point()? {
                a = b;
                b = c;
                c = next;
                res.push(Statement::Coll(Collinear::new(a, b, c)));
            }
        }
        "ncoll" => {
            let a = args.point()?;
            let b = args.point()?;
            let c = args.point()?;
            res.push(Statement::Ncoll(NonCollinear::new(a, b, c)));
        }
        "cong" => {
            let d1 = args.dist()?;
            let d2 = args.dist()?;
            res.push(Statement::Cong(DistEqDist::new(d1, d2)));
        }
        "para" => {
            let s1 = args.slope_angle()?;
            let s2 = args.slope_angle()?;
            res.push(Statement::Para(Parallel::new(s1, s2)));
        }
        "npara" => {
            let s1 = args.slope_angle()?;
            let s2 = args.slope_angle()?;
            res.push(Statement::Npara(NonParallel::new(s1, s2)));
        }
        "perp" => {
            let s1 = args.slope_angle()?;
            let s2 = args.slope_angle()?;
            res.push(Statement::Perp(Perpendicular::new(s1, s2)));
        }
        "nperp" => {
            let s1 = args.slope_angle()?;
            let s2 = args.slope_angle()?;
            res.push(Statement::Nperp(NonPerpendicular::new(s1, s2)));
        }
        "diff" => {
            let a = args.point()?;
            let b = args.point()?;
            res.push(Statement::Diff(NotEqual::new(a, b)));
        }
        "eqangle" | "equal_angles" => {
            // Six points name two three-point angles; eight name four
            // lines.
            let pts: Vec<Point> = {
                let mut collected = Vec::new();
                while let Some(p) = args.opt_point()? {
                    collected.push(p);
                }
                collected
            };
            match pts.len() {
                6 => {
                    if pts[1] == pts[0] || pts[1] == pts[2] || pts[4] == pts[3] || pts[4] == pts[5]
                    {
                        return Err(Error::Parse("degenerate angle".into()));
                    }
                    res.push(Statement::EqualAngles(EqualAngles::new(
                        Angle::new(pts[0], pts[1], pts[2]),
                        Angle::new(pts[3], pts[4], pts[5]),
                    )));
                }
                8 => {
                    for pair in pts.chunks(2) {
                        if pair[0] == pair[1] {
                            return Err(Error::Parse("degenerate line".into()));
                        }
                    }
                    res.push(Statement::EqualLineAngles(EqualLineAngles::new(
                        SlopeAngle::new(pts[0], pts[1]),
                        SlopeAngle::new(pts[2], pts[3]),
                        SlopeAngle::new(pts[4], pts[5]),
                        SlopeAngle::new(pts[6], pts[7]),
                    )));
                }
                n => {
                    return Err(Error::Parse(format!(
                        "eqangle expects 6 or 8 points, got {n}"
                    )));
                }
            }
        }
        "eqratio" => {
            let d1 = args.dist()?;
            let d2 = args.dist()?;
            let d3 = args.dist()?;
            let d4 = args.dist()?;
            res.push(Statement::EqRatio(EqualRatios::new(d1, d2, d3, d4)));
        }
        "cyclic" => {
            let mut a = args.point()?;
            let mut b = args.point()?;
            let mut c = args.point()?;
            let mut d = args.point()?;
            res.push(Statement::Cyclic(CyclicQuadrangle::new(a, b, c, d)));
            while let Some(next) = args.opt_point()? {
                a = b;
                b = c;
                c = d;
                d = next;
                res.push(Statement::Cyclic(CyclicQuadrangle::new(a, b, c, d)));
            }
        }
        "circle" | "circumcenter" => {
            let o = args.point()?;
            let mut a = args.point()?;
            let mut b = args.point()?;
            let mut c = args.point()?;
            res.push(Statement::Circle(Circumcenter::new(
                o,
                Triangle::new(a, b, c),
            )));
            while let Some(next) = args.opt_point()? {
                a = b;
                b = c;
                c = next;
                res.push(Statement::Circle(Circumcenter::new(
                    o,
                    Triangle::new(a, b, c),
                )));
            }
        }
        "simtri" | "simtrir" => {
            let t1 = args.triangle()?;
            let t2 = args.triangle()?;
            res.push(Statement::SimTri(SimilarTriangles::new(
                t1,
                t2,
                head == "simtri",
            )));
        }
        "contri" | "contrir" => {
            let t1 = args.triangle()?;
            let t2 = args.triangle()?;
            res.push(Statement::ConTri(CongruentTriangles::new(
                t1,
                t2,
                head == "contri",
            )));
        }
        "midp" => {
            let m = args.point()?;
            let a = args.point()?;
            let b = args.point()?;
            res.push(Statement::Midpoint(Midpoint::new(a, m, b)));
        }
        "rconst" => {
            let d1 = args.dist()?;
            let d2 = args.dist()?;
            let r = args.nnrat()?;
            res.push(Statement::RatioDist(RatioDistEquals::new(d1, d2, r)));
        }
        "r2const" => {
            let d1 = args.squared_dist()?;
            let d2 = args.squared_dist()?;
            let r = args.nnrat()?;
            res.push(Statement::RatioSquaredDist(RatioSquaredDist::new(d1, d2, r)));
        }
        "lconst" => {
            let d = args.dist()?;
            let r = args.nnrat()?;
            res.push(Statement::DistEq(DistEq::new(d, r)));
        }
        "l2const" => {
            let d = args.squared_dist()?;
            let r = args.nnrat()?;
            res.push(Statement::SquaredDistEq(SquaredDistEq::new(d, r)));
        }
        "aconst" => {
            let s1 = args.slope_angle()?;
            let s2 = args.slope_angle()?;
            let r = args.rat()?;
            res.push(Statement::LineAngleEq(LineAngleEq::new(
                s1,
                s2,
                AddCircle::new(r),
            )));
        }
        "aconst3" => {
            let ang = args.angle()?;
            let r = args.rat()?;
            res.push(Statement::AngleEq(AngleEq::new(ang, AddCircle::new(r))));
        }
        "sameclock" | "nsameclock" => {
            let l = args.triangle()?;
            let r = args.triangle()?;
            let r = if head == "sameclock" {
                r
            } else {
                Triangle::new(r.a(), r.c(), r.b())
            };
            res.push(Statement::SameClock(SameClock::new(l, r)));
        }
        "obtuse_angle" => {
            let ang = args.angle()?;
            res.push(Statement::ObtuseAngle(ObtuseAngle::new(ang)));
        }
        "sameside" | "nsameside" => {
            let a = args.point()?;
            let b = args.point()?;
            let c = args.point()?;
            let d = args.point()?;
            let e = args.point()?;
            let f = args.point()?;
            if head == "sameside" {
                res.push(Statement::SameSide(SameSignDot::new(a, b, c, d, e, f)));
            } else {
                res.push(Statement::NSameSide(DiffSignDot::new(a, b, c, d, e, f)));
            }
        }
        _ => {
            return Err(Error::Parse(format!("unknown statement `{head}`")));
        }
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points_and_hypotheses() {
        let prob = parse_problem(
            "name unit test\n\
             point A 0 0\n\
             point B 2 0\n\
             point C 1 1.732\n\
             assume cong A B A C\n\
             prove eqangle A B C A C B\n",
        )
        .unwrap();
        assert_eq!(prob.name(), "unit test");
        assert_eq!(prob.num_points(), 3);
        assert_eq!(prob.hypotheses().len(), 1);
        assert_eq!(prob.goals().len(), 1);
        assert!(matches!(prob.goals()[0], Statement::EqualAngles(_)));
    }

    #[test]
    fn test_variadic_coll() {
        let prob = parse_problem(
            "point A 0 0\npoint B 1 0\npoint C 2 0\npoint D 3 0\n\
             assume coll A B C D\n",
        )
        .unwrap();
        assert_eq!(prob.hypotheses().len(), 2);
    }

    #[test]
    fn test_rational_forms() {
        assert_eq!(parse_nnrat("3").unwrap(), NNRat::from_integer(3));
        assert_eq!(parse_nnrat("1/2").unwrap(), NNRat::new(1, 2));
        assert_eq!(parse_nnrat("0.25").unwrap(), NNRat::new(1, 4));
        assert_eq!(parse_rat("-1/2").unwrap(), Rat::new(-1, 2));
        assert!(parse_nnrat("1/0").is_err());
    }

    #[test]
    fn test_unknown_point_reported() {
        let err = parse_problem("point A 0 0\nassume coll A B C\n").unwrap_err();
        assert!(matches!(err, Error::UnknownPoint(_)));
    }

    #[test]
    fn test_malformed_line_reported() {
        let err = parse_problem("point A 0 0\nconjecture coll A A A\n").unwrap_err();
        let Error::Parse(msg) = err else {
            panic!("expected a parse error");
        };
        assert!(msg.contains("conjecture"));
    }

    #[test]
    fn test_eqangle_eight_points() {
        let prob = parse_problem(
            "point A 0 0\npoint B 1 0\npoint C 0 1\npoint D 1 1\n\
             assume eqangle A B C D A C B D\n",
        )
        .unwrap();
        assert!(matches!(
            prob.hypotheses()[0],
            Statement::EqualLineAngles(_)
        ));
    }
}
