//! Problem data: named coordinates, hypotheses, goals

use crate::error::{Error, Result};
use crate::numbers::EPS;
use crate::statement::Statement;
use serde::{Deserialize, Serialize};

/// A point of a problem, stored as an index into the owning [`Problem`].
///
/// Comparison is by index; insertion order defines the canonical total
/// order used in normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point(pub u32);

impl Point {
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// All points with a strictly smaller index.
    pub fn up_to(&self) -> impl Iterator<Item = Point> {
        (0..self.0).map(Point)
    }
}

/// A named point with coordinates.
#[derive(Debug, Clone)]
pub struct NamedPoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// The problem under consideration: points plus hypotheses and goals.
#[derive(Debug, Default)]
pub struct Problem {
    points: Vec<NamedPoint>,
    hypotheses: Vec<Statement>,
    goals: Vec<Statement>,
    name: String,
}

impl Problem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point, failing on a duplicate name.
    pub fn add_point(&mut self, name: &str, x: f64, y: f64) -> Result<Point> {
        if self.points.iter().any(|p| p.name == name) {
            return Err(Error::DuplicatePoint(name.to_string()));
        }
        let pt = Point(self.points.len() as u32);
        self.points.push(NamedPoint {
            name: name.to_string(),
            x,
            y,
        });
        Ok(pt)
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_hypothesis(&mut self, p: Statement) {
        self.hypotheses.push(p);
    }

    pub fn hypotheses(&self) -> &[Statement] {
        &self.hypotheses
    }

    pub fn add_goal(&mut self, p: Statement) {
        self.goals.push(p);
    }

    pub fn goals(&self) -> &[Statement] {
        &self.goals
    }

    pub fn point_name(&self, pt: Point) -> &str {
        &self.points[pt.index()].name
    }

    pub fn x(&self, pt: Point) -> f64 {
        self.points[pt.index()].x
    }

    pub fn y(&self, pt: Point) -> f64 {
        self.points[pt.index()].y
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn all_points(&self) -> impl Iterator<Item = Point> {
        (0..self.points.len() as u32).map(Point)
    }

    pub fn find_point(&self, name: &str) -> Result<Point> {
        self.points
            .iter()
            .position(|p| p.name == name)
            .map(|i| Point(i as u32))
            .ok_or_else(|| Error::UnknownPoint(name.to_string()))
    }

    /// Whether two points numerically coincide (coordinatewise within EPS).
    pub fn is_close(&self, a: Point, b: Point) -> bool {
        (self.x(a) - self.x(b)).abs() <= EPS && (self.y(a) - self.y(b)).abs() <= EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_order_is_insertion_order() {
        let mut prob = Problem::new();
        let a = prob.add_point("A", 0.0, 0.0).unwrap();
        let b = prob.add_point("B", 1.0, 0.0).unwrap();
        assert!(a < b);
        assert_eq!(prob.point_name(a), "A");
        assert_eq!(prob.find_point("B").unwrap(), b);
    }

    #[test]
    fn test_duplicate_point_rejected() {
        let mut prob = Problem::new();
        prob.add_point("A", 0.0, 0.0).unwrap();
        assert!(prob.add_point("A", 1.0, 1.0).is_err());
    }

    #[test]
    fn test_is_close() {
        let mut prob = Problem::new();
        let a = prob.add_point("A", 0.0, 0.0).unwrap();
        let b = prob.add_point("B", 1e-9, -1e-9).unwrap();
        let c = prob.add_point("C", 1.0, 0.0).unwrap();
        assert!(prob.is_close(a, b));
        assert!(!prob.is_close(a, c));
    }

    #[test]
    fn test_up_to() {
        let pts: Vec<Point> = Point(3).up_to().collect();
        assert_eq!(pts, vec![Point(0), Point(1), Point(2)]);
    }
}
