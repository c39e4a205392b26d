//! Incremental row-echelon store with partial back-substitution

use super::{ArVar, Equation, LinearCombination, RhsValue};
use crate::error::{Error, Result};
use crate::geometry::{Dist, SinOrDist, SquaredDist};
use crate::numbers::{rat_to_nnrat, NNRat, Rat};
use crate::solver::ProofId;
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

/// Index of an original equation row inside its owning system.
pub type RowId = usize;

/// An echelon row: the concrete equation it stands for, together with the
/// linear combination of original rows that produced it.
#[derive(Debug, Clone)]
pub struct EchelonRow<V: ArVar> {
    combo: LinearCombination<RowId>,
    eq: Equation<V>,
}

impl<V: ArVar> EchelonRow<V> {
    pub fn combo(&self) -> &LinearCombination<RowId> {
        &self.combo
    }

    pub fn eq(&self) -> &Equation<V> {
        &self.eq
    }

    fn sub_scaled(&mut self, coeff: &Rat, other: &EchelonRow<V>) {
        let neg = -*coeff;
        self.combo.add_scaled(&neg, &other.combo);
        self.eq.sub_scaled(coeff, &other.eq);
    }

    fn scale(&mut self, coeff: &Rat) {
        self.combo *= coeff;
        self.eq.scale(coeff);
    }
}

/// One AR engine: an append-only list of accepted equations plus their
/// reduced row-echelon form.
///
/// Invariants: every echelon row's leading variable is its key and has
/// coefficient 1; no variable is a pivot of two rows; whenever a row has a
/// second term, that term's variable has no pivot (the `pivot_by_next`
/// cache records which rows are waiting on it).
#[derive(Debug)]
pub struct LinearSystem<V: ArVar> {
    rows: Vec<(Equation<V>, ProofId)>,
    echelon: FxHashMap<V, EchelonRow<V>>,
    pivot_by_next: BTreeMap<V, BTreeSet<V>>,
    newly_solved: BTreeSet<V>,
}

impl<V: ArVar> LinearSystem<V> {
    pub fn new() -> Self {
        LinearSystem {
            rows: Vec::new(),
            echelon: FxHashMap::default(),
            pivot_by_next: BTreeMap::new(),
            newly_solved: BTreeSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The original equation and provenance proof at a row index.
    pub fn row(&self, i: RowId) -> &(Equation<V>, ProofId) {
        &self.rows[i]
    }

    pub fn echelon(&self) -> &FxHashMap<V, EchelonRow<V>> {
        &self.echelon
    }

    pub fn pivot_by_next(&self) -> &BTreeMap<V, BTreeSet<V>> {
        &self.pivot_by_next
    }

    /// Drains the set of variables solved to a constant since the last call.
    pub fn take_newly_solved(&mut self) -> BTreeSet<V> {
        std::mem::take(&mut self.newly_solved)
    }

    /// Inserts an equation that has already been reduced against this
    /// system (see [`super::ReducedEquation`]).
    ///
    /// Solved equations are redundant and skipped; an empty remainder with
    /// a nonzero right-hand side is a contradiction.
    pub fn add_equation(&mut self, red: &super::ReducedEquation<V>, pf: ProofId) -> Result<()> {
        if red.is_solved(self) {
            return Ok(());
        }
        if red.remainder().lhs().is_empty() {
            return Err(Error::Contradiction);
        }

        let n = self.rows.len();
        self.rows.push((red.original().clone(), pf));

        let mut combo = LinearCombination::single(n);
        combo -= red.combo();
        let mut row = EchelonRow {
            combo,
            eq: red.remainder().clone(),
        };

        let Some((v, c)) = row.eq.lhs().leading() else {
            return Err(Error::Internal("empty remainder reached insertion".into()));
        };
        if self.echelon.contains_key(&v) {
            return Err(Error::Internal(
                "inserting a non-reduced equation into the echelon".into(),
            ));
        }
        row.scale(&(Rat::from_integer(1) / c));
        self.reduce_next(&mut row);
        self.echelon.insert(v, row);

        // Partial back-substitution: rows waiting on `v` can now eliminate
        // it.
        if let Some(pivots) = self.pivot_by_next.remove(&v) {
            for p in pivots {
                let Some(mut r) = self.echelon.remove(&p) else {
                    return Err(Error::Internal(
                        "pivot_by_next names a missing echelon row".into(),
                    ));
                };
                self.reduce_next(&mut r);
                self.echelon.insert(p, r);
            }
        }
        Ok(())
    }

    /// Eliminates the row's second term while a pivot for it exists, then
    /// registers the row in the waiting cache (or the solved set if it
    /// collapsed to a single term).
    fn reduce_next(&mut self, row: &mut EchelonRow<V>) {
        loop {
            let Some((head, _)) = row.eq.lhs().leading() else {
                return;
            };
            match row.eq.lhs().second() {
                None => {
                    self.newly_solved.insert(head);
                    return;
                }
                Some((w, wc)) => {
                    if let Some(pivot_row) = self.echelon.get(&w) {
                        row.sub_scaled(&wc, pivot_row);
                    } else {
                        self.pivot_by_next.entry(w).or_default().insert(head);
                        return;
                    }
                }
            }
        }
    }
}

/// A squared-distance ratio candidate read off the echelon form; it is
/// only *suspected* (the generator looks at the first two row terms) and
/// must be numerically verified by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuspectedRatio {
    pub left: SquaredDist,
    pub right: SquaredDist,
    pub ratio: NNRat,
}

impl LinearSystem<Dist> {
    /// Candidate `|i|² : |j|²` ratios among pivots sharing a second term.
    pub fn generate_suspected_ratio_squared_dist(&self) -> Vec<SuspectedRatio> {
        let mut res = Vec::new();
        for (next_var, pivots) in &self.pivot_by_next {
            let pivots: Vec<Dist> = pivots.iter().copied().collect();
            for (k, &i_var) in pivots.iter().enumerate() {
                let Some(row_i) = self.echelon.get(&i_var) else {
                    continue;
                };
                let Some((_, c_i)) = row_i.eq().lhs().second() else {
                    continue;
                };
                if row_i.eq().lhs().len() == 2 && row_i.eq().rhs().is_zero() {
                    // i = -c·next with zero constant, so |i|²:|next|² = c².
                    res.push(SuspectedRatio {
                        left: i_var.squared(),
                        right: next_var.squared(),
                        ratio: rat_to_nnrat(&(c_i * c_i)),
                    });
                }
                for &j_var in &pivots[k + 1..] {
                    let Some(row_j) = self.echelon.get(&j_var) else {
                        continue;
                    };
                    let Some((_, c_j)) = row_j.eq().lhs().second() else {
                        continue;
                    };
                    res.push(SuspectedRatio {
                        left: i_var.squared(),
                        right: j_var.squared(),
                        ratio: rat_to_nnrat(&((c_i * c_i) / (c_j * c_j))),
                    });
                }
            }
        }
        res
    }
}

impl LinearSystem<SquaredDist> {
    pub fn generate_suspected_ratio_squared_dist(&self) -> Vec<SuspectedRatio> {
        let mut res = Vec::new();
        for (next_var, pivots) in &self.pivot_by_next {
            let pivots: Vec<SquaredDist> = pivots.iter().copied().collect();
            for (k, &i_var) in pivots.iter().enumerate() {
                let Some(row_i) = self.echelon.get(&i_var) else {
                    continue;
                };
                let Some((_, c_i)) = row_i.eq().lhs().second() else {
                    continue;
                };
                if row_i.eq().lhs().len() == 2 && row_i.eq().rhs().is_zero() {
                    res.push(SuspectedRatio {
                        left: i_var,
                        right: *next_var,
                        ratio: rat_to_nnrat(&(-c_i)),
                    });
                }
                for &j_var in &pivots[k + 1..] {
                    let Some(row_j) = self.echelon.get(&j_var) else {
                        continue;
                    };
                    let Some((_, c_j)) = row_j.eq().lhs().second() else {
                        continue;
                    };
                    let c = c_i / c_j;
                    if c < Rat::from_integer(0) {
                        continue;
                    }
                    res.push(SuspectedRatio {
                        left: i_var,
                        right: j_var,
                        ratio: rat_to_nnrat(&c),
                    });
                }
            }
        }
        res
    }
}

impl LinearSystem<SinOrDist> {
    pub fn generate_suspected_ratio_squared_dist(&self) -> Vec<SuspectedRatio> {
        let mut res = Vec::new();
        for pivots in self.pivot_by_next.values() {
            let pivots: Vec<SinOrDist> = pivots.iter().copied().collect();
            for (k, &i_var) in pivots.iter().enumerate() {
                // `sin α = sin β` and `sin α = 3|bc|` yield no distance
                // ratio.
                let Some(i_sq) = i_var.squared_dist() else {
                    continue;
                };
                let Some(row_i) = self.echelon.get(&i_var) else {
                    continue;
                };
                let Some((next_var, c_i)) = row_i.eq().lhs().second() else {
                    continue;
                };
                if row_i.eq().lhs().len() == 2 && c_i == Rat::from_integer(-1) {
                    if let Some(next_sq) = next_var.squared_dist() {
                        res.push(SuspectedRatio {
                            left: i_sq,
                            right: next_sq,
                            ratio: NNRat::from_integer(1),
                        });
                    }
                }
                for &j_var in &pivots[k + 1..] {
                    // Sines sort before distances, so `j > i` is a distance.
                    let Some(j_sq) = j_var.squared_dist() else {
                        continue;
                    };
                    let Some(row_j) = self.echelon.get(&j_var) else {
                        continue;
                    };
                    let Some((_, c_j)) = row_j.eq().lhs().second() else {
                        continue;
                    };
                    if c_i == c_j {
                        res.push(SuspectedRatio {
                            left: i_sq,
                            right: j_sq,
                            ratio: NNRat::from_integer(1),
                        });
                    }
                }
            }
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ar::ReducedEquation;
    use crate::geometry::Point;

    fn d(a: u32, b: u32) -> Dist {
        Dist::new(Point(a), Point(b))
    }

    fn eq_of(terms: &[(Dist, (i64, i64))], rhs: (i64, i64)) -> Equation<Dist> {
        let mut lhs = LinearCombination::new();
        for &(v, (n, m)) in terms {
            lhs += &LinearCombination::with_coeff(v, Rat::new(n, m));
        }
        Equation::new(lhs, Rat::new(rhs.0, rhs.1))
    }

    fn add(sys: &mut LinearSystem<Dist>, eq: Equation<Dist>) -> Result<()> {
        let mut red = ReducedEquation::new(eq);
        red.reduce(sys);
        sys.add_equation(&red, ProofId(0))
    }

    #[test]
    fn test_pivot_uniqueness_and_unit_leading_coeff() {
        let mut sys = LinearSystem::new();
        add(&mut sys, eq_of(&[(d(0, 1), (2, 1)), (d(1, 2), (1, 1))], (1, 1))).unwrap();
        add(&mut sys, eq_of(&[(d(0, 1), (1, 1)), (d(2, 3), (1, 1))], (0, 1))).unwrap();
        let mut pivots = Vec::new();
        for (v, row) in sys.echelon() {
            let (lead, c) = row.eq().lhs().leading().unwrap();
            assert_eq!(lead, *v);
            assert_eq!(c, Rat::from_integer(1));
            pivots.push(*v);
        }
        pivots.sort();
        pivots.dedup();
        assert_eq!(pivots.len(), sys.echelon().len());
    }

    #[test]
    fn test_solved_variable_detected() {
        let mut sys = LinearSystem::new();
        // x + y = 3, x - y = 1 ⇒ both solved after back-substitution.
        add(&mut sys, eq_of(&[(d(0, 1), (1, 1)), (d(1, 2), (1, 1))], (3, 1))).unwrap();
        add(&mut sys, eq_of(&[(d(0, 1), (1, 1)), (d(1, 2), (-1, 1))], (1, 1))).unwrap();
        let solved = sys.take_newly_solved();
        assert!(solved.contains(&d(0, 1)));
        assert!(solved.contains(&d(1, 2)));
        assert_eq!(*sys.echelon()[&d(0, 1)].eq().rhs(), Rat::from_integer(2));
        assert_eq!(*sys.echelon()[&d(1, 2)].eq().rhs(), Rat::from_integer(1));
    }

    #[test]
    fn test_duplicate_equation_skipped() {
        let mut sys = LinearSystem::new();
        let eq = eq_of(&[(d(0, 1), (1, 1)), (d(1, 2), (1, 1))], (3, 1));
        add(&mut sys, eq.clone()).unwrap();
        add(&mut sys, eq).unwrap();
        assert_eq!(sys.len(), 1);
    }

    #[test]
    fn test_contradiction_detected() {
        let mut sys = LinearSystem::new();
        add(&mut sys, eq_of(&[(d(0, 1), (1, 1))], (1, 1))).unwrap();
        let err = add(&mut sys, eq_of(&[(d(0, 1), (1, 1))], (2, 1)));
        assert!(matches!(err, Err(Error::Contradiction)));
    }

    #[test]
    fn test_suspected_ratio_from_proportional_rows() {
        let mut sys = LinearSystem::new();
        // |AB| - 2|CD| = 0 and |BC| - 3|CD| = 0 share the second variable
        // |CD|, so |AB|²:|BC|² = 4/9 is suspected.
        add(&mut sys, eq_of(&[(d(0, 1), (1, 1)), (d(2, 3), (-2, 1))], (0, 1))).unwrap();
        add(&mut sys, eq_of(&[(d(1, 2), (1, 1)), (d(2, 3), (-3, 1))], (0, 1))).unwrap();
        let sus = sys.generate_suspected_ratio_squared_dist();
        assert!(sus.iter().any(|s| s.left == d(0, 1).squared()
            && s.right == d(2, 3).squared()
            && s.ratio == NNRat::from_integer(4)));
        assert!(sus.iter().any(|s| s.left == d(0, 1).squared()
            && s.right == d(1, 2).squared()
            && s.ratio == NNRat::new(4, 9)));
    }
}
