//! Per-statement proof records

use crate::geometry::Point;
use crate::numbers::Rat;
use crate::statement::Statement;
use std::collections::BTreeSet;

/// How (and whether) a statement has been established.
///
/// Once a proof leaves `NotProved` it never transitions again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofState {
    NotProved,
    ByRefl,
    ByAssumption,
    Numerical,
    ArDist,
    ArSquaredDist,
    ArRatio,
    ArAngle,
    ByTheorem(usize),
}

impl ProofState {
    pub fn describe(&self) -> &'static str {
        match self {
            ProofState::NotProved => "not proved",
            ProofState::ByRefl => "by reflexivity",
            ProofState::ByAssumption => "by assumption",
            ProofState::Numerical => "verified numerically",
            ProofState::ArDist => "by length chasing",
            ProofState::ArSquaredDist => "by squared length chasing",
            ProofState::ArRatio => "by ratio chasing",
            ProofState::ArAngle => "by angle chasing",
            ProofState::ByTheorem(_) => "by theorem",
        }
    }
}

/// The proof record of one interned statement.
///
/// The four `*_eqn` slots point at this statement's reduction scratchpad
/// in the corresponding AR table (shared between statements whose
/// normalized equations coincide), together with the rational scale that
/// normalization applied.
#[derive(Debug)]
pub struct StatementProof {
    statement: Statement,
    state: ProofState,
    pub(crate) dist_eqn: Option<(Rat, usize)>,
    pub(crate) squared_eqn: Option<(Rat, usize)>,
    pub(crate) ratio_eqn: Option<(Rat, usize)>,
    pub(crate) angle_eqn: Option<(Rat, usize)>,
    pub(crate) theorems_that_imply: Vec<usize>,
    pub(crate) point_deps: BTreeSet<Point>,
    pub(crate) needed_for_goal: bool,
}

impl StatementProof {
    pub(crate) fn new(
        statement: Statement,
        dist_eqn: Option<(Rat, usize)>,
        squared_eqn: Option<(Rat, usize)>,
        ratio_eqn: Option<(Rat, usize)>,
        angle_eqn: Option<(Rat, usize)>,
    ) -> Self {
        StatementProof {
            statement,
            state: ProofState::NotProved,
            dist_eqn,
            squared_eqn,
            ratio_eqn,
            angle_eqn,
            theorems_that_imply: Vec::new(),
            point_deps: BTreeSet::new(),
            needed_for_goal: false,
        }
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn state(&self) -> ProofState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: ProofState) {
        self.state = state;
    }

    pub fn is_proved(&self) -> bool {
        self.state != ProofState::NotProved
    }

    pub fn point_dependencies(&self) -> &BTreeSet<Point> {
        &self.point_deps
    }

    pub fn needed_for_goal(&self) -> bool {
        self.needed_for_goal
    }

    /// Theorem applications that list this statement among their
    /// conclusions.
    pub fn theorems_that_imply(&self) -> &[usize] {
        &self.theorems_that_imply
    }

    /// Conservative auxiliary-point heuristic: some dependency uses a
    /// point beyond the statement's own points.
    pub fn needs_aux(&self) -> bool {
        let Some(max_pt) = self.statement.points().into_iter().max() else {
            return false;
        };
        self.point_deps.iter().any(|pt| *pt > max_pt)
    }
}
