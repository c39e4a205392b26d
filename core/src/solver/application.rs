//! Per-instance theorem bookkeeping

use super::ProofId;
use crate::geometry::Point;
use crate::theorem::Theorem;

/// Lifecycle of one matched theorem instance.
///
/// `Discarded` means every conclusion was established by other means
/// before the hypotheses closed, so the instance is no longer needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationState {
    Pending,
    Proved,
    Discarded,
}

impl ApplicationState {
    pub fn describe(&self) -> &'static str {
        match self {
            ApplicationState::Pending => "pending",
            ApplicationState::Proved => "proved",
            ApplicationState::Discarded => "discarded",
        }
    }
}

#[derive(Debug)]
pub struct TheoremApplication {
    theorem: Theorem,
    hypotheses: Vec<ProofId>,
    conclusions: Vec<ProofId>,
    state: ApplicationState,
    max_point: Point,
}

impl TheoremApplication {
    pub(crate) fn new(
        theorem: Theorem,
        hypotheses: Vec<ProofId>,
        conclusions: Vec<ProofId>,
    ) -> Self {
        let max_point = theorem.max_point();
        TheoremApplication {
            theorem,
            hypotheses,
            conclusions,
            state: ApplicationState::Pending,
            max_point,
        }
    }

    pub fn theorem(&self) -> &Theorem {
        &self.theorem
    }

    pub fn hypotheses(&self) -> &[ProofId] {
        &self.hypotheses
    }

    pub fn conclusions(&self) -> &[ProofId] {
        &self.conclusions
    }

    pub fn state(&self) -> ApplicationState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: ApplicationState) {
        self.state = state;
    }

    pub fn max_point(&self) -> Point {
        self.max_point
    }
}
