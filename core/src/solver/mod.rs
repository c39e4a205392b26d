//! The proof-state manager: DD+AR saturation
//!
//! Proof records live in an arena owned by [`DdarSolver`]; every
//! cross-reference is a [`ProofId`] index, so the arena can grow without
//! invalidating anything.

mod application;
mod ddar;
mod proof;

pub use application::{ApplicationState, TheoremApplication};
pub use ddar::DdarSolver;
pub use proof::{ProofState, StatementProof};

use serde::{Deserialize, Serialize};

/// Index of a statement proof in the solver's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProofId(pub u32);

impl ProofId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}
