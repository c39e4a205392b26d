//! Error types for the solver library

use thiserror::Error;

/// Errors surfaced by parsing, problem setup, and the solver itself.
#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("point named `{0}` not found in the problem")]
    UnknownPoint(String),

    #[error("point named `{0}` already exists in the problem")]
    DuplicatePoint(String),

    #[error("numerical-only statement failed its check: {0}")]
    NumericalCheck(String),

    #[error("goal failed numerical check: {0}")]
    GoalCheck(String),

    #[error("proved contradiction in AR")]
    Contradiction,

    #[error("found zero distance: {0}")]
    ZeroDistance(String),

    #[error("internal invariant violation: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
