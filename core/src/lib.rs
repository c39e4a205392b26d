//! geoddar core
//!
//! Forward-chaining DD+AR solver for plane geometry: a deductive database
//! of matched theorem instances interleaved with four algebraic reasoning
//! engines (lengths, squared lengths, multiplicative ratios, slope
//! angles).

pub mod ar;       // Linear algebra over the four scalar domains
pub mod config;
pub mod error;
pub mod geometry; // Points, problems, variable atoms
pub mod matcher;  // Numerical theorem matching
pub mod numbers;  // Exact rationals and the RHS carriers
pub mod parser;   // Line-oriented problem input
pub mod solver;   // Proof state and the saturation driver
pub mod statement; // The predicate catalog
pub mod theorem;  // Theorem factories

pub use config::SolverConfig;
pub use error::{Error, Result};
pub use geometry::{Point, Problem};
pub use matcher::TheoremMatcher;
pub use parser::parse_problem;
pub use solver::{DdarSolver, ProofId, ProofState};
pub use statement::Statement;
pub use theorem::Theorem;
