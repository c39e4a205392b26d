//! Solver configuration

/// Switches for the AR engines and the theorem repertoire.
///
/// The sine engine's theorem emission is off by default; the underlying
/// ratio table is still maintained (equal-ratio facts live there).
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Additive length chasing.
    pub ar_dist_enabled: bool,
    /// Additive squared-length chasing.
    pub ar_squared_enabled: bool,
    /// Sine-based theorems (law of sines, known sine values).
    pub ar_sin_enabled: bool,
    /// Whether theorems may carry raw equations as hypotheses or
    /// conclusions.
    pub eqn_statements_enabled: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            ar_dist_enabled: true,
            ar_squared_enabled: true,
            ar_sin_enabled: false,
            eqn_statements_enabled: true,
        }
    }
}
