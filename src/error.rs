//! Solver error types.

use thiserror::Error;

/// Errors surfaced by the solver.
///
/// Configuration problems are reported before any search work happens, so a
/// failed run never leaves partial output behind. Invariant violations are
/// internal defensive checks and are not reachable from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabuError {
    /// Invalid configuration or job set.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An internal invariant no longer holds.
    #[error("internal invariant violated: {0}")]
    Invariant(&'static str),
}
