//! Error types for the evolution engine.

use thiserror::Error;

/// Errors surfaced by [`EvolutionEngine`](crate::evolve::EvolutionEngine)
/// and its configuration.
///
/// None of these are transient: the engine performs no I/O, so every error
/// points at invalid input or a call made in the wrong state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvolveError {
    /// A configuration field is out of range. Fatal to construction.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The target contains symbols the character pool cannot produce.
    #[error("Invalid target: symbols {symbols:?} are not in the character pool")]
    InvalidTarget { symbols: Vec<char> },

    /// `step()` or `stats()` was called before `initialize()`.
    #[error("Engine not initialized: call initialize() first")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, EvolveError>;
