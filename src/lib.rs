//! Target-sequence evolution engine.
//!
//! Evolves fixed-length symbol sequences toward a target string with a
//! generational genetic algorithm:
//!
//! - **Selection**: elitism, semi-elitism, or unbiased random parenting over
//!   a ranked population with a configurable survival rate.
//! - **Crossover**: single-point, cut strictly inside the sequence.
//! - **Mutation**: per-position resampling from a configurable character
//!   pool.
//! - **Statistics**: best individual, average fitness, diversity, and
//!   stagnation tracking per generation.
//!
//! # Architecture
//!
//! The engine is synchronous and caller-driven: every `step()` runs one full
//! generation to completion and returns its statistics. Rendering, pacing,
//! and cancellation belong to the caller. Randomness is injected, so a fixed
//! seed reproduces a run exactly.

pub mod error;
pub mod evolve;
pub mod random;

pub use error::{EvolveError, Result};
