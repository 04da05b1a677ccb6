//! Target-sequence evolution.
//!
//! A population of fixed-length symbol sequences is evolved toward a target
//! string. Each generation ranks the population by positional match count,
//! keeps the top survivors, and refills the population through single-point
//! crossover and per-symbol mutation.
//!
//! # Key Types
//!
//! - [`EvolveConfig`]: Run parameters (target, population, survival rate,
//!   mutation, character set, selection strategy)
//! - [`EvolutionEngine`]: Step-driven state machine owning the population
//! - [`Stats`]: Per-generation snapshot (best, average, diversity, stagnation)
//! - [`EvolutionRunner`]: Optional driving loop with limits and cancellation
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and point mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Dawkins (1986), *The Blind Watchmaker*, ch. 3 ("weasel" program)

mod charset;
mod config;
mod engine;
pub mod operators;
mod runner;
mod selection;
mod stats;
mod types;

pub use charset::{CharacterPool, CharacterSet};
pub use config::{ConfigUpdate, EvolveConfig, DEFAULT_MUTATION_RATE, MAX_POPULATION_SIZE};
pub use engine::{EngineState, EvolutionEngine};
pub use runner::{EvolutionRunner, RunLimits, RunSummary};
pub use selection::{survivor_count, SelectionStrategy};
pub use stats::{
    average_fitness, diversity, find_best, StagnationTracker, Stats, DEFAULT_STAGNATION_THRESHOLD,
};
pub use types::{fitness, Individual};
