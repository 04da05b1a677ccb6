//! Driving loop for an [`EvolutionEngine`].
//!
//! The engine itself only steps on request. [`EvolutionRunner`] is the loop
//! most callers would otherwise write: initialize, step until the target is
//! reached, the run stagnates, a generation limit hits, or a cancellation
//! flag is raised, handing every snapshot to an observer on the way.

use super::engine::{EngineState, EvolutionEngine};
use super::stats::Stats;
use crate::error::Result;
use log::debug;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Termination limits for [`EvolutionRunner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLimits {
    /// Maximum number of `step()` calls.
    pub max_generations: usize,

    /// Stop as soon as the run reports `is_stagnant`.
    pub stop_on_stagnation: bool,
}

impl Default for RunLimits {
    fn default() -> Self {
        Self {
            max_generations: 10_000,
            stop_on_stagnation: false,
        }
    }
}

impl RunLimits {
    /// Sets the generation limit.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Enables or disables stopping on stagnation.
    pub fn with_stop_on_stagnation(mut self, stop: bool) -> Self {
        self.stop_on_stagnation = stop;
        self
    }
}

/// Outcome of a driven run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Statistics of the last generation reached.
    pub final_stats: Stats,

    /// Generations executed by this call.
    pub generations: usize,

    /// The target was reached.
    pub completed: bool,

    /// The run stopped because it stagnated.
    pub stagnated: bool,

    /// The run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness per generation, generation 0 first.
    pub fitness_history: Vec<usize>,
}

/// Steps an engine to a termination condition.
///
/// # Usage
///
/// ```
/// use u_evolve::evolve::{EvolutionEngine, EvolutionRunner, EvolveConfig, RunLimits};
///
/// let config = EvolveConfig::new("Evolve")
///     .with_population_size(200)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// let mut engine = EvolutionEngine::new(config).unwrap();
/// let summary = EvolutionRunner::run(&mut engine, &RunLimits::default()).unwrap();
/// assert!(summary.completed);
/// assert_eq!(summary.final_stats.best.sequence(), "Evolve");
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs until completion or `limits`.
    pub fn run<R: Rng>(engine: &mut EvolutionEngine<R>, limits: &RunLimits) -> Result<RunSummary> {
        Self::run_with_cancel(engine, limits, None, |_| {})
    }

    /// Runs with an optional cancellation flag and a per-generation observer.
    ///
    /// The engine is initialized first if it is not already. `observer`
    /// sees the starting snapshot and then every stepped generation. When
    /// `cancel` is raised the loop stops before the next step.
    pub fn run_with_cancel<R, F>(
        engine: &mut EvolutionEngine<R>,
        limits: &RunLimits,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: F,
    ) -> Result<RunSummary>
    where
        R: Rng,
        F: FnMut(&Stats),
    {
        if engine.state() == EngineState::Uninitialized {
            engine.initialize();
        }

        let mut stats = engine.stats()?;
        observer(&stats);

        let mut generations = 0usize;
        let mut cancelled = false;
        let mut stagnated = limits.stop_on_stagnation && !stats.is_complete && stats.is_stagnant;

        while !stagnated && !stats.is_complete && generations < limits.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            stats = engine.step()?;
            generations += 1;
            observer(&stats);

            if limits.stop_on_stagnation && stats.is_stagnant {
                stagnated = true;
                break;
            }
        }

        debug!(
            "run finished after {generations} generations: complete={}, stagnated={stagnated}, cancelled={cancelled}",
            stats.is_complete
        );

        Ok(RunSummary {
            completed: stats.is_complete,
            final_stats: stats,
            generations,
            stagnated,
            cancelled,
            fitness_history: engine.best_fitness_history().to_vec(),
        })
    }
}
