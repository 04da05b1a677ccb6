//! Step-driven evolution engine.
//!
//! [`EvolutionEngine`] owns the population and performs one generational
//! transition per [`step`](EvolutionEngine::step):
//! rank → survivors → crossover → mutation → evaluation → swap.
//!
//! The caller drives the loop. A typical driver initializes once, then
//! steps and renders the returned [`Stats`] until `is_complete` or
//! `is_stagnant`; [`EvolutionRunner`](super::EvolutionRunner) packages that
//! loop.

use super::charset::CharacterPool;
use super::config::{ConfigUpdate, EvolveConfig};
use super::operators::{point_mutation, single_point_crossover};
use super::selection::survivor_count;
use super::stats::{find_best, StagnationTracker, Stats};
use super::types::Individual;
use crate::error::{EvolveError, Result};
use crate::random::rng_from_seed;
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::Rng;

/// Lifecycle of an engine.
///
/// ```text
/// Uninitialized --initialize()--> Ready --step()--> Ready
///                                 Ready --step(), target reached--> Terminal
/// Ready | Terminal --reset()--> Uninitialized
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No population. `step()` and `stats()` fail.
    Uninitialized,
    /// A population exists and the target has not been reached.
    Ready,
    /// The best individual equals the target. `step()` no longer advances.
    Terminal,
}

/// Evolves a population of fixed-length sequences toward a target.
///
/// Generic over the random source; [`EvolutionEngine::new`] seeds a
/// [`StdRng`] from the configuration, [`EvolutionEngine::with_rng`] accepts
/// any [`Rng`].
///
/// # Usage
///
/// ```
/// use u_evolve::evolve::{EvolutionEngine, EvolveConfig};
///
/// let config = EvolveConfig::new("GATTACA")
///     .with_population_size(200)
///     .with_seed(7);
/// let mut engine = EvolutionEngine::new(config).unwrap();
/// engine.validate_target().unwrap();
/// engine.initialize();
///
/// let stats = engine.step().unwrap();
/// assert_eq!(stats.generation, 1);
/// assert_eq!(engine.population().len(), 200);
/// ```
#[derive(Debug)]
pub struct EvolutionEngine<R: Rng = StdRng> {
    config: EvolveConfig,
    pool: CharacterPool,
    target: Vec<char>,
    population: Vec<Individual>,
    generation: usize,
    tracker: StagnationTracker,
    state: EngineState,
    rng: R,
}

impl EvolutionEngine<StdRng> {
    /// Validates `config` and builds an engine seeded from `config.seed`
    /// (or fresh entropy when unset).
    pub fn new(config: EvolveConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> EvolutionEngine<R> {
    /// Validates `config` and builds an engine drawing from `rng`.
    ///
    /// # Errors
    /// [`EvolveError::Configuration`] if any field is out of range.
    pub fn with_rng(config: EvolveConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let pool = CharacterPool::from_set(config.character_set);
        let target = config.target.chars().collect();
        let tracker = StagnationTracker::new(config.stagnation_threshold);
        debug!(
            "engine configured: target_len={}, population={}, selection={}, charset={}",
            config.target_len(),
            config.population_size,
            config.selection,
            config.character_set
        );
        Ok(Self {
            config,
            pool,
            target,
            population: Vec::new(),
            generation: 0,
            tracker,
            state: EngineState::Uninitialized,
            rng,
        })
    }

    pub fn config(&self) -> &EvolveConfig {
        &self.config
    }

    /// Symbols available for generation and mutation.
    pub fn character_pool(&self) -> &CharacterPool {
        &self.pool
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current population, in the order produced by the last transition.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Best fitness of every generation so far; index `g` is generation `g`.
    pub fn best_fitness_history(&self) -> &[usize] {
        self.tracker.history()
    }

    /// Checks that the target can be built from the character pool.
    ///
    /// `initialize()` does not enforce this; a run with an unreachable
    /// target simply never completes.
    ///
    /// # Errors
    /// [`EvolveError::InvalidTarget`] listing the foreign symbols.
    pub fn validate_target(&self) -> Result<()> {
        self.pool.validate_target(&self.config.target)
    }

    /// Starts a fresh run: generation 0 with `population_size` random
    /// individuals.
    ///
    /// Callable at any time; an existing run is discarded. The engine is
    /// always `Ready` afterwards, even when generation 0 already contains
    /// the target; only `step()` moves it to `Terminal`.
    pub fn initialize(&mut self) {
        if let Err(EvolveError::InvalidTarget { symbols }) = self.validate_target() {
            warn!(
                "target contains symbols outside the {} pool: {:?}; run cannot complete",
                self.pool.set(),
                symbols
            );
        }

        let len = self.target.len();
        let pool = &self.pool;
        let target = &self.target;
        let rng = &mut self.rng;
        self.population = (0..self.config.population_size)
            .map(|_| Individual::evaluated(pool.random_sequence(len, rng), target))
            .collect();

        self.generation = 0;
        self.tracker = StagnationTracker::new(self.config.stagnation_threshold);
        self.state = EngineState::Ready;
        debug!(
            "initialized population of {} (target_len={len})",
            self.population.len()
        );
        let stats = self.finish_generation();
        if stats.is_complete {
            debug!("generation 0 already contains the target");
        }
    }

    /// Advances one generation and returns its statistics.
    ///
    /// In the `Terminal` state the run is left unchanged and the current
    /// statistics are returned.
    ///
    /// # Errors
    /// [`EvolveError::NotInitialized`] before `initialize()`.
    pub fn step(&mut self) -> Result<Stats> {
        match self.state {
            EngineState::Uninitialized => return Err(EvolveError::NotInitialized),
            EngineState::Terminal => {
                debug!("step() on a completed run; generation {} unchanged", self.generation);
                return self.stats();
            }
            EngineState::Ready => {}
        }

        let size = self.config.population_size;
        let strategy = self.config.selection;

        // The previous generation is only read from here on; the new one is
        // built separately and swapped in whole.
        let mut previous = std::mem::take(&mut self.population);
        previous.sort_by(|a, b| b.fitness().cmp(&a.fitness()));

        let survivors = &previous[..survivor_count(size, self.config.survival_rate)];
        let mut next: Vec<Individual> = Vec::with_capacity(size);
        if strategy.carries_survivors() {
            next.extend_from_slice(survivors);
        }

        while next.len() < size {
            let (p1, p2) = strategy.select_parents(survivors, &previous, &mut self.rng);
            let (a, b) = single_point_crossover(p1.dna(), p2.dna(), &mut self.rng);

            let a = self.mutate(a);
            next.push(Individual::evaluated(a, &self.target));

            if next.len() < size {
                let b = self.mutate(b);
                next.push(Individual::evaluated(b, &self.target));
            }
        }

        self.population = next;
        self.generation += 1;

        let stats = self.finish_generation();
        if stats.is_complete {
            self.state = EngineState::Terminal;
            info!(
                "target reached at generation {}: {:?}",
                stats.generation,
                stats.best.sequence()
            );
        }
        Ok(stats)
    }

    /// Statistics of the current generation. Pure read.
    ///
    /// # Errors
    /// [`EvolveError::NotInitialized`] before `initialize()`.
    pub fn stats(&self) -> Result<Stats> {
        if self.state == EngineState::Uninitialized {
            return Err(EvolveError::NotInitialized);
        }
        Ok(Stats::compute(
            self.generation,
            &self.population,
            self.target.len(),
            &self.tracker,
        ))
    }

    /// Discards the run. Configuration and character pool are kept.
    pub fn reset(&mut self) {
        self.population.clear();
        self.generation = 0;
        self.tracker = StagnationTracker::new(self.config.stagnation_threshold);
        self.state = EngineState::Uninitialized;
        debug!("engine reset");
    }

    /// Merges `update` into the live configuration.
    ///
    /// A character-set change recomputes the pool immediately; the existing
    /// population is not revalidated against it. A changed seed is stored
    /// but does not reseed the running generator.
    ///
    /// # Errors
    /// [`EvolveError::Configuration`] if the merged configuration is invalid,
    /// or if `target` or `population_size` changes while a run is active
    /// (call [`reset`](Self::reset) first). The configuration is unchanged
    /// on error.
    pub fn update_config(&mut self, update: &ConfigUpdate) -> Result<()> {
        if self.state != EngineState::Uninitialized && update.is_structural(&self.config) {
            return Err(EvolveError::Configuration(
                "target and population_size cannot change during a run; reset first".into(),
            ));
        }

        let merged = update.apply_to(&self.config);
        merged.validate()?;

        if merged.character_set != self.config.character_set {
            self.pool = CharacterPool::from_set(merged.character_set);
            debug!("character pool recomputed for {}", merged.character_set);
        }
        if merged.target != self.config.target {
            self.target = merged.target.chars().collect();
        }
        self.tracker.set_threshold(merged.stagnation_threshold);
        self.config = merged;
        Ok(())
    }

    fn mutate(&mut self, dna: Vec<char>) -> Vec<char> {
        if self.config.mutation_enabled {
            point_mutation(dna, &self.pool, self.config.mutation_rate, &mut self.rng)
        } else {
            dna
        }
    }

    /// Records the current generation exactly once.
    fn finish_generation(&mut self) -> Stats {
        let best_fitness = find_best(&self.population).fitness();
        let was_stagnant = self.tracker.is_stagnant();
        self.tracker.record(self.generation, best_fitness);

        let stats = Stats::compute(
            self.generation,
            &self.population,
            self.target.len(),
            &self.tracker,
        );
        trace!(
            "generation {}: best={} avg={:.3} diversity={:.1}%",
            stats.generation,
            stats.best.fitness(),
            stats.average_fitness,
            stats.diversity
        );

        if !stats.is_complete && stats.is_stagnant && !was_stagnant {
            info!(
                "run stagnant at generation {}: no improvement for {} generations",
                stats.generation, stats.generations_since_improvement
            );
        }
        stats
    }
}
