//! Per-generation statistics and stagnation bookkeeping.

use super::types::Individual;
use std::collections::HashSet;

/// Generations without improvement after which a run counts as stagnant.
pub const DEFAULT_STAGNATION_THRESHOLD: usize = 50;

/// Snapshot of a population at one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Stats {
    /// Generation number; 0 is the random initial population.
    pub generation: usize,

    /// Highest-fitness individual. Ties go to the earliest in population
    /// order.
    pub best: Individual,

    /// Arithmetic mean fitness over the population.
    pub average_fitness: f64,

    /// Distinct sequences as a percentage of population size, in (0, 100].
    pub diversity: f64,

    /// The best individual equals the target.
    pub is_complete: bool,

    /// `generations_since_improvement` has reached the stagnation threshold.
    pub is_stagnant: bool,

    pub generations_since_improvement: usize,
}

impl Stats {
    /// Computes a snapshot of `population`.
    ///
    /// Pure: stagnation fields are read from `tracker`, never updated here.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub(crate) fn compute(
        generation: usize,
        population: &[Individual],
        target_len: usize,
        tracker: &StagnationTracker,
    ) -> Self {
        let best = find_best(population).clone();
        Self {
            generation,
            average_fitness: average_fitness(population),
            diversity: diversity(population),
            is_complete: best.is_match(target_len),
            is_stagnant: tracker.is_stagnant(),
            generations_since_improvement: tracker.generations_since_improvement(),
            best,
        }
    }
}

/// First individual with maximal fitness.
///
/// # Panics
/// Panics if `population` is empty.
pub fn find_best(population: &[Individual]) -> &Individual {
    let mut iter = population.iter();
    let mut best = iter.next().expect("population must not be empty");
    for ind in iter {
        if ind.fitness() > best.fitness() {
            best = ind;
        }
    }
    best
}

/// Mean fitness; `0.0` for an empty population.
pub fn average_fitness(population: &[Individual]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let total: usize = population.iter().map(Individual::fitness).sum();
    total as f64 / population.len() as f64
}

/// Percentage of distinct sequences; `0.0` for an empty population.
pub fn diversity(population: &[Individual]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&[char]> = population.iter().map(Individual::dna).collect();
    distinct.len() as f64 / population.len() as f64 * 100.0
}

/// Best-fitness history and the consecutive-generations-without-improvement
/// counter.
///
/// Updates are keyed to the generation number: recording the same
/// generation twice is a no-op, so reading statistics can never advance
/// the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagnationTracker {
    history: Vec<usize>,
    generations_since_improvement: usize,
    last_recorded: Option<usize>,
    threshold: usize,
}

impl StagnationTracker {
    pub fn new(threshold: usize) -> Self {
        Self {
            history: Vec::new(),
            generations_since_improvement: 0,
            last_recorded: None,
            threshold,
        }
    }

    /// Records `best_fitness` for `generation`.
    ///
    /// Returns `false` (and changes nothing) when this generation was
    /// already recorded.
    pub fn record(&mut self, generation: usize, best_fitness: usize) -> bool {
        if self.last_recorded == Some(generation) {
            return false;
        }
        if let Some(&previous) = self.history.last() {
            if best_fitness > previous {
                self.generations_since_improvement = 0;
            } else {
                self.generations_since_improvement += 1;
            }
        }
        self.history.push(best_fitness);
        self.last_recorded = Some(generation);
        true
    }

    /// Best fitness per recorded generation, oldest first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn generations_since_improvement(&self) -> usize {
        self.generations_since_improvement
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub(crate) fn set_threshold(&mut self, threshold: usize) {
        self.threshold = threshold;
    }

    pub fn is_stagnant(&self) -> bool {
        self.generations_since_improvement >= self.threshold
    }
}

impl Default for StagnationTracker {
    fn default() -> Self {
        Self::new(DEFAULT_STAGNATION_THRESHOLD)
    }
}
