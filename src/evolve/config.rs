//! Engine configuration.
//!
//! [`EvolveConfig`] holds every parameter of a run. All fields are explicit;
//! defaults are applied once, by [`EvolveConfig::new`], and never filled in
//! later. [`ConfigUpdate`] carries a partial change for a live engine.

use super::charset::CharacterSet;
use super::selection::SelectionStrategy;
use super::stats::DEFAULT_STAGNATION_THRESHOLD;
use crate::error::{EvolveError, Result};

/// Largest accepted population.
pub const MAX_POPULATION_SIZE: usize = 10_000;

/// Mutation probability used when none is configured.
pub const DEFAULT_MUTATION_RATE: f64 = 0.01;

/// Configuration for an evolution run.
///
/// # Defaults
///
/// ```
/// use u_evolve::evolve::{CharacterSet, EvolveConfig, SelectionStrategy};
///
/// let config = EvolveConfig::new("Hello World");
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.survival_rate, 50);
/// assert!((config.mutation_rate - 0.01).abs() < 1e-12);
/// assert_eq!(config.character_set, CharacterSet::LettersSpace);
/// assert_eq!(config.selection, SelectionStrategy::Elitism);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::evolve::{CharacterSet, EvolveConfig, SelectionStrategy};
///
/// let config = EvolveConfig::new("to be or not to be")
///     .with_population_size(500)
///     .with_survival_rate(20)
///     .with_mutation_rate(0.02)
///     .with_selection(SelectionStrategy::SemiElitism)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveConfig {
    /// Sequence the population evolves toward. Must not be empty.
    pub target: String,

    /// Individuals per generation, constant for the whole run.
    pub population_size: usize,

    /// Percentage (1–100) of the ranked population kept as survivors.
    ///
    /// At least two individuals always survive.
    pub survival_rate: u32,

    /// Whether children are mutated after crossover.
    pub mutation_enabled: bool,

    /// Per-position replacement probability (0.0–1.0).
    ///
    /// Ignored when `mutation_enabled` is false.
    pub mutation_rate: f64,

    /// Alphabet for random generation and mutation.
    pub character_set: CharacterSet,

    /// Survivor carry-over and parent-source rule.
    pub selection: SelectionStrategy,

    /// Generations without improvement before a run is reported stagnant.
    pub stagnation_threshold: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl EvolveConfig {
    /// Creates a configuration for `target` with every other field at its
    /// default.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            population_size: 100,
            survival_rate: 50,
            mutation_enabled: true,
            mutation_rate: DEFAULT_MUTATION_RATE,
            character_set: CharacterSet::default(),
            selection: SelectionStrategy::default(),
            stagnation_threshold: DEFAULT_STAGNATION_THRESHOLD,
            seed: None,
        }
    }

    /// Sets the target sequence.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the survival rate in percent, clamped to 1–100.
    pub fn with_survival_rate(mut self, percent: u32) -> Self {
        self.survival_rate = percent.clamp(1, 100);
        self
    }

    /// Enables or disables mutation.
    pub fn with_mutation_enabled(mut self, enabled: bool) -> Self {
        self.mutation_enabled = enabled;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the character set.
    pub fn with_character_set(mut self, set: CharacterSet) -> Self {
        self.character_set = set;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: SelectionStrategy) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the stagnation threshold.
    pub fn with_stagnation_threshold(mut self, generations: usize) -> Self {
        self.stagnation_threshold = generations;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Length of the target in symbols.
    pub fn target_len(&self) -> usize {
        self.target.chars().count()
    }

    /// Validates the configuration.
    ///
    /// Does not check the target against the character pool; see
    /// [`CharacterPool::validate_target`](super::CharacterPool::validate_target).
    pub fn validate(&self) -> Result<()> {
        if self.target.is_empty() {
            return Err(invalid("target must not be empty"));
        }
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.population_size > MAX_POPULATION_SIZE {
            return Err(EvolveError::Configuration(format!(
                "population_size must be at most {MAX_POPULATION_SIZE}"
            )));
        }
        if !(1..=100).contains(&self.survival_rate) {
            return Err(invalid("survival_rate must be between 1 and 100"));
        }
        if !self.mutation_rate.is_finite() || !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must be between 0 and 1"));
        }
        if self.stagnation_threshold == 0 {
            return Err(invalid("stagnation_threshold must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> EvolveError {
    EvolveError::Configuration(msg.into())
}

/// Partial configuration change; `None` fields are left untouched.
///
/// ```
/// use u_evolve::evolve::{CharacterSet, ConfigUpdate, EvolveConfig};
///
/// let update = ConfigUpdate {
///     character_set: Some(CharacterSet::PrintableAscii),
///     ..ConfigUpdate::default()
/// };
/// let merged = update.apply_to(&EvolveConfig::new("abc"));
/// assert_eq!(merged.character_set, CharacterSet::PrintableAscii);
/// assert_eq!(merged.target, "abc");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigUpdate {
    pub target: Option<String>,
    pub population_size: Option<usize>,
    pub survival_rate: Option<u32>,
    pub mutation_enabled: Option<bool>,
    pub mutation_rate: Option<f64>,
    pub character_set: Option<CharacterSet>,
    pub selection: Option<SelectionStrategy>,
    pub stagnation_threshold: Option<usize>,
    pub seed: Option<u64>,
}

impl ConfigUpdate {
    /// Returns `base` with every `Some` field of this update applied.
    pub fn apply_to(&self, base: &EvolveConfig) -> EvolveConfig {
        let mut merged = base.clone();
        if let Some(target) = &self.target {
            merged.target = target.clone();
        }
        if let Some(n) = self.population_size {
            merged.population_size = n;
        }
        if let Some(rate) = self.survival_rate {
            merged.survival_rate = rate;
        }
        if let Some(enabled) = self.mutation_enabled {
            merged.mutation_enabled = enabled;
        }
        if let Some(rate) = self.mutation_rate {
            merged.mutation_rate = rate;
        }
        if let Some(set) = self.character_set {
            merged.character_set = set;
        }
        if let Some(selection) = self.selection {
            merged.selection = selection;
        }
        if let Some(threshold) = self.stagnation_threshold {
            merged.stagnation_threshold = threshold;
        }
        if let Some(seed) = self.seed {
            merged.seed = Some(seed);
        }
        merged
    }

    /// Whether the update touches a field that fixes the population's shape
    /// (target length or population size).
    pub fn is_structural(&self, base: &EvolveConfig) -> bool {
        let target_changed = self.target.as_ref().is_some_and(|t| *t != base.target);
        let size_changed = self
            .population_size
            .is_some_and(|n| n != base.population_size);
        target_changed || size_changed
    }
}
