//! Selection strategies.
//!
//! A strategy decides two things about the next generation: whether the
//! survivors are carried over verbatim, and which pool each of the two
//! parents is drawn from. Both decisions live in one exhaustive `match`
//! each, so a new strategy cannot be added without handling them.
//!
//! # References
//!
//! - De Jong (1975), *An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems* (elitist strategy)
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 4

use crate::error::{EvolveError, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// How survivors and parents are chosen each generation.
///
/// | strategy       | survivors carried | parent 1  | parent 2   |
/// |----------------|-------------------|-----------|------------|
/// | `Elitism`      | yes               | survivors | survivors  |
/// | `SemiElitism`  | no                | survivors | population |
/// | `Random`       | no                | population| population |
///
/// All draws are uniform with replacement.
///
/// # Examples
///
/// ```
/// use u_evolve::evolve::SelectionStrategy;
///
/// let s: SelectionStrategy = "semi-elitism".parse().unwrap();
/// assert_eq!(s, SelectionStrategy::SemiElitism);
/// assert!(!s.carries_survivors());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SelectionStrategy {
    /// Survivors pass unchanged and are the only parents.
    #[default]
    Elitism,

    /// One parent from the survivors, one from the whole previous
    /// population. Nothing is carried over.
    SemiElitism,

    /// Both parents from the whole previous population. Survivor ranking
    /// is computed but exerts no pressure.
    Random,
}

impl SelectionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionStrategy::Elitism => "elitism",
            SelectionStrategy::SemiElitism => "semi-elitism",
            SelectionStrategy::Random => "random",
        }
    }

    /// Whether survivors seed the next generation verbatim.
    pub fn carries_survivors(&self) -> bool {
        match self {
            SelectionStrategy::Elitism => true,
            SelectionStrategy::SemiElitism | SelectionStrategy::Random => false,
        }
    }

    /// Picks two parents according to the strategy's parent-source rule.
    ///
    /// `survivors` is the fitness-sorted head of `population`.
    ///
    /// # Panics
    /// Panics if either slice is empty.
    pub fn select_parents<'a, I, R: Rng>(
        &self,
        survivors: &'a [I],
        population: &'a [I],
        rng: &mut R,
    ) -> (&'a I, &'a I) {
        assert!(!survivors.is_empty(), "cannot select from empty survivors");
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            SelectionStrategy::Elitism => (pick(survivors, rng), pick(survivors, rng)),
            SelectionStrategy::SemiElitism => (pick(survivors, rng), pick(population, rng)),
            SelectionStrategy::Random => (pick(population, rng), pick(population, rng)),
        }
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionStrategy {
    type Err = EvolveError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "elitism" => Ok(SelectionStrategy::Elitism),
            "semi-elitism" => Ok(SelectionStrategy::SemiElitism),
            "random" => Ok(SelectionStrategy::Random),
            other => Err(EvolveError::Configuration(format!(
                "unknown selection strategy '{other}'"
            ))),
        }
    }
}

/// Number of top individuals kept as survivors.
///
/// `max(2, ceil(population_size * survival_rate / 100))`, capped at
/// `population_size`.
pub fn survivor_count(population_size: usize, survival_rate: u32) -> usize {
    let scaled = population_size * survival_rate as usize;
    let count = scaled.div_ceil(100).max(2);
    count.min(population_size)
}

fn pick<'a, I, R: Rng>(pool: &'a [I], rng: &mut R) -> &'a I {
    &pool[rng.random_range(0..pool.len())]
}
