//! Character sets and the symbol pool they resolve to.
//!
//! A [`CharacterSet`] is the configured identifier; a [`CharacterPool`] is the
//! concrete, ordered, deduplicated set of symbols that random generation and
//! mutation draw from.

use crate::error::{EvolveError, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Identifier of the symbol alphabet used for generation and mutation.
///
/// # Examples
///
/// ```
/// use u_evolve::evolve::CharacterSet;
///
/// let set: CharacterSet = "printable-ascii".parse().unwrap();
/// assert_eq!(set, CharacterSet::PrintableAscii);
/// assert_eq!(set.to_string(), "printable-ascii");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CharacterSet {
    /// `A-Z`, `a-z` and space (53 symbols).
    #[default]
    LettersSpace,

    /// `A-Z`, `a-z`, `0-9` and space (63 symbols).
    AlphanumericSpace,

    /// Every symbol in U+0020..=U+007E (95 symbols).
    PrintableAscii,
}

impl CharacterSet {
    /// The identifier used in configuration (`letters-space`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterSet::LettersSpace => "letters-space",
            CharacterSet::AlphanumericSpace => "alphanumeric-space",
            CharacterSet::PrintableAscii => "printable-ascii",
        }
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterSet {
    type Err = EvolveError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "letters-space" => Ok(CharacterSet::LettersSpace),
            "alphanumeric-space" => Ok(CharacterSet::AlphanumericSpace),
            "printable-ascii" => Ok(CharacterSet::PrintableAscii),
            other => Err(EvolveError::Configuration(format!(
                "unknown character set '{other}'"
            ))),
        }
    }
}

/// Ordered, deduplicated symbols available to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    set: CharacterSet,
    symbols: Vec<char>,
}

impl CharacterPool {
    /// Resolves the pool for `set`.
    pub fn from_set(set: CharacterSet) -> Self {
        let mut symbols: Vec<char> = match set {
            CharacterSet::LettersSpace => ('A'..='Z').chain('a'..='z').chain([' ']).collect(),
            CharacterSet::AlphanumericSpace => ('A'..='Z')
                .chain('a'..='z')
                .chain('0'..='9')
                .chain([' '])
                .collect(),
            CharacterSet::PrintableAscii => (' '..='~').collect(),
        };
        dedup_ordered(&mut symbols);
        Self { set, symbols }
    }

    /// The set this pool was resolved from.
    pub fn set(&self) -> CharacterSet {
        self.set
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Draws one symbol uniformly at random.
    pub fn random_symbol<R: Rng>(&self, rng: &mut R) -> char {
        self.symbols[rng.random_range(0..self.symbols.len())]
    }

    /// Draws `len` symbols independently and uniformly.
    pub fn random_sequence<R: Rng>(&self, len: usize, rng: &mut R) -> Vec<char> {
        (0..len).map(|_| self.random_symbol(rng)).collect()
    }

    /// Symbols of `target` the pool cannot produce, in first-occurrence
    /// order without repeats.
    pub fn missing_symbols(&self, target: &str) -> Vec<char> {
        let mut missing = Vec::new();
        for c in target.chars() {
            if !self.contains(c) && !missing.contains(&c) {
                missing.push(c);
            }
        }
        missing
    }

    /// Checks that every symbol of `target` is a pool member.
    ///
    /// Callers run this before `initialize()`: a target with foreign symbols
    /// can never be reached.
    pub fn validate_target(&self, target: &str) -> Result<()> {
        let symbols = self.missing_symbols(target);
        if symbols.is_empty() {
            Ok(())
        } else {
            Err(EvolveError::InvalidTarget { symbols })
        }
    }
}

fn dedup_ordered(symbols: &mut Vec<char>) {
    let mut seen = Vec::with_capacity(symbols.len());
    symbols.retain(|c| {
        if seen.contains(c) {
            false
        } else {
            seen.push(*c);
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(CharacterPool::from_set(CharacterSet::LettersSpace).len(), 53);
        assert_eq!(
            CharacterPool::from_set(CharacterSet::AlphanumericSpace).len(),
            63
        );
        assert_eq!(CharacterPool::from_set(CharacterSet::PrintableAscii).len(), 95);
    }

    #[test]
    fn test_printable_ascii_bounds() {
        let pool = CharacterPool::from_set(CharacterSet::PrintableAscii);
        assert_eq!(pool.symbols().first(), Some(&' '));
        assert_eq!(pool.symbols().last(), Some(&'~'));
        assert!(!pool.contains('\u{7f}'));
        assert!(!pool.contains('\n'));
    }

    #[test]
    fn test_pools_are_deduplicated() {
        for set in [
            CharacterSet::LettersSpace,
            CharacterSet::AlphanumericSpace,
            CharacterSet::PrintableAscii,
        ] {
            let pool = CharacterPool::from_set(set);
            let mut sorted = pool.symbols().to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), pool.len(), "{set} has duplicates");
        }
    }

    #[test]
    fn test_letters_space_excludes_digits() {
        let pool = CharacterPool::from_set(CharacterSet::LettersSpace);
        assert!(pool.contains(' '));
        assert!(pool.contains('q'));
        assert!(!pool.contains('7'));
    }

    #[test]
    fn test_missing_symbols_ordered_unique() {
        let pool = CharacterPool::from_set(CharacterSet::LettersSpace);
        assert_eq!(pool.missing_symbols("Hi 2 you!2!"), vec!['2', '!']);
        assert!(pool.missing_symbols("Hello World").is_empty());
    }

    #[test]
    fn test_validate_target() {
        let pool = CharacterPool::from_set(CharacterSet::AlphanumericSpace);
        assert!(pool.validate_target("Area 51").is_ok());
        assert_eq!(
            pool.validate_target("a+b"),
            Err(EvolveError::InvalidTarget { symbols: vec!['+'] })
        );
    }

    #[test]
    fn test_random_symbol_in_pool() {
        let pool = CharacterPool::from_set(CharacterSet::LettersSpace);
        let mut rng = create_rng(7);
        for _ in 0..1000 {
            assert!(pool.contains(pool.random_symbol(&mut rng)));
        }
        assert_eq!(pool.random_sequence(12, &mut rng).len(), 12);
    }

    #[test]
    fn test_parse_round_trip_and_unknown() {
        for set in [
            CharacterSet::LettersSpace,
            CharacterSet::AlphanumericSpace,
            CharacterSet::PrintableAscii,
        ] {
            assert_eq!(set.as_str().parse::<CharacterSet>(), Ok(set));
        }
        assert!(matches!(
            "emoji".parse::<CharacterSet>(),
            Err(EvolveError::Configuration(_))
        ));
    }
}
