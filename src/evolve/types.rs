//! Individuals and the fitness function.

/// Positional match count of `dna` against `target`.
///
/// Sums 1 for every index where the symbols agree. Range `[0, target.len()]`;
/// the maximum means `dna` equals `target`.
pub fn fitness(dna: &[char], target: &[char]) -> usize {
    dna.iter().zip(target).filter(|(a, b)| a == b).count()
}

/// One candidate solution: a fixed-length symbol sequence and its fitness.
///
/// Fitness is computed once at construction. Crossover and mutation build
/// new individuals; an existing one is never modified. With the `serde`
/// feature it serializes but does not deserialize, since a decoded fitness
/// could disagree with the dna.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Individual {
    dna: Vec<char>,
    fitness: usize,
}

impl Individual {
    /// Builds an individual and scores it against `target`.
    pub fn evaluated(dna: Vec<char>, target: &[char]) -> Self {
        let fitness = fitness(&dna, target);
        Self { dna, fitness }
    }

    pub fn dna(&self) -> &[char] {
        &self.dna
    }

    pub fn fitness(&self) -> usize {
        self.fitness
    }

    /// The sequence rendered as a `String`.
    pub fn sequence(&self) -> String {
        self.dna.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.dna.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dna.is_empty()
    }

    /// Whether this individual matches a target of length `target_len`
    /// at every position.
    pub fn is_match(&self, target_len: usize) -> bool {
        self.fitness == target_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_fitness_counts_positions() {
        let target = chars("HELLO");
        assert_eq!(fitness(&chars("HELLO"), &target), 5);
        assert_eq!(fitness(&chars("HXLLX"), &target), 3);
        assert_eq!(fitness(&chars("OLLEH"), &target), 1);
        assert_eq!(fitness(&chars("abcde"), &target), 0);
    }

    #[test]
    fn test_fitness_is_positional_not_multiset() {
        // Same symbols, shifted by one: no position agrees.
        assert_eq!(fitness(&chars("BA"), &chars("AB")), 0);
    }

    // Individuals leave the crate serialized, but only `evaluated` builds
    // them, so the cached fitness always matches the dna.
    #[cfg(feature = "serde")]
    #[test]
    fn test_individual_is_serialize_only_output() {
        fn assert_serialize<T: serde::Serialize>() {}
        assert_serialize::<Individual>();
        assert_serialize::<crate::evolve::Stats>();
    }

    #[test]
    fn test_evaluated_individual() {
        let target = chars("AB");
        let ind = Individual::evaluated(chars("AX"), &target);
        assert_eq!(ind.fitness(), 1);
        assert_eq!(ind.sequence(), "AX");
        assert_eq!(ind.len(), 2);
        assert!(!ind.is_match(target.len()));

        let exact = Individual::evaluated(chars("AB"), &target);
        assert!(exact.is_match(target.len()));
    }
}
