//! Genetic operators for fixed-length sequences.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: one cut strictly inside the sequence,
//!   tails exchanged, O(n)
//!
//! # Mutation
//!
//! - [`point_mutation`]: independent per-position resampling from the
//!   character pool, O(n)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use super::charset::CharacterPool;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// Picks `split` uniformly from `1..len` and returns
/// `(p1[..split] ++ p2[split..], p2[..split] ++ p1[split..])`, so each child
/// holds at least one symbol from each parent.
///
/// With `len == 1` there is no interior cut point; the children are copies
/// of `(parent1, parent2)` and no randomness is consumed.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn single_point_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let split = rng.random_range(1..n);
    (splice(parent1, parent2, split), splice(parent2, parent1, split))
}

fn splice<T: Clone>(head: &[T], tail: &[T], split: usize) -> Vec<T> {
    let mut child = Vec::with_capacity(head.len());
    child.extend_from_slice(&head[..split]);
    child.extend_from_slice(&tail[split..]);
    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Point mutation: each position is resampled from `pool` with probability
/// `rate`.
///
/// One `f64` in `[0, 1)` is drawn per position; the symbol is replaced when
/// the draw is below `rate`. The replacement may equal the original.
pub fn point_mutation<R: Rng>(
    dna: Vec<char>,
    pool: &CharacterPool,
    rate: f64,
    rng: &mut R,
) -> Vec<char> {
    dna.into_iter()
        .map(|c| {
            if rng.random::<f64>() < rate {
                pool.random_symbol(rng)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolve::CharacterSet;
    use crate::random::create_rng;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_crossover_split_strictly_inside() {
        let p1 = chars("AAAAAAAA");
        let p2 = chars("BBBBBBBB");
        let mut rng = create_rng(42);
        for _ in 0..500 {
            let (a, b) = single_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(a.len(), 8);
            assert_eq!(b.len(), 8);
            // Child A starts with p1 and ends with p2.
            assert_eq!(a[0], 'A');
            assert_eq!(a[7], 'B');
            assert_eq!(b[0], 'B');
            assert_eq!(b[7], 'A');
            assert_ne!(a, p1);
            assert_ne!(a, p2);
        }
    }

    #[test]
    fn test_crossover_children_are_complementary() {
        let p1 = chars("abcdef");
        let p2 = chars("UVWXYZ");
        let mut rng = create_rng(3);
        for _ in 0..100 {
            let (a, b) = single_point_crossover(&p1, &p2, &mut rng);
            let split = a.iter().take_while(|c| c.is_lowercase()).count();
            assert!((1..6).contains(&split));
            assert_eq!(&a[..split], &p1[..split]);
            assert_eq!(&a[split..], &p2[split..]);
            assert_eq!(&b[..split], &p2[..split]);
            assert_eq!(&b[split..], &p1[split..]);
        }
    }

    #[test]
    fn test_crossover_two_symbols_has_one_cut() {
        let mut rng = create_rng(9);
        let (a, b) = single_point_crossover(&chars("AB"), &chars("xy"), &mut rng);
        assert_eq!(a, chars("Ay"));
        assert_eq!(b, chars("xB"));
    }

    #[test]
    fn test_crossover_single_symbol_is_noop() {
        let mut rng = create_rng(1);
        let (a, b) = single_point_crossover(&['X'], &['Y'], &mut rng);
        assert_eq!(a, vec!['X']);
        assert_eq!(b, vec!['Y']);
    }

    #[test]
    fn test_crossover_identical_parents() {
        let p = chars("SAME");
        let mut rng = create_rng(5);
        let (a, b) = single_point_crossover(&p, &p, &mut rng);
        assert_eq!(a, p);
        assert_eq!(b, p);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = create_rng(1);
        single_point_crossover(&chars("AB"), &chars("ABC"), &mut rng);
    }

    #[test]
    fn test_mutation_rate_zero_keeps_sequence() {
        let pool = CharacterPool::from_set(CharacterSet::LettersSpace);
        let mut rng = create_rng(42);
        let dna = chars("Hello World");
        assert_eq!(point_mutation(dna.clone(), &pool, 0.0, &mut rng), dna);
    }

    #[test]
    fn test_mutation_rate_one_resamples_every_position() {
        let pool = CharacterPool::from_set(CharacterSet::LettersSpace);
        let mut rng = create_rng(42);
        // '#' is outside the pool, so any surviving '#' means a skipped position.
        let dna = vec!['#'; 64];
        let out = point_mutation(dna, &pool, 1.0, &mut rng);
        assert_eq!(out.len(), 64);
        assert!(out.iter().all(|&c| pool.contains(c)));
    }

    #[test]
    fn test_mutation_rate_is_per_position() {
        let pool = CharacterPool::from_set(CharacterSet::LettersSpace);
        let mut rng = create_rng(11);
        let dna = vec!['#'; 10_000];
        let out = point_mutation(dna, &pool, 0.1, &mut rng);
        let mutated = out.iter().filter(|&&c| c != '#').count();
        assert!(
            (800..1200).contains(&mutated),
            "expected ~1000 mutated positions, got {mutated}"
        );
    }
}
