// src/generators/source.rs
use rand::Rng;

use crate::error::{GeneratorError, Result};

/// Supplies uniformly distributed indices in `[0, n)`.
pub trait RandomSource {
    /// `n` is always greater than zero when called by the generator. The
    /// provided sources return 0 for an `n` of 0 instead of panicking.
    fn index(&mut self, n: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.gen_range(0..n)
    }
}

/// Replays a fixed list of indices, cycling when it runs out.
///
/// Values are reduced modulo `n`, so the result is always in range even when
/// the sequence was recorded against a larger alphabet.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    indices: Vec<usize>,
    position: usize,
}

impl SequenceSource {
    pub fn new(indices: Vec<usize>) -> Result<Self> {
        if indices.is_empty() {
            return Err(GeneratorError::EmptySequence);
        }
        Ok(SequenceSource { indices, position: 0 })
    }
}

impl RandomSource for SequenceSource {
    fn index(&mut self, n: usize) -> usize {
        let value = self.indices[self.position];
        self.position = (self.position + 1) % self.indices.len();
        value.checked_rem(n).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn sequence_cycles_and_wraps() {
        let mut source = SequenceSource::new(vec![1, 5, 9]).unwrap();
        let drawn: Vec<usize> = (0..5).map(|_| source.index(6)).collect();
        assert_eq!(drawn, vec![1, 5, 3, 1, 5]);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(SequenceSource::new(Vec::new()).unwrap_err(), GeneratorError::EmptySequence);
    }

    #[test]
    fn empty_range_yields_zero() {
        let mut source = SequenceSource::new(vec![4, 7]).unwrap();
        assert_eq!(source.index(0), 0);
        // Still advances through the sequence
        assert_eq!(source.index(10), 7);

        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(rng.index(0), 0);
    }

    #[test]
    fn rng_indices_stay_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for n in 1..100 {
            for _ in 0..20 {
                assert!(rng.index(n) < n);
            }
        }
    }

    #[test]
    fn every_index_is_reachable() {
        // Index 0 and n - 1 both have to show up for the range to be [0, n)
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut seen = [false; 62];
        for _ in 0..10_000 {
            seen[rng.index(62)] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }
}
