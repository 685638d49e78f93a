//! # Random Source
//!
//! Uniform index draws for car selection.
//!
//! ```text
//! ThreadRandom    rand's thread RNG (default)
//! SeededRandom    StdRng from a u64 seed, reproducible runs (--seed)
//! SequenceRandom  scripted indices for tests, counts draws
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Draws indices uniformly from `[0, upper)`.
pub trait RandomSource: Debug + Send + Sync {
    /// `upper` is always at least 1.
    fn index_below(&self, upper: usize) -> usize;
}

/// rand's thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index_below(&self, upper: usize) -> usize {
        rand::rng().random_range(0..upper)
    }
}

/// Deterministic generator seeded once.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index_below(&self, upper: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(0..upper)
    }
}

/// Replays scripted indices, then keeps returning the last one.
///
/// Indices are returned as scripted; the service wraps anything `>= upper`.
#[derive(Debug)]
pub struct SequenceRandom {
    script: Mutex<VecDeque<usize>>,
    last: AtomicUsize,
    draws: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        SequenceRandom {
            script: Mutex::new(indices.into_iter().collect()),
            last: AtomicUsize::new(0),
            draws: AtomicUsize::new(0),
        }
    }

    /// Always returns `index`.
    pub fn fixed(index: usize) -> Self {
        SequenceRandom::new([index])
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }
}

impl RandomSource for SequenceRandom {
    fn index_below(&self, _upper: usize) -> usize {
        self.draws.fetch_add(1, Ordering::SeqCst);

        let mut script = self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match script.pop_front() {
            Some(index) => {
                self.last.store(index, Ordering::SeqCst);
                index
            }
            None => self.last.load(Ordering::SeqCst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_in_range() {
        for upper in 1..50 {
            assert!(ThreadRandom.index_below(upper) < upper);
        }
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(7);
        let b = SeededRandom::new(7);
        let first: Vec<usize> = (0..20).map(|_| a.index_below(100)).collect();
        let second: Vec<usize> = (0..20).map(|_| b.index_below(100)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|&i| i < 100));
    }

    #[test]
    fn test_sequence_random() {
        let random = SequenceRandom::new([2, 0]);
        assert_eq!(random.index_below(5), 2);
        assert_eq!(random.index_below(5), 0);
        assert_eq!(random.index_below(5), 0);
        assert_eq!(random.draws(), 3);
    }

    #[test]
    fn test_fixed_index() {
        let random = SequenceRandom::fixed(1);
        assert_eq!(random.index_below(3), 1);
        assert_eq!(random.index_below(3), 1);
    }
}
