//! Random selection of canned replies, behind a trait so tests can pin the choice.

use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Chooses an index into a non-empty list of canned replies.
pub trait ResponsePicker: Send + Sync {
    /// Returns a value in `0..len`. `len` is always at least 1.
    fn pick(&self, len: usize) -> usize;
}

/// Default picker backed by the thread-local RNG.
pub struct ThreadRngPicker;

impl ResponsePicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible picker: the same seed yields the same sequence of choices.
pub struct SeededPicker(Mutex<StdRng>);

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl ResponsePicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        // A poisoned lock still holds a usable RNG
        let mut rng = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(0..len)
    }
}

/// Always picks the same slot, wrapped into range.
#[cfg(test)]
pub struct FixedPicker(pub usize);

#[cfg(test)]
impl ResponsePicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_picker_stays_in_range() {
        let picker = ThreadRngPicker;
        for _ in 0..200 {
            assert!(picker.pick(5) < 5);
        }
    }

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let a = SeededPicker::new(42);
        let b = SeededPicker::new(42);
        let seq_a: Vec<usize> = (0..20).map(|_| a.pick(5)).collect();
        let seq_b: Vec<usize> = (0..20).map(|_| b.pick(5)).collect();
        assert_eq!(seq_a, seq_b);
        assert!(seq_a.iter().all(|i| *i < 5));
    }

    #[test]
    fn test_fixed_picker_wraps() {
        assert_eq!(FixedPicker(7).pick(5), 2);
        assert_eq!(FixedPicker(0).pick(1), 0);
    }
}
