//! Injectable randomness for template choice and identifier suffixes.

#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

pub trait RandomSource: Send + Sync {
    fn next_u64(&self) -> u64;

    /// Uniform-enough index in `0..bound`. `bound` must be non-zero.
    fn pick(&self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// OS-backed randomness, drawn from v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidEntropy;

impl RandomSource for UuidEntropy {
    fn next_u64(&self) -> u64 {
        Uuid::new_v4().as_u64_pair().0
    }
}

/// Replays a fixed sequence, wrapping around at the end.
#[cfg(test)]
#[derive(Debug)]
pub struct FixedSequence {
    values: Vec<u64>,
    cursor: AtomicUsize,
}

#[cfg(test)]
impl FixedSequence {
    pub fn new(values: Vec<u64>) -> Self {
        assert!(!values.is_empty(), "FixedSequence needs at least one value");
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }
}

#[cfg(test)]
impl RandomSource for FixedSequence {
    fn next_u64(&self) -> u64 {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[i % self.values.len()]
    }
}
