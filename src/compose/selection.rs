//! Seeded random selection primitives
//!
//! All randomness flows through an explicitly seeded selector so the whole
//! frame sequence is reproducible from a single seed.

use bitvec::bitvec;
use bitvec::vec::BitVec;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};

/// Occupancy mask tracking which pool indices have already been drawn
///
/// Backs sampling without replacement with O(1) membership testing.
#[derive(Clone, Debug)]
pub struct SelectionMask {
    bits: BitVec,
    capacity: usize,
}

impl SelectionMask {
    /// Create a mask with no indices drawn
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Mark an index as drawn
    ///
    /// Returns `true` when the index was free, `false` when it was already
    /// drawn or lies outside the pool.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= self.capacity || self.contains(index) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Test whether an index has been drawn
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Count drawn indices
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}

/// Seeded random selector for reproducible frame layouts
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index in `[0, bound)`
    ///
    /// A zero bound returns 0 rather than sampling an empty range.
    pub fn index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }

    /// Draw `count` distinct indices uniformly from a pool without replacement
    ///
    /// Uses rejection sampling over an occupancy mask; the loop terminates
    /// whenever the pool is at least as large as the draw count.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool is smaller than the requested count.
    pub fn distinct_indices(&mut self, pool_size: usize, count: usize) -> Result<Vec<usize>> {
        if count > pool_size {
            return Err(invalid_parameter(
                "count",
                &count,
                &format!("cannot draw {count} distinct indices from a pool of {pool_size}"),
            ));
        }

        let mut mask = SelectionMask::new(pool_size);
        let mut drawn = Vec::with_capacity(count);
        while drawn.len() < count {
            let candidate = self.index(pool_size);
            if mask.insert(candidate) {
                drawn.push(candidate);
            }
        }

        Ok(drawn)
    }

    /// Uniformly permute a slice in place (Fisher-Yates, from the end)
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }

    /// Pick one element uniformly at random
    ///
    /// Returns `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.index(items.len()))
    }
}
