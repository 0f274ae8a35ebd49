//! Deterministic pseudo-random generator used for all grid generation.
//!
//! The algorithm is fixed so a seed yields the same puzzle on every
//! platform and build:
//!
//! - state starts at `seed + 1` (wrapping)
//! - each step: `state = state * 6364136223846793005 + 1442695040888963407`
//! - output: `((((state >> 18) ^ state) >> 27) as u32).rotate_right(state >> 59)`
//! - bounded draws take the output modulo the bound
//!
//! Changing any of this changes every generated level.

/// PCG-style generator with a fully specified output sequence
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    /// Seed from the operating system, for runs that need not be replayable
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform-ish draw in `0..bound`. `bound` must be non-zero.
    pub fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.next_u32() as usize) % bound
    }

    /// Draw in `lo..=hi`
    pub fn range_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        debug_assert!(lo <= hi);
        lo + self.next_below(hi - lo + 1)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_below(i + 1);
            slice.swap(i, j);
        }
    }
}

/// A fresh random seed from the OS
pub fn entropy_seed() -> u64 {
    let mut seed_bytes = [0u8; 8];
    if getrandom::getrandom(&mut seed_bytes).is_err() {
        // Fallback: use a static counter if getrandom fails
        static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
        let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        seed_bytes = counter.to_le_bytes();
    }
    u64::from_le_bytes(seed_bytes)
}
