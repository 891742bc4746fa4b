// Random number generation.
//
// Two sources:
// - OS-seeded CSPRNG: `rand::rng()` (thread-local, reseeding ChaCha)
// - DebugRng: deterministic `StdRng` seeded for reproducibility in tests

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};

/// The thread-local CSPRNG, seeded from OS entropy.
///
/// Safe to call from any thread; each thread owns its generator.
pub fn os_rng() -> ThreadRng {
    rand::rng()
}

/// Deterministic RNG for testing, seeded from a u64.
///
/// Implements `RngCore` so it can be handed to any `*_from_rng` sampler.
pub struct DebugRng {
    inner: StdRng,
}

impl DebugRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: StdRng::seed_from_u64(seed) }
    }

    pub fn get_random_u64(&mut self) -> u64 {
        self.inner.random()
    }
}

impl RngCore for DebugRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}
