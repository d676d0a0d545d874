//! Deterministic random number generation.
//!
//! RULE: Nothing in the library may call any platform RNG.
//! All randomness flows through a `RandomSource` handed in by the caller,
//! so a seeded run — spawn positions and attempt ids alike — is fully
//! reproducible.
//!
//! Each team gets its own stream, derived from (master_seed, stream
//! index). Adding a team never perturbs another team's stream.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// The randomness seam consumed by the resolver and the attempt manager.
/// Tests substitute scripted implementations.
pub trait RandomSource {
    /// Draw a raw u64 (full range).
    fn next_u64(&mut self) -> u64;

    /// Draw an i32 uniformly in `[lo, hi]` (both inclusive).
    fn next_i32_in(&mut self, lo: i32, hi: i32) -> i32 {
        assert!(lo <= hi, "empty draw range {lo}..={hi}");
        let span = (hi as i64 - lo as i64 + 1) as u64;
        lo + (self.next_u64() % span) as i32
    }
}

/// A seeded, deterministic source for a single team's searches.
pub struct SearchRng {
    inner: Pcg64Mcg,
}

impl SearchRng {
    /// Derive a stream from the master seed and a stable stream index.
    /// The index must never change once assigned to a team.
    pub fn new(master_seed: u64, stream: u64) -> Self {
        let derived_seed = master_seed ^ stream.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }
}

impl RandomSource for SearchRng {
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

/// All per-team RNG streams for a single run.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_stream(&self, stream: u64) -> SearchRng {
        SearchRng::new(self.master_seed, stream)
    }
}
