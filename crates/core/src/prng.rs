//! Deterministic PRNG based on the SplitMix64 algorithm, with role-keyed
//! sub-streams.
//!
//! Every random decision in the engine (planet placement, per-trajectory
//! orbit sense, search sampling) draws from its own independently derived
//! stream so that, for a given user seed, changing how one consumer draws
//! never perturbs the others. Pure integer arithmetic; same seed, same
//! sequence on every platform.

use serde::{Deserialize, Serialize};

/// Logical consumers of randomness, each with its own derived stream.
///
/// Replaces the fragile `seed + 2000`-style numeric offsets: a stream is
/// requested by role, and the derivation constant lives here, not at the
/// call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamRole {
    /// Planet positions, masses, and orbit senses.
    Planets,
    /// Per-trajectory clockwise/counter-clockwise choice.
    OrbitChoice,
    /// Candidate start points for the nice-path search.
    SearchSampling,
}

impl StreamRole {
    /// Per-role derivation constant folded into the seed. Values are
    /// arbitrary but fixed forever: changing one invalidates every scene
    /// generated under it.
    const fn tag(self) -> u64 {
        match self {
            StreamRole::Planets => 0x9A4E_C013_77F3_A159,
            StreamRole::OrbitChoice => 0x27D4_EB2F_1656_67C5,
            StreamRole::SearchSampling => 0xC2B2_AE3D_27D4_EB4F,
        }
    }
}

/// SplitMix64 deterministic PRNG.
///
/// One additive state update plus a two-round mixing finalizer per output.
/// The finalizer scrambles the whole state word, which is what makes the
/// simple xor-with-tag stream derivation in [`SplitMix64::for_role`] safe:
/// nearby seeds and nearby tags still land in unrelated output sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a generator seeded directly with `seed`.
    ///
    /// Unlike xorshift-family generators, SplitMix64 has no all-zeros fixed
    /// point, so every seed (including 0) is usable as-is.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Creates the derived stream for `role` under the given user seed.
    pub fn for_role(seed: u64, role: StreamRole) -> Self {
        Self::new(seed ^ role.tag())
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64()` for full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns a fair coin flip.
    pub fn next_bool(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }
}
