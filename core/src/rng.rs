//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through StageRng instances derived
//! from the single master seed in GeneratorConfig.
//!
//! Each pipeline stage gets its own RNG stream, seeded deterministically
//! from (master_seed XOR stage_index). This means:
//!   - Adding a new stage never changes existing stages' streams.
//!   - Each stage's stream is fully reproducible in isolation.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single pipeline stage.
pub struct StageRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl StageRng {
    /// Create a stage RNG from the master seed and a stable
    /// stage index. The index must never change once assigned.
    pub fn new(master_seed: u64, stage_index: u64) -> Self {
        let derived_seed = master_seed ^ (stage_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::Rng;
        assert!(n > 0, "n must be > 0");
        self.inner.gen_range(0..n)
    }

    /// Roll an index in [0, len).
    pub fn index(&mut self, len: usize) -> usize {
        self.next_u64_below(len as u64) as usize
    }

    /// Roll an integer in [lo, hi], both ends inclusive.
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        use rand::Rng;
        self.inner.gen_range(lo..=hi)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Standard normal draw (Box-Muller, cosine branch only).
    pub fn standard_normal(&mut self) -> f64 {
        // 1 - u keeps the log argument in (0, 1].
        let u1 = 1.0 - self.next_f64();
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Log-normal draw; `mu` and `sigma` are the parameters of the
    /// underlying normal.
    pub fn log_normal(&mut self, mu: f64, sigma: f64) -> f64 {
        (mu + sigma * self.standard_normal()).exp()
    }

    /// Pick one entry by cumulative weight. Rolls past the total
    /// (weights summing to slightly under 1.0) land on the last entry.
    pub fn pick_weighted<T: Copy>(&mut self, table: &[(T, f64)]) -> T {
        assert!(!table.is_empty(), "weighted table must not be empty");
        let roll = self.next_f64();
        let mut cumulative = 0.0;
        for (value, weight) in table {
            cumulative += weight;
            if roll < cumulative {
                return *value;
            }
        }
        table[table.len() - 1].0
    }

    /// Draw `amount` distinct indices from [0, length).
    /// Panics if amount > length; callers clamp first.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, length, amount).into_vec()
    }

    /// Uniform in-place permutation.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

/// All stage RNGs for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_stage(&self, slot: StageSlot) -> StageRng {
        StageRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stage slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every stage's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StageSlot {
    Population = 0,
    Rings = 1,
    Fraud = 2,
    Legitimate = 3,
    TransactionId = 4,
    Shuffle = 5,
    // Add new stages here — append only.
}

impl StageSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Population    => "population",
            Self::Rings         => "rings",
            Self::Fraud         => "fraud",
            Self::Legitimate    => "legitimate",
            Self::TransactionId => "transaction_id",
            Self::Shuffle       => "shuffle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_slot_is_deterministic() {
        let mut a = RngBank::new(12345).for_stage(StageSlot::Fraud);
        let mut b = RngBank::new(12345).for_stage(StageSlot::Fraud);
        for _ in 0..100 {
            assert_eq!(a.next_u64_below(1_000_000), b.next_u64_below(1_000_000));
        }
    }

    #[test]
    fn slots_get_independent_streams() {
        let bank = RngBank::new(12345);
        let mut fraud = bank.for_stage(StageSlot::Fraud);
        let mut legit = bank.for_stage(StageSlot::Legitimate);
        let a: Vec<u64> = (0..16).map(|_| fraud.next_u64_below(u64::MAX)).collect();
        let b: Vec<u64> = (0..16).map(|_| legit.next_u64_below(u64::MAX)).collect();
        assert_ne!(a, b, "distinct slots should not share a stream");
        assert_eq!(fraud.name, "fraud");
    }

    #[test]
    fn range_inclusive_hits_both_ends() {
        let mut rng = RngBank::new(7).for_stage(StageSlot::Population);
        let draws: Vec<u32> = (0..2000).map(|_| rng.range_inclusive(65, 90)).collect();
        assert!(draws.iter().all(|d| (65..=90).contains(d)));
        assert!(draws.contains(&65));
        assert!(draws.contains(&90));
    }

    #[test]
    fn log_normal_median_tracks_mu() {
        let mut rng = RngBank::new(99).for_stage(StageSlot::Fraud);
        let mut draws: Vec<f64> = (0..20_000).map(|_| rng.log_normal(5.0, 1.0)).collect();
        assert!(draws.iter().all(|d| *d > 0.0));
        draws.sort_by(|a, b| a.total_cmp(b));
        let median = draws[draws.len() / 2];
        // exp(5) ≈ 148.4
        assert!(median > 130.0 && median < 170.0, "median {median:.1} too far from e^5");
    }

    #[test]
    fn pick_weighted_respects_weights() {
        let mut rng = RngBank::new(3).for_stage(StageSlot::Fraud);
        let table = [("a", 0.9), ("b", 0.1)];
        let hits = (0..10_000).filter(|_| rng.pick_weighted(&table) == "a").count();
        assert!(hits > 8_700 && hits < 9_300, "got {hits} of 10000 for a 0.9 weight");
    }

    #[test]
    fn sample_indices_are_distinct() {
        let mut rng = RngBank::new(5).for_stage(StageSlot::Rings);
        let mut picked = rng.sample_indices(50, 20);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 20);
        assert!(picked.iter().all(|i| *i < 50));
    }
}
