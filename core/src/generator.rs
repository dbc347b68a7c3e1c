//! The dataset generator: one batch, four stages.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Population builder
//!   2. Ring assignor
//!   3. Transaction synthesizer (fraud loop, then legitimate loop)
//!   4. Finalizer (shuffle, check, write)
//!
//! RULES:
//!   - All randomness flows through the RngBank, one slot per stage.
//!   - The id minter is shared by both synthesizer loops so ids are
//!     unique across the whole table.
//!   - Nothing is written unless every invariant check passes.

use crate::{
    checker,
    config::GeneratorConfig,
    error::GenResult,
    finalizer,
    population::Population,
    ring::RingRoster,
    rng::{RngBank, StageSlot},
    summary::DatasetSummary,
    synthesizer::TransactionSynthesizer,
    transaction::TransactionRecord,
    txn_id::TxnIdMinter,
};
use std::path::Path;

/// Everything one run produced, in final (shuffled) row order.
#[derive(Debug, Clone)]
pub struct GeneratedDataset {
    pub population: Population,
    pub roster:     RingRoster,
    pub rows:       Vec<TransactionRecord>,
}

impl GeneratedDataset {
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary::from_rows(&self.rows)
    }
}

pub struct DatasetGenerator {
    pub config:   GeneratorConfig,
    pub rng_bank: RngBank,
}

impl DatasetGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            rng_bank: RngBank::new(config.seed),
            config,
        }
    }

    /// Stage 1.
    pub fn build_population(&self) -> GenResult<Population> {
        let mut rng = self.rng_bank.for_stage(StageSlot::Population);
        Population::build(&self.config, &mut rng)
    }

    /// Stage 2.
    pub fn assign_rings(&self, population: &Population) -> RingRoster {
        let mut rng = self.rng_bank.for_stage(StageSlot::Rings);
        RingRoster::assign(&self.config, population, &mut rng)
    }

    /// Stage 3. Rows come back fraud block first, then legitimate.
    pub fn synthesize(
        &self,
        population: &Population,
        roster: &RingRoster,
    ) -> GenResult<Vec<TransactionRecord>> {
        let synth = TransactionSynthesizer::new(&self.config, population, roster);
        let mut minter = TxnIdMinter::new(self.rng_bank.for_stage(StageSlot::TransactionId));

        let mut fraud_rng = self.rng_bank.for_stage(StageSlot::Fraud);
        let mut rows = synth.synthesize_fraud(&mut fraud_rng, &mut minter)?;

        let mut legit_rng = self.rng_bank.for_stage(StageSlot::Legitimate);
        rows.extend(synth.synthesize_legitimate(&mut legit_rng, &mut minter)?);

        if minter.collisions() > 0 {
            log::debug!("synthesizer: {} id collisions re-rolled", minter.collisions());
        }
        Ok(rows)
    }

    /// Run stages 1-3 and the shuffle/check half of stage 4.
    pub fn generate(&self) -> GenResult<GeneratedDataset> {
        log::info!("generator: seed={}", self.rng_bank.master_seed());
        let population = self.build_population()?;
        checker::check_population(&self.config, &population)?;

        let roster = self.assign_rings(&population);
        let mut rows = self.synthesize(&population, &roster)?;

        let mut shuffle_rng = self.rng_bank.for_stage(StageSlot::Shuffle);
        finalizer::shuffle_rows(&mut rows, &mut shuffle_rng);
        checker::check_transactions(&self.config, &population, &roster, &rows)?;

        Ok(GeneratedDataset { population, roster, rows })
    }

    /// Full pipeline: generate, then write the table to `path`.
    pub fn generate_to_path(&self, path: &Path) -> GenResult<DatasetSummary> {
        let dataset = self.generate()?;
        finalizer::write_csv_file(path, &dataset.rows)?;
        Ok(dataset.summary())
    }
}
