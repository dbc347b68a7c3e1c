//! Transaction synthesizer: the fraud loop and the legitimate loop.
//!
//! Fraud rows pair a ring's victim with one of that ring's own mules.
//! Legitimate rows pair any two distinct accounts, except that an elderly
//! sender paired with a mule is re-drawn when the sender is on the target
//! list of the ring owning that mule. Only that one ring is checked.

use crate::{
    calendar::DateWindow,
    config::GeneratorConfig,
    error::{GenError, GenResult},
    population::{Account, Population},
    ring::{FraudRing, RingRoster},
    rng::StageRng,
    transaction::{round_cents, TransactionRecord},
    txn_id::TxnIdMinter,
    types::{ContactMethod, FraudType, ResolutionStatus, TimeOfDay},
};
use anyhow::anyhow;

pub struct TransactionSynthesizer<'a> {
    config:     &'a GeneratorConfig,
    population: &'a Population,
    roster:     &'a RingRoster,
    window:     DateWindow,
}

/// Fields drawn the same way for both fraud and legitimate rows.
struct CommonDraw {
    transaction_id: String,
    amount:         f64,
    date:           chrono::NaiveDate,
    time_of_day:    TimeOfDay,
}

impl<'a> TransactionSynthesizer<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        population: &'a Population,
        roster: &'a RingRoster,
    ) -> Self {
        Self {
            config,
            population,
            roster,
            window: config.date_window(),
        }
    }

    /// Produce exactly `fraud_count` ring-driven fraud rows.
    pub fn synthesize_fraud(
        &self,
        rng: &mut StageRng,
        minter: &mut TxnIdMinter,
    ) -> GenResult<Vec<TransactionRecord>> {
        let target = self.config.fraud_count;
        let mut rows = Vec::with_capacity(target);
        if target == 0 {
            return Ok(rows);
        }
        if self.roster.is_empty() {
            return Err(GenError::InvalidConfig {
                reason: "fraud rows requested but no rings exist".into(),
            });
        }

        while rows.len() < target {
            let ring = &self.roster.rings()[rng.index(self.roster.len())];
            if ring.target_list.is_empty() {
                return Err(GenError::NoTargets { ring: ring.ring_id });
            }
            let victim_id = &ring.target_list[rng.index(ring.target_list.len())];
            let sender = self.resolve(victim_id)?;
            let pool = ring.receiver_pool(self.population);
            let receiver = &pool[rng.index(pool.len())];

            let common = self.draw_common(rng, minter);
            let resolution = rng.pick_weighted(&ResolutionStatus::WEIGHTED);
            rows.push(fraud_row(ring, sender, receiver, common, resolution));
        }

        log::info!("synthesizer: {} fraud transactions", rows.len());
        Ok(rows)
    }

    /// Produce exactly `legitimate_count` legitimate rows.
    pub fn synthesize_legitimate(
        &self,
        rng: &mut StageRng,
        minter: &mut TxnIdMinter,
    ) -> GenResult<Vec<TransactionRecord>> {
        let target = self.config.legitimate_count;
        let n = self.population.len();
        let mut rows = Vec::with_capacity(target);
        let mut rejected = 0u64;

        while rows.len() < target {
            let sender_pos = rng.index(n);
            let mut receiver_pos = rng.index(n - 1);
            if receiver_pos >= sender_pos {
                receiver_pos += 1;
            }
            let sender = self.population.get(sender_pos);
            let receiver = self.population.get(receiver_pos);

            if self.collides_with_ring(sender, receiver_pos) {
                rejected += 1;
                continue;
            }

            let common = self.draw_common(rng, minter);
            rows.push(legitimate_row(sender, receiver, common));
        }

        log::info!(
            "synthesizer: {} legitimate transactions ({} draws rejected by ring exclusion)",
            rows.len(),
            rejected
        );
        Ok(rows)
    }

    /// True when an elderly sender paying this mule is a designated
    /// victim of the ring that owns the mule.
    pub fn collides_with_ring(&self, sender: &Account, receiver_pos: usize) -> bool {
        if !sender.is_elderly || !self.population.is_mule_position(receiver_pos) {
            return false;
        }
        match self.roster.owner_of_position(receiver_pos) {
            Some(ring) => {
                let hit = ring.targets(&sender.account_id);
                if hit {
                    log::debug!(
                        "synthesizer: re-drawing {} -> ring {} mule",
                        sender.account_id,
                        ring.ring_id
                    );
                }
                hit
            }
            None => false,
        }
    }

    fn draw_common(&self, rng: &mut StageRng, minter: &mut TxnIdMinter) -> CommonDraw {
        let amount = round_cents(rng.log_normal(self.config.amount_log_mean, self.config.amount_log_sigma));
        let date = self.window.random_day(rng);
        let transaction_id = minter.mint();
        let time_of_day = rng.pick_weighted(&TimeOfDay::WEIGHTED);
        CommonDraw { transaction_id, amount, date, time_of_day }
    }

    fn resolve(&self, account_id: &str) -> GenResult<&'a Account> {
        self.population
            .lookup(account_id)
            .ok_or_else(|| GenError::Other(anyhow!("account {account_id} missing from population")))
    }
}

fn fraud_row(
    ring: &FraudRing,
    sender: &Account,
    receiver: &Account,
    common: CommonDraw,
    resolution_status: ResolutionStatus,
) -> TransactionRecord {
    TransactionRecord {
        transaction_id: common.transaction_id,
        sender_account: sender.account_id.clone(),
        sender_age: sender.age,
        sender_is_elderly: sender.is_elderly,
        receiver_account: receiver.account_id.clone(),
        receiver_age: receiver.age,
        receiver_is_elderly: receiver.is_elderly,
        amount: common.amount,
        date: common.date,
        is_fraud: true,
        sender_gender: sender.gender,
        receiver_gender: receiver.gender,
        fraud_type: ring.fraud_type,
        contact_method: ring.contact_method,
        loss: common.amount,
        time_of_day: common.time_of_day,
        resolution_status,
        ring_id: Some(ring.ring_id),
    }
}

fn legitimate_row(sender: &Account, receiver: &Account, common: CommonDraw) -> TransactionRecord {
    TransactionRecord {
        transaction_id: common.transaction_id,
        sender_account: sender.account_id.clone(),
        sender_age: sender.age,
        sender_is_elderly: sender.is_elderly,
        receiver_account: receiver.account_id.clone(),
        receiver_age: receiver.age,
        receiver_is_elderly: receiver.is_elderly,
        amount: common.amount,
        date: common.date,
        is_fraud: false,
        sender_gender: sender.gender,
        receiver_gender: receiver.gender,
        fraud_type: FraudType::Legitimate,
        contact_method: ContactMethod::Direct,
        loss: 0.0,
        time_of_day: common.time_of_day,
        resolution_status: ResolutionStatus::NotApplicable,
        ring_id: None,
    }
}
