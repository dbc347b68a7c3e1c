//! Ring assignor: binds each fraud ring to its victims, labels and mules.

use crate::{
    config::GeneratorConfig,
    population::{Account, Population},
    rng::StageRng,
    types::{AccountId, ContactMethod, FraudType, RingId},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FraudRing {
    pub ring_id:        RingId,
    /// Elderly accounts this ring draws victims from. Drawn independently
    /// per ring, so lists of different rings may overlap.
    pub target_list:    Vec<AccountId>,
    pub fraud_type:     FraudType,
    pub contact_method: ContactMethod,
    /// Half-open construction-index range of this ring's mule accounts.
    pub pool_start:     usize,
    pub pool_end:       usize,
}

impl FraudRing {
    pub fn owns_position(&self, position: usize) -> bool {
        position >= self.pool_start && position < self.pool_end
    }

    pub fn targets(&self, account_id: &str) -> bool {
        self.target_list.iter().any(|t| t == account_id)
    }

    pub fn receiver_pool<'a>(&self, population: &'a Population) -> &'a [Account] {
        &population.accounts()[self.pool_start..self.pool_end]
    }
}

#[derive(Debug, Clone)]
pub struct RingRoster {
    rings:     Vec<FraudRing>,
    pool_size: usize,
    pool_base: usize,
}

impl RingRoster {
    pub fn assign(
        config: &GeneratorConfig,
        population: &Population,
        rng: &mut StageRng,
    ) -> Self {
        let elderly = population.elderly_accounts();
        let pool_base = population.mule_start();
        let take = config.target_list_cap.min(elderly.len());

        let rings: Vec<FraudRing> = (1..=config.ring_count)
            .map(|ring_id| {
                let target_list = sample_targets(&elderly, take, rng);
                let label = ((ring_id - 1) % 5) as usize;
                let pool_start = pool_base + (ring_id as usize - 1) * config.receiver_pool_size;
                FraudRing {
                    ring_id,
                    target_list,
                    fraud_type: FraudType::RING_CYCLE[label],
                    contact_method: ContactMethod::RING_CYCLE[label],
                    pool_start,
                    pool_end: pool_start + config.receiver_pool_size,
                }
            })
            .collect();

        if take < config.target_list_cap {
            log::warn!(
                "rings: only {} elderly accounts available, target lists capped at {}",
                elderly.len(),
                take
            );
        }
        log::info!(
            "rings: {} rings, {} targets each, {} mules each",
            rings.len(),
            take,
            config.receiver_pool_size
        );

        Self { rings, pool_size: config.receiver_pool_size, pool_base }
    }

    pub fn rings(&self) -> &[FraudRing] {
        &self.rings
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn get(&self, ring_id: RingId) -> Option<&FraudRing> {
        ring_id
            .checked_sub(1)
            .and_then(|i| self.rings.get(i as usize))
    }

    /// The ring whose mule slice contains this construction index.
    pub fn owner_of_position(&self, position: usize) -> Option<&FraudRing> {
        let offset = position.checked_sub(self.pool_base)?;
        self.rings.get(offset / self.pool_size)
    }
}

/// Draw `take` distinct accounts from the elderly set.
pub fn sample_targets(elderly: &[&Account], take: usize, rng: &mut StageRng) -> Vec<AccountId> {
    rng.sample_indices(elderly.len(), take)
        .into_iter()
        .map(|i| elderly[i].account_id.clone())
        .collect()
}
