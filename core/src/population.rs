//! Population builder: account identities and their demographics.
//!
//! Ages are assigned by construction index (see `AgeBand`), never by any
//! fraud semantic. `is_elderly` is recomputed from age for every account,
//! so the general band can still contain elderly-flagged accounts.

use crate::{
    config::GeneratorConfig,
    error::GenResult,
    rng::StageRng,
    types::{AccountId, Gender},
};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub account_id: AccountId,
    pub age:        u32,
    pub is_elderly: bool,
    pub gender:     Gender,
}

/// The full account population in construction order, plus a lookup
/// from account number to construction index.
#[derive(Debug, Clone)]
pub struct Population {
    accounts:   Vec<Account>,
    index:      HashMap<AccountId, usize>,
    mule_start: usize,
}

impl Population {
    pub fn build(config: &GeneratorConfig, rng: &mut StageRng) -> GenResult<Self> {
        config.validate()?;
        let n = config.population_size;

        let range = (config.account_number_hi - config.account_number_lo) as usize;
        let numbers = rng.sample_indices(range, n);

        let mut accounts = Vec::with_capacity(n);
        for band in &config.age_bands {
            for i in band.start..band.end {
                let account_id = format!("{:09}", config.account_number_lo + numbers[i] as u64);
                let age = rng.range_inclusive(band.min_age, band.max_age);
                accounts.push(Account {
                    account_id,
                    age,
                    is_elderly: age >= config.elderly_threshold,
                    gender: Gender::Female,
                });
            }
        }

        // Gender is a second pass over the whole population.
        for account in &mut accounts {
            account.gender = if rng.chance(config.male_probability) {
                Gender::Male
            } else {
                Gender::Female
            };
        }

        let population = Self::from_accounts(accounts, config.mule_start());
        log::info!(
            "population: {} accounts, {} elderly, {} mules",
            population.len(),
            population.elderly_accounts().len(),
            population.mule_accounts().len()
        );
        Ok(population)
    }

    /// Assemble a population from already-built accounts.
    /// The last `len - mule_start` accounts are the ring mules.
    pub fn from_accounts(accounts: Vec<Account>, mule_start: usize) -> Self {
        let index = accounts
            .iter()
            .enumerate()
            .map(|(i, a)| (a.account_id.clone(), i))
            .collect();
        Self { accounts, index, mule_start }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, position: usize) -> &Account {
        &self.accounts[position]
    }

    pub fn lookup(&self, account_id: &str) -> Option<&Account> {
        self.position_of(account_id).map(|i| &self.accounts[i])
    }

    pub fn position_of(&self, account_id: &str) -> Option<usize> {
        self.index.get(account_id).copied()
    }

    pub fn age_of(&self, account_id: &str) -> Option<u32> {
        self.lookup(account_id).map(|a| a.age)
    }

    pub fn is_elderly(&self, account_id: &str) -> Option<bool> {
        self.lookup(account_id).map(|a| a.is_elderly)
    }

    pub fn gender_of(&self, account_id: &str) -> Option<Gender> {
        self.lookup(account_id).map(|a| a.gender)
    }

    /// Every elderly-flagged account, in construction order.
    pub fn elderly_accounts(&self) -> Vec<&Account> {
        self.accounts.iter().filter(|a| a.is_elderly).collect()
    }

    pub fn mule_start(&self) -> usize {
        self.mule_start
    }

    /// The fraud-ring mule accounts: the tail of the population.
    pub fn mule_accounts(&self) -> &[Account] {
        &self.accounts[self.mule_start.min(self.accounts.len())..]
    }

    pub fn is_mule_position(&self, position: usize) -> bool {
        position >= self.mule_start && position < self.accounts.len()
    }
}
