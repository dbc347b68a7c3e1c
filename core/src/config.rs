//! Generation constants.
//!
//! RULE: Every number the generator uses lives here. `Default` is the
//! production dataset; tests build smaller variants. There is no file,
//! flag or environment surface for any of these values.

use crate::{
    calendar::DateWindow,
    error::{GenError, GenResult},
};
use chrono::{Days, NaiveDate};

/// One contiguous slice of the population, by construction index,
/// whose ages are drawn uniformly from `[min_age, max_age]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeBand {
    pub label:   &'static str,
    pub start:   usize,
    pub end:     usize,
    pub min_age: u32,
    pub max_age: u32,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub seed: u64,

    // ── Population ─────────────────────────────────────────────
    pub population_size:    usize,
    /// Half-open range account numbers are sampled from.
    pub account_number_lo:  u64,
    pub account_number_hi:  u64,
    pub age_bands:          Vec<AgeBand>,
    pub elderly_threshold:  u32,
    pub male_probability:   f64,

    // ── Rings ──────────────────────────────────────────────────
    pub ring_count:         u32,
    pub target_list_cap:    usize,
    pub receiver_pool_size: usize,

    // ── Transactions ───────────────────────────────────────────
    pub fraud_count:        usize,
    pub legitimate_count:   usize,
    pub amount_log_mean:    f64,
    pub amount_log_sigma:   f64,
    pub window_start:       NaiveDate,
    pub window_days:        u32,

    // ── Output ─────────────────────────────────────────────────
    pub output_path:        String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            population_size: 1000,
            account_number_lo: 1_000_000,
            account_number_hi: 999_999_999,
            age_bands: vec![
                AgeBand { label: "elderly",     start: 0,   end: 200,  min_age: 65, max_age: 90 },
                // Ages 60-64 here still cross the elderly threshold.
                AgeBand { label: "general",     start: 200, end: 900,  min_age: 18, max_age: 64 },
                AgeBand { label: "ring_member", start: 900, end: 1000, min_age: 20, max_age: 50 },
            ],
            elderly_threshold: 60,
            male_probability: 0.49,
            ring_count: 10,
            target_list_cap: 20,
            receiver_pool_size: 10,
            fraud_count: 2300,
            legitimate_count: 7700,
            amount_log_mean: 5.0,
            amount_log_sigma: 1.0,
            window_start: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid constant date"),
            window_days: 365,
            output_path: "fraud_23pct_synthetic_dataset_fixed.csv".into(),
        }
    }
}

impl GeneratorConfig {
    /// Number of mule accounts at the tail of the population.
    pub fn mule_count(&self) -> usize {
        self.ring_count as usize * self.receiver_pool_size
    }

    /// Construction index of the first mule account.
    pub fn mule_start(&self) -> usize {
        self.population_size.saturating_sub(self.mule_count())
    }

    pub fn total_transactions(&self) -> usize {
        self.fraud_count + self.legitimate_count
    }

    pub fn date_window(&self) -> DateWindow {
        DateWindow::new(self.window_start, self.window_days)
    }

    /// Reject internally inconsistent constants before any draw.
    pub fn validate(&self) -> GenResult<()> {
        let invalid = |reason: String| Err(GenError::InvalidConfig { reason });

        if self.population_size < 2 {
            return invalid(format!(
                "population_size must be at least 2, got {}", self.population_size
            ));
        }
        if self.account_number_hi >= 1_000_000_000 {
            return invalid("account numbers must fit in 9 digits".into());
        }
        let range = self.account_number_hi.saturating_sub(self.account_number_lo);
        if range < self.population_size as u64 {
            return invalid(format!(
                "account range [{}, {}) cannot supply {} distinct numbers",
                self.account_number_lo, self.account_number_hi, self.population_size
            ));
        }

        // Bands must tile [0, population_size) in order.
        let mut expected_start = 0;
        for band in &self.age_bands {
            if band.start != expected_start || band.end <= band.start {
                return invalid(format!(
                    "age band '{}' [{}, {}) does not continue at {}",
                    band.label, band.start, band.end, expected_start
                ));
            }
            if band.min_age > band.max_age {
                return invalid(format!("age band '{}' has min_age > max_age", band.label));
            }
            expected_start = band.end;
        }
        if expected_start != self.population_size {
            return invalid(format!(
                "age bands cover {} accounts, population is {}",
                expected_start, self.population_size
            ));
        }

        if !(0.0..=1.0).contains(&self.male_probability) {
            return invalid(format!("male_probability {} not in [0, 1]", self.male_probability));
        }
        if self.ring_count == 0 || self.receiver_pool_size == 0 {
            return invalid("ring_count and receiver_pool_size must be positive".into());
        }
        if self.mule_count() >= self.population_size {
            return invalid(format!(
                "{} mule accounts leave no room in a population of {}",
                self.mule_count(), self.population_size
            ));
        }
        if self.target_list_cap == 0 {
            return invalid("target_list_cap must be positive".into());
        }
        let sigma = self.amount_log_sigma;
        if !sigma.is_finite() || sigma <= 0.0 || !self.amount_log_mean.is_finite() {
            return invalid("amount log-normal parameters must be finite with sigma > 0".into());
        }
        if self.window_days == 0 {
            return invalid("window_days must be positive".into());
        }
        let last_day = self
            .window_start
            .checked_add_days(Days::new(self.window_days as u64 - 1));
        if last_day.is_none() {
            return invalid(format!(
                "date window of {} days from {} runs past the supported calendar",
                self.window_days, self.window_start
            ));
        }
        Ok(())
    }
}
