//! Post-generation invariant checks.
//!
//! RULE: A dataset that fails any check is never written.

use crate::{
    config::GeneratorConfig,
    error::{GenError, GenResult},
    population::Population,
    ring::RingRoster,
    transaction::TransactionRecord,
    txn_id,
    types::{ContactMethod, FraudType, ResolutionStatus},
};
use std::collections::HashSet;

fn violation(check: &'static str, detail: String) -> GenError {
    GenError::InvariantViolation { check, detail }
}

pub fn is_account_number(id: &str) -> bool {
    id.len() == 9 && id.bytes().all(|b| b.is_ascii_digit())
}

/// Accounts: distinct 9-digit numbers, elderly flag consistent with age.
pub fn check_population(config: &GeneratorConfig, population: &Population) -> GenResult<()> {
    if population.len() != config.population_size {
        return Err(violation(
            "population_size",
            format!("expected {}, got {}", config.population_size, population.len()),
        ));
    }
    let mut seen = HashSet::with_capacity(population.len());
    for account in population.accounts() {
        if !is_account_number(&account.account_id) {
            return Err(violation("account_format", account.account_id.clone()));
        }
        if !seen.insert(account.account_id.as_str()) {
            return Err(violation("account_unique", account.account_id.clone()));
        }
        if account.is_elderly != (account.age >= config.elderly_threshold) {
            return Err(violation(
                "elderly_flag",
                format!("{} age {} flagged {}", account.account_id, account.age, account.is_elderly),
            ));
        }
    }
    Ok(())
}

/// Rows: exact class counts, unique ids, ring-owned fraud receivers,
/// loss and resolution rules per class.
pub fn check_transactions(
    config: &GeneratorConfig,
    population: &Population,
    roster: &RingRoster,
    rows: &[TransactionRecord],
) -> GenResult<()> {
    if rows.len() != config.total_transactions() {
        return Err(violation(
            "row_count",
            format!("expected {}, got {}", config.total_transactions(), rows.len()),
        ));
    }
    let fraud = rows.iter().filter(|r| r.is_fraud).count();
    if fraud != config.fraud_count {
        return Err(violation(
            "fraud_count",
            format!("expected {}, got {fraud}", config.fraud_count),
        ));
    }

    let mut ids = HashSet::with_capacity(rows.len());
    for row in rows {
        if !txn_id::is_well_formed(&row.transaction_id) {
            return Err(violation("txn_id_format", row.transaction_id.clone()));
        }
        if !ids.insert(row.transaction_id.as_str()) {
            return Err(violation("txn_id_unique", row.transaction_id.clone()));
        }
        if row.sender_account == row.receiver_account {
            return Err(violation("self_transfer", row.transaction_id.clone()));
        }
        for (side, flag, age) in [
            ("sender", row.sender_is_elderly, row.sender_age),
            ("receiver", row.receiver_is_elderly, row.receiver_age),
        ] {
            if flag != (age >= config.elderly_threshold) {
                return Err(violation(
                    "row_elderly_flag",
                    format!("{} {side} age {age} flagged {flag}", row.transaction_id),
                ));
            }
        }
        if row.is_fraud {
            check_fraud_row(population, roster, row)?;
        } else if row.loss != 0.0
            || row.resolution_status != ResolutionStatus::NotApplicable
            || row.fraud_type != FraudType::Legitimate
            || row.contact_method != ContactMethod::Direct
        {
            return Err(violation("legitimate_row", row.transaction_id.clone()));
        }
    }
    Ok(())
}

fn check_fraud_row(
    population: &Population,
    roster: &RingRoster,
    row: &TransactionRecord,
) -> GenResult<()> {
    if row.loss != row.amount {
        return Err(violation(
            "fraud_loss",
            format!("{} loss {} != amount {}", row.transaction_id, row.loss, row.amount),
        ));
    }
    if row.resolution_status == ResolutionStatus::NotApplicable {
        return Err(violation("fraud_resolution", row.transaction_id.clone()));
    }
    let ring = row
        .ring_id
        .and_then(|id| roster.get(id))
        .ok_or_else(|| violation("fraud_ring", row.transaction_id.clone()))?;
    let owned = population
        .position_of(&row.receiver_account)
        .is_some_and(|pos| ring.owns_position(pos));
    if !owned {
        return Err(violation(
            "fraud_receiver",
            format!(
                "{} receiver {} outside ring {} pool",
                row.transaction_id, row.receiver_account, ring.ring_id
            ),
        ));
    }
    if !ring.targets(&row.sender_account) {
        return Err(violation(
            "fraud_sender",
            format!("{} sender not on ring {} target list", row.transaction_id, ring.ring_id),
        ));
    }
    if row.fraud_type != ring.fraud_type || row.contact_method != ring.contact_method {
        return Err(violation("fraud_labels", row.transaction_id.clone()));
    }
    Ok(())
}
