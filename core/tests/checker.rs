//! Invariant checker tests: tampered datasets must be rejected.

use scamring_core::{
    checker::{check_population, check_transactions},
    config::GeneratorConfig,
    error::GenError,
    generator::{DatasetGenerator, GeneratedDataset},
    population::Population,
    types::{ContactMethod, FraudType, ResolutionStatus},
};

fn small_config() -> GeneratorConfig {
    GeneratorConfig {
        fraud_count: 230,
        legitimate_count: 770,
        ..GeneratorConfig::default()
    }
}

fn dataset() -> GeneratedDataset {
    DatasetGenerator::new(small_config()).generate().unwrap()
}

fn violated_check(result: Result<(), GenError>) -> &'static str {
    match result {
        Err(GenError::InvariantViolation { check, .. }) => check,
        other => panic!("expected InvariantViolation, got {other:?}"),
    }
}

#[test]
fn untouched_dataset_passes() {
    let cfg = small_config();
    let d = dataset();
    check_population(&cfg, &d.population).unwrap();
    check_transactions(&cfg, &d.population, &d.roster, &d.rows).unwrap();
}

#[test]
fn duplicate_transaction_id_is_rejected() {
    let cfg = small_config();
    let mut d = dataset();
    d.rows[1].transaction_id = d.rows[0].transaction_id.clone();
    assert_eq!(
        violated_check(check_transactions(&cfg, &d.population, &d.roster, &d.rows)),
        "txn_id_unique"
    );
}

#[test]
fn fraud_loss_must_equal_amount() {
    let cfg = small_config();
    let mut d = dataset();
    let row = d.rows.iter_mut().find(|r| r.is_fraud).unwrap();
    row.loss += 1.0;
    assert_eq!(
        violated_check(check_transactions(&cfg, &d.population, &d.roster, &d.rows)),
        "fraud_loss"
    );
}

#[test]
fn legitimate_row_must_be_unresolved() {
    let cfg = small_config();
    let mut d = dataset();
    let row = d.rows.iter_mut().find(|r| !r.is_fraud).unwrap();
    row.resolution_status = ResolutionStatus::Reported;
    assert_eq!(
        violated_check(check_transactions(&cfg, &d.population, &d.roster, &d.rows)),
        "legitimate_row"
    );
}

#[test]
fn legitimate_row_must_carry_sentinel_labels() {
    let cfg = small_config();
    let mut d = dataset();
    let idx = d.rows.iter().position(|r| !r.is_fraud).unwrap();

    d.rows[idx].fraud_type = FraudType::RomanceScam;
    assert_eq!(
        violated_check(check_transactions(&cfg, &d.population, &d.roster, &d.rows)),
        "legitimate_row"
    );

    d.rows[idx].fraud_type = FraudType::Legitimate;
    d.rows[idx].contact_method = ContactMethod::Phone;
    assert_eq!(
        violated_check(check_transactions(&cfg, &d.population, &d.roster, &d.rows)),
        "legitimate_row"
    );
}

#[test]
fn fraud_row_must_have_a_resolution() {
    let cfg = small_config();
    let mut d = dataset();
    let row = d.rows.iter_mut().find(|r| r.is_fraud).unwrap();
    row.resolution_status = ResolutionStatus::NotApplicable;
    assert_eq!(
        violated_check(check_transactions(&cfg, &d.population, &d.roster, &d.rows)),
        "fraud_resolution"
    );
}

#[test]
fn fraud_receiver_outside_ring_pool_is_rejected() {
    let cfg = small_config();
    let mut d = dataset();
    let idx = d.rows.iter().position(|r| r.is_fraud).unwrap();
    let ring_id = d.rows[idx].ring_id.unwrap();
    let foreign = d.roster.rings().iter().find(|r| r.ring_id != ring_id).unwrap();
    let stranger = d.population.get(foreign.pool_start).clone();
    d.rows[idx].receiver_account = stranger.account_id;
    assert_eq!(
        violated_check(check_transactions(&cfg, &d.population, &d.roster, &d.rows)),
        "fraud_receiver"
    );
}

#[test]
fn missing_fraud_row_breaks_the_count() {
    let cfg = small_config();
    let mut d = dataset();
    let idx = d.rows.iter().position(|r| r.is_fraud).unwrap();
    d.rows.remove(idx);
    assert_eq!(
        violated_check(check_transactions(&cfg, &d.population, &d.roster, &d.rows)),
        "row_count"
    );
}

#[test]
fn mislabelled_elderly_account_is_rejected() {
    let cfg = small_config();
    let d = dataset();
    let mut accounts = d.population.accounts().to_vec();
    accounts[0].is_elderly = false;
    let tampered = Population::from_accounts(accounts, d.population.mule_start());
    assert_eq!(violated_check(check_population(&cfg, &tampered)), "elderly_flag");
}
