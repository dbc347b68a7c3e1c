//! dataset-builder: writes the synthetic elder-fraud dataset.
//!
//! Usage:
//!   dataset-builder
//!
//! Every parameter is a fixed constant; RUST_LOG controls log output only.

use anyhow::Result;
use scamring_core::{config::GeneratorConfig, generator::DatasetGenerator};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let config = GeneratorConfig::default();
    let output = config.output_path.clone();

    println!("Elder-fraud dataset builder");
    println!("  seed:        {}", config.seed);
    println!("  accounts:    {}", config.population_size);
    println!("  rings:       {}", config.ring_count);
    println!("  rows:        {}", config.total_transactions());
    println!();

    let generator = DatasetGenerator::new(config);
    let summary = generator.generate_to_path(Path::new(&output))?;

    println!("Dataset generated and saved as '{output}'.");
    println!(
        "Fraudulent transactions: {} ({:.1}%)",
        summary.fraud_rows,
        summary.fraud_pct()
    );
    println!("Legitimate transactions: {}", summary.legitimate_rows());
    println!("Total fraud loss:        ${:.2}", summary.total_loss);
    for (fraud_type, count) in &summary.fraud_by_type {
        println!("  {fraud_type:<26} {count}");
    }
    log::debug!("dataset-builder: done");
    Ok(())
}
