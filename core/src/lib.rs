//! Synthetic elder-fraud transaction dataset generator.
//!
//! Builds an account population, binds fraud rings to elderly victims
//! and mule accounts, synthesizes an exact mix of fraud and legitimate
//! transactions, and writes the shuffled table as CSV.

pub mod calendar;
pub mod checker;
pub mod config;
pub mod error;
pub mod finalizer;
pub mod generator;
pub mod population;
pub mod ring;
pub mod rng;
pub mod summary;
pub mod synthesizer;
pub mod transaction;
pub mod txn_id;
pub mod types;
