//! End-of-run dataset summary.

use crate::{transaction::TransactionRecord, types::FraudType};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub total_rows:    usize,
    pub fraud_rows:    usize,
    pub total_loss:    f64,
    pub fraud_by_type: BTreeMap<FraudType, usize>,
}

impl DatasetSummary {
    pub fn from_rows(rows: &[TransactionRecord]) -> Self {
        let mut fraud_by_type = BTreeMap::new();
        let mut fraud_rows = 0;
        let mut total_loss = 0.0;
        for row in rows.iter().filter(|r| r.is_fraud) {
            fraud_rows += 1;
            total_loss += row.loss;
            *fraud_by_type.entry(row.fraud_type).or_insert(0) += 1;
        }
        Self {
            total_rows: rows.len(),
            fraud_rows,
            total_loss,
            fraud_by_type,
        }
    }

    pub fn legitimate_rows(&self) -> usize {
        self.total_rows - self.fraud_rows
    }

    /// Fraud share of all rows, in percent.
    pub fn fraud_pct(&self) -> f64 {
        if self.total_rows == 0 {
            return 0.0;
        }
        self.fraud_rows as f64 / self.total_rows as f64 * 100.0
    }
}
