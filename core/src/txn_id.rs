//! Globally unique `TXN-XXXXXXXX` identifiers.
//!
//! The minter owns the set of every id handed out this run, across both
//! the fraud and legitimate loops. Collisions are re-rolled.

use crate::rng::StageRng;
use std::collections::HashSet;

pub const TXN_PREFIX: &str = "TXN-";
pub const SUFFIX_LEN: usize = 8;
const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub struct TxnIdMinter {
    rng:        StageRng,
    used:       HashSet<String>,
    collisions: u64,
}

impl TxnIdMinter {
    pub fn new(rng: StageRng) -> Self {
        Self { rng, used: HashSet::new(), collisions: 0 }
    }

    /// Mint an id not yet issued by this minter.
    pub fn mint(&mut self) -> String {
        loop {
            let candidate = self.candidate();
            if !self.used.contains(&candidate) {
                self.used.insert(candidate.clone());
                return candidate;
            }
            self.collisions += 1;
            log::trace!("txn_id: collision on {candidate}, re-rolling");
        }
    }

    fn candidate(&mut self) -> String {
        let mut id = String::with_capacity(TXN_PREFIX.len() + SUFFIX_LEN);
        id.push_str(TXN_PREFIX);
        for _ in 0..SUFFIX_LEN {
            id.push(ALPHABET[self.rng.index(ALPHABET.len())] as char);
        }
        id
    }

    /// Minter whose used set already holds `taken`.
    #[cfg(test)]
    fn with_used(rng: StageRng, taken: impl IntoIterator<Item = String>) -> Self {
        Self { rng, used: taken.into_iter().collect(), collisions: 0 }
    }

    pub fn issued(&self) -> usize {
        self.used.len()
    }

    pub fn collisions(&self) -> u64 {
        self.collisions
    }
}

/// `TXN-` followed by exactly 8 uppercase ASCII letters or digits.
pub fn is_well_formed(id: &str) -> bool {
    id.strip_prefix(TXN_PREFIX).is_some_and(|suffix| {
        suffix.len() == SUFFIX_LEN
            && suffix.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, StageSlot};

    #[test]
    fn minted_ids_are_unique_and_well_formed() {
        let mut minter = TxnIdMinter::new(RngBank::new(1).for_stage(StageSlot::TransactionId));
        let ids: Vec<String> = (0..5000).map(|_| minter.mint()).collect();
        let distinct: HashSet<&String> = ids.iter().collect();
        assert_eq!(distinct.len(), 5000);
        assert_eq!(minter.issued(), 5000);
        assert!(ids.iter().all(|id| is_well_formed(id)), "malformed id in batch");
    }

    #[test]
    fn already_issued_candidate_is_rerolled() {
        let bank = RngBank::new(42);
        let first = TxnIdMinter::new(bank.for_stage(StageSlot::TransactionId)).mint();

        // Same stream, so the first candidate is `first` again.
        let mut minter = TxnIdMinter::with_used(
            bank.for_stage(StageSlot::TransactionId),
            [first.clone()],
        );
        let next = minter.mint();

        assert_ne!(next, first);
        assert!(is_well_formed(&next));
        assert_eq!(minter.collisions(), 1);
        assert_eq!(minter.issued(), 2);
    }

    #[test]
    fn well_formed_rejects_bad_shapes() {
        assert!(is_well_formed("TXN-AB12CD34"));
        assert!(!is_well_formed("TXN-ab12cd34"));
        assert!(!is_well_formed("TXN-AB12CD3"));
        assert!(!is_well_formed("TX-AB12CD345"));
    }
}
