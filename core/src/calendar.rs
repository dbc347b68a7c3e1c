//! The fixed date window transactions are spread over.

use crate::rng::StageRng;
use chrono::{Days, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub days:  u32,
}

impl DateWindow {
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self { start, days }
    }

    /// The day `offset` days after the window start.
    /// Offsets past the end are clamped to the last day.
    pub fn day(&self, offset: u32) -> NaiveDate {
        let offset = offset.min(self.days.saturating_sub(1));
        self.start
            .checked_add_days(Days::new(offset as u64))
            .unwrap_or(self.start)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.day(self.days.saturating_sub(1))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.last_day()
    }

    /// Uniformly chosen day inside the window.
    pub fn random_day(&self, rng: &mut StageRng) -> NaiveDate {
        self.day(rng.next_u64_below(self.days as u64) as u32)
    }
}
