//! Read-only projections of a 3-hour-step forecast.
//!
//! The daily view samples one reading per day (same hour, one day apart),
//! skipping the first partial day. It is not a true daily min/max.

use crate::types::{ForecastEntry, ForecastSeries};

/// Entries in the hourly slider (24 hours of 3-hour steps)
pub const HOURLY_LEN: usize = 8;
/// 3-hour steps per day
pub const STEPS_PER_DAY: usize = 8;
/// Index of the first daily sample
pub const DAILY_OFFSET: usize = 7;

impl ForecastSeries {
    /// First `HOURLY_LEN` entries (fewer if the series is shorter)
    pub fn hourly(&self) -> &[ForecastEntry] {
        &self.entries[..self.entries.len().min(HOURLY_LEN)]
    }

    /// Entries at `DAILY_OFFSET`, then every `STEPS_PER_DAY` after it
    pub fn daily(&self) -> Vec<&ForecastEntry> {
        self.entries
            .iter()
            .skip(DAILY_OFFSET)
            .step_by(STEPS_PER_DAY)
            .collect()
    }
}

/// Indices the daily view picks from a series of `len` entries
pub fn daily_indices(len: usize) -> Vec<usize> {
    (DAILY_OFFSET..len).step_by(STEPS_PER_DAY).collect()
}
