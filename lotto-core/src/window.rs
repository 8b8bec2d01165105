//! Date windows for selecting which draws a verification run covers.

use crate::config::LottoConfig;
use crate::error::{LottoError, Result};
use chrono::{Duration, NaiveDate};

/// Inclusive `[from, to]` range of draw dates, validated against [`LottoConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate, config: &LottoConfig) -> Result<Self> {
        if from > to {
            return Err(LottoError::invalid_range(format!(
                "start {} is after end {}",
                from, to
            )));
        }

        let range = Self { from, to };
        let days = range.days();
        if days > i64::from(config.max_range_days) {
            return Err(LottoError::RangeTooWide {
                days,
                max: config.max_range_days,
            });
        }

        Ok(range)
    }

    /// The configured default window ending on `to`.
    pub fn ending_at(to: NaiveDate, config: &LottoConfig) -> Result<Self> {
        let span = i64::from(config.default_window_days.max(1)) - 1;
        let from = to
            .checked_sub_signed(Duration::days(span))
            .ok_or_else(|| LottoError::invalid_range(format!("no window ends at {}", to)))?;
        Self::new(from, to, config)
    }

    pub fn start(&self) -> NaiveDate {
        self.from
    }

    pub fn end(&self) -> NaiveDate {
        self.to
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}
