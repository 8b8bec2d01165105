use crate::error::{LottoError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LottoConfig {
    /// Longest verification window accepted, in days (inclusive of both ends)
    pub max_range_days: u32,
    /// Window used when the caller only supplies an end date
    pub default_window_days: u32,
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            max_range_days: 92,     // one quarter
            default_window_days: 7, // one week of draws
        }
    }
}

impl LottoConfig {
    pub fn new(max_range_days: u32, default_window_days: u32) -> Self {
        Self {
            max_range_days,
            default_window_days,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_range_days == 0 {
            return Err(LottoError::config("max_range_days must be greater than 0"));
        }

        if self.default_window_days == 0 {
            return Err(LottoError::config(
                "default_window_days must be greater than 0",
            ));
        }

        if self.default_window_days > self.max_range_days {
            return Err(LottoError::config(format!(
                "default_window_days ({}) cannot exceed max_range_days ({})",
                self.default_window_days, self.max_range_days
            )));
        }

        Ok(())
    }
}
