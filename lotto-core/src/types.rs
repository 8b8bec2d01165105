use crate::error::{LottoError, Result};
use crate::number_set::NumberSet;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Minimum number of matched numbers for a ticket to win anything
pub const WIN_THRESHOLD: usize = 3;

/// A user's saved set of numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub user_id: Uuid,
    pub numbers: NumberSet,
    #[serde(default)]
    pub group: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    pub fn new(user_id: Uuid, numbers: NumberSet, group: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            numbers,
            group,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DrawVariant {
    #[serde(rename = "LOTTO")]
    Lotto,
    #[serde(rename = "LOTTO PLUS")]
    LottoPlus,
}

impl DrawVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawVariant::Lotto => "LOTTO",
            DrawVariant::LottoPlus => "LOTTO PLUS",
        }
    }
}

impl fmt::Display for DrawVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawVariant {
    type Err = LottoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lotto" => Ok(DrawVariant::Lotto),
            "lotto plus" | "lotto-plus" | "lotto_plus" | "lottoplus" => Ok(DrawVariant::LottoPlus),
            _ => Err(LottoError::UnknownVariant(s.to_string())),
        }
    }
}

/// Prize tier named after the number of matched numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Six,
    Five,
    Four,
    Three,
}

impl MatchTier {
    /// Tier for a given match count, `None` below the winning threshold.
    pub fn from_hits(hits: usize) -> Option<Self> {
        match hits {
            6 => Some(MatchTier::Six),
            5 => Some(MatchTier::Five),
            4 => Some(MatchTier::Four),
            3 => Some(MatchTier::Three),
            _ => None,
        }
    }

    pub fn hits(&self) -> usize {
        match self {
            MatchTier::Six => 6,
            MatchTier::Five => 5,
            MatchTier::Four => 4,
            MatchTier::Three => 3,
        }
    }
}

/// Stored winner count and payout for one tier; either may be unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTier {
    pub count: Option<u32>,
    /// Payout per winner in minor currency units
    pub amount: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTiers {
    #[serde(default)]
    pub six: PrizeTier,
    #[serde(default)]
    pub five: PrizeTier,
    #[serde(default)]
    pub four: PrizeTier,
    #[serde(default)]
    pub three: PrizeTier,
}

impl PrizeTiers {
    pub fn get(&self, tier: MatchTier) -> &PrizeTier {
        match tier {
            MatchTier::Six => &self.six,
            MatchTier::Five => &self.five,
            MatchTier::Four => &self.four,
            MatchTier::Three => &self.three,
        }
    }
}

/// An official draw result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub id: Uuid,
    pub date: NaiveDate,
    pub variant: DrawVariant,
    pub numbers: NumberSet,
    #[serde(default)]
    pub prizes: PrizeTiers,
    pub created_at: DateTime<Utc>,
}

impl Draw {
    pub fn new(date: NaiveDate, variant: DrawVariant, numbers: NumberSet) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            variant,
            numbers,
            prizes: PrizeTiers::default(),
            created_at: Utc::now(),
        }
    }

    pub fn with_prizes(mut self, prizes: PrizeTiers) -> Self {
        self.prizes = prizes;
        self
    }
}
