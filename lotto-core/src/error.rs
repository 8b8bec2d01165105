use thiserror::Error;

pub type Result<T> = std::result::Result<T, LottoError>;

/// Reasons a set of numbers is not a valid [`NumberSet`](crate::NumberSet).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberSetError {
    #[error("expected 6 numbers, got {0}")]
    WrongLength(usize),

    #[error("number {0} is outside 1..=49")]
    OutOfRange(u32),

    #[error("number {0} appears more than once")]
    Duplicate(u8),

    #[error("cannot parse numbers: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("Invalid number set: {0}")]
    InvalidNumbers(#[from] NumberSetError),

    #[error("Unknown draw variant: {0}")]
    UnknownVariant(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Date range spans {days} days, maximum is {max}")]
    RangeTooWide { days: i64, max: u32 },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LottoError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }
}
