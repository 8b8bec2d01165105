//! Lotto core - shared types for ticket generation and draw verification
//!
//! Holds the validated [`NumberSet`] value type, the ticket and draw records
//! supplied by the surrounding application, date windows and configuration.

pub mod config;
pub mod error;
pub mod number_set;
pub mod types;
pub mod window;

pub use config::LottoConfig;
pub use error::{LottoError, NumberSetError, Result};
pub use number_set::{NumberSet, MAX_NUMBER, MIN_NUMBER, SET_SIZE};
pub use types::{Draw, DrawVariant, MatchTier, PrizeTier, PrizeTiers, Ticket, WIN_THRESHOLD};
pub use window::DateRange;
