//! Number generation and draw verification engine
//!
//! - [`RandomSetGenerator`] draws one uniform set of six numbers.
//! - [`CoverageSetGenerator`] draws nine sets that together cover all 49 numbers.
//! - [`VerificationMatcher`] reports which tickets matched each draw on three or more numbers.
//!
//! Everything here is synchronous and free of shared state; the only
//! non-determinism is the RNG handed to the generators.

pub mod generator;
pub mod matcher;
pub mod request;

pub use generator::{
    covered_numbers, CoverageSetGenerator, NumberGenerator, RandomSetGenerator, SYSTEM_TICKETS,
};
pub use matcher::{DrawResult, MatchResult, TicketSummary, VerificationMatcher, VerificationOutcome};
pub use request::CheckRequest;

use lotto_core::{Draw, NumberSet, Ticket};

/// Generate a single random ticket using the thread-local RNG
pub fn generate_single() -> NumberSet {
    RandomSetGenerator.generate()
}

/// Generate a full system of nine tickets using the thread-local RNG
pub fn generate_system() -> [NumberSet; SYSTEM_TICKETS] {
    CoverageSetGenerator.generate()
}

/// Check already-selected tickets against already-selected draws
pub fn check(tickets: &[Ticket], draws: &[Draw]) -> VerificationOutcome {
    VerificationMatcher::check(tickets, draws)
}
