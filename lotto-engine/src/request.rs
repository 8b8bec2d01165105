use crate::matcher::{VerificationMatcher, VerificationOutcome};
use lotto_core::{DateRange, Draw, DrawVariant, Ticket};
use std::cmp::Reverse;
use uuid::Uuid;

/// Which tickets and draws a verification run covers
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub user_id: Uuid,
    /// Case-insensitive substring of the ticket group; blank means any
    pub group: Option<String>,
    pub range: DateRange,
    pub variant: Option<DrawVariant>,
}

impl CheckRequest {
    pub fn new(user_id: Uuid, range: DateRange) -> Self {
        Self {
            user_id,
            group: None,
            range,
            variant: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_variant(mut self, variant: DrawVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    fn group_needle(&self) -> Option<String> {
        self.group
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_lowercase)
    }

    /// The requesting user's tickets matching the group filter, in input order.
    pub fn select_tickets(&self, tickets: &[Ticket]) -> Vec<Ticket> {
        let needle = self.group_needle();

        tickets
            .iter()
            .filter(|t| t.user_id == self.user_id)
            .filter(|t| match &needle {
                Some(needle) => t
                    .group
                    .as_deref()
                    .is_some_and(|g| g.to_lowercase().contains(needle.as_str())),
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Draws inside the window (and variant), newest first.
    pub fn select_draws(&self, draws: &[Draw]) -> Vec<Draw> {
        let mut selected: Vec<Draw> = draws
            .iter()
            .filter(|d| self.range.contains(d.date))
            .filter(|d| self.variant.map_or(true, |v| d.variant == v))
            .cloned()
            .collect();

        selected.sort_by_key(|d| (Reverse(d.date), d.variant));
        selected
    }

    /// Select tickets and draws, then run the matcher over them.
    pub fn run(&self, tickets: &[Ticket], draws: &[Draw]) -> VerificationOutcome {
        let tickets = self.select_tickets(tickets);
        let draws = self.select_draws(draws);

        let outcome = VerificationMatcher::check(&tickets, &draws);

        tracing::info!(
            "User {} checked {} tickets against {} draws ({} to {}): {} winning matches",
            self.user_id,
            outcome.tickets.len(),
            outcome.draws.len(),
            self.range.start(),
            self.range.end(),
            outcome.winner_count()
        );
        outcome
    }
}
