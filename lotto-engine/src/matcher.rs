use chrono::NaiveDate;
use lotto_core::{Draw, DrawVariant, MatchTier, NumberSet, PrizeTiers, Ticket, WIN_THRESHOLD};
use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// A ticket that matched a draw on at least [`WIN_THRESHOLD`] numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub ticket_id: Uuid,
    /// Matched numbers, ascending
    pub numbers: Vec<u8>,
    pub tier: MatchTier,
}

/// A ticket as echoed back to the caller, whether it won or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketSummary {
    pub id: Uuid,
    pub group: Option<String>,
    pub numbers: NumberSet,
}

impl From<&Ticket> for TicketSummary {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id,
            group: ticket.group.clone(),
            numbers: ticket.numbers,
        }
    }
}

/// One draw of the window with the tickets that won against it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawResult {
    pub id: Uuid,
    pub date: NaiveDate,
    pub variant: DrawVariant,
    pub numbers: NumberSet,
    pub prizes: PrizeTiers,
    pub winners: Vec<MatchResult>,
}

/// Full result of one verification run
#[derive(Debug, Clone, Serialize)]
pub struct VerificationOutcome {
    pub tickets: Vec<TicketSummary>,
    pub draws: Vec<DrawResult>,
    #[serde(rename = "execution_time_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl VerificationOutcome {
    pub fn winner_count(&self) -> usize {
        self.draws.iter().map(|d| d.winners.len()).sum()
    }

    /// Every (draw, match) pair won by the given ticket
    pub fn wins_for(&self, ticket_id: Uuid) -> impl Iterator<Item = (&DrawResult, &MatchResult)> {
        self.draws.iter().flat_map(move |draw| {
            draw.winners
                .iter()
                .filter(move |m| m.ticket_id == ticket_id)
                .map(move |m| (draw, m))
        })
    }
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

/// Cross-references tickets against draws.
///
/// Pure over its inputs: callers are expected to have already narrowed the
/// tickets to one owner (and group) and the draws to the requested window.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerificationMatcher;

impl VerificationMatcher {
    /// Match a single ticket against a single draw.
    pub fn match_pair(ticket: &Ticket, draw: &Draw) -> Option<MatchResult> {
        let numbers = ticket.numbers.intersection(&draw.numbers);
        if numbers.len() < WIN_THRESHOLD {
            return None;
        }

        let tier = MatchTier::from_hits(numbers.len())?;
        Some(MatchResult {
            ticket_id: ticket.id,
            numbers,
            tier,
        })
    }

    /// Every draw appears in the outcome, with an empty winner list if nobody won,
    /// and every ticket is echoed exactly once.
    pub fn check(tickets: &[Ticket], draws: &[Draw]) -> VerificationOutcome {
        let started = Instant::now();

        let draws: Vec<DrawResult> = draws
            .iter()
            .map(|draw| DrawResult {
                id: draw.id,
                date: draw.date,
                variant: draw.variant,
                numbers: draw.numbers,
                prizes: draw.prizes,
                winners: tickets
                    .iter()
                    .filter_map(|ticket| Self::match_pair(ticket, draw))
                    .collect(),
            })
            .collect();

        let outcome = VerificationOutcome {
            tickets: tickets.iter().map(TicketSummary::from).collect(),
            draws,
            elapsed: started.elapsed(),
        };

        tracing::debug!(
            "Checked {} tickets against {} draws: {} winning matches in {:?}",
            outcome.tickets.len(),
            outcome.draws.len(),
            outcome.winner_count(),
            outcome.elapsed
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: [u8; 6]) -> NumberSet {
        NumberSet::new(values).unwrap()
    }

    fn ticket(values: [u8; 6]) -> Ticket {
        Ticket::new(Uuid::new_v4(), set(values), None)
    }

    fn draw(day: u32, values: [u8; 6]) -> Draw {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        Draw::new(date, DrawVariant::Lotto, set(values))
    }

    #[test]
    fn test_three_matches_win() {
        let t = ticket([5, 14, 23, 29, 37, 41]);
        let d = draw(2, [3, 14, 23, 31, 37, 48]);

        let outcome = VerificationMatcher::check(&[t.clone()], &[d.clone()]);

        assert_eq!(outcome.draws.len(), 1);
        assert_eq!(outcome.draws[0].id, d.id);
        assert_eq!(
            outcome.draws[0].winners,
            vec![MatchResult {
                ticket_id: t.id,
                numbers: vec![14, 23, 37],
                tier: MatchTier::Three,
            }]
        );
    }

    #[test]
    fn test_two_matches_do_not_win() {
        let t = ticket([1, 2, 10, 11, 12, 13]);
        let d = draw(2, [1, 2, 20, 21, 22, 23]);

        assert!(VerificationMatcher::match_pair(&t, &d).is_none());

        let outcome = VerificationMatcher::check(&[t], &[d]);
        assert!(outcome.draws[0].winners.is_empty());
    }

    #[test]
    fn test_tiers_follow_match_count() {
        let d = draw(2, [1, 2, 3, 4, 5, 6]);

        let cases = [
            ([1, 2, 3, 4, 5, 6], MatchTier::Six),
            ([1, 2, 3, 4, 5, 40], MatchTier::Five),
            ([1, 2, 3, 4, 40, 41], MatchTier::Four),
            ([1, 2, 3, 40, 41, 42], MatchTier::Three),
        ];

        for (values, tier) in cases {
            let result = VerificationMatcher::match_pair(&ticket(values), &d).unwrap();
            assert_eq!(result.tier, tier);
            assert_eq!(result.numbers.len(), tier.hits());
        }
    }

    #[test]
    fn test_draw_without_winners_is_kept() {
        let t = ticket([5, 14, 23, 29, 37, 41]);
        let losing = draw(1, [1, 2, 3, 4, 6, 7]);
        let winning = draw(2, [5, 14, 23, 30, 31, 32]);

        let outcome = VerificationMatcher::check(&[t], &[losing.clone(), winning.clone()]);

        assert_eq!(outcome.draws.len(), 2);
        assert_eq!(outcome.draws[0].id, losing.id);
        assert!(outcome.draws[0].winners.is_empty());
        assert_eq!(outcome.draws[1].id, winning.id);
        assert_eq!(outcome.draws[1].winners.len(), 1);
    }

    #[test]
    fn test_every_ticket_echoed_once() {
        let tickets = vec![
            ticket([5, 14, 23, 29, 37, 41]),
            ticket([1, 2, 3, 4, 5, 6]),
            ticket([40, 41, 42, 43, 44, 45]),
        ];
        let d = draw(2, [5, 14, 23, 1, 2, 3]);

        let outcome = VerificationMatcher::check(&tickets, &[d]);

        assert_eq!(outcome.tickets.len(), tickets.len());
        for t in &tickets {
            let echoed: Vec<_> = outcome.tickets.iter().filter(|s| s.id == t.id).collect();
            assert_eq!(echoed.len(), 1);
            assert_eq!(echoed[0].numbers, t.numbers);
        }
        assert_eq!(outcome.winner_count(), 2);
    }

    #[test]
    fn test_ticket_can_win_several_draws() {
        let t = ticket([5, 14, 23, 29, 37, 41]);
        let other = ticket([5, 14, 23, 30, 31, 32]);
        let d1 = draw(1, [5, 14, 23, 1, 2, 3]);
        let d2 = draw(4, [29, 37, 41, 1, 2, 3]);

        let outcome = VerificationMatcher::check(&[t.clone(), other.clone()], &[d1, d2]);

        assert_eq!(outcome.wins_for(t.id).count(), 2);
        assert_eq!(outcome.wins_for(other.id).count(), 1);
        assert_eq!(outcome.draws[0].winners.len(), 2);
    }

    #[test]
    fn test_empty_tickets_with_one_draw() {
        let d = draw(2, [3, 14, 23, 31, 37, 48]);

        let outcome = VerificationMatcher::check(&[], &[d]);

        assert!(outcome.tickets.is_empty());
        assert_eq!(outcome.draws.len(), 1);
        assert!(outcome.draws[0].winners.is_empty());
    }

    #[test]
    fn test_empty_draws() {
        let outcome = VerificationMatcher::check(&[ticket([1, 2, 3, 4, 5, 6])], &[]);

        assert_eq!(outcome.tickets.len(), 1);
        assert!(outcome.draws.is_empty());
        assert_eq!(outcome.winner_count(), 0);
    }

    #[test]
    fn test_matched_numbers_subset_of_both() {
        let t = ticket([2, 9, 17, 33, 40, 49]);
        let d = draw(2, [49, 40, 33, 17, 1, 8]);

        let result = VerificationMatcher::match_pair(&t, &d).unwrap();

        assert_eq!(result.numbers, vec![17, 33, 40, 49]);
        assert!(result
            .numbers
            .iter()
            .all(|&n| t.numbers.contains(n) && d.numbers.contains(n)));
    }

    #[test]
    fn test_outcome_json_shape() {
        let t = ticket([5, 14, 23, 29, 37, 41]);
        let d = draw(2, [3, 14, 23, 31, 37, 48]);

        let outcome = VerificationMatcher::check(&[t], &[d]);
        let json = serde_json::to_value(&outcome).unwrap();

        assert!(json["execution_time_ms"].is_f64());
        assert_eq!(json["draws"][0]["variant"], "LOTTO");
        assert_eq!(json["draws"][0]["date"], "2024-03-02");
        assert_eq!(
            json["draws"][0]["winners"][0]["numbers"],
            serde_json::json!([14, 23, 37])
        );
        assert_eq!(json["draws"][0]["winners"][0]["tier"], "three");
        assert_eq!(json["tickets"][0]["group"], serde_json::Value::Null);
    }
}
