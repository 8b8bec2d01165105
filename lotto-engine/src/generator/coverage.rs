//! "System" generation: nine tickets that together cover every playable number.
//!
//! A random permutation of `1..=49` is cut into eight disjoint tickets of six,
//! which covers 48 numbers. The 49th number opens the ninth ticket and the
//! remaining five slots are sampled from the other 48, so repeats across
//! tickets are possible but never within one ticket.

use super::{NumberGenerator, RandomSetGenerator, DOMAIN_SIZE};
use lotto_core::{NumberSet, SET_SIZE};
use rand::Rng;
use std::collections::BTreeSet;

/// Tickets produced by one system generation
pub const SYSTEM_TICKETS: usize = 9;

/// Tickets cut straight from the permutation
const FULL_GROUPS: usize = DOMAIN_SIZE / SET_SIZE;

// 8 full groups + 1 leftover number must be exactly the domain, and the
// leftover plus its filler must make up the last ticket.
const _: () = assert!(FULL_GROUPS * SET_SIZE + 1 == DOMAIN_SIZE);
const _: () = assert!(FULL_GROUPS + 1 == SYSTEM_TICKETS);

#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageSetGenerator;

impl NumberGenerator for CoverageSetGenerator {
    type Output = [NumberSet; SYSTEM_TICKETS];

    fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output {
        let permutation = RandomSetGenerator::shuffled_domain(rng);
        let (grouped, rest) = permutation.split_at(FULL_GROUPS * SET_SIZE);
        let leftover = rest[0];

        // Filler for the last ticket comes from everything except the leftover
        let mut others = grouped.to_vec();
        let filler: [u8; SET_SIZE - 1] = RandomSetGenerator::sample(&mut others, rng);

        let mut last = [leftover; SET_SIZE];
        last[1..].copy_from_slice(&filler);

        let tickets: [NumberSet; SYSTEM_TICKETS] = std::array::from_fn(|i| {
            if i < FULL_GROUPS {
                let mut group = [0u8; SET_SIZE];
                group.copy_from_slice(&grouped[i * SET_SIZE..(i + 1) * SET_SIZE]);
                NumberSet::from_distinct(group)
            } else {
                NumberSet::from_distinct(last)
            }
        });

        tracing::debug!(
            "Generated {} system tickets, leftover {} completed with {:?}",
            SYSTEM_TICKETS,
            leftover,
            filler
        );
        tickets
    }
}

/// Distinct numbers appearing in any of the given sets.
pub fn covered_numbers(sets: &[NumberSet]) -> BTreeSet<u8> {
    sets.iter().flat_map(|set| set.iter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotto_core::{MAX_NUMBER, MIN_NUMBER};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    fn generate(seed: u64) -> [NumberSet; SYSTEM_TICKETS] {
        CoverageSetGenerator.generate_with(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_every_set_valid_and_coverage_complete() {
        let domain: BTreeSet<u8> = (MIN_NUMBER..=MAX_NUMBER).collect();

        for seed in 0..1000 {
            let tickets = generate(seed);
            assert_eq!(tickets.len(), SYSTEM_TICKETS);

            for set in &tickets {
                assert_eq!(
                    NumberSet::from_slice(set.as_slice()),
                    Ok(*set),
                    "seed {}",
                    seed
                );
                assert!(set.as_slice().windows(2).all(|w| w[0] < w[1]));
            }

            assert_eq!(covered_numbers(&tickets), domain, "seed {}", seed);
        }
    }

    #[test]
    fn test_union_sums_to_1225() {
        let tickets = generate(5);
        let union = covered_numbers(&tickets);

        assert_eq!(union.len(), 49);
        assert_eq!(union.iter().map(|&n| u32::from(n)).sum::<u32>(), 1225);
    }

    #[test]
    fn test_exactly_five_repeats_outside_last_ticket() {
        for seed in 0..200 {
            let tickets = generate(seed);

            let mut occurrences: HashMap<u8, usize> = HashMap::new();
            for n in tickets.iter().flat_map(|t| t.iter()) {
                *occurrences.entry(n).or_default() += 1;
            }

            let extra: usize = occurrences.values().map(|&c| c - 1).sum();
            assert_eq!(extra, SYSTEM_TICKETS * SET_SIZE - DOMAIN_SIZE);

            // the first eight tickets never share a number
            let first_eight = covered_numbers(&tickets[..FULL_GROUPS]);
            assert_eq!(first_eight.len(), FULL_GROUPS * SET_SIZE);
        }
    }

    #[test]
    fn test_tickets_are_pairwise_distinct() {
        for seed in 0..200 {
            let tickets = generate(seed);
            let unique: BTreeSet<NumberSet> = tickets.iter().copied().collect();
            assert_eq!(unique.len(), SYSTEM_TICKETS, "seed {}", seed);
        }
    }

    #[test]
    fn test_independent_calls_differ() {
        assert_eq!(generate(99), generate(99));
        assert_ne!(generate(1), generate(2));

        let a = CoverageSetGenerator.generate();
        let b = CoverageSetGenerator.generate();
        assert_ne!(a, b);
    }
}
