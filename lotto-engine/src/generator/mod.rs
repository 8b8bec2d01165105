pub mod coverage;

pub use coverage::{covered_numbers, CoverageSetGenerator, SYSTEM_TICKETS};

use lotto_core::{NumberSet, MAX_NUMBER, MIN_NUMBER, SET_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Count of playable numbers in `MIN_NUMBER..=MAX_NUMBER`
pub const DOMAIN_SIZE: usize = (MAX_NUMBER - MIN_NUMBER + 1) as usize;

/// Trait for number set generators
///
/// The random source is always passed in, so callers decide between a
/// thread-local generator and a seeded one.
pub trait NumberGenerator {
    type Output;

    fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output;

    /// Generate using the calling thread's RNG.
    fn generate(&self) -> Self::Output {
        self.generate_with(&mut rand::thread_rng())
    }
}

/// Uniform draw of six distinct numbers
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSetGenerator;

impl RandomSetGenerator {
    /// Every playable number exactly once, in uniformly random order (Fisher-Yates).
    pub fn shuffled_domain<R: Rng + ?Sized>(rng: &mut R) -> [u8; DOMAIN_SIZE] {
        let mut domain = full_domain();
        domain.shuffle(rng);
        domain
    }

    /// Uniformly pick `N` distinct entries of `pool` without replacement.
    /// Reorders `pool` in the process.
    ///
    /// # Panics
    ///
    /// If `pool` holds fewer than `N` entries.
    pub fn sample<R: Rng + ?Sized, const N: usize>(pool: &mut [u8], rng: &mut R) -> [u8; N] {
        assert!(pool.len() >= N, "pool of {} cannot yield {}", pool.len(), N);
        let (chosen, _) = pool.partial_shuffle(rng, N);
        let mut picked = [0u8; N];
        picked.copy_from_slice(chosen);
        picked
    }
}

impl NumberGenerator for RandomSetGenerator {
    type Output = NumberSet;

    fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> NumberSet {
        let mut domain = full_domain();
        let picked: [u8; SET_SIZE] = Self::sample(&mut domain, rng);
        let set = NumberSet::from_distinct(picked);

        tracing::debug!("Generated random set: {}", set);
        set
    }
}

fn full_domain() -> [u8; DOMAIN_SIZE] {
    std::array::from_fn(|i| MIN_NUMBER + i as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_set_invariants() {
        for seed in 0..1000 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let set = RandomSetGenerator.generate_with(&mut rng);
            let numbers = set.as_slice();

            assert_eq!(numbers.len(), SET_SIZE);
            assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{:?}", numbers);
            assert!(numbers
                .iter()
                .all(|&n| (MIN_NUMBER..=MAX_NUMBER).contains(&n)));
        }
    }

    #[test]
    fn test_reproducible_with_seed() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(
                RandomSetGenerator.generate_with(&mut rng1),
                RandomSetGenerator.generate_with(&mut rng2)
            );
        }
    }

    #[test]
    fn test_calls_are_independent() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let sets: Vec<NumberSet> = (0..50)
            .map(|_| RandomSetGenerator.generate_with(&mut rng))
            .collect();

        let first = sets[0];
        assert!(sets.iter().any(|s| *s != first));
    }

    #[test]
    fn test_every_number_is_drawn_roughly_uniformly() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut counts = [0u32; DOMAIN_SIZE];

        for _ in 0..10_000 {
            for n in RandomSetGenerator.generate_with(&mut rng).iter() {
                counts[(n - MIN_NUMBER) as usize] += 1;
            }
        }

        // expected ~1224 per number
        for (i, &count) in counts.iter().enumerate() {
            assert!(
                (1000..1450).contains(&count),
                "number {} drawn {} times",
                i + 1,
                count
            );
        }
    }

    #[test]
    fn test_shuffled_domain_is_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut domain = RandomSetGenerator::shuffled_domain(&mut rng);
        assert_ne!(domain, full_domain());

        domain.sort_unstable();
        assert_eq!(domain, full_domain());
    }

    #[test]
    fn test_sample_draws_from_pool_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut pool = [10u8, 20, 30, 40, 45, 46, 47];

        let picked: [u8; 5] = RandomSetGenerator::sample(&mut pool, &mut rng);
        let mut sorted = picked;
        sorted.sort_unstable();

        assert!(sorted.windows(2).all(|w| w[0] < w[1]));
        assert!(picked
            .iter()
            .all(|n| [10u8, 20, 30, 40, 45, 46, 47].contains(n)));
    }

    #[test]
    #[should_panic(expected = "pool of 3 cannot yield 6")]
    fn test_sample_rejects_short_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut pool = [1u8, 2, 3];
        let _: [u8; 6] = RandomSetGenerator::sample(&mut pool, &mut rng);
    }

    #[test]
    fn test_thread_rng_is_safe_across_threads() {
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        (0..100)
                            .map(|_| RandomSetGenerator.generate())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            for handle in handles {
                let sets = handle.join().unwrap();
                assert_eq!(sets.len(), 100);
            }
        });
    }
}
