use rand::{Rng, random};

/// Multiplier of the seeded generator's recurrence.
const LCG_MULTIPLIER: u64 = 1_103_515_245;
/// Increment of the seeded generator's recurrence.
const LCG_INCREMENT: u64 = 12_345;
/// Every state of the seeded generator lies in `0..LCG_MODULUS`.
const LCG_MODULUS: u64 = i32::MAX as u64;
/// Seed used by [`CustomNumberGenerator::default`].
const DEFAULT_SEED: i64 = 3_819_201;

/// A source of random numbers for the randomised strategies.
pub trait RandomGenerator: Default {
    /// Returns the next non-negative number.
    fn next(&mut self) -> i32;

    /// Returns a number in `from..to`, or `from` when the range is empty.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks one item of `items`, or `None` if it is empty.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        let len = i32::try_from(items.len()).unwrap_or(i32::MAX);
        items.get(self.next_range(0, len) as usize)
    }
}

/// Draws from the thread-local generator of `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        random::<i32>().saturating_abs()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        if to <= from {
            return from;
        }
        rand::rng().random_range(from..to)
    }
}

/// A seeded linear congruential generator.
///
/// The same seed always yields the same numbers, which keeps games between
/// randomised strategies reproducible. Any `i64` is a valid seed: it is
/// reduced into the generator's state range first, so seeds that differ by a
/// multiple of `i32::MAX` give the same sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomNumberGenerator {
    state: u64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        // state < 2^31 and the multiplier < 2^31, so the product fits in a u64.
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        if to <= from {
            return from;
        }
        let span = i64::from(to) - i64::from(from);
        let offset = i64::from(self.next()).rem_euclid(span);
        (i64::from(from) + offset) as i32
    }
}

impl CustomNumberGenerator {
    /// Makes a generator starting from `seed`.
    pub const fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(LCG_MODULUS as i64) as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(random: &mut impl RandomGenerator, count: usize, to: i32) -> Vec<i32> {
        (0..count).map(|_| random.next_range(0, to)).collect()
    }

    #[test]
    fn seeded_sequence_is_stable() {
        let mut random = CustomNumberGenerator::new(42);
        assert_eq!(draws(&mut random, 5, 10), vec![8, 4, 1, 2, 4]);
    }

    #[test]
    fn negative_seed_wraps_into_range() {
        // arrange
        let mut negative = CustomNumberGenerator::new(-5);
        let mut wrapped = CustomNumberGenerator::new(i32::MAX as i64 - 5);

        // act
        let from_negative: Vec<i32> = (0..20).map(|_| negative.next()).collect();
        let from_wrapped: Vec<i32> = (0..20).map(|_| wrapped.next()).collect();

        // assert
        assert!(from_negative.iter().all(|n| *n >= 0));
        assert_eq!(from_negative, from_wrapped);
    }

    #[test]
    fn extreme_seeds_do_not_overflow() {
        for seed in [i64::MAX, i64::MAX / 2, i64::MIN, i64::MIN + 1, -1] {
            let mut random = CustomNumberGenerator::new(seed);
            for _ in 0..100 {
                assert!(random.next() >= 0, "seed {seed}");
                assert!((3..7).contains(&random.next_range(3, 7)), "seed {seed}");
            }
        }
    }

    #[test]
    fn empty_range_yields_its_start() {
        let mut seeded = CustomNumberGenerator::default();
        assert_eq!(seeded.next_range(4, 4), 4);
        assert_eq!(seeded.next_range(9, 2), 9);
        let mut standard = StandardRandomGenerator;
        assert_eq!(standard.next_range(4, 4), 4);
    }

    #[test]
    fn range_may_start_below_zero() {
        let mut random = CustomNumberGenerator::new(11);
        for _ in 0..50 {
            assert!((-3..3).contains(&random.next_range(-3, 3)));
        }
    }

    #[test]
    fn choose_follows_the_sequence() {
        let cells = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        let mut crg = CustomNumberGenerator::default();
        assert_eq!(crg.choose(&cells), Some(&4));
        assert_eq!(crg.choose(&cells), Some(&1));
        assert_eq!(crg.choose(&cells), Some(&3));
        assert_eq!(crg.choose(&cells), Some(&1));
    }

    #[test]
    fn choose_from_nothing() {
        let mut crg = CustomNumberGenerator::default();
        assert_eq!(crg.choose::<u8>(&[]), None);
        let mut standard = StandardRandomGenerator;
        assert_eq!(standard.choose::<u8>(&[]), None);
    }

    #[test]
    fn standard_range_is_respected() {
        let mut standard = StandardRandomGenerator;
        for _ in 0..100 {
            let n = standard.next_range(3, 7);
            assert!((3..7).contains(&n));
            assert!(standard.next() >= 0);
        }
    }
}
