//! Six distinct lottery numbers, always kept in ascending order.
//!
//! All validation and sorting happens in the constructors, so anything holding a
//! [`NumberSet`] can rely on its invariants without checking again.

use crate::error::NumberSetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest playable number
pub const MIN_NUMBER: u8 = 1;
/// Highest playable number
pub const MAX_NUMBER: u8 = 49;
/// Numbers per ticket or draw
pub const SET_SIZE: usize = 6;

/// Exactly six distinct numbers in `1..=49`, sorted ascending.
///
/// Because the representation is canonical, derived equality and hashing are
/// set equality regardless of the order the numbers were supplied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u8>")]
pub struct NumberSet([u8; SET_SIZE]);

impl NumberSet {
    pub fn new(values: [u8; SET_SIZE]) -> Result<Self, NumberSetError> {
        Self::from_slice(&values)
    }

    pub fn from_slice(values: &[u8]) -> Result<Self, NumberSetError> {
        let wide: Vec<u32> = values.iter().map(|&v| u32::from(v)).collect();
        Self::validate(&wide)
    }

    /// Build a set from values already known to be distinct and in range, such
    /// as six slots of a shuffled `1..=49` permutation.
    ///
    /// # Panics
    ///
    /// If the values are out of range or repeat.
    pub fn from_distinct(mut values: [u8; SET_SIZE]) -> Self {
        values.sort_unstable();
        assert!(
            values[0] >= MIN_NUMBER
                && values[SET_SIZE - 1] <= MAX_NUMBER
                && values.windows(2).all(|w| w[0] < w[1]),
            "invalid number set: {values:?}"
        );
        Self(values)
    }

    fn validate(values: &[u32]) -> Result<Self, NumberSetError> {
        if values.len() != SET_SIZE {
            return Err(NumberSetError::WrongLength(values.len()));
        }

        let mut numbers = [0u8; SET_SIZE];
        for (slot, &value) in numbers.iter_mut().zip(values) {
            if value < u32::from(MIN_NUMBER) || value > u32::from(MAX_NUMBER) {
                return Err(NumberSetError::OutOfRange(value));
            }
            *slot = value as u8;
        }

        numbers.sort_unstable();
        if let Some(pair) = numbers.windows(2).find(|w| w[0] == w[1]) {
            return Err(NumberSetError::Duplicate(pair[0]));
        }

        Ok(Self(numbers))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, number: u8) -> bool {
        self.0.binary_search(&number).is_ok()
    }

    /// Numbers present in both sets, ascending.
    pub fn intersection(&self, other: &NumberSet) -> Vec<u8> {
        let (mut i, mut j) = (0, 0);
        let mut common = Vec::with_capacity(SET_SIZE);

        while i < SET_SIZE && j < SET_SIZE {
            match self.0[i].cmp(&other.0[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    common.push(self.0[i]);
                    i += 1;
                    j += 1;
                }
            }
        }

        common
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&n| u32::from(n)).sum()
    }
}

impl TryFrom<Vec<u32>> for NumberSet {
    type Error = NumberSetError;

    fn try_from(values: Vec<u32>) -> Result<Self, Self::Error> {
        Self::validate(&values)
    }
}

impl TryFrom<&[u8]> for NumberSet {
    type Error = NumberSetError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl From<NumberSet> for Vec<u8> {
    fn from(set: NumberSet) -> Self {
        set.0.to_vec()
    }
}

impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

/// Accepts numbers separated by commas and/or whitespace, e.g. `"5,14, 23 29,37,41"`.
impl FromStr for NumberSet {
    type Err = NumberSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| NumberSetError::Parse(format!("'{}' is not a number", part)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::validate(&values)
    }
}
