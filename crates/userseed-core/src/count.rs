use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CountError;

/// Number of synthetic users to generate. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct UserCount(NonZeroU64);

impl UserCount {
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    /// Parses operator input, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, CountError> {
        let trimmed = input.trim();
        let value: i128 = trimmed
            .parse()
            .map_err(|_| CountError::NotANumber(trimmed.to_string()))?;
        if value <= 0 {
            return Err(CountError::NotPositive(value));
        }
        let value = u64::try_from(value).map_err(|_| CountError::TooLarge(value))?;
        Self::new(value).ok_or(CountError::NotPositive(0))
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl FromStr for UserCount {
    type Err = CountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<u64> for UserCount {
    type Error = CountError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(CountError::NotPositive(0))
    }
}

impl From<UserCount> for u64 {
    fn from(count: UserCount) -> Self {
        count.get()
    }
}

impl fmt::Display for UserCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
