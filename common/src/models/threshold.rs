use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Minimum number of failures an address needs to make the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(u64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(10);

    /// Negative values clamp to zero.
    pub fn new(raw: i64) -> Self {
        Self(raw.max(0).unsigned_abs())
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn admits(self, count: u64) -> bool {
        count >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u64> for Threshold {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Threshold {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Threshold::new)
    }
}
