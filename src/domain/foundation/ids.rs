//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a brainstorming session.
///
/// Ids are positive integers allocated by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(i32);

impl SessionId {
    /// Creates a SessionId from a raw integer.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for SessionId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
