use std::{ops::Deref, str::FromStr};

use serde::Deserialize;

/// A duration written as whitespace separated parts like `"1m 30s"`.
///
/// Supported units are `ms`, `s`, `m`, `h` and `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDuration(String);

impl std::fmt::Display for InvalidDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid duration part {:?}", self.0)
    }
}

impl std::error::Error for InvalidDuration {}

impl FromStr for Duration {
    type Err = InvalidDuration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .try_fold(std::time::Duration::ZERO, |acc, part| {
                let invalid = || InvalidDuration(part.into());
                let split = part
                    .find(|c: char| !c.is_ascii_digit())
                    .ok_or_else(invalid)?;
                let (value, unit) = part.split_at(split);
                let value = value.parse::<u64>().map_err(|_| invalid())?;
                let part = match unit {
                    "ms" => Some(std::time::Duration::from_millis(value)),
                    "s" => Some(std::time::Duration::from_secs(value)),
                    "m" => value.checked_mul(60).map(std::time::Duration::from_secs),
                    "h" => value.checked_mul(60 * 60).map(std::time::Duration::from_secs),
                    "d" => value
                        .checked_mul(24 * 60 * 60)
                        .map(std::time::Duration::from_secs),
                    _ => None,
                };
                part.and_then(|part| acc.checked_add(part)).ok_or_else(invalid)
            })
            .map(Self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
