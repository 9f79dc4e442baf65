//! JSON wire format for movie runtimes
//!
//! Runtimes travel as the JSON string `"<minutes> mins"` rather than a bare
//! number, so the type carries manual `Serialize`/`Deserialize` impls backed
//! by `Display` and `FromStr`.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Movie runtime in minutes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Runtime(pub i32);

impl Runtime {
    /// Runtime length in minutes
    #[must_use]
    pub fn minutes(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mins", self.0)
    }
}

impl FromStr for Runtime {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exactly two tokens: the minute count and the literal unit.
        let (minutes, unit) = s.split_once(' ').ok_or(CoreError::InvalidRuntimeFormat)?;
        if unit != "mins" {
            return Err(CoreError::InvalidRuntimeFormat);
        }
        let minutes = minutes
            .parse::<i32>()
            .map_err(|_| CoreError::InvalidRuntimeFormat)?;
        Ok(Runtime(minutes))
    }
}

impl Serialize for Runtime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Runtime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(DeError::custom)
    }
}
