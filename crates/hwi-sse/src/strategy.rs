//! Add strategy selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::detect;
use crate::error::SseError;

/// How each 4-lane chunk is added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddStrategy {
    /// One hardware vector add per chunk.
    #[serde(rename = "use-accelerated")]
    Accelerated,
    /// Plain per-lane float addition.
    #[serde(rename = "use-scalar-fallback")]
    ScalarFallback,
}

impl AddStrategy {
    /// Pick `Accelerated` when the host supports it, `ScalarFallback`
    /// otherwise.
    pub fn detect() -> Self {
        if detect::is_supported() {
            Self::Accelerated
        } else {
            Self::ScalarFallback
        }
    }

    /// Get the configuration name of this strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Accelerated => "use-accelerated",
            Self::ScalarFallback => "use-scalar-fallback",
        }
    }
}

impl Default for AddStrategy {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Display for AddStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AddStrategy {
    type Err = SseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "use-accelerated" => Ok(Self::Accelerated),
            "use-scalar-fallback" => Ok(Self::ScalarFallback),
            _ => Err(SseError::UnknownStrategy(s.to_string())),
        }
    }
}
