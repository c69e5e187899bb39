//! Configuration for a message provider.

use serde::{Deserialize, Serialize};

use crate::error::MessageResult;

/// Configuration for a [`Messages`](crate::Messages) provider.
///
/// Only the RNG seed is configurable; the tips themselves are fixed.
/// Parsed from JSON such as `{ "seed": 7 }`. Unknown fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessagesConfig {
    /// RNG seed for reproducible tips. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl MessagesConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> MessageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
