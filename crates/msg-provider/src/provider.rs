//! The message provider.

use std::sync::{Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::MessagesConfig;
use crate::tables::{self, GREETING};

/// Provides the fixed greeting and random tips.
///
/// Each provider owns its generator behind a mutex, so a shared provider
/// can be called from several threads at once.
#[derive(Debug)]
pub struct Messages {
    rng: Mutex<StdRng>,
}

impl Messages {
    /// Create a provider with an OS-seeded generator.
    pub fn new() -> Self {
        Self::with_config(MessagesConfig::default())
    }

    /// Create a provider from a config.
    pub fn with_config(config: MessagesConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        tracing::debug!(seed = ?config.seed, "message provider created");
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// The fixed greeting, always `"Hello, world!"`.
    pub fn fixed_greeting(&self) -> &'static str {
        GREETING
    }

    /// Pick one of the four tips uniformly at random using the provider's generator.
    pub fn random_tip(&self) -> &'static str {
        // a panic mid-pick leaves the generator usable
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.random_tip_with(&mut rng)
    }

    /// Pick one of the four tips uniformly at random using the caller's generator.
    pub fn random_tip_with(&self, rng: &mut StdRng) -> &'static str {
        let tip = tables::random_tip(rng);
        tracing::trace!(tip, "picked tip");
        tip
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new()
    }
}
