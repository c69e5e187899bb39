//! Message provider with a fixed greeting and random tips.
//!
//! [`Messages`] returns the constant greeting `"Hello, world!"` and picks
//! one of four fixed tips uniformly at random. Each provider owns its own
//! generator, so it can be shared across threads.

pub mod config;
pub mod error;
pub mod provider;
pub mod tables;

pub use config::MessagesConfig;
pub use error::{MessageError, MessageResult};
pub use provider::Messages;
pub use tables::{GREETING, TIPS};
