//! Polling agent that relays homework review status changes to a chat.
//!
//! # Overview
//! `Poller` asks the homework-status endpoint for changes since its cursor,
//! validates the answer with `homework_core`, and sends the first change to
//! Telegram through `Notifier`. Every failure inside a cycle is reported to
//! the same chat and the cycle is retried after a fixed interval.
//!
//! # Design
//! - Request building, parsing and validation live in `homework_core`; this
//!   crate only executes requests through the `Transport` trait.
//! - Everything runs on one thread with blocking I/O and `thread::sleep`.
//! - Configuration is an explicit `Config` value; nothing is read from the
//!   environment after startup.

pub mod config;
pub mod error;
pub mod logging;
pub mod notifier;
pub mod poller;
pub mod transport;

#[cfg(test)]
mod test_helpers;

pub use config::Config;
pub use error::{ConfigError, DeliveryError, PollError, TransportError};
pub use notifier::Notifier;
pub use poller::{CycleOutcome, Poller};
pub use transport::{Transport, UreqTransport};
