//! Messaging system for Sketchpot.
//!
//! Provides:
//! - [`Message`] types for workspace-UI communication
//! - [`MessageBus`] for broadcasting notices to frontends

mod bus;
mod types;

pub use bus::{BusError, MessageBus, MessageReceiver, MessageSender};
pub use types::*;
