//! Events consumed by the application loop.

use super::command::Command;
use crate::generation::GenerationOutcome;

/// Application events
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// User command from the frontend
    Command(Command),
    /// A spawned generation finished its delay and remote call
    GenerationFinished(GenerationOutcome),
}

impl From<Command> for AppEvent {
    fn from(command: Command) -> Self {
        Self::Command(command)
    }
}
