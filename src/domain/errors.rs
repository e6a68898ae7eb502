//! Error types for the editor session.

use std::fmt::{Display, Formatter};

/// Errors returned when a session command violates the stage ordering.
///
/// Guarded user actions (empty submit, submit while busy, undo on empty
/// history) are not errors; they surface as events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Invalid stage or command transition attempted.
    InvalidTransition { message: String },
    /// The command is not in the ledger.
    UnknownCommand { command_id: String },
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { message } => write!(f, "invalid transition: {}", message),
            Self::UnknownCommand { command_id } => write!(f, "unknown command: {}", command_id),
        }
    }
}

impl std::error::Error for EditorError {}
