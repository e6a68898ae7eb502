//! Commands that can mutate session state.
//!
//! All state changes MUST go through the state machine's `apply()` method.

use crate::domain::CommandId;
use serde::Serialize;

/// Commands that can mutate session state.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    // User actions
    /// Submit free-form command text. Rejected when blank or while busy.
    Submit { text: String },
    /// Reset the page to defaults and drop the newest history entry.
    Undo,
    /// Declared but permanently disabled.
    Redo,

    // Stage progression, issued by the stage runner
    /// Move stage `index` from pending to processing.
    StartStage { command_id: CommandId, index: usize },
    /// Run the mutation rules against the command text. Only valid while
    /// the execute stage is processing.
    ApplyEdits { command_id: CommandId },
    /// Move stage `index` from processing to completed.
    CompleteStage {
        command_id: CommandId,
        index: usize,
        duration_ms: u64,
    },
    /// Mark the command completed and reopen the submission gate.
    FinishCommand { command_id: CommandId },
}
