//! Events emitted by the state machine after processing commands.
//!
//! Events are logged and broadcast to subscribers so callers can follow
//! stage transitions as they happen. Display state comes from the
//! snapshot watch channel.

use crate::domain::CommandId;
use crate::history::HistoryEntry;
use crate::ledger::StageKind;
use serde::Serialize;

/// Why a submission did not create a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Text was empty or whitespace only.
    Empty,
    /// Another command is still progressing.
    Busy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// A command entered the ledger and closed the submission gate
    CommandAccepted { command_id: CommandId, text: String },
    /// A submission was dropped
    SubmissionRejected { reason: RejectReason },
    StageStarted {
        command_id: CommandId,
        index: usize,
        stage: StageKind,
    },
    /// One mutation rule fired
    EditApplied {
        command_id: CommandId,
        entry: HistoryEntry,
    },
    StageCompleted {
        command_id: CommandId,
        index: usize,
        stage: StageKind,
        duration_ms: u64,
    },
    /// All four stages completed; the submission gate is open again
    CommandCompleted { command_id: CommandId },
    /// Content was reset and the newest history entry removed
    UndoApplied { entry: HistoryEntry },
    NothingToUndo,
    RedoRejected,
}
