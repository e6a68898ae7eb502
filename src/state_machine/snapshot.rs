//! Read-only snapshot of session state for display.
//!
//! Renderers NEVER mutate this; they receive new snapshots via watch channel.

use crate::content::ContentStore;
use crate::history::HistoryEntry;
use crate::ledger::{CommandEntry, StageKind};
use crate::state::EditorState;

#[derive(Debug, Clone)]
pub struct EditorSnapshot {
    /// Current page content
    pub content: ContentStore,
    /// Applied edits, newest first
    pub history: Vec<HistoryEntry>,
    /// Submitted commands, newest first
    pub commands: Vec<CommandEntry>,
    /// Whether the submission gate is closed
    pub processing: bool,
    /// Stage of the in-flight command that is currently processing
    pub active_stage: Option<StageKind>,
    pub can_undo: bool,
    /// Always false; redo is not supported
    pub can_redo: bool,
}

impl EditorSnapshot {
    /// The most recent command, whose stages the workflow panel shows.
    pub fn latest_command(&self) -> Option<&CommandEntry> {
        self.commands.first()
    }
}

impl From<&EditorState> for EditorSnapshot {
    fn from(state: &EditorState) -> Self {
        Self {
            content: state.content().clone(),
            history: state.history().iter().cloned().collect(),
            commands: state.ledger().list().to_vec(),
            processing: state.is_processing(),
            active_stage: state
                .in_flight_command()
                .and_then(|c| c.active_stage())
                .map(|s| s.kind),
            can_undo: !state.history().is_empty(),
            can_redo: false,
        }
    }
}
