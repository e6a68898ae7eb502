//! Session state owned by the editor state machine.

use crate::content::ContentStore;
use crate::domain::CommandId;
use crate::history::HistoryLog;
use crate::ledger::{CommandEntry, CommandLedger};

/// Everything one editing session holds: page content, edit history,
/// the command ledger and the processing gate.
///
/// Only `EditorStateMachine` mutates this.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub(crate) content: ContentStore,
    pub(crate) history: HistoryLog,
    pub(crate) ledger: CommandLedger,
    /// The command currently progressing through its stages. `Some` closes
    /// the submission gate.
    pub(crate) in_flight: Option<CommandId>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn ledger(&self) -> &CommandLedger {
        &self.ledger
    }

    pub fn is_processing(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight_command(&self) -> Option<&CommandEntry> {
        self.in_flight.and_then(|id| self.ledger.get(id))
    }
}
