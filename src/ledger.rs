//! Submitted commands and their per-stage progress.

use crate::domain::{CommandId, TimestampUtc};
use serde::{Deserialize, Serialize};

/// The four pipeline stages every command passes through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Parse,
    Route,
    Execute,
    Log,
}

impl StageKind {
    pub const ALL: [StageKind; 4] = [
        StageKind::Parse,
        StageKind::Route,
        StageKind::Execute,
        StageKind::Log,
    ];

    /// Display name of the agent that owns the stage.
    pub fn display_name(&self) -> &'static str {
        match self {
            StageKind::Parse => "NL Command Parser",
            StageKind::Route => "RAG Tool Router",
            StageKind::Execute => "Change Executor",
            StageKind::Log => "Memory Agent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StageKind::Parse => "Parsing natural language command",
            StageKind::Route => "Routing to appropriate editing tool",
            StageKind::Execute => "Applying changes to website",
            StageKind::Log => "Logging changes for undo/redo",
        }
    }
}

/// Index of the stage during which edits are applied.
pub const EXECUTE_STAGE_INDEX: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Pending,
    Processing,
    Completed,
    /// Representable but never produced by the current stage policy.
    Error,
}

impl StageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Pending => "pending",
            StageStatus::Processing => "processing",
            StageStatus::Completed => "completed",
            StageStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Processing,
    Completed,
    /// Representable but never produced by the current stage policy.
    Error,
}

impl CommandStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandStatus::Processing => "processing",
            CommandStatus::Completed => "completed",
            CommandStatus::Error => "error",
        }
    }
}

/// Progress of one stage within one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStage {
    pub kind: StageKind,
    pub status: StageStatus,
    /// Cosmetic duration shown once the stage completes.
    pub duration_ms: Option<u64>,
}

impl AgentStage {
    fn pending(kind: StageKind) -> Self {
        Self {
            kind,
            status: StageStatus::Pending,
            duration_ms: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    pub id: CommandId,
    pub text: String,
    pub timestamp: TimestampUtc,
    pub status: CommandStatus,
    pub stages: Vec<AgentStage>,
}

impl CommandEntry {
    /// A fresh entry with all four stages pending.
    pub fn new(text: &str, timestamp: TimestampUtc) -> Self {
        Self {
            id: CommandId::new(),
            text: text.to_string(),
            timestamp,
            status: CommandStatus::Processing,
            stages: StageKind::ALL.into_iter().map(AgentStage::pending).collect(),
        }
    }

    /// Index of the first stage that has not completed yet.
    pub fn next_stage_index(&self) -> Option<usize> {
        self.stages
            .iter()
            .position(|s| s.status != StageStatus::Completed)
    }

    pub fn all_stages_completed(&self) -> bool {
        self.next_stage_index().is_none()
    }

    /// The stage currently processing, if any.
    pub fn active_stage(&self) -> Option<&AgentStage> {
        self.stages
            .iter()
            .find(|s| s.status == StageStatus::Processing)
    }
}

/// Submitted commands, newest first.
#[derive(Debug, Clone, Default)]
pub struct CommandLedger {
    entries: Vec<CommandEntry>,
}

impl CommandLedger {
    /// Tracks a new entry at the front of the ledger.
    pub fn submit(&mut self, entry: CommandEntry) -> &CommandEntry {
        self.entries.insert(0, entry);
        &self.entries[0]
    }

    pub fn get(&self, id: CommandId) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: CommandId) -> Option<&mut CommandEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Entries newest first.
    pub fn list(&self) -> &[CommandEntry] {
        &self.entries
    }
}
