//! Strongly typed domain primitives for the editor session.
//!
//! These newtypes keep command identifiers, edit identifiers and region
//! names from being mixed up as the session passes them between the
//! ledger, the history log and the structured logger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a submitted command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandId(pub Uuid);

impl CommandId {
    /// Creates a new random command ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, for compact display.
    pub fn short(&self) -> String {
        self.0.simple().to_string().chars().take(8).collect()
    }
}

impl Default for CommandId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an applied edit in the history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditId(pub Uuid);

impl EditId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EditId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EditId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three editable regions of the previewed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionName {
    Header,
    Button,
    Footer,
}

impl RegionName {
    /// All regions in display order.
    pub const ALL: [RegionName; 3] = [RegionName::Header, RegionName::Button, RegionName::Footer];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionName::Header => "header",
            RegionName::Button => "button",
            RegionName::Footer => "footer",
        }
    }
}

impl std::fmt::Display for RegionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UTC timestamp wrapper for domain events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimestampUtc(pub DateTime<Utc>);

impl TimestampUtc {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Local wall-clock time, as shown next to history entries.
    pub fn local_time(&self) -> String {
        self.0
            .with_timezone(&chrono::Local)
            .format("%H:%M:%S")
            .to_string()
    }
}

impl Default for TimestampUtc {
    fn default() -> Self {
        Self::now()
    }
}
