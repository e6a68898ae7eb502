//! Append-only log of applied edits, newest first.

use crate::domain::{EditId, RegionName, TimestampUtc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One applied edit. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: EditId,
    pub action: String,
    pub target: RegionName,
    pub timestamp: TimestampUtc,
    pub undoable: bool,
}

impl HistoryEntry {
    pub fn new(action: &str, target: RegionName, timestamp: TimestampUtc) -> Self {
        Self {
            id: EditId::new(),
            action: action.to_string(),
            target,
            timestamp,
            undoable: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    /// Records an edit as the most recent entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
    }

    /// Removes and returns the most recent entry, if any.
    pub fn pop_latest(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_front()
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_comes_first() {
        let mut log = HistoryLog::default();
        log.push(HistoryEntry::new("first", RegionName::Header, TimestampUtc::now()));
        log.push(HistoryEntry::new("second", RegionName::Footer, TimestampUtc::now()));

        let actions: Vec<&str> = log.iter().map(|e| e.action.as_str()).collect();
        assert_eq!(actions, vec!["second", "first"]);
        assert_eq!(log.latest().map(|e| e.target), Some(RegionName::Footer));
    }

    #[test]
    fn pop_latest_removes_one_entry() {
        let mut log = HistoryLog::default();
        log.push(HistoryEntry::new("first", RegionName::Header, TimestampUtc::now()));
        log.push(HistoryEntry::new("second", RegionName::Button, TimestampUtc::now()));

        let popped = log.pop_latest().expect("entry");
        assert_eq!(popped.action, "second");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn pop_on_empty_log_is_none() {
        let mut log = HistoryLog::default();
        assert!(log.pop_latest().is_none());
        assert!(log.is_empty());
    }
}
