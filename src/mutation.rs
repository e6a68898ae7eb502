//! Keyword-pair rules that rewrite region styles.
//!
//! Matching is a case-insensitive substring test for both keywords of a
//! rule. Rules are independent: one command text can fire any subset.

use crate::content::ContentStore;
use crate::domain::{RegionName, TimestampUtc};
use crate::history::{HistoryEntry, HistoryLog};

/// A single rewrite rule.
#[derive(Debug, Clone, Copy)]
pub struct MutationRule {
    /// Both keywords must occur in the lowercased command text.
    pub keywords: (&'static str, &'static str),
    pub target: RegionName,
    /// Full replacement style token for the target region.
    pub style: &'static str,
    /// Description recorded in the history log.
    pub action: &'static str,
}

impl MutationRule {
    fn matches(&self, lowered: &str) -> bool {
        lowered.contains(self.keywords.0) && lowered.contains(self.keywords.1)
    }
}

pub const MUTATION_RULES: &[MutationRule] = &[
    MutationRule {
        keywords: ("header", "blue"),
        target: RegionName::Header,
        style: "text-3xl font-bold text-blue-600",
        action: "Changed header color to blue",
    },
    MutationRule {
        keywords: ("button", "green"),
        target: RegionName::Button,
        style: "bg-green-600 text-white px-6 py-2 rounded-lg hover:bg-green-700",
        action: "Changed button color to green",
    },
    MutationRule {
        keywords: ("footer", "bold"),
        target: RegionName::Footer,
        style: "text-gray-600 text-sm font-bold",
        action: "Made footer text bold",
    },
];

/// Applies the rule set to a store and records each fired rule in the log.
pub struct MutationEngine<'a> {
    content: &'a mut ContentStore,
    history: &'a mut HistoryLog,
}

impl<'a> MutationEngine<'a> {
    pub fn new(content: &'a mut ContentStore, history: &'a mut HistoryLog) -> Self {
        Self { content, history }
    }

    /// Runs every rule against `command_text`.
    ///
    /// Returns the history entries created, in rule order. An empty result
    /// means nothing matched and nothing changed.
    pub fn apply(&mut self, command_text: &str, now: TimestampUtc) -> Vec<HistoryEntry> {
        let lowered = command_text.to_lowercase();
        let mut created = Vec::new();

        for rule in MUTATION_RULES.iter().filter(|r| r.matches(&lowered)) {
            self.content.set_style(rule.target, rule.style);
            let entry = HistoryEntry::new(rule.action, rule.target, now);
            self.history.push(entry.clone());
            created.push(entry);
        }

        created
    }
}

#[cfg(test)]
#[path = "tests/mutation_tests.rs"]
mod tests;
