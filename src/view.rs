//! Text projections of a session snapshot.
//!
//! Everything here reads a snapshot and returns strings; nothing renders
//! back into session state.

use crate::content::ContentStore;
use crate::ledger::{CommandStatus, StageStatus};
use crate::state_machine::{EditorSnapshot, RejectReason, SessionEvent};
use crossterm::style::{Color, Stylize};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Column width for stage names.
const NAME_COLUMN: usize = 18;

/// Longest command text shown in the command list.
const COMMAND_PREVIEW_LEN: usize = 48;

fn stage_color(status: StageStatus) -> Color {
    match status {
        StageStatus::Completed => Color::Green,
        StageStatus::Processing => Color::Blue,
        StageStatus::Error => Color::Red,
        StageStatus::Pending => Color::DarkGrey,
    }
}

fn command_color(status: CommandStatus) -> Color {
    match status {
        CommandStatus::Completed => Color::Green,
        CommandStatus::Processing => Color::Blue,
        CommandStatus::Error => Color::Red,
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}

pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    let cleaned = text.replace('\n', " ");
    if cleaned.chars().count() <= max_chars {
        return cleaned;
    }
    let mut out: String = cleaned.chars().take(max_chars.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn title(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// The page as it currently looks: each region's text and style token.
    pub fn preview(&self, content: &ContentStore) -> String {
        let mut out = self.title("Live Website Preview");
        if content.is_default() {
            out.push_str(" (default styles)");
        }
        out.push('\n');
        for (name, region) in content.regions() {
            let _ = writeln!(
                out,
                "  {} {}",
                pad(&format!("[{}]", name), 9),
                region.text
            );
            let _ = writeln!(out, "            {}", self.paint(&region.style, Color::DarkGrey));
        }
        out
    }

    /// Stages of the most recent command.
    pub fn workflow(&self, snapshot: &EditorSnapshot) -> String {
        let mut out = self.title("Agent Workflow");
        out.push('\n');
        let Some(command) = snapshot.latest_command() else {
            out.push_str("  No commands yet\n");
            return out;
        };
        for stage in &command.stages {
            let duration = stage
                .duration_ms
                .map(|ms| format!(" {}ms", ms))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "  {} {}  {}{}",
                pad(stage.name(), NAME_COLUMN),
                self.paint(&pad(stage.status.as_str(), 10), stage_color(stage.status)),
                stage.description(),
                self.paint(&duration, Color::Green)
            );
        }
        out
    }

    pub fn history(&self, snapshot: &EditorSnapshot) -> String {
        let mut out = self.title("Edit History");
        out.push('\n');
        if snapshot.history.is_empty() {
            out.push_str("  No edits yet\n");
            return out;
        }
        for entry in &snapshot.history {
            let _ = writeln!(
                out,
                "  {}  {} [{}]",
                entry.timestamp.local_time(),
                entry.action,
                entry.target
            );
        }
        out
    }

    pub fn commands(&self, snapshot: &EditorSnapshot) -> String {
        let mut out = self.title("Commands");
        out.push('\n');
        if snapshot.commands.is_empty() {
            out.push_str("  No commands yet\n");
            return out;
        }
        for command in &snapshot.commands {
            let _ = writeln!(
                out,
                "  {} {}  {}",
                command.id.short(),
                self.paint(&pad(command.status.as_str(), 10), command_color(command.status)),
                truncate_for_display(&command.text, COMMAND_PREVIEW_LEN)
            );
        }
        out
    }

    /// Header line with the processing indicator and undo/redo availability.
    pub fn status_line(&self, snapshot: &EditorSnapshot) -> String {
        let activity = match snapshot.active_stage {
            Some(stage) => format!("Processing... ({})", stage.display_name()),
            None if snapshot.processing => "Processing...".to_string(),
            None => "Ready".to_string(),
        };
        format!(
            "{}  undo: {}  redo: {}",
            activity,
            if snapshot.can_undo { "available" } else { "disabled" },
            if snapshot.can_redo { "available" } else { "disabled" }
        )
    }

    /// All panels.
    pub fn full(&self, snapshot: &EditorSnapshot) -> String {
        [
            self.status_line(snapshot),
            self.preview(&snapshot.content),
            self.workflow(snapshot),
            self.history(snapshot),
            self.commands(snapshot),
        ]
        .join("\n")
    }

    /// One progress line for a live event.
    pub fn event_line(&self, event: &SessionEvent) -> String {
        match event {
            SessionEvent::CommandAccepted { command_id, text } => {
                format!("> [{}] {}", command_id.short(), text)
            }
            SessionEvent::SubmissionRejected {
                reason: RejectReason::Empty,
            } => "Nothing to submit".to_string(),
            SessionEvent::SubmissionRejected {
                reason: RejectReason::Busy,
            } => "A command is still processing; input dropped".to_string(),
            SessionEvent::StageStarted { stage, .. } => format!(
                "  {} {}",
                pad(stage.display_name(), NAME_COLUMN),
                self.paint(StageStatus::Processing.as_str(), stage_color(StageStatus::Processing))
            ),
            SessionEvent::StageCompleted {
                stage, duration_ms, ..
            } => format!(
                "  {} {} {}ms",
                pad(stage.display_name(), NAME_COLUMN),
                self.paint(StageStatus::Completed.as_str(), stage_color(StageStatus::Completed)),
                duration_ms
            ),
            SessionEvent::EditApplied { entry, .. } => {
                format!("    * {} [{}]", entry.action, entry.target)
            }
            SessionEvent::CommandCompleted { command_id } => self.paint(
                &format!("< [{}] completed", command_id.short()),
                command_color(CommandStatus::Completed),
            ),
            SessionEvent::UndoApplied { entry } => {
                format!("Undid \"{}\"; page reset to defaults", entry.action)
            }
            SessionEvent::NothingToUndo => "Nothing to undo".to_string(),
            SessionEvent::RedoRejected => "Redo is not available".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
