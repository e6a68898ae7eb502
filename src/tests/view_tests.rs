use super::*;
use crate::domain::{CommandId, RegionName, TimestampUtc};
use crate::history::HistoryEntry;
use crate::ledger::{CommandEntry, StageKind};
use crate::state::EditorState;

fn plain() -> Renderer {
    Renderer::new(false)
}

fn snapshot_with_command(text: &str) -> EditorSnapshot {
    let mut state = EditorState::new();
    let mut entry = CommandEntry::new(text, TimestampUtc::now());
    entry.stages[0].status = StageStatus::Completed;
    entry.stages[0].duration_ms = Some(321);
    entry.stages[1].status = StageStatus::Processing;
    state.in_flight = Some(entry.id);
    state.ledger.submit(entry);
    EditorSnapshot::from(&state)
}

#[test]
fn test_empty_panels_show_placeholders() {
    let snapshot = EditorSnapshot::from(&EditorState::new());
    let renderer = plain();

    assert!(renderer.history(&snapshot).contains("No edits yet"));
    assert!(renderer.workflow(&snapshot).contains("No commands yet"));
    assert!(renderer.commands(&snapshot).contains("No commands yet"));
    assert_eq!(
        renderer.status_line(&snapshot),
        "Ready  undo: disabled  redo: disabled"
    );
}

#[test]
fn test_preview_lists_all_regions() {
    let snapshot = EditorSnapshot::from(&EditorState::new());
    let preview = plain().preview(&snapshot.content);

    assert!(preview.contains("[header]"));
    assert!(preview.contains("Welcome to Our Website"));
    assert!(preview.contains("[button]"));
    assert!(preview.contains("Get Started"));
    assert!(preview.contains("© 2024 Company Name"));
    assert!(preview.contains("text-gray-600 text-sm"));
}

#[test]
fn test_workflow_shows_stage_status_and_duration() {
    let snapshot = snapshot_with_command("make the header blue");
    let workflow = plain().workflow(&snapshot);

    assert!(workflow.contains("NL Command Parser"));
    assert!(workflow.contains("321ms"));
    assert!(workflow.contains("processing"));
    assert!(workflow.contains("Logging changes for undo/redo"));
    assert_eq!(workflow.lines().count(), 1 + StageKind::ALL.len());
}

#[test]
fn test_status_line_names_active_stage() {
    let snapshot = snapshot_with_command("x");
    assert!(plain()
        .status_line(&snapshot)
        .starts_with("Processing... (RAG Tool Router)"));
}

#[test]
fn test_history_lists_newest_first() {
    let mut state = EditorState::new();
    state.history.push(HistoryEntry::new(
        "Changed header color to blue",
        RegionName::Header,
        TimestampUtc::now(),
    ));
    state.history.push(HistoryEntry::new(
        "Made footer text bold",
        RegionName::Footer,
        TimestampUtc::now(),
    ));
    let history = plain().history(&EditorSnapshot::from(&state));

    let lines: Vec<&str> = history.lines().skip(1).collect();
    assert!(lines[0].ends_with("Made footer text bold [footer]"));
    assert!(lines[1].ends_with("Changed header color to blue [header]"));
}

#[test]
fn test_long_command_text_is_truncated() {
    let long = "make the header blue ".repeat(10);
    let snapshot = snapshot_with_command(&long);
    let commands = plain().commands(&snapshot);

    assert!(commands.contains("..."));
    assert!(commands.contains("processing"));
}

#[test]
fn test_truncate_for_display_respects_char_boundaries() {
    assert_eq!(truncate_for_display("short", 10), "short");
    assert_eq!(truncate_for_display("©©©©©©©©", 5), "©©...");
    assert_eq!(truncate_for_display("a\nb", 10), "a b");
}

#[test]
fn test_event_lines() {
    let renderer = plain();
    let command_id = CommandId::new();

    assert_eq!(
        renderer.event_line(&SessionEvent::SubmissionRejected {
            reason: RejectReason::Busy
        }),
        "A command is still processing; input dropped"
    );
    assert!(renderer
        .event_line(&SessionEvent::StageStarted {
            command_id,
            index: 2,
            stage: StageKind::Execute,
        })
        .contains("Change Executor"));
    assert!(renderer
        .event_line(&SessionEvent::StageCompleted {
            command_id,
            index: 2,
            stage: StageKind::Execute,
            duration_ms: 450,
        })
        .ends_with("completed 450ms"));
    assert_eq!(
        renderer.event_line(&SessionEvent::NothingToUndo),
        "Nothing to undo"
    );
}

#[test]
fn test_plain_output_has_no_escape_codes() {
    let snapshot = snapshot_with_command("x");
    assert!(!plain().full(&snapshot).contains('\u{1b}'));
    assert!(Renderer::new(true)
        .workflow(&snapshot)
        .contains("NL Command Parser"));
}

#[test]
fn test_preview_marks_default_content() {
    let mut state = EditorState::new();
    assert!(plain()
        .preview(&EditorSnapshot::from(&state).content)
        .starts_with("Live Website Preview (default styles)"));

    state.content.set_style(RegionName::Header, "text-3xl font-bold text-blue-600");
    let preview = plain().preview(&EditorSnapshot::from(&state).content);
    assert!(!preview.contains("(default styles)"));
    assert!(preview.contains("text-blue-600"));
}
