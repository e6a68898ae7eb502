use super::*;
use crate::config::TimingConfig;
use crate::domain::RegionName;
use crate::ledger::CommandStatus;
use crate::structured_logger::StructuredLogger;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::time::{timeout, Duration};

const WAIT: Duration = Duration::from_secs(5);

fn create_session() -> (EditorSession, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Arc::new(
        StructuredLogger::new("headless-test", temp_dir.path()).expect("Failed to create logger"),
    );
    (EditorSession::new(logger, TimingConfig::instant()), temp_dir)
}

fn inputs(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

async fn run(session: &EditorSession, lines: &[&str]) {
    let config = EditorConfig::default_config();
    timeout(
        WAIT,
        run_headless(session, &config, &Renderer::new(false), &inputs(lines)),
    )
    .await
    .expect("headless run timed out")
    .expect("headless run failed");
}

#[tokio::test]
async fn test_command_then_undo_leaves_defaults() {
    let (session, _temp) = create_session();

    run(&session, &["make the header blue", "/undo"]).await;

    let snapshot = session.snapshot();
    assert_eq!(snapshot.commands.len(), 1);
    assert_eq!(snapshot.commands[0].status, CommandStatus::Completed);
    assert!(snapshot.history.is_empty());
    assert!(snapshot.content.is_default());
    assert!(!snapshot.processing);
    assert!(!snapshot.can_undo);
}

#[tokio::test]
async fn test_commands_run_sequentially() {
    let (session, _temp) = create_session();

    run(&session, &["make the header blue", "make footer bold"]).await;

    let snapshot = session.snapshot();
    assert_eq!(snapshot.commands.len(), 2);
    assert!(snapshot
        .commands
        .iter()
        .all(|c| c.status == CommandStatus::Completed));
    assert_eq!(
        snapshot.content.region(RegionName::Header).style,
        "text-3xl font-bold text-blue-600"
    );
    assert_eq!(
        snapshot.content.region(RegionName::Footer).style,
        "text-gray-600 text-sm font-bold"
    );
}

#[tokio::test]
async fn test_quit_stops_remaining_inputs() {
    let (session, _temp) = create_session();

    run(&session, &["/quit", "make footer bold"]).await;

    assert!(session.snapshot().commands.is_empty());
}

#[tokio::test]
async fn test_no_inputs_prints_state_and_returns() {
    let (session, _temp) = create_session();

    run(&session, &[]).await;

    assert!(session.snapshot().content.is_default());
}
