use super::*;
use crate::domain::CommandId;
use tempfile::TempDir;

fn create_test_logger() -> (StructuredLogger, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger =
        StructuredLogger::new("test-session", temp_dir.path()).expect("Failed to create logger");
    (logger, temp_dir)
}

fn read_entries(temp_dir: &TempDir) -> Vec<LogEntry> {
    let content = std::fs::read_to_string(temp_dir.path().join("events.jsonl"))
        .expect("Failed to read log file");
    content
        .lines()
        .map(|line| serde_json::from_str(line).expect("Failed to parse log entry"))
        .collect()
}

#[test]
fn test_log_entries_are_valid_json() {
    let (logger, temp_dir) = create_test_logger();

    logger.log("TestComponent", serde_json::json!({"key": "value1"}));
    logger.log("TestComponent", serde_json::json!({"key": "value2"}));

    let entries = read_entries(&temp_dir);
    assert_eq!(entries.len(), 2);
    for entry in entries {
        assert_eq!(entry.session_id, "test-session");
        assert_eq!(entry.component, "TestComponent");
    }
}

#[test]
fn test_sequence_numbers_monotonic() {
    let (logger, temp_dir) = create_test_logger();

    for i in 0..10 {
        logger.log("Test", serde_json::json!({"iteration": i}));
    }

    let mut prev_seq = 0u64;
    for entry in read_entries(&temp_dir) {
        assert!(
            entry.seq > prev_seq,
            "Sequence numbers should be monotonically increasing"
        );
        prev_seq = entry.seq;
    }
}

#[test]
fn test_session_command_and_event_shape() {
    let (logger, temp_dir) = create_test_logger();
    let command_id = CommandId::new();

    logger.log_command(
        7,
        &SessionCommand::StartStage {
            command_id,
            index: 0,
        },
    );
    logger.log_event(7, &SessionEvent::CommandCompleted { command_id });

    let entries = read_entries(&temp_dir);
    assert_eq!(entries[0].event["type"], "SessionCommand");
    assert_eq!(entries[0].event["machine_seq"], 7);
    assert_eq!(entries[0].event["command"]["type"], "StartStage");
    assert_eq!(entries[1].event["event"]["type"], "CommandCompleted");
    assert_eq!(
        entries[1].event["event"]["command_id"],
        command_id.to_string()
    );
}

#[test]
fn test_rejection_records_message() {
    let (logger, temp_dir) = create_test_logger();

    logger.log_rejection(
        3,
        &EditorError::InvalidTransition {
            message: "stage 1 before stage 0".to_string(),
        },
    );

    let entries = read_entries(&temp_dir);
    assert_eq!(
        entries[0].event["error"],
        "invalid transition: stage 1 before stage 0"
    );
}

#[test]
fn test_path_and_session_id() {
    let (logger, temp_dir) = create_test_logger();
    logger.log_user_input("/undo");
    assert_eq!(logger.path(), &temp_dir.path().join("events.jsonl"));
    assert_eq!(logger.session_id(), "test-session");
}

#[test]
fn test_run_id_starts_at_zero_and_increments() {
    let (logger, temp_dir) = create_test_logger();

    logger.log_user_input("before");
    logger.increment_run_id();
    logger.log_user_input("first run");
    logger.increment_run_id();
    logger.log_user_input("second run");

    let run_ids: Vec<u64> = read_entries(&temp_dir).iter().map(|e| e.run_id).collect();
    assert_eq!(run_ids, vec![0, 1, 2]);
}
