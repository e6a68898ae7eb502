use super::*;
use tempfile::TempDir;

#[test]
fn test_default_config_matches_reference_timing() {
    let config = EditorConfig::default_config();
    assert_eq!(config.timing, TimingConfig::default());
    assert_eq!(config.timing.stage_latency_ms, MsRange { min: 1000, max: 2000 });
    assert_eq!(config.timing.stage_duration_ms, MsRange { min: 200, max: 700 });
    assert_eq!(
        config.quick_commands,
        vec![
            "Make header blue",
            "Change button to green",
            "Make footer bold",
            "Add shadow to card"
        ]
    );
    assert!(config.logging.dir.is_none());
}

#[test]
fn test_default_config_passes_validation() {
    EditorConfig::default_config()
        .validate()
        .expect("embedded config should be valid");
}

#[test]
fn test_partial_yaml_uses_defaults() {
    let config = EditorConfig::parse("quick_commands: [\"make footer bold\"]\n").unwrap();
    assert_eq!(config.timing, TimingConfig::default());
    assert_eq!(config.quick_commands.len(), 1);
}

#[test]
fn test_inverted_range_is_rejected() {
    let yaml = "timing:\n  stage_latency_ms:\n    min: 50\n    max: 10\n";
    let err = EditorConfig::parse(yaml).unwrap_err();
    assert!(format!("{:#}", err).contains("stage_latency_ms"));
}

#[test]
fn test_too_many_quick_commands_rejected() {
    let commands: Vec<String> = (0..10).map(|i| format!("- cmd {}", i)).collect();
    let yaml = format!("quick_commands:\n{}\n", commands.join("\n"));
    assert!(EditorConfig::parse(&yaml).is_err());
}

#[test]
fn test_blank_quick_command_rejected() {
    assert!(EditorConfig::parse("quick_commands: [\"  \"]\n").is_err());
}

#[test]
fn test_unknown_fields_rejected() {
    assert!(EditorConfig::parse("colour: blue\n").is_err());
}

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("editor.yaml");
    std::fs::write(
        &path,
        "timing:\n  stage_latency_ms: { min: 0, max: 0 }\nlogging:\n  dir: /tmp/editor-logs\n",
    )
    .unwrap();

    let config = EditorConfig::load(&path).unwrap();
    assert_eq!(config.timing.stage_latency_ms, MsRange::fixed(0));
    assert_eq!(config.log_dir("abc"), PathBuf::from("/tmp/editor-logs"));
}

#[test]
fn test_load_missing_file_reports_path() {
    let err = EditorConfig::load(Path::new("/nonexistent/editor.yaml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/editor.yaml"));
}

#[test]
fn test_default_log_dir_is_per_session() {
    let config = EditorConfig::default_config();
    let dir = config.log_dir("session-1");
    assert!(dir.ends_with(".agentic-editor/logs/session-1"));
}

#[test]
fn test_ms_range_sampling() {
    assert_eq!(MsRange::fixed(0).sample_ms(), 0);
    assert_eq!(MsRange { min: 9, max: 3 }.sample_ms(), 9);

    let range = MsRange { min: 200, max: 700 };
    for _ in 0..100 {
        let value = range.sample_ms();
        assert!((200..700).contains(&value));
    }
    assert_eq!(TimingConfig::instant().stage_latency_ms.sample(), Duration::ZERO);
}
