//! Tests for the diagnostics sink.

use std::fs;

use noughts::{DEFAULT_MAX_ENTRIES, Diagnostics, LogLevel};
use tempfile::TempDir;

#[test]
fn test_level_labels() {
    assert_eq!(LogLevel::Info.to_string(), "INFO");
    assert_eq!(LogLevel::Warning.to_string(), "WARN");
    assert_eq!(LogLevel::Error.to_string(), "ERROR");
    assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
    assert_eq!(LogLevel::GameEvent.to_string(), "GAME");
}

#[test]
fn test_shorthands_record_their_level() {
    let diagnostics = Diagnostics::default();

    diagnostics.info("a");
    diagnostics.warning("b");
    diagnostics.error("c");
    diagnostics.debug("d");
    diagnostics.game_event("e");

    let entries = diagnostics.entries();
    assert_eq!(entries.len(), 5);
    assert!(matches!(entries[0].level(), LogLevel::Info));
    assert!(matches!(entries[1].level(), LogLevel::Warning));
    assert!(matches!(entries[2].level(), LogLevel::Error));
    assert!(matches!(entries[3].level(), LogLevel::Debug));
    assert!(matches!(entries[4].level(), LogLevel::GameEvent));
    assert_eq!(entries[4].message().as_str(), "e");
}

#[test]
fn test_entry_display_format() {
    let diagnostics = Diagnostics::default();
    diagnostics.game_event("Winner: Player X");

    let line = diagnostics.entries()[0].to_string();
    assert!(line.starts_with("[GAME] "), "unexpected line: {line}");
    assert!(line.ends_with(": Winner: Player X"), "unexpected line: {line}");

    // HH:MM:SS.mmm
    let timestamp = diagnostics.entries()[0].timestamp().to_string();
    assert_eq!(timestamp.len(), 12);
    assert_eq!(&timestamp[2..3], ":");
    assert_eq!(&timestamp[8..9], ".");
}

#[test]
fn test_oldest_entries_dropped_at_capacity() {
    let diagnostics = Diagnostics::new(3);

    for i in 0..5 {
        diagnostics.info(format!("m{i}"));
    }

    let entries = diagnostics.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].message().as_str(), "m2");
    assert_eq!(entries[2].message().as_str(), "m4");
}

#[test]
fn test_default_capacity() {
    let diagnostics = Diagnostics::default();

    for i in 0..DEFAULT_MAX_ENTRIES + 10 {
        diagnostics.debug(format!("{i}"));
    }

    assert_eq!(diagnostics.len(), DEFAULT_MAX_ENTRIES);
}

#[test]
fn test_clear() {
    let diagnostics = Diagnostics::default();
    diagnostics.info("hello");
    assert!(!diagnostics.is_empty());

    diagnostics.clear();

    assert!(diagnostics.is_empty());
    assert_eq!(diagnostics.len(), 0);
}

#[test]
fn test_clones_share_entries() {
    let diagnostics = Diagnostics::default();
    let handle = diagnostics.clone();

    handle.info("from clone");

    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_file_logging_writes_header_and_entries() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("application.log");
    let diagnostics = Diagnostics::default();

    diagnostics.set_log_file(&path).expect("Log file should open");
    assert!(diagnostics.file_logging());
    diagnostics.info("first");
    diagnostics.game_event("second");

    let content = fs::read_to_string(&path).expect("Failed to read log");
    assert!(content.contains("=== Log Session Started: "));
    assert!(content.contains("[INFO] "));
    assert!(content.contains(": first"));
    assert!(content.contains("[GAME] "));
    assert!(content.contains(": second"));
}

#[test]
fn test_file_logging_appends_sessions() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("application.log");

    for session in ["one", "two"] {
        let diagnostics = Diagnostics::default();
        diagnostics.set_log_file(&path).expect("Log file should open");
        diagnostics.info(session);
    }

    let content = fs::read_to_string(&path).expect("Failed to read log");
    assert_eq!(content.matches("=== Log Session Started").count(), 2);
    assert!(content.contains(": one"));
    assert!(content.contains(": two"));
}

#[test]
fn test_disabling_file_logging_stops_writes() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("application.log");
    let diagnostics = Diagnostics::default();
    diagnostics.set_log_file(&path).expect("Log file should open");

    diagnostics.enable_file_logging(false);
    diagnostics.info("memory only");

    let content = fs::read_to_string(&path).expect("Failed to read log");
    assert!(!content.contains("memory only"));
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_unopenable_log_file_keeps_memory_logging() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join("application.log");
    let diagnostics = Diagnostics::default();

    let result = diagnostics.set_log_file(&path);

    assert!(result.is_err());
    assert!(!diagnostics.file_logging());
    assert_eq!(diagnostics.log_file(), Some(path));

    diagnostics.enable_file_logging(true);
    assert!(!diagnostics.file_logging());

    diagnostics.info("still recorded");
    assert_eq!(diagnostics.len(), 1);
}
