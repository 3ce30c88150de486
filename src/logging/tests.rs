use crate::logging::{LogLevel, LogTarget, Logger};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("lumina-logs-test-{nanos}-{uniq}"))
}

#[test]
fn logger_defers_file_creation_until_needed() {
    let logger = Logger::with_log_dir(temp_dir());
    assert!(logger.log_path().is_none());
    assert!(logger.session_contents().is_none());

    logger.info("console only", LogTarget::ConsoleOnly);
    assert!(logger.log_path().is_none());

    logger.info("file line", LogTarget::FileOnly);
    let path = logger.log_path().expect("log path should be set");
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("lumina-") && name.ends_with(".log"));

    let contents = logger.session_contents().unwrap().unwrap();
    assert!(contents.contains("file line"));
    assert!(contents.contains("INFO"));
    assert!(!contents.contains("console only"));
}

#[test]
fn logger_writes_levels_and_combined_targets() {
    let logger = Logger::with_log_dir(temp_dir());

    logger.warn("warn line", LogTarget::FileOnly);
    logger.error("error line", LogTarget::ConsoleAndFile);

    let contents = logger.session_contents().unwrap().unwrap();
    assert!(contents.contains("WARN  warn line"));
    assert!(contents.contains("ERROR error line"));
}

#[test]
fn logger_skips_file_logging_when_disabled() {
    let logger = Logger::with_log_dir(temp_dir());
    logger.set_file_logging_enabled(false);

    logger.info("file should not exist", LogTarget::ConsoleAndFile);
    assert!(logger.log_path().is_none());

    logger.set_file_logging_enabled(true);
    logger.info("now write", LogTarget::FileOnly);
    assert!(logger.log_path().is_some());
}

#[test]
fn clones_share_one_session_file() {
    let logger = Logger::with_log_dir(temp_dir());
    let other = logger.clone();
    logger.info("first", LogTarget::FileOnly);
    other.info("second", LogTarget::FileOnly);
    assert_eq!(logger.log_path(), other.log_path());

    let contents = other.session_contents().unwrap().unwrap();
    assert!(contents.contains("first") && contents.contains("second"));
}

#[test]
fn log_dir_is_fixed_once_file_is_open() {
    let first = temp_dir();
    let logger = Logger::with_log_dir(&first);
    logger.info("open", LogTarget::FileOnly);
    logger.set_log_dir(temp_dir());
    assert_eq!(logger.log_dir(), Some(first));
}

#[test]
fn level_names_are_uppercase() {
    assert_eq!(LogLevel::Info.to_string(), "INFO");
    assert_eq!(LogLevel::Error.to_string(), "ERROR");
}
