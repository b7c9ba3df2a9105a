use layoutist::config::LoggingConfig;
use layoutist::logger::{init_file_logging, Logger};

#[test]
fn test_logger_records_entries() {
    let logger = Logger::new();
    assert!(logger.entries().is_empty());

    logger.log("Fetched 4 layouts".to_string());
    let entries = logger.entries();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].contains("Fetched 4 layouts"));
}

#[test]
fn test_entries_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let entries = logger.entries();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].contains("second"));
    assert!(entries[1].contains("first"));
}

#[test]
fn test_clear_drops_entries() {
    let logger = Logger::new();
    logger.log("about to vanish".to_string());
    logger.clear();
    assert!(logger.entries().is_empty());
}

#[test]
fn test_shared_across_clones() {
    let logger = Logger::new();
    let clone = logger.clone();

    clone.log("seen by both".to_string());
    assert_eq!(logger.entries().len(), 1);
}

#[test]
fn test_disabled_file_logging_is_a_noop() {
    let config = LoggingConfig::default();
    assert!(!config.enabled);
    assert!(init_file_logging(&config).is_ok());
}
