use tablekit::config::LoggingConfig;
use tablekit::logger;

#[test]
fn test_log_file_path() {
    let path = logger::get_log_file_path().unwrap();
    assert!(path.ends_with("tablekit/tablekit.log"));
}

#[test]
fn test_disabled_logging_installs_nothing() {
    let config = LoggingConfig::default();
    assert!(!config.enabled);
    assert!(logger::init(&config).unwrap().is_none());
}

#[test]
fn test_level_filter_parsing() {
    let mut config = LoggingConfig::default();
    assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Info);

    config.level = "debug".to_string();
    assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Debug);

    config.level = "chatty".to_string();
    assert!(config.level_filter().is_err());
}

#[test]
fn test_file_logging_writes_records() {
    let path = std::env::temp_dir()
        .join(format!("tablekit-logger-{}", std::process::id()))
        .join("tablekit.log");

    logger::init_with_path(log::LevelFilter::Debug, &path).unwrap();
    log::debug!("table mounted");
    log::logger().flush();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("table mounted"));
    assert!(content.contains("DEBUG"));

    // Only one global logger per process
    assert!(logger::init_with_path(log::LevelFilter::Debug, &path).is_err());

    let _ = std::fs::remove_file(&path);
}
