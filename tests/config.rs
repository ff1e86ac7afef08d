use std::time::Duration;
use tablekit::config::Config;
use tablekit::icons::IconTheme;

fn temp_config_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("tablekit-config-{}", std::process::id()))
        .join(name)
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.table.page_size, 12);
    assert_eq!(config.table.skeleton_rows, 8);
    assert_eq!(config.table.search_debounce_ms, 500);
    assert_eq!(config.table.search_placeholder, "Search Documents");
    assert_eq!(config.table.empty_message, "There are no files here yet");
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    config.table.page_size = 0;
    assert!(config.validate().is_err());

    config.table.page_size = 12;
    config.table.search_debounce_ms = 20_000;
    assert!(config.validate().is_err());

    config.table.search_debounce_ms = 500;
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("page_size = 12"));
    assert!(toml_str.contains("icon_theme = \"ascii\""));
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[table]
page_size = 5

[ui]
icon_theme = "unicode"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.table.page_size, 5);
    assert_eq!(config.ui.icon_theme, IconTheme::Unicode);

    // Unspecified values use defaults
    assert_eq!(config.table.skeleton_rows, 8);
    assert_eq!(config.ui.narrow_viewport_width, 80);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_table_options_follow_config() {
    let mut config = Config::default();
    config.table.search_debounce_ms = 250;
    config.table.double_click_ms = 300;
    config.ui.narrow_viewport_width = 100;

    let options = config.table_options();
    assert_eq!(options.page_size, 12);
    assert_eq!(options.search_debounce, Duration::from_millis(250));
    assert_eq!(options.double_click, Duration::from_millis(300));
    assert_eq!(options.narrow_viewport_width, 100);
}

#[test]
fn test_generate_and_load_config_file() {
    let path = temp_config_path("generated.toml");
    Config::generate_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# tablekit Configuration File"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.table.page_size, Config::default().table.page_size);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_invalid_config_file() {
    let path = temp_config_path("invalid.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[table]\npage_size = 0\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
    assert!(Config::load_from_file(temp_config_path("missing.toml")).is_err());

    let _ = std::fs::remove_file(&path);
}
