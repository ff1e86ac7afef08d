//! Configuration management for tablekit
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_PAGE_SIZE, DOUBLE_CLICK_MS, EMPTY_TABLE_MESSAGE, NARROW_VIEWPORT_WIDTH,
    SEARCH_DEBOUNCE_MAX_MS, SEARCH_DEBOUNCE_MS, SEARCH_PLACEHOLDER, SKELETON_ROW_COUNT,
};
use crate::icons::IconTheme;
use crate::table::TableOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub table: TableSettings,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Glyph theme: "ascii" or "unicode"
    pub icon_theme: IconTheme,
    /// Terminals narrower than this many columns hide the mobile column list
    pub narrow_viewport_width: u16,
}

/// Table presentation and timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Rows per page
    pub page_size: usize,
    /// Placeholder rows shown while loading
    pub skeleton_rows: usize,
    /// Quiet period before a search is reported, in milliseconds
    pub search_debounce_ms: u64,
    /// Window for two clicks on a row to count as a double-click, in milliseconds
    pub double_click_ms: u64,
    /// Search box placeholder
    pub search_placeholder: String,
    /// Message shown when there are no rows
    pub empty_message: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            icon_theme: IconTheme::default(),
            narrow_viewport_width: NARROW_VIEWPORT_WIDTH,
        }
    }
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            skeleton_rows: SKELETON_ROW_COUNT,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            double_click_ms: DOUBLE_CLICK_MS,
            search_placeholder: SEARCH_PLACEHOLDER.to_string(),
            empty_message: EMPTY_TABLE_MESSAGE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("tablekit.toml");
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = dirs::config_dir()?.join("tablekit").join("config.toml");
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.table.page_size == 0 {
            anyhow::bail!("page_size must be at least 1");
        }

        if self.table.skeleton_rows == 0 {
            anyhow::bail!("skeleton_rows must be at least 1");
        }

        if self.table.search_debounce_ms > SEARCH_DEBOUNCE_MAX_MS {
            anyhow::bail!(
                "search_debounce_ms cannot exceed {}, got {}",
                SEARCH_DEBOUNCE_MAX_MS,
                self.table.search_debounce_ms
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# tablekit Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("tablekit").join("config.toml"))
    }

    /// Table options derived from the `[table]` and `[ui]` sections
    pub fn table_options(&self) -> TableOptions {
        self.table.options(&self.ui)
    }
}

impl TableSettings {
    pub fn options(&self, ui: &UiConfig) -> TableOptions {
        TableOptions {
            page_size: self.page_size,
            skeleton_rows: self.skeleton_rows,
            search_debounce: Duration::from_millis(self.search_debounce_ms),
            double_click: Duration::from_millis(self.double_click_ms),
            narrow_viewport_width: ui.narrow_viewport_width,
            empty_message: self.empty_message.clone(),
            icon_theme: ui.icon_theme,
        }
    }
}
