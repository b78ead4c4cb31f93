//! GUI configuration for roster-dioxus.
//!
//! Configuration is loaded from `~/.config/rdx/rdx.toml` (overridable via
//! the `RDX_CONFIG` environment variable) and provides window, theme,
//! backend, and logging settings.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// Configuration loaded from `rdx.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RdxConfig {
    pub window: WindowConfig,
    pub theme: ThemeConfig,
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Color tokens consumed by the stylesheet.
///
/// These are configuration inputs, not logic: the stylesheet references
/// them as `--csm-*` CSS custom properties.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Confirm/trigger button background.
    pub green: String,
    /// Exit button background.
    pub danger: String,
    /// Popup surface background.
    pub surface: String,
    /// Button text color.
    pub header_bg: String,
}

/// Drop backend configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the course-management API.
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "roster-dioxus".to_string(),
            width: 1000.0,
            height: 700.0,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            green: "#2b8a3e".to_string(),
            danger: "#e03131".to_string(),
            surface: "#f8f9fa".to_string(),
            header_bg: "#ffffff".to_string(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(std::env::temp_dir().join("rdx.log")),
            level: "info".to_string(),
            // The roster window only hovers and clicks, so pointer motion
            // and the webview's unknown-event chatter are the noise sources.
            suppressed_patterns: vec![
                "mousemove".to_string(),
                "pointermove".to_string(),
                "Dispatched unknown event".to_string(),
            ],
        }
    }
}

impl RdxConfig {
    /// Load configuration from the default location.
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self> {
        let config_path = std::env::var_os("RDX_CONFIG")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME")
                    .map(|home| PathBuf::from(home).join(".config/rdx/rdx.toml"))
            });

        match config_path {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<RdxConfig>(&content)?;
        Ok(config)
    }

    /// Set the window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the drop backend base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.backend.base_url = url.into();
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Generate CSS custom properties for the theme color tokens.
    ///
    /// Returns a `<style>` block that overrides the CSS `:root` defaults.
    #[must_use]
    pub fn theme_css(&self) -> String {
        format!(
            "<style>:root {{ --csm-green: {}; --csm-danger: {}; --csm-surface: {}; --csm-header-bg: {}; }}</style>",
            self.theme.green, self.theme.danger, self.theme.surface, self.theme.header_bg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_has_expected_values() {
        let config = RdxConfig::default();
        assert_eq!(config.window.title, "roster-dioxus");
        assert!((config.window.width - 1000.0).abs() < f64::EPSILON);
        assert!((config.window.height - 700.0).abs() < f64::EPSILON);
        assert_eq!(config.backend.base_url, "http://localhost:8000/api");
        assert_eq!(config.logging.level, "info");
        let log_file = config.logging.log_file.as_deref().expect("default log file");
        assert!(log_file.ends_with("rdx.log"));
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = RdxConfig::default()
            .with_window_title("Roster")
            .with_window_size(800.0, 600.0)
            .with_base_url("https://csm.example.org/api")
            .with_log_level("debug");

        assert_eq!(config.window.title, "Roster");
        assert!((config.window.width - 800.0).abs() < f64::EPSILON);
        assert!((config.window.height - 600.0).abs() < f64::EPSILON);
        assert_eq!(config.backend.base_url, "https://csm.example.org/api");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn theme_css_generates_valid_style() {
        let config = RdxConfig::default();
        let css = config.theme_css();
        assert!(css.contains("<style>"));
        assert!(css.contains("--csm-green: #2b8a3e"));
        assert!(css.contains("--csm-danger: #e03131"));
        assert!(css.contains("--csm-surface:"));
        assert!(css.contains("--csm-header-bg:"));
    }

    #[test]
    fn deserialize_partial_config() {
        let toml_str = r##"
[window]
title = "custom"

[theme]
green = "#00ff00"
"##;
        let config = toml::from_str::<RdxConfig>(toml_str).expect("should deserialize");
        assert_eq!(config.window.title, "custom");
        // Width should be default
        assert!((config.window.width - 1000.0).abs() < f64::EPSILON);
        assert_eq!(config.theme.green, "#00ff00");
        // Danger should be default
        assert_eq!(config.theme.danger, "#e03131");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"
[backend]
base_url = "http://localhost:9000/api"
"#
        )
        .expect("write temp config");

        let config = RdxConfig::load_from(file.path()).expect("config should load");
        assert_eq!(config.backend.base_url, "http://localhost:9000/api");
    }

    #[test]
    fn load_from_nonexistent_path_returns_error() {
        let result = RdxConfig::load_from(Path::new("/nonexistent/rdx.toml"));
        assert!(result.is_err());
    }
}
