use crate::tui::{components::IconSet, styles::THEME_NAMES};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const MIN_PANEL_PERCENT: u16 = 20;
const MAX_PANEL_PERCENT: u16 = 100;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown theme '{0}' (expected one of: {})", THEME_NAMES.join(", "))]
    UnknownTheme(String),

    #[error("Unknown icon set '{0}' (expected 'glyph' or 'ascii')")]
    UnknownIconSet(String),

    #[error("Panel {dimension} must be between 20 and 100 percent, got {value}")]
    PanelSize { dimension: &'static str, value: u16 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title shown in the modal header
    pub title: String,

    /// Theme preset name
    pub theme: String,

    /// Icon set name (`glyph` or `ascii`)
    pub icons: String,

    /// Panel width as a percentage of the terminal width
    pub panel_width_percent: u16,

    /// Panel height as a percentage of the terminal height
    pub panel_height_percent: u16,

    /// Whether mouse clicks and scrolling are captured
    pub mouse_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Comment".to_string(),
            theme: "dark".to_string(),
            icons: "glyph".to_string(),
            panel_width_percent: 80,
            panel_height_percent: 60,
            mouse_enabled: true,
        }
    }
}

impl Config {
    /// Initialize configuration from file and environment
    pub async fn init() -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = match Self::load_from_file(&Self::config_paths()).await? {
            Some(config) => config,
            None => Self::default(),
        };

        config.load_from_env();
        Ok(config)
    }

    /// Candidate configuration files, highest priority first
    pub fn config_paths() -> Vec<PathBuf> {
        // 1. ./.commentview.json
        // 2. ./commentview.json
        // 3. $CONFIG_DIR/commentview/commentview.json
        let mut paths = vec![
            PathBuf::from("./.commentview.json"),
            PathBuf::from("./commentview.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("commentview").join("commentview.json"));
        }

        paths
    }

    /// Load the first configuration file that exists
    pub async fn load_from_file(paths: &[PathBuf]) -> Result<Option<Self>, ConfigError> {
        for path in paths {
            if path.exists() {
                debug!("Loading configuration from: {}", path.display());
                return Self::read_file(path).await.map(Some);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(None)
    }

    async fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from environment variables
    pub fn load_from_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    /// Apply `COMMENTVIEW_*` variables from `lookup`
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(title) = lookup("COMMENTVIEW_TITLE") {
            self.title = title;
        }

        if let Some(theme) = lookup("COMMENTVIEW_THEME") {
            self.theme = theme;
        }

        if let Some(icons) = lookup("COMMENTVIEW_ICONS") {
            self.icons = icons;
        }

        if let Some(width) = lookup("COMMENTVIEW_PANEL_WIDTH") {
            match width.trim().parse() {
                Ok(width) => self.panel_width_percent = width,
                Err(_) => debug!("Ignoring invalid COMMENTVIEW_PANEL_WIDTH: {}", width),
            }
        }

        if let Some(height) = lookup("COMMENTVIEW_PANEL_HEIGHT") {
            match height.trim().parse() {
                Ok(height) => self.panel_height_percent = height,
                Err(_) => debug!("Ignoring invalid COMMENTVIEW_PANEL_HEIGHT: {}", height),
            }
        }

        if let Some(mouse) = lookup("COMMENTVIEW_MOUSE") {
            self.mouse_enabled = !matches!(mouse.trim().to_lowercase().as_str(), "false" | "0" | "off" | "no");
        }
    }

    /// Apply command-line overrides
    pub fn apply_overrides(&mut self, title: Option<String>, theme: Option<String>, icons: Option<String>) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(icons) = icons {
            self.icons = icons;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if crate::tui::styles::Theme::from_name(&self.theme).is_none() {
            return Err(ConfigError::UnknownTheme(self.theme.clone()));
        }

        if self.icons.parse::<IconSet>().is_err() {
            return Err(ConfigError::UnknownIconSet(self.icons.clone()));
        }

        let percent_range = MIN_PANEL_PERCENT..=MAX_PANEL_PERCENT;
        if !percent_range.contains(&self.panel_width_percent) {
            return Err(ConfigError::PanelSize {
                dimension: "width",
                value: self.panel_width_percent,
            });
        }
        if !percent_range.contains(&self.panel_height_percent) {
            return Err(ConfigError::PanelSize {
                dimension: "height",
                value: self.panel_height_percent,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            theme: "neon".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::UnknownTheme(_))));

        let config = Config {
            icons: "emoji".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::UnknownIconSet(_))));

        let config = Config {
            panel_height_percent: 5,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PanelSize { dimension: "height", value: 5 })
        ));
    }

    #[test]
    fn test_apply_vars() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("COMMENTVIEW_TITLE", "Note"),
            ("COMMENTVIEW_THEME", "light"),
            ("COMMENTVIEW_PANEL_WIDTH", "50"),
            ("COMMENTVIEW_PANEL_HEIGHT", "tall"),
            ("COMMENTVIEW_MOUSE", "off"),
        ]);

        let mut config = Config::default();
        config.apply_vars(|key| vars.get(key).map(|value| value.to_string()));

        assert_eq!(config.title, "Note");
        assert_eq!(config.theme, "light");
        assert_eq!(config.icons, "glyph");
        assert_eq!(config.panel_width_percent, 50);
        assert_eq!(config.panel_height_percent, 60);
        assert!(!config.mouse_enabled);
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        config.apply_overrides(Some("Review".to_string()), None, Some("ascii".to_string()));

        assert_eq!(config.title, "Review");
        assert_eq!(config.theme, "dark");
        assert_eq!(config.icons, "ascii");
    }

    #[tokio::test]
    async fn test_load_from_file_partial() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let present = dir.path().join("commentview.json");
        std::fs::write(&present, r#"{ "theme": "high-contrast", "panel_width_percent": 90 }"#).unwrap();

        let config = Config::load_from_file(&[missing, present]).await.unwrap().unwrap();
        assert_eq!(config.theme, "high-contrast");
        assert_eq!(config.panel_width_percent, 90);
        assert_eq!(config.title, "Comment");
    }

    #[tokio::test]
    async fn test_load_from_file_none() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_file(&[dir.path().join("nope.json")]).await.unwrap();
        assert!(config.is_none());
    }

    #[tokio::test]
    async fn test_load_from_file_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commentview.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from_file(&[path]).await.unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }
}
