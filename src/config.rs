use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "urlo.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LauncherConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScanConfig {
    /// Marker extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    #[serde(default = "default_button_width")]
    pub button_width: i32,
    #[serde(default = "default_button_height")]
    pub button_height: i32,
    #[serde(default = "default_padding")]
    pub padding: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

// Defaults for ScanConfig
fn default_extension() -> String {
    "txt".to_string()
}

fn default_max_entries() -> usize {
    9
}

// Defaults for LayoutConfig
fn default_button_width() -> i32 {
    160
}

fn default_button_height() -> i32 {
    30
}

fn default_padding() -> i32 {
    10
}

// Defaults for WindowConfig
fn default_title() -> String {
    "URLO".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            max_entries: default_max_entries(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            button_width: default_button_width(),
            button_height: default_button_height(),
            padding: default_padding(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

pub fn get_config_path(directory: &Path) -> PathBuf {
    directory.join(CONFIG_FILE_NAME)
}

/// Reads `urlo.json` from `directory` if it exists. The file is never written back.
pub fn load_config(directory: &Path) -> Result<LauncherConfig> {
    let path = get_config_path(directory);

    if !path.exists() {
        log::debug!("No config file at {:?}, using defaults", path);
        return Ok(LauncherConfig::default());
    }

    let content = fs::read_to_string(&path).context("failed to read config file")?;
    serde_json::from_str::<LauncherConfig>(&content).context("failed to parse config file")
}

pub fn load_and_validate_config(directory: &Path) -> Result<LauncherConfig> {
    let config = load_config(directory)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &LauncherConfig) -> Result<()> {
    let extension = &config.scan.extension;
    if extension.is_empty() {
        bail!("scan.extension must not be empty");
    }
    if extension.starts_with('.') {
        bail!("scan.extension must be given without a leading dot: {extension}");
    }
    // Button count has to fit the window procedure's index space.
    if !(1..=255).contains(&config.scan.max_entries) {
        bail!(
            "scan.max_entries must be between 1 and 255, got {}",
            config.scan.max_entries
        );
    }

    let layout = &config.layout;
    if layout.button_width <= 0 || layout.button_height <= 0 {
        bail!(
            "button size must be positive, got {}x{}",
            layout.button_width,
            layout.button_height
        );
    }
    if layout.padding < 0 {
        bail!("layout.padding must not be negative, got {}", layout.padding);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_and_validate_config(dir.path()).unwrap();
        assert_eq!(config, LauncherConfig::default());
        assert_eq!(config.scan.extension, "txt");
        assert_eq!(config.scan.max_entries, 9);
        assert_eq!(config.layout.button_width, 160);
        assert_eq!(config.layout.button_height, 30);
        assert_eq!(config.layout.padding, 10);
        assert_eq!(config.window.title, "URLO");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            get_config_path(dir.path()),
            r#"{ "scan": { "max_entries": 4 }, "window": { "title": "Links" } }"#,
        )
        .unwrap();

        let config = load_and_validate_config(dir.path()).unwrap();
        assert_eq!(config.scan.max_entries, 4);
        assert_eq!(config.scan.extension, "txt");
        assert_eq!(config.window.title, "Links");
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(get_config_path(dir.path()), "{ not json").unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut config = LauncherConfig::default();
        config.scan.max_entries = 0;
        assert!(validate_config(&config).is_err());

        let mut config = LauncherConfig::default();
        config.scan.max_entries = 256;
        assert!(validate_config(&config).is_err());

        let mut config = LauncherConfig::default();
        config.scan.extension = ".txt".into();
        assert!(validate_config(&config).is_err());

        let mut config = LauncherConfig::default();
        config.layout.button_height = 0;
        assert!(validate_config(&config).is_err());

        let mut config = LauncherConfig::default();
        config.layout.padding = -1;
        assert!(validate_config(&config).is_err());
    }
}
