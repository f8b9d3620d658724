//! Application configuration

use anyhow::{Context, Result};
use lcd_sens_render::{FontSpecs, Rotation};
use lcd_sens_sources::CollectorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application-wide configuration
///
/// Only deployment details live here; the panel layout is fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub fonts: FontConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub collectors: CollectorConfig,
}

impl AppConfig {
    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            log::info!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "lcd-sens", "lcd-sens")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }
}

/// Where committed frames go
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutputConfig {
    /// Linux framebuffer device, e.g. the one fbtft creates for an ST7735
    Framebuffer { path: PathBuf },
    /// PNG file rewritten on every frame
    Png { path: PathBuf },
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig::Framebuffer {
            path: PathBuf::from("/dev/fb1"),
        }
    }
}

/// Panel configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_rotation")]
    pub rotation: Rotation,
    /// Panel expects blue in the high bits
    #[serde(default)]
    pub bgr: bool,
    /// Value written to the backlight at startup
    #[serde(default)]
    pub backlight: bool,
    /// sysfs `bl_power` style file; no backlight control when unset
    #[serde(default)]
    pub backlight_path: Option<PathBuf>,
}

fn default_width() -> u32 {
    lcd_sens_core::constants::PANEL_WIDTH
}

fn default_height() -> u32 {
    lcd_sens_core::constants::PANEL_HEIGHT
}

fn default_rotation() -> Rotation {
    Rotation::Deg180
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            width: default_width(),
            height: default_height(),
            rotation: default_rotation(),
            bgr: false,
            backlight: false,
            backlight_path: None,
        }
    }
}

/// Font files and sizes
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FontConfig {
    /// Directory holding the font files; `fonts/` next to the executable when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(flatten)]
    pub specs: FontSpecs,
}

impl FontConfig {
    pub fn resolve_directory(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.directory {
            return Ok(dir.clone());
        }
        let exe = std::env::current_exe().context("locating executable")?;
        let base = exe
            .parent()
            .ok_or_else(|| anyhow::anyhow!("executable {} has no parent", exe.display()))?;
        Ok(base.join("fonts"))
    }
}

/// Refresh timing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleConfig {
    #[serde(default = "default_warm_up_secs")]
    pub warm_up_secs: u64,
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_warm_up_secs() -> u64 {
    lcd_sens_core::constants::WARM_UP_DELAY.as_secs()
}

fn default_interval_secs() -> u64 {
    lcd_sens_core::constants::UPDATE_INTERVAL.as_secs()
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            warm_up_secs: default_warm_up_secs(),
            interval_secs: default_interval_secs(),
        }
    }
}

impl ScheduleConfig {
    pub fn warm_up(&self) -> Duration {
        Duration::from_secs(self.warm_up_secs)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.display.width, 160);
        assert_eq!(config.display.height, 128);
        assert_eq!(config.display.rotation, Rotation::Deg180);
        assert!(!config.display.backlight);
        assert_eq!(config.schedule.warm_up(), Duration::from_secs(5));
        assert_eq!(config.schedule.interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{
            "display": { "output": { "type": "png", "path": "/tmp/panel.png" }, "bgr": true },
            "fonts": { "directory": "/opt/fonts", "text_small": { "file": "a.ttf", "family": "A", "size": 11 } },
            "collectors": { "meter1_object": "0_userdata.0.Strom" }
        }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.display.output,
            OutputConfig::Png {
                path: PathBuf::from("/tmp/panel.png")
            }
        );
        assert!(config.display.bgr);
        assert_eq!(config.fonts.specs.text_small.size, 11);
        assert_eq!(config.fonts.specs.text_large.file, "Montserrat-Medium.ttf");
        assert_eq!(config.fonts.resolve_directory().unwrap(), PathBuf::from("/opt/fonts"));
        assert_eq!(config.collectors.meter1_object, "0_userdata.0.Strom");
        assert_eq!(config.collectors.meter2_object, "0_userdata.0.Zaehler2_Test");
    }

    #[test]
    fn test_config_path_is_project_specific() {
        if let Ok(path) = AppConfig::config_path() {
            assert!(path.ends_with("lcd-sens/config.json"), "{}", path.display());
        }
    }

    #[test]
    fn test_load_from_path_reports_errors() {
        let path = std::env::temp_dir().join(format!("lcd-sens-config-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = AppConfig::load_from_path(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(format!("{:#}", err).contains("parsing config"));
    }
}
