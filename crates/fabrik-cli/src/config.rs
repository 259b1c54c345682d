//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `FABRIK_<SECTION>__<KEY>`, e.g. `FABRIK_DEFAULTS__RAM`
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "FABRIK";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hardware fields used when `fabrik computer` omits a flag.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Shape measurement and drawing settings.
    pub shapes: ShapeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub ram: String,
    pub hdd: String,
    pub cpu: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeConfig {
    /// Decimal places for area and perimeter.
    pub precision: u32,
    /// Fill character for drawn sketches.
    pub draw_char: char,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                ram: "8 GB".into(),
                hdd: "256 GB".into(),
                cpu: "2.4 GHz".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            shapes: ShapeConfig {
                precision: 3,
                draw_char: '*',
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use the default location). A missing file is not an error; a file
    /// that exists but does not parse is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Path of the file `--config` points at, or the default location.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.fabrik.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "fabrik", "fabrik")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".fabrik.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_precision_is_three() {
        assert_eq!(AppConfig::default().shapes.precision, 3);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.defaults, AppConfig::default().defaults);
    }

    #[test]
    fn file_overrides_defaults_partially() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fabrik.toml");
        std::fs::write(&path, "[defaults]\ncpu = \"Xeon\"\n\n[shapes]\nprecision = 1\n").unwrap();

        let cfg = AppConfig::load_from(&path).unwrap();
        assert_eq!(cfg.defaults.cpu, "Xeon");
        assert_eq!(cfg.defaults.ram, "8 GB");
        assert_eq!(cfg.shapes.precision, 1);
        assert_eq!(cfg.shapes.draw_char, '*');
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fabrik.toml");
        std::fs::write(&path, "[shapes\nprecision = ").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn default_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn active_path_prefers_flag() {
        let flag = PathBuf::from("/tmp/custom.toml");
        assert_eq!(AppConfig::active_path(Some(&flag)), flag);
        assert!(!AppConfig::active_path(None).as_os_str().is_empty());
    }
}
