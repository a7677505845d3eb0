//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/teldir/teldir.toml`
//! 3. Explicit config file (`--config <FILE>`)
//! 4. Environment variables: `TELDIR_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::services::DEFAULT_PLACEHOLDER_ADDRESS;
use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, DEFAULT_NAME_WIDTH, DEFAULT_PHONE_WIDTH};

/// Column widths for rendered contacts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width of the name column
    pub name_width: usize,
    /// Width of the phone number column
    pub phone_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            name_width: DEFAULT_NAME_WIDTH,
            phone_width: DEFAULT_PHONE_WIDTH,
        }
    }
}

/// Raw display config for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawDisplayConfig {
    pub name_width: Option<usize>,
    pub phone_width: Option<usize>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub placeholder_address: Option<String>,
    pub default_file: Option<PathBuf>,
    #[serde(default)]
    pub display: RawDisplayConfig,
}

impl DisplayConfig {
    /// Overlay wins where it specifies a value.
    pub fn merge(&self, overlay: &RawDisplayConfig) -> Self {
        Self {
            name_width: overlay.name_width.unwrap_or(self.name_width),
            phone_width: overlay.phone_width.unwrap_or(self.phone_width),
        }
    }
}

/// Unified configuration for teldir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Address given to persons rebuilt from a saved file
    pub placeholder_address: String,
    /// File used when an empty file name is entered at the menu
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_file: Option<PathBuf>,
    /// Column widths
    pub display: DisplayConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placeholder_address: DEFAULT_PLACEHOLDER_ADDRESS.to_string(),
            default_file: None,
            display: DisplayConfig::default(),
        }
    }
}

/// Get the XDG config directory for teldir.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "teldir").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("teldir.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(file) = &self.default_file {
            let expanded = expand_env_vars(file.to_string_lossy().as_ref());
            self.default_file = Some(PathBuf::from(expanded));
        }
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            placeholder_address: overlay
                .placeholder_address
                .clone()
                .unwrap_or_else(|| self.placeholder_address.clone()),
            default_file: overlay
                .default_file
                .clone()
                .or_else(|| self.default_file.clone()),
            display: self.display.merge(&overlay.display),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/teldir/teldir.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `TELDIR_*` prefix
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path-like fields
        current.expand_paths();

        Ok(current)
    }

    /// Apply TELDIR_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(
            Environment::with_prefix("TELDIR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("placeholder_address") {
            settings.placeholder_address = val;
        }
        if let Ok(val) = config.get_string("default_file") {
            settings.default_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get::<usize>("display.name_width") {
            settings.display.name_width = val;
        }
        if let Ok(val) = config.get::<usize>("display.phone_width") {
            settings.display.phone_width = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# teldir configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/teldir/teldir.toml
#   Explicit: teldir --config <FILE>
#   Env:      TELDIR_* environment variables (TELDIR_DISPLAY__NAME_WIDTH, ...)

# Address given to contacts loaded from a file (the file stores name and phone only)
# placeholder_address = "N/A"

# File used when the menu's file name prompt is left empty
# default_file = "~/contacts.txt"

[display]
# Width of the name column
# name_width = 20

# Width of the phone number column
# phone_width = 15
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_tilde_in_default_file_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            default_file: Some(PathBuf::from("~/contacts.txt")),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let file = settings.default_file.expect("default_file kept");
        let file_str = file.to_string_lossy();
        assert!(
            file_str.starts_with(&home),
            "default_file should start with home dir: {}",
            file_str
        );
        assert!(!file_str.contains('~'));
    }

    #[test]
    fn test_merge_display_overlay_wins() {
        let base = DisplayConfig::default();
        let overlay = RawDisplayConfig {
            name_width: Some(30),
            phone_width: None,
        };

        let merged = base.merge(&overlay);

        assert_eq!(merged.name_width, 30);
        assert_eq!(merged.phone_width, 15);
    }

    #[test]
    fn test_merge_with_keeps_base_when_not_specified() {
        let base = Settings {
            placeholder_address: "unknown".into(),
            default_file: Some(PathBuf::from("/tmp/base.txt")),
            display: DisplayConfig::default(),
        };

        let merged = base.merge_with(&RawSettings::default());

        assert_eq!(merged, base);
    }

    #[test]
    fn test_template_parses_as_defaults() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("template parses");

        let merged = Settings::default().merge_with(&raw);

        assert_eq!(merged, Settings::default());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let settings = Settings {
            placeholder_address: "none".into(),
            default_file: Some(PathBuf::from("/tmp/c.txt")),
            display: DisplayConfig {
                name_width: 10,
                phone_width: 8,
            },
        };

        let text = settings.to_toml().expect("serialize");
        let back: Settings = toml::from_str(&text).expect("parse");

        assert_eq!(back, settings);
    }
}
