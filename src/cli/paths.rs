//! Default paths and persistent configuration

use super::args::Cli;
use crate::repl::ReplConfig;
use crate::sequence::{LengthBounds, SequenceError};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the configuration directory for number-array
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("number-array"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the default line editor history path
pub fn default_history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("number-array").join("history.txt"))
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in the config file.
///
/// Every field is optional; unset fields fall back to built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Minimum random array length
    pub random_min_len: Option<usize>,
    /// Maximum random array length
    pub random_max_len: Option<usize>,
    /// Coloured diagnostics
    pub color: Option<bool>,
    /// Line editor history file
    pub history_file: Option<PathBuf>,
    /// Maximum history entries
    pub max_history: Option<usize>,
}

impl PersistentConfig {
    /// Load configuration from the default or a custom path.
    ///
    /// A missing file yields the default configuration.
    pub fn load(custom_path: Option<&Path>) -> Result<Self> {
        match custom_path {
            Some(path) => {
                validate_config_path(path)?;
                Self::load_from(path)
            }
            None => Self::load_from(&default_config_path()?),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, cli: &Cli) -> Self {
        Self {
            random_min_len: cli.min_len.or(self.random_min_len),
            random_max_len: cli.max_len.or(self.random_max_len),
            color: if cli.no_color { Some(false) } else { self.color },
            history_file: self.history_file.clone(),
            max_history: self.max_history,
        }
    }

    /// Random length bounds, validated
    pub fn bounds(&self) -> std::result::Result<LengthBounds, SequenceError> {
        LengthBounds::new(
            self.random_min_len.unwrap_or(LengthBounds::DEFAULT_MIN_LEN),
            self.random_max_len.unwrap_or(LengthBounds::DEFAULT_MAX_LEN),
        )
    }

    /// Whether diagnostics should be coloured
    pub fn color_enabled(&self) -> bool {
        self.color.unwrap_or(true)
    }

    /// Line editor configuration derived from this config
    pub fn repl_config(&self) -> ReplConfig {
        let defaults = ReplConfig::default();
        ReplConfig {
            prompt: defaults.prompt,
            history_file: self
                .history_file
                .clone()
                .or_else(default_history_path)
                .or(defaults.history_file),
            max_history: self.max_history.unwrap_or(defaults.max_history),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let config = PersistentConfig::default();
        assert_eq!(config.bounds().unwrap(), LengthBounds::default());
        assert!(config.color_enabled());
    }

    #[test]
    fn test_cli_overrides() {
        let config = PersistentConfig {
            random_min_len: Some(3),
            random_max_len: Some(9),
            color: Some(true),
            ..Default::default()
        };
        let cli = Cli {
            max_len: Some(4),
            no_color: true,
            ..Default::default()
        };
        let merged = config.merge_with_cli(&cli);
        assert_eq!(merged.random_min_len, Some(3));
        assert_eq!(merged.random_max_len, Some(4));
        assert!(!merged.color_enabled());
    }

    #[test]
    fn test_invalid_bounds_reported() {
        let config = PersistentConfig {
            random_min_len: Some(10),
            random_max_len: Some(5),
            ..Default::default()
        };
        assert_eq!(
            config.bounds(),
            Err(SequenceError::InvalidRange {
                min_len: 10,
                max_len: 5
            })
        );
    }

    #[test]
    fn test_validate_config_path() {
        assert!(validate_config_path(Path::new("conf.json")).is_ok());
        assert!(validate_config_path(Path::new("conf.toml")).is_err());
        assert!(validate_config_path(Path::new("conf")).is_err());
    }
}
