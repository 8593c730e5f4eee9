use crate::error::{PredictoError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration, loaded from `config.toml` in the predicto config
/// directory. A missing file means defaults; unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictoConfig {
    #[serde(default)]
    pub estimator: EstimatorSettings,

    #[serde(default)]
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorSettings {
    /// Display-only currency symbol used in reports.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Override for the draft slot location.
    #[serde(default)]
    pub draft_path: Option<PathBuf>,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            draft_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    /// Show the keybinding footer in the wizard.
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
}

fn default_show_hints() -> bool {
    true
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            show_hints: default_show_hints(),
        }
    }
}

impl PredictoConfig {
    pub fn config_dir() -> Result<PathBuf> {
        directories::ProjectDirs::from("", "", "predicto")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| PredictoError::Config("Cannot determine config directory".to_string()))
    }

    /// Load the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_dir()?.join("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Resolve the draft slot path: explicit override, then config, then the
    /// default `draft.json` next to the config file.
    pub fn draft_path(&self, override_path: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path);
        }
        if let Some(ref path) = self.estimator.draft_path {
            return Ok(path.clone());
        }
        Ok(Self::config_dir()?.join("draft.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PredictoConfig::default();
        assert_eq!(config.estimator.currency, "$");
        assert!(config.tui.show_hints);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: PredictoConfig = toml::from_str("[estimator]\ncurrency = \"₹\"\n").unwrap();
        assert_eq!(config.estimator.currency, "₹");
        assert!(config.estimator.draft_path.is_none());
        assert!(config.tui.show_hints);
    }

    #[test]
    fn test_explicit_override_wins() {
        let config: PredictoConfig =
            toml::from_str("[estimator]\ndraft_path = \"/tmp/other.json\"\n").unwrap();
        let path = config
            .draft_path(Some(PathBuf::from("/tmp/flag.json")))
            .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/flag.json"));
    }
}
