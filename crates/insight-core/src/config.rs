use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level application configuration, loaded from TOML.
///
/// Nothing here changes what the analytics functions compute: config points
/// at input data and trims display lists, and that is all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from the default path
    /// (~/.config/support-insight/config.toml), falling back to defaults if
    /// the file doesn't exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Write current configuration to the default path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;
        Ok(())
    }

    /// Default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("support-insight")
            .join("config.toml")
    }
}

/// Input data configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the JSON records file, used when --records is not given.
    pub records_path: Option<PathBuf>,
}

/// Display truncation limits for generated reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Feedback quotes shown per highlight section.
    pub feedback_highlights: usize,
    /// Handoff reasons shown in the operations section.
    pub handoff_reasons: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            feedback_highlights: 3,
            handoff_reasons: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("feedback_highlights"));
        assert!(toml_str.contains("handoff_reasons"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = AppConfig::default();
        config.data.records_path = Some(PathBuf::from("/tmp/records.json"));
        config.display.feedback_highlights = 5;

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.data.records_path, config.data.records_path);
        assert_eq!(parsed.display.feedback_highlights, 5);
        assert_eq!(parsed.display.handoff_reasons, 5);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: AppConfig = toml::from_str("[data]\n").unwrap();
        assert!(parsed.data.records_path.is_none());
        assert_eq!(parsed.display.feedback_highlights, 3);
    }
}
