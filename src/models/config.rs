use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Named dye descriptors, e.g. `ruby: "R:#ff0000,#880000"`
    #[serde(default)]
    pub presets: BTreeMap<String, String>,

    /// PNG output compression
    #[serde(default)]
    pub compression: Compression,

    /// Where the configuration was read from, if anywhere
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// PNG output compression level
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    Fast,
    #[default]
    Default,
    Best,
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // An empty document is valid and means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from an explicit path. A missing file is an error.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)?;
        config.source = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            presets = config.presets.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration from the path in `CONFIG_FILE`, falling back to
    /// defaults when the variable is unset or the file is unusable
    pub fn load_from_env() -> Self {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_or_default(Path::new(&path)),
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from `path`, logging a warning and using
    /// defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Look up a preset descriptor by name
    pub fn preset(&self, name: &str) -> Result<&str, ConfigError> {
        self.presets
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }
}
