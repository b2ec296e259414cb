//! YAML configuration file support.
//!
//! A single YAML document selects the preprocessing behavior:
//!
//! ```yaml
//! version: "1.0"
//! name: "sentiment-batch"
//!
//! preprocess:
//!   version: 1
//!   strip_urls: true
//!   strip_mentions: true
//!   segment_hashtags: true
//!   hashtag_mode: compatible   # or "anchored"
//! ```
//!
//! Every `preprocess` field is optional and falls back to
//! [`PreprocessConfig::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use twitter::{HashtagMode, PreprocessConfig};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SentiConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub preprocess: PreprocessYamlConfig,
}

impl SentiConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: SentiConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.preprocess.validate()
    }

    pub fn preprocess_config(&self) -> PreprocessConfig {
        self.preprocess.to_preprocess_config()
    }
}

impl Default for SentiConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            preprocess: PreprocessYamlConfig::default(),
        }
    }
}

/// `preprocess:` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "true_value")]
    pub strip_urls: bool,

    #[serde(default = "true_value")]
    pub strip_mentions: bool,

    #[serde(default = "true_value")]
    pub segment_hashtags: bool,

    #[serde(default)]
    pub hashtag_mode: HashtagMode,
}

impl PreprocessYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "preprocess.version must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_preprocess_config(&self) -> PreprocessConfig {
        PreprocessConfig {
            version: self.version,
            strip_urls: self.strip_urls,
            strip_mentions: self.strip_mentions,
            segment_hashtags: self.segment_hashtags,
            hashtag_mode: self.hashtag_mode,
        }
    }
}

impl Default for PreprocessYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            strip_urls: true,
            strip_mentions: true,
            segment_hashtags: true,
            hashtag_mode: HashtagMode::Compatible,
        }
    }
}

fn default_version() -> u32 {
    1
}

fn true_value() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sections_fall_back_to_defaults() {
        let config = SentiConfig::from_yaml("version: \"1.0\"\n").expect("parse");
        assert_eq!(config.preprocess_config(), PreprocessConfig::default());
        assert!(config.name.is_none());
    }

    #[test]
    fn partial_section_overrides_fields() {
        let yaml = r#"
version: "1"
name: "mentions-kept"
preprocess:
  strip_mentions: false
  hashtag_mode: anchored
"#;
        let config = SentiConfig::from_yaml(yaml).expect("parse");
        let cfg = config.preprocess_config();
        assert_eq!(config.name.as_deref(), Some("mentions-kept"));
        assert!(cfg.strip_urls);
        assert!(!cfg.strip_mentions);
        assert!(cfg.segment_hashtags);
        assert_eq!(cfg.hashtag_mode, HashtagMode::Anchored);
    }

    #[test]
    fn unsupported_version_rejected() {
        let res = SentiConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(res, Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"));
    }

    #[test]
    fn zero_preprocess_version_rejected() {
        let yaml = "version: \"1.0\"\npreprocess:\n  version: 0\n";
        assert!(matches!(
            SentiConfig::from_yaml(yaml),
            Err(ConfigLoadError::Validation(_))
        ));
    }

    #[test]
    fn unknown_hashtag_mode_is_parse_error() {
        let yaml = "version: \"1.0\"\npreprocess:\n  hashtag_mode: fuzzy\n";
        assert!(matches!(
            SentiConfig::from_yaml(yaml),
            Err(ConfigLoadError::YamlParse(_))
        ));
    }
}
