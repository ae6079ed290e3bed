//! Configuration module for breadcrumb trails
//!
//! This module provides the configuration consumed by the controller: the
//! default locale, the default output format, the dictionary-miss policy and
//! an optional directory of locale dictionaries.

use crate::translation::MissFallback;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default locale used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default output format used when none is configured
pub const DEFAULT_OUTPUT_FORMAT: &str = "html";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("No dictionary available for locale: {0}")]
    UnknownLocale(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Configuration for a breadcrumb controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbConfig {
    /// Locale used to pick the translation dictionary
    pub language: String,

    /// Builder used when `build` is called without a format
    pub output_format: String,

    /// What a dictionary miss renders as
    pub miss_fallback: MissFallback,

    /// Directory holding `<locale>.yaml|yml|json` dictionaries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary_dir: Option<PathBuf>,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            miss_fallback: MissFallback::default(),
            dictionary_dir: None,
        }
    }
}

impl BreadcrumbConfig {
    /// Create a config with the given locale
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Default::default()
        }
    }

    /// Set the locale (builder pattern)
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the default output format (builder pattern)
    pub fn with_output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = format.into();
        self
    }

    /// Set the dictionary-miss policy (builder pattern)
    pub fn with_miss_fallback(mut self, fallback: MissFallback) -> Self {
        self.miss_fallback = fallback;
        self
    }

    /// Set the dictionary directory (builder pattern)
    pub fn with_dictionary_dir(mut self, dir: PathBuf) -> Self {
        self.dictionary_dir = Some(dir);
        self
    }

    /// Default output format, trimmed and lowercased
    pub fn default_format(&self) -> String {
        self.output_format.trim().to_lowercase()
    }

    /// Load a config file, picking the parser from the extension
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let config: BreadcrumbConfig = match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            other => {
                return Err(ConfigError::InvalidConfig(format!(
                    "unsupported config file extension {:?} for {}",
                    other,
                    path.display()
                )))
            }
        };

        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Apply `CRUMBTRAIL_*` environment overrides
    pub fn merge_with_env(&mut self) {
        if let Ok(language) = std::env::var("CRUMBTRAIL_LANGUAGE") {
            self.language = language;
        }

        if let Ok(format) = std::env::var("CRUMBTRAIL_OUTPUT_FORMAT") {
            self.output_format = format;
        }

        if let Ok(dir) = std::env::var("CRUMBTRAIL_DICTIONARY_DIR") {
            self.dictionary_dir = Some(PathBuf::from(dir));
        }
    }
}
