//! Translation of segment names
//!
//! A [`TranslationResolver`] turns a raw segment name into its display text
//! according to a [`TranslateDirective`]. Dictionaries come either from the
//! built-in locale files compiled into the library or from a directory of
//! `<locale>.yaml|yml|json` files.

use crate::config::{BreadcrumbConfig, ConfigError, DEFAULT_LANGUAGE};
use crate::engine::BreadcrumbError;
use crate::models::json_kind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Dictionaries compiled into the library
const BUILTIN_DICTIONARIES: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.yaml")),
    ("hu", include_str!("../locales/hu.yaml")),
];

/// Extensions recognised in a dictionary directory, in lookup order
const DICTIONARY_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// How the display text of a segment is derived
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TranslateDirective {
    /// Look the raw name up in the dictionary
    #[default]
    UseDictionary,
    /// Display the raw name unchanged
    Skip,
    /// Display this text verbatim
    Literal(String),
}

impl From<bool> for TranslateDirective {
    fn from(translate: bool) -> Self {
        if translate {
            TranslateDirective::UseDictionary
        } else {
            TranslateDirective::Skip
        }
    }
}

impl From<&str> for TranslateDirective {
    fn from(text: &str) -> Self {
        TranslateDirective::Literal(text.to_string())
    }
}

impl From<String> for TranslateDirective {
    fn from(text: String) -> Self {
        TranslateDirective::Literal(text)
    }
}

/// What a dictionary miss renders as
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissFallback {
    /// The raw name itself
    #[default]
    RawName,
    /// An empty string
    Empty,
    /// A template where `{key}` is replaced with the raw name
    Marker(String),
}

impl MissFallback {
    /// Produce the fallback text for a missing key
    pub fn apply(&self, key: &str) -> String {
        match self {
            MissFallback::RawName => key.to_string(),
            MissFallback::Empty => String::new(),
            MissFallback::Marker(template) => template.replace("{key}", key),
        }
    }
}

/// Normalise a locale tag: trimmed, lowercase, `_` replaced by `-`
pub fn normalize_locale(locale: &str) -> String {
    locale.trim().to_lowercase().replace('_', "-")
}

/// Whether a normalised tag is made only of `[a-z0-9-]`
fn is_valid_locale(normalized: &str) -> bool {
    !normalized.is_empty()
        && normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Candidate tags for a locale, most specific first
fn locale_candidates(locale: &str) -> Vec<String> {
    let normalized = normalize_locale(locale);
    let mut candidates = vec![normalized.clone()];
    if let Some((primary, _)) = normalized.split_once('-') {
        if !primary.is_empty() {
            candidates.push(primary.to_string());
        }
    }
    candidates
}

/// Locales compiled into the library
pub fn builtin_locales() -> Vec<&'static str> {
    BUILTIN_DICTIONARIES.iter().map(|(locale, _)| *locale).collect()
}

/// Locales provided by a dictionary directory, sorted
pub fn available_locales(dir: &Path) -> Result<Vec<String>, ConfigError> {
    let mut locales = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !DICTIONARY_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
            continue;
        }

        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            locales.push(normalize_locale(stem));
        }
    }

    locales.sort();
    locales.dedup();
    Ok(locales)
}

/// Key to display-text lookup table for one locale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    locale: String,
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new(locale: impl Into<String>, entries: HashMap<String, String>) -> Self {
        Self {
            locale: locale.into(),
            entries,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key, then its lowercase form
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .or_else(|| self.entries.get(&key.to_lowercase()))
            .map(String::as_str)
    }

    /// Add entries, overriding existing keys
    pub fn extend(&mut self, entries: HashMap<String, String>) {
        self.entries.extend(entries);
    }

    /// Load a dictionary from `dir` when given, otherwise from the built-ins
    pub fn load(locale: &str, dir: Option<&Path>) -> Result<Self, ConfigError> {
        match dir {
            Some(dir) => Self::from_dir(dir, locale),
            None => Self::builtin(locale),
        }
    }

    /// Load one of the dictionaries compiled into the library
    pub fn builtin(locale: &str) -> Result<Self, ConfigError> {
        for candidate in locale_candidates(locale) {
            if let Some((_, content)) = BUILTIN_DICTIONARIES
                .iter()
                .find(|(name, _)| *name == candidate)
            {
                let entries: HashMap<String, String> = serde_yaml::from_str(content)?;
                return Ok(Self::new(candidate, entries));
            }
        }

        Err(ConfigError::UnknownLocale(locale.to_string()))
    }

    /// Load `<dir>/<locale>.{yaml,yml,json}`
    pub fn from_dir(dir: &Path, locale: &str) -> Result<Self, ConfigError> {
        if !is_valid_locale(&normalize_locale(locale)) {
            return Err(ConfigError::UnknownLocale(locale.to_string()));
        }

        for candidate in locale_candidates(locale) {
            for ext in DICTIONARY_EXTENSIONS {
                let path = dir.join(format!("{}.{}", candidate, ext));
                if !path.is_file() {
                    continue;
                }

                let content = fs::read_to_string(&path)?;
                let entries: HashMap<String, String> = if *ext == "json" {
                    serde_json::from_str(&content)?
                } else {
                    serde_yaml::from_str(&content)?
                };

                tracing::debug!(
                    path = %path.display(),
                    entries = entries.len(),
                    "loaded dictionary"
                );
                return Ok(Self::new(candidate, entries));
            }
        }

        Err(ConfigError::UnknownLocale(locale.to_string()))
    }
}

/// Full translation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationSettings {
    /// Locale identifier
    pub language: String,

    /// What a dictionary miss renders as
    pub miss_fallback: MissFallback,

    /// Directory of dictionary files; built-ins when absent
    pub dictionary_dir: Option<PathBuf>,

    /// Entries layered over the loaded dictionary
    pub entries: HashMap<String, String>,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            miss_fallback: MissFallback::default(),
            dictionary_dir: None,
            entries: HashMap::new(),
        }
    }
}

impl TranslationSettings {
    /// Settings derived from a controller configuration
    pub fn from_config(config: &BreadcrumbConfig) -> Self {
        Self {
            language: config.language.clone(),
            miss_fallback: config.miss_fallback.clone(),
            dictionary_dir: config.dictionary_dir.clone(),
            entries: HashMap::new(),
        }
    }
}

/// Input accepted when reconfiguring translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationConfig {
    /// Switch locale, keeping the current fallback and dictionary source
    Locale(String),
    /// Replace the whole translation setup
    Settings(TranslationSettings),
}

impl TranslationConfig {
    /// Resolve into full settings, filling gaps from `base`
    pub fn into_settings(self, base: &BreadcrumbConfig) -> TranslationSettings {
        match self {
            TranslationConfig::Locale(language) => TranslationSettings {
                language,
                ..TranslationSettings::from_config(base)
            },
            TranslationConfig::Settings(settings) => settings,
        }
    }
}

impl From<&str> for TranslationConfig {
    fn from(locale: &str) -> Self {
        TranslationConfig::Locale(locale.to_string())
    }
}

impl From<String> for TranslationConfig {
    fn from(locale: String) -> Self {
        TranslationConfig::Locale(locale)
    }
}

impl From<TranslationSettings> for TranslationConfig {
    fn from(settings: TranslationSettings) -> Self {
        TranslationConfig::Settings(settings)
    }
}

impl TryFrom<Value> for TranslationConfig {
    type Error = BreadcrumbError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(locale) => Ok(TranslationConfig::Locale(locale)),
            Value::Object(_) => serde_json::from_value(value)
                .map(TranslationConfig::Settings)
                .map_err(|e| {
                    BreadcrumbError::InvalidArgument(format!("invalid translation settings: {}", e))
                }),
            other => Err(BreadcrumbError::InvalidArgument(format!(
                "translation config must be a locale string or a settings object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

/// Resolves segment display text against one dictionary
#[derive(Debug, Clone)]
pub struct TranslationResolver {
    dictionary: Dictionary,
    fallback: MissFallback,
}

impl TranslationResolver {
    pub fn new(dictionary: Dictionary, fallback: MissFallback) -> Self {
        Self {
            dictionary,
            fallback,
        }
    }

    /// Build a resolver, loading the dictionary the settings point at
    pub fn from_settings(settings: &TranslationSettings) -> Result<Self, BreadcrumbError> {
        if settings.language.trim().is_empty() {
            return Err(BreadcrumbError::InvalidArgument(
                "locale must be a non-empty string".to_string(),
            ));
        }
        if !is_valid_locale(&normalize_locale(&settings.language)) {
            return Err(BreadcrumbError::InvalidArgument(format!(
                "locale {:?} may only contain letters, digits, '-' and '_'",
                settings.language
            )));
        }

        let mut dictionary =
            Dictionary::load(&settings.language, settings.dictionary_dir.as_deref())?;
        dictionary.extend(settings.entries.clone());

        Ok(Self::new(dictionary, settings.miss_fallback.clone()))
    }

    pub fn locale(&self) -> &str {
        self.dictionary.locale()
    }

    pub fn fallback(&self) -> &MissFallback {
        &self.fallback
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Display text for `raw_name` under `directive`
    pub fn resolve(&self, raw_name: &str, directive: &TranslateDirective) -> String {
        match directive {
            TranslateDirective::Skip => raw_name.to_string(),
            TranslateDirective::Literal(text) => text.clone(),
            TranslateDirective::UseDictionary => match self.dictionary.lookup(raw_name) {
                Some(text) => text.to_string(),
                None => {
                    tracing::trace!(
                        key = raw_name,
                        locale = self.locale(),
                        "dictionary miss"
                    );
                    self.fallback.apply(raw_name)
                }
            },
        }
    }
}
