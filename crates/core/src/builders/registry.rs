//! Registration table of output builders
//!
//! Formats are registered statically as `name → factory` pairs. A registry
//! is read-only once built; each dispatch constructs a fresh builder.

use super::{
    AnsiBuilder, BootstrapBuilder, FoundationBuilder, HtmlBuilder, JsonBuilder, PathBuilder,
    TrailBuilder, YamlBuilder,
};
use crate::engine::BreadcrumbError;
use std::collections::BTreeMap;

/// Constructor of a builder instance
pub type BuilderFactory = fn() -> Box<dyn TrailBuilder>;

/// Builders shipped with the library
const BUILTIN_BUILDERS: &[(&str, BuilderFactory)] = &[
    ("html", HtmlBuilder::create as BuilderFactory),
    ("bootstrap2", BootstrapBuilder::create_v2 as BuilderFactory),
    ("bootstrap3", BootstrapBuilder::create_v3 as BuilderFactory),
    ("foundation4", FoundationBuilder::create as BuilderFactory),
    ("path", PathBuilder::create as BuilderFactory),
    ("json", JsonBuilder::create as BuilderFactory),
    ("yaml", YamlBuilder::create as BuilderFactory),
    ("ansi", AnsiBuilder::create as BuilderFactory),
];

/// Normalise a format name for registration and lookup
pub fn normalize_format(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone)]
pub struct BuilderRegistry {
    entries: BTreeMap<String, BuilderFactory>,
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl BuilderRegistry {
    /// Registry of every built-in builder
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_BUILDERS.iter().copied())
    }

    /// Registry built from an explicit table; later duplicates win
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, BuilderFactory)>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(name, factory)| (normalize_format(name.as_ref()), factory))
            .collect();
        Self { entries }
    }

    /// Supported format names, sorted
    pub fn discover(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_format(name))
    }

    /// Factory for `name`, or `UnsupportedFormat`
    pub fn resolve(&self, name: &str) -> Result<BuilderFactory, BreadcrumbError> {
        self.entries
            .get(&normalize_format(name))
            .copied()
            .ok_or_else(|| BreadcrumbError::UnsupportedFormat(name.to_string()))
    }

    /// Construct a fresh builder for `name`
    pub fn create(&self, name: &str) -> Result<Box<dyn TrailBuilder>, BreadcrumbError> {
        let factory = self.resolve(name)?;
        Ok(factory())
    }
}
