//! Output builders module
//!
//! This module provides the [`TrailBuilder`] capability, the render options
//! passed through to it, and the built-in builders for HTML, Bootstrap,
//! Foundation, plain-text path, JSON, YAML and ANSI output.

mod ansi;
mod bootstrap;
mod foundation;
mod html;
mod json;
mod path;
pub mod registry;
mod yaml;

pub use ansi::AnsiBuilder;
pub use bootstrap::BootstrapBuilder;
pub use foundation::FoundationBuilder;
pub use html::HtmlBuilder;
pub use json::JsonBuilder;
pub use path::PathBuilder;
pub use registry::{BuilderFactory, BuilderRegistry};
pub use yaml::YamlBuilder;

use crate::config::BreadcrumbConfig;
use crate::engine::BreadcrumbError;
use crate::models::Segment;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Builder errors
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Rendering error: {0}")]
    RenderingError(String),
}

/// Capability implemented by every output format
pub trait TrailBuilder: Send + Sync {
    /// Registered format name
    fn name(&self) -> &'static str;

    /// Render the trail in `ctx` using `options`
    fn build(&self, ctx: &BuildContext<'_>, options: &RenderOptions) -> Result<String, BuildError>;
}

/// Everything a builder receives from the controller
#[derive(Debug, Clone)]
pub struct BuildContext<'a> {
    /// Present segments in render order
    pub segments: Vec<&'a Segment>,

    /// Base reference used by base segments and link accumulation
    pub base: Option<&'a str>,

    /// Configuration of the controller that dispatched the build
    pub config: &'a BreadcrumbConfig,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        segments: Vec<&'a Segment>,
        base: Option<&'a str>,
        config: &'a BreadcrumbConfig,
    ) -> Self {
        Self {
            segments,
            base,
            config,
        }
    }
}

/// Text casing applied to rendered segment text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Casing {
    Lower,
    Upper,
    /// First letter of every word uppercase
    Title,
    /// First letter of the text uppercase
    Sentence,
}

impl Casing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Casing::Lower => "lower",
            Casing::Upper => "upper",
            Casing::Title => "title",
            Casing::Sentence => "sentence",
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            Casing::Lower => text.to_lowercase(),
            Casing::Upper => text.to_uppercase(),
            Casing::Title => word_regex()
                .replace_all(text, |caps: &regex::Captures| capitalize(&caps[0]))
                .into_owned(),
            Casing::Sentence => capitalize(text),
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Casing {
    type Err = BreadcrumbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower" | "lowercase" => Ok(Casing::Lower),
            "upper" | "uppercase" => Ok(Casing::Upper),
            "title" | "titlecase" => Ok(Casing::Title),
            "sentence" | "ucfirst" => Ok(Casing::Sentence),
            other => Err(BreadcrumbError::InvalidArgument(format!(
                "unknown casing {:?}",
                other
            ))),
        }
    }
}

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[^\s_\-/]+").expect("word pattern is valid"))
}

/// Uppercase the first character, lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Render options passed through the controller untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Casing applied to segment text
    pub casing: Option<Casing>,

    /// Render the last segment as plain text
    pub last_is_not_link: bool,

    /// Separator between segments; builders pick their own default
    pub separator: Option<String>,

    /// Extra attributes for the builder's markup
    pub customizations: BTreeMap<String, String>,

    /// Link every segment relative to the base only
    pub different_links: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            casing: None,
            last_is_not_link: true,
            separator: None,
            customizations: BTreeMap::new(),
            different_links: false,
        }
    }
}

impl RenderOptions {
    /// Set casing (builder pattern)
    pub fn with_casing(mut self, casing: Casing) -> Self {
        self.casing = Some(casing);
        self
    }

    /// Set whether the last segment is plain text (builder pattern)
    pub fn with_last_is_not_link(mut self, last_is_not_link: bool) -> Self {
        self.last_is_not_link = last_is_not_link;
        self
    }

    /// Set separator (builder pattern)
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Add one customization (builder pattern)
    pub fn with_customization(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.customizations.insert(key.into(), value.into());
        self
    }

    /// Set different-links mode (builder pattern)
    pub fn with_different_links(mut self, different_links: bool) -> Self {
        self.different_links = different_links;
        self
    }

    /// The configured separator or `default`
    pub fn separator_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.separator.as_deref().unwrap_or(default)
    }
}

/// A segment after link derivation and casing, ready for markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// Text to render
    pub text: String,

    /// Link target; `None` renders as plain text
    pub link: Option<String>,

    /// Whether the segment is disabled
    pub disabled: bool,

    /// Whether the segment links to the base reference
    pub base: bool,
}

fn join_link(prefix: &str, name: &str) -> String {
    format!("{}/{}", prefix, name.trim_matches('/'))
}

/// Derive link targets and cased text for every segment
///
/// Fixed links are used verbatim. A base segment links to the base
/// reference and restarts accumulation. Other segments extend the running
/// path, or with `different_links` hang directly off the base. Disabled
/// segments, and the last one when `last_is_not_link` is set, get no link.
pub fn derive_crumbs(ctx: &BuildContext<'_>, options: &RenderOptions) -> Vec<Crumb> {
    let base = ctx.base.map(|b| b.trim_end_matches('/')).unwrap_or("");
    let mut running = base.to_string();
    let last_index = ctx.segments.len().saturating_sub(1);

    ctx.segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let target = if let Some(link) = segment.fixed_link() {
                link.to_string()
            } else if segment.is_base() {
                running = base.to_string();
                if base.is_empty() {
                    "/".to_string()
                } else {
                    base.to_string()
                }
            } else if options.different_links {
                join_link(base, segment.raw_name())
            } else {
                running = join_link(&running, segment.raw_name());
                running.clone()
            };

            let linked =
                !segment.is_disabled() && !(options.last_is_not_link && index == last_index);

            let text = match options.casing {
                Some(casing) => casing.apply(segment.display_text()),
                None => segment.display_text().to_string(),
            };

            Crumb {
                text,
                link: linked.then_some(target),
                disabled: segment.is_disabled(),
                base: segment.is_base(),
            }
        })
        .collect()
}

/// Escape text for HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render customizations as HTML attributes, merging `class` into `base_class`
pub fn render_attributes(base_class: Option<&str>, customizations: &BTreeMap<String, String>) -> String {
    let mut output = String::new();

    let extra_class = customizations.get("class").map(String::as_str);
    let class = match (base_class, extra_class) {
        (Some(base), Some(extra)) => Some(format!("{} {}", base, extra)),
        (Some(base), None) => Some(base.to_string()),
        (None, Some(extra)) => Some(extra.to_string()),
        (None, None) => None,
    };
    if let Some(class) = class {
        output.push_str(&format!(" class=\"{}\"", escape_html(&class)));
    }

    for (key, value) in customizations.iter().filter(|(k, _)| k.as_str() != "class") {
        output.push_str(&format!(" {}=\"{}\"", escape_html(key), escape_html(value)));
    }

    output
}

/// Anchor markup for a linked crumb, escaped text otherwise
pub(crate) fn anchor_or_text(crumb: &Crumb, attributes: &str) -> String {
    match &crumb.link {
        Some(link) => format!(
            "<a href=\"{}\"{}>{}</a>",
            escape_html(link),
            attributes,
            escape_html(&crumb.text)
        ),
        None => escape_html(&crumb.text),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{RawName, Segment};

    pub fn segments(names: &[&str]) -> Vec<Segment> {
        names
            .iter()
            .map(|name| {
                let mut segment = Segment::new(RawName::from(*name), false);
                segment.set_translated(name.to_uppercase());
                segment
            })
            .collect()
    }

    pub fn base_segment(name: &str) -> Segment {
        Segment::new(RawName::from(name), true)
    }
}
