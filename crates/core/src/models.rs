//! Data models for breadcrumb trails
//!
//! This module defines the values that make up a trail: the raw segment
//! name a caller supplies, the resolved [`Segment`] stored in the
//! collection, and the per-call options for appending or replacing one.

use crate::engine::BreadcrumbError;
use crate::translation::TranslateDirective;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Untranslated identifier of a segment, built from a string or an integer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawName(String);

impl RawName {
    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the name and return the owned string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RawName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RawName {
    fn from(name: &str) -> Self {
        RawName(name.to_string())
    }
}

impl From<String> for RawName {
    fn from(name: String) -> Self {
        RawName(name)
    }
}

impl From<&String> for RawName {
    fn from(name: &String) -> Self {
        RawName(name.clone())
    }
}

macro_rules! raw_name_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawName {
                fn from(value: $ty) -> Self {
                    RawName(value.to_string())
                }
            }
        )*
    };
}

raw_name_from_int!(i32, i64, u32, u64, usize);

impl TryFrom<&Value> for RawName {
    type Error = BreadcrumbError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(RawName(s.clone())),
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(RawName(n.to_string())),
            other => Err(BreadcrumbError::InvalidArgument(format!(
                "segment name must be a string or an integer, got {}",
                json_kind(other)
            ))),
        }
    }
}

/// Short name of a JSON value's type, for error messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// End of the trail a new segment is inserted at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
    Left,
    #[default]
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = BreadcrumbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(BreadcrumbError::InvalidArgument(format!(
                "side must be \"left\" or \"right\", got {:?}",
                other
            ))),
        }
    }
}

/// One entry in a breadcrumb trail
///
/// Segments are created by the controller only. Apart from [`set_translated`]
/// and [`disable`] they are immutable once stored.
///
/// [`set_translated`]: Segment::set_translated
/// [`disable`]: Segment::disable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Identifier supplied by the caller
    raw_name: String,

    /// Text to render, fixed when the segment is resolved
    translated_name: String,

    /// Links to the base reference instead of the accumulated path
    is_base: bool,

    /// Rendered as plain text, never as a link
    is_disabled: bool,

    /// Literal link target, set only for title/link pairs
    fixed_link: Option<String>,
}

impl Segment {
    /// Create an unresolved segment; its display text starts as the raw name
    pub(crate) fn new(raw_name: RawName, is_base: bool) -> Self {
        let raw_name = raw_name.into_string();
        Self {
            translated_name: raw_name.clone(),
            raw_name,
            is_base,
            is_disabled: false,
            fixed_link: None,
        }
    }

    /// Create a pre-resolved segment from a literal title and link
    pub(crate) fn linked(title: String, link: String) -> Self {
        Self {
            translated_name: title.clone(),
            raw_name: title,
            is_base: false,
            is_disabled: false,
            fixed_link: Some(link),
        }
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    pub fn translated_name(&self) -> &str {
        &self.translated_name
    }

    pub fn is_base(&self) -> bool {
        self.is_base
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    pub fn fixed_link(&self) -> Option<&str> {
        self.fixed_link.as_deref()
    }

    /// Text a builder should render: disabled segments skip translation
    pub fn display_text(&self) -> &str {
        if self.is_disabled {
            &self.raw_name
        } else {
            &self.translated_name
        }
    }

    /// Fix the display text of this segment
    pub fn set_translated(&mut self, text: impl Into<String>) {
        self.translated_name = text.into();
    }

    /// Mark the segment as disabled (idempotent)
    pub fn disable(&mut self) {
        self.is_disabled = true;
    }

    /// Re-apply link and disabled state ahead of a re-resolution in place
    pub(crate) fn reset_state(&mut self, is_base: bool, disabled: bool) {
        self.is_base = is_base;
        self.is_disabled = disabled;
    }
}

/// Optional parameters of `append` and `replace`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Insertion side (ignored by `replace`)
    pub side: Side,

    /// Whether the segment links to the base reference
    pub is_base: bool,

    /// How the display text is derived
    pub translate: TranslateDirective,

    /// Whether the segment is rendered without a link
    pub disabled: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            side: Side::Right,
            is_base: false,
            translate: TranslateDirective::UseDictionary,
            disabled: false,
        }
    }
}

impl SegmentOptions {
    /// Options for inserting at the left end
    pub fn left() -> Self {
        Self::default().with_side(Side::Left)
    }

    /// Set the insertion side (builder pattern)
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Set the base flag (builder pattern)
    pub fn with_base(mut self, is_base: bool) -> Self {
        self.is_base = is_base;
        self
    }

    /// Set the translation directive (builder pattern)
    pub fn with_translate(mut self, translate: impl Into<TranslateDirective>) -> Self {
        self.translate = translate.into();
        self
    }

    /// Set the disabled flag (builder pattern)
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
