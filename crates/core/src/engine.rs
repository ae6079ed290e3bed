//! Breadcrumb controller module
//!
//! This module provides [`BreadcrumbController`], the facade callers use to
//! assemble a trail and render it. Every mutation resolves display text
//! immediately; `build` only dispatches to the selected builder.

use crate::builders::registry::normalize_format;
use crate::builders::{BuildContext, BuildError, BuilderRegistry, RenderOptions};
use crate::collection::{CollectionError, SegmentCollection};
use crate::config::{BreadcrumbConfig, ConfigError};
use crate::models::{json_kind, RawName, Segment, SegmentOptions};
use crate::translation::{TranslationConfig, TranslationResolver, TranslationSettings};
use serde_json::Value;
use thiserror::Error;

/// Controller errors
#[derive(Error, Debug)]
pub enum BreadcrumbError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No segment at position {0}")]
    OutOfRange(usize),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Build error: {0}")]
    Build(#[from] BuildError),
}

impl From<CollectionError> for BreadcrumbError {
    fn from(err: CollectionError) -> Self {
        match err {
            CollectionError::OutOfRange(pos) => BreadcrumbError::OutOfRange(pos),
        }
    }
}

/// Bulk input accepted by [`BreadcrumbController::from`]
#[derive(Debug, Clone, PartialEq)]
pub enum TrailInput {
    /// A JSON array literal, or a `/`-separated path
    Text(String),
    /// Segment names in order
    List(Vec<RawName>),
    /// An already-parsed JSON value; only strings and arrays are accepted
    Json(Value),
}

impl From<&str> for TrailInput {
    fn from(text: &str) -> Self {
        TrailInput::Text(text.to_string())
    }
}

impl From<String> for TrailInput {
    fn from(text: String) -> Self {
        TrailInput::Text(text)
    }
}

impl<T: Into<RawName>> From<Vec<T>> for TrailInput {
    fn from(names: Vec<T>) -> Self {
        TrailInput::List(names.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<RawName>, const N: usize> From<[T; N]> for TrailInput {
    fn from(names: [T; N]) -> Self {
        TrailInput::List(names.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for TrailInput {
    fn from(value: Value) -> Self {
        TrailInput::Json(value)
    }
}

fn non_empty_required() -> BreadcrumbError {
    BreadcrumbError::InvalidArgument("non-empty array required".to_string())
}

fn names_from_json(items: &[Value]) -> Result<Vec<RawName>, BreadcrumbError> {
    if items.is_empty() {
        return Err(non_empty_required());
    }
    items.iter().map(RawName::try_from).collect()
}

/// A JSON array literal if it parses as one, otherwise the non-empty
/// components of a `/`-separated path
fn parse_trail_text(text: &str) -> Result<Vec<RawName>, BreadcrumbError> {
    if let Ok(items) = serde_json::from_str::<Vec<Value>>(text) {
        return names_from_json(&items);
    }

    Ok(text
        .split('/')
        .filter(|component| !component.is_empty())
        .map(RawName::from)
        .collect())
}

/// Fix state and display text of `segment` according to `options`
fn resolve_segment(resolver: &TranslationResolver, segment: &mut Segment, options: &SegmentOptions) {
    segment.reset_state(options.is_base, options.disabled);
    let text = if options.disabled {
        segment.raw_name().to_string()
    } else {
        resolver.resolve(segment.raw_name(), &options.translate)
    };
    segment.set_translated(text);
}

/// Owns one trail: its segments, translation setup and builder registry
///
/// A controller is a single-session value. Share it across threads only
/// behind external synchronisation.
#[derive(Debug)]
pub struct BreadcrumbController {
    config: BreadcrumbConfig,
    base_reference: Option<String>,
    segments: SegmentCollection,
    resolver: TranslationResolver,
    registry: BuilderRegistry,
}

impl BreadcrumbController {
    /// Create a controller with the built-in builders
    pub fn new(config: BreadcrumbConfig) -> Result<Self, BreadcrumbError> {
        Self::with_registry(config, BuilderRegistry::builtin())
    }

    /// Create a controller dispatching to `registry`
    pub fn with_registry(
        config: BreadcrumbConfig,
        registry: BuilderRegistry,
    ) -> Result<Self, BreadcrumbError> {
        let resolver = TranslationResolver::from_settings(&TranslationSettings::from_config(&config))?;

        tracing::debug!(
            locale = resolver.locale(),
            formats = ?registry.discover(),
            "breadcrumb controller created"
        );

        Ok(Self {
            config,
            base_reference: None,
            segments: SegmentCollection::new(),
            resolver,
            registry,
        })
    }

    pub fn config(&self) -> &BreadcrumbConfig {
        &self.config
    }

    pub fn base_reference(&self) -> Option<&str> {
        self.base_reference.as_deref()
    }

    pub fn resolver(&self) -> &TranslationResolver {
        &self.resolver
    }

    pub fn registry(&self) -> &BuilderRegistry {
        &self.registry
    }

    /// Output formats this controller can build
    pub fn formats(&self) -> Vec<&str> {
        self.registry.discover()
    }

    /// Set or clear the reference base segments link to
    pub fn set_base_reference(&mut self, base: Option<&str>) -> &mut Self {
        self.base_reference = base.map(str::to_string);
        self
    }

    /// Replace the translation setup
    ///
    /// Segments already in the trail keep their display text.
    pub fn configure_translation(
        &mut self,
        config: impl Into<TranslationConfig>,
    ) -> Result<&mut Self, BreadcrumbError> {
        let settings = config.into().into_settings(&self.config);
        let resolver = TranslationResolver::from_settings(&settings)?;

        tracing::debug!(locale = resolver.locale(), "translation reconfigured");

        self.config.language = settings.language;
        self.config.miss_fallback = settings.miss_fallback;
        self.config.dictionary_dir = settings.dictionary_dir;
        self.resolver = resolver;
        Ok(self)
    }

    /// Append a segment at the right end with default options
    pub fn append(&mut self, raw_name: impl Into<RawName>) -> &mut Self {
        self.append_with(raw_name, SegmentOptions::default())
    }

    /// Append a segment with explicit side, base, translation and disabled options
    pub fn append_with(&mut self, raw_name: impl Into<RawName>, options: SegmentOptions) -> &mut Self {
        let mut segment = Segment::new(raw_name.into(), options.is_base);
        resolve_segment(&self.resolver, &mut segment, &options);

        tracing::debug!(
            raw = segment.raw_name(),
            text = segment.translated_name(),
            side = %options.side,
            "append segment"
        );

        self.segments.append(segment, options.side);
        self
    }

    pub fn disable(&mut self, pos: usize) -> Result<&mut Self, BreadcrumbError> {
        self.segments.disable_at(pos)?;
        tracing::debug!(pos, "disable segment");
        Ok(self)
    }

    /// Remove the segment at `pos`, leaving a hole unless `reindex` is set
    pub fn remove(&mut self, pos: usize, reindex: bool) -> Result<&mut Self, BreadcrumbError> {
        let removed = self.segments.remove_at(pos, reindex)?;
        tracing::debug!(pos, reindex, raw = removed.raw_name(), "remove segment");
        Ok(self)
    }

    /// Replace the segment at `pos`
    ///
    /// With `raw_name` a new segment supersedes the old one. Without it the
    /// existing segment keeps its name and only its state and display text
    /// are re-resolved. The side in `options` is ignored.
    pub fn replace(
        &mut self,
        pos: usize,
        raw_name: Option<RawName>,
        options: SegmentOptions,
    ) -> Result<&mut Self, BreadcrumbError> {
        let replacement = raw_name.map(|name| Segment::new(name, options.is_base));
        let resolver = &self.resolver;

        let segment = self
            .segments
            .replace_at(pos, replacement, |segment| resolve_segment(resolver, segment, &options))?;

        tracing::debug!(
            pos,
            raw = segment.raw_name(),
            text = segment.translated_name(),
            "replace segment"
        );
        Ok(self)
    }

    /// Append segments in bulk from a path, a JSON array or a list of names
    ///
    /// Fails without touching the trail when a list is empty or a JSON
    /// element is neither a string nor an integer.
    pub fn from(&mut self, input: impl Into<TrailInput>) -> Result<&mut Self, BreadcrumbError> {
        let names = match input.into() {
            TrailInput::Text(text) => parse_trail_text(&text)?,
            TrailInput::List(names) if names.is_empty() => return Err(non_empty_required()),
            TrailInput::List(names) => names,
            TrailInput::Json(Value::String(text)) => parse_trail_text(&text)?,
            TrailInput::Json(Value::Array(items)) => names_from_json(&items)?,
            TrailInput::Json(other) => {
                return Err(BreadcrumbError::InvalidArgument(format!(
                    "expected a string or an array, got {}",
                    json_kind(&other)
                )))
            }
        };

        tracing::debug!(count = names.len(), "load segments");

        let resolver = &self.resolver;
        let options = SegmentOptions::default();
        self.segments
            .load_from_sequence(names, |segment| resolve_segment(resolver, segment, &options));
        Ok(self)
    }

    /// Replace the whole trail with literal title/link pairs
    pub fn map<I, T, L>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (T, L)>,
        T: Into<String>,
        L: Into<String>,
    {
        self.segments
            .load_from_pairs(pairs.into_iter().map(|(title, link)| (title.into(), link.into())));
        tracing::debug!(count = self.segments.count(), "mapped segments");
        self
    }

    pub fn number_of_segments(&self) -> usize {
        self.segments.count()
    }

    /// Present segments in render order
    pub fn registered(&self) -> Vec<&Segment> {
        self.segments.all()
    }

    pub fn segment(&self, pos: usize) -> Result<&Segment, BreadcrumbError> {
        Ok(self.segments.get_at(pos)?)
    }

    /// Render the trail with the builder registered as `format`
    ///
    /// `None` selects the configured default format. The output of the
    /// builder is returned untouched.
    pub fn build(
        &self,
        format: Option<&str>,
        options: &RenderOptions,
    ) -> Result<String, BreadcrumbError> {
        let format = match format {
            Some(format) => normalize_format(format),
            None => self.config.default_format(),
        };

        let builder = self.registry.create(&format)?;
        let ctx = BuildContext::new(
            self.segments.all(),
            self.base_reference.as_deref(),
            &self.config,
        );

        tracing::debug!(
            format = builder.name(),
            segments = ctx.segments.len(),
            "build trail"
        );

        Ok(builder.build(&ctx, options)?)
    }

    /// Render with the default format and default options
    pub fn build_default(&self) -> Result<String, BreadcrumbError> {
        self.build(None, &RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{BuilderFactory, TrailBuilder};
    use crate::models::Side;
    use crate::translation::{MissFallback, TranslateDirective};
    use serde_json::json;
    use std::collections::HashMap;

    /// Echoes what it receives; answers `DISABLED` if any segment is disabled
    struct StubBuilder;

    impl TrailBuilder for StubBuilder {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn build(&self, ctx: &BuildContext<'_>, options: &RenderOptions) -> Result<String, BuildError> {
            if ctx.segments.iter().any(|s| s.is_disabled()) {
                return Ok("DISABLED".to_string());
            }
            let texts: Vec<&str> = ctx.segments.iter().map(|s| s.display_text()).collect();
            Ok(format!(
                "{}|base={}|sep={}|last={}|diff={}|attrs={}",
                texts.join(","),
                ctx.base.unwrap_or("-"),
                options.separator.as_deref().unwrap_or("-"),
                options.last_is_not_link,
                options.different_links,
                options.customizations.len()
            ))
        }
    }

    fn stub() -> Box<dyn TrailBuilder> {
        Box::new(StubBuilder)
    }

    fn stub_controller() -> BreadcrumbController {
        let registry = BuilderRegistry::from_entries(vec![("stub", stub as BuilderFactory)]);
        BreadcrumbController::with_registry(
            BreadcrumbConfig::default().with_output_format("stub"),
            registry,
        )
        .unwrap()
    }

    fn controller() -> BreadcrumbController {
        BreadcrumbController::new(BreadcrumbConfig::default()).unwrap()
    }

    fn raw_names(controller: &BreadcrumbController) -> Vec<String> {
        controller
            .registered()
            .iter()
            .map(|s| s.raw_name().to_string())
            .collect()
    }

    #[test]
    fn test_append_then_segment() {
        let mut crumbs = controller();
        crumbs.append("home").append(42u32);

        assert_eq!(crumbs.segment(0).unwrap().raw_name(), "home");
        assert_eq!(crumbs.segment(0).unwrap().translated_name(), "Home");
        assert_eq!(crumbs.segment(1).unwrap().raw_name(), "42");
    }

    #[test]
    fn test_append_sides() {
        let mut crumbs = controller();
        crumbs
            .append_with("name", SegmentOptions::left())
            .append_with("other", SegmentOptions::default().with_side(Side::Right));
        assert_eq!(raw_names(&crumbs), vec!["name", "other"]);

        let mut crumbs = controller();
        crumbs
            .append_with("first", SegmentOptions::left())
            .append_with("second", SegmentOptions::left());
        assert_eq!(raw_names(&crumbs), vec!["second", "first"]);
    }

    #[test]
    fn test_translate_directives_on_append() {
        let mut crumbs = controller();
        crumbs
            .append_with("home", SegmentOptions::default().with_translate(false))
            .append_with("about", SegmentOptions::default().with_translate("Who we are"))
            .append_with("contact", SegmentOptions::default().with_disabled(true))
            .append("unknown-key");

        let texts: Vec<&str> = crumbs.registered().iter().map(|s| s.translated_name()).collect();
        assert_eq!(texts, vec!["home", "Who we are", "contact", "unknown-key"]);
    }

    #[test]
    fn test_remove_without_reindex() {
        let mut crumbs = controller();
        crumbs.from("/a/b/c").unwrap();
        crumbs.remove(1, false).unwrap();

        assert!(matches!(crumbs.segment(1), Err(BreadcrumbError::OutOfRange(1))));
        assert_eq!(crumbs.segment(2).unwrap().raw_name(), "c");
        assert_eq!(crumbs.number_of_segments(), 2);
        assert!(matches!(crumbs.remove(1, false), Err(BreadcrumbError::OutOfRange(1))));
    }

    #[test]
    fn test_remove_with_reindex() {
        let mut crumbs = controller();
        crumbs.from("/a/b/c").unwrap();
        crumbs.remove(0, true).unwrap();

        assert_eq!(crumbs.segment(1).unwrap().raw_name(), "c");
        assert!(crumbs.segment(2).is_err());
    }

    #[test]
    fn test_disable_renders_sentinel() {
        let mut crumbs = stub_controller();
        crumbs.from(["a", "b"]).unwrap();
        assert_ne!(crumbs.build_default().unwrap(), "DISABLED");

        crumbs.disable(1).unwrap();
        assert!(crumbs.segment(1).unwrap().is_disabled());
        assert_eq!(crumbs.build_default().unwrap(), "DISABLED");
        assert!(matches!(crumbs.disable(5), Err(BreadcrumbError::OutOfRange(5))));
    }

    #[test]
    fn test_build_passes_options_through() {
        let mut crumbs = stub_controller();
        crumbs.set_base_reference(Some("https://example.com"));
        crumbs.append_with("home", SegmentOptions::default().with_translate(false));
        crumbs.append("blog");

        let options = RenderOptions::default()
            .with_separator("::")
            .with_last_is_not_link(false)
            .with_different_links(true)
            .with_customization("id", "x");

        assert_eq!(
            crumbs.build(Some("STUB"), &options).unwrap(),
            "home,Blog|base=https://example.com|sep=::|last=false|diff=true|attrs=1"
        );
    }

    #[test]
    fn test_build_unsupported_format() {
        let crumbs = controller();
        assert!(matches!(
            crumbs.build(Some("unsupported-xyz"), &RenderOptions::default()),
            Err(BreadcrumbError::UnsupportedFormat(_))
        ));

        let stubbed = stub_controller();
        assert!(matches!(
            stubbed.build(Some("html"), &RenderOptions::default()),
            Err(BreadcrumbError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_build_default_format() {
        let mut crumbs = controller();
        crumbs.set_base_reference(Some("/"));
        crumbs.from("/users/42").unwrap();

        assert_eq!(crumbs.build_default().unwrap(), "<a href=\"/users\">Users</a> / 42");
        assert_eq!(
            crumbs.build(Some("path"), &RenderOptions::default()).unwrap(),
            "Users > 42"
        );
    }

    #[test]
    fn test_default_format_must_be_registered() {
        let crumbs =
            BreadcrumbController::new(BreadcrumbConfig::default().with_output_format("pdf")).unwrap();
        assert!(matches!(
            crumbs.build_default(),
            Err(BreadcrumbError::UnsupportedFormat(name)) if name == "pdf"
        ));
    }

    #[test]
    fn test_from_path_and_json() {
        let mut crumbs = controller();
        crumbs.from("/a/b/c").unwrap();
        assert_eq!(raw_names(&crumbs), vec!["a", "b", "c"]);

        let mut crumbs = controller();
        crumbs.from(r#"["a","b"]"#).unwrap();
        assert_eq!(raw_names(&crumbs), vec!["a", "b"]);

        let mut crumbs = controller();
        crumbs.from("//x///y/").unwrap();
        assert_eq!(raw_names(&crumbs), vec!["x", "y"]);

        let mut crumbs = controller();
        crumbs.from(json!(["p", 7])).unwrap();
        assert_eq!(raw_names(&crumbs), vec!["p", "7"]);
    }

    #[test]
    fn test_from_rejects_empty_and_wrong_shapes() {
        let mut crumbs = controller();
        assert!(matches!(
            crumbs.from(Vec::<&str>::new()),
            Err(BreadcrumbError::InvalidArgument(_))
        ));
        assert!(matches!(crumbs.from("[]"), Err(BreadcrumbError::InvalidArgument(_))));
        assert!(matches!(crumbs.from(json!(12)), Err(BreadcrumbError::InvalidArgument(_))));
        assert!(matches!(
            crumbs.from(json!({"a": "b"})),
            Err(BreadcrumbError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_from_empty_path_appends_nothing() {
        for text in ["", "/", "///"] {
            let mut crumbs = controller();
            crumbs.from(text).unwrap();
            assert_eq!(crumbs.number_of_segments(), 0);
        }

        let mut crumbs = controller();
        crumbs.append("keep");
        crumbs.from("/").unwrap();
        assert_eq!(raw_names(&crumbs), vec!["keep"]);
    }

    #[test]
    fn test_path_like_language_is_rejected() {
        let config = BreadcrumbConfig::default().with_language("../evil");
        assert!(matches!(
            BreadcrumbController::new(config),
            Err(BreadcrumbError::InvalidArgument(_))
        ));

        let mut crumbs = controller();
        assert!(matches!(
            crumbs.configure_translation("en/../hu"),
            Err(BreadcrumbError::InvalidArgument(_))
        ));
        assert_eq!(crumbs.resolver().locale(), "en");
    }

    #[test]
    fn test_from_is_atomic() {
        let mut crumbs = controller();
        crumbs.append("keep");
        assert!(crumbs.from(r#"["a", {"bad": true}, "c"]"#).is_err());
        assert_eq!(raw_names(&crumbs), vec!["keep"]);
    }

    #[test]
    fn test_replace_without_name_reresolves() {
        let mut crumbs = controller();
        crumbs.append_with("home", SegmentOptions::default().with_translate(false));
        crumbs.append("blog");
        assert_eq!(crumbs.segment(0).unwrap().translated_name(), "home");

        crumbs.replace(0, None, SegmentOptions::default()).unwrap();
        let segment = crumbs.segment(0).unwrap();
        assert_eq!(segment.raw_name(), "home");
        assert_eq!(segment.translated_name(), "Home");

        crumbs
            .replace(0, None, SegmentOptions::default().with_base(true).with_disabled(true))
            .unwrap();
        let segment = crumbs.segment(0).unwrap();
        assert!(segment.is_base());
        assert!(segment.is_disabled());
        assert_eq!(segment.translated_name(), "home");
    }

    #[test]
    fn test_replace_with_new_name() {
        let mut crumbs = controller();
        crumbs.from("/a/b/c").unwrap();
        crumbs
            .replace(0, Some("new".into()), SegmentOptions::default())
            .unwrap();

        assert_eq!(raw_names(&crumbs), vec!["new", "b", "c"]);
        assert!(matches!(
            crumbs.replace(9, Some("x".into()), SegmentOptions::default()),
            Err(BreadcrumbError::OutOfRange(9))
        ));
        assert_eq!(raw_names(&crumbs), vec!["new", "b", "c"]);
    }

    #[test]
    fn test_map_replaces_trail() {
        let mut crumbs = controller();
        crumbs.from("/a/b").unwrap();
        crumbs.map(vec![("home", "https://x.org"), ("Docs", "https://x.org/docs")]);

        assert_eq!(crumbs.number_of_segments(), 2);
        let first = crumbs.segment(0).unwrap();
        assert_eq!(first.translated_name(), "home");
        assert_eq!(first.fixed_link(), Some("https://x.org"));

        let output = crumbs
            .build(Some("html"), &RenderOptions::default().with_last_is_not_link(false))
            .unwrap();
        assert_eq!(
            output,
            "<a href=\"https://x.org\">home</a> / <a href=\"https://x.org/docs\">Docs</a>"
        );
    }

    #[test]
    fn test_round_trip_count() {
        let mut crumbs = controller();
        for name in ["a", "b", "c", "d"] {
            crumbs.append(name);
        }
        assert_eq!(crumbs.registered().len(), 4);
        assert_eq!(crumbs.registered().len(), crumbs.number_of_segments());
    }

    #[test]
    fn test_configure_translation_does_not_retranslate() {
        let mut crumbs = controller();
        crumbs.append("home");
        crumbs.configure_translation("hu").unwrap();
        crumbs.append("home");

        let texts: Vec<&str> = crumbs.registered().iter().map(|s| s.translated_name()).collect();
        assert_eq!(texts, vec!["Home", "Főoldal"]);
        assert_eq!(crumbs.config().language, "hu");
        assert_eq!(crumbs.resolver().locale(), "hu");
    }

    #[test]
    fn test_configure_translation_with_settings() {
        let mut entries = HashMap::new();
        entries.insert("orders".to_string(), "Your orders".to_string());

        let mut crumbs = controller();
        crumbs
            .configure_translation(TranslationSettings {
                language: "en".to_string(),
                miss_fallback: MissFallback::Marker("?{key}?".to_string()),
                dictionary_dir: None,
                entries,
            })
            .unwrap();
        crumbs.from("/orders/pending").unwrap();

        let texts: Vec<&str> = crumbs.registered().iter().map(|s| s.translated_name()).collect();
        assert_eq!(texts, vec!["Your orders", "?pending?"]);
        assert_eq!(
            crumbs.config().miss_fallback,
            MissFallback::Marker("?{key}?".to_string())
        );
    }

    #[test]
    fn test_failed_reconfiguration_keeps_resolver() {
        let mut crumbs = controller();
        assert!(matches!(
            crumbs.configure_translation("xx"),
            Err(BreadcrumbError::Configuration(ConfigError::UnknownLocale(_)))
        ));
        assert!(matches!(
            crumbs.configure_translation(""),
            Err(BreadcrumbError::InvalidArgument(_))
        ));
        assert_eq!(crumbs.config().language, "en");
        crumbs.append("home");
        assert_eq!(crumbs.segment(0).unwrap().translated_name(), "Home");
    }

    #[test]
    fn test_unknown_locale_fails_construction() {
        assert!(matches!(
            BreadcrumbController::new(BreadcrumbConfig::new("tlh")),
            Err(BreadcrumbError::Configuration(_))
        ));
    }

    #[test]
    fn test_base_segment_links_to_base_reference() {
        let mut crumbs = controller();
        crumbs
            .set_base_reference(Some("https://shop.example"))
            .append_with("home", SegmentOptions::default().with_base(true))
            .append("products")
            .append_with("42", SegmentOptions::default().with_translate(TranslateDirective::Skip));

        let output = crumbs.build(Some("bootstrap3"), &RenderOptions::default()).unwrap();
        assert_eq!(
            output,
            "<ol class=\"breadcrumb\"><li><a href=\"https://shop.example\">Home</a></li><li><a href=\"https://shop.example/products\">Products</a></li><li class=\"active\">42</li></ol>"
        );
        assert_eq!(crumbs.base_reference(), Some("https://shop.example"));
    }
}
