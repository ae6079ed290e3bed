//! crumbtrail_core - Core library for navigational breadcrumb trails
//!
//! This crate builds a breadcrumb trail from an ordered collection of
//! labeled path segments and renders it through a pluggable output builder.
//!
//! # Features
//!
//! - **Positional Segments**: Append at either end, disable, remove (with or
//!   without reindexing) and replace segments by position.
//! - **Translation**: Display text is resolved from a locale dictionary, a
//!   literal override or the raw name, once, when a segment is added.
//! - **Pluggable Builders**: HTML, Bootstrap 2/3, Foundation 4, plain-text
//!   path, JSON, YAML and ANSI output, selected by name from a registry.
//!
//! # Example
//!
//! ```rust
//! use crumbtrail_core::{BreadcrumbConfig, BreadcrumbController, RenderOptions, SegmentOptions};
//!
//! let mut crumbs = BreadcrumbController::new(BreadcrumbConfig::default()).unwrap();
//! crumbs
//!     .set_base_reference(Some("https://example.com"))
//!     .append_with("home", SegmentOptions::default().with_base(true))
//!     .from("/products/42")
//!     .unwrap();
//!
//! let html = crumbs.build(Some("bootstrap3"), &RenderOptions::default()).unwrap();
//! assert!(html.starts_with("<ol class=\"breadcrumb\">"));
//! ```

pub mod builders;
pub mod collection;
pub mod config;
pub mod engine;
pub mod models;
pub mod translation;

// Re-exports for convenience
pub use builders::{
    derive_crumbs, BuildContext, BuildError, BuilderFactory, BuilderRegistry, Casing, Crumb,
    RenderOptions, TrailBuilder,
};
pub use collection::{CollectionError, SegmentCollection};
pub use config::{BreadcrumbConfig, ConfigError};
pub use engine::{BreadcrumbController, BreadcrumbError, TrailInput};
pub use models::{RawName, Segment, SegmentOptions, Side};
pub use translation::{
    available_locales, builtin_locales, Dictionary, MissFallback, TranslateDirective,
    TranslationConfig, TranslationResolver, TranslationSettings,
};
