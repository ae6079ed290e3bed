//! ANSI colored output builder
//!
//! Terminal rendering of a trail: linked segments are underlined cyan, the
//! last segment is bold, disabled segments are dimmed. Coloring follows the
//! global `colored` switch, so output degrades to plain text when colors
//! are turned off.

use super::{derive_crumbs, BuildContext, BuildError, Crumb, RenderOptions, TrailBuilder};
use colored::Colorize;

const DEFAULT_SEPARATOR: &str = " › ";

#[derive(Debug, Default)]
pub struct AnsiBuilder;

impl AnsiBuilder {
    pub fn create() -> Box<dyn TrailBuilder> {
        Box::new(AnsiBuilder)
    }
}

fn paint(crumb: &Crumb, is_last: bool) -> String {
    if crumb.disabled {
        crumb.text.dimmed().to_string()
    } else if is_last {
        crumb.text.bold().to_string()
    } else if crumb.link.is_some() {
        crumb.text.cyan().underline().to_string()
    } else {
        crumb.text.clone()
    }
}

impl TrailBuilder for AnsiBuilder {
    fn name(&self) -> &'static str {
        "ansi"
    }

    fn build(&self, ctx: &BuildContext<'_>, options: &RenderOptions) -> Result<String, BuildError> {
        let crumbs = derive_crumbs(ctx, options);
        if crumbs.is_empty() {
            return Ok("(root)".dimmed().to_string());
        }

        let separator = options.separator_or(DEFAULT_SEPARATOR).dimmed().to_string();
        Ok(crumbs
            .iter()
            .enumerate()
            .map(|(index, crumb)| paint(crumb, index + 1 == crumbs.len()))
            .collect::<Vec<_>>()
            .join(&separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::test_support::segments;
    use crate::config::BreadcrumbConfig;

    #[test]
    fn test_format_ansi_basic() {
        let mut segments = segments(&["home", "blog", "post"]);
        segments[1].disable();
        let config = BreadcrumbConfig::default();
        let ctx = BuildContext::new(segments.iter().collect(), None, &config);

        let output = AnsiBuilder.build(&ctx, &RenderOptions::default()).unwrap();
        assert!(output.contains("HOME"));
        assert!(output.contains("blog"));
        assert!(output.contains("POST"));
        assert_eq!(output.matches('›').count(), 2);
    }

    #[test]
    fn test_empty_trail_shows_root() {
        let config = BreadcrumbConfig::default();
        let ctx = BuildContext::new(Vec::new(), None, &config);
        let output = AnsiBuilder.build(&ctx, &RenderOptions::default()).unwrap();
        assert!(output.contains("(root)"));
    }
}
