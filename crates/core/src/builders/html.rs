//! Plain HTML builder: anchors joined by a separator

use super::{anchor_or_text, derive_crumbs, render_attributes, BuildContext, BuildError, RenderOptions, TrailBuilder};

const DEFAULT_SEPARATOR: &str = " / ";

/// Renders `<a href="..">Text</a> / <a ..>..</a> / Last`
#[derive(Debug, Default)]
pub struct HtmlBuilder;

impl HtmlBuilder {
    pub fn create() -> Box<dyn TrailBuilder> {
        Box::new(HtmlBuilder)
    }
}

impl TrailBuilder for HtmlBuilder {
    fn name(&self) -> &'static str {
        "html"
    }

    fn build(&self, ctx: &BuildContext<'_>, options: &RenderOptions) -> Result<String, BuildError> {
        let attributes = render_attributes(None, &options.customizations);

        Ok(derive_crumbs(ctx, options)
            .iter()
            .map(|crumb| anchor_or_text(crumb, &attributes))
            .collect::<Vec<_>>()
            .join(options.separator_or(DEFAULT_SEPARATOR)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::test_support::segments;
    use crate::config::BreadcrumbConfig;

    #[test]
    fn test_html_output() {
        let segments = segments(&["docs", "api"]);
        let config = BreadcrumbConfig::default();
        let ctx = BuildContext::new(segments.iter().collect(), Some("/site"), &config);

        let output = HtmlBuilder.build(&ctx, &RenderOptions::default()).unwrap();
        assert_eq!(output, "<a href=\"/site/docs\">DOCS</a> / API");
    }

    #[test]
    fn test_html_customizations_and_separator() {
        let segments = segments(&["a", "b"]);
        let config = BreadcrumbConfig::default();
        let ctx = BuildContext::new(segments.iter().collect(), None, &config);
        let options = RenderOptions::default()
            .with_separator(" &raquo; ")
            .with_customization("class", "crumb");

        let output = HtmlBuilder.build(&ctx, &options).unwrap();
        assert_eq!(output, "<a href=\"/a\" class=\"crumb\">A</a> &raquo; B");
    }

    #[test]
    fn test_html_escapes_text() {
        let segments = segments(&["<b>"]);
        let config = BreadcrumbConfig::default();
        let ctx = BuildContext::new(segments.iter().collect(), None, &config);

        let output = HtmlBuilder.build(&ctx, &RenderOptions::default()).unwrap();
        assert_eq!(output, "&lt;B&gt;");
    }
}
