//! Foundation 4 breadcrumb markup

use super::{derive_crumbs, escape_html, render_attributes, BuildContext, BuildError, RenderOptions, TrailBuilder};

/// Renders a Foundation `breadcrumbs` list
///
/// Every item is an anchor; items without a link point at `#` and are
/// marked `current` (last item) or `unavailable` (disabled).
#[derive(Debug, Default)]
pub struct FoundationBuilder;

impl FoundationBuilder {
    pub fn create() -> Box<dyn TrailBuilder> {
        Box::new(FoundationBuilder)
    }
}

impl TrailBuilder for FoundationBuilder {
    fn name(&self) -> &'static str {
        "foundation4"
    }

    fn build(&self, ctx: &BuildContext<'_>, options: &RenderOptions) -> Result<String, BuildError> {
        let crumbs = derive_crumbs(ctx, options);

        let mut output = format!(
            "<ul{}>",
            render_attributes(Some("breadcrumbs"), &options.customizations)
        );

        for (index, crumb) in crumbs.iter().enumerate() {
            let mut classes = Vec::new();
            if index + 1 == crumbs.len() {
                classes.push("current");
            }
            if crumb.disabled {
                classes.push("unavailable");
            }

            let class = if classes.is_empty() {
                String::new()
            } else {
                format!(" class=\"{}\"", classes.join(" "))
            };

            output.push_str(&format!(
                "<li{}><a href=\"{}\">{}</a></li>",
                class,
                escape_html(crumb.link.as_deref().unwrap_or("#")),
                escape_html(&crumb.text)
            ));
        }

        output.push_str("</ul>");
        Ok(output)
    }
}
