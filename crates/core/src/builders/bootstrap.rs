//! Bootstrap 2 and Bootstrap 3 breadcrumb markup

use super::{
    anchor_or_text, derive_crumbs, render_attributes, BuildContext, BuildError, RenderOptions,
    TrailBuilder,
};

const DEFAULT_DIVIDER: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Version {
    V2,
    V3,
}

/// Renders a Bootstrap `breadcrumb` list
///
/// Bootstrap 2 draws dividers as `<span class="divider">` inside each item;
/// Bootstrap 3 leaves them to CSS, so the separator option is ignored there.
#[derive(Debug)]
pub struct BootstrapBuilder {
    version: Version,
}

impl BootstrapBuilder {
    pub fn create_v2() -> Box<dyn TrailBuilder> {
        Box::new(BootstrapBuilder { version: Version::V2 })
    }

    pub fn create_v3() -> Box<dyn TrailBuilder> {
        Box::new(BootstrapBuilder { version: Version::V3 })
    }
}

impl TrailBuilder for BootstrapBuilder {
    fn name(&self) -> &'static str {
        match self.version {
            Version::V2 => "bootstrap2",
            Version::V3 => "bootstrap3",
        }
    }

    fn build(&self, ctx: &BuildContext<'_>, options: &RenderOptions) -> Result<String, BuildError> {
        let crumbs = derive_crumbs(ctx, options);
        let tag = match self.version {
            Version::V2 => "ul",
            Version::V3 => "ol",
        };
        let divider = options.separator_or(DEFAULT_DIVIDER);

        let mut output = format!(
            "<{}{}>",
            tag,
            render_attributes(Some("breadcrumb"), &options.customizations)
        );

        for (index, crumb) in crumbs.iter().enumerate() {
            let is_last = index + 1 == crumbs.len();
            let class = if is_last && crumb.link.is_none() {
                " class=\"active\""
            } else if crumb.disabled {
                " class=\"disabled\""
            } else {
                ""
            };

            output.push_str(&format!("<li{}>{}", class, anchor_or_text(crumb, "")));
            if self.version == Version::V2 && !is_last {
                output.push_str(&format!(" <span class=\"divider\">{}</span>", divider));
            }
            output.push_str("</li>");
        }

        output.push_str(&format!("</{}>", tag));
        Ok(output)
    }
}
