//! Plain-text path builder

use super::{derive_crumbs, BuildContext, BuildError, RenderOptions, TrailBuilder};

const DEFAULT_SEPARATOR: &str = " > ";

/// Renders segment text joined by a separator, without links
#[derive(Debug, Default)]
pub struct PathBuilder;

impl PathBuilder {
    pub fn create() -> Box<dyn TrailBuilder> {
        Box::new(PathBuilder)
    }
}

impl TrailBuilder for PathBuilder {
    fn name(&self) -> &'static str {
        "path"
    }

    fn build(&self, ctx: &BuildContext<'_>, options: &RenderOptions) -> Result<String, BuildError> {
        Ok(derive_crumbs(ctx, options)
            .into_iter()
            .map(|crumb| crumb.text)
            .collect::<Vec<_>>()
            .join(options.separator_or(DEFAULT_SEPARATOR)))
    }
}
