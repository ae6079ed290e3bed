use super::{derive_crumbs, BuildContext, BuildError, RenderOptions, TrailBuilder};

/// Serializes the derived crumbs to pretty-printed JSON
#[derive(Debug, Default)]
pub struct JsonBuilder;

impl JsonBuilder {
    pub fn create() -> Box<dyn TrailBuilder> {
        Box::new(JsonBuilder)
    }
}

impl TrailBuilder for JsonBuilder {
    fn name(&self) -> &'static str {
        "json"
    }

    fn build(&self, ctx: &BuildContext<'_>, options: &RenderOptions) -> Result<String, BuildError> {
        serde_json::to_string_pretty(&derive_crumbs(ctx, options)).map_err(BuildError::from)
    }
}
