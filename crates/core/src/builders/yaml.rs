//! YAML output builder

use super::{derive_crumbs, BuildContext, BuildError, RenderOptions, TrailBuilder};

/// Serializes the derived crumbs to YAML
#[derive(Debug, Default)]
pub struct YamlBuilder;

impl YamlBuilder {
    pub fn create() -> Box<dyn TrailBuilder> {
        Box::new(YamlBuilder)
    }
}

impl TrailBuilder for YamlBuilder {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn build(&self, ctx: &BuildContext<'_>, options: &RenderOptions) -> Result<String, BuildError> {
        serde_yaml::to_string(&derive_crumbs(ctx, options)).map_err(BuildError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::test_support::segments;
    use crate::config::BreadcrumbConfig;

    #[test]
    fn test_format_yaml() {
        let segments = segments(&["hello", "world"]);
        let config = BreadcrumbConfig::default();
        let ctx = BuildContext::new(segments.iter().collect(), None, &config);

        let yaml = YamlBuilder.build(&ctx, &RenderOptions::default()).unwrap();
        assert!(yaml.contains("text: HELLO"));
        assert!(yaml.contains("link: /hello"));
        assert!(yaml.contains("link: null"));
    }
}
