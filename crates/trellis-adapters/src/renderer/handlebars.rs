use std::path::Path;

use handlebars::{Handlebars, handlebars_helper, no_escape};
use serde_json::Value;
use trellis_core::domain::ProjectConfig;

use crate::error::AdapterError;

/// Suffix that marks a file as a template.
pub const TEMPLATE_EXTENSION: &str = "hbs";

handlebars_helper!(includes: |haystack: array, needle: str| {
    haystack.iter().any(|item| item.as_str() == Some(needle))
});

/// Handlebars engine configured for source files.
///
/// HTML escaping is disabled: templates produce code, not markup.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        registry.register_helper("includes", Box::new(includes));
        Self { registry }
    }

    /// Build the render context for a configuration.
    pub fn context(config: &ProjectConfig) -> Result<Value, AdapterError> {
        serde_json::to_value(config).map_err(AdapterError::Context)
    }

    /// Render one template. `path` is only used to label errors.
    pub fn render(&self, path: &Path, template: &str, context: &Value) -> Result<String, AdapterError> {
        self.registry
            .render_template(template, context)
            .map_err(|source| AdapterError::Render {
                path: path.to_path_buf(),
                source: Box::new(source),
            })
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HandlebarsRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlebarsRenderer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use trellis_core::domain::{Backend, Frontend};

    fn render(template: &str, context: &Value) -> String {
        HandlebarsRenderer::new()
            .render(Path::new("t.hbs"), template, context)
            .unwrap()
    }

    #[test]
    fn substitutes_config_fields() {
        let config = ProjectConfig::builder()
            .project_name("shop")
            .frontend([Frontend::Next])
            .backend(Backend::Hono)
            .build()
            .unwrap();
        let context = HandlebarsRenderer::context(&config).unwrap();

        assert_eq!(
            render(r#"{"name": "{{projectName}}", "backend": "{{backend}}"}"#, &context),
            r#"{"name": "shop", "backend": "hono"}"#
        );
    }

    #[test]
    fn does_not_html_escape() {
        let out = render("{{value}}", &json!({ "value": "<T>&\"x\"" }));
        assert_eq!(out, "<T>&\"x\"");
    }

    #[test]
    fn includes_helper_tests_membership() {
        let context = json!({ "frontend": ["next", "native-nativewind"] });
        let template = r#"{{#if (includes frontend "next")}}web{{/if}}{{#if (includes frontend "nuxt")}}vue{{/if}}"#;
        assert_eq!(render(template, &context), "web");
    }

    #[test]
    fn eq_helper_is_available() {
        let template = r#"{{#if (eq orm "drizzle")}}drizzle{{else}}other{{/if}}"#;
        assert_eq!(render(template, &json!({ "orm": "drizzle" })), "drizzle");
        assert_eq!(render(template, &json!({ "orm": "prisma" })), "other");
    }

    #[test]
    fn syntax_errors_name_the_file() {
        let err = HandlebarsRenderer::new()
            .render(Path::new("apps/web/page.tsx.hbs"), "{{#if x}}", &json!({}))
            .unwrap_err();
        assert!(err.to_string().contains("apps/web/page.tsx.hbs"));
    }
}
