//! HTML rendering of the themed page shell.
//!
//! [`PageRenderer`] turns controller state into markup: the root `<html>`
//! tag carrying the theme marker, and the toggle button showing the current
//! [`ToggleIcon`]. Templates are compiled once; output is HTML-escaped.

use minijinja::{context, AutoEscape, Environment, Value};
use thiserror::Error;

use crate::controller::ThemeController;
use crate::document::DocumentRoot;
use crate::mode::ThemeMode;
use crate::toggle::ToggleIcon;

const ROOT_TEMPLATE: &str =
    r#"<html{% for name, value in document.attributes | items %} {{ name }}="{{ value }}"{% endfor %}>"#;

const TOGGLE_TEMPLATE: &str = r#"<button type="button" class="theme-toggle theme-toggle--{{ icon.name }}" data-mode="{{ mode }}" aria-label="{{ icon.action }}" title="{{ icon.label }}"><span aria-hidden="true">{{ icon.glyph }}</span></button>"#;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
{% include "root" %}
<head>
<meta charset="utf-8">
<meta name="color-scheme" content="light dark">
<title>{{ title }}</title>
</head>
<body>
<nav class="site-nav">{% include "toggle" %}</nav>
</body>
</html>
"#;

/// Error returned when a template fails to compile or render.
#[derive(Debug, Error)]
#[error("failed to render {template}")]
pub struct RenderError {
    template: &'static str,
    #[source]
    source: minijinja::Error,
}

impl RenderError {
    fn wrap(template: &'static str) -> impl FnOnce(minijinja::Error) -> Self {
        move |source| Self { template, source }
    }
}

/// Renders the page shell for a given theme state.
///
/// # Example
///
/// ```rust
/// use folio_theme::{DocumentRoot, PageRenderer, ThemeMode};
///
/// let renderer = PageRenderer::new().unwrap();
/// let mut root = DocumentRoot::new().with_attribute("lang", "en");
/// root.mark_theme(ThemeMode::Dark);
///
/// let tag = renderer.render_root(&root).unwrap();
/// assert_eq!(tag, r#"<html data-theme="dark" lang="en">"#);
/// ```
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Creates a renderer with the built-in templates compiled.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template("root", ROOT_TEMPLATE)
            .map_err(RenderError::wrap("root"))?;
        env.add_template("toggle", TOGGLE_TEMPLATE)
            .map_err(RenderError::wrap("toggle"))?;
        env.add_template("page", PAGE_TEMPLATE)
            .map_err(RenderError::wrap("page"))?;
        Ok(Self { env })
    }

    /// Renders the opening `<html>` tag with the document's attributes.
    pub fn render_root(&self, document: &DocumentRoot) -> Result<String, RenderError> {
        self.render("root", context! { document => document })
    }

    /// Renders the theme toggle button.
    pub fn render_toggle(&self, mode: ThemeMode, icon: &ToggleIcon) -> Result<String, RenderError> {
        self.render("toggle", context! { mode => mode, icon => icon })
    }

    /// Renders a full page shell from the controller's current state.
    pub fn render_page(
        &self,
        title: &str,
        controller: &ThemeController,
    ) -> Result<String, RenderError> {
        self.render(
            "page",
            context! {
                title => title,
                mode => controller.theme(),
                document => controller.document(),
                icon => controller.toggle_icon(),
            },
        )
    }

    fn render(&self, template: &'static str, ctx: Value) -> Result<String, RenderError> {
        self.env
            .get_template(template)
            .and_then(|tmpl| tmpl.render(ctx))
            .map_err(RenderError::wrap(template))
    }
}
