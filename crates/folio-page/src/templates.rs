//! Page shell templates.

use minijinja::{context, Environment};

/// A translated version of the current page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Alternate {
    /// Locale code, used as `hreflang`
    pub lang: String,
    pub href: String,
}

/// Context for rendering a page template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// Page title (plain text)
    pub title: String,
    /// Meta description (plain text)
    pub description: String,
    pub site_title: String,
    /// Document language
    pub lang: String,
    /// Rendered page HTML
    pub content: String,
    pub base_url: String,
    pub alternates: Vec<Alternate>,
    /// Extra stylesheets to include
    pub styles: Vec<String>,
    /// Include the live-reload client
    pub live_reload: bool,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template("base.html", BASE_TEMPLATE)
            .expect("Failed to add base template");
        env.add_template("page.html", PAGE_TEMPLATE)
            .expect("Failed to add page template");
        env.add_template("redirect.html", REDIRECT_TEMPLATE)
            .expect("Failed to add redirect template");

        Self { env }
    }

    /// Render a page using the specified template.
    pub fn render_page(
        &self,
        template: &str,
        context: &Context,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            title => &context.title,
            description => &context.description,
            site_title => &context.site_title,
            lang => &context.lang,
            content => &context.content,
            base_url => &context.base_url,
            alternates => &context.alternates,
            styles => &context.styles,
            live_reload => context.live_reload,
        })
    }

    /// Render a page that immediately sends the visitor to `target`.
    pub fn render_redirect(&self, target: &str) -> Result<String, minijinja::Error> {
        self.env
            .get_template("redirect.html")?
            .render(context! { target => target })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} | {{ site_title }}</title>
  <meta name="description" content="{{ description }}">
  <meta property="og:title" content="{{ title }}">
  <meta property="og:description" content="{{ description }}">
  {% for alt in alternates %}<link rel="alternate" hreflang="{{ alt.lang }}" href="{{ alt.href | safe }}">
  {% endfor %}<link rel="stylesheet" href="{{ base_url | safe }}assets/main.css">
  {% for style in styles %}<link rel="stylesheet" href="{{ style | safe }}">
  {% endfor %}
</head>
<body>
  <main class="main">
    {% block content %}{% endblock %}
  </main>
  <script src="{{ base_url | safe }}assets/main.js"></script>
  {% if live_reload %}<script src="/__reload.js"></script>{% endif %}
</body>
</html>"##;

const PAGE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{{ content | safe }}
{% endblock %}"##;

const REDIRECT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta http-equiv="refresh" content="0; url={{ target | safe }}">
  <link rel="canonical" href="{{ target | safe }}">
  <title>Redirecting</title>
</head>
<body>
  <a href="{{ target | safe }}">{{ target }}</a>
</body>
</html>"##;
