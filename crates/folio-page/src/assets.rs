//! Asset pipeline for CSS and JavaScript processing.

use crate::theme::Theme;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file from a theme.
    pub fn generate_css(theme: &Theme) -> String {
        let mut css = theme.css_variables();
        css.push_str(LAYOUT_CSS);
        css.push_str(&format!("{} {{\n{}}}\n", theme.narrow_media(), NARROW_CSS));
        css
    }

    /// Generate the runtime script: expandable toggles and smooth anchor scrolling.
    pub fn generate_js() -> String {
        RUNTIME_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const LAYOUT_CSS: &str = r#"
* {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--background);
  color: var(--text);
  line-height: 1.6;
}

.main {
  max-width: var(--content-max-width);
  margin: 0 auto;
}

a {
  color: var(--primary);
}

[id] {
  scroll-margin-top: var(--scroll-margin-top);
}

.row {
  display: flex;
  flex-direction: row;
}

.row.reverse {
  flex-direction: row-reverse;
}

.column,
.card {
  display: flex;
  flex-direction: column;
}

.column.reverse,
.card.reverse {
  flex-direction: column-reverse;
}

.card {
  border-radius: 0.25rem;
}

.card.highlight {
  flex-direction: row;
  margin-bottom: 2rem;
}

.card.highlight.reverse {
  flex-direction: row-reverse;
}

.align-start { align-items: flex-start; }
.align-center { align-items: center; }
.justify-center { justify-content: center; }
.justify-between { justify-content: space-between; }
.fill { flex: 1 1 0; }

.grid {
  display: grid;
}

.buttons {
  display: flex;
  flex-wrap: wrap;
}

.line {
  margin: 0.5rem 0;
}

.button {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 0.25rem;
  border: 1px solid var(--primary);
  font: inherit;
  text-decoration: none;
  cursor: pointer;
}

.button-solid {
  background: var(--primary);
  color: var(--button-text);
}

.button-outline,
.button-secondary {
  background: transparent;
  color: var(--text);
  border-color: var(--text);
}

.button-text {
  background: none;
  border: none;
  padding: 0;
  color: var(--primary);
  text-decoration: underline;
}

.button-dappnode {
  background: var(--dappnode);
  border-color: var(--dappnode);
  color: var(--button-text);
}

.button-dappnode:hover {
  background: var(--dappnode-hover);
}

.button-avado {
  background: var(--avado);
  border-color: var(--avado);
  color: var(--button-text);
}

.button-avado:hover {
  background: var(--avado-hover);
}

.button-glyph {
  width: 1.5rem;
  height: 1.5rem;
}

.glyph {
  flex-shrink: 0;
}

img {
  max-width: 100%;
  height: auto;
}

.divider {
  margin: 4rem auto;
  width: 10%;
  height: 0.25rem;
  border: none;
  background: var(--primary);
}

.expandable {
  border: 1px solid var(--border);
  border-radius: 0.25rem;
  padding: 1.5rem;
  display: flex;
  gap: 2rem;
}

.expandable-card {
  flex-direction: column;
}

.expandable-content {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  flex: 1 1 0;
}

.expandable-title {
  margin: 0;
}

.expandable-preview {
  margin: 0;
  opacity: 0.8;
}

.expandable-body[hidden] {
  display: none;
}

.expandable-header[role="button"] {
  cursor: pointer;
}

.expandable-toggle {
  align-self: flex-start;
  background: none;
  border: none;
  padding: 0;
  font: inherit;
  color: var(--primary);
  cursor: pointer;
}

.missing-translation {
  outline: 1px dashed #e00;
}
"#;

const NARROW_CSS: &str = r#"  .row,
  .row.reverse,
  .card.highlight,
  .card.highlight.reverse,
  .expandable {
    flex-direction: column;
  }
"#;

const RUNTIME_JS: &str = r#"(function() {
  'use strict';

  // Expand/collapse. The header and the More/Less button both toggle; force-open
  // sections render neither control.
  function toggle(section) {
    const header = section.querySelector('.expandable-header[aria-controls]');
    const button = section.querySelector('.expandable-toggle');
    const control = header || button;
    if (!control) return;
    const body = document.getElementById(control.getAttribute('aria-controls'));
    if (!body) return;

    const open = control.getAttribute('aria-expanded') !== 'true';
    [header, button].forEach(el => el && el.setAttribute('aria-expanded', String(open)));
    if (button) button.textContent = open ? button.dataset.less : button.dataset.more;
    section.dataset.state = open ? 'expanded' : 'collapsed';
    body.hidden = !open;
  }

  document.querySelectorAll('[data-expandable]').forEach(section => {
    const header = section.querySelector('.expandable-header[role="button"]');
    if (header) {
      header.addEventListener('click', () => toggle(section));
      header.addEventListener('keydown', event => {
        if (event.key === 'Enter' || event.key === ' ') {
          event.preventDefault();
          toggle(section);
        }
      });
    }

    const button = section.querySelector('.expandable-toggle');
    if (button) button.addEventListener('click', () => toggle(section));
  });

  // Smooth scroll to in-page anchors. Missing targets are ignored.
  document.querySelectorAll('[data-scroll-to]').forEach(button => {
    button.addEventListener('click', event => {
      const target = document.getElementById(button.dataset.scrollTo);
      if (!target) return;

      event.preventDefault();
      target.scrollIntoView({ behavior: 'smooth', block: 'start' });
    });
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css_from_theme() {
        let theme = Theme {
            primary: "#ff0000".to_string(),
            ..Theme::default()
        };
        let css = AssetPipeline::generate_css(&theme);

        assert!(css.contains("--primary: #ff0000;"));
        assert!(css.contains(".expandable-body[hidden]"));
        assert!(css.contains("@media (max-width: 768px)"));
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("aria-expanded"));
        assert!(js.contains(".expandable-header[role=\"button\"]"));
        assert!(js.contains("event.key === 'Enter' || event.key === ' '"));
        assert!(js.contains("scrollIntoView({ behavior: 'smooth'"));
    }

    #[test]
    fn minifies_generated_css() {
        let css = AssetPipeline::generate_css(&Theme::default());

        let minified = AssetPipeline::minify_css(&css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".expandable-toggle"));
    }
}
