//! Rendering of catalog messages.
//!
//! Messages are inline markdown with optional `:shortcode:` emoji. They render
//! either to an HTML fragment (for element content) or to plain text (for
//! attributes such as `alt` and `title`).

use std::sync::LazyLock;

use pulldown_cmark::{html, Event, Options, Parser, TagEnd};
use regex::{Captures, Regex};

static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([a-z0-9_+\-]+):").expect("shortcode pattern is valid"));

/// Look up the character for an emoji shortcode (without colons).
pub fn emoji(shortcode: &str) -> Option<&'static str> {
    let emoji = match shortcode {
        "warning" => "\u{26a0}\u{fe0f}",
        "shopping_cart" => "\u{1f6d2}",
        "building_construction" => "\u{1f3d7}\u{fe0f}",
        "cut_of_meat" => "\u{1f969}",
        "pie" => "\u{1f967}",
        "rocket" => "\u{1f680}",
        "computer" => "\u{1f4bb}",
        "globe_with_meridians" => "\u{1f310}",
        "lock" => "\u{1f512}",
        "sparkles" => "\u{2728}",
        _ => return None,
    };
    Some(emoji)
}

/// Replace known `:shortcode:` occurrences with their emoji, leaving unknown ones as written.
pub fn replace_shortcodes(text: &str) -> String {
    SHORTCODE
        .replace_all(text, |caps: &Captures| match emoji(&caps[1]) {
            Some(e) => e.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Render a message to an HTML fragment.
///
/// A single-paragraph message is returned without its surrounding `<p>` so it
/// can be placed inside headings, buttons and list items.
pub fn render_inline(message: &str) -> String {
    let text = replace_shortcodes(message);
    let parser = Parser::new_ext(&text, Options::ENABLE_STRIKETHROUGH);

    let mut output = String::new();
    html::push_html(&mut output, parser);

    let trimmed = output.trim_end();
    if let Some(inner) = trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
    {
        if !inner.contains("<p>") {
            return inner.to_string();
        }
    }

    trimmed.to_string()
}

/// Render a message to plain text, dropping markup.
pub fn to_plain_text(message: &str) -> String {
    let text = replace_shortcodes(message);
    let parser = Parser::new_ext(&text, Options::ENABLE_STRIKETHROUGH);

    let mut output = String::new();
    for event in parser {
        match event {
            Event::Text(t) | Event::Code(t) => output.push_str(&t),
            Event::SoftBreak | Event::HardBreak => output.push(' '),
            Event::End(TagEnd::Paragraph) => output.push(' '),
            _ => {}
        }
    }

    output.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_single_paragraph_without_wrapper() {
        assert_eq!(render_inline("Run **your own** node"), "Run <strong>your own</strong> node");
    }

    #[test]
    fn keeps_paragraphs_for_multi_paragraph_messages() {
        let html = render_inline("First\n\nSecond");
        assert_eq!(html, "<p>First</p>\n<p>Second</p>");
    }

    #[test]
    fn renders_links_and_code() {
        let html = render_inline("See [the docs](/developers/) or run `geth`");
        assert!(html.contains(r#"<a href="/developers/">the docs</a>"#));
        assert!(html.contains("<code>geth</code>"));
    }

    #[test]
    fn replaces_known_shortcodes_only() {
        assert_eq!(replace_shortcodes(":pie: Raspberry Pi"), "\u{1f967} Raspberry Pi");
        assert_eq!(replace_shortcodes("ratio 1:2:3 :unknown:"), "ratio 1:2:3 :unknown:");
    }

    #[test]
    fn plain_text_drops_markup() {
        assert_eq!(to_plain_text("A **bold** [link](https://x.org)"), "A bold link");
        assert_eq!(to_plain_text("line one\nline two"), "line one line two");
    }

    #[test]
    fn escapes_html() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }
}
