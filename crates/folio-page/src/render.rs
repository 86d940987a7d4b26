//! HTML rendering of a composed page.

use folio_i18n::escape_html;

use crate::anchor::AnchorTarget;
use crate::composer::ComposedPage;
use crate::expandable::{ExpandableKind, ExpandableUnit};
use crate::layout::{
    Align, ButtonAction, ButtonNode, GridParams, Justify, LayoutParams, LinkNode, Node, TextStyle,
    Width,
};
use crate::model::ImageHandle;
use crate::theme::Theme;

/// Render a composed page to an HTML fragment.
pub fn render_page(page: &ComposedPage, theme: &Theme) -> String {
    let renderer = Renderer::new(theme);
    let mut out = String::new();

    out.push_str(&format!(r#"<div class="page page-{}">"#, page.slug));
    renderer.nodes(&page.body, &mut out);
    out.push_str("</div>");
    out
}

/// Renders layout nodes with a theme's spacing and colours.
pub struct Renderer<'a> {
    theme: &'a Theme,
}

impl<'a> Renderer<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Render a node list into `out`.
    pub fn nodes(&self, nodes: &[Node], out: &mut String) {
        for node in nodes {
            self.node(node, out);
        }
    }

    pub fn node(&self, node: &Node, out: &mut String) {
        match node {
            Node::Section {
                anchor,
                params,
                children,
            } => {
                out.push_str(&format!(
                    "<section{}{}{}>",
                    class_attr(&self.classes("section", params)),
                    anchor_attrs(anchor.as_ref()),
                    self.style_attr(params)
                ));
                self.nodes(children, out);
                out.push_str("</section>");
            }
            Node::Row(params, children) => self.container("row", params, children, out),
            Node::Column(params, children) => self.container("column", params, children, out),
            Node::Card(params, children) => self.container("card", params, children, out),
            Node::Grid(params, children) => {
                out.push_str(&format!(
                    r#"<div class="grid"{}>"#,
                    self.grid_style(params)
                ));
                self.nodes(children, out);
                out.push_str("</div>");
            }
            Node::Heading {
                level,
                html,
                emoji,
                anchor,
            } => {
                let level = (*level).clamp(1, 6);
                out.push_str(&format!("<h{}{}>", level, anchor_attrs(anchor.as_ref())));
                if let Some(emoji) = emoji {
                    out.push_str(&format!(r#"<span class="emoji" aria-hidden="true">{}</span> "#, emoji));
                }
                out.push_str(html);
                out.push_str(&format!("</h{}>", level));
            }
            Node::Text { html, style } => {
                out.push_str("<p>");
                out.push_str(&styled(html, *style));
                out.push_str("</p>");
            }
            Node::Line(parts) => {
                out.push_str(r#"<p class="line">"#);
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    match part {
                        Node::Text { html, style } => out.push_str(&styled(html, *style)),
                        other => self.node(other, out),
                    }
                }
                out.push_str("</p>");
            }
            Node::List(items) => {
                out.push_str("<ul>");
                for item in items {
                    out.push_str("<li>");
                    self.nodes(item, out);
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
            }
            Node::Image { handle, alt } => out.push_str(&image(handle, alt, None)),
            Node::Glyph { src, alt } => out.push_str(&glyph(src, alt)),
            Node::Link(link) => out.push_str(&self::link(link)),
            Node::Button(button) => out.push_str(&self::button(button)),
            Node::Expandable(unit) => self.expandable(unit, out),
            Node::Divider => out.push_str(r#"<hr class="divider">"#),
        }
    }

    fn container(&self, kind: &str, params: &LayoutParams, children: &[Node], out: &mut String) {
        out.push_str(&format!(
            "<div{}{}>",
            class_attr(&self.classes(kind, params)),
            self.style_attr(params)
        ));
        self.nodes(children, out);
        out.push_str("</div>");
    }

    fn classes(&self, kind: &str, params: &LayoutParams) -> Vec<String> {
        let mut classes = vec![kind.to_string()];

        match params.align {
            Align::Stretch => {}
            Align::Start => classes.push("align-start".to_string()),
            Align::Center => classes.push("align-center".to_string()),
        }
        match params.justify {
            Justify::Start => {}
            Justify::Center => classes.push("justify-center".to_string()),
            Justify::SpaceBetween => classes.push("justify-between".to_string()),
        }
        if params.width == Width::Fill {
            classes.push("fill".to_string());
        }
        if params.reverse {
            classes.push("reverse".to_string());
        }
        if let Some(class) = params.class {
            classes.push(class.to_string());
        }

        classes
    }

    fn style_attr(&self, params: &LayoutParams) -> String {
        let mut styles = Vec::new();

        if params.gap > 0 {
            styles.push(format!("gap: {}", self.theme.space(params.gap)));
        }
        if params.padding_x > 0 || params.padding_y > 0 {
            styles.push(format!(
                "padding: {} {}",
                self.theme.space(params.padding_y),
                self.theme.space(params.padding_x)
            ));
        }
        if let Width::Percent(p) = params.width {
            styles.push(format!("flex-basis: {}%", p.min(100)));
        }
        if let Some(swatch) = params.background {
            styles.push(format!("background: var({})", swatch.css_var()));
        }

        if styles.is_empty() {
            String::new()
        } else {
            format!(r#" style="{}""#, styles.join("; "))
        }
    }

    fn grid_style(&self, params: &GridParams) -> String {
        format!(
            r#" style="grid-template-columns: repeat(auto-fill, minmax(min(100%, {}px), 1fr)); gap: {}""#,
            params.min_column,
            self.theme.space(params.gap)
        )
    }

    fn expandable(&self, unit: &ExpandableUnit, out: &mut String) {
        let section = &unit.section;
        let body_id = format!("{}-body", unit.id);

        let (kind, background, glyph, picture) = match &unit.kind {
            ExpandableKind::Card {
                glyph_src,
                glyph_alt,
            } => ("card", None, Some(self::glyph(glyph_src, glyph_alt)), None),
            ExpandableKind::Info { image, background } => (
                "info",
                *background,
                None,
                image.as_ref().map(|handle| self::image(handle, "", Some("expandable-image"))),
            ),
        };

        let style = background
            .map(|swatch| format!(r#" style="background: var({})""#, swatch.css_var()))
            .unwrap_or_default();

        out.push_str(&format!(
            r#"<div class="expandable expandable-{}" id="{}" data-expandable data-state="{}"{}{}>"#,
            kind,
            escape_html(&unit.id),
            section.state().as_str(),
            if section.is_force_open() { " data-force-open" } else { "" },
            style
        ));

        if let Some(picture) = picture {
            out.push_str(&picture);
        }
        out.push_str(r#"<div class="expandable-content">"#);
        if let Some(glyph) = glyph {
            out.push_str(&glyph);
        }
        // Toggleable sections activate from their header; forced ones expose no control.
        let header_control = if section.is_toggleable() {
            format!(
                r#" role="button" tabindex="0" aria-expanded="{}" aria-controls="{}""#,
                section.is_open(),
                escape_html(&body_id)
            )
        } else {
            String::new()
        };
        out.push_str(&format!(
            r#"<div class="expandable-header"{}><h3 class="expandable-title">{}</h3><p class="expandable-preview">{}</p></div>"#,
            header_control, unit.content.title, unit.content.preview
        ));

        // The body is always emitted; collapsed sections hide it until toggled.
        out.push_str(&format!(
            r#"<div class="expandable-body" id="{}"{}>"#,
            escape_html(&body_id),
            if section.is_open() { "" } else { " hidden" }
        ));
        self.nodes(&unit.content.body, out);
        out.push_str("</div>");

        if section.is_toggleable() {
            let label = if section.is_open() {
                &unit.less_label
            } else {
                &unit.more_label
            };
            out.push_str(&format!(
                r#"<button type="button" class="expandable-toggle" aria-expanded="{}" aria-controls="{}" data-more="{}" data-less="{}">{}</button>"#,
                section.is_open(),
                escape_html(&body_id),
                escape_html(&unit.more_label),
                escape_html(&unit.less_label),
                escape_html(label)
            ));
        }

        out.push_str("</div></div>");
    }
}

fn class_attr(classes: &[String]) -> String {
    format!(r#" class="{}""#, classes.join(" "))
}

fn anchor_attrs(anchor: Option<&AnchorTarget>) -> String {
    match anchor {
        Some(target) => {
            let margin = target
                .scroll_margin
                .map(|m| format!(r#" style="scroll-margin-top: {}px""#, m))
                .unwrap_or_default();
            format!(r#" id="{}"{}"#, escape_html(target.id.as_str()), margin)
        }
        None => String::new(),
    }
}

fn styled(html: &str, style: TextStyle) -> String {
    match style {
        TextStyle::Body => html.to_string(),
        TextStyle::Strong => format!("<strong>{}</strong>", html),
        TextStyle::Small => format!("<small>{}</small>", html),
        TextStyle::SmallEmphasis => format!("<small><em>{}</em></small>", html),
        TextStyle::Code => format!("<code>{}</code>", html),
    }
}

fn image(handle: &ImageHandle, alt: &str, class: Option<&str>) -> String {
    format!(
        r#"<img{} src="{}" alt="{}" width="{}" loading="lazy" style="background-color: {}">"#,
        class.map(|c| format!(r#" class="{}""#, c)).unwrap_or_default(),
        escape_html(&handle.src),
        escape_html(alt),
        handle.width,
        escape_html(&handle.placeholder)
    )
}

fn glyph(src: &str, alt: &str) -> String {
    format!(
        r#"<img class="glyph" src="{}" alt="{}" width="64" height="64">"#,
        escape_html(src),
        escape_html(alt)
    )
}

fn link(link: &LinkNode) -> String {
    format!(
        r#"<a href="{}"{}>{}</a>"#,
        escape_html(&link.href),
        external_attrs(link.external),
        link.html
    )
}

fn external_attrs(external: bool) -> &'static str {
    if external {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    }
}

fn button(button: &ButtonNode) -> String {
    let glyph = button
        .glyph_src
        .as_ref()
        .map(|src| format!(r#"<img class="button-glyph" src="{}" alt="">"#, escape_html(src)))
        .unwrap_or_default();

    match &button.action {
        ButtonAction::ScrollTo(id) => format!(
            r#"<button type="button" class="button {}" data-scroll-to="{}">{}{}</button>"#,
            button.variant.class(),
            escape_html(id.as_str()),
            glyph,
            button.html
        ),
        ButtonAction::Href { href, external } => format!(
            r#"<a class="button {}" href="{}"{}>{}{}</a>"#,
            button.variant.class(),
            escape_html(href),
            external_attrs(*external),
            glyph,
            button.html
        ),
    }
}
