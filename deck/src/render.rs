//! Read-only slide layout.
//!
//! A [`SlideScene`] is what a viewer paints for one slide: the effective
//! background as CSS and every element as an absolutely positioned node.
//! Stored percentages are resolution independent, so nodes carry them
//! unchanged. Nodes are sorted by `z_index`; ties keep list order (text
//! boxes, then images, videos, code blocks).
//!
//! [`to_html`] and [`export_html`] turn scenes into standalone markup for
//! the CLI's export command.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::error::DeckError;
use crate::media::embed_url;
use crate::model::{Background, BackgroundKind, Element, ElementId, ElementKind, Presentation, Slide, SlideId};

const FALLBACK_COLOR: &str = "#ffffff";

/// One positioned element, in percent of the slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub id: ElementId,
    pub kind: ElementKind,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub z_index: i64,
    pub content: NodeContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeContent {
    Text { text: String, font_size_em: f64, color: String, font_family: String },
    Image { src: String, alt: String },
    Video { embed_url: String },
    Code { language: String, source: String, font_size_em: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideScene {
    pub slide_id: SlideId,
    pub index: usize,
    pub total: usize,
    pub background_css: String,
    pub nodes: Vec<RenderNode>,
}

/// CSS `background` value for a slide fill.
#[must_use]
pub fn background_css(background: &Background) -> String {
    let color = || {
        if background.color.is_empty() { FALLBACK_COLOR.to_owned() } else { background.color.clone() }
    };
    match background.kind {
        BackgroundKind::Solid => color(),
        BackgroundKind::Gradient => {
            let g = &background.gradient;
            format!("linear-gradient({}, {}, {})", g.direction, g.start, g.end)
        }
        BackgroundKind::Image if !background.image.is_empty() => {
            format!("url(\"{}\") center / cover no-repeat", background.image)
        }
        BackgroundKind::Image => color(),
    }
}

/// Slide position label shown by the viewer, e.g. `2 / 5`.
#[must_use]
pub fn counter_label(index: usize, total: usize) -> String {
    format!("{} / {total}", index + 1)
}

fn node<B>(kind: ElementKind, element: &Element<B>, content: NodeContent) -> RenderNode {
    RenderNode {
        id: element.id.clone(),
        kind,
        left: element.position.x,
        top: element.position.y,
        width: element.size.width,
        height: element.size.height,
        z_index: element.z_index,
        content,
    }
}

/// Lay out the slide at `index`.
///
/// # Errors
///
/// Returns `SlideOutOfRange` if the presentation has no such slide.
pub fn render_slide(presentation: &Presentation, index: usize) -> Result<SlideScene, DeckError> {
    let len = presentation.slides.len();
    let slide = presentation.slide(index).ok_or(DeckError::SlideOutOfRange { index, len })?;
    Ok(layout(presentation, index, slide))
}

/// Lay out every slide in order.
#[must_use]
pub fn render_presentation(presentation: &Presentation) -> Vec<SlideScene> {
    presentation.slides.iter().enumerate().map(|(index, slide)| layout(presentation, index, slide)).collect()
}

fn layout(presentation: &Presentation, index: usize, slide: &Slide) -> SlideScene {
    let mut nodes = Vec::with_capacity(slide.element_count());
    for e in &slide.text_boxes {
        let content = NodeContent::Text {
            text: e.body.text.clone(),
            font_size_em: e.body.font_size,
            color: e.body.color.clone(),
            font_family: e.body.font_family.clone(),
        };
        nodes.push(node(ElementKind::Text, e, content));
    }
    for e in &slide.images {
        let content = NodeContent::Image { src: e.body.src.clone(), alt: e.body.description.clone() };
        nodes.push(node(ElementKind::Image, e, content));
    }
    for e in &slide.videos {
        let content = NodeContent::Video { embed_url: embed_url(&e.body.video_id, e.body.autoplay) };
        nodes.push(node(ElementKind::Video, e, content));
    }
    for e in &slide.code_blocks {
        let content = NodeContent::Code {
            language: e.body.language.clone(),
            source: e.body.content.clone(),
            font_size_em: e.body.font_size,
        };
        nodes.push(node(ElementKind::Code, e, content));
    }
    nodes.sort_by_key(|n| n.z_index);

    SlideScene {
        slide_id: slide.id.clone(),
        index,
        total: presentation.slides.len(),
        background_css: background_css(slide.effective_background(&presentation.default_background)),
        nodes,
    }
}

// =============================================================================
// HTML
// =============================================================================

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn node_html(node: &RenderNode) -> String {
    let style = format!(
        "position:absolute;left:{}%;top:{}%;width:{}%;height:{}%;z-index:{}",
        node.left, node.top, node.width, node.height, node.z_index
    );
    let inner = match &node.content {
        NodeContent::Text { text, font_size_em, color, font_family } => format!(
            "<div style=\"font-size:{font_size_em}em;color:{};font-family:{}\">{}</div>",
            escape(color),
            escape(font_family),
            escape(text)
        ),
        NodeContent::Image { src, alt } => format!(
            "<img src=\"{}\" alt=\"{}\" style=\"width:100%;height:100%;object-fit:contain\">",
            escape(src),
            escape(alt)
        ),
        NodeContent::Video { embed_url } => format!(
            "<iframe src=\"{}\" style=\"width:100%;height:100%;border:0\" allowfullscreen></iframe>",
            escape(embed_url)
        ),
        NodeContent::Code { language, source, font_size_em } => format!(
            "<pre style=\"font-size:{font_size_em}em;margin:0\"><code class=\"language-{}\">{}</code></pre>",
            escape(language),
            escape(source)
        ),
    };
    format!("<div class=\"{}\" style=\"{style}\">{inner}</div>", node.kind.as_str())
}

/// Markup for one slide scene.
#[must_use]
pub fn to_html(scene: &SlideScene) -> String {
    let mut html = format!(
        "<section class=\"slide\" data-slide=\"{}\" style=\"position:relative;aspect-ratio:16/9;overflow:hidden;background:{}\">",
        escape(&scene.slide_id),
        escape(&scene.background_css)
    );
    for node in &scene.nodes {
        html.push_str(&node_html(node));
    }
    html.push_str(&format!("<footer class=\"counter\">{}</footer>", counter_label(scene.index, scene.total)));
    html.push_str("</section>");
    html
}

/// Standalone HTML document with every slide of `presentation`.
#[must_use]
pub fn export_html(presentation: &Presentation) -> String {
    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n",
        escape(&presentation.name)
    );
    for scene in render_presentation(presentation) {
        html.push_str(&to_html(&scene));
        html.push('\n');
    }
    html.push_str("</body>\n</html>\n");
    html
}
