//! The element tree a template produces: one fixed-size page of absolutely
//! placed, inline-styled elements. This is the input contract of the
//! rasterizer; coordinates are in page points with the origin top-left.

use parchment_types::{Color, Rect, Size};

/// One printable page of markup.
#[derive(Debug, Clone)]
pub struct PageMarkup {
    /// Logical page size in points; capture multiplies this by the scale.
    pub size: Size,
    pub background: Color,
    pub elements: Vec<Element>,
}

impl PageMarkup {
    pub fn new(size: Size, background: Color) -> Self {
        Self { size, background, elements: Vec::new() }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// All text content concatenated in element order, one line per block.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            if let ElementKind::Text(block) = &element.kind {
                out.push_str(&block.content);
                out.push('\n');
            }
        }
        out
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.elements.iter().any(|e| match &e.kind {
            ElementKind::Text(block) => block.content.contains(needle),
            _ => false,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    pub frame: Rect,
    pub kind: ElementKind,
}

impl Element {
    pub fn text(frame: Rect, content: impl Into<String>, style: TextStyle) -> Self {
        Self { frame, kind: ElementKind::Text(TextBlock { content: content.into(), style }) }
    }

    pub fn boxed(frame: Rect, style: BoxStyle) -> Self {
        Self { frame, kind: ElementKind::Box(style) }
    }

    /// A horizontal rule occupying the top edge of `frame`.
    pub fn rule(frame: Rect, style: RuleStyle) -> Self {
        Self { frame, kind: ElementKind::Rule(style) }
    }
}

#[derive(Debug, Clone)]
pub enum ElementKind {
    Text(TextBlock),
    Box(BoxStyle),
    Rule(RuleStyle),
}

#[derive(Debug, Clone)]
pub struct TextBlock {
    pub content: String,
    pub style: TextStyle,
}

/// Inline text styling. Templates carry everything the rasterizer needs;
/// there is no external stylesheet to resolve at capture time.
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub family: FontFamily,
    pub size_pt: f32,
    pub color: Color,
    pub align: TextAlign,
    pub letter_spacing: f32,
}

impl TextStyle {
    pub fn new(family: FontFamily, size_pt: f32) -> Self {
        Self { family, size_pt, color: Color::BLACK, align: TextAlign::Left, letter_spacing: 0.0 }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontFamily {
    Serif,
    SansSerif,
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Default)]
pub struct BoxStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl BoxStyle {
    pub fn filled(color: Color) -> Self {
        Self { fill: Some(color), stroke: None }
    }

    pub fn outlined(color: Color, width: f32) -> Self {
        Self { fill: None, stroke: Some(Stroke { color, width }) }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct RuleStyle {
    pub color: Color,
    pub thickness: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_text_only_matches_text_elements() {
        let mut page = PageMarkup::new(Size::new(100.0, 100.0), Color::WHITE);
        page.push(Element::boxed(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            BoxStyle::filled(Color::gray(240)),
        ));
        page.push(Element::text(
            Rect::new(0.0, 10.0, 100.0, 20.0),
            "CERT-001",
            TextStyle::new(FontFamily::Serif, 12.0),
        ));
        assert!(page.contains_text("CERT-001"));
        assert!(!page.contains_text("missing"));
        assert_eq!(page.text_content().trim(), "CERT-001");
    }
}
