//! The tiny-skia capture backend.

use log::{debug, warn};
use parchment_template::{
    BoxStyle, ElementKind, PageMarkup, RuleStyle, TextAlign, TextBlock,
};
use parchment_types::{Color, Rect};
use std::sync::Arc;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use crate::fonts::{FontStore, LoadedFace};
use crate::{CaptureOptions, CapturedImage, MAX_SCALE, MIN_SCALE, RasterError, Rasterizer};

/// Rasterizes markup onto a `tiny-skia` pixmap, drawing text from font
/// outlines. When no face is available for a family the text degrades to a
/// placeholder rule so a fontless host still produces a capture.
pub struct SkiaRasterizer {
    fonts: Arc<FontStore>,
}

impl SkiaRasterizer {
    pub fn new(fonts: Arc<FontStore>) -> Self {
        Self { fonts }
    }
}

impl Rasterizer for SkiaRasterizer {
    fn capture(
        &self,
        markup: &PageMarkup,
        options: &CaptureOptions,
    ) -> Result<CapturedImage, RasterError> {
        let scale = options.scale;
        if !(MIN_SCALE..=MAX_SCALE).contains(&scale) {
            return Err(RasterError::InvalidScale(scale));
        }
        if markup.size.is_empty() {
            return Err(RasterError::EmptyPage {
                width: markup.size.width,
                height: markup.size.height,
            });
        }

        let surface = markup.size.scaled(scale);
        let width = surface.width.round() as u32;
        let height = surface.height.round() as u32;
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RasterError::SurfaceAlloc { width, height })?;
        debug!("capturing {}x{} surface at scale {}", width, height, scale);

        pixmap.fill(to_sk_color(options.background));
        fill_rect(&mut pixmap, scaled(Rect::from_size(markup.size), scale), markup.background);

        for element in &markup.elements {
            let frame = scaled(element.frame, scale);
            match &element.kind {
                ElementKind::Box(style) => draw_box(&mut pixmap, frame, style, scale),
                ElementKind::Rule(style) => draw_rule(&mut pixmap, frame, style, scale),
                ElementKind::Text(block) => {
                    let face = self.fonts.face_for(&block.style.family);
                    draw_text(&mut pixmap, frame, block, scale, face);
                }
            }
        }

        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        for pixel in pixmap.pixels() {
            let c = pixel.demultiply();
            rgb.extend_from_slice(&[c.red(), c.green(), c.blue()]);
        }
        let png = pixmap
            .encode_png()
            .map_err(|e| RasterError::Encode(e.to_string()))?;

        Ok(CapturedImage { width_px: width, height_px: height, scale, rgb, png })
    }
}

fn scaled(rect: Rect, scale: f32) -> Rect {
    Rect::new(rect.x * scale, rect.y * scale, rect.width * scale, rect.height * scale)
}

fn to_sk_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.alpha_u8())
}

fn solid_paint<'a>(color: Color) -> Paint<'a> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.alpha_u8());
    paint.anti_alias = true;
    paint
}

fn rect_path(rect: Rect) -> Option<Path> {
    let r = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)?;
    Some(PathBuilder::from_rect(r))
}

fn fill_rect(pixmap: &mut Pixmap, rect: Rect, color: Color) {
    if let Some(path) = rect_path(rect) {
        pixmap.fill_path(
            &path,
            &solid_paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

fn draw_box(pixmap: &mut Pixmap, frame: Rect, style: &BoxStyle, scale: f32) {
    if let Some(fill) = style.fill {
        fill_rect(pixmap, frame, fill);
    }
    if let Some(stroke) = style.stroke
        && let Some(path) = rect_path(frame)
    {
        pixmap.stroke_path(
            &path,
            &solid_paint(stroke.color),
            &Stroke { width: stroke.width * scale, ..Stroke::default() },
            Transform::identity(),
            None,
        );
    }
}

fn draw_rule(pixmap: &mut Pixmap, frame: Rect, style: &RuleStyle, scale: f32) {
    let thickness = (style.thickness * scale).max(1.0);
    fill_rect(
        pixmap,
        Rect::new(frame.x, frame.y, frame.width, thickness),
        style.color,
    );
}

fn draw_text(
    pixmap: &mut Pixmap,
    frame: Rect,
    block: &TextBlock,
    scale: f32,
    face: Option<Arc<LoadedFace>>,
) {
    let size_px = block.style.size_pt * scale;
    if size_px <= 0.0 || block.content.is_empty() {
        return;
    }

    let Some(loaded) = face else {
        draw_text_placeholder(pixmap, frame, block, size_px);
        return;
    };
    let parsed = match Face::parse(&loaded.data, loaded.index) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("font face failed to parse ({}), using placeholder", e);
            draw_text_placeholder(pixmap, frame, block, size_px);
            return;
        }
    };

    let upem = parsed.units_per_em() as f32;
    let glyph_scale = size_px / upem;
    let spacing_px = block.style.letter_spacing * scale;

    // First pass: advances, so alignment can offset the pen start.
    let mut glyphs: Vec<(Option<GlyphId>, f32)> = Vec::with_capacity(block.content.len());
    let mut total_advance = 0.0;
    for ch in block.content.chars() {
        let glyph = parsed.glyph_index(ch);
        let advance = match glyph {
            Some(id) => {
                parsed.glyph_hor_advance(id).map(|a| a as f32 * glyph_scale).unwrap_or(size_px * 0.5)
            }
            // Unmapped character: advance by half an em so spacing stays sane.
            None => size_px * 0.5,
        };
        let advance = advance + spacing_px;
        glyphs.push((glyph, advance));
        total_advance += advance;
    }

    let start_x = match block.style.align {
        TextAlign::Left => frame.x,
        TextAlign::Center => frame.x + (frame.width - total_advance) / 2.0,
        TextAlign::Right => frame.x + frame.width - total_advance,
    };
    let baseline = frame.y + parsed.ascender() as f32 * glyph_scale;
    let paint = solid_paint(block.style.color);

    let mut pen_x = start_x;
    for (glyph, advance) in glyphs {
        if let Some(id) = glyph {
            let mut builder = GlyphPathBuilder::new(pen_x, baseline, glyph_scale);
            if parsed.outline_glyph(id, &mut builder).is_some()
                && let Some(path) = builder.finish()
            {
                pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
        }
        pen_x += advance;
    }
}

/// Fontless fallback: a rule along the text baseline sized to the content,
/// so the capture still carries the block's footprint.
fn draw_text_placeholder(pixmap: &mut Pixmap, frame: Rect, block: &TextBlock, size_px: f32) {
    let estimated = (block.content.chars().count() as f32 * size_px * 0.5).min(frame.width);
    let x = match block.style.align {
        TextAlign::Left => frame.x,
        TextAlign::Center => frame.x + (frame.width - estimated) / 2.0,
        TextAlign::Right => frame.x + frame.width - estimated,
    };
    fill_rect(
        pixmap,
        Rect::new(x, frame.y + size_px * 0.75, estimated, (size_px * 0.08).max(1.0)),
        block.style.color,
    );
}

/// Maps font-unit outlines (y up) into pixel space (y down) around a pen
/// position on the baseline.
struct GlyphPathBuilder {
    builder: PathBuilder,
    origin_x: f32,
    origin_y: f32,
    scale: f32,
}

impl GlyphPathBuilder {
    fn new(origin_x: f32, origin_y: f32, scale: f32) -> Self {
        Self { builder: PathBuilder::new(), origin_x, origin_y, scale }
    }

    fn finish(self) -> Option<Path> {
        self.builder.finish()
    }

    fn map_x(&self, x: f32) -> f32 {
        self.origin_x + x * self.scale
    }

    fn map_y(&self, y: f32) -> f32 {
        self.origin_y - y * self.scale
    }
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.map_x(x), self.map_y(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.map_x(x), self.map_y(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder
            .quad_to(self.map_x(x1), self.map_y(y1), self.map_x(x), self.map_y(y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.map_x(x1),
            self.map_y(y1),
            self.map_x(x2),
            self.map_y(y2),
            self.map_x(x),
            self.map_y(y),
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parchment_template::{Element, FontFamily, TextStyle};
    use parchment_types::Size;

    fn fontless() -> SkiaRasterizer {
        SkiaRasterizer::new(Arc::new(FontStore::with_fonts(Vec::new())))
    }

    fn sample_markup() -> PageMarkup {
        let mut page = PageMarkup::new(Size::new(100.0, 50.0), Color::WHITE);
        page.push(Element::boxed(
            Rect::new(10.0, 10.0, 40.0, 20.0),
            BoxStyle::filled(Color::rgb(200, 0, 0)),
        ));
        page.push(Element::text(
            Rect::new(10.0, 32.0, 80.0, 12.0),
            "Hello",
            TextStyle::new(FontFamily::SansSerif, 10.0),
        ));
        page
    }

    #[test]
    fn capture_dimensions_follow_scale() {
        let image = fontless()
            .capture(&sample_markup(), &CaptureOptions { scale: 2.0, background: Color::WHITE })
            .unwrap();
        assert_eq!(image.width_px, 200);
        assert_eq!(image.height_px, 100);
        assert_eq!(image.rgb.len(), 200 * 100 * 3);
        assert!(!image.png.is_empty());
    }

    #[test]
    fn capture_paints_filled_box() {
        let image = fontless()
            .capture(&sample_markup(), &CaptureOptions::default())
            .unwrap();
        // Center of the red box at scale 2: page pixel (60, 40).
        let offset = ((40 * image.width_px + 60) * 3) as usize;
        assert_eq!(&image.rgb[offset..offset + 3], &[200, 0, 0]);
    }

    #[test]
    fn out_of_range_scale_is_rejected() {
        let err = fontless()
            .capture(&sample_markup(), &CaptureOptions { scale: 8.0, background: Color::WHITE })
            .unwrap_err();
        assert!(matches!(err, RasterError::InvalidScale(_)));
    }

    #[test]
    fn degenerate_page_is_rejected() {
        let page = PageMarkup::new(Size::zero(), Color::WHITE);
        let err = fontless().capture(&page, &CaptureOptions::default()).unwrap_err();
        assert!(matches!(err, RasterError::EmptyPage { .. }));
    }
}
