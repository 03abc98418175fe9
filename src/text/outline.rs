use std::path::Path;
use std::sync::Arc;

use skrifa::instance::{LocationRef, Size};
use skrifa::{FontRef, GlyphId, MetadataProvider};

use crate::effects::composite::composite_at;
use crate::foundation::error::{SealError, SealResult};
use crate::foundation::layer::Layer;
use crate::text::font::{GlyphFont, GlyphPaint, LineMetrics, PositionedGlyph, measure_char};

/// Extra margin around a glyph run's nominal box, as a fraction of the em size, for accents and
/// overhangs that poke out of the ascent/advance box.
const OVERHANG_EM: f32 = 0.25;

/// A TrueType/OpenType font at a fixed pixel size.
///
/// Metrics come from `skrifa`; glyphs are rasterized by `vello_cpu` into a scratch pixmap that is
/// then composited onto the target.
#[derive(Clone)]
pub struct OutlineFont {
    bytes: Arc<Vec<u8>>,
    data: vello_cpu::peniko::FontData,
    index: u32,
    size_px: f32,
}

impl std::fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFont")
            .field("bytes", &self.bytes.len())
            .field("index", &self.index)
            .field("size_px", &self.size_px)
            .finish()
    }
}

impl OutlineFont {
    /// Parse font bytes (face `index` of a collection, `0` otherwise).
    pub fn from_bytes(bytes: Vec<u8>, index: u32, size_px: f32) -> SealResult<Self> {
        validate_size(size_px)?;
        FontRef::from_index(&bytes, index)
            .map_err(|e| SealError::font(format!("unreadable font data: {e}")))?;
        let data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(bytes.clone()),
            index,
        );
        Ok(Self {
            bytes: Arc::new(bytes),
            data,
            index,
            size_px,
        })
    }

    /// Read and parse a font file.
    pub fn load(path: impl AsRef<Path>, size_px: f32) -> SealResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            SealError::font(format!("failed to read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(bytes, 0, size_px)
    }

    /// The same face at another pixel size; the font data is shared.
    pub fn with_size(&self, size_px: f32) -> SealResult<Self> {
        validate_size(size_px)?;
        Ok(Self {
            size_px,
            ..self.clone()
        })
    }

    fn font_ref(&self) -> SealResult<FontRef<'_>> {
        FontRef::from_index(&self.bytes, self.index)
            .map_err(|e| SealError::font(format!("unreadable font data: {e}")))
    }

    /// Glyph for `ch`; characters the face lacks map to `.notdef` so their reserved width is
    /// still inked.
    fn glyph_id(font: &FontRef<'_>, ch: char) -> GlyphId {
        font.charmap().map(ch).unwrap_or(GlyphId::NOTDEF)
    }
}

impl GlyphFont for OutlineFont {
    fn size_px(&self) -> f32 {
        self.size_px
    }

    fn advance(&self, ch: char) -> Option<f32> {
        let font = self.font_ref().ok()?;
        let gid = Self::glyph_id(&font, ch);
        font.glyph_metrics(Size::new(self.size_px), LocationRef::default())
            .advance_width(gid)
    }

    fn ink_width(&self, ch: char) -> Option<f32> {
        let font = self.font_ref().ok()?;
        let gid = Self::glyph_id(&font, ch);
        let bounds = font
            .glyph_metrics(Size::new(self.size_px), LocationRef::default())
            .bounds(gid)?;
        Some(bounds.x_max - bounds.x_min)
    }

    fn line_metrics(&self) -> LineMetrics {
        match self.font_ref() {
            Ok(font) => {
                let m = font.metrics(Size::new(self.size_px), LocationRef::default());
                LineMetrics {
                    ascent: m.ascent,
                    descent: -m.descent,
                }
            }
            Err(_) => LineMetrics {
                ascent: self.size_px * 0.8,
                descent: self.size_px * 0.2,
            },
        }
    }

    fn draw_glyphs(
        &self,
        target: &mut Layer,
        glyphs: &[PositionedGlyph],
        paint: &GlyphPaint,
    ) -> SealResult<()> {
        if glyphs.is_empty() || paint.color.a == 0 {
            return Ok(());
        }
        let font = self.font_ref()?;
        let metrics = self.line_metrics();
        let pad = paint.stroke_px.max(0.0) + OVERHANG_EM * self.size_px + 1.0;

        let mut x0 = f32::INFINITY;
        let mut y0 = f32::INFINITY;
        let mut x1 = f32::NEG_INFINITY;
        let mut y1 = f32::NEG_INFINITY;
        for g in glyphs {
            x0 = x0.min(g.x);
            x1 = x1.max(g.x + measure_char(self, g.ch));
            y0 = y0.min(g.y - metrics.ascent);
            y1 = y1.max(g.y + metrics.descent);
        }
        let x0 = ((x0 - pad).floor() as i64).max(0);
        let y0 = ((y0 - pad).floor() as i64).max(0);
        let x1 = ((x1 + pad).ceil() as i64).min(i64::from(target.width()));
        let y1 = ((y1 + pad).ceil() as i64).min(i64::from(target.height()));
        if x0 >= x1 || y0 >= y1 {
            return Ok(());
        }

        let w: u16 = (x1 - x0)
            .try_into()
            .map_err(|_| SealError::raster("glyph scratch width exceeds u16"))?;
        let h: u16 = (y1 - y0)
            .try_into()
            .map_err(|_| SealError::raster("glyph scratch height exceeds u16"))?;
        let (ox, oy) = (x0 as f32, y0 as f32);
        let font = &font;
        let run = move || {
            glyphs.iter().map(move |g| vello_cpu::Glyph {
                id: Self::glyph_id(font, g.ch).to_u32(),
                x: g.x - ox,
                y: g.y - oy,
            })
        };

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        let c = paint.color;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        ctx.glyph_run(&self.data)
            .font_size(self.size_px)
            .fill_glyphs(run());
        if paint.stroke_px > 0.0 {
            // `stroke_px` reaches outward from the outline; a centered stroke needs twice that.
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(2.0 * f64::from(paint.stroke_px)));
            ctx.glyph_run(&self.data)
                .font_size(self.size_px)
                .stroke_glyphs(run());
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        let scratch = Layer::from_premul(
            u32::from(w),
            u32::from(h),
            pixmap.data_as_u8_slice().to_vec(),
        )?;
        composite_at(target, &scratch, x0 as i32, y0 as i32);
        Ok(())
    }
}

fn validate_size(size_px: f32) -> SealResult<()> {
    if !size_px.is_finite() || size_px <= 0.0 {
        return Err(SealError::validation("font size_px must be finite and > 0"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/text/outline.rs"]
mod tests;
