//! Box-glyph font for unit tests: every glyph is a solid rectangle one advance wide spanning
//! the ascent, so geometry can be checked without font files.

use std::collections::HashMap;

use crate::foundation::error::SealResult;
use crate::foundation::layer::Layer;
use crate::text::font::{GlyphFont, GlyphPaint, LineMetrics, PositionedGlyph};

#[derive(Clone, Debug)]
pub(crate) struct BlockFont {
    pub(crate) size: f32,
    pub(crate) default_width: f32,
    pub(crate) widths: HashMap<char, f32>,
    pub(crate) ink_widths: HashMap<char, f32>,
    pub(crate) unmeasurable: Vec<char>,
}

impl BlockFont {
    pub(crate) fn new(size: f32, default_width: f32) -> Self {
        Self {
            size,
            default_width,
            widths: HashMap::new(),
            ink_widths: HashMap::new(),
            unmeasurable: Vec::new(),
        }
    }

    pub(crate) fn with_width(mut self, ch: char, w: f32) -> Self {
        self.widths.insert(ch, w);
        self
    }
}

impl GlyphFont for BlockFont {
    fn size_px(&self) -> f32 {
        self.size
    }

    fn advance(&self, ch: char) -> Option<f32> {
        if self.unmeasurable.contains(&ch) {
            return None;
        }
        Some(self.widths.get(&ch).copied().unwrap_or(self.default_width))
    }

    fn ink_width(&self, ch: char) -> Option<f32> {
        if self.unmeasurable.contains(&ch) {
            return None;
        }
        self.ink_widths.get(&ch).copied().or_else(|| self.advance(ch))
    }

    fn line_metrics(&self) -> LineMetrics {
        LineMetrics {
            ascent: self.size * 0.8,
            descent: self.size * 0.2,
        }
    }

    fn draw_glyphs(
        &self,
        target: &mut Layer,
        glyphs: &[PositionedGlyph],
        paint: &GlyphPaint,
    ) -> SealResult<()> {
        let px = paint.color.premul();
        let ascent = self.line_metrics().ascent;
        for g in glyphs {
            let w = crate::text::font::measure_char(self, g.ch);
            let x0 = g.x - paint.stroke_px;
            let x1 = g.x + w + paint.stroke_px;
            let y0 = g.y - ascent - paint.stroke_px;
            let y1 = g.y + paint.stroke_px;
            for y in (y0.floor() as i64)..=(y1.ceil() as i64) {
                for x in (x0.floor() as i64)..=(x1.ceil() as i64) {
                    let (cx, cy) = (x as f32 + 0.5, y as f32 + 0.5);
                    if cx >= x0 && cx < x1 && cy >= y0 && cy < y1 {
                        let out = crate::effects::composite::over(target.pixel(x, y), px, 1.0);
                        target.set_pixel(x, y, out);
                    }
                }
            }
        }
        Ok(())
    }
}
