use crate::foundation::core::Rgba8;
use crate::foundation::error::SealResult;
use crate::foundation::layer::Layer;

/// Characters whose strokes are thin enough to vanish under the emboss blur. They get an extra
/// outline stroke in the fill color.
pub const THIN_STROKE_CHARS: [char; 2] = ['-', ':'];

/// Outline radius given to [`THIN_STROKE_CHARS`]: how far ink grows past the glyph edge, in
/// pixels.
pub const THIN_STROKE_PX: f32 = 1.0;

/// Width substituted when neither metric can measure a character, as a fraction of the em size.
pub const FALLBACK_WIDTH_EM: f32 = 0.5;

/// Vertical font metrics in pixels, both positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl LineMetrics {
    pub fn line_height(self) -> f32 {
        self.ascent + self.descent
    }
}

/// A character placed with its baseline-left origin at `(x, y)` in target pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionedGlyph {
    pub ch: char,
    pub x: f32,
    pub y: f32,
}

/// How glyphs are painted: solid fill plus an optional same-color outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPaint {
    pub color: Rgba8,
    /// Outward reach of the outline past the glyph edge; `0` for fill only.
    pub stroke_px: f32,
}

impl GlyphPaint {
    pub fn fill(color: Rgba8) -> Self {
        Self {
            color,
            stroke_px: 0.0,
        }
    }

    /// Paint for `ch`, adding the thin-stroke outline where needed.
    pub fn for_char(ch: char, color: Rgba8) -> Self {
        if THIN_STROKE_CHARS.contains(&ch) {
            Self {
                color,
                stroke_px: THIN_STROKE_PX,
            }
        } else {
            Self::fill(color)
        }
    }
}

/// The font surface the layout engine needs: per-character metrics and glyph painting.
///
/// A font handle is fixed at one pixel size.
pub trait GlyphFont {
    /// Em size in pixels.
    fn size_px(&self) -> f32;

    /// Horizontal advance of `ch`, `None` when the font cannot measure it.
    fn advance(&self, ch: char) -> Option<f32>;

    /// Width of the inked bounds of `ch`, `None` when unavailable.
    fn ink_width(&self, ch: char) -> Option<f32>;

    fn line_metrics(&self) -> LineMetrics;

    /// Paint `glyphs` onto `target` with source-over compositing.
    fn draw_glyphs(
        &self,
        target: &mut Layer,
        glyphs: &[PositionedGlyph],
        paint: &GlyphPaint,
    ) -> SealResult<()>;
}

/// Linear width of `ch`: advance, then ink bounds, then [`FALLBACK_WIDTH_EM`].
///
/// A character both metrics report as zero wide (combining marks) keeps a width of zero and
/// occupies no arc length.
pub fn measure_char<F: GlyphFont + ?Sized>(font: &F, ch: char) -> f32 {
    let usable = |w: Option<f32>| w.filter(|w| w.is_finite() && *w >= 0.0);
    let advance = usable(font.advance(ch));
    if let Some(w) = advance.filter(|w| *w > 0.0) {
        return w;
    }
    let ink = usable(font.ink_width(ch));
    if let Some(w) = ink.filter(|w| *w > 0.0) {
        tracing::debug!(?ch, width = w, "advance unavailable, using ink bounds");
        return w;
    }
    if advance.is_some() || ink.is_some() {
        return 0.0;
    }
    let w = FALLBACK_WIDTH_EM * font.size_px();
    tracing::debug!(?ch, width = w, "glyph unmeasurable, using default width");
    w
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
