use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::SealResult;
use crate::foundation::layer::Layer;
use crate::text::font::{GlyphFont, GlyphPaint, PositionedGlyph, THIN_STROKE_CHARS, measure_char};

/// Positions for a straight line of text centered on `center`.
///
/// The run is centered horizontally on its summed advances; the baseline sits at
/// `center.y + (ascent - descent) / 2` so the line's optical middle lands on `center.y`.
pub fn plan_horizontal<F: GlyphFont + ?Sized>(
    text: &str,
    center: Point,
    font: &F,
) -> Vec<PositionedGlyph> {
    let widths: Vec<(char, f32)> = text.chars().map(|ch| (ch, measure_char(font, ch))).collect();
    let total: f32 = widths.iter().map(|&(_, w)| w).sum();
    let metrics = font.line_metrics();
    let baseline = center.y as f32 + (metrics.ascent - metrics.descent) / 2.0;

    let mut x = center.x as f32 - total / 2.0;
    let mut out = Vec::with_capacity(widths.len());
    for (ch, w) in widths {
        out.push(PositionedGlyph { ch, x, y: baseline });
        x += w;
    }
    out
}

/// Paint a straight, horizontally centered line of text onto `target`.
///
/// Glyphs are drawn in place without per-glyph bitmaps; thin characters are drawn in a second
/// run with their outline stroke.
pub fn layout_horizontal_centered<F: GlyphFont + ?Sized>(
    target: &mut Layer,
    text: &str,
    center: Point,
    font: &F,
    color: Rgba8,
) -> SealResult<()> {
    let glyphs = plan_horizontal(text, center, font);
    if glyphs.is_empty() {
        return Ok(());
    }
    let (thin, regular): (Vec<PositionedGlyph>, Vec<PositionedGlyph>) = glyphs
        .into_iter()
        .partition(|g| THIN_STROKE_CHARS.contains(&g.ch));

    if !regular.is_empty() {
        font.draw_glyphs(target, &regular, &GlyphPaint::fill(color))?;
    }
    if let Some(first) = thin.first() {
        font.draw_glyphs(target, &thin, &GlyphPaint::for_char(first.ch, color))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/text/horizontal.rs"]
mod tests;
