use crate::effects::rotate::rotate_expand;
use crate::foundation::core::Rgba8;
use crate::foundation::error::SealResult;
use crate::foundation::layer::Layer;
use crate::text::font::{GlyphFont, GlyphPaint, LineMetrics, PositionedGlyph};

/// Side of the scratch bitmap used when a glyph has no measurable width.
pub const MIN_GLYPH_CANVAS_PX: u32 = 100;

/// Side of the square scratch bitmap a single glyph is rendered into.
///
/// Proportional to the glyph so its rotated copy never clips: five advances wide, and at least
/// two line heights so tall narrow glyphs fit above the centered baseline.
pub fn glyph_canvas_side(width: f32, metrics: LineMetrics) -> u32 {
    if !(width.is_finite() && width > 0.0) {
        return MIN_GLYPH_CANVAS_PX;
    }
    let side = (width * 5.0).max(metrics.line_height() * 2.0).ceil();
    if side.is_finite() && side >= 1.0 {
        side as u32
    } else {
        MIN_GLYPH_CANVAS_PX
    }
}

/// Render `ch` alone into a fresh square bitmap, anchored on its baseline middle at the
/// bitmap center, then rotate it clockwise by `rotation_deg`.
///
/// The anchor stays at the center of the returned bitmap, so pasting it centered on a point
/// puts the glyph's baseline middle on that point.
pub fn render_glyph<F: GlyphFont + ?Sized>(
    font: &F,
    ch: char,
    width: f32,
    color: Rgba8,
    rotation_deg: f64,
) -> SealResult<Layer> {
    let side = glyph_canvas_side(width, font.line_metrics());
    let mut bitmap = Layer::transparent(side, side);
    let center = side as f32 / 2.0;
    let glyph = PositionedGlyph {
        ch,
        x: center - width / 2.0,
        y: center,
    };
    font.draw_glyphs(&mut bitmap, &[glyph], &GlyphPaint::for_char(ch, color))?;
    Ok(rotate_expand(&bitmap, rotation_deg))
}

#[cfg(test)]
#[path = "../../tests/unit/text/glyph.rs"]
mod tests;
