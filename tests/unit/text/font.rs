use super::*;
use crate::text::testing::BlockFont;

#[test]
fn advance_is_the_primary_metric() {
    let font = BlockFont::new(20.0, 10.0).with_width('W', 17.5);
    assert_eq!(measure_char(&font, 'W'), 17.5);
    assert_eq!(measure_char(&font, 'a'), 10.0);
}

#[test]
fn ink_bounds_back_up_a_zero_advance() {
    let mut font = BlockFont::new(20.0, 10.0).with_width('x', 0.0);
    font.ink_widths.insert('x', 6.0);
    assert_eq!(measure_char(&font, 'x'), 6.0);
}

#[test]
fn unmeasurable_glyph_gets_default_width() {
    let mut font = BlockFont::new(20.0, 10.0);
    font.unmeasurable.push('?');
    assert_eq!(measure_char(&font, '?'), FALLBACK_WIDTH_EM * 20.0);
}

#[test]
fn genuinely_zero_width_glyph_stays_zero() {
    let mut font = BlockFont::new(20.0, 10.0).with_width('\u{301}', 0.0);
    font.ink_widths.insert('\u{301}', 0.0);
    assert_eq!(measure_char(&font, '\u{301}'), 0.0);
}

#[test]
fn non_finite_metrics_are_ignored() {
    let mut font = BlockFont::new(20.0, 10.0).with_width('n', f32::NAN);
    font.ink_widths.insert('n', 4.0);
    assert_eq!(measure_char(&font, 'n'), 4.0);
}

#[test]
fn thin_characters_get_an_outline() {
    let c = Rgba8::new(1, 2, 3, 4);
    assert_eq!(GlyphPaint::for_char('-', c).stroke_px, THIN_STROKE_PX);
    assert_eq!(GlyphPaint::for_char(':', c).stroke_px, THIN_STROKE_PX);
    assert_eq!(GlyphPaint::for_char('A', c).stroke_px, 0.0);
}
