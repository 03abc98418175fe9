use super::*;

const BASE: Rgba8 = Rgba8::new(128, 128, 128, 255);
const INK: [u8; 4] = [200, 60, 40, 255];

fn square_glyph(size: u32, from: i64, to: i64) -> Layer {
    let mut layer = Layer::transparent(size, size);
    for y in from..to {
        for x in from..to {
            layer.set_pixel(x, y, INK);
        }
    }
    layer
}

fn luma(px: [u8; 4]) -> u32 {
    u32::from(px[0]) + u32::from(px[1]) + u32::from(px[2])
}

#[test]
fn shadow_up_left_highlight_down_right_glyph_on_top() {
    let mut base = Layer::filled(48, 48, BASE);
    let glyphs = square_glyph(48, 16, 32);
    apply_emboss(glyphs, &mut base).unwrap();

    let grey = luma(BASE.premul());
    assert!(luma(base.pixel(14, 14)) < grey, "shadow should darken up-left");
    assert!(luma(base.pixel(33, 33)) > grey, "highlight should lighten down-right");

    for (x, y) in [(16, 16), (24, 24), (31, 31), (16, 31), (31, 16)] {
        assert_eq!(base.pixel(x, y), INK, "glyph color must be exact at ({x},{y})");
    }
    assert_eq!(base.pixel(2, 2), BASE.premul());
    assert_eq!(base.pixel(45, 45), BASE.premul());
}

#[test]
fn derived_layers_are_pure_black_and_pure_white() {
    let glyphs = square_glyph(32, 10, 20);
    let EmbossLayers { shadow, highlight } = emboss_layers(&glyphs, &MINTED).unwrap();

    for px in shadow.data().chunks_exact(4) {
        assert_eq!(&px[0..3], &[0, 0, 0]);
        assert!(px[3] <= 220);
    }
    for px in highlight.data().chunks_exact(4) {
        assert_eq!(px[0], px[3]);
        assert_eq!(px[1], px[3]);
        assert_eq!(px[2], px[3]);
    }
    // Solid interior of the shifted shadow reaches the full fill opacity.
    assert_eq!(shadow.pixel(13, 13)[3], 220);
    assert_eq!(highlight.pixel(17, 17)[3], 255);
}

#[test]
fn highlight_is_sharper_than_shadow() {
    let glyphs = square_glyph(32, 10, 20);
    let EmbossLayers { shadow, highlight } = emboss_layers(&glyphs, &MINTED).unwrap();
    // Three pixels past the (shifted) far edge: only the wider shadow blur still reaches.
    assert!(shadow.pixel(20, 13)[3] > 0);
    assert_eq!(highlight.pixel(25, 17)[3], 0);
}

#[test]
fn empty_glyph_layer_leaves_base_untouched() {
    let mut base = Layer::filled(8, 8, BASE);
    let before = base.clone();
    apply_emboss(Layer::transparent(8, 8), &mut base).unwrap();
    assert_eq!(base, before);
}

#[test]
fn mismatched_sizes_are_rejected() {
    let mut base = Layer::filled(8, 8, BASE);
    let err = apply_emboss(Layer::transparent(4, 8), &mut base).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}
