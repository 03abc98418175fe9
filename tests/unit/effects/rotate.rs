use super::*;

fn marked_layer() -> Layer {
    let mut layer = Layer::transparent(4, 2);
    layer.set_pixel(0, 0, [255, 0, 0, 255]);
    layer.set_pixel(3, 1, [0, 0, 255, 255]);
    layer
}

#[test]
fn zero_rotation_is_identity() {
    let src = marked_layer();
    assert_eq!(rotate_expand(&src, 0.0), src);
    assert_eq!(rotate_expand(&src, 360.0), src);
}

#[test]
fn quarter_turn_clockwise_moves_top_left_to_top_right() {
    let out = rotate_expand(&marked_layer(), 90.0);
    assert_eq!((out.width(), out.height()), (2, 4));
    assert_eq!(out.pixel(1, 0), [255, 0, 0, 255]);
    assert_eq!(out.pixel(0, 3), [0, 0, 255, 255]);
    assert_eq!(out.pixel(0, 0), [0, 0, 0, 0]);
}

#[test]
fn negative_quarter_turn_is_counter_clockwise() {
    let out = rotate_expand(&marked_layer(), -90.0);
    assert_eq!((out.width(), out.height()), (2, 4));
    assert_eq!(out.pixel(0, 3), [255, 0, 0, 255]);
}

#[test]
fn diagonal_rotation_expands_canvas() {
    let src = Layer::filled(10, 10, crate::foundation::core::Rgba8::WHITE);
    let out = rotate_expand(&src, 45.0);
    assert_eq!((out.width(), out.height()), (15, 15));
    // Corners of the expanded canvas stay transparent; the middle is solid.
    assert_eq!(out.pixel(0, 0)[3], 0);
    assert_eq!(out.pixel(7, 7), [255, 255, 255, 255]);
}

#[test]
fn rotation_preserves_premultiplied_invariant() {
    let mut src = Layer::transparent(9, 9);
    for y in 2..7 {
        for x in 2..7 {
            src.set_pixel(x, y, [110, 75, 45, 230]);
        }
    }
    let out = rotate_expand(&src, 33.0);
    for px in out.data().chunks_exact(4) {
        assert!(px[0] <= px[3] && px[1] <= px[3] && px[2] <= px[3]);
    }
}
