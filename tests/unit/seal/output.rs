use super::*;
use crate::foundation::core::Rgba8;

fn opts(variant: Variant, background: Background, minted_size: u32) -> OutputOpts {
    OutputOpts {
        variant,
        background,
        minted_size,
    }
}

#[test]
fn engraved_transparent_keeps_size_and_straight_colors() {
    let mut layer = Layer::filled(6, 5, Rgba8::new(200, 100, 50, 255));
    layer.set_pixel(0, 0, [0, 0, 0, 0]);
    let img = finalize(layer, &opts(Variant::Engraved, Background::Transparent, 1024)).unwrap();
    let img = img.as_rgba8().unwrap();
    assert_eq!(img.dimensions(), (6, 5));
    assert_eq!(img.get_pixel(3, 3).0, [200, 100, 50, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
}

#[test]
fn white_background_flattens_and_drops_alpha() {
    let mut layer = Layer::transparent(2, 2);
    layer.set_pixel(1, 0, Rgba8::new(10, 20, 30, 255).premul());
    layer.set_pixel(0, 1, [0, 0, 0, 128]);
    let img = finalize(layer, &opts(Variant::Engraved, Background::White, 1024)).unwrap();
    let img = img.as_rgb8().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [10, 20, 30]);
    assert_eq!(img.get_pixel(0, 1).0, [127, 127, 127]);
}

#[test]
fn minted_downscales_to_the_requested_side() {
    let layer = Layer::filled(16, 16, Rgba8::new(110, 75, 45, 255));
    let img = finalize(layer, &opts(Variant::Minted, Background::Transparent, 4)).unwrap();
    let img = img.as_rgba8().unwrap();
    assert_eq!(img.dimensions(), (4, 4));
    for px in img.pixels() {
        let [r, g, b, a] = px.0;
        assert!(a >= 254);
        assert!(r.abs_diff(110) <= 1 && g.abs_diff(75) <= 1 && b.abs_diff(45) <= 1);
    }
}

#[test]
fn minted_keeps_transparent_regions_colorless() {
    let mut layer = Layer::transparent(16, 16);
    for y in 0..8 {
        for x in 0..16 {
            layer.set_pixel(x, y, Rgba8::new(255, 0, 0, 255).premul());
        }
    }
    let img = finalize(layer, &opts(Variant::Minted, Background::Transparent, 8)).unwrap();
    let img = img.as_rgba8().unwrap();
    assert_eq!(img.get_pixel(3, 7).0, [0, 0, 0, 0]);
    let top = img.get_pixel(3, 0).0;
    assert!(top[3] >= 254);
    assert_eq!(top[1], 0);
}

#[test]
fn minted_at_native_size_is_untouched() {
    let layer = Layer::filled(8, 8, Rgba8::new(1, 2, 3, 255));
    let img = finalize(layer, &opts(Variant::Minted, Background::Transparent, 8)).unwrap();
    assert_eq!(img.as_rgba8().unwrap().get_pixel(7, 7).0, [1, 2, 3, 255]);
}

#[test]
fn zero_minted_size_is_rejected() {
    let err = finalize(
        Layer::transparent(4, 4),
        &opts(Variant::Minted, Background::Transparent, 0),
    )
    .unwrap_err();
    assert!(err.to_string().contains("minted size"));
}

#[test]
fn variants_and_backgrounds_use_lowercase_names() {
    let v: Variant = serde_json::from_str("\"engraved\"").unwrap();
    let b: Background = serde_json::from_str("\"white\"").unwrap();
    assert_eq!((v, b), (Variant::Engraved, Background::White));
    assert_eq!(Variant::default(), Variant::Minted);
}
