use super::*;

#[test]
fn transparent_layer_has_no_coverage() {
    let layer = Layer::transparent(3, 2);
    assert_eq!(layer.data().len(), 3 * 2 * 4);
    assert!(layer.is_fully_transparent());
    assert_eq!(layer.alpha_mask(), vec![0; 6]);
}

#[test]
fn filled_layer_stores_premultiplied_color() {
    let layer = Layer::filled(2, 2, Rgba8::new(255, 0, 0, 128));
    assert_eq!(layer.pixel(1, 1), [128, 0, 0, 128]);
}

#[test]
fn from_premul_rejects_wrong_length() {
    let err = Layer::from_premul(2, 2, vec![0; 15]).unwrap_err();
    assert!(err.to_string().contains("raster error:"));
}

#[test]
fn out_of_bounds_access_is_ignored() {
    let mut layer = Layer::transparent(2, 2);
    layer.set_pixel(-1, 0, [1, 1, 1, 1]);
    layer.set_pixel(2, 0, [1, 1, 1, 1]);
    assert!(layer.is_fully_transparent());
    assert_eq!(layer.pixel(5, 5), [0, 0, 0, 0]);
}

#[test]
fn size_mismatch_is_a_validation_error() {
    let a = Layer::transparent(2, 2);
    let b = Layer::transparent(2, 3);
    let err = a.ensure_same_size(&b, "test").unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}
