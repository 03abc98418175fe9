use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(255, 128), 128);
}

#[test]
fn premul_scales_color_by_alpha() {
    assert_eq!(premul_rgba8(255, 255, 255, 255), [255, 255, 255, 255]);
    assert_eq!(premul_rgba8(200, 100, 50, 0), [0, 0, 0, 0]);
    assert_eq!(premul_rgba8(255, 0, 0, 128), [128, 0, 0, 128]);
}

#[test]
fn unpremultiply_restores_opaque_and_clears_transparent() {
    let mut px = vec![10u8, 20, 30, 255, 9, 9, 9, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![10, 20, 30, 255, 0, 0, 0, 0]);
}

#[test]
fn premultiply_roundtrip_is_close_for_mid_alpha() {
    let mut px = vec![110u8, 75, 45, 230];
    premultiply_rgba8_in_place(&mut px);
    unpremultiply_rgba8_in_place(&mut px);
    for (got, want) in px.iter().zip([110u8, 75, 45, 230]) {
        assert!((i16::from(*got) - i16::from(want)).abs() <= 1);
    }
}
