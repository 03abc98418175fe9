use super::*;

#[test]
fn defaults_describe_the_2x_template() {
    let d = SealDesign::default();
    assert_eq!(d.center, Point::new(1024.0, 1024.0));
    assert_eq!(
        (d.radius_rim, d.radius_inner_top, d.radius_inner_bottom),
        (744.0, 510.0, 535.0)
    );
    assert_eq!(d.text_color, Rgba8::new(110, 75, 45, 230));
    assert_eq!(d.micro_color, Rgba8::new(60, 60, 60, 240));
    assert_eq!(d.font_sizes.rim, 128.0);
    assert_eq!(d.font_sizes.micro, 18.0);
    assert!(d.validate().is_ok());
}

#[test]
fn json_overrides_only_named_fields() {
    let d = SealDesign::from_json_str(
        r#"{ "radius_rim": 300.0, "text_color": [1, 2, 3, 4], "font_sizes": { "rim": 64.0 } }"#,
    )
    .unwrap();
    assert_eq!(d.radius_rim, 300.0);
    assert_eq!(d.text_color, Rgba8::new(1, 2, 3, 4));
    assert_eq!(d.font_sizes.rim, 64.0);
    assert_eq!(d.font_sizes.id, 48.0);
    assert_eq!(d.radius_inner_top, 510.0);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SealDesign::from_json_str(r#"{ "radius": 3.0 }"#).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn invalid_geometry_is_rejected() {
    let err = SealDesign::from_json_str(r#"{ "radius_inner_top": -1.0 }"#).unwrap_err();
    assert!(err.to_string().contains("radius_inner_top"));

    let err = SealDesign::from_json_str(r#"{ "font_sizes": { "micro": 0.0 } }"#).unwrap_err();
    assert!(err.to_string().contains("font sizes"));
}

#[test]
fn design_roundtrips_through_json() {
    let d = SealDesign::default();
    let s = serde_json::to_string(&d).unwrap();
    assert_eq!(SealDesign::from_json_str(&s).unwrap(), d);
}
