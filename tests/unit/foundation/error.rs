use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SealError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SealError::font("x").to_string().contains("font error:"));
    assert!(SealError::raster("x").to_string().contains("raster error:"));
    assert!(
        SealError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SealError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
