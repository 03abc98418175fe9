use std::path::Path;

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{SealError, SealResult};

/// Pixel sizes of the fonts each seal field is set in.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontSizes {
    /// Date along the outer rim.
    pub rim: f32,
    /// Certificate id.
    pub id: f32,
    /// The small "by" line.
    pub by: f32,
    /// Brand line.
    pub brand: f32,
    /// Hash, URL and holder microtext.
    pub micro: f32,
    /// Registry number.
    pub registry: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            rim: 128.0,
            id: 48.0,
            by: 24.0,
            brand: 40.0,
            micro: 18.0,
            registry: 28.0,
        }
    }
}

impl FontSizes {
    fn all(&self) -> [f32; 6] {
        [
            self.rim,
            self.id,
            self.by,
            self.brand,
            self.micro,
            self.registry,
        ]
    }
}

/// Fixed geometry and styling of one seal template version.
///
/// Defaults describe the 2048x2048 ("2x") template; a JSON file may override any field.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SealDesign {
    pub center: Point,
    /// Outer rim carrying the date.
    pub radius_rim: f64,
    /// Inner top arc carrying the hash.
    pub radius_inner_top: f64,
    /// Inner bottom arc carrying the URL and holder.
    pub radius_inner_bottom: f64,
    /// Color of embossed text.
    pub text_color: Rgba8,
    /// Color of flat microtext.
    pub micro_color: Rgba8,
    pub font_sizes: FontSizes,
    /// Vertical centers of the straight lines.
    pub cert_id_y: f64,
    pub by_y: f64,
    pub brand_y: f64,
    pub registry_y: f64,
    /// Where the URL starts on the inner bottom arc, degrees.
    pub url_start_deg: f64,
    /// Where the holder line ends on the inner bottom arc, degrees.
    pub holder_end_deg: f64,
    pub by_text: String,
    pub brand_text: String,
    /// Output side length of the downscaled ("minted") variant.
    pub minted_size: u32,
}

impl Default for SealDesign {
    fn default() -> Self {
        Self {
            center: Point::new(1024.0, 1024.0),
            radius_rim: 744.0,
            radius_inner_top: 510.0,
            radius_inner_bottom: 535.0,
            text_color: Rgba8::new(110, 75, 45, 230),
            micro_color: Rgba8::new(60, 60, 60, 240),
            font_sizes: FontSizes::default(),
            cert_id_y: 770.0,
            by_y: 1200.0,
            brand_y: 1260.0,
            registry_y: 1330.0,
            url_start_deg: 150.0,
            holder_end_deg: 45.0,
            by_text: "by".to_string(),
            brand_text: "PROOF OF THOUGHT\u{2122}".to_string(),
            minted_size: 1024,
        }
    }
}

impl SealDesign {
    /// Load a design from JSON; missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> SealResult<Self> {
        let design: Self = serde_json::from_str(s)
            .map_err(|e| SealError::serde(format!("invalid seal design: {e}")))?;
        design.validate()?;
        Ok(design)
    }

    pub fn load(path: impl AsRef<Path>) -> SealResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            SealError::validation(format!("failed to read design '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> SealResult<()> {
        for (name, r) in [
            ("radius_rim", self.radius_rim),
            ("radius_inner_top", self.radius_inner_top),
            ("radius_inner_bottom", self.radius_inner_bottom),
        ] {
            if !r.is_finite() || r <= 0.0 {
                return Err(SealError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if self.font_sizes.all().iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(SealError::validation("font sizes must be finite and > 0"));
        }
        if self.minted_size == 0 {
            return Err(SealError::validation("minted_size must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seal/design.rs"]
mod tests;
