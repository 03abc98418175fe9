use image::imageops::FilterType;

use crate::foundation::error::{SealError, SealResult};
use crate::foundation::layer::Layer;
use crate::foundation::math::{mul_div255_u8, unpremultiply_rgba8_in_place};

/// Output resolution of a stamped seal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Downscaled to the design's minted size.
    #[default]
    Minted,
    /// Native template resolution.
    Engraved,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    #[default]
    Transparent,
    /// Flattened onto opaque white, alpha dropped.
    White,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputOpts {
    pub variant: Variant,
    pub background: Background,
    /// Side length used by [`Variant::Minted`].
    pub minted_size: u32,
}

/// Turn a stamped premultiplied layer into the final straight-alpha (or opaque) image.
pub fn finalize(layer: Layer, opts: &OutputOpts) -> SealResult<image::DynamicImage> {
    let layer = match opts.variant {
        Variant::Engraved => layer,
        Variant::Minted => resize_premul(layer, opts.minted_size)?,
    };
    let (w, h) = (layer.width(), layer.height());

    match opts.background {
        Background::White => {
            let mut rgb = Vec::with_capacity((w as usize) * (h as usize) * 3);
            for px in layer.data().chunks_exact(4) {
                let inv = 255 - u16::from(px[3]);
                for &c in &px[0..3] {
                    rgb.push(c.saturating_add(mul_div255_u8(255, inv)));
                }
            }
            image::RgbImage::from_raw(w, h, rgb)
                .map(image::DynamicImage::ImageRgb8)
                .ok_or_else(|| SealError::raster("rgb buffer does not match dimensions"))
        }
        Background::Transparent => {
            let mut rgba = layer.into_raw();
            unpremultiply_rgba8_in_place(&mut rgba);
            image::RgbaImage::from_raw(w, h, rgba)
                .map(image::DynamicImage::ImageRgba8)
                .ok_or_else(|| SealError::raster("rgba buffer does not match dimensions"))
        }
    }
}

/// Lanczos3 resize to `side` x `side`, filtering premultiplied samples so transparent pixels do
/// not bleed color into glyph edges.
fn resize_premul(layer: Layer, side: u32) -> SealResult<Layer> {
    if side == 0 {
        return Err(SealError::validation("minted size must be > 0"));
    }
    if layer.width() == side && layer.height() == side {
        return Ok(layer);
    }
    let (w, h) = (layer.width(), layer.height());
    let src = image::RgbaImage::from_raw(w, h, layer.into_raw())
        .ok_or_else(|| SealError::raster("rgba buffer does not match dimensions"))?;
    let resized = image::imageops::resize(&src, side, side, FilterType::Lanczos3);
    tracing::debug!(from_w = w, from_h = h, side, "minted resize");

    let mut data = resized.into_raw();
    // Lanczos ringing can push a channel past its alpha.
    for px in data.chunks_exact_mut(4) {
        let a = px[3];
        for c in &mut px[0..3] {
            *c = (*c).min(a);
        }
    }
    Layer::from_premul(side, side, data)
}

#[cfg(test)]
#[path = "../../tests/unit/seal/output.rs"]
mod tests;
