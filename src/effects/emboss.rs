//! Global emboss: a blurred shadow and a sharper highlight, offset in opposite screen-space
//! directions, composited under the crisp glyph layer.
//!
//! The offsets are applied to the aggregate glyph layer rather than per glyph, so every glyph on
//! the seal reads as lit from the same top-left light source whatever its own rotation.

use crate::effects::blur::blur_mask;
use crate::effects::composite::{composite_layer, fill_through_mask, shifted};
use crate::foundation::core::Rgba8;
use crate::foundation::error::SealResult;
use crate::foundation::layer::Layer;

/// Parameters of the two derived lighting layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmbossParams {
    /// Gaussian sigma of the shadow mask, in pixels.
    pub shadow_sigma: f32,
    /// Gaussian sigma of the highlight mask, in pixels. Sharper than the shadow.
    pub highlight_sigma: f32,
    pub shadow_fill: Rgba8,
    pub highlight_fill: Rgba8,
    /// Diagonal offset; the shadow moves by `-offset` on both axes, the highlight by `+offset`.
    pub offset: i32,
}

/// The "minted" look of the seal. Fixed for visual-regression stability.
pub const MINTED: EmbossParams = EmbossParams {
    shadow_sigma: 1.0,
    highlight_sigma: 0.5,
    shadow_fill: Rgba8::new(0, 0, 0, 220),
    highlight_fill: Rgba8::new(255, 255, 255, 255),
    offset: 2,
};

/// Shadow and highlight layers derived from a glyph layer, already offset.
#[derive(Clone, Debug)]
pub struct EmbossLayers {
    pub shadow: Layer,
    pub highlight: Layer,
}

/// Derive the offset shadow/highlight layers from the glyph coverage of `glyphs`.
///
/// Only the alpha channel of `glyphs` is read.
pub fn emboss_layers(glyphs: &Layer, params: &EmbossParams) -> SealResult<EmbossLayers> {
    let (w, h) = (glyphs.width(), glyphs.height());
    let mask = glyphs.alpha_mask();

    let shadow_mask = blur_mask(&mask, w, h, params.shadow_sigma)?;
    let shadow = fill_through_mask(w, h, params.shadow_fill, &shadow_mask)?;

    let highlight_mask = blur_mask(&mask, w, h, params.highlight_sigma)?;
    let highlight = fill_through_mask(w, h, params.highlight_fill, &highlight_mask)?;

    Ok(EmbossLayers {
        shadow: shifted(&shadow, -params.offset, -params.offset),
        highlight: shifted(&highlight, params.offset, params.offset),
    })
}

/// Emboss `glyphs` onto `base`: shadow, then highlight, then the untouched glyph layer.
///
/// `glyphs` is consumed; running the emboss twice over the same glyphs would double-stamp the
/// lighting layers.
#[tracing::instrument(skip_all, fields(width = base.width(), height = base.height()))]
pub fn apply_emboss(glyphs: Layer, base: &mut Layer) -> SealResult<()> {
    base.ensure_same_size(&glyphs, "apply_emboss")?;
    if glyphs.is_fully_transparent() {
        tracing::debug!("emboss layer is empty, nothing to composite");
        return Ok(());
    }

    let EmbossLayers { shadow, highlight } = emboss_layers(&glyphs, &MINTED)?;
    composite_layer(base, &shadow)?;
    composite_layer(base, &highlight)?;
    composite_layer(base, &glyphs)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/emboss.rs"]
mod tests;
