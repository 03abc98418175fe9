//! Two-phase seal compositing: accumulate glyphs into two named scratch layers, then finish
//! once (emboss the embossed layer onto the template, lay the flat layer over it).

use crate::effects::composite::composite_layer;
use crate::effects::emboss::apply_emboss;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::SealResult;
use crate::foundation::layer::Layer;
use crate::seal::design::{FontSizes, SealDesign};
use crate::seal::fields::SealText;
use crate::text::arc::{ArcSpec, arc_span, layout_arc};
use crate::text::font::{GlyphFont, measure_char};
use crate::text::horizontal::layout_horizontal_centered;

/// Scratch layers glyphs are stamped onto before the single finishing pass.
#[derive(Clone, Debug)]
pub struct SealLayers {
    embossed: Layer,
    flat: Layer,
}

impl SealLayers {
    /// Two fully transparent layers the size of the template.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            embossed: Layer::transparent(canvas.width, canvas.height),
            flat: Layer::transparent(canvas.width, canvas.height),
        }
    }

    /// Target for glyphs that receive the emboss.
    pub fn embossed_mut(&mut self) -> &mut Layer {
        &mut self.embossed
    }

    /// Target for plain glyphs composited without emboss.
    pub fn flat_mut(&mut self) -> &mut Layer {
        &mut self.flat
    }

    /// Emboss the embossed layer onto `base`, then composite the flat layer over it.
    ///
    /// Consumes the layers, so each is composited exactly once.
    pub fn finish(self, mut base: Layer) -> SealResult<Layer> {
        apply_emboss(self.embossed, &mut base)?;
        composite_layer(&mut base, &self.flat)?;
        Ok(base)
    }
}

/// One font per seal field size.
#[derive(Clone, Debug)]
pub struct SealFonts<F> {
    pub rim: F,
    pub id: F,
    pub by: F,
    pub brand: F,
    pub micro: F,
    pub registry: F,
}

impl<F: GlyphFont> SealFonts<F> {
    /// Build each font from its pixel size.
    pub fn build(sizes: &FontSizes, mut make: impl FnMut(f32) -> SealResult<F>) -> SealResult<Self> {
        Ok(Self {
            rim: make(sizes.rim)?,
            id: make(sizes.id)?,
            by: make(sizes.by)?,
            brand: make(sizes.brand)?,
            micro: make(sizes.micro)?,
            registry: make(sizes.registry)?,
        })
    }
}

/// Stamp every present field of `text` onto the template `base`.
#[tracing::instrument(skip_all, fields(width = base.width(), height = base.height()))]
pub fn stamp_seal<F: GlyphFont>(
    base: Layer,
    text: &SealText,
    design: &SealDesign,
    fonts: &SealFonts<F>,
) -> SealResult<Layer> {
    design.validate()?;
    let mut layers = SealLayers::new(base.canvas());
    let c = design.center;
    let at = |y: f64| Point::new(c.x, y);

    // Embossed: date rim, certificate id, brand.
    if let Some(date) = present(&text.date) {
        tracing::info!(text = date, "stamping top rim");
        layout_arc(
            layers.embossed_mut(),
            date,
            &ArcSpec::top(c, design.radius_rim),
            &fonts.rim,
            design.text_color,
        )?;
    }
    if let Some(cert_id) = present(&text.cert_id) {
        tracing::info!(text = cert_id, "stamping certificate id");
        layout_horizontal_centered(
            layers.embossed_mut(),
            cert_id,
            at(design.cert_id_y),
            &fonts.id,
            design.text_color,
        )?;
    }
    layout_horizontal_centered(
        layers.embossed_mut(),
        &design.by_text,
        at(design.by_y),
        &fonts.by,
        design.text_color,
    )?;
    layout_horizontal_centered(
        layers.embossed_mut(),
        &design.brand_text,
        at(design.brand_y),
        &fonts.brand,
        design.text_color,
    )?;

    // Flat microtext.
    if let Some(registry_no) = present(&text.registry_no) {
        tracing::info!(text = registry_no, "stamping registry number");
        layout_horizontal_centered(
            layers.flat_mut(),
            registry_no,
            at(design.registry_y),
            &fonts.registry,
            design.micro_color,
        )?;
    }
    if let Some(hash) = present(&text.hash) {
        tracing::info!(text = hash, "stamping hash");
        layout_arc(
            layers.flat_mut(),
            hash,
            &ArcSpec::top(c, design.radius_inner_top),
            &fonts.micro,
            design.micro_color,
        )?;
    }
    if let Some(url) = present(&text.verify_url) {
        tracing::info!(text = url, "stamping verification url");
        let spec = ArcSpec::bottom(c, design.radius_inner_bottom)
            .starting_at(design.url_start_deg.to_radians());
        layout_arc(layers.flat_mut(), url, &spec, &fonts.micro, design.micro_color)?;
    }
    if let Some(holder) = text.holder_line() {
        tracing::info!(text = holder.as_str(), "stamping holder");
        let spec = ArcSpec::bottom(c, design.radius_inner_bottom);
        let spec = spec.starting_at(end_anchored_start(
            &holder,
            &spec,
            design.holder_end_deg.to_radians(),
            &fonts.micro,
        ));
        layout_arc(layers.flat_mut(), &holder, &spec, &fonts.micro, design.micro_color)?;
    }

    layers.finish(base)
}

/// Start angle that makes a bottom arc's text end exactly at `end_angle`.
pub fn end_anchored_start<F: GlyphFont + ?Sized>(
    text: &str,
    spec: &ArcSpec,
    end_angle: f64,
    font: &F,
) -> f64 {
    let widths: Vec<f64> = text
        .chars()
        .map(|ch| f64::from(measure_char(font, ch)))
        .collect();
    end_angle + arc_span(&widths, spec.radius, spec.kerning)
}

fn present(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/seal/compose.rs"]
mod tests;
