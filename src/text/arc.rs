//! Glyph placement along circular arcs.
//!
//! Angles are in radians, screen space (y down): `0` points right, `+pi/2` points down. A `top`
//! arc is centered on `-pi/2` (12 o'clock) and sweeps clockwise; a `bottom` arc is centered on
//! `+pi/2` (6 o'clock) and sweeps counter-clockwise so the text reads left to right, upright.

use std::f64::consts::FRAC_PI_2;

use crate::effects::composite::composite_at;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{SealError, SealResult};
use crate::foundation::layer::Layer;
use crate::foundation::math::degrees;
use crate::text::font::{GlyphFont, measure_char};
use crate::text::glyph::render_glyph;

/// Angular gap added between consecutive glyphs, in radians.
pub const ARC_KERNING_RAD: f64 = 0.0014;

/// Reading direction of an arc.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcDirection {
    /// Clockwise along the top; glyph tops point away from the center.
    Top,
    /// Left to right along the underside; glyphs stay upright.
    Bottom,
}

impl ArcDirection {
    fn nominal_center(self) -> f64 {
        match self {
            Self::Top => -FRAC_PI_2,
            Self::Bottom => FRAC_PI_2,
        }
    }

    /// `+1` when the angle grows as characters advance, `-1` otherwise.
    fn sweep(self) -> f64 {
        match self {
            Self::Top => 1.0,
            Self::Bottom => -1.0,
        }
    }

    fn rotation_offset_deg(self) -> f64 {
        match self {
            Self::Top => 90.0,
            Self::Bottom => -90.0,
        }
    }
}

/// Where and how a string is laid out on a circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    pub center: Point,
    pub radius: f64,
    pub direction: ArcDirection,
    /// Angle of the leading edge of the first glyph. `None` centers the text on the
    /// direction's nominal angle.
    pub start_angle: Option<f64>,
    /// Angular gap between glyphs.
    pub kerning: f64,
}

impl ArcSpec {
    pub fn new(center: Point, radius: f64, direction: ArcDirection) -> Self {
        Self {
            center,
            radius,
            direction,
            start_angle: None,
            kerning: ARC_KERNING_RAD,
        }
    }

    pub fn top(center: Point, radius: f64) -> Self {
        Self::new(center, radius, ArcDirection::Top)
    }

    pub fn bottom(center: Point, radius: f64) -> Self {
        Self::new(center, radius, ArcDirection::Bottom)
    }

    /// Begin at `angle` instead of centering.
    pub fn starting_at(mut self, angle: f64) -> Self {
        self.start_angle = Some(angle);
        self
    }

    pub fn with_kerning(mut self, kerning: f64) -> Self {
        self.kerning = kerning;
        self
    }

    pub fn validate(&self) -> SealResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SealError::validation("arc radius must be finite and > 0"));
        }
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(SealError::validation("arc center must be finite"));
        }
        if !self.kerning.is_finite() {
            return Err(SealError::validation("arc kerning must be finite"));
        }
        if self.start_angle.is_some_and(|a| !a.is_finite()) {
            return Err(SealError::validation("arc start angle must be finite"));
        }
        Ok(())
    }
}

/// Derived placement of one glyph on the arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPlacement {
    pub ch: char,
    /// Measured linear width in pixels.
    pub width: f64,
    /// Angle of the glyph's midpoint along the arc.
    pub mid_angle: f64,
    /// Arc point at `mid_angle`; the glyph's baseline middle lands here.
    pub position: Point,
    /// Clockwise rotation applied to the upright glyph, in degrees.
    pub rotation_deg: f64,
}

/// Angular span covered by glyphs of the given linear widths: their widths over the radius
/// plus one kerning gap between each neighbouring pair.
pub fn arc_span(widths: &[f64], radius: f64, kerning: f64) -> f64 {
    let linear: f64 = widths.iter().sum();
    let gaps = widths.len().saturating_sub(1) as f64;
    linear / radius + gaps * kerning
}

/// Place already-measured glyphs on the arc.
pub fn plan_arc_measured(glyphs: &[(char, f64)], spec: &ArcSpec) -> SealResult<Vec<GlyphPlacement>> {
    spec.validate()?;
    if glyphs.is_empty() {
        return Ok(Vec::new());
    }

    let r = spec.radius;
    let sweep = spec.direction.sweep();
    let widths: Vec<f64> = glyphs.iter().map(|&(_, w)| w).collect();
    let span = arc_span(&widths, r, spec.kerning);
    let start = spec
        .start_angle
        .unwrap_or_else(|| spec.direction.nominal_center() - sweep * span / 2.0);

    let mut current = start;
    let mut out = Vec::with_capacity(glyphs.len());
    for &(ch, w) in glyphs {
        let half = (w / r) / 2.0;
        let mid_angle = current + sweep * half;
        let (sin, cos) = mid_angle.sin_cos();
        out.push(GlyphPlacement {
            ch,
            width: w,
            mid_angle,
            position: Point::new(spec.center.x + r * cos, spec.center.y + r * sin),
            rotation_deg: degrees(mid_angle) + spec.direction.rotation_offset_deg(),
        });
        current += sweep * (w / r + spec.kerning);
    }
    Ok(out)
}

/// Measure `text` with `font` and place it on the arc.
pub fn plan_arc<F: GlyphFont + ?Sized>(
    text: &str,
    spec: &ArcSpec,
    font: &F,
) -> SealResult<Vec<GlyphPlacement>> {
    let measured: Vec<(char, f64)> = text
        .chars()
        .map(|ch| (ch, f64::from(measure_char(font, ch))))
        .collect();
    plan_arc_measured(&measured, spec)
}

/// Paint `text` along the arc onto `target`.
///
/// Each glyph is rendered into its own bitmap, rotated to its placement and pasted centered on
/// its arc point through its own alpha. Strings longer than the circle allows overlap; that is
/// not detected.
pub fn layout_arc<F: GlyphFont + ?Sized>(
    target: &mut Layer,
    text: &str,
    spec: &ArcSpec,
    font: &F,
    color: Rgba8,
) -> SealResult<()> {
    let placements = plan_arc(text, spec, font)?;
    for p in &placements {
        let bitmap = render_glyph(font, p.ch, p.width as f32, color, p.rotation_deg)?;
        let x = (p.position.x - f64::from(bitmap.width()) / 2.0) as i32;
        let y = (p.position.y - f64::from(bitmap.height()) / 2.0) as i32;
        composite_at(target, &bitmap, x, y);
    }
    tracing::debug!(glyphs = placements.len(), radius = spec.radius, "arc laid out");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/text/arc.rs"]
mod tests;
