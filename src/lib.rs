//! Sealstamp stamps dynamic certificate text onto a circular seal template.
//!
//! Text is placed along circular arcs (one rotated bitmap per glyph) or in straight centered
//! lines, accumulated on two scratch layers and composited once:
//!
//! - the embossed layer gets a blurred drop shadow and highlight before its glyphs land on top
//! - the flat layer is laid over the result as-is
//!
//! [`stamp_seal`] runs the whole template pipeline; [`layout_arc`], [`layout_horizontal_centered`]
//! and [`apply_emboss`] are the building blocks.
#![forbid(unsafe_code)]

mod foundation;

/// Template decoding and PNG output.
pub mod assets;
/// Raster effects: blur, compositing, rotation, emboss.
pub mod effects;
/// Seal design, dynamic fields, and the stamping pipeline.
pub mod seal;
/// Font abstraction and text layout.
pub mod text;

pub use crate::foundation::core::{Affine, Canvas, Point, Rgba8, Vec2};
pub use crate::foundation::error::{SealError, SealResult};
pub use crate::foundation::layer::Layer;

pub use crate::assets::decode::{decode_template, load_template, save_png};
pub use crate::effects::emboss::apply_emboss;
pub use crate::seal::compose::{SealFonts, SealLayers, stamp_seal};
pub use crate::seal::design::{FontSizes, SealDesign};
pub use crate::seal::fields::{SealText, format_seal_date};
pub use crate::seal::output::{Background, OutputOpts, Variant, finalize};
pub use crate::text::arc::{ArcDirection, ArcSpec, layout_arc};
pub use crate::text::font::{GlyphFont, GlyphPaint, LineMetrics, PositionedGlyph};
pub use crate::text::horizontal::layout_horizontal_centered;
pub use crate::text::outline::OutlineFont;
