use crate::foundation::error::{SealError, SealResult};

pub use kurbo::{Affine, Point, Vec2};

/// Raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create validated non-empty dimensions.
    pub fn new(width: u32, height: u32) -> SealResult<Self> {
        if width == 0 || height == 0 {
            return Err(SealError::validation("canvas width and height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Byte length of a tightly packed RGBA8 buffer with these dimensions.
    pub fn rgba_len(self) -> SealResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| SealError::raster("rgba buffer size overflow"))
    }
}

/// Straight (non-premultiplied) RGBA8 color.
///
/// Serialized as a `[r, g, b, a]` array so design files stay compact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Premultiplied RGBA8 bytes for this color.
    pub fn premul(self) -> [u8; 4] {
        crate::foundation::math::premul_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}
