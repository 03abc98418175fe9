use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{SealError, SealResult};

/// Premultiplied RGBA8 raster, row-major, tightly packed.
///
/// Every canvas in the pipeline is a `Layer`: the seal template, the two scratch layers glyphs
/// are stamped onto, and the transient per-glyph bitmaps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Layer {
    /// Fully transparent layer.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; (width as usize) * (height as usize) * 4],
        }
    }

    /// Layer uniformly filled with `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        let px = color.premul();
        Self {
            width,
            height,
            data: px.repeat((width as usize) * (height as usize)),
        }
    }

    /// Wrap an existing premultiplied buffer.
    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> SealResult<Self> {
        let expected = Canvas { width, height }.rgba_len()?;
        if data.len() != expected {
            return Err(SealError::raster(format!(
                "layer buffer is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Premultiplied pixel at `(x, y)`; out-of-bounds reads are transparent.
    pub fn pixel(&self, x: i64, y: i64) -> [u8; 4] {
        match self.index(x, y) {
            Some(i) => [
                self.data[i],
                self.data[i + 1],
                self.data[i + 2],
                self.data[i + 3],
            ],
            None => [0, 0, 0, 0],
        }
    }

    /// Write a premultiplied pixel; out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: i64, y: i64, px: [u8; 4]) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&px);
        }
    }

    /// Alpha channel as a single-channel coverage mask.
    pub fn alpha_mask(&self) -> Vec<u8> {
        self.data.chunks_exact(4).map(|px| px[3]).collect()
    }

    pub fn is_fully_transparent(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    pub(crate) fn ensure_same_size(&self, other: &Layer, what: &str) -> SealResult<()> {
        if self.width != other.width || self.height != other.height {
            return Err(SealError::validation(format!(
                "{what}: layer sizes differ ({}x{} vs {}x{})",
                self.width, self.height, other.width, other.height
            )));
        }
        Ok(())
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/layer.rs"]
mod tests;
