/// Result type used across sealstamp.
pub type SealResult<T> = Result<T, SealError>;

/// Error taxonomy for layout, compositing and output.
#[derive(thiserror::Error, Debug)]
pub enum SealError {
    /// Invalid geometry, sizes, or design data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font files that cannot be read or parsed.
    #[error("font error: {0}")]
    Font(String),

    /// Pixel buffers whose size does not match their dimensions.
    #[error("raster error: {0}")]
    Raster(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SealError {
    /// Build a [`SealError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SealError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`SealError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build a [`SealError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
