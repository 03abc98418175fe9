use std::path::Path;

use anyhow::Context;

use crate::foundation::error::SealResult;
use crate::foundation::layer::Layer;
use crate::foundation::math::premultiply_rgba8_in_place;

/// Decode an encoded template image into a premultiplied layer.
pub fn decode_template(bytes: &[u8]) -> SealResult<Layer> {
    let dyn_img = image::load_from_memory(bytes).context("decode template from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);
    Layer::from_premul(width, height, rgba8_premul)
}

pub fn load_template(path: impl AsRef<Path>) -> SealResult<Layer> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("read template '{}'", path.display()))?;
    let layer = decode_template(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        width = layer.width(),
        height = layer.height(),
        "template loaded"
    );
    Ok(layer)
}

/// Write `img` as PNG, creating parent directories as needed.
pub fn save_png(img: &image::DynamicImage, path: impl AsRef<Path>) -> SealResult<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output directory '{}'", dir.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
