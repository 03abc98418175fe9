use crate::foundation::core::Rgba8;
use crate::foundation::error::{SealError, SealResult};
use crate::foundation::layer::Layer;
use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> SealResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(SealError::raster(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Alpha-composite a same-sized layer over `dst`.
pub fn composite_layer(dst: &mut Layer, src: &Layer) -> SealResult<()> {
    dst.ensure_same_size(src, "composite_layer")?;
    over_in_place(dst.data_mut(), src.data(), 1.0)
}

/// Alpha-composite `src` over `dst` with its top-left corner at `(x, y)`, clipped to `dst`.
///
/// Transparent source pixels leave `dst` untouched, which is what makes this usable as an
/// alpha-masked paste for rotated glyph bitmaps.
pub fn composite_at(dst: &mut Layer, src: &Layer, x: i32, y: i32) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    let (sw, sh) = (i64::from(src.width()), i64::from(src.height()));
    let (x, y) = (i64::from(x), i64::from(y));

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + sw).min(dw);
    let y1 = (y + sh).min(dh);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let span = ((x1 - x0) * 4) as usize;
    let dst_stride = (dw * 4) as usize;
    let src_stride = (sw * 4) as usize;
    let src_data = src.data();
    let dst_data = dst.data_mut();
    for row in y0..y1 {
        let d_off = (row as usize) * dst_stride + (x0 as usize) * 4;
        let s_off = ((row - y) as usize) * src_stride + ((x0 - x) as usize) * 4;
        let d_row = &mut dst_data[d_off..d_off + span];
        let s_row = &src_data[s_off..s_off + span];
        for (d, s) in d_row.chunks_exact_mut(4).zip(s_row.chunks_exact(4)) {
            if s[3] == 0 {
                continue;
            }
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], 1.0);
            d.copy_from_slice(&out);
        }
    }
}

/// Translate a layer by `(dx, dy)`; pixels shifted in from outside are transparent.
pub fn shifted(src: &Layer, dx: i32, dy: i32) -> Layer {
    let mut out = Layer::transparent(src.width(), src.height());
    let w = i64::from(src.width());
    let h = i64::from(src.height());
    let (dx, dy) = (i64::from(dx), i64::from(dy));
    for y in 0..h {
        let sy = y - dy;
        if sy < 0 || sy >= h {
            continue;
        }
        for x in 0..w {
            let sx = x - dx;
            if sx < 0 || sx >= w {
                continue;
            }
            out.set_pixel(x, y, src.pixel(sx, sy));
        }
    }
    out
}

/// A layer of uniform `color` whose per-pixel opacity is taken from `mask`.
pub fn fill_through_mask(width: u32, height: u32, color: Rgba8, mask: &[u8]) -> SealResult<Layer> {
    if mask.len() != (width as usize) * (height as usize) {
        return Err(SealError::raster(
            "fill_through_mask expects a mask matching width*height",
        ));
    }
    let px = color.premul();
    let mut data = Vec::with_capacity(mask.len() * 4);
    for &m in mask {
        let m = u16::from(m);
        data.extend(px.iter().map(|&c| mul_div255_u8(u16::from(c), m)));
    }
    Layer::from_premul(width, height, data)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
