use crate::foundation::core::{Affine, Point, Vec2};
use crate::foundation::layer::Layer;

/// Rotate a layer clockwise (screen space, y down) by `degrees` about its center.
///
/// The output canvas is expanded to the rotated bounding box so corners never clip, and the
/// source center maps onto the output center. Resampling is bicubic (Catmull-Rom, `a = -0.5`)
/// on premultiplied channels; samples outside the source are transparent.
pub fn rotate_expand(src: &Layer, degrees: f64) -> Layer {
    let turns = degrees.rem_euclid(360.0);
    if turns.abs() < 1e-9 || (360.0 - turns).abs() < 1e-9 {
        return src.clone();
    }

    let (sw, sh) = (f64::from(src.width()), f64::from(src.height()));
    let theta = degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    let half_w = 0.5 * (sw * cos.abs() + sh * sin.abs());
    let half_h = 0.5 * (sw * sin.abs() + sh * cos.abs());
    let out_w = expanded_side(half_w);
    let out_h = expanded_side(half_h);

    let src_c = Vec2::new(sw * 0.5, sh * 0.5);
    let dst_c = Vec2::new(f64::from(out_w) * 0.5, f64::from(out_h) * 0.5);
    let forward = Affine::translate(dst_c) * Affine::rotate(theta) * Affine::translate(-src_c);
    let inverse = forward.inverse();

    let mut out = Layer::transparent(out_w, out_h);
    for y in 0..out_h {
        for x in 0..out_w {
            let p = inverse * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let px = sample_bicubic(src, p.x - 0.5, p.y - 0.5);
            if px[3] != 0 {
                out.set_pixel(i64::from(x), i64::from(y), px);
            }
        }
    }
    out
}

fn expanded_side(half: f64) -> u32 {
    ((2.0 * half - 1e-6).ceil()).max(1.0) as u32
}

fn sample_bicubic(src: &Layer, fx: f64, fy: f64) -> [u8; 4] {
    let x0 = fx.floor();
    let y0 = fy.floor();
    let tx = fx - x0;
    let ty = fy - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let wx = cubic_weights(tx);
    let wy = cubic_weights(ty);

    let mut acc = [0.0f64; 4];
    let mut touched = false;
    for (j, &wyj) in wy.iter().enumerate() {
        let sy = y0 - 1 + j as i64;
        for (i, &wxi) in wx.iter().enumerate() {
            let sx = x0 - 1 + i as i64;
            let px = src.pixel(sx, sy);
            if px[3] == 0 {
                continue;
            }
            touched = true;
            let w = wxi * wyj;
            for c in 0..4 {
                acc[c] += w * f64::from(px[c]);
            }
        }
    }
    if !touched {
        return [0, 0, 0, 0];
    }

    let a = acc[3].round().clamp(0.0, 255.0) as u8;
    let mut out = [0u8; 4];
    out[3] = a;
    for c in 0..3 {
        // Cubic overshoot can break the premultiplied invariant; keep color <= alpha.
        out[c] = (acc[c].round().clamp(0.0, 255.0) as u8).min(a);
    }
    out
}

fn cubic_weights(t: f64) -> [f64; 4] {
    const A: f64 = -0.5;
    let k = |x: f64| {
        let x = x.abs();
        if x <= 1.0 {
            ((A + 2.0) * x - (A + 3.0)) * x * x + 1.0
        } else if x < 2.0 {
            ((A * x - 5.0 * A) * x + 8.0 * A) * x - 4.0 * A
        } else {
            0.0
        }
    };
    [k(1.0 + t), k(t), k(1.0 - t), k(2.0 - t)]
}

#[cfg(test)]
#[path = "../../tests/unit/effects/rotate.rs"]
mod tests;
