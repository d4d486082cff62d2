//! Per-channel Sobel gradient magnitude.
//!
//! Out-of-image neighbours are dropped from the sums instead of being clamped
//! or mirrored, so border pixels see fewer taps and report weaker gradients
//! than interior ones.
//!
//! Magnitude is the L1 combination `|gx| + |gy|`, computed for all four
//! channels independently.

use lp_core::{Image, ImageView, Point2i, Rgba};

/// `(dx, dy, weight)` taps of the horizontal Sobel kernel. Zero-weight taps
/// are left out.
///
/// Taps come in mirrored pairs of opposite weight, so the running sum returns
/// to exactly zero after each pair on a flat neighbourhood.
pub const SOBEL_X: [(i32, i32, f32); 6] = [
    (-1, -1, -1.0),
    (1, -1, 1.0),
    (-1, 0, -2.0),
    (1, 0, 2.0),
    (-1, 1, -1.0),
    (1, 1, 1.0),
];

/// Transpose of [`SOBEL_X`], paired the same way.
pub const SOBEL_Y: [(i32, i32, f32); 6] = [
    (-1, -1, -1.0),
    (-1, 1, 1.0),
    (0, -1, -2.0),
    (0, 1, 2.0),
    (1, -1, -1.0),
    (1, 1, 1.0),
];

pub fn gradient_l1(src: &ImageView<'_, Rgba>) -> Image<Rgba> {
    let mut dst = Image::new_fill(src.width(), src.height(), Rgba::default());
    gradient_l1_into(src, &mut dst);
    dst
}

/// Writes the gradient field into `dst`, reallocating it when its shape does
/// not match `src`.
pub fn gradient_l1_into(src: &ImageView<'_, Rgba>, dst: &mut Image<Rgba>) {
    let (w, h) = (src.width(), src.height());
    if dst.width() != w || dst.height() != h {
        *dst = Image::new_fill(w, h, Rgba::default());
    }

    let out = dst.data_mut();
    for y in 0..h {
        for x in 0..w {
            let p = Point2i::new(x as i32, y as i32);
            let gx = convolve_at(src, p, &SOBEL_X);
            let gy = convolve_at(src, p, &SOBEL_Y);
            out[y * w + x] = gx.abs() + gy.abs();
        }
    }
}

fn convolve_at(src: &ImageView<'_, Rgba>, p: Point2i, taps: &[(i32, i32, f32)]) -> Rgba {
    let mut acc = Rgba::default();
    for &(dx, dy, weight) in taps {
        if let Some(&px) = src.get_point(p + Point2i::new(dx, dy)) {
            acc = acc + px * weight;
        }
    }
    acc
}
