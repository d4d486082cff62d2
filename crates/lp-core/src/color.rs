use core::ops::{Add, Mul};

use crate::{Error, Image, ImageView};

/// Linear RGBA pixel with unconstrained `f32` channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v, 1.0)
    }

    pub fn abs(self) -> Self {
        Self::new(self.r.abs(), self.g.abs(), self.b.abs(), self.a.abs())
    }

    /// True when each of R, G and B is at least `t`. Alpha is ignored.
    pub fn rgb_all_ge(self, t: f32) -> bool {
        self.r >= t && self.g >= t && self.b >= t
    }

    pub fn clamp01(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }
}

impl Add for Rgba {
    type Output = Rgba;

    fn add(self, rhs: Rgba) -> Self::Output {
        Rgba::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl Mul<f32> for Rgba {
    type Output = Rgba;

    fn mul(self, rhs: f32) -> Self::Output {
        Rgba::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

/// Builds a normalized `[0, 1]` image from interleaved 8-bit RGBA bytes.
pub fn rgba8_to_f32(width: usize, height: usize, bytes: &[u8]) -> Result<Image<Rgba>, Error> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: bytes.len(),
        })?;
    if bytes.len() != expected {
        return Err(Error::SizeMismatch {
            expected,
            actual: bytes.len(),
        });
    }

    let data = bytes
        .chunks_exact(4)
        .map(|px| {
            Rgba::new(
                px[0] as f32 / 255.0,
                px[1] as f32 / 255.0,
                px[2] as f32 / 255.0,
                px[3] as f32 / 255.0,
            )
        })
        .collect();

    Image::from_vec(width, height, data)
}

/// Clamps every channel to `[0, 1]` and quantizes to interleaved RGBA bytes.
pub fn to_rgba8(img: &ImageView<'_, Rgba>) -> Vec<u8> {
    let mut out = Vec::with_capacity(img.width() * img.height() * 4);
    for y in 0..img.height() {
        for px in img.row(y) {
            let c = px.clamp01();
            for v in [c.r, c.g, c.b, c.a] {
                out.push((v * 255.0).round() as u8);
            }
        }
    }
    out
}
