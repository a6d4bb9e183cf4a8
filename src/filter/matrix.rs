//! 4x5 colour matrix filter.
//!
//! Each output channel is a weighted sum of the input channels plus an
//! offset, all on unpremultiplied values in the 0..=255 range:
//!
//! ```text
//! R' = a*R + b*G + c*B + d*A + e
//! G' = f*R + g*G + h*B + i*A + j
//! B' = k*R + l*G + m*B + n*A + o
//! A' = p*R + q*G + r*B + s*A + t
//! ```

use crate::types::Colour;

use super::ColourFilter;

/// Luma weights used for saturation changes.
const LUMA_R: f32 = 0.213;
const LUMA_G: f32 = 0.715;
const LUMA_B: f32 = 0.072;

/// A row-major 4x5 colour transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourMatrix([f32; 20]);

impl ColourMatrix {
    pub const fn new(values: [f32; 20]) -> Self {
        Self(values)
    }

    /// The matrix that leaves every colour unchanged.
    pub const fn identity() -> Self {
        Self::scale(1.0, 1.0, 1.0, 1.0)
    }

    /// Multiply each channel by a constant.
    pub const fn scale(r: f32, g: f32, b: f32, a: f32) -> Self {
        #[rustfmt::skip]
        let m = [
            r,   0.0, 0.0, 0.0, 0.0,
            0.0, g,   0.0, 0.0, 0.0,
            0.0, 0.0, b,   0.0, 0.0,
            0.0, 0.0, 0.0, a,   0.0,
        ];
        Self(m)
    }

    /// Saturation adjustment: 0 is greyscale, 1 is unchanged.
    pub fn saturation(sat: f32) -> Self {
        let inv = 1.0 - sat;
        let r = LUMA_R * inv;
        let g = LUMA_G * inv;
        let b = LUMA_B * inv;

        #[rustfmt::skip]
        let m = [
            r + sat, g,       b,       0.0, 0.0,
            r,       g + sat, b,       0.0, 0.0,
            r,       g,       b + sat, 0.0, 0.0,
            0.0,     0.0,     0.0,     1.0, 0.0,
        ];
        Self(m)
    }

    /// Apply the matrix to one colour, clamping each channel.
    pub fn apply(&self, colour: Colour) -> Colour {
        let input = [
            colour.r as f32,
            colour.g as f32,
            colour.b as f32,
            colour.a as f32,
        ];
        let m = &self.0;

        let channel = |row: usize| {
            let r = &m[row * 5..row * 5 + 5];
            let v = r[0] * input[0] + r[1] * input[1] + r[2] * input[2] + r[3] * input[3] + r[4];
            v.round().clamp(0.0, 255.0) as u8
        };

        Colour::new(channel(0), channel(1), channel(2), channel(3))
    }
}

impl Default for ColourMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

/// Colour filter backed by a [`ColourMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColourMatrixFilter {
    pub matrix: ColourMatrix,
}

impl ColourMatrixFilter {
    pub fn new(matrix: ColourMatrix) -> Self {
        Self { matrix }
    }

    /// Filter that removes all saturation.
    pub fn greyscale() -> Self {
        Self::new(ColourMatrix::saturation(0.0))
    }
}

impl ColourFilter for ColourMatrixFilter {
    fn filter(&self, colour: Colour) -> Colour {
        self.matrix.apply(colour)
    }
}
