//! Scale + translate affine transform.

use crate::error::{BitmapError, Result};

/// An axis-aligned affine transform: `x' = x * sx + tx`, `y' = y * sy + ty`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Transform {
    pub const fn identity() -> Self {
        Self {
            sx: 1.0,
            sy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Scale about the origin.
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self {
            sx,
            sy,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self {
            sx: 1.0,
            sy: 1.0,
            tx,
            ty,
        }
    }

    /// Apply `self`, then translate by (tx, ty).
    pub fn then_translate(self, tx: f64, ty: f64) -> Self {
        Self {
            tx: self.tx + tx,
            ty: self.ty + ty,
            ..self
        }
    }

    /// Map a point through the transform.
    pub fn map_point(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.sx + self.tx, y * self.sy + self.ty)
    }

    /// Reject transforms the canvas cannot draw with.
    pub fn validate(&self) -> Result<()> {
        let finite = [self.sx, self.sy, self.tx, self.ty]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(BitmapError::InvalidTransform {
                message: format!("non-finite component in {:?}", self),
            });
        }
        if self.sx < 0.0 || self.sy < 0.0 {
            return Err(BitmapError::InvalidTransform {
                message: format!("negative scale ({}, {})", self.sx, self.sy),
            });
        }
        Ok(())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
