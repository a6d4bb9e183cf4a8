//! Colour filters applied while compositing.
//!
//! A filter maps each source pixel to a new colour before it is blended
//! onto the target. Any `Fn(Colour) -> Colour` closure is a filter.

mod blend;
mod matrix;

pub use blend::{BlendMode, BlendModeFilter};
pub use matrix::{ColourMatrix, ColourMatrixFilter};

use crate::types::Colour;

/// A per-pixel colour transform.
pub trait ColourFilter {
    /// Map one unpremultiplied colour to another.
    fn filter(&self, colour: Colour) -> Colour;
}

impl<F> ColourFilter for F
where
    F: Fn(Colour) -> Colour,
{
    fn filter(&self, colour: Colour) -> Colour {
        self(colour)
    }
}
