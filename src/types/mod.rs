//! Core value types.
//!
//! - `Colour` - RGBA colour values, packed ARGB and hex forms
//! - `Bitmap` - owned RGBA pixel buffers
//! - `Drawable` - paintable assets with an intrinsic size

mod bitmap;
mod colour;
mod drawable;
mod rect;

pub use bitmap::Bitmap;
pub use colour::Colour;
pub use drawable::{BitmapDrawable, ColourDrawable, Drawable};
pub use rect::Rect;
