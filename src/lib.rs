//! bitmap-ops - Bitmap helper routines
//!
//! Rasterize drawables, resize bitmaps, recolour them through colour
//! filters and extract a dominant colour. All operations are synchronous
//! and stateless; bitmaps are owned by the caller.

pub mod error;
pub mod filter;
pub mod ops;
pub mod render;
pub mod types;

pub use error::{BitmapError, Result};
pub use filter::{BlendMode, BlendModeFilter, ColourFilter, ColourMatrix, ColourMatrixFilter};
pub use ops::{
    apply_colour_filter, apply_tint, bitmap_from_drawable, dominant_colour, resize_bitmap,
    resize_bitmap_with,
};
pub use render::{Canvas, FilterQuality, Paint, Transform};
pub use types::{Bitmap, BitmapDrawable, Colour, ColourDrawable, Drawable, Rect};
