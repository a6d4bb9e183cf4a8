//! Rasterization layer.
//!
//! A minimal 2D drawing stack over [`Bitmap`](crate::types::Bitmap): a
//! [`Canvas`] that blits and fills through a scale/translate [`Transform`],
//! with [`Paint`] selecting the resampling quality, colour filter and blend
//! mode.

mod canvas;
mod paint;
mod transform;

pub use canvas::Canvas;
pub use paint::{FilterQuality, Paint};
pub use transform::Transform;
