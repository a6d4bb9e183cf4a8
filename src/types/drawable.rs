//! Drawables: paintable assets with an intrinsic size.

use crate::error::Result;
use crate::render::{Canvas, Paint, Transform};
use crate::types::{Bitmap, Colour, Rect};

/// Something that can paint itself onto a canvas.
///
/// A non-positive intrinsic dimension means the drawable has no natural
/// size and only makes sense when given explicit bounds.
pub trait Drawable {
    fn intrinsic_width(&self) -> i32;

    fn intrinsic_height(&self) -> i32;

    /// Paint into `bounds` on `canvas`.
    fn draw(&self, canvas: &mut Canvas<'_>, bounds: Rect) -> Result<()>;
}

/// Solid colour fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourDrawable {
    colour: Colour,
    size: Option<(u32, u32)>,
}

impl ColourDrawable {
    /// A colour fill with no intrinsic size.
    pub fn new(colour: Colour) -> Self {
        Self { colour, size: None }
    }

    /// Give the fill an intrinsic size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }
}

impl Drawable for ColourDrawable {
    fn intrinsic_width(&self) -> i32 {
        self.size.map_or(-1, |(w, _)| i32::try_from(w).unwrap_or(i32::MAX))
    }

    fn intrinsic_height(&self) -> i32 {
        self.size.map_or(-1, |(_, h)| i32::try_from(h).unwrap_or(i32::MAX))
    }

    fn draw(&self, canvas: &mut Canvas<'_>, bounds: Rect) -> Result<()> {
        canvas.fill_rect(bounds, self.colour, &Paint::new())
    }
}

/// A bitmap stretched over its bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapDrawable {
    bitmap: Bitmap,
}

impl BitmapDrawable {
    pub fn new(bitmap: Bitmap) -> Self {
        Self { bitmap }
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }
}

impl Drawable for BitmapDrawable {
    fn intrinsic_width(&self) -> i32 {
        i32::try_from(self.bitmap.width()).unwrap_or(i32::MAX)
    }

    fn intrinsic_height(&self) -> i32 {
        i32::try_from(self.bitmap.height()).unwrap_or(i32::MAX)
    }

    fn draw(&self, canvas: &mut Canvas<'_>, bounds: Rect) -> Result<()> {
        if self.bitmap.is_empty() || bounds.is_empty() {
            return Ok(());
        }

        let sx = bounds.width as f64 / self.bitmap.width() as f64;
        let sy = bounds.height as f64 / self.bitmap.height() as f64;
        let saved = canvas.transform();

        // Map the bitmap onto the bounds, under the canvas transform
        let transform = Transform::scale(saved.sx * sx, saved.sy * sy).then_translate(
            saved.tx + bounds.x as f64 * saved.sx,
            saved.ty + bounds.y as f64 * saved.sy,
        );
        canvas.set_transform(transform);
        let result = canvas.draw_bitmap(&self.bitmap, &Paint::new());
        canvas.set_transform(saved);

        result
    }
}
