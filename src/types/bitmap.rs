//! Owned RGBA pixel buffer.

use image::RgbaImage;

use crate::error::{BitmapError, Result};
use crate::types::Colour;

/// A rectangular 32-bit RGBA pixel buffer.
///
/// Zero-sized bitmaps are valid and hold no pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    image: RgbaImage,
}

impl Bitmap {
    /// Bytes per pixel of the fixed pixel format.
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Upper bound on the pixel data of a single bitmap (1 GiB).
    pub const MAX_BYTES: usize = 1 << 30;

    /// Allocate a fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let bytes = Self::byte_len(width, height)?;
        tracing::trace!(width, height, bytes, "Allocating bitmap");

        Ok(Self {
            image: RgbaImage::new(width, height),
        })
    }

    /// Size in bytes of a `width` x `height` buffer, if it may be allocated.
    pub(crate) fn byte_len(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(Self::BYTES_PER_PIXEL))
            .filter(|&n| n <= Self::MAX_BYTES)
            .ok_or(BitmapError::Allocation { width, height })
    }

    /// Allocate a bitmap with every pixel set to `colour`.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Result<Self> {
        let mut bitmap = Self::new(width, height)?;
        bitmap.fill(colour);
        Ok(bitmap)
    }

    /// Wrap an existing image buffer.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// True when the bitmap has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Read a single pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Result<Colour> {
        self.image
            .get_pixel_checked(x, y)
            .map(|px| Colour::from(*px))
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Write a single pixel.
    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<()> {
        let err = self.out_of_bounds(x, y);
        let px = self.image.get_pixel_mut_checked(x, y).ok_or(err)?;
        *px = colour.into();
        Ok(())
    }

    /// Set every pixel to `colour`.
    pub fn fill(&mut self, colour: Colour) {
        let rgba: image::Rgba<u8> = colour.into();
        for px in self.image.pixels_mut() {
            *px = rgba;
        }
    }

    /// Borrow the backing image buffer.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub(crate) fn as_image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    fn out_of_bounds(&self, x: u32, y: u32) -> BitmapError {
        BitmapError::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        }
    }
}
