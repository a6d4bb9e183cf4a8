//! Canvas: draws bitmaps and solid rects onto a target bitmap.
//!
//! Every draw maps its geometry through the current transform, resamples
//! as needed, runs the paint's colour filter on each source pixel and
//! blends the result onto the target with the paint's blend mode. Pixels
//! falling outside the target are clipped.

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

use crate::error::Result;
use crate::types::{Bitmap, Colour, Rect};

use super::{FilterQuality, Paint, Transform};

/// Destination span of a draw, in target pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    left: i64,
    top: i64,
    width: u32,
    height: u32,
}

/// A drawing surface over a borrowed bitmap.
pub struct Canvas<'a> {
    target: &'a mut Bitmap,
    transform: Transform,
}

impl<'a> Canvas<'a> {
    /// Create a canvas over `target` with the identity transform.
    pub fn new(target: &'a mut Bitmap) -> Self {
        Self {
            target,
            transform: Transform::identity(),
        }
    }

    pub fn width(&self) -> u32 {
        self.target.width()
    }

    pub fn height(&self) -> u32 {
        self.target.height()
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Draw `source` with its top-left corner at the transformed origin.
    pub fn draw_bitmap(&mut self, source: &Bitmap, paint: &Paint<'_>) -> Result<()> {
        self.transform.validate()?;
        if source.is_empty() {
            return Ok(());
        }

        let span = self.map_span(Rect::from_size(source.width(), source.height()));
        if !self.intersects(span) {
            return Ok(());
        }

        if (span.width, span.height) == source.dimensions() {
            let image = source.as_image();
            self.composite(span, paint, |x, y| Colour::from(*image.get_pixel(x, y)));
            return Ok(());
        }

        tracing::trace!(
            from_w = source.width(),
            from_h = source.height(),
            to_w = span.width,
            to_h = span.height,
            quality = ?paint.quality,
            "Resampling bitmap"
        );
        match paint.quality {
            FilterQuality::Nearest => {
                let image = source.as_image();
                let (src_w, src_h) = source.dimensions();
                let step_x = src_w as f64 / span.width as f64;
                let step_y = src_h as f64 / span.height as f64;
                self.composite(span, paint, |x, y| {
                    let sx = (((x as f64 + 0.5) * step_x) as u32).min(src_w - 1);
                    let sy = (((y as f64 + 0.5) * step_y) as u32).min(src_h - 1);
                    Colour::from(*image.get_pixel(sx, sy))
                });
            }
            FilterQuality::Bilinear => {
                let scaled = resample_bilinear(source, span.width, span.height)?;
                let image = scaled.as_image();
                self.composite(span, paint, |x, y| Colour::from(*image.get_pixel(x, y)));
            }
        }
        Ok(())
    }

    /// Fill `rect` with a solid colour.
    pub fn fill_rect(&mut self, rect: Rect, colour: Colour, paint: &Paint<'_>) -> Result<()> {
        self.transform.validate()?;
        if rect.is_empty() {
            return Ok(());
        }

        let span = self.map_span(rect);
        if self.intersects(span) {
            self.composite(span, paint, |_, _| colour);
        }
        Ok(())
    }

    /// Map a rectangle through the transform, rounding to whole pixels.
    fn map_span(&self, rect: Rect) -> Span {
        let (x0, y0) = self.transform.map_point(rect.x as f64, rect.y as f64);
        let (x1, y1) = self
            .transform
            .map_point(rect.right() as f64, rect.bottom() as f64);

        let left = x0.round() as i64;
        let top = y0.round() as i64;
        Span {
            left,
            top,
            width: (x1.round() as i64 - left).clamp(0, u32::MAX as i64) as u32,
            height: (y1.round() as i64 - top).clamp(0, u32::MAX as i64) as u32,
        }
    }

    fn intersects(&self, span: Span) -> bool {
        span.width > 0
            && span.height > 0
            && span.left < self.width() as i64
            && span.top < self.height() as i64
            && span.left + span.width as i64 > 0
            && span.top + span.height as i64 > 0
    }

    /// Blend a span of source pixels onto the target.
    ///
    /// `sample` is called with span-local coordinates, only for pixels that
    /// land inside the target.
    fn composite<F>(&mut self, span: Span, paint: &Paint<'_>, sample: F)
    where
        F: Fn(u32, u32) -> Colour,
    {
        let x_start = (-span.left).max(0) as u32;
        let y_start = (-span.top).max(0) as u32;
        let x_end = (self.width() as i64 - span.left).min(span.width as i64) as u32;
        let y_end = (self.height() as i64 - span.top).min(span.height as i64) as u32;

        let image = self.target.as_image_mut();
        for sy in y_start..y_end {
            let ty = (span.top + sy as i64) as u32;
            for sx in x_start..x_end {
                let tx = (span.left + sx as i64) as u32;

                let mut src = sample(sx, sy);
                if let Some(filter) = paint.colour_filter {
                    src = filter.filter(src);
                }

                let px = image.get_pixel_mut(tx, ty);
                let out = paint.blend_mode.compose(src, Colour::from(*px));
                *px = out.into();
            }
        }
    }
}

/// Bilinear resample of `source` to `width` x `height`.
///
/// Filtering runs on premultiplied colour, so the colour channels of
/// transparent pixels never bleed into their neighbours.
fn resample_bilinear(source: &Bitmap, width: u32, height: u32) -> Result<Bitmap> {
    // The resampled copy must fit the same limits as any bitmap
    Bitmap::byte_len(width, height)?;

    let image = source.as_image();
    let premultiplied = Rgba32FImage::from_fn(source.width(), source.height(), |x, y| {
        Rgba(Colour::from(*image.get_pixel(x, y)).to_premultiplied_rgba())
    });
    let resized = imageops::resize(&premultiplied, width, height, FilterType::Triangle);

    Ok(Bitmap::from_image(RgbaImage::from_fn(width, height, |x, y| {
        Colour::from_premultiplied_rgba(resized.get_pixel(x, y).0).into()
    })))
}

impl std::fmt::Debug for Canvas<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("transform", &self.transform)
            .finish()
    }
}
