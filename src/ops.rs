//! Bitmap helper operations.
//!
//! Four independent, stateless helpers built on the [`render`](crate::render)
//! layer:
//!
//! - [`bitmap_from_drawable`] - rasterize a drawable at its intrinsic size
//! - [`resize_bitmap`] - stretch a bitmap to an exact size
//! - [`apply_colour_filter`] / [`apply_tint`] - recolour a bitmap in place
//! - [`dominant_colour`] - average colour via a 1x1 downsample
//!
//! Drawable conversion is best effort and reports any failure as `None`.
//! Everything else propagates errors to the caller.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, trace};

use crate::error::{BitmapError, Result};
use crate::filter::{BlendModeFilter, ColourFilter};
use crate::render::{Canvas, FilterQuality, Paint, Transform};
use crate::types::{Bitmap, Colour, Drawable, Rect};

/// Rasterize a drawable into a new bitmap of its intrinsic size.
///
/// Returns `None` when there is no drawable, when it has no positive
/// intrinsic size, or when allocating or drawing fails in any way,
/// including a panic inside the drawable.
pub fn bitmap_from_drawable(drawable: Option<&dyn Drawable>) -> Option<Bitmap> {
    let drawable = drawable?;

    match panic::catch_unwind(AssertUnwindSafe(|| rasterize(drawable))) {
        Ok(Ok(bitmap)) => Some(bitmap),
        Ok(Err(err)) => {
            debug!(error = %err, "Drawable conversion failed");
            None
        }
        Err(_) => {
            debug!("Drawable panicked during conversion");
            None
        }
    }
}

fn rasterize(drawable: &dyn Drawable) -> Result<Bitmap> {
    let (w, h) = (drawable.intrinsic_width(), drawable.intrinsic_height());
    let (width, height) = match (u32::try_from(w), u32::try_from(h)) {
        (Ok(width), Ok(height)) if width > 0 && height > 0 => (width, height),
        _ => {
            return Err(BitmapError::Draw {
                message: format!("drawable has no intrinsic size ({}x{})", w, h),
                help: Some("Draw it onto a canvas with explicit bounds instead".to_string()),
            })
        }
    };

    let mut bitmap = Bitmap::new(width, height)?;
    let mut canvas = Canvas::new(&mut bitmap);
    drawable.draw(&mut canvas, Rect::from_size(width, height))?;

    Ok(bitmap)
}

/// Resize a bitmap to exactly `width` x `height` with bilinear filtering.
///
/// Each axis is scaled independently about the origin, so a different
/// aspect ratio stretches the image. A zero target dimension gives an empty
/// bitmap. The source is left untouched.
pub fn resize_bitmap(bitmap: &Bitmap, width: u32, height: u32) -> Result<Bitmap> {
    resize_bitmap_with(bitmap, width, height, FilterQuality::Bilinear)
}

/// Resize a bitmap with an explicit resampling quality.
pub fn resize_bitmap_with(
    bitmap: &Bitmap,
    width: u32,
    height: u32,
    quality: FilterQuality,
) -> Result<Bitmap> {
    let mut resized = Bitmap::new(width, height)?;
    if resized.is_empty() || bitmap.is_empty() {
        return Ok(resized);
    }

    let scale_x = width as f64 / bitmap.width() as f64;
    let scale_y = height as f64 / bitmap.height() as f64;
    trace!(
        from_w = bitmap.width(),
        from_h = bitmap.height(),
        width,
        height,
        scale_x,
        scale_y,
        "Resizing bitmap"
    );

    let mut canvas = Canvas::new(&mut resized);
    canvas.set_transform(Transform::scale(scale_x, scale_y));
    canvas.draw_bitmap(bitmap, &Paint::new().with_quality(quality))?;

    Ok(resized)
}

/// Draw a bitmap onto itself through `filter`.
///
/// The bitmap is modified in place and the same reference is handed back.
pub fn apply_colour_filter<'b>(
    bitmap: &'b mut Bitmap,
    filter: &dyn ColourFilter,
) -> Result<&'b mut Bitmap> {
    trace!(width = bitmap.width(), height = bitmap.height(), "Applying colour filter");

    let source = bitmap.clone();
    let paint = Paint::new().with_colour_filter(filter);
    Canvas::new(bitmap).draw_bitmap(&source, &paint)?;

    Ok(bitmap)
}

/// Tint the visible shape of a bitmap with a single colour.
///
/// Uses a source-atop blend, so transparent pixels stay transparent.
pub fn apply_tint(bitmap: &mut Bitmap, colour: Colour) -> Result<&mut Bitmap> {
    apply_colour_filter(bitmap, &BlendModeFilter::tint(colour))
}

/// Representative colour of a bitmap.
///
/// Downsamples to a single pixel with bilinear filtering, which averages
/// the whole image, and reads that pixel back.
pub fn dominant_colour(bitmap: &Bitmap) -> Result<Colour> {
    let single = resize_bitmap(bitmap, 1, 1)?;
    single.pixel(0, 0)
}
