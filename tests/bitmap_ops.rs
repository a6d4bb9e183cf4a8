//! End-to-end behaviour of the bitmap helpers.

use bitmap_ops::{
    apply_colour_filter, apply_tint, bitmap_from_drawable, dominant_colour, resize_bitmap,
    Bitmap, BitmapDrawable, Canvas, Colour, ColourDrawable, ColourMatrixFilter, Drawable, Rect,
    Result,
};
use pretty_assertions::assert_eq;

/// Gradient bitmap with a distinct colour in every pixel.
fn gradient(width: u32, height: u32) -> Bitmap {
    let mut bitmap = Bitmap::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let colour = Colour::rgb((x * 40) as u8, (y * 40) as u8, 200);
            bitmap.set_pixel(x, y, colour).unwrap();
        }
    }
    bitmap
}

fn assert_close(actual: Colour, expected: Colour, tolerance: u8) {
    for (a, e) in actual.to_rgba().iter().zip(expected.to_rgba().iter()) {
        assert!(
            a.abs_diff(*e) <= tolerance,
            "expected {expected} within {tolerance}, got {actual}"
        );
    }
}

struct PanickingDrawable;

impl Drawable for PanickingDrawable {
    fn intrinsic_width(&self) -> i32 {
        2
    }

    fn intrinsic_height(&self) -> i32 {
        2
    }

    fn draw(&self, _canvas: &mut Canvas<'_>, _bounds: Rect) -> Result<()> {
        panic!("asset decoder exploded");
    }
}

#[test]
fn test_drawable_to_bitmap_matches_intrinsic_size() {
    for (w, h) in [(1, 1), (5, 3), (16, 9)] {
        let drawable = ColourDrawable::new(Colour::BLUE).with_size(w, h);
        let bitmap = bitmap_from_drawable(Some(&drawable)).unwrap();
        assert_eq!(bitmap.dimensions(), (w, h));
    }

    let drawable = BitmapDrawable::new(gradient(7, 2));
    let bitmap = bitmap_from_drawable(Some(&drawable)).unwrap();
    assert_eq!(bitmap.dimensions(), (7, 2));
}

#[test]
fn test_drawable_to_bitmap_absent() {
    assert!(bitmap_from_drawable(None).is_none());
}

#[test]
fn test_drawable_to_bitmap_swallows_panics() {
    assert!(bitmap_from_drawable(Some(&PanickingDrawable)).is_none());
}

#[test]
fn test_resize_gives_exact_dimensions() {
    let source = gradient(4, 3);
    for (w, h) in [(1, 1), (8, 6), (3, 9), (13, 2), (4, 3)] {
        let resized = resize_bitmap(&source, w, h).unwrap();
        assert_eq!(resized.dimensions(), (w, h));
    }
}

#[test]
fn test_resize_to_same_size_is_identity() {
    let source = gradient(4, 4);
    let resized = resize_bitmap(&source, 4, 4).unwrap();

    for y in 0..4 {
        for x in 0..4 {
            assert_close(resized.pixel(x, y).unwrap(), source.pixel(x, y).unwrap(), 1);
        }
    }
}

#[test]
fn test_resize_round_trip_dimensions() {
    let source = gradient(5, 3);
    let up = resize_bitmap(&source, 17, 11).unwrap();
    let down = resize_bitmap(&up, 5, 3).unwrap();
    assert_eq!(down.dimensions(), source.dimensions());
}

#[test]
fn test_dominant_colour_uniform() {
    let colours = [
        Colour::RED,
        Colour::rgb(12, 200, 99),
        Colour::WHITE,
        Colour::BLACK,
    ];
    for colour in colours {
        let bitmap = Bitmap::filled(6, 4, colour).unwrap();
        assert_eq!(dominant_colour(&bitmap).unwrap(), colour);
    }
}

#[test]
fn test_dominant_colour_half_red_half_blue() {
    let mut bitmap = Bitmap::new(4, 4).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            let colour = if x < 2 { Colour::RED } else { Colour::BLUE };
            bitmap.set_pixel(x, y, colour).unwrap();
        }
    }

    let dominant = dominant_colour(&bitmap).unwrap();
    assert_ne!(dominant, Colour::RED);
    assert_ne!(dominant, Colour::BLUE);
    assert_close(dominant, Colour::rgb(128, 0, 128), 16);
}

#[test]
fn test_dominant_colour_ignores_transparent_pixels() {
    for hidden in [Colour::new(0, 0, 255, 0), Colour::TRANSPARENT] {
        let mut bitmap = Bitmap::new(2, 1).unwrap();
        bitmap.set_pixel(0, 0, Colour::RED).unwrap();
        bitmap.set_pixel(1, 0, hidden).unwrap();

        let dominant = dominant_colour(&bitmap).unwrap();
        assert_close(dominant, Colour::new(255, 0, 0, 128), 1);
    }
}

#[test]
fn test_dominant_colour_of_icon_with_margin() {
    // A green square inside a transparent border
    let mut bitmap = Bitmap::filled(6, 6, Colour::new(255, 255, 255, 0)).unwrap();
    for y in 2..4 {
        for x in 2..4 {
            bitmap.set_pixel(x, y, Colour::GREEN).unwrap();
        }
    }

    let dominant = dominant_colour(&bitmap).unwrap();
    assert!(dominant.a > 0 && dominant.a < 255);
    assert_eq!((dominant.r, dominant.g, dominant.b), (0, 255, 0));
}

#[test]
fn test_resize_mixed_alpha_downscale() {
    let mut bitmap = Bitmap::new(4, 2).unwrap();
    for y in 0..2 {
        bitmap.set_pixel(0, y, Colour::BLUE).unwrap();
        bitmap.set_pixel(1, y, Colour::new(255, 0, 0, 0)).unwrap();
        bitmap.set_pixel(2, y, Colour::new(255, 0, 0, 0)).unwrap();
        bitmap.set_pixel(3, y, Colour::new(255, 0, 0, 0)).unwrap();
    }

    let resized = resize_bitmap(&bitmap, 2, 1).unwrap();
    let left = resized.pixel(0, 0).unwrap();
    assert_eq!((left.r, left.g, left.b), (0, 0, 255));
    assert!(left.a > 0 && left.a < 255);
    assert_eq!(resized.pixel(1, 0).unwrap().a, 0);
}

#[test]
fn test_tint_respects_alpha() {
    let mut bitmap = Bitmap::new(2, 1).unwrap();
    bitmap.set_pixel(0, 0, Colour::WHITE).unwrap();

    apply_tint(&mut bitmap, Colour::rgb(30, 60, 90)).unwrap();

    assert_eq!(bitmap.pixel(0, 0).unwrap(), Colour::rgb(30, 60, 90));
    assert_eq!(bitmap.pixel(1, 0).unwrap(), Colour::TRANSPARENT);
}

#[test]
fn test_apply_colour_filter_returns_same_instance() {
    let mut bitmap = gradient(3, 3);
    let ptr: *const Bitmap = &bitmap;

    let returned = apply_tint(&mut bitmap, Colour::RED).unwrap();
    assert!(std::ptr::eq(returned, ptr));

    let returned = apply_colour_filter(&mut bitmap, &ColourMatrixFilter::greyscale()).unwrap();
    assert!(std::ptr::eq(returned, ptr));
}

#[test]
fn test_apply_colour_filter_with_closure() {
    let mut bitmap = Bitmap::filled(2, 2, Colour::rgb(10, 20, 30)).unwrap();
    let swap = |c: Colour| Colour::new(c.b, c.g, c.r, c.a);

    apply_colour_filter(&mut bitmap, &swap).unwrap();

    assert_eq!(bitmap.pixel(1, 1).unwrap(), Colour::rgb(30, 20, 10));
}

#[test]
fn test_greyscale_then_dominant() {
    let mut bitmap = gradient(4, 4);
    apply_colour_filter(&mut bitmap, &ColourMatrixFilter::greyscale()).unwrap();

    let dominant = dominant_colour(&bitmap).unwrap();
    assert_close(Colour::rgb(dominant.r, dominant.r, dominant.r), dominant, 1);
}
