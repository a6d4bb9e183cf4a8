//! Integer rectangle used for drawable bounds.

/// An integer rectangle with its origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin spanning `width` x `height`.
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }
}
