use crate::math::Vec2;

/// Pixel dimensions of a drawing area.
///
/// A zero-area viewport is representable so hosts can report it; consumers
/// that cannot draw into one must check `is_empty` and refuse.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn center(self) -> Vec2 {
        Vec2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Shorter of the two sides, in pixels.
    pub fn min_extent(self) -> f64 {
        self.width.min(self.height) as f64
    }

    pub fn contains(self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width as f64 && p.y >= 0.0 && p.y <= self.height as f64
    }
}
