use foundation::color::Rgba;
use foundation::viewport::Viewport;

use crate::cursor::CursorStyle;

/// Space-black backdrop, rgb(5, 5, 16).
pub const CLEAR_COLOR: Rgba = Rgba::from_u8(5, 5, 16);

/// Owned RGBA8 pixel buffer the renderer draws into.
///
/// Rows are tightly packed, 4 bytes per pixel, top-left origin. A resize
/// recreates the buffer at the clear color, so motion trails restart; the
/// cursor style rides along with the surface because it is part of what the
/// host presents.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    viewport: Viewport,
    pixels: Vec<u8>,
    cursor: CursorStyle,
}

impl Surface {
    pub fn new(viewport: Viewport) -> Self {
        let mut surface = Self {
            viewport,
            pixels: Vec::new(),
            cursor: CursorStyle::Default,
        };
        surface.reallocate();
        surface
    }

    fn reallocate(&mut self) {
        let len = self.viewport.width as usize * self.viewport.height as usize * 4;
        self.pixels = vec![0; len];
        self.fill(CLEAR_COLOR);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Recreate the buffer at a new size, cleared to the backdrop.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.reallocate();
    }

    pub fn fill(&mut self, color: Rgba) {
        let rgba = color.to_rgba8();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.viewport.width || y >= self.viewport.height {
            return None;
        }
        let i = (y as usize * self.viewport.width as usize + x as usize) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Source-over blend of a straight-alpha color onto one pixel.
    /// Out-of-bounds coordinates are ignored.
    pub(crate) fn blend_pixel(&mut self, x: i64, y: i64, src: Rgba) {
        if x < 0 || y < 0 || x >= self.viewport.width as i64 || y >= self.viewport.height as i64 {
            return;
        }
        let sa = src.a.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }

        let i = (y as usize * self.viewport.width as usize + x as usize) * 4;
        let da = self.pixels[i + 3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }

        for c in 0..3 {
            let dst = self.pixels[i + c] as f32 / 255.0;
            let srcc = [src.r, src.g, src.b][c];
            let out = (srcc * sa + dst * da * (1.0 - sa)) / out_a;
            self.pixels[i + c] = (out.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
        self.pixels[i + 3] = (out_a * 255.0).round() as u8;
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
    }
}
