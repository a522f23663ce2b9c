//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// An axis-aligned integer rectangle in texture or screen pixels.
///
/// Serializes as `{ "x", "y", "w", "h" }`, the layout used by animation and
/// atlas definition files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// Far horizontal edge, saturating at `i32::MAX`.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// True when the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Number of pixels covered (0 for degenerate rectangles).
    pub fn area(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.w as usize * self.h as usize
        }
    }

    /// True if `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Take `sub` (expressed relative to this rectangle's top-left corner)
    /// and clamp it into this rectangle.
    ///
    /// The offset is clamped to `[left, right]` / `[top, bottom]`, then the
    /// size is cut so the result never extends past this rectangle.
    pub fn clamp_subregion(&self, sub: Rect) -> Rect {
        let x = self.x.saturating_add(sub.x).clamp(self.left(), self.right().max(self.left()));
        let y = self.y.saturating_add(sub.y).clamp(self.top(), self.bottom().max(self.top()));
        let w = sub.w.clamp(0, (self.right() - x).max(0));
        let h = sub.h.clamp(0, (self.bottom() - y).max(0));
        Rect::new(x, y, w, h)
    }

    /// Get UV coordinates (offset and size) for this region within a texture.
    pub fn uv(&self, texture_width: u32, texture_height: u32) -> ([f32; 2], [f32; 2]) {
        let u0 = self.x as f32 / texture_width as f32;
        let v0 = self.y as f32 / texture_height as f32;
        let u_size = self.w as f32 / texture_width as f32;
        let v_size = self.h as f32 / texture_height as f32;
        ([u0, v0], [u_size, v_size])
    }
}

/// RGBA8 colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as `0xRRGGBBAA`.
    pub fn packed(&self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Color::rgba(c[0], c[1], c[2], c[3])
    }
}

/// Index of pixel `(x, y)` in a row-major buffer of the given width.
pub fn pixel_index(x: u32, y: u32, width: u32) -> usize {
    x as usize + y as usize * width as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.area(), 1200);
        assert!(!r.is_empty());
        assert!(Rect::new(0, 0, 0, 5).is_empty());
    }

    #[test]
    fn test_rect_edges_saturate() {
        let far = Rect::new(i32::MAX, i32::MAX - 2, 10, 10);
        assert_eq!(far.right(), i32::MAX);
        assert_eq!(far.bottom(), i32::MAX);

        let wide = Rect::new(0, 0, i32::MAX, i32::MAX);
        assert!(wide.contains_rect(&Rect::new(i32::MAX - 1, 5, 10, 10)));
        assert!(!Rect::new(0, 0, 8, 8).contains_rect(&far));

        let clamped = Rect::new(4, 4, 8, 8).clamp_subregion(Rect::new(i32::MAX, 0, 4, 4));
        assert_eq!(clamped, Rect::new(12, 4, 0, 4));
    }

    #[test]
    fn test_clamp_subregion_inside() {
        let frame = Rect::new(32, 0, 16, 16);
        let clamped = frame.clamp_subregion(Rect::new(4, 4, 8, 8));
        assert_eq!(clamped, Rect::new(36, 4, 8, 8));
    }

    #[test]
    fn test_clamp_subregion_overflow() {
        let frame = Rect::new(32, 0, 16, 16);
        // Offset past the right edge and oversized
        let clamped = frame.clamp_subregion(Rect::new(40, -10, 64, -3));
        assert_eq!(clamped.x, 48);
        assert_eq!(clamped.y, 0);
        assert_eq!(clamped.w, 0);
        assert_eq!(clamped.h, 0);

        // Oversized from a valid offset is cut at the far edges
        let clamped = frame.clamp_subregion(Rect::new(8, 4, 64, 64));
        assert_eq!(clamped, Rect::new(40, 4, 8, 12));
        assert!(frame.contains_rect(&clamped));
    }

    #[test]
    fn test_rect_uv() {
        let region = Rect::new(64, 32, 32, 32);
        let (offset, size) = region.uv(256, 256);

        assert_eq!(offset[0], 0.25); // 64/256
        assert_eq!(offset[1], 0.125); // 32/256
        assert_eq!(size[0], 0.125);
        assert_eq!(size[1], 0.125);
    }

    #[test]
    fn test_rect_json_shape() {
        let json = serde_json::to_string(&Rect::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2,"w":3,"h":4}"#);
    }

    #[test]
    fn test_pixel_index() {
        assert_eq!(pixel_index(0, 0, 8), 0);
        assert_eq!(pixel_index(3, 2, 8), 19);
    }

    #[test]
    fn test_color_packed() {
        assert_eq!(Color::rgba(0x11, 0x22, 0x33, 0x44).packed(), 0x11223344);
    }
}
