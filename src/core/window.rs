//! Integer upscaling of a fixed virtual resolution onto a display.

use super::types::Rect;

/// How a game's native (virtual) resolution maps onto the user's display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowScale {
    pub virtual_width: i32,
    pub virtual_height: i32,
    pub display_width: i32,
    pub display_height: i32,
    /// Largest integer scale at which the virtual resolution still fits.
    pub scale: i32,
    /// Upscaled render target, centred on the display.
    pub gameport: Rect,
}

impl WindowScale {
    /// Compute the scale and gameport. Returns `None` if any dimension is
    /// not positive.
    pub fn new(
        virtual_width: i32,
        virtual_height: i32,
        display_width: i32,
        display_height: i32,
    ) -> Option<Self> {
        if virtual_width <= 0 || virtual_height <= 0 || display_width <= 0 || display_height <= 0
        {
            return None;
        }

        // Never scale below 1, even if the display is smaller than the game
        let scale = (display_width / virtual_width)
            .min(display_height / virtual_height)
            .max(1);

        let gameport = Rect::new(
            (display_width - virtual_width * scale) / 2,
            (display_height - virtual_height * scale) / 2,
            virtual_width * scale,
            virtual_height * scale,
        );

        Some(Self {
            virtual_width,
            virtual_height,
            display_width,
            display_height,
            scale,
            gameport,
        })
    }

    pub fn x_offset(&self) -> i32 {
        self.gameport.x
    }

    pub fn y_offset(&self) -> i32 {
        self.gameport.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit() {
        let ws = WindowScale::new(320, 180, 1920, 1080).unwrap();
        assert_eq!(ws.scale, 6);
        assert_eq!(ws.gameport, Rect::new(0, 0, 1920, 1080));
    }

    #[test]
    fn test_letterboxed() {
        // 1920/320 = 6, 1200/180 = 6 -> height has 120px spare
        let ws = WindowScale::new(320, 180, 1920, 1200).unwrap();
        assert_eq!(ws.scale, 6);
        assert_eq!(ws.x_offset(), 0);
        assert_eq!(ws.y_offset(), 60);
    }

    #[test]
    fn test_uses_smaller_axis() {
        let ws = WindowScale::new(100, 100, 450, 250).unwrap();
        assert_eq!(ws.scale, 2);
        assert_eq!(ws.gameport, Rect::new(125, 25, 200, 200));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(WindowScale::new(0, 180, 1920, 1080).is_none());
    }
}
