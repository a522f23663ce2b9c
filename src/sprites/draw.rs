//! Draw submissions handed to the renderer.

use glam::Vec2;

use crate::assets::texture::TextureHandle;
use crate::core::types::{Color, Rect};

/// Where on screen a sprite is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawTarget {
    /// Stretch the source region into this screen rectangle.
    Rect(Rect),
    /// Draw at this position, sized by the source region and `scale`.
    Position(Vec2),
}

/// Per-draw options. `Default` draws the whole sprite untinted and
/// untransformed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawParams {
    /// Sub-region of the sprite to draw, relative to the sprite's own
    /// region. Clamped into that region.
    pub source: Option<Rect>,
    pub tint: Color,
    /// Rotation in radians around `origin`.
    pub rotation: f32,
    pub origin: Vec2,
    pub scale: Vec2,
    pub flip_x: bool,
    pub flip_y: bool,
    pub layer_depth: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            source: None,
            tint: Color::WHITE,
            rotation: 0.0,
            origin: Vec2::ZERO,
            scale: Vec2::ONE,
            flip_x: false,
            flip_y: false,
            layer_depth: 0.0,
        }
    }
}

impl DrawParams {
    pub fn with_source(mut self, source: Rect) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_rotation(mut self, rotation: f32, origin: Vec2) -> Self {
        self.rotation = rotation;
        self.origin = origin;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec2::splat(scale);
        self
    }

    pub fn with_flip(mut self, flip_x: bool, flip_y: bool) -> Self {
        self.flip_x = flip_x;
        self.flip_y = flip_y;
        self
    }

    pub fn with_layer_depth(mut self, layer_depth: f32) -> Self {
        self.layer_depth = layer_depth;
        self
    }
}

/// A fully resolved draw call.
#[derive(Clone, Debug)]
pub struct DrawCommand {
    pub texture: TextureHandle,
    pub destination: DrawTarget,
    /// Region of `texture` to sample, in pixels.
    pub source: Rect,
    pub tint: Color,
    pub rotation: f32,
    pub origin: Vec2,
    pub scale: Vec2,
    pub flip_x: bool,
    pub flip_y: bool,
    pub layer_depth: f32,
}

impl DrawCommand {
    /// Normalized UV offset and size of the source region.
    pub fn uv(&self) -> ([f32; 2], [f32; 2]) {
        self.source.uv(self.texture.width(), self.texture.height())
    }

    /// On-screen size in pixels.
    pub fn screen_size(&self) -> Vec2 {
        match self.destination {
            DrawTarget::Rect(rect) => Vec2::new(rect.w as f32, rect.h as f32),
            DrawTarget::Position(_) => {
                Vec2::new(self.source.w as f32, self.source.h as f32) * self.scale
            }
        }
    }
}

/// Receives draw commands, typically a renderer's sprite batch.
pub trait DrawSink {
    fn submit(&mut self, command: DrawCommand);
}

impl DrawSink for Vec<DrawCommand> {
    fn submit(&mut self, command: DrawCommand) {
        self.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::texture::Texture;
    use std::sync::Arc;

    fn command(destination: DrawTarget, scale: Vec2) -> DrawCommand {
        DrawCommand {
            texture: Arc::new(Texture::solid("sheet", 128, 64, Color::WHITE)),
            destination,
            source: Rect::new(32, 16, 16, 16),
            tint: Color::WHITE,
            rotation: 0.0,
            origin: Vec2::ZERO,
            scale,
            flip_x: false,
            flip_y: false,
            layer_depth: 0.0,
        }
    }

    #[test]
    fn test_command_uv() {
        let cmd = command(DrawTarget::Position(Vec2::ZERO), Vec2::ONE);
        let (offset, size) = cmd.uv();
        assert_eq!(offset, [0.25, 0.25]);
        assert_eq!(size, [0.125, 0.25]);
    }

    #[test]
    fn test_screen_size() {
        let cmd = command(DrawTarget::Position(Vec2::new(5.0, 5.0)), Vec2::new(2.0, 3.0));
        assert_eq!(cmd.screen_size(), Vec2::new(32.0, 48.0));

        let cmd = command(DrawTarget::Rect(Rect::new(0, 0, 100, 40)), Vec2::ONE);
        assert_eq!(cmd.screen_size(), Vec2::new(100.0, 40.0));
    }

    #[test]
    fn test_params_builder() {
        let params = DrawParams::default()
            .with_source(Rect::new(0, 0, 4, 4))
            .with_scale(2.0)
            .with_flip(true, false)
            .with_layer_depth(0.5);
        assert_eq!(params.source, Some(Rect::new(0, 0, 4, 4)));
        assert_eq!(params.scale, Vec2::splat(2.0));
        assert!(params.flip_x);
        assert!(!params.flip_y);
        assert_eq!(params.tint, Color::WHITE);
    }
}
