//! Drawable sprites: whole images, atlas regions and animations.
//!
//! Every sprite kind implements [`Sprite`], which resolves a draw into one
//! [`DrawCommand`] against the sprite's current source region.

pub mod animated;
pub mod atlas;
pub mod draw;
pub mod image;

pub use animated::AnimatedSprite;
pub use atlas::{AtlasFile, AtlasRegion, AtlasSprite};
pub use draw::{DrawCommand, DrawParams, DrawSink, DrawTarget};
pub use image::ImageSprite;

use crate::assets::texture::TextureHandle;
use crate::core::error::Result;
use crate::core::types::{Color, Rect};

/// The three sprite variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Image,
    Atlas,
    Animated,
}

/// Common capability of everything that can be drawn.
pub trait Sprite {
    fn kind(&self) -> SpriteKind;

    fn texture(&self) -> &TextureHandle;

    /// Region of the texture this sprite currently shows.
    fn source_region(&self) -> Rect;

    /// Resolve `params` against the sprite and submit one draw command.
    fn draw(&self, sink: &mut dyn DrawSink, target: DrawTarget, params: &DrawParams) {
        let region = self.source_region();
        let source = params
            .source
            .map(|sub| region.clamp_subregion(sub))
            .unwrap_or(region);

        sink.submit(DrawCommand {
            texture: self.texture().clone(),
            destination: target,
            source,
            tint: params.tint,
            rotation: params.rotation,
            origin: params.origin,
            scale: params.scale,
            flip_x: params.flip_x,
            flip_y: params.flip_y,
            layer_depth: params.layer_depth,
        });
    }

    /// Copy the colours of the current source region.
    fn pixels(&self) -> Result<Vec<Color>> {
        self.texture().region_pixels(self.source_region())
    }
}
