use super::{Sprite, SpriteKind};
use crate::assets::texture::TextureHandle;
use crate::core::types::Rect;

/// A sprite that shows its whole texture.
#[derive(Clone, Debug)]
pub struct ImageSprite {
    texture: TextureHandle,
}

impl ImageSprite {
    pub fn new(texture: TextureHandle) -> Self {
        Self { texture }
    }
}

impl Sprite for ImageSprite {
    fn kind(&self) -> SpriteKind {
        SpriteKind::Image
    }

    fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    fn source_region(&self) -> Rect {
        self.texture.bounds()
    }
}
