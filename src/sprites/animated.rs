use std::sync::Arc;

use super::{Sprite, SpriteKind};
use crate::animation::{AnimationDefinition, AnimationPlayer};
use crate::assets::texture::TextureHandle;
use crate::core::types::Rect;

/// A sprite whose source region follows an animation player.
#[derive(Clone, Debug)]
pub struct AnimatedSprite {
    texture: TextureHandle,
    player: AnimationPlayer,
}

impl AnimatedSprite {
    pub fn new(texture: TextureHandle, definition: Arc<AnimationDefinition>) -> Self {
        Self::with_player(texture, AnimationPlayer::new(definition))
    }

    pub fn with_player(texture: TextureHandle, player: AnimationPlayer) -> Self {
        Self { texture, player }
    }

    pub fn player(&self) -> &AnimationPlayer {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut AnimationPlayer {
        &mut self.player
    }

    /// Advance playback. Returns true if the displayed frame changed.
    pub fn update(&mut self, elapsed_ms: f64) -> bool {
        self.player.update(elapsed_ms)
    }
}

impl Sprite for AnimatedSprite {
    fn kind(&self) -> SpriteKind {
        SpriteKind::Animated
    }

    fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    fn source_region(&self) -> Rect {
        self.player.current_frame().source_region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Frame;
    use crate::assets::texture::Texture;
    use crate::core::types::Color;
    use crate::sprites::{DrawCommand, DrawParams, DrawTarget};
    use glam::Vec2;

    fn walk() -> AnimatedSprite {
        let frames = (0..4)
            .map(|i| Frame::new(Rect::new(i * 8, 0, 8, 8), 100))
            .collect();
        let definition = Arc::new(AnimationDefinition::from_frames(frames).unwrap());
        AnimatedSprite::new(Arc::new(Texture::solid("walk", 32, 8, Color::WHITE)), definition)
    }

    #[test]
    fn test_draw_follows_current_frame() {
        let mut sprite = walk();
        sprite.player_mut().play(None).unwrap();
        assert!(sprite.update(250.0));

        let mut sink: Vec<DrawCommand> = Vec::new();
        sprite.draw(&mut sink, DrawTarget::Position(Vec2::ZERO), &DrawParams::default());

        assert_eq!(sink[0].source, Rect::new(16, 0, 8, 8));
        assert_eq!(sprite.kind(), SpriteKind::Animated);
    }

    #[test]
    fn test_clones_play_independently() {
        let mut a = walk();
        let b = a.clone();
        a.player_mut().play(None).unwrap();
        a.update(100.0);

        assert_eq!(a.player().frame_index(), 1);
        assert_eq!(b.player().frame_index(), 0);
        assert!(Arc::ptr_eq(a.player().definition(), b.player().definition()));
    }

    #[test]
    fn test_pixels_of_current_frame() {
        let sprite = walk();
        assert_eq!(sprite.pixels().unwrap().len(), 64);
    }
}
