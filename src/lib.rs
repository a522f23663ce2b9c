//! Pixel Sprites - sprite animation playback for 2D pixel-art games

pub mod animation;
pub mod assets;
pub mod core;
pub mod sprites;

pub use animation::{AnimationDefinition, AnimationDirection, AnimationPlayer, Frame, PlaybackState, Section};
pub use assets::{AssetRegistry, FileTextureStore, Texture, TextureHandle, TextureStore};
pub use crate::core::config::SpriteConfig;
pub use crate::core::error::{Result, SpriteError};
pub use crate::core::types::{Color, Rect};
pub use sprites::{AnimatedSprite, AtlasSprite, DrawCommand, DrawParams, DrawSink, DrawTarget, ImageSprite, Sprite};
