//! Named regions of a shared texture.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{Sprite, SpriteKind};
use crate::assets::texture::TextureHandle;
use crate::core::error::{Result, SpriteError};
use crate::core::types::Rect;

/// One named region in an atlas data file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasRegion {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl AtlasRegion {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// Atlas data file: `{"regions": [{"name", "x", "y", "w", "h"}, ...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasFile {
    #[serde(default)]
    pub regions: Vec<AtlasRegion>,
}

impl AtlasFile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Build one sprite per region, rejecting regions that leave the texture.
    pub fn sprites(&self, texture: &TextureHandle) -> Result<Vec<AtlasSprite>> {
        self.regions
            .iter()
            .map(|region| AtlasSprite::new(region.name.clone(), texture.clone(), region.rect()))
            .collect()
    }
}

/// A sprite showing a fixed region of an atlas texture.
#[derive(Clone, Debug)]
pub struct AtlasSprite {
    name: String,
    texture: TextureHandle,
    region: Rect,
}

impl AtlasSprite {
    pub fn new(name: impl Into<String>, texture: TextureHandle, region: Rect) -> Result<Self> {
        let name = name.into();
        if region.is_empty() || !texture.bounds().contains_rect(&region) {
            return Err(SpriteError::InvalidArgument(format!(
                "atlas region '{}' {:?} is outside texture '{}' ({}x{})",
                name,
                region,
                texture.name(),
                texture.width(),
                texture.height()
            )));
        }
        Ok(Self {
            name,
            texture,
            region,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Sprite for AtlasSprite {
    fn kind(&self) -> SpriteKind {
        SpriteKind::Atlas
    }

    fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    fn source_region(&self) -> Rect {
        self.region
    }
}
