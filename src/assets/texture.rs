//! CPU-side textures and the store that loads them.
//!
//! Pixel data is kept only so that sprites can copy out the colours of their
//! source region; uploading to a GPU is the renderer's business.

use ahash::AHashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::error::{Result, SpriteError};
use crate::core::types::{pixel_index, Color, Rect};

/// Shared, immutable texture.
pub type TextureHandle = Arc<Texture>;

/// Decoded RGBA8 image.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    name: String,
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Texture {
    /// Create a texture from raw RGBA bytes (4 bytes per pixel, row-major).
    pub fn from_rgba(name: impl Into<String>, width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(SpriteError::InvalidArgument(format!(
                "expected {} bytes for a {}x{} RGBA texture, got {}",
                expected,
                width,
                height,
                bytes.len()
            )));
        }

        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Color::rgba(c[0], c[1], c[2], c[3]))
            .collect();

        Ok(Self {
            name: name.into(),
            width,
            height,
            pixels,
        })
    }

    /// Create a single-colour texture.
    pub fn solid(name: impl Into<String>, width: u32, height: u32, color: Color) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Decode an image file.
    pub fn load(path: &Path) -> Result<Self> {
        let img = image::open(path)?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_rgba(name, width, height, rgba.as_raw())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Rectangle covering the whole texture.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(pixel_index(x, y, self.width)).copied()
    }

    /// Copy the colours of `region`, row by row.
    ///
    /// Fails with `OutOfRange` if the region does not lie inside the texture.
    pub fn region_pixels(&self, region: Rect) -> Result<Vec<Color>> {
        if region.w < 0 || region.h < 0 || !self.bounds().contains_rect(&region) {
            let overflow = region.right().max(region.bottom()).max(0) as usize;
            return Err(SpriteError::OutOfRange {
                index: overflow,
                len: self.width.max(self.height) as usize,
            });
        }

        let mut out = Vec::with_capacity(region.area());
        for y in region.top()..region.bottom() {
            let row = pixel_index(region.x as u32, y as u32, self.width);
            out.extend_from_slice(&self.pixels[row..row + region.w as usize]);
        }
        Ok(out)
    }
}

/// Source of textures for the asset loaders.
pub trait TextureStore {
    fn load(&mut self, path: &Path) -> Result<TextureHandle>;
}

/// Decodes image files from disk, caching one handle per path.
#[derive(Debug, Default)]
pub struct FileTextureStore {
    cache: AHashMap<PathBuf, TextureHandle>,
}

impl FileTextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl TextureStore for FileTextureStore {
    fn load(&mut self, path: &Path) -> Result<TextureHandle> {
        if let Some(handle) = self.cache.get(path) {
            return Ok(handle.clone());
        }

        let texture = Arc::new(Texture::load(path)?);
        tracing::debug!(
            "Loaded texture {} ({}x{})",
            path.display(),
            texture.width(),
            texture.height()
        );
        self.cache.insert(path.to_path_buf(), texture.clone());
        Ok(texture)
    }
}
