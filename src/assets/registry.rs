//! Name-indexed sprites and animations, loaded from asset directories.
//!
//! The registry is an ordinary value owned by the caller. Loading walks the
//! asset directory recursively, classifies files by their name prefix (see
//! [`super::naming`]) and pairs atlases and animations with data files found
//! anywhere under the data directory. A broken asset is logged and reported
//! in the [`LoadReport`]; it never stops the others from loading.

use ahash::{AHashMap, AHashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::naming::{parse_asset_name, AssetKind};
use super::texture::{TextureHandle, TextureStore};
use crate::animation::{AnimationDefinition, AnimationPlayer};
use crate::core::config::{AssetConfig, PlaybackConfig, SpriteConfig};
use crate::core::error::{Result, SpriteError};
use crate::sprites::{AnimatedSprite, AtlasFile, ImageSprite, Sprite};

/// Outcome of a directory load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Names registered, in load order.
    pub loaded: Vec<String>,
    /// Asset files that failed, with the reason.
    pub failed: Vec<(PathBuf, SpriteError)>,
    /// Files ignored because they are not prefixed images.
    pub skipped: usize,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

struct AnimationEntry {
    texture: TextureHandle,
    definition: Arc<AnimationDefinition>,
}

/// Registry of loaded sprites and animation definitions.
#[derive(Default)]
pub struct AssetRegistry {
    sprites: AHashMap<String, Box<dyn Sprite>>,
    animations: AHashMap<String, AnimationEntry>,
    /// Applied to every player handed out by `get_animation`.
    playback: PlaybackConfig,
}

impl AssetRegistry {
    /// Create an empty registry with default playback settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry whose animations start with `playback`.
    pub fn with_playback(playback: PlaybackConfig) -> Result<Self> {
        playback.validate().map_err(SpriteError::Configuration)?;
        Ok(Self {
            playback,
            ..Self::default()
        })
    }

    /// Build a registry from a full configuration and load its asset
    /// directories.
    pub fn load(store: &mut dyn TextureStore, config: &SpriteConfig) -> Result<(Self, LoadReport)> {
        let mut registry = Self::with_playback(config.playback.clone())?;
        let report = registry.load_directory(store, &config.assets)?;
        Ok((registry, report))
    }

    /// Register a sprite. A name that is already taken keeps its first
    /// sprite and the call fails.
    pub fn insert_sprite(&mut self, name: impl Into<String>, sprite: Box<dyn Sprite>) -> Result<()> {
        let name = name.into();
        if self.sprites.contains_key(&name) {
            tracing::warn!("Duplicate sprite name '{}', keeping the first", name);
            return Err(SpriteError::Configuration(format!(
                "duplicate sprite name '{}'",
                name
            )));
        }
        self.sprites.insert(name, sprite);
        Ok(())
    }

    /// Register an animation. Duplicate names are rejected like sprites.
    pub fn insert_animation(
        &mut self,
        name: impl Into<String>,
        texture: TextureHandle,
        definition: Arc<AnimationDefinition>,
    ) -> Result<()> {
        let name = name.into();
        if self.animations.contains_key(&name) {
            tracing::warn!("Duplicate animation name '{}', keeping the first", name);
            return Err(SpriteError::Configuration(format!(
                "duplicate animation name '{}'",
                name
            )));
        }
        self.animations
            .insert(name, AnimationEntry { texture, definition });
        Ok(())
    }

    pub fn get_sprite(&self, name: &str) -> Option<&dyn Sprite> {
        match self.sprites.get(name) {
            Some(sprite) => Some(sprite.as_ref()),
            None => {
                tracing::warn!("Sprite '{}' was not found", name);
                None
            }
        }
    }

    /// A new, independently playing instance of a registered animation.
    ///
    /// Every call returns a fresh player (stopped on frame 0) sharing the
    /// registered definition and texture.
    pub fn get_animation(&self, name: &str) -> Option<AnimatedSprite> {
        let Some(entry) = self.animations.get(name) else {
            tracing::warn!("Animation '{}' was not found", name);
            return None;
        };

        let player = match AnimationPlayer::with_config(entry.definition.clone(), &self.playback) {
            Ok(player) => player,
            Err(e) => {
                tracing::warn!("Ignoring playback settings for '{}': {}", name, e);
                AnimationPlayer::new(entry.definition.clone())
            }
        };
        Some(AnimatedSprite::with_player(entry.texture.clone(), player))
    }

    pub fn animation_definition(&self, name: &str) -> Option<&Arc<AnimationDefinition>> {
        self.animations.get(name).map(|entry| &entry.definition)
    }

    /// Sprite names, sorted.
    pub fn sprite_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sprites.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Animation names, sorted.
    pub fn animation_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.animations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.sprites.len() + self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty() && self.animations.is_empty()
    }

    /// Load every prefixed image under `assets.asset_dir`.
    ///
    /// Fails only if the asset directory itself cannot be read.
    pub fn load_directory(
        &mut self,
        store: &mut dyn TextureStore,
        assets: &AssetConfig,
    ) -> Result<LoadReport> {
        let data_files = index_data_files(&assets.data_dir)?;

        let mut asset_paths = Vec::new();
        collect_files(&assets.asset_dir, &mut asset_paths)?;
        asset_paths.sort();

        let mut report = LoadReport::default();
        for path in asset_paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                report.skipped += 1;
                continue;
            };
            let Some((kind, name)) = parse_asset_name(stem) else {
                tracing::debug!("Skipping unprefixed file {}", path.display());
                report.skipped += 1;
                continue;
            };
            if image::ImageFormat::from_path(&path).is_err() {
                tracing::debug!("Skipping non-image file {}", path.display());
                report.skipped += 1;
                continue;
            }

            let data_path = data_files
                .get(&format!("{}.{}", stem, assets.data_extension))
                .map(PathBuf::as_path);

            match self.load_asset(store, kind, name, &path, data_path) {
                Ok(names) => {
                    tracing::info!("Loaded {} '{}' from {}", kind.prefix(), name, path.display());
                    report.loaded.extend(names);
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", path.display(), e);
                    report.failed.push((path, e));
                }
            }
        }

        tracing::info!(
            "Asset load finished: {} loaded, {} failed, {} skipped",
            report.loaded.len(),
            report.failed.len(),
            report.skipped
        );
        Ok(report)
    }

    fn load_asset(
        &mut self,
        store: &mut dyn TextureStore,
        kind: AssetKind,
        name: &str,
        path: &Path,
        data_path: Option<&Path>,
    ) -> Result<Vec<String>> {
        match kind {
            AssetKind::Static => {
                let texture = store.load(path)?;
                self.insert_sprite(name, Box::new(ImageSprite::new(texture)))?;
                Ok(vec![name.to_string()])
            }
            AssetKind::Atlas => {
                let texture = store.load(path)?;
                // Validate all regions and names before registering anything.
                let regions = match data_path {
                    Some(data_path) => AtlasFile::load(data_path)?.sprites(&texture)?,
                    None => Vec::new(),
                };

                let names: Vec<String> = std::iter::once(name)
                    .chain(regions.iter().map(|region| region.name()))
                    .map(str::to_string)
                    .collect();
                self.check_free_sprite_names(&names)?;

                self.insert_sprite(name, Box::new(ImageSprite::new(texture)))?;
                for region in regions {
                    let region_name = region.name().to_string();
                    self.insert_sprite(region_name, Box::new(region))?;
                }
                Ok(names)
            }
            AssetKind::Animation => {
                let data_path = data_path
                    .ok_or_else(|| SpriteError::not_found("Animation data", name))?;
                let definition = AnimationDefinition::load(data_path)?;
                let texture = store.load(path)?;
                self.insert_animation(name, texture, Arc::new(definition))?;
                Ok(vec![name.to_string()])
            }
        }
    }

    /// Fails if any of `names` is already registered or appears twice.
    fn check_free_sprite_names(&self, names: &[String]) -> Result<()> {
        let mut seen = AHashSet::with_capacity(names.len());
        for name in names {
            if self.sprites.contains_key(name) || !seen.insert(name.as_str()) {
                return Err(SpriteError::Configuration(format!(
                    "duplicate sprite name '{}'",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Map file name → path for everything under `dir`. A missing directory
/// yields an empty index.
fn index_data_files(dir: &Path) -> Result<AHashMap<String, PathBuf>> {
    let mut index = AHashMap::new();
    if !dir.is_dir() {
        tracing::warn!("Data directory {} does not exist", dir.display());
        return Ok(index);
    }

    let mut paths = Vec::new();
    collect_files(dir, &mut paths)?;
    paths.sort();

    for path in paths {
        let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if let Some(existing) = index.get(file_name) {
            tracing::warn!(
                "Data file {} shadowed by {}",
                path.display(),
                existing.display()
            );
            continue;
        }
        index.insert(file_name.to_string(), path);
    }
    Ok(index)
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}
