//! Textures, asset naming and the asset registry.

pub mod naming;
pub mod registry;
pub mod texture;

pub use naming::{parse_asset_name, AssetKind};
pub use registry::{AssetRegistry, LoadReport};
pub use texture::{FileTextureStore, Texture, TextureHandle, TextureStore};
