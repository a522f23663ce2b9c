//! File-name prefix convention used to classify assets.
//!
//! `static_tree.png` is a static image named `tree`, `atlas_tiles.png` an
//! atlas named `tiles`, `anim_walk.png` an animation named `walk`.

const PREFIX_DELIMITER: char = '_';

/// What a prefixed asset file contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Static,
    Atlas,
    Animation,
}

impl AssetKind {
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "static" => Some(AssetKind::Static),
            "atlas" => Some(AssetKind::Atlas),
            "anim" => Some(AssetKind::Animation),
            _ => None,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            AssetKind::Static => "static",
            AssetKind::Atlas => "atlas",
            AssetKind::Animation => "anim",
        }
    }
}

/// Split a file stem into its kind and asset name.
///
/// Returns `None` for stems without a delimiter, with an unknown prefix, or
/// with nothing after the delimiter.
pub fn parse_asset_name(stem: &str) -> Option<(AssetKind, &str)> {
    let (prefix, name) = stem.split_once(PREFIX_DELIMITER)?;
    let kind = AssetKind::from_prefix(prefix)?;
    if name.is_empty() {
        return None;
    }
    Some((kind, name))
}
