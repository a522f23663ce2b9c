//! Frame-based sprite animation: definitions and playback.

pub mod definition;
pub mod frame;
pub mod player;

pub use definition::{AnimationDefinition, AnimationFile};
pub use frame::{AnimationDirection, Frame, Section, DEFAULT_SECTION_NAME};
pub use player::{AnimationPlayer, PlaybackState};
