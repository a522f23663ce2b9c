//! Frame and section records as stored in animation definition files.

use serde::{Deserialize, Serialize};

use crate::core::types::Rect;

/// Name of the section that spans the whole animation.
pub const DEFAULT_SECTION_NAME: &str = "default";

/// One still image region plus how long it stays on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Region of the texture shown for this frame.
    #[serde(rename = "sourceRegion", alias = "SourceRectangle")]
    pub source_region: Rect,
    /// Display time in milliseconds. Must be positive.
    #[serde(rename = "durationMs", alias = "Duration")]
    pub duration_ms: u32,
}

impl Frame {
    pub const fn new(source_region: Rect, duration_ms: u32) -> Self {
        Self {
            source_region,
            duration_ms,
        }
    }
}

/// Order in which a section's frames are visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnimationDirection {
    #[default]
    Forward,
    Reverse,
    PingPong,
    ReversePingPong,
}

impl AnimationDirection {
    /// Whether playback first steps towards higher frame indices.
    pub fn starts_forward(self) -> bool {
        matches!(self, AnimationDirection::Forward | AnimationDirection::PingPong)
    }

    pub fn is_ping_pong(self) -> bool {
        matches!(
            self,
            AnimationDirection::PingPong | AnimationDirection::ReversePingPong
        )
    }
}

/// A named, inclusive sub-range of frames with its own direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(rename = "startIndex", alias = "StartIndex")]
    pub start_index: usize,
    #[serde(rename = "endIndex", alias = "EndIndex")]
    pub end_index: usize,
    #[serde(default, alias = "Direction")]
    pub direction: AnimationDirection,
}

impl Section {
    pub fn new(
        name: impl Into<String>,
        start_index: usize,
        end_index: usize,
        direction: AnimationDirection,
    ) -> Self {
        Self {
            name: name.into(),
            start_index,
            end_index,
            direction,
        }
    }

    /// Number of frames in the section.
    pub fn frame_count(&self) -> usize {
        self.end_index.saturating_sub(self.start_index) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_json() {
        let frame: Frame =
            serde_json::from_str(r#"{"sourceRegion":{"x":16,"y":0,"w":16,"h":16},"durationMs":100}"#)
                .unwrap();
        assert_eq!(frame, Frame::new(Rect::new(16, 0, 16, 16), 100));
    }

    #[test]
    fn test_frame_legacy_keys() {
        let frame: Frame =
            serde_json::from_str(r#"{"SourceRectangle":{"x":0,"y":8,"w":8,"h":8},"Duration":50}"#)
                .unwrap();
        assert_eq!(frame.source_region, Rect::new(0, 8, 8, 8));
        assert_eq!(frame.duration_ms, 50);
    }

    #[test]
    fn test_section_direction_strings() {
        let section: Section = serde_json::from_str(
            r#"{"name":"walk","startIndex":2,"endIndex":5,"direction":"ReversePingPong"}"#,
        )
        .unwrap();
        assert_eq!(section.direction, AnimationDirection::ReversePingPong);
        assert_eq!(section.frame_count(), 4);

        let section: Section =
            serde_json::from_str(r#"{"Name":"idle","StartIndex":0,"EndIndex":1}"#).unwrap();
        assert_eq!(section.direction, AnimationDirection::Forward);
    }

    #[test]
    fn test_unknown_direction_rejected() {
        let result: Result<Section, _> = serde_json::from_str(
            r#"{"name":"x","startIndex":0,"endIndex":0,"direction":"Sideways"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_direction_helpers() {
        assert!(AnimationDirection::Forward.starts_forward());
        assert!(AnimationDirection::PingPong.starts_forward());
        assert!(!AnimationDirection::Reverse.starts_forward());
        assert!(!AnimationDirection::ReversePingPong.starts_forward());

        assert!(AnimationDirection::PingPong.is_ping_pong());
        assert!(AnimationDirection::ReversePingPong.is_ping_pong());
        assert!(!AnimationDirection::Reverse.is_ping_pong());
    }
}
