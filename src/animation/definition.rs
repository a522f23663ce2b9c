//! Immutable frame and section tables for one animation.
//!
//! Definitions are validated once at load time so that playback never has to
//! deal with empty frame lists, zero-length frames or sections pointing past
//! the end of the frame table.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::frame::{AnimationDirection, Frame, Section, DEFAULT_SECTION_NAME};
use crate::core::error::{Result, SpriteError};

/// On-disk layout of an animation definition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationFile {
    #[serde(alias = "Frames")]
    pub frames: Vec<Frame>,
    #[serde(default, alias = "Sections")]
    pub sections: Vec<Section>,
}

/// Validated frames and sections of an animation.
#[derive(Clone, Debug)]
pub struct AnimationDefinition {
    frames: Vec<Frame>,
    /// Sections in declaration order, `default` last unless declared.
    sections: Vec<Section>,
    by_name: AHashMap<String, usize>,
}

impl AnimationDefinition {
    /// Build a definition, adding a forward `default` section over all frames
    /// unless one is declared.
    pub fn new(frames: Vec<Frame>, sections: Vec<Section>) -> Result<Self> {
        if frames.is_empty() {
            return Err(SpriteError::Configuration(
                "animation has no frames".to_string(),
            ));
        }

        if let Some((index, _)) = frames
            .iter()
            .enumerate()
            .find(|(_, frame)| frame.duration_ms == 0)
        {
            return Err(SpriteError::Configuration(format!(
                "frame {} has a zero duration",
                index
            )));
        }

        let mut definition = Self {
            frames,
            sections: Vec::with_capacity(sections.len() + 1),
            by_name: AHashMap::new(),
        };

        for section in sections {
            definition.add_section(section)?;
        }

        if !definition.by_name.contains_key(DEFAULT_SECTION_NAME) {
            let last = definition.frames.len() - 1;
            definition.add_section(Section::new(
                DEFAULT_SECTION_NAME,
                0,
                last,
                AnimationDirection::Forward,
            ))?;
        }

        Ok(definition)
    }

    /// Build a definition that only has the implicit `default` section.
    pub fn from_frames(frames: Vec<Frame>) -> Result<Self> {
        Self::new(frames, Vec::new())
    }

    pub fn from_file(file: AnimationFile) -> Result<Self> {
        Self::new(file.frames, file.sections)
    }

    /// Parse a definition from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: AnimationFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Load a definition from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Override the direction of the `default` section.
    pub fn with_default_direction(mut self, direction: AnimationDirection) -> Self {
        if let Some(&index) = self.by_name.get(DEFAULT_SECTION_NAME) {
            self.sections[index].direction = direction;
        }
        self
    }

    fn add_section(&mut self, section: Section) -> Result<()> {
        let count = self.frames.len();

        if section.start_index > section.end_index {
            return Err(SpriteError::Configuration(format!(
                "section '{}' starts after it ends ({} > {})",
                section.name, section.start_index, section.end_index
            )));
        }

        if section.end_index >= count {
            return Err(SpriteError::Configuration(format!(
                "section '{}' ends at frame {} but the animation has {} frames",
                section.name, section.end_index, count
            )));
        }

        if self.by_name.contains_key(&section.name) {
            return Err(SpriteError::Configuration(format!(
                "duplicate section '{}'",
                section.name
            )));
        }

        self.by_name.insert(section.name.clone(), self.sections.len());
        self.sections.push(section);
        Ok(())
    }

    /// Look up a section by name.
    pub fn section(&self, name: &str) -> Result<&Section> {
        self.by_name
            .get(name)
            .map(|&index| &self.sections[index])
            .ok_or_else(|| SpriteError::not_found("Section", name))
    }

    pub fn default_section(&self) -> &Section {
        // Always present: inserted by the constructor
        &self.sections[self.by_name[DEFAULT_SECTION_NAME]]
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn frame(&self, index: usize) -> Result<&Frame> {
        self.frames.get(index).ok_or(SpriteError::OutOfRange {
            index,
            len: self.frames.len(),
        })
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Sum of all frame durations.
    pub fn total_duration_ms(&self) -> u64 {
        self.frames.iter().map(|f| f.duration_ms as u64).sum()
    }

    /// Time taken by one pass over a section's frames.
    pub fn section_duration_ms(&self, name: &str) -> Result<u64> {
        let section = self.section(name)?;
        Ok(self.frames[section.start_index..=section.end_index]
            .iter()
            .map(|f| f.duration_ms as u64)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Rect;

    fn frames(durations: &[u32]) -> Vec<Frame> {
        durations
            .iter()
            .enumerate()
            .map(|(i, &d)| Frame::new(Rect::new(i as i32 * 16, 0, 16, 16), d))
            .collect()
    }

    #[test]
    fn test_implicit_default_section() {
        let def = AnimationDefinition::from_frames(frames(&[100, 200, 150])).unwrap();
        let default = def.default_section();
        assert_eq!(default.start_index, 0);
        assert_eq!(default.end_index, 2);
        assert_eq!(default.direction, AnimationDirection::Forward);
        assert_eq!(def.total_duration_ms(), 450);
    }

    #[test]
    fn test_declared_default_overrides() {
        let def = AnimationDefinition::new(
            frames(&[100, 100, 100]),
            vec![Section::new("default", 1, 2, AnimationDirection::PingPong)],
        )
        .unwrap();
        assert_eq!(def.sections().len(), 1);
        assert_eq!(def.default_section().direction, AnimationDirection::PingPong);
        assert_eq!(def.default_section().start_index, 1);
    }

    #[test]
    fn test_with_default_direction() {
        let def = AnimationDefinition::from_frames(frames(&[10, 10]))
            .unwrap()
            .with_default_direction(AnimationDirection::Reverse);
        assert_eq!(def.default_section().direction, AnimationDirection::Reverse);
    }

    #[test]
    fn test_section_lookup_not_found() {
        let def = AnimationDefinition::new(
            frames(&[10, 10, 10]),
            vec![Section::new("walk", 0, 1, AnimationDirection::Forward)],
        )
        .unwrap();
        assert!(def.section("walk").is_ok());
        assert!(matches!(
            def.section("wlak"),
            Err(SpriteError::NotFound { kind: "Section", .. })
        ));
    }

    #[test]
    fn test_rejects_empty_frames() {
        assert!(matches!(
            AnimationDefinition::from_frames(Vec::new()),
            Err(SpriteError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_zero_duration() {
        assert!(matches!(
            AnimationDefinition::from_frames(frames(&[100, 0, 100])),
            Err(SpriteError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_bounds_section() {
        let result = AnimationDefinition::new(
            frames(&[10, 10, 10]),
            vec![Section::new("run", 1, 3, AnimationDirection::Forward)],
        );
        assert!(matches!(result, Err(SpriteError::Configuration(_))));
    }

    #[test]
    fn test_rejects_inverted_section() {
        let result = AnimationDefinition::new(
            frames(&[10, 10, 10]),
            vec![Section::new("run", 2, 1, AnimationDirection::Forward)],
        );
        assert!(matches!(result, Err(SpriteError::Configuration(_))));
    }

    #[test]
    fn test_rejects_duplicate_section() {
        let result = AnimationDefinition::new(
            frames(&[10, 10, 10]),
            vec![
                Section::new("run", 0, 1, AnimationDirection::Forward),
                Section::new("run", 1, 2, AnimationDirection::Reverse),
            ],
        );
        assert!(matches!(result, Err(SpriteError::Configuration(_))));
    }

    #[test]
    fn test_frame_out_of_range() {
        let def = AnimationDefinition::from_frames(frames(&[10, 10])).unwrap();
        assert!(def.frame(1).is_ok());
        assert!(matches!(
            def.frame(2),
            Err(SpriteError::OutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_section_duration() {
        let def = AnimationDefinition::new(
            frames(&[100, 200, 150, 50]),
            vec![Section::new("mid", 1, 2, AnimationDirection::Forward)],
        )
        .unwrap();
        assert_eq!(def.section_duration_ms("mid").unwrap(), 350);
        assert_eq!(def.section_duration_ms("default").unwrap(), 500);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "frames": [
                { "sourceRegion": { "x": 0, "y": 0, "w": 16, "h": 16 }, "durationMs": 100 },
                { "sourceRegion": { "x": 16, "y": 0, "w": 16, "h": 16 }, "durationMs": 100 },
                { "sourceRegion": { "x": 32, "y": 0, "w": 16, "h": 16 }, "durationMs": 120 }
            ],
            "sections": [
                { "name": "blink", "startIndex": 1, "endIndex": 2, "direction": "PingPong" }
            ]
        }"#;
        let def = AnimationDefinition::from_json(json).unwrap();
        assert_eq!(def.frame_count(), 3);
        assert_eq!(def.section("blink").unwrap().direction, AnimationDirection::PingPong);
        assert!(def.section("default").is_ok());
    }

    #[test]
    fn test_from_legacy_json() {
        let json = r#"{
            "Frames": [
                { "SourceRectangle": { "x": 0, "y": 0, "w": 8, "h": 8 }, "Duration": 80 },
                { "SourceRectangle": { "x": 8, "y": 0, "w": 8, "h": 8 }, "Duration": 80 }
            ],
            "Sections": [
                { "Name": "all", "StartIndex": 0, "EndIndex": 1, "Direction": "Reverse" }
            ]
        }"#;
        let def = AnimationDefinition::from_json(json).unwrap();
        assert_eq!(def.section("all").unwrap().direction, AnimationDirection::Reverse);
    }
}
