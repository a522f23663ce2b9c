//! Animation playback state machine.
//!
//! A player owns its position within a shared [`AnimationDefinition`]: the
//! current frame index, the time already spent on that frame, the active
//! section and the direction it is currently stepping in. The game loop calls
//! [`AnimationPlayer::update`] once per tick; the render pass reads
//! [`AnimationPlayer::current_frame`].

use serde::Serialize;
use std::sync::Arc;

use super::definition::AnimationDefinition;
use super::frame::{AnimationDirection, Frame, Section};
use crate::core::config::PlaybackConfig;
use crate::core::error::{Result, SpriteError};

/// Playback states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
pub enum PlaybackState {
    /// Not playing; rewound to the first frame of the animation.
    #[default]
    Stopped,
    Playing,
    /// Not playing; frame and progress frozen in place.
    Paused,
    /// A non-looping playback reached the end of its cycle.
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
}

impl Step {
    fn for_direction(direction: AnimationDirection) -> Self {
        if direction.starts_forward() {
            Step::Forward
        } else {
            Step::Backward
        }
    }
}

/// Controls animation playback for a single sprite.
#[derive(Clone, Debug)]
pub struct AnimationPlayer {
    definition: Arc<AnimationDefinition>,
    section: Section,
    frame_index: usize,
    /// Milliseconds accumulated on the current frame.
    frame_progress: f64,
    step: Step,
    /// Set on entering a section that first steps backward from its start
    /// frame: the first boundary is a wrap or turn, not the end of a cycle.
    at_entry_edge: bool,
    state: PlaybackState,
    speed: f64,
    looping: bool,
    max_steps_per_update: u32,
}

impl AnimationPlayer {
    /// Create a stopped player on the definition's `default` section.
    pub fn new(definition: Arc<AnimationDefinition>) -> Self {
        let defaults = PlaybackConfig::default();
        let section = definition.default_section().clone();
        let frame_index = section.start_index;
        let step = Step::for_direction(section.direction);
        let at_entry_edge = !section.direction.starts_forward();

        Self {
            definition,
            section,
            frame_index,
            frame_progress: 0.0,
            step,
            at_entry_edge,
            state: PlaybackState::Stopped,
            speed: defaults.default_speed,
            looping: defaults.looping,
            max_steps_per_update: defaults.max_steps_per_update,
        }
    }

    /// Create a player using speed, looping and step cap from `config`.
    pub fn with_config(definition: Arc<AnimationDefinition>, config: &PlaybackConfig) -> Result<Self> {
        config.validate().map_err(SpriteError::InvalidArgument)?;

        let mut player = Self::new(definition);
        player.speed = config.default_speed;
        player.looping = config.looping;
        player.max_steps_per_update = config.max_steps_per_update;
        Ok(player)
    }

    /// Start playing.
    ///
    /// With a section name, switches to that section and rewinds to its
    /// start frame with zero progress, whatever its direction. Without one, resumes exactly where
    /// playback left off (a finished player rewinds its current section).
    pub fn play(&mut self, section_name: Option<&str>) -> Result<()> {
        match section_name {
            Some(name) => {
                let section = self.definition.section(name)?.clone();
                self.enter_section(section);
            }
            None => {
                if self.state == PlaybackState::Finished {
                    let section = self.section.clone();
                    self.enter_section(section);
                }
            }
        }

        self.state = PlaybackState::Playing;
        Ok(())
    }

    /// Freeze playback in place.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Stop playback and rewind to the first frame of the whole animation.
    ///
    /// The active section is kept; the next `play(None)` continues in it
    /// from frame 0.
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.frame_index = 0;
        self.frame_progress = 0.0;
    }

    /// Jump to a frame of the full frame table, ignoring sections.
    pub fn set_absolute_frame(&mut self, index: usize) -> Result<()> {
        self.definition.frame(index)?;
        self.frame_index = index;
        Ok(())
    }

    /// Set the playback speed multiplier. Must be positive.
    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        if speed <= 0.0 || !speed.is_finite() {
            return Err(SpriteError::InvalidArgument(format!(
                "speed must be a positive number, got {}",
                speed
            )));
        }
        self.speed = speed;
        Ok(())
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn reset_frame_progress(&mut self) {
        self.frame_progress = 0.0;
    }

    /// Advance playback by `elapsed_ms` milliseconds of game time.
    ///
    /// Returns true if at least one frame boundary was crossed.
    pub fn update(&mut self, elapsed_ms: f64) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        if elapsed_ms <= 0.0 || !elapsed_ms.is_finite() {
            return false;
        }

        self.frame_progress += elapsed_ms * self.speed;

        let mut steps = 0u32;
        while self.frame_progress >= self.frame_duration() as f64 {
            if steps == self.max_steps_per_update {
                tracing::warn!(
                    "Animation update exceeded {} frame steps, dropping {:.1}ms of progress",
                    self.max_steps_per_update,
                    self.frame_progress
                );
                self.frame_progress = 0.0;
                break;
            }

            self.frame_progress -= self.frame_duration() as f64;
            steps += 1;

            if !self.advance() {
                // Clamped on the final frame of a one-shot cycle
                self.frame_progress = 0.0;
                self.state = PlaybackState::Finished;
                break;
            }
        }

        steps > 0
    }

    /// Move one frame in the current step direction, handling section
    /// boundaries. Returns false when a non-looping cycle has ended.
    fn advance(&mut self) -> bool {
        let start = self.section.start_index;
        let end = self.section.end_index;

        let at_boundary = match self.step {
            Step::Forward => self.frame_index >= end,
            Step::Backward => self.frame_index <= start,
        };

        if !at_boundary {
            match self.step {
                Step::Forward => self.frame_index += 1,
                Step::Backward => self.frame_index -= 1,
            }
            self.at_entry_edge = false;
            return true;
        }

        // Reverse directions enter on the start frame stepping backward, so
        // their first boundary only wraps (or turns) into the section. After
        // that, a ping-pong sweep completes a cycle only on its return to the
        // start edge; the end edge is where it turns around.
        let entering = std::mem::take(&mut self.at_entry_edge);
        let completes_cycle = !entering
            && (!self.section.direction.is_ping_pong() || self.step == Step::Backward);

        if completes_cycle && !self.looping {
            self.frame_index = match self.step {
                Step::Forward => end,
                Step::Backward => start,
            };
            return false;
        }

        if self.section.direction.is_ping_pong() {
            if self.step == Step::Forward {
                self.frame_index = end.saturating_sub(1).max(start);
                self.step = Step::Backward;
            } else {
                self.frame_index = (start + 1).min(end);
                self.step = Step::Forward;
            }
        } else if self.step == Step::Forward {
            self.frame_index = start;
        } else {
            self.frame_index = end;
        }
        true
    }

    fn enter_section(&mut self, section: Section) {
        self.step = Step::for_direction(section.direction);
        self.at_entry_edge = !section.direction.starts_forward();
        self.frame_index = section.start_index;
        self.frame_progress = 0.0;
        self.section = section;
    }

    /// The frame to draw. Always within the frame table.
    pub fn current_frame(&self) -> &Frame {
        &self.definition.frames()[self.frame_index]
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame_progress(&self) -> f64 {
        self.frame_progress
    }

    /// Duration of the current frame in milliseconds.
    pub fn frame_duration(&self) -> u32 {
        self.current_frame().duration_ms
    }

    pub fn active_section(&self) -> &Section {
        &self.section
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_finished(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    /// +1 when stepping towards higher frame indices, -1 otherwise.
    pub fn step_direction(&self) -> i32 {
        match self.step {
            Step::Forward => 1,
            Step::Backward => -1,
        }
    }

    pub fn definition(&self) -> &Arc<AnimationDefinition> {
        &self.definition
    }
}
