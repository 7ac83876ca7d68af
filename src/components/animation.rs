//! Per-actor animation state.
//!
//! An actor plays one *label* at a time. A label names a clip configuration
//! (`fps`, frame count, loop flag). Re-requesting the label that is already
//! playing is a no-op, which is how a walk cycle keeps running while the
//! actor keeps walking in the same direction.
//!
//! Frames advance on ticks, not on wall-clock time, and every clip wraps back
//! to frame 0 after its last frame. `frame_tick` is
//! `1000 / fps / 20`: the `/ 20` calibrates clip rates against the engine's
//! assumed outer loop rate and must stay as is for clips to keep their pace.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Tick-rate calibration divisor applied to every clip.
pub const FRAME_TICK_DIVISOR: f32 = 20.0;

/// Label of the walking-right cycle.
pub const WALK_RIGHT: &str = "walk_right";
/// Label of the walking-left cycle.
pub const WALK_LEFT: &str = "walk_left";
/// Label used while standing still or airborne.
pub const IDLE: &str = "idle";

/// Immutable clip parameters selected through a label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub fps: f32,
    pub frame_count: usize,
    pub looped: bool,
}

impl AnimationClip {
    pub const fn new(fps: f32, frame_count: usize, looped: bool) -> Self {
        Self {
            fps,
            frame_count,
            looped,
        }
    }
}

/// Result of [`Animation::setup_frames`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The label was already playing; nothing was reset.
    AlreadyConfigured,
    /// The clip was (re)started.
    Configured,
}

#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub current_label: String,
    pub current_frame: usize,
    /// Ticks between two frame steps. Zero disables playback.
    pub frame_tick: f32,
    pub frame_accumulator: f32,
    pub total_frames: usize,
    /// Recorded with the clip. Playback wraps either way.
    pub looped: bool,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            current_label: String::new(),
            current_frame: 0,
            frame_tick: 0.0,
            frame_accumulator: 0.0,
            total_frames: 0,
            looped: true,
        }
    }
}

impl Animation {
    /// Animation already playing `label` with `clip`.
    pub fn with_clip(label: impl Into<String>, clip: AnimationClip) -> Self {
        let mut anim = Self::default();
        anim.setup_frames(clip.fps, clip.frame_count, clip.looped, label);
        anim
    }

    /// Configure the clip for `label` unless it is already the current one.
    pub fn setup_frames(
        &mut self,
        fps: f32,
        frame_count: usize,
        looped: bool,
        label: impl Into<String>,
    ) -> SetupOutcome {
        let label = label.into();
        if !label.is_empty() {
            if self.current_label == label {
                return SetupOutcome::AlreadyConfigured;
            }
            self.current_label = label;
        }

        self.current_frame = if frame_count > 1 { 1 } else { 0 };
        self.frame_tick = if frame_count > 0 && fps > 0.0 {
            1000.0 / fps / FRAME_TICK_DIVISOR
        } else {
            0.0
        };
        self.frame_accumulator = 0.0;
        self.total_frames = frame_count;
        self.looped = looped;
        SetupOutcome::Configured
    }

    /// [`setup_frames`](Self::setup_frames) taking the parameters from a clip.
    pub fn play_clip(&mut self, label: &str, clip: AnimationClip) -> SetupOutcome {
        self.setup_frames(clip.fps, clip.frame_count, clip.looped, label)
    }

    /// Start `clip` under `label` from its first frame, even if `label` is
    /// already playing.
    pub fn restart(&mut self, label: &str, clip: AnimationClip) {
        self.current_label.clear();
        self.play_clip(label, clip);
    }

    /// Advance by one tick.
    ///
    /// Returns the frame index to draw when a frame step happens this tick.
    pub fn advance(&mut self) -> Option<usize> {
        if self.frame_tick <= 0.0 {
            return None;
        }
        self.frame_accumulator += 1.0;
        if self.frame_accumulator < self.frame_tick {
            return None;
        }
        self.frame_accumulator = 0.0;

        if self.current_frame >= self.total_frames {
            self.current_frame = 0;
        }

        let frame = self.current_frame;
        self.current_frame += 1;
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn setup_computes_tick_and_first_frame() {
        let mut anim = Animation::default();
        let outcome = anim.setup_frames(4.0, 2, true, WALK_RIGHT);
        assert_eq!(outcome, SetupOutcome::Configured);
        assert_eq!(anim.current_label, WALK_RIGHT);
        assert_eq!(anim.current_frame, 1);
        assert!(approx_eq(anim.frame_tick, 12.5));
        assert_eq!(anim.total_frames, 2);
        assert!(anim.looped);
    }

    #[test]
    fn single_frame_clip_starts_at_zero() {
        let mut anim = Animation::default();
        anim.setup_frames(1.0, 1, true, IDLE);
        assert_eq!(anim.current_frame, 0);
        assert!(approx_eq(anim.frame_tick, 50.0));
    }

    #[test]
    fn zero_frames_disable_playback() {
        let mut anim = Animation::default();
        anim.setup_frames(10.0, 0, true, "empty");
        assert_eq!(anim.frame_tick, 0.0);
        for _ in 0..100 {
            assert_eq!(anim.advance(), None);
        }
    }

    #[test]
    fn same_label_is_already_configured() {
        let mut anim = Animation::default();
        anim.setup_frames(4.0, 2, true, WALK_RIGHT);
        for _ in 0..5 {
            anim.advance();
        }
        let frame = anim.current_frame;
        let acc = anim.frame_accumulator;

        let outcome = anim.setup_frames(8.0, 2, true, WALK_RIGHT);
        assert_eq!(outcome, SetupOutcome::AlreadyConfigured);
        assert_eq!(anim.current_frame, frame);
        assert!(approx_eq(anim.frame_accumulator, acc));
        assert!(approx_eq(anim.frame_tick, 12.5));
    }

    #[test]
    fn new_label_resets_progress() {
        let mut anim = Animation::default();
        anim.setup_frames(4.0, 2, true, WALK_RIGHT);
        for _ in 0..5 {
            anim.advance();
        }
        assert_eq!(
            anim.play_clip(IDLE, AnimationClip::new(1.0, 1, true)),
            SetupOutcome::Configured
        );
        assert_eq!(anim.current_frame, 0);
        assert_eq!(anim.frame_accumulator, 0.0);
    }

    #[test]
    fn advance_steps_every_frame_tick_and_wraps() {
        // 20 fps -> frame_tick = 2.5 ticks
        let mut anim = Animation::with_clip("run", AnimationClip::new(20.0, 2, true));
        assert_eq!(anim.current_frame, 1);

        let drawn: Vec<Option<usize>> = (0..9).map(|_| anim.advance()).collect();
        assert_eq!(
            drawn,
            vec![None, None, Some(1), None, None, Some(0), None, None, Some(1)]
        );
    }

    #[test]
    fn non_looping_clip_still_wraps() {
        // 50 fps -> frame_tick = 1 tick
        let mut anim = Animation::with_clip("once", AnimationClip::new(50.0, 3, false));
        let drawn: Vec<Option<usize>> = (0..5).map(|_| anim.advance()).collect();
        assert_eq!(drawn, vec![Some(1), Some(2), Some(0), Some(1), Some(2)]);
        assert!(!anim.looped);
    }

    #[test]
    fn restart_resets_the_playing_label() {
        let mut anim = Animation::with_clip(IDLE, AnimationClip::new(1.0, 1, true));
        for _ in 0..15 {
            anim.advance();
        }
        assert!(approx_eq(anim.frame_accumulator, 15.0));

        anim.restart(IDLE, AnimationClip::new(1.0, 1, true));
        assert_eq!(anim.current_label, IDLE);
        assert_eq!(anim.current_frame, 0);
        assert_eq!(anim.frame_accumulator, 0.0);
    }
}
