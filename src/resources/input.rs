//! Per-tick input detector resource.
//!
//! The detector itself (keyboard, gamepad, replay file) lives outside the
//! core. Each tick it hands over an [`InputIntents`] record which is folded
//! into the [`InputState`] resource; systems read the resource and never
//! mutate it.
//!
//! [`InputScript`] is a detector for headless runs: a JSON timeline of
//! intents keyed by tick ranges.
//!
//! ```json
//! {
//!   "segments": [
//!     { "from": 0,  "to": 120, "intents": { "right": true } },
//!     { "from": 60, "to": 62,  "intents": { "right": true, "up": true } }
//!   ]
//! }
//! ```
//! Later segments override earlier ones where ranges overlap.
use std::path::Path;

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Boolean intents produced by the input detector for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputIntents {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub sprint: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean key state with edge information.
pub struct BoolState {
    /// Whether the intent is active this tick.
    pub active: bool,
    /// Whether the intent became active this tick.
    pub just_pressed: bool,
    /// Whether the intent stopped being active this tick.
    pub just_released: bool,
}

impl BoolState {
    fn update(&mut self, active: bool) {
        self.just_pressed = active && !self.active;
        self.just_released = !active && self.active;
        self.active = active;
    }
}

/// Resource capturing the intents relevant to the controlled actor.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub up: BoolState,
    pub down: BoolState,
    pub sprint: BoolState,
}

impl InputState {
    /// Fold this tick's intents into the state, updating press/release edges.
    pub fn apply(&mut self, intents: InputIntents) {
        self.left.update(intents.left);
        self.right.update(intents.right);
        self.up.update(intents.up);
        self.down.update(intents.down);
        self.sprint.update(intents.sprint);
    }
}

/// Intents active over the tick range `from..to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSegment {
    pub from: u64,
    pub to: u64,
    pub intents: InputIntents,
}

/// Timeline of intents for headless runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputScript {
    pub segments: Vec<InputSegment>,
}

impl InputScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segment(mut self, from: u64, to: u64, intents: InputIntents) -> Self {
        self.segments.push(InputSegment { from, to, intents });
        self
    }

    /// Load a script from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read input script {}: {}", path.display(), e))?;
        Self::from_json(&json)
            .map_err(|e| format!("Failed to parse input script {}: {}", path.display(), e))
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Intents for `tick`; no intents outside every segment.
    pub fn intents_at(&self, tick: u64) -> InputIntents {
        self.segments
            .iter()
            .rev()
            .find(|s| s.from <= tick && tick < s.to)
            .map(|s| s.intents)
            .unwrap_or_default()
    }
}
