//! Player-controlled movement tuning.
//!
//! [`InputControlled`] marks the actor driven by the input detector and holds
//! the speeds the controller turns intents into. The camera zone hook
//! switches `walk_speed` between `edge_walk_speed` and `center_walk_speed`.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct InputControlled {
    /// Current walking speed in pixels per tick.
    pub walk_speed: f32,
    /// Walking speed while the camera sits at the start or end of the scene.
    pub edge_walk_speed: f32,
    /// Walking speed while the camera scrolls in the centre zone.
    pub center_walk_speed: f32,
    /// Upward velocity applied when jumping.
    pub jump_speed: f32,
    /// Multiplier applied to `walk_speed` while sprinting.
    pub sprint_multiplier: f32,
    /// Sprint intent of the last tick; selects the faster walk cycle.
    pub sprinting: bool,
    /// Crouch intent of the last tick.
    pub crouching: bool,
}

impl InputControlled {
    pub fn new(walk_speed: f32, center_walk_speed: f32, jump_speed: f32) -> Self {
        Self {
            walk_speed,
            edge_walk_speed: walk_speed,
            center_walk_speed,
            jump_speed,
            sprint_multiplier: 2.0,
            sprinting: false,
            crouching: false,
        }
    }

    pub fn with_sprint_multiplier(mut self, multiplier: f32) -> Self {
        self.sprint_multiplier = multiplier;
        self
    }
}

impl Default for InputControlled {
    fn default() -> Self {
        Self::new(5.0, 7.0, 27.0)
    }
}
