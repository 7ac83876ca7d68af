use bevy_ecs::prelude::Component;

/// Canonical position an actor is reset to after leaving the playfield.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
}

impl SpawnPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
