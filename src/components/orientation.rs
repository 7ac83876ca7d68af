use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Facing of an actor, used to pick the row of its sprite sheet.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    None,
    Left,
    Up,
    #[default]
    Right,
    Down,
}
