use bevy_ecs::prelude::Component;

use crate::geometry::Rect;

/// Axis-aligned size of an entity, anchored at its [`MapPosition`] top-left.
///
/// [`MapPosition`]: crate::components::mapposition::MapPosition
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub width: f32,
    pub height: f32,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Bounds of the collider for an entity whose top-left is at `(x, y)`.
    pub fn bounds(&self, x: f32, y: f32) -> Rect {
        Rect::new(x, y, self.width, self.height)
    }
}
