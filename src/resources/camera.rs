//! Side-scrolling camera resources.
//!
//! The camera never moves itself: it follows a target entity by moving the
//! [`SceneRoot`] (the layer every world entity is drawn relative to). The
//! target's horizontal position is classified into three [`CameraZone`]s:
//!
//! | zone     | target x                                   | scene root x          |
//! |----------|--------------------------------------------|-----------------------|
//! | `Start`  | `0 <= x < vw/3`                            | `0`                   |
//! | `Center` | `vw/3 <= x < scene_width - 2*vw/3`         | `-x + round(vw/3)`    |
//! | `End`    | anything else                              | `-scene_width + vw`   |

use bevy_ecs::prelude::{Entity, Resource};
use serde::{Deserialize, Serialize};

/// Entity followed by the camera. The scene does not own it; a despawned
/// target simply stops the camera from updating.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraTarget(pub Option<Entity>);

/// Visible area of the scene.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
}

/// Root layer of the scene. Its position is the scroll offset.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneRoot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SceneRoot {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraZone {
    Start,
    Center,
    End,
}

/// Zone of the last camera update, `None` before the first one.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraState {
    pub zone: Option<CameraZone>,
}

/// Classify the target's horizontal position.
pub fn classify_zone(target_x: f32, viewport_width: f32, scene_width: f32) -> CameraZone {
    let third = viewport_width / 3.0;
    if target_x >= 0.0 && target_x < third {
        CameraZone::Start
    } else if target_x >= third && target_x + 2.0 * third < scene_width {
        CameraZone::Center
    } else {
        CameraZone::End
    }
}

/// Horizontal scene root position for `zone`.
pub fn scene_x_for(zone: CameraZone, target_x: f32, viewport_width: f32, scene_width: f32) -> f32 {
    match zone {
        CameraZone::Start => 0.0,
        CameraZone::Center => -target_x + (viewport_width / 3.0).round(),
        CameraZone::End => -scene_width + viewport_width,
    }
}
