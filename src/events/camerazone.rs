//! Camera zone change notification.
//!
//! [`camera_follow`](crate::systems::camera::camera_follow) triggers
//! [`CameraZoneChangedEvent`] whenever the followed entity crosses into a
//! different [`CameraZone`], including the very first classification.
//!
//! [`observe_zone_walk_speed`] slows the player down while the scene is
//! pinned at either end and speeds it up while the camera scrolls.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::inputcontrolled::InputControlled;
use crate::resources::camera::CameraZone;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraZoneChangedEvent {
    /// Entity followed by the camera.
    pub target: Entity,
    /// Previous zone, `None` on the first camera update.
    pub from: Option<CameraZone>,
    pub to: CameraZone,
}

/// Switch the target's walk speed between its edge and centre values.
pub fn observe_zone_walk_speed(
    trigger: On<CameraZoneChangedEvent>,
    mut controlled: Query<&mut InputControlled>,
) {
    let event = trigger.event();
    let Ok(mut ctl) = controlled.get_mut(event.target) else {
        return;
    };
    ctl.walk_speed = match event.to {
        CameraZone::Center => ctl.center_walk_speed,
        CameraZone::Start | CameraZone::End => ctl.edge_walk_speed,
    };
    info!(
        "Camera zone {:?} -> {:?}, walk speed {}",
        event.from, event.to, ctl.walk_speed
    );
}
