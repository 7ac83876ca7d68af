//! Camera follow system.
//!
//! Moves the [`SceneRoot`] so the [`CameraTarget`] stays in view and reports
//! zone changes through [`CameraZoneChangedEvent`].
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::events::camerazone::CameraZoneChangedEvent;
use crate::resources::camera::{
    CameraState, CameraTarget, SceneRoot, Viewport, classify_zone, scene_x_for,
};

/// Reposition the scene root relative to the target.
///
/// Skipped when the target is unset or no longer has a position. Only the
/// horizontal scroll changes; the scene keeps its vertical offset.
pub fn camera_follow(
    target: Res<CameraTarget>,
    positions: Query<&MapPosition>,
    viewport: Res<Viewport>,
    mut scene: ResMut<SceneRoot>,
    mut state: ResMut<CameraState>,
    mut commands: Commands,
) {
    let Some(entity) = target.0 else {
        return;
    };
    let Ok(pos) = positions.get(entity) else {
        return;
    };

    let zone = classify_zone(pos.x(), viewport.width, scene.width);
    scene.x = scene_x_for(zone, pos.x(), viewport.width, scene.width);

    if state.zone != Some(zone) {
        commands.trigger(CameraZoneChangedEvent {
            target: entity,
            from: state.zone,
            to: zone,
        });
        state.zone = Some(zone);
    }
}
