//! Death/respawn hook.
//!
//! The physics system triggers [`ActorLeftPlayfieldEvent`] on the tick an
//! actor's grid row first passes below the bottom of the map. The event fires
//! once per exit; it is raised again only after the actor has been brought
//! back inside the grid.
//!
//! [`observe_respawn`] is the game's reaction: the actor goes back to its
//! [`SpawnPoint`] at rest, facing right, showing its idle frame.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::animation::{Animation, IDLE};
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::orientation::Orientation;
use crate::components::rigidbody::RigidBody;
use crate::components::spawnpoint::SpawnPoint;
use crate::components::sprite::{FrameTable, Sprite};
use crate::resources::framesink::FrameOutput;
use crate::resources::tilegrid::TileGrid;
use crate::systems::animation::{IDLE_CLIP, show_frame};

/// An actor's grid row went below the last row of the map.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorLeftPlayfieldEvent {
    pub entity: Entity,
    /// Tick on which the exit happened.
    pub tick: u64,
}

/// Reset the fallen actor to its spawn state.
///
/// Actors without a [`SpawnPoint`] are left alone.
#[allow(clippy::type_complexity)]
pub fn observe_respawn(
    trigger: On<ActorLeftPlayfieldEvent>,
    mut actors: Query<(
        &SpawnPoint,
        &BoxCollider,
        &mut MapPosition,
        &mut RigidBody,
        &mut Orientation,
        Option<&mut Animation>,
        Option<&mut Sprite>,
        Option<&FrameTable>,
    )>,
    grid: Res<TileGrid>,
    mut output: Option<ResMut<FrameOutput>>,
) {
    let event = trigger.event();
    let Ok((spawn, collider, mut pos, mut rb, mut orientation, anim, sprite, table)) =
        actors.get_mut(event.entity)
    else {
        return;
    };

    pos.set(spawn.x, spawn.y, collider.height, grid.tile());
    rb.halt();
    *orientation = Orientation::Right;

    if let Some(mut anim) = anim {
        anim.restart(IDLE, IDLE_CLIP);
    }
    if let (Some(mut sprite), Some(table)) = (sprite, table) {
        show_frame(
            event.entity,
            &mut sprite,
            table,
            Orientation::Right,
            0,
            output.as_deref_mut(),
        );
    }

    info!(
        "Actor {:?} left the playfield on tick {}, respawned at ({}, {})",
        event.entity, event.tick, spawn.x, spawn.y
    );
}
