//! Time update.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! tick counter once per schedule run.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Start a new tick. Called by the runner before the update schedule.
pub fn advance_world_time(world: &mut World) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.tick += 1;
}
