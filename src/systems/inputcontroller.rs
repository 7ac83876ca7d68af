//! Platformer controller.
//!
//! Turns the tick's [`InputState`] into velocity on [`InputControlled`]
//! bodies, before physics runs:
//! - left/right set `vx` to the walk speed (times the sprint multiplier while
//!   sprint is held); both or neither stop the actor;
//! - up starts a jump only from the ground;
//! - down crouches: no walking, no jumping. Gravity still applies.
use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Apply the current intents to every input-controlled body.
pub fn platformer_controller(
    input: Res<InputState>,
    mut query: Query<(&mut InputControlled, &mut RigidBody)>,
) {
    let direction = match (input.left.active, input.right.active) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };
    for (mut ctl, mut rb) in query.iter_mut() {
        ctl.sprinting = input.sprint.active;
        ctl.crouching = input.down.active;

        if ctl.crouching {
            rb.velocity.x = 0.0;
            continue;
        }

        let speed = if ctl.sprinting {
            ctl.walk_speed * ctl.sprint_multiplier
        } else {
            ctl.walk_speed
        };
        rb.velocity.x = speed * direction;

        if input.up.active && rb.grounded {
            rb.velocity.y = -ctl.jump_speed;
            rb.grounded = false;
        }
    }
}
