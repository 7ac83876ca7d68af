//! Animation systems.
//!
//! - [`animation`] steps every actor's clip once per tick and shows the frame
//!   that comes up.
//! - [`motion_animation`] picks the clip and facing from the motion the
//!   physics system just resolved.
//!
//! # Animation Flow
//!
//! 1. `animation` runs first in the tick, so it shows the clip chosen from the
//!    previous tick's motion.
//! 2. Frame offsets come from the entity's [`FrameTable`] row for its
//!    [`Orientation`]. A missing entry skips the draw for that tick.
//! 3. `motion_animation` runs after physics and only switches clips when the
//!    label changes, so a running walk cycle is never restarted.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::{Animation, AnimationClip, IDLE, WALK_LEFT, WALK_RIGHT};
use crate::components::inputcontrolled::InputControlled;
use crate::components::orientation::Orientation;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::{FrameTable, Sprite};
use crate::resources::framesink::FrameOutput;

/// Standing still or airborne.
pub const IDLE_CLIP: AnimationClip = AnimationClip::new(1.0, 1, true);
/// Walking cycle.
pub const WALK_CLIP: AnimationClip = AnimationClip::new(4.0, 2, true);
/// Walking cycle while sprinting.
pub const SPRINT_CLIP: AnimationClip = AnimationClip::new(8.0, 2, true);

/// Look up `frame` for `orientation` and show it.
///
/// Stores the offset on the sprite and forwards the source rectangle to the
/// renderer adapter when one is installed. Returns `false` when the table has
/// no such frame; nothing is drawn then.
pub fn show_frame(
    entity: Entity,
    sprite: &mut Sprite,
    table: &FrameTable,
    orientation: Orientation,
    frame: usize,
    output: Option<&mut FrameOutput>,
) -> bool {
    let Some(offset) = table.frame(orientation, frame) else {
        debug!(
            "No frame {} for {:?} on {:?}, draw skipped",
            frame, orientation, entity
        );
        return false;
    };
    sprite.offset = offset;
    if let Some(output) = output {
        output.0.draw(entity, &sprite.tex_key, sprite.frame_rect());
    }
    true
}

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - Mutates [`Animation`] playback state.
/// - Writes [`Sprite::offset`] when a frame step happens.
/// - Draws through [`FrameOutput`] if the resource exists.
pub fn animation(
    mut query: Query<(Entity, &mut Animation, &mut Sprite, &FrameTable, &Orientation)>,
    mut output: Option<ResMut<FrameOutput>>,
) {
    for (entity, mut anim, mut sprite, table, orientation) in query.iter_mut() {
        if let Some(frame) = anim.advance() {
            show_frame(
                entity,
                &mut sprite,
                table,
                *orientation,
                frame,
                output.as_deref_mut(),
            );
        }
    }
}

/// Choose clip and facing from the resolved motion.
///
/// Grounded actors moving right or left face that way and walk; anything else
/// plays the idle clip and keeps its facing. Sprinting actors use the faster
/// walk cycle when a walk starts.
pub fn motion_animation(
    mut query: Query<(
        &RigidBody,
        &mut Animation,
        &mut Orientation,
        Option<&InputControlled>,
    )>,
) {
    for (rb, mut anim, mut orientation, ctl) in query.iter_mut() {
        let walk = if ctl.is_some_and(|c| c.sprinting) {
            SPRINT_CLIP
        } else {
            WALK_CLIP
        };
        let vx = rb.velocity.x;
        if rb.grounded && vx > 0.0 {
            *orientation = Orientation::Right;
            anim.play_clip(WALK_RIGHT, walk);
        } else if rb.grounded && vx < 0.0 {
            *orientation = Orientation::Left;
            anim.play_clip(WALK_LEFT, walk);
        } else {
            anim.play_clip(IDLE, IDLE_CLIP);
        }
    }
}
