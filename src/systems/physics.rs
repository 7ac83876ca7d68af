//! Physics and tile collision.
//!
//! Every tick each body accelerates by its forces, then
//! moves one axis at a time against the [`ObstacleIndex`]:
//!
//! 1. Horizontal. From the leading edge (right side moving right, left side
//!    moving left) the resolver walks the columns it would cross, probing
//!    three rows near the feet (10 px, 5 px and 0 px above the bottom).
//! 2. Vertical, at the resolved x. From the leading edge (bottom falling, top
//!    rising) it walks the rows it would cross, probing three columns around
//!    the horizontal centre (-5 px, 0, +5 px).
//!
//! A probed obstacle stops the axis only if it overlaps the body's swept
//! rectangle for that axis. The body is then clamped one pixel short of the
//! obstacle and its velocity on that axis is zeroed. Only a downward stop
//! grounds the body.
//!
//! Bodies moving more than a tile per tick are swept cell by cell, but probing
//! only three rows/columns means thin corners can still be skipped.
//!
//! A fall that ends exactly flush with an obstacle's top only touches it, so
//! that tick leaves the body airborne with its velocity. The next tick hits
//! the obstacle and clamps the body one pixel up, grounding it.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::gridposition::{column_at, row_at};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::playfield::ActorLeftPlayfieldEvent;
use crate::geometry::Rect;
use crate::resources::obstacleindex::{ObstacleIndex, ObstacleRecord};
use crate::resources::tilegrid::TileGrid;
use crate::resources::worldtime::WorldTime;

/// Vertical probe offsets above the bottom edge used by the horizontal sweep.
const FEET_PROBES: [f32; 3] = [10.0, 5.0, 0.0];
/// Horizontal probe offsets around the centre used by the vertical sweep.
const CENTER_PROBES: [f32; 3] = [-5.0, 0.0, 5.0];

/// Outcome of one resolver step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// New top-left position.
    pub position: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
    /// Obstacle that stopped the horizontal move.
    pub blocked_x: Option<Entity>,
    /// Obstacle that stopped the vertical move.
    pub blocked_y: Option<Entity>,
}

/// Walk cells `start..=target` and return the first probed obstacle that
/// overlaps `swept`.
fn sweep<'a>(
    start: i32,
    target: i32,
    probes: &[i32],
    lookup: impl Fn(i32, i32) -> Option<&'a ObstacleRecord>,
    swept: &Rect,
) -> Option<&'a ObstacleRecord> {
    let step = if target >= start { 1 } else { -1 };
    let mut cell = start;
    loop {
        let hit = probes
            .iter()
            .filter_map(|&probe| lookup(cell, probe))
            .find(|record| record.bounds.overlaps(swept));
        if hit.is_some() {
            return hit;
        }
        if cell == target {
            return None;
        }
        cell += step;
    }
}

/// Resolve one tick of motion for a body with the given `bounds`.
///
/// `acceleration` is added to `velocity` before moving. The obstacle index is
/// only read.
pub fn resolve_motion(
    bounds: Rect,
    velocity: Vec2,
    acceleration: Vec2,
    tile_size: f32,
    obstacles: &ObstacleIndex,
) -> Motion {
    let mut velocity = velocity + acceleration;
    let (w, h) = (bounds.width, bounds.height);
    let mut x = bounds.x;
    let mut y = bounds.y;
    let mut blocked_x = None;
    let mut blocked_y = None;

    if velocity.x != 0.0 {
        let moving_right = velocity.x > 0.0;
        let edge = if moving_right { bounds.right() } else { bounds.x };
        let bottom = bounds.bottom();
        let rows = FEET_PROBES.map(|lift| row_at(bottom - lift, tile_size));
        let swept = bounds.swept(Vec2::new(velocity.x, 0.0));
        let hit = sweep(
            column_at(edge, tile_size),
            column_at(edge + velocity.x, tile_size),
            &rows,
            |col, row| obstacles.obstacle_at(col, row),
            &swept,
        );
        match hit {
            Some(record) => {
                x = if moving_right {
                    record.bounds.x - w - 1.0
                } else {
                    record.bounds.right() + 1.0
                };
                velocity.x = 0.0;
                blocked_x = Some(record.entity);
            }
            None => x += velocity.x,
        }
    }

    let mut grounded = false;
    if velocity.y != 0.0 {
        let falling = velocity.y > 0.0;
        let moved = Rect::new(x, y, w, h);
        let edge = if falling { moved.bottom() } else { moved.y };
        let cx = x + w / 2.0;
        let cols = CENTER_PROBES.map(|shift| column_at(cx + shift, tile_size));
        let swept = moved.swept(Vec2::new(0.0, velocity.y));
        let hit = sweep(
            row_at(edge, tile_size),
            row_at(edge + velocity.y, tile_size),
            &cols,
            |row, col| obstacles.obstacle_at(col, row),
            &swept,
        );
        match hit {
            Some(record) => {
                y = if falling {
                    record.bounds.y - h - 1.0
                } else {
                    record.bounds.bottom() + 1.0
                };
                velocity.y = 0.0;
                grounded = falling;
                blocked_y = Some(record.entity);
            }
            None => y += velocity.y,
        }
    }

    Motion {
        position: Vec2::new(x, y),
        velocity,
        grounded,
        blocked_x,
        blocked_y,
    }
}

/// Integrate and collide every body, then report actors leaving the map.
///
/// [`ActorLeftPlayfieldEvent`] is triggered on the tick the grid row first
/// goes below the last map row.
pub fn physics(
    mut bodies: Query<(Entity, &mut MapPosition, &mut RigidBody, &BoxCollider)>,
    obstacles: Res<ObstacleIndex>,
    grid: Res<TileGrid>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    let tile = grid.tile();
    for (entity, mut pos, mut rb, collider) in bodies.iter_mut() {
        let motion = resolve_motion(
            collider.bounds(pos.x(), pos.y()),
            rb.velocity,
            rb.total_acceleration(),
            tile,
            &obstacles,
        );
        if let Some(obstacle) = motion.blocked_x {
            debug!("{:?} stopped horizontally by {:?}", entity, obstacle);
        }
        if let Some(obstacle) = motion.blocked_y {
            debug!("{:?} stopped vertically by {:?}", entity, obstacle);
        }

        rb.velocity = motion.velocity;
        rb.grounded = motion.grounded;

        let was_below = grid.is_below(pos.grid().yy());
        pos.set(motion.position.x, motion.position.y, collider.height, tile);
        if !was_below && grid.is_below(pos.grid().yy()) {
            commands.trigger(ActorLeftPlayfieldEvent {
                entity,
                tick: time.tick,
            });
        }
    }
}
