//! Scene registry of collidable tiles.
//!
//! Obstacles register themselves when placed during scene construction and
//! are never removed. Each record keeps a snapshot of the obstacle's grid cell
//! and bounds, so every actor resolved in a tick sees the same data.
//!
//! Precondition: build the whole index before the update loop starts.
//! Appending while a tick is running is not supported.

use bevy_ecs::prelude::{Entity, Resource};

use crate::components::gridposition::GridPosition;
use crate::geometry::Rect;

/// One registered obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleRecord {
    pub entity: Entity,
    pub grid: GridPosition,
    pub bounds: Rect,
}

#[derive(Resource, Debug, Default, Clone)]
pub struct ObstacleIndex {
    records: Vec<ObstacleRecord>,
}

impl ObstacleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an obstacle. Later registrations shadow earlier ones in the same cell.
    pub fn register(&mut self, entity: Entity, grid: GridPosition, bounds: Rect) {
        self.records.push(ObstacleRecord {
            entity,
            grid,
            bounds,
        });
    }

    /// Obstacle at exactly `(xx, yy)`, most recently registered first.
    pub fn obstacle_at(&self, xx: i32, yy: i32) -> Option<&ObstacleRecord> {
        self.records
            .iter()
            .rev()
            .find(|r| r.grid.xx() == xx && r.grid.yy() == yy)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
