//! World-space position of an entity.
//!
//! The grid coordinates are part of the position and can only change through
//! [`MapPosition::set`], so every move (including collision-clamped ones)
//! keeps `(xx, yy)` in sync with the pixels.

use bevy_ecs::prelude::Component;

use crate::components::gridposition::GridPosition;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    x: f32,
    y: f32,
    grid: GridPosition,
}

impl MapPosition {
    /// Place an entity of the given `height` on a grid of `tile_size` pixels.
    pub fn new(x: f32, y: f32, height: f32, tile_size: f32) -> Self {
        Self {
            x,
            y,
            grid: GridPosition::from_pixels(x, y, height, tile_size),
        }
    }

    /// Move to `(x, y)` and recompute the grid position.
    pub fn set(&mut self, x: f32, y: f32, height: f32, tile_size: f32) {
        self.x = x;
        self.y = y;
        self.grid = GridPosition::from_pixels(x, y, height, tile_size);
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn grid(&self) -> GridPosition {
        self.grid
    }
}
