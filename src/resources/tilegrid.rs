use bevy_ecs::prelude::Resource;

/// Default side of a tile in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 32;

/// Tile grid parameters of the loaded map. Read-only once the scene is built.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TileGrid {
    /// Side of a square tile in pixels.
    pub tile_size: u32,
    /// Map width in tiles.
    pub grid_width: u32,
    /// Map height in tiles.
    pub grid_height: u32,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_SIZE, 0, 0)
    }
}

impl TileGrid {
    pub fn new(tile_size: u32, grid_width: u32, grid_height: u32) -> Self {
        Self {
            tile_size: tile_size.max(1),
            grid_width,
            grid_height,
        }
    }

    pub fn tile(&self) -> f32 {
        self.tile_size as f32
    }

    /// Map width in pixels.
    pub fn pixel_width(&self) -> f32 {
        (self.tile_size * self.grid_width) as f32
    }

    /// Map height in pixels.
    pub fn pixel_height(&self) -> f32 {
        (self.tile_size * self.grid_height) as f32
    }

    /// True when row `yy` lies below the bottom of the map.
    pub fn is_below(&self, yy: i32) -> bool {
        yy > self.grid_height as i32
    }
}
