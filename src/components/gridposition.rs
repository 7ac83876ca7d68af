//! Tile-grid coordinates derived from a pixel position.
//!
//! X snaps with `floor` around the entity's horizontal tile centre and Y snaps
//! with `ceil` around its vertical midpoint, so `yy` names the row that holds
//! the entity's lower half. Both conventions must stay in sync with the probe
//! helpers below, which the collision resolver uses to look up obstacles.

use serde::{Deserialize, Serialize};

/// Integer tile coordinates `(xx, yy)`.
///
/// Only constructed from pixels; [`MapPosition`](super::mapposition::MapPosition)
/// recomputes it on every position change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    xx: i32,
    yy: i32,
}

impl GridPosition {
    /// `xx = floor((x + tile/2) / tile)`, `yy = ceil((y + height/2) / tile)`.
    pub fn from_pixels(x: f32, y: f32, height: f32, tile_size: f32) -> Self {
        Self {
            xx: ((x + tile_size / 2.0) / tile_size).floor() as i32,
            yy: ((y + height / 2.0) / tile_size).ceil() as i32,
        }
    }

    pub fn xx(&self) -> i32 {
        self.xx
    }

    pub fn yy(&self) -> i32 {
        self.yy
    }
}

/// Column containing the pixel abscissa `px`.
pub fn column_at(px: f32, tile_size: f32) -> i32 {
    (px / tile_size).floor() as i32
}

/// Row containing the pixel ordinate `py` (tile rows are `(k-1)*tile, k*tile]`).
pub fn row_at(py: f32, tile_size: f32) -> i32 {
    (py / tile_size).ceil() as i32
}
