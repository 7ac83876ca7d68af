//! Tile map data types and loader.
//!
//! Maps are plain JSON. Tile coordinates are in tiles; the scene builder
//! multiplies them by `tile_size` to place entities.
//!
//! ```json
//! {
//!   "tile_size": 32,
//!   "map_width": 100,
//!   "map_height": 15,
//!   "layers": [
//!     { "name": "sky",    "kind": "background", "positions": [ { "x": 3, "y": 2, "id": 7 } ] },
//!     { "name": "ground", "kind": "obstacles",  "positions": [ { "x": 0, "y": 14, "id": 1 } ] }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Single tile placement within a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tileposition {
    /// X coordinate in tiles.
    pub x: u32,
    /// Y coordinate in tiles.
    pub y: u32,
    /// Tile identifier (tileset-local).
    #[serde(default)]
    pub id: u32,
}

/// Whether the tiles of a layer collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Obstacles,
    Background,
}

/// A named tile layer containing positions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Tilelayer {
    pub name: String,
    pub kind: LayerKind,
    pub positions: Vec<Tileposition>,
}

/// Tilemap metadata and layers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Tilemap {
    /// Size of a tile in pixels.
    pub tile_size: u32,
    /// Map width in tiles.
    pub map_width: u32,
    /// Map height in tiles.
    pub map_height: u32,
    pub layers: Vec<Tilelayer>,
}

impl Tilemap {
    /// Empty map of `map_width` x `map_height` tiles.
    pub fn new(tile_size: u32, map_width: u32, map_height: u32) -> Self {
        Self {
            tile_size,
            map_width,
            map_height,
            layers: Vec::new(),
        }
    }

    /// Append a layer built from `(x, y)` tile coordinates.
    pub fn with_layer(
        mut self,
        name: impl Into<String>,
        kind: LayerKind,
        tiles: impl IntoIterator<Item = (u32, u32)>,
    ) -> Self {
        self.layers.push(Tilelayer {
            name: name.into(),
            kind,
            positions: tiles
                .into_iter()
                .map(|(x, y)| Tileposition { x, y, id: 0 })
                .collect(),
        });
        self
    }

    /// Load a map from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read tilemap {}: {}", path.display(), e))?;
        Self::from_json(&json)
            .map_err(|e| format!("Failed to parse tilemap {}: {}", path.display(), e))
    }

    /// Parse and validate a map.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let map: Tilemap = serde_json::from_str(json).map_err(|e| e.to_string())?;
        map.validate()?;
        Ok(map)
    }

    fn validate(&self) -> Result<(), String> {
        if self.tile_size == 0 {
            return Err("tile_size must be greater than zero".to_string());
        }
        for layer in &self.layers {
            if let Some(p) = layer
                .positions
                .iter()
                .find(|p| p.x >= self.map_width || p.y >= self.map_height)
            {
                return Err(format!(
                    "tile ({}, {}) of layer '{}' is outside the {}x{} map",
                    p.x, p.y, layer.name, self.map_width, self.map_height
                ));
            }
        }
        Ok(())
    }

    /// Tiles of every layer of `kind`.
    pub fn tiles(&self, kind: LayerKind) -> impl Iterator<Item = &Tileposition> {
        self.layers
            .iter()
            .filter(move |l| l.kind == kind)
            .flat_map(|l| l.positions.iter())
    }
}
