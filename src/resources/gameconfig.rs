//! Game configuration resource.
//!
//! Manages simulation settings loaded from an INI configuration file. Every
//! key is optional; missing keys keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [physics]
//! gravity = 2
//! tile_size = 32
//!
//! [camera]
//! viewport_width = 640
//!
//! [player]
//! width = 80
//! height = 80
//! walk_speed = 5
//! center_walk_speed = 7
//! jump_speed = 27
//! sprint_multiplier = 2
//! spawn_x = 110
//! spawn_y = 200
//!
//! [loop]
//! ticks = 600
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_GRAVITY: f32 = 2.0;
const DEFAULT_TILE_SIZE: u32 = 32;
const DEFAULT_VIEWPORT_WIDTH: f32 = 640.0;
const DEFAULT_PLAYER_WIDTH: f32 = 80.0;
const DEFAULT_PLAYER_HEIGHT: f32 = 80.0;
const DEFAULT_WALK_SPEED: f32 = 5.0;
const DEFAULT_CENTER_WALK_SPEED: f32 = 7.0;
const DEFAULT_JUMP_SPEED: f32 = 27.0;
const DEFAULT_SPRINT_MULTIPLIER: f32 = 2.0;
const DEFAULT_SPAWN_X: f32 = 110.0;
const DEFAULT_SPAWN_Y: f32 = 200.0;
const DEFAULT_TICKS: u64 = 600;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Downward acceleration in pixels per tick squared.
    pub gravity: f32,
    /// Tile side of the built-in map used when no map file is given.
    pub tile_size: u32,
    /// Width of the visible area in pixels.
    pub viewport_width: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Walking speed at the start and end of the scene.
    pub walk_speed: f32,
    /// Walking speed while the camera scrolls.
    pub center_walk_speed: f32,
    pub jump_speed: f32,
    pub sprint_multiplier: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Number of ticks a headless run simulates.
    pub ticks: u64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            tile_size: DEFAULT_TILE_SIZE,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            player_width: DEFAULT_PLAYER_WIDTH,
            player_height: DEFAULT_PLAYER_HEIGHT,
            walk_speed: DEFAULT_WALK_SPEED,
            center_walk_speed: DEFAULT_CENTER_WALK_SPEED,
            jump_speed: DEFAULT_JUMP_SPEED,
            sprint_multiplier: DEFAULT_SPRINT_MULTIPLIER,
            spawn_x: DEFAULT_SPAWN_X,
            spawn_y: DEFAULT_SPAWN_Y,
            ticks: DEFAULT_TICKS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let float = |section: &str, key: &str| config.getfloat(section, key).ok().flatten();

        // [physics] section
        if let Some(gravity) = float("physics", "gravity") {
            self.gravity = gravity as f32;
        }
        if let Some(tile_size) = config.getuint("physics", "tile_size").ok().flatten() {
            self.tile_size = tile_size as u32;
        }

        // [camera] section
        if let Some(width) = float("camera", "viewport_width") {
            self.viewport_width = width as f32;
        }

        // [player] section
        if let Some(width) = float("player", "width") {
            self.player_width = width as f32;
        }
        if let Some(height) = float("player", "height") {
            self.player_height = height as f32;
        }
        if let Some(speed) = float("player", "walk_speed") {
            self.walk_speed = speed as f32;
        }
        if let Some(speed) = float("player", "center_walk_speed") {
            self.center_walk_speed = speed as f32;
        }
        if let Some(speed) = float("player", "jump_speed") {
            self.jump_speed = speed as f32;
        }
        if let Some(multiplier) = float("player", "sprint_multiplier") {
            self.sprint_multiplier = multiplier as f32;
        }
        if let Some(x) = float("player", "spawn_x") {
            self.spawn_x = x as f32;
        }
        if let Some(y) = float("player", "spawn_y") {
            self.spawn_y = y as f32;
        }

        // [loop] section
        if let Some(ticks) = config.getuint("loop", "ticks").ok().flatten() {
            self.ticks = ticks;
        }

        info!(
            "Loaded config: gravity={}, tile={}, viewport={}, player {}x{} at ({}, {}), ticks={}",
            self.gravity,
            self.tile_size,
            self.viewport_width,
            self.player_width,
            self.player_height,
            self.spawn_x,
            self.spawn_y,
            self.ticks
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [physics] section
        config.set("physics", "gravity", Some(self.gravity.to_string()));
        config.set("physics", "tile_size", Some(self.tile_size.to_string()));

        // [camera] section
        config.set(
            "camera",
            "viewport_width",
            Some(self.viewport_width.to_string()),
        );

        // [player] section
        config.set("player", "width", Some(self.player_width.to_string()));
        config.set("player", "height", Some(self.player_height.to_string()));
        config.set("player", "walk_speed", Some(self.walk_speed.to_string()));
        config.set(
            "player",
            "center_walk_speed",
            Some(self.center_walk_speed.to_string()),
        );
        config.set("player", "jump_speed", Some(self.jump_speed.to_string()));
        config.set(
            "player",
            "sprint_multiplier",
            Some(self.sprint_multiplier.to_string()),
        );
        config.set("player", "spawn_x", Some(self.spawn_x.to_string()));
        config.set("player", "spawn_y", Some(self.spawn_y.to_string()));

        // [loop] section
        config.set("loop", "ticks", Some(self.ticks.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
