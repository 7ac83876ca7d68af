//! Scene construction and the per-tick update loop.
//!
//! [`setup_scene`] turns a [`GameConfig`] and a [`Tilemap`] into a ready
//! world: resources, tiles, the obstacle index, the player and the default
//! observers. [`build_schedule`] returns the update schedule and [`run_tick`]
//! advances the world by one tick.
//!
//! Tick order:
//! 1. `animation` (shows frames picked from the previous tick's motion)
//! 2. `platformer_controller` -> `physics` -> `motion_animation`
//! 3. `camera_follow`

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use glam::Vec2;
use log::info;

use crate::components::animation::{Animation, IDLE};
use crate::components::boxcollider::BoxCollider;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::orientation::Orientation;
use crate::components::rigidbody::RigidBody;
use crate::components::spawnpoint::SpawnPoint;
use crate::components::sprite::{FrameTable, Sprite};
use crate::events::camerazone::observe_zone_walk_speed;
use crate::events::playfield::observe_respawn;
use crate::resources::actorregistry::{ActorRegistry, PLAYER_ID};
use crate::resources::camera::{CameraState, CameraTarget, SceneRoot, Viewport};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputIntents, InputState};
use crate::resources::obstacleindex::ObstacleIndex;
use crate::resources::tilegrid::TileGrid;
use crate::resources::tilemapstore::{LayerKind, Tilemap};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{IDLE_CLIP, animation, motion_animation};
use crate::systems::camera::camera_follow;
use crate::systems::inputcontroller::platformer_controller;
use crate::systems::physics::physics;
use crate::systems::time::advance_world_time;

/// Texture key of the tileset.
pub const TILESET_KEY: &str = "tiles";
/// Texture key of the player sprite sheet.
pub const HERO_KEY: &str = "hero";

/// Flat map of `map_width` x `map_height` tiles whose last row is solid.
///
/// Used by the runner when no map file is given.
pub fn flat_map(tile_size: u32, map_width: u32, map_height: u32) -> Tilemap {
    let ground = map_height.saturating_sub(1);
    Tilemap::new(tile_size, map_width, map_height).with_layer(
        "ground",
        LayerKind::Obstacles,
        (0..map_width).map(|x| (x, ground)),
    )
}

/// Spawn every tile of `tilemap` and index the obstacles.
///
/// Tile ids select a cell of a single-row tileset. Returns the number of
/// obstacles indexed.
fn spawn_tiles(world: &mut World, tilemap: &Tilemap) -> usize {
    let tile = tilemap.tile_size as f32;
    let mut index = ObstacleIndex::new();

    for (kind, solid) in [(LayerKind::Obstacles, true), (LayerKind::Background, false)] {
        for tp in tilemap.tiles(kind) {
            let pos = MapPosition::new(tp.x as f32 * tile, tp.y as f32 * tile, tile, tile);
            let mut sprite = Sprite::new(TILESET_KEY, tile, tile);
            sprite.offset = Vec2::new(tp.id as f32 * tile, 0.0);

            if solid {
                let collider = BoxCollider::new(tile, tile);
                let entity = world.spawn((pos, collider, sprite)).id();
                index.register(entity, pos.grid(), collider.bounds(pos.x(), pos.y()));
            } else {
                world.spawn((pos, sprite));
            }
        }
    }

    let count = index.len();
    world.insert_resource(index);
    count
}

/// Spawn the player actor at the configured spawn point.
fn spawn_player(world: &mut World, config: &GameConfig, tile: f32) -> Entity {
    let (w, h) = (config.player_width, config.player_height);
    world
        .spawn((
            MapPosition::new(config.spawn_x, config.spawn_y, h, tile),
            BoxCollider::new(w, h),
            RigidBody::with_gravity(config.gravity),
            Orientation::Right,
            Animation::with_clip(IDLE, IDLE_CLIP),
            Sprite::new(HERO_KEY, w, h),
            FrameTable::hero(),
            InputControlled::new(config.walk_speed, config.center_walk_speed, config.jump_speed)
                .with_sprint_multiplier(config.sprint_multiplier),
            SpawnPoint::new(config.spawn_x, config.spawn_y),
        ))
        .id()
}

/// Build the scene: resources, tiles, player and observers.
///
/// Returns the player entity, which is also registered as
/// [`PLAYER_ID`] and set as the camera target.
pub fn setup_scene(world: &mut World, config: &GameConfig, tilemap: &Tilemap) -> Entity {
    let grid = TileGrid::new(tilemap.tile_size, tilemap.map_width, tilemap.map_height);
    world.insert_resource(grid);
    world.insert_resource(SceneRoot::new(grid.pixel_width(), grid.pixel_height()));
    world.insert_resource(Viewport {
        width: config.viewport_width,
    });
    world.insert_resource(CameraState::default());
    world.insert_resource(InputState::default());
    world.insert_resource(WorldTime::default());
    world.insert_resource(config.clone());

    let obstacles = spawn_tiles(world, tilemap);
    let player = spawn_player(world, config, grid.tile());

    let mut registry = ActorRegistry::new();
    registry.insert(PLAYER_ID, player);
    world.insert_resource(registry);
    world.insert_resource(CameraTarget(Some(player)));

    world.spawn(Observer::new(observe_respawn));
    world.spawn(Observer::new(observe_zone_walk_speed));
    // Ensure the observers are registered before any system triggers events.
    world.flush();

    info!(
        "Scene ready: {}x{} tiles of {} px, {} obstacles, player {:?} at ({}, {})",
        grid.grid_width,
        grid.grid_height,
        grid.tile_size,
        obstacles,
        player,
        config.spawn_x,
        config.spawn_y
    );
    player
}

/// Update schedule in tick order, run on a single thread.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.set_executor_kind(ExecutorKind::SingleThreaded);
    update.add_systems(
        (
            animation,
            platformer_controller,
            physics,
            motion_animation,
            camera_follow,
        )
            .chain(),
    );
    update
}

/// Advance the world by one tick using `intents` as this tick's input.
pub fn run_tick(world: &mut World, update: &mut Schedule, intents: InputIntents) {
    advance_world_time(world);
    world.resource_mut::<InputState>().apply(intents);
    update.run(world);
    world.clear_trackers();
}
