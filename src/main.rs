//! Side-scroller headless runner.
//!
//! Builds a scene from an INI configuration and a JSON tile map, then runs
//! the tick loop for a fixed number of ticks with input taken from a JSON
//! input script.
//!
//! # Main Loop
//!
//! 1. Load the configuration (defaults when the file is missing)
//! 2. Load the map (a flat ground map when none is given)
//! 3. Build the scene and the update schedule
//! 4. Run the configured number of ticks, feeding scripted intents
//! 5. Report where the player ended up
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --map assets/maps/level1.json --input assets/inputs/run_right.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use sidescroller::components::mapposition::MapPosition;
use sidescroller::components::rigidbody::RigidBody;
use sidescroller::events::camerazone::CameraZoneChangedEvent;
use sidescroller::events::playfield::ActorLeftPlayfieldEvent;
use sidescroller::game;
use sidescroller::resources::actorregistry::{ActorRegistry, PLAYER_ID};
use sidescroller::resources::camera::{CameraState, SceneRoot};
use sidescroller::resources::framesink::{FrameOutput, LogSink};
use sidescroller::resources::gameconfig::GameConfig;
use sidescroller::resources::input::InputScript;
use sidescroller::resources::tilemapstore::Tilemap;
use sidescroller::resources::worldtime::WorldTime;

/// Height in tiles of the built-in map.
const FLAT_MAP_HEIGHT: u32 = 15;

/// Headless side-scrolling platformer runtime
#[derive(Parser)]
#[command(version, about = "Runs a side-scrolling platformer scene headless.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON tile map. A flat ground map is used when omitted.
    #[arg(long, value_name = "PATH")]
    map: Option<PathBuf>,

    /// JSON input script. The player stands still when omitted.
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Number of ticks to run, overriding `[loop] ticks`.
    #[arg(long)]
    ticks: Option<u64>,
}

/// Counters reported at the end of a run.
#[derive(Resource, Debug, Default)]
struct RunStats {
    falls: u32,
    zone_changes: u32,
}

fn count_falls(_trigger: On<ActorLeftPlayfieldEvent>, mut stats: ResMut<RunStats>) {
    stats.falls += 1;
}

fn count_zone_changes(_trigger: On<CameraZoneChangedEvent>, mut stats: ResMut<RunStats>) {
    stats.zone_changes += 1;
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using default configuration", e);
    }
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }

    let tilemap = match &cli.map {
        Some(path) => match Tilemap::load_from_file(path) {
            Ok(map) => map,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let tile = config.tile_size.max(1);
            let width = ((config.viewport_width * 3.0) / tile as f32).ceil() as u32;
            game::flat_map(tile, width, FLAT_MAP_HEIGHT)
        }
    };

    let script = match &cli.input {
        Some(path) => match InputScript::load_from_file(path) {
            Ok(script) => script,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => InputScript::new(),
    };

    let mut world = World::new();
    world.insert_resource(FrameOutput::new(LogSink));
    world.insert_resource(RunStats::default());
    game::setup_scene(&mut world, &config, &tilemap);
    world.spawn(Observer::new(count_falls));
    world.spawn(Observer::new(count_zone_changes));
    world.flush();

    let mut update = game::build_schedule();
    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        return ExitCode::FAILURE;
    }

    // --------------- Main loop ---------------
    for _ in 0..config.ticks {
        let tick = world.resource::<WorldTime>().tick;
        game::run_tick(&mut world, &mut update, script.intents_at(tick));
    }

    let Some(player) = world.resource::<ActorRegistry>().get(PLAYER_ID) else {
        warn!("No actor registered as {:?}", PLAYER_ID);
        return ExitCode::SUCCESS;
    };
    let stats = world.resource::<RunStats>();
    let scene = world.resource::<SceneRoot>();
    let zone = world.resource::<CameraState>().zone;
    match (world.get::<MapPosition>(player), world.get::<RigidBody>(player)) {
        (Some(pos), Some(rb)) => info!(
            "After {} ticks: player at ({}, {}) cell ({}, {}), grounded={}, scene x={}, zone={:?}, falls={}, zone changes={}",
            config.ticks,
            pos.x(),
            pos.y(),
            pos.grid().xx(),
            pos.grid().yy(),
            rb.grounded,
            scene.x,
            zone,
            stats.falls,
            stats.zone_changes
        ),
        _ => warn!("Player {:?} no longer exists", player),
    }

    ExitCode::SUCCESS
}
