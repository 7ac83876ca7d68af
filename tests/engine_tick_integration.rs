//! Engine tick integration tests: falling, respawning, landing, walking,
//! wall collisions, animation selection, frame output and camera zones.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;

use sidescroller::components::animation::{Animation, IDLE, WALK_LEFT, WALK_RIGHT};
use sidescroller::components::boxcollider::BoxCollider;
use sidescroller::components::inputcontrolled::InputControlled;
use sidescroller::components::mapposition::MapPosition;
use sidescroller::components::orientation::Orientation;
use sidescroller::components::rigidbody::RigidBody;
use sidescroller::components::spawnpoint::SpawnPoint;
use sidescroller::components::sprite::Sprite;
use sidescroller::events::camerazone::CameraZoneChangedEvent;
use sidescroller::events::playfield::ActorLeftPlayfieldEvent;
use sidescroller::game::{build_schedule, flat_map, run_tick, setup_scene};
use sidescroller::geometry::Rect;
use sidescroller::resources::actorregistry::{ActorRegistry, PLAYER_ID};
use sidescroller::resources::camera::{CameraState, CameraTarget, CameraZone, SceneRoot};
use sidescroller::resources::framesink::{FrameOutput, FrameSink};
use sidescroller::resources::gameconfig::GameConfig;
use sidescroller::resources::input::{InputIntents, InputScript};
use sidescroller::resources::obstacleindex::ObstacleIndex;
use sidescroller::resources::tilemapstore::{LayerKind, Tilemap};
use sidescroller::resources::worldtime::WorldTime;

/// Resting height of the 80 px hero on the ground row of a 15-row map.
const GROUND_Y: f32 = 448.0 - 80.0 - 1.0;

#[derive(Resource, Default)]
struct Falls(Vec<u64>);

#[derive(Resource, Default)]
struct ZoneChanges(Vec<(Option<CameraZone>, CameraZone)>);

#[derive(Clone, Default)]
struct RecordingSink(Arc<Mutex<Vec<(Entity, Rect)>>>);

impl FrameSink for RecordingSink {
    fn draw(&mut self, entity: Entity, _texture: &str, frame: Rect) {
        if let Ok(mut frames) = self.0.lock() {
            frames.push((entity, frame));
        }
    }
}

struct Scene {
    world: World,
    update: Schedule,
    player: Entity,
}

impl Scene {
    fn new(config: &GameConfig, map: &Tilemap) -> Self {
        let mut world = World::new();
        world.init_resource::<Falls>();
        world.init_resource::<ZoneChanges>();
        let player = setup_scene(&mut world, config, map);
        world.add_observer(|trigger: On<ActorLeftPlayfieldEvent>, mut falls: ResMut<Falls>| {
            falls.0.push(trigger.event().tick);
        });
        world.add_observer(
            |trigger: On<CameraZoneChangedEvent>, mut changes: ResMut<ZoneChanges>| {
                changes.0.push((trigger.event().from, trigger.event().to));
            },
        );
        world.flush();

        let mut update = build_schedule();
        update
            .initialize(&mut world)
            .expect("Failed to initialize schedule");
        Self {
            world,
            update,
            player,
        }
    }

    fn tick(&mut self, intents: InputIntents, ticks: usize) {
        for _ in 0..ticks {
            run_tick(&mut self.world, &mut self.update, intents);
        }
    }

    fn idle(&mut self, ticks: usize) {
        self.tick(InputIntents::default(), ticks);
    }

    fn pos(&self) -> MapPosition {
        *self.world.get::<MapPosition>(self.player).unwrap()
    }

    fn body(&self) -> RigidBody {
        self.world.get::<RigidBody>(self.player).unwrap().clone()
    }

    fn label(&self) -> String {
        self.world
            .get::<Animation>(self.player)
            .unwrap()
            .current_label
            .clone()
    }

    fn orientation(&self) -> Orientation {
        *self.world.get::<Orientation>(self.player).unwrap()
    }
}

fn right() -> InputIntents {
    InputIntents {
        right: true,
        ..Default::default()
    }
}

fn left() -> InputIntents {
    InputIntents {
        left: true,
        ..Default::default()
    }
}

fn empty_map() -> Tilemap {
    Tilemap::new(32, 30, 15)
}

fn landed_scene(config: &GameConfig, map: &Tilemap) -> Scene {
    let mut scene = Scene::new(config, map);
    scene.idle(30);
    scene
}

#[test]
fn setup_registers_player_obstacles_and_camera_target() {
    let scene = Scene::new(&GameConfig::new(), &flat_map(32, 30, 15));

    assert_eq!(
        scene.world.resource::<ActorRegistry>().get(PLAYER_ID),
        Some(scene.player)
    );
    assert_eq!(
        scene.world.resource::<CameraTarget>().0,
        Some(scene.player)
    );
    assert_eq!(scene.world.resource::<ObstacleIndex>().len(), 30);
    assert_eq!(scene.world.resource::<SceneRoot>().width, 960.0);

    let pos = scene.pos();
    assert_eq!((pos.x(), pos.y()), (110.0, 200.0));
    assert_eq!((pos.grid().xx(), pos.grid().yy()), (3, 8));
}

#[test]
fn falling_out_of_the_map_fires_exactly_once() {
    let mut scene = Scene::new(&GameConfig::new(), &empty_map());
    // without a spawn point the respawn observer leaves the actor falling
    scene.world.entity_mut(scene.player).remove::<SpawnPoint>();

    scene.idle(40);

    assert_eq!(scene.world.resource::<Falls>().0, vec![16]);
    assert!(scene.pos().grid().yy() > 15);
}

#[test]
fn gravity_accumulates_while_airborne() {
    let mut scene = Scene::new(&GameConfig::new(), &empty_map());
    scene.idle(3);
    let rb = scene.body();
    assert_eq!(rb.velocity, Vec2::new(0.0, 6.0));
    assert!(!rb.grounded);
    assert_eq!(scene.pos().y(), 212.0);
}

#[test]
fn respawn_returns_player_to_spawn_point() {
    let mut scene = Scene::new(&GameConfig::new(), &empty_map());

    scene.idle(20);

    assert_eq!(scene.world.resource::<Falls>().0.len(), 1);
    let pos = scene.pos();
    assert_eq!(pos.x(), 110.0);
    assert_eq!(pos.y(), 220.0);
    assert!(pos.y() < 300.0);
    assert_eq!(scene.body().velocity, Vec2::new(0.0, 8.0));
    assert_eq!(scene.orientation(), Orientation::Right);
}

#[test]
fn respawn_restarts_the_idle_clip() {
    let mut scene = Scene::new(&GameConfig::new(), &empty_map());

    scene.idle(15);
    let before = scene.world.get::<Animation>(scene.player).unwrap().clone();
    assert_eq!(before.current_label, IDLE);
    assert_eq!(before.frame_accumulator, 15.0);

    scene.idle(1);

    assert_eq!(scene.world.resource::<Falls>().0, vec![16]);
    let anim = scene.world.get::<Animation>(scene.player).unwrap();
    assert_eq!(anim.current_label, IDLE);
    assert_eq!(anim.current_frame, 0);
    assert_eq!(anim.frame_accumulator, 0.0);
}

#[test]
fn player_lands_on_ground_and_idles() {
    let scene = landed_scene(&GameConfig::new(), &flat_map(32, 30, 15));

    let rb = scene.body();
    assert!(rb.grounded);
    assert_eq!(rb.velocity, Vec2::ZERO);
    assert_eq!(scene.pos().y(), GROUND_Y);
    assert_eq!(scene.label(), IDLE);
    assert!(scene.world.resource::<Falls>().0.is_empty());
}

#[test]
fn walking_moves_and_selects_walk_cycles() {
    let mut scene = landed_scene(&GameConfig::new(), &flat_map(32, 30, 15));

    scene.tick(right(), 10);
    assert_eq!(scene.pos().x(), 160.0);
    assert_eq!(scene.pos().y(), GROUND_Y);
    assert_eq!(scene.label(), WALK_RIGHT);
    assert_eq!(scene.orientation(), Orientation::Right);

    scene.tick(left(), 2);
    assert_eq!(scene.pos().x(), 150.0);
    assert_eq!(scene.label(), WALK_LEFT);
    assert_eq!(scene.orientation(), Orientation::Left);

    scene.idle(1);
    assert_eq!(scene.label(), IDLE);
    assert_eq!(scene.orientation(), Orientation::Left);
}

#[test]
fn sprinting_doubles_walk_speed() {
    let mut scene = landed_scene(&GameConfig::new(), &flat_map(32, 30, 15));
    let sprint = InputIntents {
        right: true,
        sprint: true,
        ..Default::default()
    };
    scene.tick(sprint, 4);
    assert_eq!(scene.pos().x(), 150.0);
    assert_eq!(
        scene.world.get::<Animation>(scene.player).unwrap().frame_tick,
        6.25
    );
}

#[test]
fn jump_leaves_ground_then_lands_again() {
    let mut scene = landed_scene(&GameConfig::new(), &flat_map(32, 30, 15));
    let up = InputIntents {
        up: true,
        ..Default::default()
    };

    scene.tick(up, 1);
    let rb = scene.body();
    assert!(!rb.grounded);
    assert_eq!(rb.velocity.y, -25.0);
    assert_eq!(scene.pos().y(), GROUND_Y - 25.0);
    assert_eq!(scene.label(), IDLE);

    scene.idle(40);
    assert!(scene.body().grounded);
    assert_eq!(scene.pos().y(), GROUND_Y);
}

#[test]
fn wall_stops_walking_player() {
    let map = flat_map(32, 30, 15).with_layer(
        "wall",
        LayerKind::Obstacles,
        [(8, 11), (8, 12), (8, 13)],
    );
    let mut scene = landed_scene(&GameConfig::new(), &map);

    scene.tick(right(), 30);

    assert_eq!(scene.pos().x(), 256.0 - 80.0 - 1.0);
    assert_eq!(scene.body().velocity.x, 0.0);
    assert!(scene.body().grounded);
    assert_eq!(scene.label(), IDLE);
}

#[test]
fn walk_cycle_draws_frames_from_the_facing_row() {
    let sink = RecordingSink::default();
    let mut scene = landed_scene(&GameConfig::new(), &flat_map(32, 30, 15));
    scene.world.insert_resource(FrameOutput::new(sink.clone()));

    scene.tick(right(), 30);

    let player = scene.player;
    let drawn = sink.0.lock().unwrap().clone();
    assert_eq!(
        drawn,
        vec![
            (player, Rect::new(0.0, 0.0, 80.0, 80.0)),
            (player, Rect::new(81.0, 0.0, 80.0, 80.0)),
        ]
    );
    assert_eq!(
        scene.world.get::<Sprite>(player).unwrap().offset,
        Vec2::new(81.0, 0.0)
    );
}

#[test]
fn missing_frame_entry_skips_draw() {
    let sink = RecordingSink::default();
    let mut scene = Scene::new(&GameConfig::new(), &flat_map(32, 30, 15));
    scene.world.insert_resource(FrameOutput::new(sink.clone()));
    scene.world.entity_mut(scene.player).insert(Orientation::Up);

    scene.idle(60);

    assert!(sink.0.lock().unwrap().is_empty());
    assert_eq!(scene.orientation(), Orientation::Up);
    assert_eq!(
        scene.world.get::<Sprite>(scene.player).unwrap().offset,
        Vec2::ZERO
    );
}

#[test]
fn camera_zones_switch_walk_speed() {
    let config = GameConfig {
        viewport_width: 300.0,
        spawn_x: 400.0,
        ..GameConfig::new()
    };
    let mut scene = Scene::new(&config, &flat_map(32, 60, 15));

    scene.idle(1);
    assert_eq!(
        scene.world.resource::<CameraState>().zone,
        Some(CameraZone::Center)
    );
    assert_eq!(scene.world.resource::<SceneRoot>().x, -300.0);
    let walk = |scene: &Scene| {
        scene
            .world
            .get::<InputControlled>(scene.player)
            .unwrap()
            .walk_speed
    };
    assert_eq!(walk(&scene), 7.0);

    let set_x = |scene: &mut Scene, x: f32| {
        let y = scene.pos().y();
        let h = scene.world.get::<BoxCollider>(scene.player).unwrap().height;
        scene
            .world
            .get_mut::<MapPosition>(scene.player)
            .unwrap()
            .set(x, y, h, 32.0);
    };

    set_x(&mut scene, 50.0);
    scene.idle(1);
    assert_eq!(
        scene.world.resource::<CameraState>().zone,
        Some(CameraZone::Start)
    );
    assert_eq!(scene.world.resource::<SceneRoot>().x, 0.0);
    assert_eq!(walk(&scene), 5.0);

    set_x(&mut scene, 1750.0);
    scene.idle(1);
    assert_eq!(
        scene.world.resource::<CameraState>().zone,
        Some(CameraZone::End)
    );
    assert_eq!(scene.world.resource::<SceneRoot>().x, -1620.0);
    assert_eq!(walk(&scene), 5.0);

    scene.idle(1);
    assert_eq!(
        scene.world.resource::<ZoneChanges>().0,
        vec![
            (None, CameraZone::Center),
            (Some(CameraZone::Center), CameraZone::Start),
            (Some(CameraZone::Start), CameraZone::End),
        ]
    );
}

#[test]
fn missing_camera_target_skips_camera_step() {
    let config = GameConfig {
        viewport_width: 300.0,
        spawn_x: 400.0,
        ..GameConfig::new()
    };
    let mut scene = Scene::new(&config, &flat_map(32, 60, 15));
    scene.world.insert_resource(CameraTarget(None));

    scene.idle(2);
    assert_eq!(scene.world.resource::<SceneRoot>().x, 0.0);
    assert_eq!(scene.world.resource::<CameraState>().zone, None);

    scene.world.insert_resource(CameraTarget(Some(scene.player)));
    scene.world.despawn(scene.player);
    scene.idle(2);
    assert_eq!(scene.world.resource::<SceneRoot>().x, 0.0);
    assert_eq!(scene.world.resource::<WorldTime>().tick, 4);
}

#[test]
fn scripted_input_drives_the_player() {
    let script = InputScript::from_json(
        r#"{ "segments": [ { "from": 30, "to": 40, "intents": { "right": true } } ] }"#,
    )
    .unwrap();
    let mut scene = Scene::new(&GameConfig::new(), &flat_map(32, 30, 15));

    for _ in 0..45 {
        let tick = scene.world.resource::<WorldTime>().tick;
        run_tick(
            &mut scene.world,
            &mut scene.update,
            script.intents_at(tick),
        );
    }

    assert_eq!(scene.pos().x(), 160.0);
    assert!(scene.body().grounded);
}
