//! Scene-owned lookup of actors by string id.
//!
//! Game logic that needs "the player" asks the registry instead of keeping a
//! process-wide table of objects.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

/// Id under which the player actor is registered.
pub const PLAYER_ID: &str = "player";

#[derive(Resource, Debug, Clone, Default)]
pub struct ActorRegistry {
    actors: FxHashMap<String, Entity>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `entity` under `id`, returning the entity previously stored there.
    pub fn insert(&mut self, id: impl Into<String>, entity: Entity) -> Option<Entity> {
        self.actors.insert(id.into(), entity)
    }

    pub fn get(&self, id: &str) -> Option<Entity> {
        self.actors.get(id).copied()
    }
}
