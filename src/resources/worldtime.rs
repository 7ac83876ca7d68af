use bevy_ecs::prelude::Resource;

/// Simulation clock. The engine is tick driven: one tick per schedule run.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    /// Number of ticks completed so far.
    pub tick: u64,
}
