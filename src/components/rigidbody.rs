//! Kinematic body component with named acceleration forces.
//!
//! The [`RigidBody`] component stores the per-tick velocity of an actor, the
//! named forces added to it every tick (gravity being the usual one) and the
//! `grounded` flag derived by the collision resolver.
//!
//! Velocities are expressed in pixels per tick and forces in pixels per tick
//! squared. The resolver adds every force unconditionally, grounded or not;
//! `grounded` is re-derived from the vertical collision afterwards.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Name of the gravity force installed by [`RigidBody::with_gravity`].
pub const GRAVITY_FORCE: &str = "gravity";

/// Kinematic body storing velocity, forces and ground contact.
///
/// # Example
/// ```
/// use sidescroller::components::rigidbody::RigidBody;
/// use glam::Vec2;
///
/// let mut rb = RigidBody::with_gravity(2.0);
/// rb.velocity = Vec2::new(5.0, 0.0);
/// assert_eq!(rb.total_acceleration(), Vec2::new(0.0, 2.0));
/// ```
#[derive(Component, Clone, Debug, Default)]
pub struct RigidBody {
    /// Current velocity in pixels per tick.
    pub velocity: Vec2,
    /// Named accelerations in pixels per tick squared, summed every tick.
    pub forces: FxHashMap<String, Vec2>,
    /// True when the last vertical collision was a downward stop.
    pub grounded: bool,
}

impl RigidBody {
    /// Create a RigidBody with zero velocity and no forces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RigidBody with a downward gravity force of `gravity` px/tick².
    pub fn with_gravity(gravity: f32) -> Self {
        let mut rb = Self::new();
        rb.add_force(GRAVITY_FORCE, Vec2::new(0.0, gravity));
        rb
    }

    /// Add or update a named acceleration force.
    pub fn add_force(&mut self, name: &str, value: Vec2) {
        self.forces.insert(name.to_string(), value);
    }

    /// Sum of all forces.
    pub fn total_acceleration(&self) -> Vec2 {
        self.forces.values().copied().sum()
    }

    /// Stop all motion and clear ground contact.
    pub fn halt(&mut self) {
        self.velocity = Vec2::ZERO;
        self.grounded = false;
    }
}
