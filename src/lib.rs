//! Side-scroller runtime library.
//!
//! This module exposes the runtime's geometry, ECS components, resources,
//! systems and events for use by the headless runner, integration tests, and
//! as a reusable library.

pub mod components;
pub mod events;
pub mod game;
pub mod geometry;
pub mod resources;
pub mod systems;
