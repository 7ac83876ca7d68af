//! ECS components for entities.
//!
//! This module groups all component types that can be attached to actors and
//! tiles. Capabilities are composed: an entity is positionable, renderable,
//! animatable or collidable by carrying the matching components.
//!
//! Submodules overview:
//! - [`animation`] – label/frame sequencer for sprite animations
//! - [`boxcollider`] – axis-aligned rectangular collider
//! - [`gridposition`] – tile coordinates derived from a pixel position
//! - [`inputcontrolled`] – movement tuning of the player-driven actor
//! - [`mapposition`] – world-space position with its grid cell
//! - [`orientation`] – facing used to select sprite-sheet rows
//! - [`rigidbody`] – kinematic body storing velocity, forces and ground contact
//! - [`spawnpoint`] – canonical position an actor respawns at
//! - [`sprite`] – sprite-sheet reference and per-orientation frame table

pub mod animation;
pub mod boxcollider;
pub mod gridposition;
pub mod inputcontrolled;
pub mod mapposition;
pub mod orientation;
pub mod rigidbody;
pub mod spawnpoint;
pub mod sprite;
