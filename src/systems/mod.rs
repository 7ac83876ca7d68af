//! Runtime systems.
//!
//! This module groups the ECS systems run by the per-tick schedule built in
//! [`crate::game::build_schedule`].
//!
//! Submodules overview
//! - [`animation`] – step clips, show frames, and pick clips from motion
//! - [`camera`] – follow the camera target by moving the scene root
//! - [`inputcontroller`] – translate input state into velocity on the player
//! - [`physics`] – gravity, tile collision and playfield exit detection
//! - [`time`] – advance the tick counter

pub mod animation;
pub mod camera;
pub mod inputcontroller;
pub mod physics;
pub mod time;
