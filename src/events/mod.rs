//! Event types and observers used by the runtime.
//!
//! Events are the hooks game logic attaches to. Systems trigger them; the
//! observers in each submodule are the default reactions wired by
//! [`crate::game::setup_scene`].
//!
//! Submodules:
//! - [`camerazone`] – the camera target moved into another scroll zone
//! - [`playfield`] – an actor fell below the map, and the respawn reaction
pub mod camerazone;
pub mod playfield;
