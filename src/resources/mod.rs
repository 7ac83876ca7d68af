//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `actorregistry` – actors looked up by string id
//! - `camera` – camera target, viewport, scene root and zone classification
//! - `framesink` – optional renderer adapter receiving frame rectangles
//! - `gameconfig` – INI-backed runtime settings
//! - `input` – per-tick intents and scripted input timelines
//! - `obstacleindex` – collidable tiles queryable by grid cell
//! - `tilegrid` – tile size and map dimensions
//! - `tilemapstore` – JSON tile maps
//! - `worldtime` – tick counter
pub mod actorregistry;
pub mod camera;
pub mod framesink;
pub mod gameconfig;
pub mod input;
pub mod obstacleindex;
pub mod tilegrid;
pub mod tilemapstore;
pub mod worldtime;
