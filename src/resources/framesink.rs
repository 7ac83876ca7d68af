//! Rendering adapter seam.
//!
//! The animation system never touches a display surface. When a frame step
//! happens it stores the source offset on the [`Sprite`] and, if a
//! [`FrameOutput`] resource is present, hands the frame to its [`FrameSink`].
//!
//! [`Sprite`]: crate::components::sprite::Sprite

use bevy_ecs::prelude::{Entity, Resource};
use log::trace;

use crate::geometry::Rect;

/// Receives the sprite-sheet rectangle to show for an entity.
pub trait FrameSink: Send + Sync {
    /// `frame` is the source rectangle inside the texture named `texture`.
    fn draw(&mut self, entity: Entity, texture: &str, frame: Rect);
}

/// Optional resource wrapping the active renderer adapter.
#[derive(Resource)]
pub struct FrameOutput(pub Box<dyn FrameSink>);

impl FrameOutput {
    pub fn new(sink: impl FrameSink + 'static) -> Self {
        Self(Box::new(sink))
    }
}

/// Sink for headless runs: frames are only traced.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl FrameSink for LogSink {
    fn draw(&mut self, entity: Entity, texture: &str, frame: Rect) {
        trace!(
            "draw {:?}: {} ({}, {}) {}x{}",
            entity, texture, frame.x, frame.y, frame.width, frame.height
        );
    }
}
