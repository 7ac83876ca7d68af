//! Sprite-sheet components.
//!
//! [`Sprite`] holds what the renderer needs to draw an entity: the texture
//! key, the on-screen size and the source offset of the frame currently shown.
//! [`FrameTable`] maps an `(orientation, frame)` pair to that source offset.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::components::orientation::Orientation;
use crate::geometry::Rect;

#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    /// Top-left of the current frame inside the texture.
    pub offset: Vec2,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vec2::ZERO,
        }
    }

    /// Source rectangle of the current frame.
    pub fn frame_rect(&self) -> Rect {
        Rect::new(self.offset.x, self.offset.y, self.width, self.height)
    }
}

/// Per-orientation frame offsets of a sprite sheet.
#[derive(Component, Clone, Debug, Default)]
pub struct FrameTable {
    pub frames: FxHashMap<Orientation, Vec<Vec2>>,
}

impl FrameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frames(mut self, orientation: Orientation, offsets: &[(f32, f32)]) -> Self {
        self.frames.insert(
            orientation,
            offsets.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
        );
        self
    }

    /// Sheet layout of the player character: two walking poses per side.
    pub fn hero() -> Self {
        Self::new()
            .with_frames(Orientation::Right, &[(81.0, 0.0), (0.0, 0.0)])
            .with_frames(Orientation::Left, &[(0.0, 81.0), (81.0, 81.0)])
    }

    /// Offset for `frame` while facing `orientation`, if the sheet has one.
    pub fn frame(&self, orientation: Orientation, frame: usize) -> Option<Vec2> {
        self.frames
            .get(&orientation)
            .and_then(|offsets| offsets.get(frame))
            .copied()
    }
}
