//! Pixel-space geometry shared by components and systems.
//!
//! [`Rect`] is the axis-aligned bounds of anything placed on screen. Its
//! [`Rect::overlaps`] test is half-open: rectangles that only share an edge
//! do not overlap. The collision resolver clamps actors one pixel away from
//! obstacles and relies on this so a resting actor never counts as touching.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with its top-left corner at `(x, y)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Build a rectangle. Negative sizes are normalized so that
    /// `width` and `height` are never negative.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 {
            (y + height, -height)
        } else {
            (y, height)
        };
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn a(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Top-right corner.
    pub fn b(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y)
    }

    /// Bottom-left corner.
    pub fn c(&self) -> Vec2 {
        Vec2::new(self.x, self.y + self.height)
    }

    /// Bottom-right corner.
    pub fn d(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Half-open AABB intersection test.
    ///
    /// Both axes use strict inequalities against the other rectangle's
    /// corners, so edge-touching rectangles return `false`. Empty
    /// rectangles never overlap anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.a().x < other.b().x
            && self.b().x > other.a().x
            && self.a().y < other.c().y
            && self.c().y > other.b().y
    }

    /// Smallest rectangle covering `self` and `self` moved by `delta`.
    pub fn swept(&self, delta: Vec2) -> Rect {
        let min_x = self.x.min(self.x + delta.x);
        let min_y = self.y.min(self.y + delta.y);
        let max_x = self.right().max(self.right() + delta.x);
        let max_y = self.bottom().max(self.bottom() + delta.y);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}
