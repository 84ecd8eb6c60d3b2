// Arena-space geometry: sizes, bounding boxes and headings.

use glam::Vec2;

/// Width/height of an entity in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn half(self) -> Vec2 {
        self.as_vec2() * 0.5
    }
}

/// Axis-aligned bounding box in arena coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    pub fn from_top_left(position: Vec2, size: Size) -> Self {
        Self {
            left: position.x,
            top: position.y,
            right: position.x + size.width,
            bottom: position.y + size.height,
        }
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

/// Angle in radians from `from` toward `to`, measured from +x.
pub fn heading_radians(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians.to_degrees()
}
