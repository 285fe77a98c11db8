// Math utilities: integer scene points and conversions to float vectors

use glam::{IVec2, Vec2};
use std::fmt;

/// A point in scene coordinates.
///
/// The scene origin is the bottom-left corner and `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to a float vector
    pub fn to_vec2(self) -> Vec2 {
        IVec2::from(self).as_vec2()
    }

    /// Snap a float vector to the nearest integer point
    pub fn from_vec2_rounded(v: Vec2) -> Self {
        v.round().as_ivec2().into()
    }
}

impl From<IVec2> for Point {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for IVec2 {
    fn from(p: Point) -> Self {
        IVec2::new(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Centre of the axis-aligned bounding box of a point set
pub fn bounding_box_center(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    let (min, max) = points
        .iter()
        .fold((Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)), |(min, max), p| {
            (min.min(*p), max.max(*p))
        });
    (min + max) * 0.5
}
