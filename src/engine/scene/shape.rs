// Shape primitives owned by a scene

use crate::core::math::Point;
use glam::Vec2;
use std::fmt;

use super::geometry;

/// Stable handle to a shape inside a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub(crate) u32);

impl ShapeId {
    /// Raw index of the shape in insertion order
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape#{}", self.0)
    }
}

/// Fill colors a shape can be painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Black,
    Red,
    Green,
    Blue,
}

impl Color {
    /// Lowercase name, used in log output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

/// Geometry of a shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeKind {
    /// Ellipse with the given bounding box size
    Oval { width: u32, height: u32 },
    /// Polygon from an ordered vertex list in local coordinates.
    /// The shape's position is the centre of the vertices' bounding box.
    Polygon { points: Vec<Point> },
}

/// A 2D shape that can optionally take part in the physics simulation
#[derive(Debug, Clone)]
pub struct Shape {
    kind: ShapeKind,
    /// Exact position; physics moves shapes by fractions of a point
    translation: Vec2,
    fill_color: Color,
    has_physics: bool,
    is_immobile: bool,
    is_impermeable: bool,
    name: Option<String>,
    /// Set when the position is assigned directly rather than by physics
    moved: bool,
}

impl Shape {
    fn with_kind(kind: ShapeKind) -> Self {
        Self {
            kind,
            translation: Vec2::ZERO,
            fill_color: Color::default(),
            has_physics: false,
            is_immobile: false,
            is_impermeable: true,
            name: None,
            moved: false,
        }
    }

    /// Create an oval shape
    pub fn oval(width: u32, height: u32) -> Self {
        Self::with_kind(ShapeKind::Oval { width, height })
    }

    /// Create a polygon shape from its vertices
    pub fn polygon(points: Vec<Point>) -> Self {
        Self::with_kind(ShapeKind::Polygon { points })
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Position snapped to integer scene coordinates
    pub fn position(&self) -> Point {
        Point::from_vec2_rounded(self.translation)
    }

    /// Move the shape. A body in the physics world is teleported on the next step
    /// and loses its velocity.
    pub fn set_position(&mut self, position: Point) {
        self.translation = position.to_vec2();
        self.moved = true;
    }

    /// Exact position, including the fractional part produced by physics
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn has_physics(&self) -> bool {
        self.has_physics
    }

    pub fn set_has_physics(&mut self, has_physics: bool) {
        self.has_physics = has_physics;
    }

    /// Immobile shapes are never moved by simulation forces
    pub fn is_immobile(&self) -> bool {
        self.is_immobile
    }

    pub fn set_immobile(&mut self, immobile: bool) {
        self.is_immobile = immobile;
    }

    /// Other shapes cannot pass through an impermeable shape
    pub fn is_impermeable(&self) -> bool {
        self.is_impermeable
    }

    pub fn set_impermeable(&mut self, impermeable: bool) {
        self.is_impermeable = impermeable;
    }

    /// Names are assigned through [`super::Scene::set_name`], which keeps them unique
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn assign_name(&mut self, name: String) {
        self.name = Some(name);
    }

    /// Whether `point` lies inside the shape at its current position
    pub fn contains(&self, point: Point) -> bool {
        geometry::contains(&self.kind, self.translation, point.to_vec2())
    }

    /// Clear and return the moved flag
    pub(crate) fn take_moved(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }

    /// Update the position from the physics world without flagging a move
    pub(crate) fn sync_translation(&mut self, translation: Vec2) {
        self.translation = translation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_defaults() {
        let shape = Shape::oval(40, 40);
        assert_eq!(shape.position(), Point::new(0, 0));
        assert_eq!(shape.fill_color(), Color::Black);
        assert!(!shape.has_physics());
        assert!(!shape.is_immobile());
        assert!(shape.is_impermeable());
        assert_eq!(shape.name(), None);
    }

    #[test]
    fn test_set_position_marks_move() {
        let mut shape = Shape::oval(10, 10);
        shape.set_position(Point::new(200, 455));
        assert_eq!(shape.position(), Point::new(200, 455));
        assert!(shape.take_moved());
        assert!(!shape.take_moved());
    }

    #[test]
    fn test_sync_translation_is_not_a_move() {
        let mut shape = Shape::oval(10, 10);
        shape.sync_translation(Vec2::new(10.4, 20.6));
        assert_eq!(shape.position(), Point::new(10, 21));
        assert!(!shape.take_moved());
    }

    #[test]
    fn test_contains_follows_position() {
        let mut shape = Shape::oval(40, 40);
        shape.set_position(Point::new(100, 100));
        assert!(shape.contains(Point::new(110, 110)));
        assert!(!shape.contains(Point::new(130, 100)));
    }

    #[test]
    fn test_shape_id_display() {
        assert_eq!(ShapeId(3).to_string(), "shape#3");
        assert_eq!(ShapeId(3).index(), 3);
    }
}
