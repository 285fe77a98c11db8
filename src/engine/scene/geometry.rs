// Local-space outlines and point queries for shape kinds

use crate::core::math::bounding_box_center;
use glam::Vec2;
use parry2d::math::{Isometry, Point as ParryPoint};
use parry2d::query::PointQuery;
use parry2d::shape::{Ball, ConvexPolygon};
use std::f32::consts::TAU;

use super::shape::ShapeKind;

/// Number of vertices used to approximate a non-circular oval
pub const OVAL_SEGMENTS: usize = 32;

/// Radius of an oval that is a circle
pub fn circle_radius(kind: &ShapeKind) -> Option<f32> {
    match kind {
        ShapeKind::Oval { width, height } if width == height => Some(*width as f32 / 2.0),
        _ => None,
    }
}

/// Outline vertices centred on the shape's position
pub fn outline(kind: &ShapeKind) -> Vec<Vec2> {
    match kind {
        ShapeKind::Oval { width, height } => {
            let radii = Vec2::new(*width as f32, *height as f32) * 0.5;
            (0..OVAL_SEGMENTS)
                .map(|i| {
                    let angle = i as f32 / OVAL_SEGMENTS as f32 * TAU;
                    Vec2::new(angle.cos(), angle.sin()) * radii
                })
                .collect()
        }
        ShapeKind::Polygon { points } => {
            let points: Vec<Vec2> = points.iter().map(|p| p.to_vec2()).collect();
            let center = bounding_box_center(&points);
            points.into_iter().map(|p| p - center).collect()
        }
    }
}

fn convex_outline(kind: &ShapeKind) -> Option<ConvexPolygon> {
    let points: Vec<ParryPoint<f32>> = outline(kind)
        .into_iter()
        .map(|v| ParryPoint::new(v.x, v.y))
        .collect();
    ConvexPolygon::from_convex_hull(&points)
}

/// Signed area of a closed polygon (positive when counter-clockwise)
pub fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f32>()
        * 0.5
}

/// Whether the shape has no area and cannot be hit or collided with
pub fn is_degenerate(kind: &ShapeKind) -> bool {
    match kind {
        ShapeKind::Oval { width, height } => *width == 0 || *height == 0,
        ShapeKind::Polygon { points } if points.len() < 3 => true,
        ShapeKind::Polygon { .. } => signed_area(&outline(kind)).abs() < f32::EPSILON,
    }
}

/// Whether `point` lies inside a shape of this kind placed at `center`
pub fn contains(kind: &ShapeKind, center: Vec2, point: Vec2) -> bool {
    if is_degenerate(kind) {
        return false;
    }

    let placement = Isometry::translation(center.x, center.y);
    let point = ParryPoint::new(point.x, point.y);

    if let Some(radius) = circle_radius(kind) {
        return Ball::new(radius).contains_point(&placement, &point);
    }

    convex_outline(kind)
        .map(|polygon| polygon.contains_point(&placement, &point))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Point;
    use approx::assert_relative_eq;

    fn diamond() -> ShapeKind {
        ShapeKind::Polygon {
            points: vec![
                Point::new(10, 0),
                Point::new(0, 10),
                Point::new(10, 20),
                Point::new(20, 10),
            ],
        }
    }

    #[test]
    fn test_polygon_outline_is_centered() {
        let outline = outline(&diamond());
        assert_eq!(outline.len(), 4);
        assert_relative_eq!(outline[0].x, 0.0);
        assert_relative_eq!(outline[0].y, -10.0);
        assert_relative_eq!(outline[3].x, 10.0);
        assert_relative_eq!(outline[3].y, 0.0);
    }

    #[test]
    fn test_oval_outline_extents() {
        let outline = outline(&ShapeKind::Oval { width: 40, height: 20 });
        assert_eq!(outline.len(), OVAL_SEGMENTS);
        let max_x = outline.iter().map(|v| v.x).fold(f32::MIN, f32::max);
        let max_y = outline.iter().map(|v| v.y).fold(f32::MIN, f32::max);
        assert_relative_eq!(max_x, 20.0, epsilon = 1e-4);
        assert_relative_eq!(max_y, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_circle_radius() {
        assert_eq!(circle_radius(&ShapeKind::Oval { width: 40, height: 40 }), Some(20.0));
        assert_eq!(circle_radius(&ShapeKind::Oval { width: 40, height: 20 }), None);
        assert_eq!(circle_radius(&diamond()), None);
    }

    #[test]
    fn test_degenerate_shapes() {
        assert!(is_degenerate(&ShapeKind::Oval { width: 0, height: 10 }));
        assert!(is_degenerate(&ShapeKind::Polygon {
            points: vec![Point::new(0, 0), Point::new(5, 5), Point::new(10, 10)],
        }));
        assert!(is_degenerate(&ShapeKind::Polygon { points: Vec::new() }));
        assert!(!is_degenerate(&diamond()));
    }

    #[test]
    fn test_signed_area() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];
        assert_relative_eq!(signed_area(&square), 4.0);
        let reversed: Vec<Vec2> = square.iter().rev().copied().collect();
        assert_relative_eq!(signed_area(&reversed), -4.0);
    }

    #[test]
    fn test_contains_polygon() {
        let center = Vec2::new(200.0, 400.0);
        assert!(contains(&diamond(), center, Vec2::new(200.0, 400.0)));
        assert!(contains(&diamond(), center, Vec2::new(205.0, 402.0)));
        // Corner of the bounding box lies outside the diamond
        assert!(!contains(&diamond(), center, Vec2::new(209.0, 409.0)));
    }

    #[test]
    fn test_contains_ellipse() {
        let kind = ShapeKind::Oval { width: 40, height: 20 };
        assert!(contains(&kind, Vec2::ZERO, Vec2::new(15.0, 0.0)));
        assert!(!contains(&kind, Vec2::ZERO, Vec2::new(0.0, 15.0)));
    }
}
