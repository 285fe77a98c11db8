use crate::engine::scene::geometry;
use crate::engine::scene::ShapeKind;
use glam::Vec2;
use rapier2d::prelude::*;

/// Builder for the rigid body backing a shape
///
/// Shapes have no rotation, so rotation is always locked.
pub struct BodyBuilder {
    body_type: RigidBodyType,
    translation: Vector<Real>,
}

impl BodyBuilder {
    /// Create a new dynamic body (affected by forces and collisions)
    pub fn new_dynamic() -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            translation: Vector::zeros(),
        }
    }

    /// Create a new fixed (static) body (completely immovable)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            translation: Vector::zeros(),
        }
    }

    /// Dynamic or fixed depending on whether the shape is immobile
    pub fn for_mobility(immobile: bool) -> Self {
        if immobile {
            Self::new_fixed()
        } else {
            Self::new_dynamic()
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, position: Vec2) -> Self {
        self.translation = vector![position.x, position.y];
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .translation(self.translation)
            .lock_rotations()
            .build()
    }
}

/// Builder for the collider matching a shape's geometry
pub struct ColliderBuilder2D {
    builder: ColliderBuilder,
}

impl ColliderBuilder2D {
    /// Ball collider for circles, convex hull of the outline otherwise.
    /// Returns `None` when the geometry has no area.
    pub fn from_kind(kind: &ShapeKind) -> Option<Self> {
        if geometry::is_degenerate(kind) {
            return None;
        }

        let builder = match geometry::circle_radius(kind) {
            Some(radius) => ColliderBuilder::ball(radius),
            None => {
                let points: Vec<Point<Real>> = geometry::outline(kind)
                    .into_iter()
                    .map(|v| point![v.x, v.y])
                    .collect();
                ColliderBuilder::convex_hull(&points)?
            }
        };

        Some(Self {
            builder: builder
                .friction(0.5)
                .restitution(0.2)
                .active_events(ActiveEvents::COLLISION_EVENTS),
        })
    }

    /// Make this a sensor (detects overlaps but lets shapes pass through)
    pub fn sensor(mut self, is_sensor: bool) -> Self {
        self.builder = self.builder.sensor(is_sensor);
        self
    }

    /// Build the collider
    pub fn build(self) -> Collider {
        self.builder.build()
    }
}
