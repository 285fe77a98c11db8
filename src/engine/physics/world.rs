use glam::Vec2;
use log::debug;
use rapier2d::prelude::*;
use std::collections::HashMap;

use super::body::{BodyBuilder, ColliderBuilder2D};
use super::collision::{CollisionEvent, CollisionEventQueue};
use crate::engine::scene::{ShapeId, ShapeKind};

/// Rapier handles and the flags they were built with
#[derive(Debug, Clone, Copy)]
struct ShapeBody {
    body: RigidBodyHandle,
    collider: ColliderHandle,
    immobile: bool,
    sensor: bool,
}

/// Physics world mirroring the scene's physical shapes
pub struct PhysicsWorld {
    /// Gravity vector in points/s²
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    /// Physics pipeline handles collision detection and solving
    physics_pipeline: PhysicsPipeline,

    /// Island manager for sleeping bodies
    island_manager: IslandManager,

    /// Broad phase collision detection
    broad_phase: DefaultBroadPhase,

    /// Narrow phase collision detection
    narrow_phase: NarrowPhase,

    /// Impulse joint set
    impulse_joint_set: ImpulseJointSet,

    /// Multibody joint set
    multibody_joint_set: MultibodyJointSet,

    /// CCD solver for fast-moving objects
    ccd_solver: CCDSolver,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,

    /// Collision event handler
    collision_event_queue: CollisionEventQueue,

    /// Bodies owned by each shape
    shape_bodies: HashMap<ShapeId, ShapeBody>,

    /// Reverse mapping used to resolve collision events
    collider_to_shape: HashMap<ColliderHandle, ShapeId>,
}

impl PhysicsWorld {
    /// Create a physics world with the given vertical gravity and fixed timestep
    pub fn new(gravity: Real, timestep: Real) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = timestep;

        Self {
            gravity: vector![0.0, gravity],
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            collision_event_queue: CollisionEventQueue::new(),
            shape_bodies: HashMap::new(),
            collider_to_shape: HashMap::new(),
        }
    }

    /// Step the physics simulation forward by one timestep.
    ///
    /// Returns the pairs of shapes that started touching during the step.
    pub fn step(&mut self) -> Vec<(ShapeId, ShapeId)> {
        self.collision_event_queue.clear();

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &self.collision_event_queue,
        );

        self.collision_event_queue
            .drain()
            .into_iter()
            .filter_map(|event| match event {
                CollisionEvent::Started {
                    collider1,
                    collider2,
                } => {
                    let a = self.collider_to_shape.get(&collider1)?;
                    let b = self.collider_to_shape.get(&collider2)?;
                    Some((*a, *b))
                }
                CollisionEvent::Stopped { .. } => None,
            })
            .collect()
    }

    /// Whether the shape currently has a body
    pub fn contains(&self, id: ShapeId) -> bool {
        self.shape_bodies.contains_key(&id)
    }

    /// Number of shapes with a body
    pub fn len(&self) -> usize {
        self.shape_bodies.len()
    }

    /// Create a body and collider for a shape.
    ///
    /// Returns `false` if the geometry cannot be turned into a collider.
    pub fn attach(
        &mut self,
        id: ShapeId,
        kind: &ShapeKind,
        translation: Vec2,
        immobile: bool,
        sensor: bool,
    ) -> bool {
        let Some(collider) = ColliderBuilder2D::from_kind(kind) else {
            return false;
        };
        self.detach(id);

        let body = BodyBuilder::for_mobility(immobile)
            .position(translation)
            .build();
        let body = self.rigid_body_set.insert(body);
        let collider = self.collider_set.insert_with_parent(
            collider.sensor(sensor).build(),
            body,
            &mut self.rigid_body_set,
        );

        debug!(
            "Attached body to {} (immobile: {}, sensor: {})",
            id, immobile, sensor
        );
        self.collider_to_shape.insert(collider, id);
        self.shape_bodies.insert(
            id,
            ShapeBody {
                body,
                collider,
                immobile,
                sensor,
            },
        );
        true
    }

    /// Remove a shape's body and collider, if it has one
    pub fn detach(&mut self, id: ShapeId) {
        let Some(shape_body) = self.shape_bodies.remove(&id) else {
            return;
        };
        self.collider_to_shape.remove(&shape_body.collider);
        self.rigid_body_set.remove(
            shape_body.body,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true, // remove attached colliders
        );
        debug!("Detached body from {}", id);
    }

    /// Apply mobility and permeability changes to an existing body
    pub fn configure(&mut self, id: ShapeId, immobile: bool, sensor: bool) {
        let Some(shape_body) = self.shape_bodies.get_mut(&id) else {
            return;
        };

        if shape_body.immobile != immobile {
            if let Some(body) = self.rigid_body_set.get_mut(shape_body.body) {
                let body_type = if immobile {
                    RigidBodyType::Fixed
                } else {
                    RigidBodyType::Dynamic
                };
                body.set_body_type(body_type, true);
            }
            shape_body.immobile = immobile;
        }

        if shape_body.sensor != sensor {
            if let Some(collider) = self.collider_set.get_mut(shape_body.collider) {
                collider.set_sensor(sensor);
            }
            shape_body.sensor = sensor;
        }
    }

    /// Move a body to `translation`, dropping any velocity it had
    pub fn teleport(&mut self, id: ShapeId, translation: Vec2) {
        let Some(body) = self
            .shape_bodies
            .get(&id)
            .and_then(|shape_body| self.rigid_body_set.get_mut(shape_body.body))
        else {
            return;
        };
        body.set_translation(vector![translation.x, translation.y], true);
        body.set_linvel(Vector::zeros(), true);
        body.set_angvel(0.0, true);
    }

    /// Current position of a shape's body
    pub fn translation(&self, id: ShapeId) -> Option<Vec2> {
        let shape_body = self.shape_bodies.get(&id)?;
        let body = self.rigid_body_set.get(shape_body.body)?;
        let t = body.translation();
        Some(Vec2::new(t.x, t.y))
    }

    /// Whether forces can move the shape's body
    pub fn is_dynamic(&self, id: ShapeId) -> bool {
        self.shape_bodies
            .get(&id)
            .is_some_and(|shape_body| !shape_body.immobile)
    }

    /// Get current gravity
    pub fn gravity(&self) -> Real {
        self.gravity.y
    }

    /// Get the current timestep
    pub fn timestep(&self) -> Real {
        self.integration_parameters.dt
    }
}
