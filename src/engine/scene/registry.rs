use log::{debug, warn};
use std::time::Duration;

use super::listener::{CollisionListener, TapListener};
use super::shape::{Shape, ShapeId, ShapeKind};
use super::{geometry, SceneConfig, SceneError};
use crate::core::math::Point;
use crate::engine::clock::SimulationClock;
use crate::engine::physics::PhysicsWorld;

/// A shape plus the listeners bound to it
struct Slot {
    shape: Shape,
    on_tapped: Option<Box<dyn TapListener>>,
    on_collision: Option<Box<dyn CollisionListener>>,
}

/// Container owning every shape, the physics world and the simulation clock
pub struct Scene {
    width: i32,
    height: i32,
    slots: Vec<Slot>,
    physics: PhysicsWorld,
    clock: SimulationClock,
}

impl Scene {
    /// Create an empty scene
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        if config.width <= 0 || config.height <= 0 {
            return Err(SceneError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }
        if config.timestep <= 0.0 || Duration::try_from_secs_f32(config.timestep).is_err() {
            return Err(SceneError::InvalidTimestep(config.timestep));
        }

        let physics = PhysicsWorld::new(config.gravity, config.timestep);
        debug!(
            "Scene {}x{} (gravity {}, timestep {:.4}s)",
            config.width,
            config.height,
            physics.gravity(),
            physics.timestep()
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            slots: Vec::new(),
            physics,
            clock: SimulationClock::new(config.timestep, config.max_steps_per_tick),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `point` lies within the scene's bounds
    pub fn in_bounds(&self, point: Point) -> bool {
        (0..=self.width).contains(&point.x) && (0..=self.height).contains(&point.y)
    }

    /// Add a shape, returning its handle
    pub fn add(&mut self, shape: Shape) -> Result<ShapeId, SceneError> {
        if geometry::is_degenerate(shape.kind()) {
            let vertices = match shape.kind() {
                ShapeKind::Oval { .. } => 0,
                ShapeKind::Polygon { points } => points.len(),
            };
            return Err(SceneError::DegenerateShape { vertices });
        }

        let id = ShapeId(self.slots.len() as u32);
        self.slots.push(Slot {
            shape,
            on_tapped: None,
            on_collision: None,
        });
        debug!("Added {}", id);
        Ok(id)
    }

    /// Number of shapes in the scene
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Handles of all shapes in insertion order
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = ShapeId> + '_ {
        (0..self.slots.len()).map(|i| ShapeId(i as u32))
    }

    pub fn shape(&self, id: ShapeId) -> Result<&Shape, SceneError> {
        self.slots
            .get(id.index())
            .map(|slot| &slot.shape)
            .ok_or(SceneError::UnknownShape(id))
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Result<&mut Shape, SceneError> {
        self.slots
            .get_mut(id.index())
            .map(|slot| &mut slot.shape)
            .ok_or(SceneError::UnknownShape(id))
    }

    fn slot_mut(&mut self, id: ShapeId) -> Result<&mut Slot, SceneError> {
        self.slots
            .get_mut(id.index())
            .ok_or(SceneError::UnknownShape(id))
    }

    /// Name a shape. Names are unique within a scene.
    pub fn set_name(&mut self, id: ShapeId, name: impl Into<String>) -> Result<(), SceneError> {
        let name = name.into();
        if let Some(owner) = self.find_by_name(&name) {
            if owner != id {
                return Err(SceneError::DuplicateName(name));
            }
        }
        self.shape_mut(id)?.assign_name(name);
        Ok(())
    }

    /// Find the shape carrying `name`
    pub fn find_by_name(&self, name: &str) -> Option<ShapeId> {
        self.ids()
            .find(|id| self.slots[id.index()].shape.name() == Some(name))
    }

    /// Call `listener` whenever the shape is tapped
    pub fn set_on_tapped<L>(&mut self, id: ShapeId, listener: L) -> Result<(), SceneError>
    where
        L: TapListener + 'static,
    {
        self.slot_mut(id)?.on_tapped = Some(Box::new(listener));
        Ok(())
    }

    /// Call `listener` whenever the shape starts touching another shape
    pub fn set_on_collision<L>(&mut self, id: ShapeId, listener: L) -> Result<(), SceneError>
    where
        L: CollisionListener + 'static,
    {
        self.slot_mut(id)?.on_collision = Some(Box::new(listener));
        Ok(())
    }

    /// Topmost shape containing `point`; later additions are on top
    pub fn shape_at(&self, point: Point) -> Option<ShapeId> {
        self.ids()
            .rev()
            .find(|id| self.slots[id.index()].shape.contains(point))
    }

    /// Tap the scene at `point`, returning the shape that was hit
    pub fn tap(&mut self, point: Point) -> Option<ShapeId> {
        let id = self.shape_at(point)?;
        debug!("Tap at {} hit {}", point, id);
        if let Err(e) = self.tap_shape(id) {
            warn!("Failed to deliver tap to {}: {}", id, e);
        }
        Some(id)
    }

    /// Deliver a tap to a specific shape
    pub fn tap_shape(&mut self, id: ShapeId) -> Result<(), SceneError> {
        // Listeners get `&mut Scene`, so the listener is moved out while it runs
        let Some(mut listener) = self.slot_mut(id)?.on_tapped.take() else {
            return Ok(());
        };
        listener.tapped(self);

        let slot = self.slot_mut(id)?;
        if slot.on_tapped.is_none() {
            slot.on_tapped = Some(listener);
        }
        Ok(())
    }

    /// Deliver a collision between `a` and `b` to both shapes' listeners
    pub fn collide(&mut self, a: ShapeId, b: ShapeId) -> Result<(), SceneError> {
        self.shape(a)?;
        self.shape(b)?;
        debug!("Collision between {} and {}", a, b);
        self.dispatch_collision(a, b)?;
        self.dispatch_collision(b, a)
    }

    fn dispatch_collision(&mut self, id: ShapeId, other: ShapeId) -> Result<(), SceneError> {
        let Some(mut listener) = self.slot_mut(id)?.on_collision.take() else {
            return Ok(());
        };
        listener.collided(self, other);

        let slot = self.slot_mut(id)?;
        if slot.on_collision.is_none() {
            slot.on_collision = Some(listener);
        }
        Ok(())
    }

    /// Run one fixed physics step and dispatch the collisions it produced
    pub fn step(&mut self) -> Result<(), SceneError> {
        self.sync_physics();
        let started = self.physics.step();

        for slot_index in 0..self.slots.len() {
            let id = ShapeId(slot_index as u32);
            if !self.physics.is_dynamic(id) {
                continue;
            }
            if let Some(translation) = self.physics.translation(id) {
                self.slots[slot_index].shape.sync_translation(translation);
            }
        }

        for (a, b) in started {
            self.collide(a, b)?;
        }
        Ok(())
    }

    /// Advance the simulation by `elapsed` wall time, returns the steps run
    pub fn advance(&mut self, elapsed: Duration) -> Result<u32, SceneError> {
        let steps = self.clock.tick(elapsed);
        for _ in 0..steps {
            self.step()?;
        }
        Ok(steps)
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Number of shapes currently simulated
    pub fn physical_len(&self) -> usize {
        self.physics.len()
    }

    /// Bring the physics world in line with shape flags and moved positions
    fn sync_physics(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let id = ShapeId(index as u32);
            let shape = &mut slot.shape;
            let moved = shape.take_moved();

            if !shape.has_physics() {
                if self.physics.contains(id) {
                    self.physics.detach(id);
                }
                continue;
            }

            let immobile = shape.is_immobile();
            let sensor = !shape.is_impermeable();

            if !self.physics.contains(id) {
                if !self.physics.attach(id, shape.kind(), shape.translation(), immobile, sensor) {
                    warn!("{} has physics but no collider could be built", id);
                }
                continue;
            }

            self.physics.configure(id, immobile, sensor);
            if moved {
                self.physics.teleport(id, shape.translation());
            }
        }
    }
}
