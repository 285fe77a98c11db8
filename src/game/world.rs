// Game world: the four shapes of the minigame and their listeners

use log::{debug, info, warn};

use super::layout::{self, TARGET_NAME};
use crate::engine::scene::{Color, Scene, SceneError, Shape, ShapeId};

/// Handles to the minigame's shapes.
///
/// Listeners capture a copy of this struct, so the game never needs global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameWorld {
    ball: ShapeId,
    barrier: ShapeId,
    funnel: ShapeId,
    target: ShapeId,
}

impl GameWorld {
    /// Build the shapes, add them to `scene` and bind the listeners.
    /// Meant to be called once, on an empty scene.
    pub fn setup(scene: &mut Scene) -> Result<Self, SceneError> {
        let world = Self {
            ball: Self::setup_ball(scene)?,
            barrier: Self::setup_barrier(scene)?,
            funnel: Self::setup_funnel(scene)?,
            target: Self::setup_target(scene)?,
        };
        world.bind_listeners(scene)?;

        info!("Game world ready with {} shapes", scene.len());
        Ok(world)
    }

    /// Red ball that falls under gravity
    fn setup_ball(scene: &mut Scene) -> Result<ShapeId, SceneError> {
        let mut ball = Shape::oval(layout::BALL_SIZE, layout::BALL_SIZE);
        ball.set_position(layout::BALL_START);
        ball.set_has_physics(true);
        ball.set_fill_color(Color::Red);
        scene.add(ball)
    }

    /// Immobile bar that keeps the ball from falling off the screen
    fn setup_barrier(scene: &mut Scene) -> Result<ShapeId, SceneError> {
        let mut barrier = Shape::polygon(layout::barrier_points());
        barrier.set_position(layout::BARRIER_POSITION);
        barrier.set_has_physics(true);
        barrier.set_immobile(true);
        scene.add(barrier)
    }

    /// Funnel at the top of the scene, no physics
    fn setup_funnel(scene: &mut Scene) -> Result<ShapeId, SceneError> {
        let position = layout::funnel_position(scene.height());
        if !scene.in_bounds(position) {
            warn!(
                "Funnel at {} is outside the {}x{} scene and cannot be tapped on screen",
                position,
                scene.width(),
                scene.height()
            );
        }

        let mut funnel = Shape::polygon(layout::funnel_points());
        funnel.set_position(position);
        scene.add(funnel)
    }

    /// Blue target that doesn't move and lets the ball pass through
    fn setup_target(scene: &mut Scene) -> Result<ShapeId, SceneError> {
        let mut target = Shape::polygon(layout::target_points());
        target.set_position(layout::TARGET_POSITION);
        target.set_has_physics(true);
        target.set_immobile(true);
        target.set_fill_color(Color::Blue);
        target.set_impermeable(false);
        let id = scene.add(target)?;
        scene.set_name(id, TARGET_NAME)?;
        Ok(id)
    }

    fn bind_listeners(self, scene: &mut Scene) -> Result<(), SceneError> {
        scene.set_on_tapped(self.funnel, move |scene: &mut Scene| {
            if let Err(e) = self.drop_ball(scene) {
                warn!("Failed to drop ball: {}", e);
            }
        })?;
        scene.set_on_collision(self.ball, move |scene: &mut Scene, other: ShapeId| {
            if let Err(e) = self.ball_collided(scene, other) {
                warn!("Failed to handle ball collision: {}", e);
            }
        })
    }

    /// Ball collision listener: paints the target green when the ball hits it.
    /// Any other shape is ignored.
    pub fn ball_collided(&self, scene: &mut Scene, other: ShapeId) -> Result<(), SceneError> {
        if other != self.target {
            return Ok(());
        }

        let target = scene.shape_mut(other)?;
        if target.fill_color() != Color::Green {
            info!("Ball hit the target");
        }
        target.set_fill_color(Color::Green);
        Ok(())
    }

    /// Funnel tap listener: moves the ball to where the funnel is now
    pub fn drop_ball(&self, scene: &mut Scene) -> Result<(), SceneError> {
        let position = scene.shape(self.funnel)?.position();
        scene.shape_mut(self.ball)?.set_position(position);
        debug!("Ball dropped from {}", position);
        Ok(())
    }

    pub fn ball(&self) -> ShapeId {
        self.ball
    }

    pub fn barrier(&self) -> ShapeId {
        self.barrier
    }

    pub fn funnel(&self) -> ShapeId {
        self.funnel
    }

    pub fn target(&self) -> ShapeId {
        self.target
    }

    /// Whether the ball has reached the target
    pub fn target_hit(&self, scene: &Scene) -> Result<bool, SceneError> {
        Ok(scene.shape(self.target)?.fill_color() == Color::Green)
    }
}
