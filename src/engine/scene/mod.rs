// Scene: shape registry, physics stepping and event dispatch
//
// Shapes are added once and live as long as the scene. Game code mutates
// them through `Scene` and reacts to taps and collisions through listeners.

mod config;
pub mod geometry;
mod listener;
mod registry;
mod shape;

pub use config::{parse_or, SceneConfig};
pub use registry::Scene;
pub use shape::{Color, Shape, ShapeId, ShapeKind};

/// Scene errors
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Unknown shape: {0}")]
    UnknownShape(ShapeId),

    #[error("Shape name already in use: {0}")]
    DuplicateName(String),

    #[error("Shape has no area ({vertices} vertices)")]
    DegenerateShape { vertices: usize },

    #[error("Invalid scene dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Invalid timestep: {0} (must be a positive number of seconds)")]
    InvalidTimestep(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_error_display() {
        let err = SceneError::DuplicateName("target".to_string());
        assert_eq!(err.to_string(), "Shape name already in use: target");

        let err = SceneError::UnknownShape(ShapeId(7));
        assert_eq!(err.to_string(), "Unknown shape: shape#7");

        let err = SceneError::InvalidTimestep(-0.5);
        assert_eq!(
            err.to_string(),
            "Invalid timestep: -0.5 (must be a positive number of seconds)"
        );
    }
}
