// Engine modules: scene, physics, simulation clock

pub mod clock;
pub mod physics;
pub mod scene;
