use anyhow::{Context, Result};
use log::{info, warn};
use std::time::Duration;

mod core;
mod engine;
mod game;

use engine::scene::{parse_or, Scene, SceneConfig};
use game::GameWorld;

/// Environment variable bounding how long the demo simulates
const ENV_MAX_STEPS: &str = "FUNNEL_DROP_MAX_STEPS";
const DEFAULT_MAX_STEPS: u32 = 600;

/// Wall time fed to the scene per frame
const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// Frames to let the ball settle before tapping the funnel
const SETTLE_FRAMES: u32 = 60;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Funnel Drop...");

    let config = SceneConfig::from_env().context("Failed to read scene configuration")?;
    let max_steps = parse_or(&|key| std::env::var(key).ok(), ENV_MAX_STEPS, DEFAULT_MAX_STEPS)?;

    let mut scene = Scene::new(config).context("Failed to create scene")?;
    let world = GameWorld::setup(&mut scene).context("Failed to set up game world")?;

    for _ in 0..SETTLE_FRAMES {
        scene.advance(FRAME_TIME)?;
    }
    info!(
        "Ball settled at {} on the barrier at {} ({} of {} shapes simulated)",
        scene.shape(world.ball())?.position(),
        scene.shape(world.barrier())?.position(),
        scene.physical_len(),
        scene.len()
    );

    let funnel_position = scene.shape(world.funnel())?.position();
    info!("Tapping the funnel at {}", funnel_position);
    if scene.tap(funnel_position).is_none() {
        warn!("Nothing to tap at {}", funnel_position);
    }

    while !world.target_hit(&scene)? && scene.clock().step_count() < max_steps as u64 {
        scene.advance(FRAME_TIME)?;
    }

    let steps = scene.clock().step_count();
    let target_color = scene.shape(world.target())?.fill_color();
    if world.target_hit(&scene)? {
        info!(
            "Target is {} after {} steps (~{:.2}s)",
            target_color.name(),
            steps,
            steps as f32 * scene.clock().timestep_secs()
        );
    } else {
        warn!(
            "Target still {} after {} steps, ball at {}",
            target_color.name(),
            steps,
            scene.shape(world.ball())?.position()
        );
    }

    info!("Shutting down...");
    Ok(())
}
