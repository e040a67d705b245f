//! BoomZap headless runner
//!
//! Drives the simulation with the autopilot at a steady 50 fps, so every
//! frame runs one tick, and logs what happens.
//! Usage: `boom-zap [settings.json] [frames]`

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use boom_zap::sim::{GameEvent, GamePhase, GameWorld, autopilot_input};
use boom_zap::{FrameDriver, GameError, Settings, build_scene};

/// Simulated frame time, just over one tick interval
const FRAME_DT: f32 = 0.02;
const DEFAULT_FRAMES: u64 = 3600;
const ASPECT_RATIO: f32 = 16.0 / 9.0;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    match run(settings, frames) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: Settings, frames: u64) -> Result<(), GameError> {
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("BoomZap starting with seed {seed}");

    let world = GameWorld::new(seed, settings)?;
    let mut driver = FrameDriver::new(world);
    let mut runs = 0u32;
    let mut best = i32::MIN;

    for _ in 0..frames {
        let input = autopilot_input(driver.world());
        driver.frame(&input, FRAME_DT)?;

        for event in driver.world_mut().drain_events() {
            match event {
                GameEvent::PhaseChanged {
                    to: GamePhase::GameOver,
                    ..
                } => {
                    runs += 1;
                    let score = driver.world().final_score.unwrap_or_default();
                    best = best.max(score);
                    log::info!("Run {runs} ended with score {score}");
                }
                GameEvent::PlayerHit { lives_left } => log::info!("Hit! {lives_left} lives left"),
                other => log::trace!("{other:?}"),
            }
        }
    }

    let world = driver.world();
    let cursor = autopilot_input(world).cursor;
    let scene = build_scene(world, cursor, ASPECT_RATIO);
    log::info!(
        "Stopped after {} frames in {:?}: score {}, lives {}, {} enemies, {} draw commands",
        driver.frames(),
        world.phase,
        world.player.score,
        world.player.lives,
        world.enemies.len(),
        scene.commands.len()
    );
    if runs > 0 {
        log::info!("{runs} runs finished, best score {best}");
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
