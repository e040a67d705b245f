//! BoomZap - a circle-dodging arcade game
//!
//! Core modules:
//! - `sim`: Simulation (bodies, entities, collisions, spawning, phases)
//! - `driver`: Frame driver with fixed-step accumulators
//! - `render`: Semantic draw requests for an external renderer
//! - `settings`: Runtime configuration
//! - `error`: Error types

pub mod driver;
pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use driver::{FixedStep, FrameDriver};
pub use error::GameError;
pub use render::{DrawCommand, Scene, build_scene};
pub use settings::{EnemyWrap, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield half extent; the board spans [-1, 1] on both axes
    pub const BOARD_EXTENT: f32 = 1.0;

    /// Player movement speed (world units per second)
    pub const PLAYER_SPEED: f32 = 0.7;
    pub const PLAYER_RADIUS: f32 = 0.1;
    pub const PLAYER_START_COLOR: [f32; 3] = [0.1, 0.2, 0.3];
    pub const PLAYER_START_LIVES: u32 = 3;
    /// Upper bound of the per-channel color increment
    pub const COLOR_DRIFT: f32 = 0.1;

    /// Enemy radius is sampled from [MIN, MIN + SPREAD)
    pub const ENEMY_MIN_RADIUS: f32 = 0.08;
    pub const ENEMY_RADIUS_SPREAD: f32 = 1.0 / 30.0;
    /// Spawns must land outside this multiple of the combined radii
    pub const SPAWN_CLEARANCE: f32 = 3.0;
    /// Enemy speed per axis is (BASE + U[0,1)) * SCALE
    pub const ENEMY_BASE_SPEED: f32 = 0.3;
    pub const ENEMY_SPEED_SCALE: f32 = 0.7;
    pub const ENEMY_COLOR: [f32; 3] = [0.4, 0.4, 0.4];
    pub const ENEMY_WEAKENED_COLOR: [f32; 3] = [1.0, 0.5, 0.6];

    /// Boom area-effect radius around the player
    pub const BOOM_RADIUS: f32 = 0.25;
    /// Inner ring of the boom effect (cosmetic)
    pub const BOOM_INNER_RADIUS: f32 = 0.175;
    /// Boom velocity nudge per axis is U[0,1) * IMPULSE * dt
    pub const BOOM_IMPULSE: f32 = 20.0;

    /// Population floor; one more enemy per SCORE_PER_ENEMY points
    pub const BASE_POPULATION: usize = 3;
    pub const SCORE_PER_ENEMY: i32 = 10;

    const _: () = assert!(PLAYER_RADIUS > 0.0 && ENEMY_MIN_RADIUS > 0.0);
    // Some corner is always at least √2 from the player, so a smaller
    // clearance ring leaves room to spawn
    const _: () = assert!(
        SPAWN_CLEARANCE * (PLAYER_RADIUS + ENEMY_MIN_RADIUS + ENEMY_RADIUS_SPREAD)
            < std::f32::consts::SQRT_2 * BOARD_EXTENT
    );
}

/// Width over height of the window, 1.0 for degenerate sizes
#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        return 1.0;
    }
    width as f32 / height as f32
}

/// Convert a raw cursor position (pixels, origin top-left) to world space.
///
/// The result is aspect corrected: x spans [-aspect, aspect] and y spans
/// [-1, 1] with y pointing up, matching how bodies are drawn.
pub fn cursor_to_world(cursor_px: (f64, f64), window: (u32, u32)) -> Vec2 {
    let (width, height) = window;
    if width == 0 || height == 0 {
        return Vec2::ZERO;
    }
    let ratio = aspect_ratio(width, height);
    let ndc_x = (cursor_px.0 / width as f64 * 2.0 - 1.0) as f32;
    let ndc_y = (1.0 - cursor_px.1 / height as f64 * 2.0) as f32;
    Vec2::new(ndc_x * ratio, ndc_y)
}
