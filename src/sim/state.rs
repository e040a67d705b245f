//! Game state and entity types
//!
//! The `GameWorld` owns everything the simulation mutates: the player, the
//! enemy population, the current phase and the seeded RNG.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::Body;
use super::tick::TickInput;
use crate::consts::*;
use crate::error::GameError;
use crate::settings::{EnemyWrap, Settings};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for a click
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, showing the final score
    GameOver,
}

/// Things that happened during a frame, for logging and feedback
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    PlayerHit { lives_left: u32 },
    EnemyWeakened { index: usize },
    EnemyZapped { index: usize },
    EnemySpawned { population: usize },
}

/// Directional movement flags mirrored from input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// Velocity for this combination of flags.
    ///
    /// Exactly one of four cardinal or four diagonal directions, or zero
    /// for anything else (nothing held, opposing keys, three keys...).
    /// Diagonals split `speed` evenly so the magnitude stays `speed`.
    pub fn velocity(self, speed: f32) -> Vec2 {
        let d = (speed * speed / 2.0).sqrt();
        match (self.up, self.down, self.left, self.right) {
            (true, false, false, false) => Vec2::new(0.0, speed),
            (false, true, false, false) => Vec2::new(0.0, -speed),
            (false, false, true, false) => Vec2::new(-speed, 0.0),
            (false, false, false, true) => Vec2::new(speed, 0.0),
            (true, false, true, false) => Vec2::new(-d, d),
            (true, false, false, true) => Vec2::new(d, d),
            (false, true, true, false) => Vec2::new(-d, -d),
            (false, true, false, true) => Vec2::new(d, -d),
            _ => Vec2::ZERO,
        }
    }
}

/// The player's avatar
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub lives: u32,
    /// Can go negative
    pub score: i32,
    pub intent: MoveIntent,
    /// Primary button held: zap the enemy under the cursor
    pub zapping: bool,
    /// Secondary button held: weaken enemies around the player
    pub booming: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            body: Body::new(PLAYER_RADIUS, Vec2::ZERO, Vec3::from(PLAYER_START_COLOR)),
            lives: PLAYER_START_LIVES,
            score: 0,
            intent: MoveIntent::default(),
            zapping: false,
            booming: false,
        }
    }
}

impl Player {
    /// Mirror the held keys and buttons from an input snapshot
    pub fn apply_input(&mut self, input: &TickInput) {
        self.intent = input.intent;
        self.zapping = input.zap;
        self.booming = input.boom;
    }

    /// Turn the current intent into a velocity
    pub fn steer(&mut self) {
        self.body.vel = self.intent.velocity(PLAYER_SPEED);
    }

    /// Move, then reflect any coordinate that left the board through the origin
    pub fn update_position(&mut self, dt: f32) {
        self.body.integrate(dt);
        self.body.wrap_axis(0);
        self.body.wrap_axis(1);
    }

    /// Cosmetic color churn. A channel that overflows jumps to a fresh
    /// random value instead of clamping.
    pub fn update_color(&mut self, rng: &mut impl Rng) {
        for i in 0..3 {
            self.body.color[i] += rng.random::<f32>() * COLOR_DRIFT;
            if self.body.color[i] > 1.0 {
                self.body.color[i] = rng.random::<f32>();
            }
        }
    }

    /// Lose a life, never going below zero
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Back to the start position with full lives and no input held.
    /// Score and color are left alone.
    pub fn reset(&mut self) {
        self.lives = PLAYER_START_LIVES;
        self.body.pos = Vec2::ZERO;
        self.body.vel = Vec2::ZERO;
        self.intent = MoveIntent::default();
        self.zapping = false;
        self.booming = false;
    }
}

/// Enemy health
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Weakened = 1,
    Full = 2,
}

/// A drifting circle the player must avoid or destroy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub body: Body,
    pub health: Health,
}

impl Enemy {
    /// Construct a fresh enemy at a random position clear of the player.
    ///
    /// Spawning does not change the score: the +1 from the initial
    /// reinitialization is taken back here.
    pub fn spawn(
        player: &mut Player,
        rng: &mut impl Rng,
        max_attempts: u32,
    ) -> Result<Self, GameError> {
        let mut enemy = Self {
            body: Body::new(ENEMY_MIN_RADIUS, Vec2::ZERO, Vec3::from(ENEMY_COLOR)),
            health: Health::Full,
        };
        enemy.reinitialize(player, rng, max_attempts)?;
        player.score -= 1;
        Ok(enemy)
    }

    /// Full random reset: radius, position, velocity, color and health.
    /// Awards the player one point.
    ///
    /// Positions are rejection sampled until the enemy sits outside
    /// `SPAWN_CLEARANCE` times the combined radii around the player.
    pub fn reinitialize(
        &mut self,
        player: &mut Player,
        rng: &mut impl Rng,
        max_attempts: u32,
    ) -> Result<(), GameError> {
        let mut placed = false;
        for _ in 0..max_attempts {
            let radius = ENEMY_MIN_RADIUS + rng.random::<f32>() * ENEMY_RADIUS_SPREAD;
            let pos = Vec2::new(
                rng.random::<f32>() * 2.0 - 1.0,
                rng.random::<f32>() * 2.0 - 1.0,
            ) * BOARD_EXTENT;
            let clearance = SPAWN_CLEARANCE * (player.body.radius + radius);
            if player.body.distance_squared_to(pos) > clearance * clearance {
                self.body.radius = radius;
                self.body.pos = pos;
                placed = true;
                break;
            }
        }
        if !placed {
            return Err(GameError::SpawnExhausted {
                attempts: max_attempts,
            });
        }

        self.body.color = Vec3::from(ENEMY_COLOR);
        self.body.vel = Vec2::new(random_enemy_speed(rng), random_enemy_speed(rng));
        self.health = Health::Full;
        player.score += 1;
        Ok(())
    }

    /// Move, then reflect each axis that left the board.
    ///
    /// With `EnemyWrap::Restep` every reflection is followed by one more
    /// full step, before the next axis is checked.
    pub fn update_position(&mut self, dt: f32, wrap: EnemyWrap) {
        self.body.integrate(dt);
        for axis in 0..2 {
            if self.body.wrap_axis(axis) && wrap == EnemyWrap::Restep {
                self.body.integrate(dt);
            }
        }
    }

    /// Mark as weakened by a boom
    pub fn weaken(&mut self) {
        self.health = Health::Weakened;
        self.body.color = Vec3::from(ENEMY_WEAKENED_COLOR);
    }
}

/// Uniform in ±[BASE, BASE + 1) * SCALE with a fair-coin sign
fn random_enemy_speed(rng: &mut impl Rng) -> f32 {
    let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    sign * (ENEMY_BASE_SPEED + rng.random::<f32>()) * ENEMY_SPEED_SCALE
}

/// Complete game world
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub settings: Settings,
    pub phase: GamePhase,
    pub player: Player,
    /// Enemy population, iterated in index order
    pub enemies: Vec<Enemy>,
    pub rng: Pcg32,
    /// Simulation ticks run since creation
    pub time_ticks: u64,
    /// Score of the last finished run
    pub final_score: Option<i32>,
    events: Vec<GameEvent>,
}

impl GameWorld {
    /// Create a world in the menu with the base enemy population
    pub fn new(seed: u64, settings: Settings) -> Result<Self, GameError> {
        settings.validate()?;
        let mut world = Self {
            settings,
            phase: GamePhase::Menu,
            player: Player::default(),
            enemies: Vec::with_capacity(BASE_POPULATION),
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            final_score: None,
            events: Vec::new(),
        };
        for _ in 0..BASE_POPULATION {
            world.spawn_enemy()?;
        }
        Ok(world)
    }

    /// Append one freshly spawned enemy
    pub fn spawn_enemy(&mut self) -> Result<(), GameError> {
        let enemy = Enemy::spawn(
            &mut self.player,
            &mut self.rng,
            self.settings.max_spawn_attempts,
        )?;
        self.enemies.push(enemy);
        log::debug!("Enemy spawned, population {}", self.enemies.len());
        self.push_event(GameEvent::EnemySpawned {
            population: self.enemies.len(),
        });
        Ok(())
    }

    /// Switch phase, recording the transition
    pub fn set_phase(&mut self, phase: GamePhase) {
        if phase == self.phase {
            return;
        }
        log::info!("Phase {:?} -> {:?}", self.phase, phase);
        self.push_event(GameEvent::PhaseChanged {
            from: self.phase,
            to: phase,
        });
        self.phase = phase;
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
