//! Per-phase updates and the fixed-step gameplay tick

use glam::Vec2;

use super::collision::{Contact, resolve_contact};
use super::spawn::maintain_population;
use super::state::{GameEvent, GamePhase, GameWorld, Health, MoveIntent};
use crate::consts::BASE_POPULATION;
use crate::error::GameError;

/// Input snapshot for one frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement keys held
    pub intent: MoveIntent,
    /// Primary button held
    pub zap: bool,
    /// Secondary button held
    pub boom: bool,
    /// Primary button went down this frame
    pub primary_pressed: bool,
    /// Continue key went down this frame
    pub continue_pressed: bool,
    /// Cursor in aspect-corrected world space
    pub cursor: Vec2,
}

/// Menu frame: the score is held at zero until a click starts the game
pub fn step_menu(world: &mut GameWorld, input: &TickInput) {
    world.player.score = 0;
    if input.primary_pressed {
        world.set_phase(GamePhase::Playing);
    }
}

/// Game over frame: wait for the continue key
pub fn step_game_over(world: &mut GameWorld, input: &TickInput) {
    if input.continue_pressed {
        world.set_phase(GamePhase::Menu);
    }
}

/// Transition into GameOver and reset the board once.
///
/// The player gets full lives at the origin with nothing held, the
/// population is cut back to its base size from the end and each survivor
/// is respawned (each respawn still awards its point).
pub fn enter_game_over(world: &mut GameWorld) -> Result<(), GameError> {
    world.final_score = Some(world.player.score);
    log::info!(
        "Game over with score {} after {} ticks",
        world.player.score,
        world.time_ticks
    );
    world.set_phase(GamePhase::GameOver);

    world.player.reset();
    world.enemies.truncate(BASE_POPULATION);
    let max_attempts = world.settings.max_spawn_attempts;
    for enemy in &mut world.enemies {
        enemy.reinitialize(&mut world.player, &mut world.rng, max_attempts)?;
    }
    Ok(())
}

/// Advance gameplay by one fixed step of `dt` seconds.
///
/// Order: input into intents, intents into velocity, movement, collision
/// resolution, population top-up, then the lives check. Does nothing
/// outside the Playing phase.
pub fn tick(world: &mut GameWorld, input: &TickInput, dt: f32) -> Result<(), GameError> {
    if world.phase != GamePhase::Playing {
        return Ok(());
    }
    world.time_ticks += 1;

    world.player.apply_input(input);
    world.player.steer();
    world.player.update_position(dt);

    let wrap = world.settings.enemy_wrap;
    for enemy in &mut world.enemies {
        enemy.update_position(dt, wrap);
    }

    let max_attempts = world.settings.max_spawn_attempts;
    for index in 0..world.enemies.len() {
        let enemy = &mut world.enemies[index];
        let was_full = enemy.health == Health::Full;
        let contact = resolve_contact(
            enemy,
            &mut world.player,
            input.cursor,
            dt,
            &mut world.rng,
            max_attempts,
        )?;
        match contact {
            Contact::Lethal => {
                log::debug!("Player hit, {} lives left", world.player.lives);
                world.push_event(GameEvent::PlayerHit {
                    lives_left: world.player.lives,
                });
            }
            Contact::Boomed if was_full => {
                world.push_event(GameEvent::EnemyWeakened { index });
            }
            Contact::Zapped => {
                log::debug!("Enemy {} zapped, score {}", index, world.player.score);
                world.push_event(GameEvent::EnemyZapped { index });
            }
            _ => {}
        }
    }

    maintain_population(world)?;

    if world.player.lives == 0 {
        enter_game_over(world)?;
    }
    Ok(())
}
