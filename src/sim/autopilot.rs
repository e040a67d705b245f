//! Demo autopilot
//!
//! Plays the game from the world state alone, so a run is reproducible
//! from its seed. Used by the headless binary and by tests.

use glam::Vec2;

use super::collision::circles_overlap;
use super::state::{Enemy, GamePhase, GameWorld, Health, MoveIntent};
use super::tick::TickInput;
use crate::consts::BOOM_RADIUS;

/// Enemies closer than this make the autopilot run
const DANGER_RADIUS: f32 = 0.45;

/// Produce the input the autopilot would give this frame
pub fn autopilot_input(world: &GameWorld) -> TickInput {
    match world.phase {
        GamePhase::Menu => TickInput {
            primary_pressed: true,
            ..Default::default()
        },
        GamePhase::GameOver => TickInput {
            continue_pressed: true,
            ..Default::default()
        },
        GamePhase::Playing => playing_input(world),
    }
}

fn playing_input(world: &GameWorld) -> TickInput {
    let player_pos = world.player.body.pos;

    // Run from the closest enemy if it is getting near
    let intent = nearest(world.enemies.iter(), player_pos)
        .filter(|e| e.body.pos.distance(player_pos) < DANGER_RADIUS)
        .map(|e| flee_intent(player_pos - e.body.pos))
        .unwrap_or_default();

    // Weaken anything healthy inside the boom ring
    let boom = world.enemies.iter().any(|e| {
        e.health == Health::Full
            && circles_overlap(player_pos, BOOM_RADIUS, e.body.pos, e.body.radius)
    });

    // Finish off the nearest weakened enemy
    let target = nearest(
        world.enemies.iter().filter(|e| e.health == Health::Weakened),
        player_pos,
    );
    let (zap, cursor) = match target {
        Some(enemy) => (true, enemy.body.pos),
        None => (false, player_pos),
    };

    TickInput {
        intent,
        zap,
        boom,
        primary_pressed: false,
        continue_pressed: false,
        cursor,
    }
}

fn nearest<'a>(enemies: impl Iterator<Item = &'a Enemy>, point: Vec2) -> Option<&'a Enemy> {
    enemies.min_by(|a, b| {
        a.body
            .distance_squared_to(point)
            .partial_cmp(&b.body.distance_squared_to(point))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// Movement keys that best follow `away`, diagonals included
fn flee_intent(away: Vec2) -> MoveIntent {
    let dir = away.normalize_or_zero();
    // ~cos(67.5°): inside this cone only one axis key is held
    let threshold = 0.38;
    MoveIntent {
        up: dir.y > threshold,
        down: dir.y < -threshold,
        left: dir.x < -threshold,
        right: dir.x > threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_menu_and_game_over_advance() {
        let mut world = GameWorld::new(31, Settings::default()).unwrap();
        assert!(autopilot_input(&world).primary_pressed);
        world.phase = GamePhase::GameOver;
        assert!(autopilot_input(&world).continue_pressed);
    }

    #[test]
    fn test_flees_nearby_enemy() {
        let mut world = GameWorld::new(32, Settings::default()).unwrap();
        world.phase = GamePhase::Playing;
        world.enemies[0].body.pos = Vec2::new(0.3, 0.0);

        let input = autopilot_input(&world);
        assert!(input.intent.left);
        assert!(!input.intent.right);
        // Inside the boom ring and still healthy
        assert!(input.boom);
    }

    #[test]
    fn test_zaps_weakened_enemy() {
        let mut world = GameWorld::new(33, Settings::default()).unwrap();
        world.phase = GamePhase::Playing;
        world.enemies[1].weaken();
        let target = world.enemies[1].body.pos;

        let input = autopilot_input(&world);
        assert!(input.zap);
        assert_eq!(input.cursor, target);
    }

    #[test]
    fn test_flee_intent_directions() {
        let diag = flee_intent(Vec2::new(1.0, 1.0));
        assert!(diag.up && diag.right && !diag.down && !diag.left);
        let straight = flee_intent(Vec2::new(0.0, -2.0));
        assert!(straight.down && !straight.left && !straight.right);
        assert_eq!(flee_intent(Vec2::ZERO), MoveIntent::default());
    }
}
