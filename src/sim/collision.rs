//! Collision detection and resolution between the player and enemies
//!
//! Everything is a circle, so the geometric tests are squared-distance
//! comparisons. Resolution applies exactly one outcome per enemy per tick.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, Health, Player};
use crate::consts::{BOOM_IMPULSE, BOOM_RADIUS};
use crate::error::GameError;

/// What happened to an enemy during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Nothing touched it
    None,
    /// It touched the player: player lost a life, enemy respawned
    Lethal,
    /// It was inside an active boom and is now weakened
    Boomed,
    /// A weakened enemy was zapped and respawned
    Zapped,
}

/// Circles touch or overlap (boundary counts)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) <= reach * reach
}

/// Point lies inside or on a circle
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance_squared(center) <= radius * radius
}

/// Resolve one enemy against the player.
///
/// Checked in priority order, first match wins:
/// 1. body contact: the enemy respawns and the player loses a life
/// 2. boom: the enemy is inside the boom ring while booming, so it is
///    weakened and nudged
/// 3. zap: zapping with the cursor over a weakened enemy respawns it
pub fn resolve_contact(
    enemy: &mut Enemy,
    player: &mut Player,
    cursor: Vec2,
    dt: f32,
    rng: &mut impl Rng,
    max_attempts: u32,
) -> Result<Contact, GameError> {
    let enemy_pos = enemy.body.pos;
    let enemy_radius = enemy.body.radius;

    if circles_overlap(player.body.pos, player.body.radius, enemy_pos, enemy_radius) {
        enemy.reinitialize(player, rng, max_attempts)?;
        player.lose_life();
        return Ok(Contact::Lethal);
    }

    if player.booming && circles_overlap(player.body.pos, BOOM_RADIUS, enemy_pos, enemy_radius) {
        enemy.weaken();
        let kick = BOOM_IMPULSE * dt;
        for axis in 0..2 {
            let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            enemy.body.vel[axis] += sign * rng.random::<f32>() * kick;
        }
        return Ok(Contact::Boomed);
    }

    if player.zapping
        && enemy.health == Health::Weakened
        && point_in_circle(cursor, enemy_pos, enemy_radius)
    {
        enemy.reinitialize(player, rng, max_attempts)?;
        return Ok(Contact::Zapped);
    }

    Ok(Contact::None)
}
