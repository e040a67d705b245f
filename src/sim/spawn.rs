//! Enemy population management
//!
//! The population grows with the score and only shrinks on game over.

use super::state::GameWorld;
use crate::consts::{BASE_POPULATION, SCORE_PER_ENEMY};
use crate::error::GameError;

/// Minimum number of live enemies for a score
pub fn min_population(score: i32) -> usize {
    let target = BASE_POPULATION as i32 + score / SCORE_PER_ENEMY;
    target.max(0) as usize
}

/// Add at most one enemy if the population is below its minimum.
/// Returns true when an enemy was spawned.
pub fn maintain_population(world: &mut GameWorld) -> Result<bool, GameError> {
    if world.enemies.len() < min_population(world.player.score) {
        world.spawn_enemy()?;
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_min_population_steps() {
        for score in 0..10 {
            assert_eq!(min_population(score), 3);
        }
        for score in 10..20 {
            assert_eq!(min_population(score), 4);
        }
        for score in 20..30 {
            assert_eq!(min_population(score), 5);
        }
    }

    #[test]
    fn test_min_population_negative_score() {
        assert_eq!(min_population(-9), 3);
        assert_eq!(min_population(-10), 2);
        assert_eq!(min_population(-1000), 0);
    }

    #[test]
    fn test_one_spawn_per_call() {
        let mut world = GameWorld::new(3, Settings::default()).unwrap();
        world.player.score = 25;

        assert!(maintain_population(&mut world).unwrap());
        assert_eq!(world.enemies.len(), 4);
        assert!(maintain_population(&mut world).unwrap());
        assert_eq!(world.enemies.len(), 5);
        assert!(!maintain_population(&mut world).unwrap());
        assert_eq!(world.enemies.len(), 5);
        // Spawning never moves the score
        assert_eq!(world.player.score, 25);
    }

    #[test]
    fn test_never_shrinks() {
        let mut world = GameWorld::new(3, Settings::default()).unwrap();
        world.player.score = 20;
        while maintain_population(&mut world).unwrap() {}
        assert_eq!(world.enemies.len(), 5);

        world.player.score = 0;
        assert!(!maintain_population(&mut world).unwrap());
        assert_eq!(world.enemies.len(), 5);
    }
}
