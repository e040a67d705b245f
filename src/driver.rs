//! Frame driver
//!
//! Turns wall-clock frame times into gameplay ticks and color updates.
//! Each accumulator fires once its collected time exceeds the interval and
//! then starts over from zero; leftover time is dropped, not carried.

use crate::error::GameError;
use crate::sim::{GamePhase, GameWorld, TickInput, step_game_over, step_menu, tick};

/// Single accumulator gating work to a target rate
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: f32,
    max_step: f32,
    accumulated: f32,
}

impl FixedStep {
    pub fn new(interval: f32, max_step: f32) -> Self {
        Self {
            interval,
            max_step,
            accumulated: 0.0,
        }
    }

    /// Add elapsed time. When the total exceeds the interval, returns the
    /// time span to simulate (at most `max_step`) and empties the accumulator.
    pub fn accumulate(&mut self, elapsed: f32) -> Option<f32> {
        self.accumulated += elapsed.max(0.0);
        if self.accumulated > self.interval {
            let step = self.accumulated.min(self.max_step);
            self.accumulated = 0.0;
            Some(step)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

/// Owns the world and runs it one rendered frame at a time
#[derive(Debug, Clone)]
pub struct FrameDriver {
    world: GameWorld,
    physics: FixedStep,
    cosmetic: FixedStep,
    frames: u64,
}

impl FrameDriver {
    pub fn new(world: GameWorld) -> Self {
        let settings = &world.settings;
        let physics = FixedStep::new(settings.tick_interval(), settings.max_step);
        let cosmetic = FixedStep::new(settings.color_interval(), settings.max_step);
        Self {
            world,
            physics,
            cosmetic,
            frames: 0,
        }
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    /// Frames processed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Process one rendered frame that took `elapsed` seconds
    pub fn frame(&mut self, input: &TickInput, elapsed: f32) -> Result<(), GameError> {
        self.frames += 1;
        match self.world.phase {
            GamePhase::Menu => {
                // Start the next run with empty accumulators
                self.physics.reset();
                self.cosmetic.reset();
                step_menu(&mut self.world, input);
            }
            GamePhase::Playing => {
                if let Some(dt) = self.physics.accumulate(elapsed) {
                    tick(&mut self.world, input, dt)?;
                }
                if self.cosmetic.accumulate(elapsed).is_some() {
                    self.world.player.update_color(&mut self.world.rng);
                }
            }
            GamePhase::GameOver => step_game_over(&mut self.world, input),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::MoveIntent;

    #[test]
    fn test_fixed_step_fires_after_interval() {
        let mut step = FixedStep::new(0.1, 1.0);
        assert_eq!(step.accumulate(0.05), None);
        assert_eq!(step.accumulate(0.05), None);
        let dt = step.accumulate(0.03).unwrap();
        assert!((dt - 0.13).abs() < 1e-6);
        assert_eq!(step.accumulated, 0.0);
    }

    #[test]
    fn test_fixed_step_drops_remainder_and_clamps() {
        let mut step = FixedStep::new(0.1, 0.25);
        assert_eq!(step.accumulate(5.0), Some(0.25));
        assert_eq!(step.accumulated, 0.0);
        assert_eq!(step.accumulate(0.05), None);
    }

    #[test]
    fn test_fixed_step_ignores_negative_time() {
        let mut step = FixedStep::new(0.1, 1.0);
        assert_eq!(step.accumulate(-3.0), None);
        assert_eq!(step.accumulated, 0.0);
    }

    #[test]
    fn test_driver_gates_ticks() {
        let world = GameWorld::new(11, Settings::default()).unwrap();
        let mut driver = FrameDriver::new(world);
        let click = TickInput {
            primary_pressed: true,
            ..Default::default()
        };
        driver.frame(&click, 0.0).unwrap();
        assert_eq!(driver.world().phase, GamePhase::Playing);

        let right = TickInput {
            intent: MoveIntent {
                right: true,
                ..Default::default()
            },
            ..Default::default()
        };
        // 10 ms frames: the 60 Hz tick fires every second frame
        for _ in 0..10 {
            driver.frame(&right, 0.01).unwrap();
        }
        assert_eq!(driver.world().time_ticks, 5);
        assert!(driver.world().player.body.pos.x > 0.0);
        assert_eq!(driver.frames(), 11);
    }

    #[test]
    fn test_frame_at_exact_interval_ticks_every_other_frame() {
        let interval = Settings::default().tick_interval();
        let mut exact = FixedStep::new(interval, 0.1);
        let fired: Vec<_> = (0..6).map(|_| exact.accumulate(interval)).collect();
        assert_eq!(fired.iter().filter(|f| f.is_some()).count(), 3);
        assert!(fired[0].is_none());
        assert!((fired[1].unwrap() - 2.0 * interval).abs() < 1e-6);

        // A frame just over the interval ticks every time
        let mut slow = FixedStep::new(interval, 0.1);
        for _ in 0..6 {
            assert_eq!(slow.accumulate(0.02), Some(0.02));
        }
    }

    #[test]
    fn test_color_churns_only_while_playing() {
        let world = GameWorld::new(12, Settings::default()).unwrap();
        let mut driver = FrameDriver::new(world);
        let start = driver.world().player.body.color;
        for _ in 0..10 {
            driver.frame(&TickInput::default(), 0.05).unwrap();
        }
        assert_eq!(driver.world().player.body.color, start);

        let click = TickInput {
            primary_pressed: true,
            ..Default::default()
        };
        driver.frame(&click, 0.0).unwrap();
        driver.frame(&TickInput::default(), 0.05).unwrap();
        assert_ne!(driver.world().player.body.color, start);
    }
}
