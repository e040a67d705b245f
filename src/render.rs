//! Scene description for an external renderer
//!
//! The core never talks to a graphics API. It emits an ordered list of
//! draw requests in world coordinates; the renderer divides x by the
//! aspect ratio (see [`Scene::to_ndc`]) and draws them back to front.

use glam::{Vec2, Vec3};

use crate::consts::{BOARD_EXTENT, BOOM_INNER_RADIUS, BOOM_RADIUS};
use crate::sim::{GamePhase, GameWorld};

/// Colors for game elements
pub mod colors {
    use glam::Vec3;

    pub const BOOM_OUTER: Vec3 = Vec3::new(0.6, 0.2, 0.0);
    pub const BOOM_INNER: Vec3 = Vec3::new(0.5, 0.5, 0.0);
    pub const ZAP_BEAM: Vec3 = Vec3::new(0.8, 0.8, 0.0);
    pub const BOARD_EDGE: Vec3 = Vec3::ONE;
    pub const TEXT: Vec3 = Vec3::ONE;
    pub const TEXT_DIM: Vec3 = Vec3::new(0.7, 0.7, 0.7);
}

/// A single draw request
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: Vec3,
    },
    /// Line segment
    Line { from: Vec2, to: Vec2, color: Vec3 },
    /// Text anchored at its baseline start
    Text {
        text: String,
        pos: Vec2,
        scale: f32,
        color: Vec3,
    },
}

/// Everything to draw for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub aspect_ratio: f32,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Map a world point into normalized device coordinates
    #[inline]
    pub fn to_ndc(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x / self.aspect_ratio, point.y)
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Vec3) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Vec3) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn text(&mut self, text: impl Into<String>, pos: Vec2, scale: f32, color: Vec3) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            pos,
            scale,
            color,
        });
    }
}

/// Build the draw list for the current phase
pub fn build_scene(world: &GameWorld, cursor: Vec2, aspect_ratio: f32) -> Scene {
    let mut scene = Scene {
        aspect_ratio,
        commands: Vec::new(),
    };

    match world.phase {
        GamePhase::Menu => {
            scene.text("BoomZap", Vec2::new(-0.45, 0.2), 1.5, colors::TEXT);
            scene.text("Click to start", Vec2::new(-0.4, -0.1), 0.6, colors::TEXT_DIM);
        }
        GamePhase::Playing => {
            draw_playfield(&mut scene, world, cursor);
            scene.text(
                format!("Score: {}", world.player.score),
                Vec2::new(-0.95, 0.9),
                0.5,
                colors::TEXT,
            );
            scene.text(
                format!("Lives: {}", world.player.lives),
                Vec2::new(0.55, 0.9),
                0.5,
                colors::TEXT,
            );
        }
        GamePhase::GameOver => {
            let score = world.final_score.unwrap_or(world.player.score);
            scene.text("Game Over", Vec2::new(-0.5, 0.2), 1.2, colors::TEXT);
            scene.text(
                format!("Final score: {score}"),
                Vec2::new(-0.4, 0.0),
                0.6,
                colors::TEXT,
            );
            scene.text(
                "Press space to continue",
                Vec2::new(-0.55, -0.2),
                0.5,
                colors::TEXT_DIM,
            );
        }
    }

    scene
}

/// Enemies, ability effects, the player and the board edges
fn draw_playfield(scene: &mut Scene, world: &GameWorld, cursor: Vec2) {
    for enemy in &world.enemies {
        scene.circle(enemy.body.pos, enemy.body.radius, enemy.body.color);
    }

    let player = &world.player;
    if player.booming {
        scene.circle(player.body.pos, BOOM_RADIUS, colors::BOOM_OUTER);
        scene.circle(player.body.pos, BOOM_INNER_RADIUS, colors::BOOM_INNER);
    } else if player.zapping {
        scene.line(player.body.pos, cursor, colors::ZAP_BEAM);
    }
    scene.circle(player.body.pos, player.body.radius, player.body.color);

    // Outside a square window the board edges are not the window edges
    if scene.aspect_ratio != 1.0 {
        for x in [BOARD_EXTENT, -BOARD_EXTENT] {
            scene.line(
                Vec2::new(x, BOARD_EXTENT),
                Vec2::new(x, -BOARD_EXTENT),
                colors::BOARD_EDGE,
            );
        }
    }
}
