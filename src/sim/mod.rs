//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only, owned by the world
//! - Stable iteration order (population index)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use body::Body;
pub use collision::{Contact, circles_overlap, point_in_circle};
pub use spawn::{maintain_population, min_population};
pub use state::{Enemy, GameEvent, GamePhase, GameWorld, Health, MoveIntent, Player};
pub use tick::{TickInput, enter_game_over, step_game_over, step_menu, tick};
