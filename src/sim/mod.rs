//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick, no wall-clock time
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Wall, escaped_edge, paddle_bounce_velocity, paddle_contact, reflect_off_walls};
pub use rect::Rect;
pub use state::{Ball, Edge, GameOverState, GameState, Paddle, PlayingState};
pub use tick::{Advance, advance};
