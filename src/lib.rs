//! Canvas Pong - a two-paddle ball game on a 2D canvas
//!
//! Core modules:
//! - `sim`: Pure simulation (ball movement, collisions, scoring, game over)
//! - `renderer`: Draws a screen onto any 2D drawing surface
//! - `input`: Pointer tracking and hot-zone click detection
//! - `screen`: Start / Playing / GameOver state machine
//! - `platform`: Browser glue (canvas lifecycle, events, tick scheduling)
//! - `settings`: Data-driven tick rate, palette and logging level

pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod screen;
pub mod settings;
pub mod sim;

pub use error::PongError;
pub use screen::Screen;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playing field dimensions (canvas pixels)
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults. `x` is the left edge; the paddle is mirrored on the
    /// top and bottom edges of the field.
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 5.0;
    pub const PADDLE_START_X: f32 = 175.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_START_POS: (f32, f32) = (20.0, 20.0);
    pub const BALL_START_VEL: (f32, f32) = (8.0, 10.0);

    /// Speed at which a paddle bounce stops accelerating an axis
    pub const BALL_SPEED_CAP: f32 = 15.0;
    /// Vertical speed gained on an accelerating bounce
    pub const BOUNCE_BOOST_Y: f32 = 2.0;
    /// Horizontal speed gained on an accelerating bounce
    pub const BOUNCE_BOOST_X: f32 = 1.0;
    /// Only bounces on ticks that are a multiple of this accelerate the ball
    pub const BOOST_EVERY_TICKS: u64 = 4;

    /// Delay between simulation ticks
    pub const TICK_INTERVAL_MS: u32 = 30;

    /// Start / Restart button area (inclusive)
    pub const HOT_ZONE_MIN: (f32, f32) = (200.0, 275.0);
    pub const HOT_ZONE_MAX: (f32, f32) = (310.0, 325.0);
}
