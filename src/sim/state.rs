//! Game state and core simulation types
//!
//! Every type here is a plain value; a tick consumes one `PlayingState` and
//! produces the next.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Which field edge a paddle copy defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 2] = [Edge::Top, Edge::Bottom];
}

/// The player's paddle, mirrored along the top and bottom edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge (not clamped to the field)
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: PADDLE_START_X,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    /// Y coordinate of the face the ball bounces off
    pub fn plane_y(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Top => self.height,
            Edge::Bottom => FIELD_HEIGHT - self.height,
        }
    }

    /// Paddle bounds on the given edge
    pub fn bounds(&self, edge: Edge) -> Rect {
        let top = match edge {
            Edge::Top => 0.0,
            Edge::Bottom => FIELD_HEIGHT - self.height,
        };
        Rect::from_origin_size(Vec2::new(self.x, top), Vec2::new(self.width, self.height))
    }

    /// Whether `x` is over the paddle, with `margin` tolerance on each side
    pub fn covers_x(&self, x: f32, margin: f32) -> bool {
        self.bounds(Edge::Top).spans_x(x, margin)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BALL_START_POS.0, BALL_START_POS.1),
            vel: Vec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
        }
    }
}

/// State of a round in progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayingState {
    pub paddle: Paddle,
    pub ball: Ball,
    /// Rally points (successful paddle bounces)
    pub score: u32,
    /// Simulation tick counter, reset for every round
    pub tick: u64,
}

impl Default for PlayingState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayingState {
    /// Fresh round: canonical ball, centered paddle, zero score
    pub fn new() -> Self {
        Self {
            paddle: Paddle::default(),
            ball: Ball::default(),
            score: 0,
            tick: 0,
        }
    }
}

/// A finished round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameOverState {
    pub final_score: u32,
    /// Last frame of the round, drawn behind the game-over overlay
    pub last_frame: PlayingState,
}

/// Top-level game state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the Start click
    Start,
    Playing(PlayingState),
    GameOver(GameOverState),
}

impl GameState {
    pub fn score(&self) -> u32 {
        match self {
            GameState::Start => 0,
            GameState::Playing(p) => p.score,
            GameState::GameOver(g) => g.final_score,
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            GameState::Start => "Start",
            GameState::Playing(_) => "Playing",
            GameState::GameOver(_) => "GameOver",
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GameState::Playing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_canonical() {
        let state = PlayingState::new();
        assert_eq!(state.ball.pos, Vec2::new(20.0, 20.0));
        assert_eq!(state.ball.vel, Vec2::new(8.0, 10.0));
        assert_eq!(state.paddle.x, 175.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.tick, 0);
    }

    #[test]
    fn test_paddle_planes_mirror() {
        let paddle = Paddle::default();
        assert_eq!(paddle.plane_y(Edge::Top), 5.0);
        assert_eq!(paddle.plane_y(Edge::Bottom), 595.0);

        let bottom = paddle.bounds(Edge::Bottom);
        assert_eq!(bottom.min, Vec2::new(175.0, 595.0));
        assert_eq!(bottom.max, Vec2::new(325.0, 600.0));
    }

    #[test]
    fn test_paddle_covers_x_margin() {
        let paddle = Paddle {
            x: 200.0,
            ..Default::default()
        };
        assert!(paddle.covers_x(195.0, 5.0));
        assert!(!paddle.covers_x(195.0, 0.0));
        assert!(paddle.covers_x(350.0, 0.0));
    }

    #[test]
    fn test_game_state_score() {
        let over = GameState::GameOver(GameOverState {
            final_score: 7,
            last_frame: PlayingState::new(),
        });
        assert_eq!(over.score(), 7);
        assert_eq!(GameState::Start.score(), 0);
        assert!(!over.is_playing());
    }
}
