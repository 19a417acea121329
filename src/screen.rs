//! Screen state machine
//!
//! Start --click--> Playing --miss--> GameOver --click--> Playing
//!
//! Each `Screen` is one instance of a screen with its own paddle target and
//! cancellation token. A transition always produces a brand new instance
//! and cancels the old one, so nothing leaks from one round to the next.

use glam::Vec2;

use crate::input::{PaddleTarget, in_hot_zone};
use crate::platform::CancelToken;
use crate::sim::{Advance, GameState, PlayingState, advance};

/// Result of driving a screen by one tick
#[derive(Debug)]
pub enum Step {
    /// Still playing; the state was advanced in place
    Continue,
    /// The round ended; switch to this screen
    Transition(Screen),
    /// Nothing to simulate on this screen
    Idle,
    /// The screen was torn down; the callback must not do anything
    Cancelled,
}

#[derive(Debug)]
pub struct Screen {
    state: GameState,
    paddle_target: PaddleTarget,
    cancel: CancelToken,
}

impl Screen {
    fn with_state(state: GameState) -> Self {
        Self {
            state,
            paddle_target: PaddleTarget::default(),
            cancel: CancelToken::new(),
        }
    }

    /// Initial screen showing the Start button
    pub fn start() -> Self {
        Self::with_state(GameState::Start)
    }

    /// Fresh round: score 0, canonical ball and paddle
    pub fn playing() -> Self {
        Self::with_state(GameState::Playing(PlayingState::new()))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Slot the pointer-move handler writes to
    pub fn paddle_target(&self) -> &PaddleTarget {
        &self.paddle_target
    }

    /// Token a scheduled tick checks before running
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Whether this screen runs the tick loop
    pub fn wants_ticks(&self) -> bool {
        self.state.is_playing()
    }

    /// Handle a click in element-local coordinates.
    ///
    /// On Start and GameOver a click inside the hot-zone starts a fresh
    /// round; anything else is ignored.
    pub fn on_click(&mut self, point: Vec2) -> Option<Screen> {
        if self.cancel.is_cancelled() {
            return None;
        }
        match self.state {
            GameState::Start | GameState::GameOver(_) if in_hot_zone(point) => {
                log::info!("Starting a new round");
                self.tear_down();
                Some(Screen::playing())
            }
            _ => None,
        }
    }

    /// Run one simulation step
    pub fn on_tick(&mut self) -> Step {
        if self.cancel.is_cancelled() {
            return Step::Cancelled;
        }
        let GameState::Playing(playing) = &self.state else {
            return Step::Idle;
        };

        match advance(playing, self.paddle_target.get()) {
            Advance::Continue(next) => {
                self.state = GameState::Playing(next);
                Step::Continue
            }
            Advance::GameOver(over) => {
                log::info!("Game over with score {}", over.final_score);
                self.tear_down();
                Step::Transition(Screen::with_state(GameState::GameOver(over)))
            }
        }
    }

    /// Invalidate this instance; pending ticks and clicks become no-ops
    pub fn tear_down(&self) {
        self.cancel.cancel();
    }
}
