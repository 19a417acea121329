//! Fixed timestep simulation tick
//!
//! Advances one round by exactly one step. Pure: the same state and paddle
//! target always produce the same result.

use super::collision::{
    escaped_edge, paddle_bounce_velocity, paddle_contact, reflect_off_walls, rest_on_paddle,
};
use super::state::{GameOverState, PlayingState};
use crate::consts::*;

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advance {
    /// Round continues with the next snapshot
    Continue(PlayingState),
    /// Ball got past a paddle; the round is over
    GameOver(GameOverState),
}

/// Advance a round by one tick.
///
/// Order of operations: paddle follows the pointer (unclamped), ball moves,
/// side walls reflect, paddles reflect and score, then a ball that left the
/// field ends the round.
pub fn advance(state: &PlayingState, paddle_target_x: f32) -> Advance {
    let mut next = *state;
    next.paddle.x = paddle_target_x;

    next.ball.pos += next.ball.vel;

    if let Some(wall) = reflect_off_walls(&mut next.ball, FIELD_WIDTH) {
        log::trace!("Wall bounce {:?} at tick {}", wall, next.tick);
    }

    if let Some(edge) = paddle_contact(&next.ball, &next.paddle) {
        let accelerate = next.tick % BOOST_EVERY_TICKS == 0;
        next.ball.vel = paddle_bounce_velocity(next.ball.vel, accelerate);
        rest_on_paddle(&mut next.ball, &next.paddle, edge);
        next.score += 1;
        log::debug!(
            "Paddle bounce {:?} at tick {} (score {}, vel {:?})",
            edge,
            next.tick,
            next.score,
            next.ball.vel
        );
    } else if let Some(edge) = escaped_edge(&next.ball, FIELD_HEIGHT) {
        log::info!("Ball missed the {:?} paddle, final score {}", edge, next.score);
        return Advance::GameOver(GameOverState {
            final_score: next.score,
            last_frame: next,
        });
    }

    next.tick += 1;
    Advance::Continue(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Ball, Paddle};
    use glam::Vec2;
    use proptest::prelude::*;

    fn playing(ball: Ball, paddle_x: f32, score: u32, tick: u64) -> PlayingState {
        PlayingState {
            paddle: Paddle {
                x: paddle_x,
                ..Default::default()
            },
            ball,
            score,
            tick,
        }
    }

    fn expect_continue(result: Advance) -> PlayingState {
        match result {
            Advance::Continue(state) => state,
            Advance::GameOver(over) => panic!("unexpected game over: {:?}", over),
        }
    }

    #[test]
    fn test_bottom_paddle_bounce_on_boost_tick() {
        let state = playing(
            Ball::new(Vec2::new(250.0, 595.0), Vec2::new(3.0, 5.0)),
            200.0,
            0,
            4,
        );
        let next = expect_continue(advance(&state, 200.0));
        assert_eq!(next.score, 1);
        assert_eq!(next.ball.vel.y, -7.0);
        assert_eq!(next.ball.vel.x, 4.0);
        assert_eq!(next.tick, 5);
    }

    #[test]
    fn test_paddle_bounce_off_boost_tick() {
        let state = playing(
            Ball::new(Vec2::new(250.0, 595.0), Vec2::new(3.0, 5.0)),
            200.0,
            2,
            5,
        );
        let next = expect_continue(advance(&state, 200.0));
        assert_eq!(next.score, 3);
        assert_eq!(next.ball.vel, Vec2::new(3.0, -5.0));
        assert_eq!(next.tick, 6);
    }

    #[test]
    fn test_left_wall_bounce() {
        let state = playing(
            Ball::new(Vec2::new(2.0, 300.0), Vec2::new(-4.0, 2.0)),
            175.0,
            0,
            1,
        );
        let next = expect_continue(advance(&state, 175.0));
        assert_eq!(next.ball.vel, Vec2::new(4.0, 2.0));
        assert!(next.ball.pos.x >= 5.0);
        assert_eq!(next.score, 0);
    }

    #[test]
    fn test_miss_ends_round_with_score() {
        let state = playing(
            Ball::new(Vec2::new(50.0, 596.0), Vec2::new(2.0, 8.0)),
            300.0,
            11,
            40,
        );
        match advance(&state, 300.0) {
            Advance::GameOver(over) => {
                assert_eq!(over.final_score, 11);
                assert_eq!(over.last_frame.tick, 40);
            }
            Advance::Continue(_) => panic!("ball should have been missed"),
        }
    }

    #[test]
    fn test_ball_in_band_outside_span_keeps_playing() {
        // Not over the paddle yet, but still on the field: one more tick
        let state = playing(
            Ball::new(Vec2::new(50.0, 590.0), Vec2::new(2.0, 4.0)),
            300.0,
            0,
            3,
        );
        let next = expect_continue(advance(&state, 300.0));
        assert_eq!(next.ball.pos, Vec2::new(52.0, 594.0));
        assert_eq!(next.score, 0);
        assert_eq!(next.tick, 4);
    }

    #[test]
    fn test_late_paddle_rescues_ball() {
        // Ball already past the bottom edge, paddle slides under it
        let state = playing(
            Ball::new(Vec2::new(100.0, 598.0), Vec2::new(1.0, 4.0)),
            300.0,
            0,
            1,
        );
        let next = expect_continue(advance(&state, 50.0));
        assert_eq!(next.score, 1);
        assert!(next.ball.vel.y < 0.0);
        assert!(next.ball.pos.y <= FIELD_HEIGHT);
    }

    #[test]
    fn test_paddle_target_is_not_clamped() {
        let state = PlayingState::new();
        let next = expect_continue(advance(&state, -120.0));
        assert_eq!(next.paddle.x, -120.0);
        let next = expect_continue(advance(&next, 480.0));
        assert_eq!(next.paddle.x, 480.0);
    }

    #[test]
    fn test_fresh_round_plays_until_miss() {
        // Paddle parked far away: the ball must eventually be missed
        let mut state = PlayingState::new();
        for _ in 0..1000 {
            match advance(&state, 1000.0) {
                Advance::Continue(next) => state = next,
                Advance::GameOver(over) => {
                    assert_eq!(over.final_score, 0);
                    return;
                }
            }
        }
        panic!("round never ended");
    }

    proptest! {
        #[test]
        fn prop_bounce_boosts_vy_on_boost_ticks(
            x in 100.0f32..400.0,
            vx in -14.0f32..14.0,
            vy in 1.0f32..=14.0,
            tick in 0u64..1000,
        ) {
            // Ball one step away from the bottom face, paddle centered under it
            let state = playing(
                Ball::new(Vec2::new(x, 595.0 - vy), Vec2::new(vx, vy)),
                x - 75.0 - vx,
                0,
                tick,
            );
            let next = expect_continue(advance(&state, x - 75.0 - vx));
            let expected = if tick % 4 == 0 { vy + 2.0 } else { vy };
            prop_assert!(next.ball.vel.y < 0.0);
            prop_assert!((next.ball.vel.y.abs() - expected).abs() < 1e-4);
            prop_assert_eq!(next.score, 1);
        }

        #[test]
        fn prop_walls_keep_ball_in_field(
            x in 5.0f32..=495.0,
            y in 100.0f32..500.0,
            vx in -14.0f32..14.0,
            vy in -14.0f32..14.0,
        ) {
            let state = playing(Ball::new(Vec2::new(x, y), Vec2::new(vx, vy)), 175.0, 3, 1);
            let next = expect_continue(advance(&state, 175.0));
            prop_assert!(next.ball.pos.x >= 0.0 && next.ball.pos.x <= FIELD_WIDTH);
            // Mid-field steps never score
            prop_assert_eq!(next.score, 3);
        }

        #[test]
        fn prop_paddle_follows_target_unclamped(target in -1000.0f32..1000.0) {
            let next = expect_continue(advance(&PlayingState::new(), target));
            prop_assert_eq!(next.paddle.x, target);
        }

        #[test]
        fn prop_miss_carries_exact_score(
            x in 5.0f32..495.0,
            vy in 1.0f32..14.0,
            score in 0u32..500,
        ) {
            // Paddle parked off the field so nothing can catch the ball
            let ball = Ball::new(Vec2::new(x, 600.0), Vec2::new(0.0, vy));
            let state = playing(ball, 2000.0, score, 9);
            match advance(&state, 2000.0) {
                Advance::GameOver(over) => prop_assert_eq!(over.final_score, score),
                Advance::Continue(_) => prop_assert!(false, "expected a miss"),
            }
        }
    }
}
