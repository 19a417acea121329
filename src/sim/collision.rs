//! Collision detection and response
//!
//! Everything is axis-aligned: side walls reflect the horizontal velocity,
//! paddle faces reflect the vertical velocity.

use glam::Vec2;

use super::state::{Ball, Edge, Paddle};
use crate::consts::*;

/// Which side wall the ball hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
}

/// Reflect the ball off the side walls.
///
/// A ball touching or overlapping a wall (`x - r <= 0` or `x + r >= width`)
/// gets its horizontal velocity pointed back into the field and is clamped
/// so it rests against the wall instead of tunneling through it.
pub fn reflect_off_walls(ball: &mut Ball, field_width: f32) -> Option<Wall> {
    if ball.pos.x - ball.radius <= 0.0 {
        ball.vel.x = ball.vel.x.abs();
        ball.pos.x = ball.radius;
        Some(Wall::Left)
    } else if ball.pos.x + ball.radius >= field_width {
        ball.vel.x = -ball.vel.x.abs();
        ball.pos.x = field_width - ball.radius;
        Some(Wall::Right)
    } else {
        None
    }
}

/// Find the paddle face the ball is hitting, if any.
///
/// The ball must be heading toward the face, its center must be within one
/// radius of the face (or past it), and it must be over the paddle's span
/// widened by one radius on each side.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle) -> Option<Edge> {
    if !paddle.covers_x(ball.pos.x, ball.radius) {
        return None;
    }

    Edge::ALL.into_iter().find(|&edge| {
        let plane = paddle.plane_y(edge);
        match edge {
            Edge::Top => ball.vel.y < 0.0 && ball.pos.y <= plane + ball.radius,
            Edge::Bottom => ball.vel.y > 0.0 && ball.pos.y >= plane - ball.radius,
        }
    })
}

/// Velocity after bouncing off a paddle face.
///
/// The vertical component always flips. When `accelerate` is set each axis
/// also gains speed (vertical +2, horizontal +1) unless it is already at
/// the speed cap, in which case that axis keeps its magnitude.
pub fn paddle_bounce_velocity(vel: Vec2, accelerate: bool) -> Vec2 {
    let mut out = Vec2::new(vel.x, -vel.y);
    if accelerate {
        out.y = boost(out.y, BOUNCE_BOOST_Y);
        out.x = boost(out.x, BOUNCE_BOOST_X);
    }
    out
}

/// Grow a velocity component's magnitude, keeping its sign, below the cap
fn boost(v: f32, amount: f32) -> f32 {
    if v.abs() >= BALL_SPEED_CAP {
        v
    } else {
        v + amount.copysign(v)
    }
}

/// Put the ball back on the paddle face it just bounced off
pub fn rest_on_paddle(ball: &mut Ball, paddle: &Paddle, edge: Edge) {
    let plane = paddle.plane_y(edge);
    ball.pos.y = match edge {
        Edge::Top => plane + ball.radius,
        Edge::Bottom => plane - ball.radius,
    };
}

/// Check if the ball center has left the field through the top or bottom
pub fn escaped_edge(ball: &Ball, field_height: f32) -> Option<Edge> {
    if ball.pos.y < 0.0 {
        Some(Edge::Top)
    } else if ball.pos.y > field_height {
        Some(Edge::Bottom)
    } else {
        None
    }
}
