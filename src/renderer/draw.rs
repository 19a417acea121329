//! Screen drawing
//!
//! Read-only over the game state: one call paints one full frame.

use glam::Vec2;

use super::Surface;
use super::shapes::{fill_circle, fill_rect, stroke_rect, with_color, with_font};
use crate::consts::*;
use crate::input::hot_zone;
use crate::settings::Settings;
use crate::sim::{Edge, GameState, PlayingState, Rect};

/// Where the button label baseline starts
const BUTTON_LABEL_POS: (f32, f32) = (220.0, 305.0);
const SCORE_POS: (f32, f32) = (30.0, 50.0);
const BANNER_POS: (f32, f32) = (200.0, 245.0);
const FINAL_SCORE_POS: (f32, f32) = (150.0, 355.0);

/// Draw a full frame for `state` at 1:1 pixel ratio
pub fn draw<S: Surface + ?Sized>(surface: &mut S, state: &GameState, settings: &Settings) {
    draw_scaled(surface, state, settings, 1.0);
}

/// Draw a full frame for `state`, scaling field units by `pixel_ratio`
pub fn draw_scaled<S: Surface + ?Sized>(
    surface: &mut S,
    state: &GameState,
    settings: &Settings,
    pixel_ratio: f32,
) {
    surface.clear(FIELD_WIDTH * pixel_ratio, FIELD_HEIGHT * pixel_ratio);
    surface.save();
    surface.scale(pixel_ratio, pixel_ratio);

    match state {
        GameState::Start => {
            draw_field(surface, &PlayingState::new(), settings);
            draw_button(surface, "Start", settings);
        }
        GameState::Playing(playing) => {
            draw_field(surface, playing, settings);
        }
        GameState::GameOver(over) => {
            draw_field(surface, &over.last_frame, settings);
            draw_button(surface, "Restart", settings);
            draw_banner(surface, over.final_score, settings);
        }
    }

    surface.restore();
}

/// Background, paddles, ball and score
fn draw_field<S: Surface + ?Sized>(surface: &mut S, state: &PlayingState, settings: &Settings) {
    let palette = &settings.palette;
    let field = Rect::new(Vec2::ZERO, Vec2::new(FIELD_WIDTH, FIELD_HEIGHT));

    with_color(surface, &palette.background, |s| fill_rect(s, &field));
    with_color(surface, &palette.foreground, |s| stroke_rect(s, &field));

    with_color(surface, &palette.ball, |s| {
        fill_circle(s, state.ball.pos, state.ball.radius)
    });

    with_color(surface, &palette.foreground, |s| {
        for edge in Edge::ALL {
            fill_rect(s, &state.paddle.bounds(edge));
        }
    });

    with_font(surface, &settings.label_font, |s| {
        with_color(s, &palette.foreground, |s| {
            s.fill_text(&format!("Score: {}", state.score), SCORE_POS.0, SCORE_POS.1)
        })
    });
}

/// Hot-zone outline with its label
fn draw_button<S: Surface + ?Sized>(surface: &mut S, label: &str, settings: &Settings) {
    with_color(surface, &settings.palette.foreground, |s| {
        stroke_rect(s, &hot_zone());
        with_font(s, &settings.label_font, |s| {
            s.fill_text(label, BUTTON_LABEL_POS.0, BUTTON_LABEL_POS.1)
        });
    });
}

/// "Game Over" banner and the final score
fn draw_banner<S: Surface + ?Sized>(surface: &mut S, final_score: u32, settings: &Settings) {
    with_color(surface, &settings.palette.banner, |s| {
        with_font(s, &settings.banner_font, |s| {
            s.fill_text("Game Over", BANNER_POS.0, BANNER_POS.1);
            s.fill_text(
                &format!("Your total score was {}", final_score),
                FINAL_SCORE_POS.0,
                FINAL_SCORE_POS.1,
            );
        });
    });
}
