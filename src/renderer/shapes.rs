//! Path helpers for 2D primitives
//!
//! Style changes are scoped: each helper saves the surface state, applies
//! its color or font, draws, and restores.

use std::f32::consts::TAU;

use glam::Vec2;

use super::Surface;
use crate::sim::Rect;

/// Run `draw` with fill and stroke set to `color`, restoring afterwards
pub fn with_color<S: Surface + ?Sized>(surface: &mut S, color: &str, draw: impl FnOnce(&mut S)) {
    surface.save();
    surface.set_fill_style(color);
    surface.set_stroke_style(color);
    draw(surface);
    surface.restore();
}

/// Run `draw` with `font`, restoring afterwards
pub fn with_font<S: Surface + ?Sized>(surface: &mut S, font: &str, draw: impl FnOnce(&mut S)) {
    surface.save();
    surface.set_font(font);
    draw(surface);
    surface.restore();
}

/// Trace a closed rectangle outline into the current path
fn trace_rect<S: Surface + ?Sized>(surface: &mut S, rect: &Rect) {
    let [first, rest @ ..] = rect.outline();
    surface.move_to(first.x, first.y);
    for p in rest {
        surface.line_to(p.x, p.y);
    }
}

/// Filled rectangle in the current fill style
pub fn fill_rect<S: Surface + ?Sized>(surface: &mut S, rect: &Rect) {
    surface.begin_path();
    trace_rect(surface, rect);
    surface.fill();
}

/// Rectangle outline in the current stroke style
pub fn stroke_rect<S: Surface + ?Sized>(surface: &mut S, rect: &Rect) {
    surface.begin_path();
    trace_rect(surface, rect);
    surface.stroke();
}

/// Filled circle in the current fill style
pub fn fill_circle<S: Surface + ?Sized>(surface: &mut S, center: Vec2, radius: f32) {
    surface.begin_path();
    // Start the subpath on the rim so no stray line joins the previous point
    surface.move_to(center.x + radius, center.y);
    surface.arc(center.x, center.y, radius, 0.0, TAU);
    surface.fill();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};

    #[test]
    fn test_with_color_is_scoped() {
        let mut surface = RecordingSurface::new();
        with_color(&mut surface, "red", |s| s.fill());
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Save,
                DrawCommand::FillStyle("red".to_string()),
                DrawCommand::StrokeStyle("red".to_string()),
                DrawCommand::Fill,
                DrawCommand::Restore,
            ]
        );
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_fill_rect_traces_closed_path() {
        let mut surface = RecordingSurface::new();
        fill_rect(&mut surface, &Rect::new(Vec2::ZERO, Vec2::new(10.0, 5.0)));
        let cmds = surface.commands();
        assert_eq!(cmds[0], DrawCommand::BeginPath);
        assert_eq!(cmds[1], DrawCommand::MoveTo(0.0, 0.0));
        assert_eq!(cmds[5], DrawCommand::LineTo(0.0, 0.0));
        assert_eq!(cmds[6], DrawCommand::Fill);
    }

    #[test]
    fn test_fill_circle() {
        let mut surface = RecordingSurface::new();
        fill_circle(&mut surface, Vec2::new(20.0, 30.0), 5.0);
        assert!(surface
            .commands()
            .contains(&DrawCommand::Arc(20.0, 30.0, 5.0, 0.0, TAU)));
    }
}
