//! Axis-aligned rectangle helper
//!
//! Used for the field bounds, paddle spans and the Start/Restart hot-zone.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle defined by its corners (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle from its left/top corner and size
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check if a point lies inside the rectangle, edges included
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if `x` lies within the horizontal span, widened by `margin` on both sides
    pub fn spans_x(&self, x: f32, margin: f32) -> bool {
        x >= self.min.x - margin && x <= self.max.x + margin
    }

    /// Corner points in drawing order (closed outline starts and ends at `min`)
    pub fn outline(&self) -> [Vec2; 5] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
            self.min,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(Vec2::new(200.0, 275.0), Vec2::new(310.0, 325.0));
        assert!(rect.contains(Vec2::new(200.0, 275.0)));
        assert!(rect.contains(Vec2::new(310.0, 325.0)));
        assert!(rect.contains(Vec2::new(250.0, 300.0)));
        assert!(!rect.contains(Vec2::new(199.9, 300.0)));
        assert!(!rect.contains(Vec2::new(250.0, 325.1)));
    }

    #[test]
    fn test_rect_spans_x_with_margin() {
        let rect = Rect::from_origin_size(Vec2::new(200.0, 595.0), Vec2::new(150.0, 5.0));
        assert!(rect.spans_x(196.0, 5.0));
        assert!(rect.spans_x(355.0, 5.0));
        assert!(!rect.spans_x(355.5, 5.0));
        assert!(!rect.spans_x(196.0, 0.0));
    }

    #[test]
    fn test_rect_outline_closed() {
        let rect = Rect::from_origin_size(Vec2::ZERO, Vec2::new(10.0, 20.0));
        let pts = rect.outline();
        assert_eq!(pts[0], pts[4]);
        assert_eq!(pts[2], Vec2::new(10.0, 20.0));
        assert!((rect.width() - 10.0).abs() < f32::EPSILON);
        assert!((rect.height() - 20.0).abs() < f32::EPSILON);
    }
}
