//! Pointer input
//!
//! Pointer moves feed the paddle target; clicks only matter inside the
//! Start/Restart hot-zone.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use crate::consts::*;
use crate::sim::Rect;

/// Latest paddle position requested by the pointer.
///
/// One screen instance owns the slot; the pointer-move handler writes it and
/// the tick reads it. Both run on the same thread, last write wins.
#[derive(Debug, Clone)]
pub struct PaddleTarget {
    slot: Rc<Cell<f32>>,
}

impl Default for PaddleTarget {
    fn default() -> Self {
        Self::new(PADDLE_START_X)
    }
}

impl PaddleTarget {
    pub fn new(x: f32) -> Self {
        Self {
            slot: Rc::new(Cell::new(x)),
        }
    }

    /// Record a pointer position (element-local x)
    pub fn track_pointer(&self, pointer_x: f32) {
        self.slot.set(paddle_x_for_pointer(pointer_x));
    }

    /// Paddle left edge to apply on the next tick
    pub fn get(&self) -> f32 {
        self.slot.get()
    }
}

/// Paddle left edge that centers the paddle under the pointer (unclamped)
pub fn paddle_x_for_pointer(pointer_x: f32) -> f32 {
    pointer_x - PADDLE_WIDTH / 2.0
}

/// The Start/Restart button area
pub fn hot_zone() -> Rect {
    Rect::new(
        Vec2::new(HOT_ZONE_MIN.0, HOT_ZONE_MIN.1),
        Vec2::new(HOT_ZONE_MAX.0, HOT_ZONE_MAX.1),
    )
}

/// Check if a click (element-local coordinates) lands on the button
pub fn in_hot_zone(point: Vec2) -> bool {
    hot_zone().contains(point)
}
