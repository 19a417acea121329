//! Canvas rendering module
//!
//! Everything draws through the [`Surface`] trait so the same code paints a
//! browser canvas or a recording used by tests and the headless runner.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw;
pub mod recording;
pub mod shapes;

pub use draw::draw;
pub use recording::{DrawCommand, RecordingSurface};

/// A 2D drawing surface with the primitives of a standard canvas context
pub trait Surface {
    /// Erase the whole drawing area
    fn clear(&mut self, width: f32, height: f32);

    fn save(&mut self);
    fn restore(&mut self);

    fn scale(&mut self, x: f32, y: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_font(&mut self, font: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}
