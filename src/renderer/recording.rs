//! Surface that records draw calls instead of painting pixels
//!
//! Used by tests and by the headless native runner.

use super::Surface;

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(f32, f32),
    Save,
    Restore,
    Scale(f32, f32),
    BeginPath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Arc(f32, f32, f32, f32, f32),
    Stroke,
    Fill,
    FillStyle(String),
    StrokeStyle(String),
    Font(String),
    FillText(String, f32, f32),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    /// Current save/restore nesting
    depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Unbalanced saves still open
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText(text, _, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Drop recorded calls (start of a new frame)
    pub fn reset(&mut self) {
        self.commands.clear();
        self.depth = 0;
    }

    fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.push(DrawCommand::Clear(width, height));
    }

    fn save(&mut self) {
        self.depth += 1;
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.push(DrawCommand::Restore);
    }

    fn scale(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::Scale(x, y));
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::LineTo(x, y));
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
        self.push(DrawCommand::Arc(x, y, radius, start, end));
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.push(DrawCommand::FillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.push(DrawCommand::StrokeStyle(color.to_string()));
    }

    fn set_font(&mut self, font: &str) {
        self.push(DrawCommand::Font(font.to_string()));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.push(DrawCommand::FillText(text.to_string(), x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_and_depth() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.scale(2.0, 2.0);
        surface.fill_text("Score: 3", 30.0, 50.0);
        assert_eq!(surface.depth(), 1);
        surface.restore();
        // Extra restores never underflow
        surface.restore();
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.commands()[1], DrawCommand::Scale(2.0, 2.0));
        assert_eq!(surface.texts(), vec!["Score: 3"]);

        surface.reset();
        assert!(surface.commands().is_empty());
    }
}
