//! Browser canvas backend

use web_sys::CanvasRenderingContext2d;

use super::Surface;

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f32, height: f32) {
        self.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn scale(&mut self, x: f32, y: f32) {
        let _ = CanvasRenderingContext2d::scale(self, x as f64, y as f64);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        CanvasRenderingContext2d::move_to(self, x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        CanvasRenderingContext2d::line_to(self, x as f64, y as f64);
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
        let _ = CanvasRenderingContext2d::arc(
            self,
            x as f64,
            y as f64,
            radius as f64,
            start as f64,
            end as f64,
        );
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let _ = CanvasRenderingContext2d::fill_text(self, text, x as f64, y as f64);
    }
}
