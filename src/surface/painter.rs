use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

use super::Surface;

pub const BACKGROUND: Color32 = Color32::WHITE;
pub const INK: Color32 = Color32::BLACK;

/// On-screen surface backed by an egui painter.
///
/// The canvas origin maps to the top-left corner of `canvas_rect`, and the
/// painter is clipped to that rectangle so off-canvas points clip visually.
pub struct PainterSurface {
    painter: Painter,
    canvas_rect: Rect,
    line_width: f32,
}

impl PainterSurface {
    pub fn new(painter: &Painter, canvas_rect: Rect) -> Self {
        Self {
            painter: painter.with_clip_rect(canvas_rect),
            canvas_rect,
            line_width: 1.0,
        }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        self.canvas_rect.min + point.to_vec2()
    }
}

impl Surface for PainterSurface {
    fn clear(&mut self) {
        self.painter.rect_filled(self.canvas_rect, 0.0, BACKGROUND);
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn stroke_polyline(&mut self, points: &[Pos2]) {
        if points.len() < 2 {
            return;
        }
        let screen_points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(Shape::line(screen_points, Stroke::new(self.line_width, INK)));
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32) {
        self.painter.circle_stroke(
            self.to_screen(center),
            radius,
            Stroke::new(self.line_width, INK),
        );
    }

    fn fill_text(&mut self, text: &str, anchor: Pos2, size: f32) {
        self.painter.text(
            self.to_screen(anchor),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(size),
            INK,
        );
    }
}
