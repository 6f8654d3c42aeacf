use egui::Pos2;

use super::CommandId;
use crate::surface::Surface;

/// Freehand stroke: a polyline through every point of the gesture
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCommand {
    id: CommandId,
    points: Vec<Pos2>,
    thickness: f32,
}

impl StrokeCommand {
    /// Start a stroke at `start`; the point list is never empty afterwards
    pub fn new(start: Pos2, thickness: f32) -> Self {
        Self {
            id: CommandId::new(),
            points: vec![start],
            thickness,
        }
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Append a point. Coordinates are not bounded to the canvas.
    pub fn drag(&mut self, x: f32, y: f32) {
        self.points.push(Pos2::new(x, y));
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        surface.set_line_width(self.thickness);
        surface.stroke_polyline(&self.points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stroke_is_seeded() {
        let stroke = StrokeCommand::new(Pos2::new(3.0, 4.0), 2.0);
        assert_eq!(stroke.points(), &[Pos2::new(3.0, 4.0)]);
        assert_eq!(stroke.thickness(), 2.0);
    }

    #[test]
    fn test_drag_appends_in_order_without_bounds() {
        let mut stroke = StrokeCommand::new(Pos2::ZERO, 1.0);
        stroke.drag(10.0, 10.0);
        stroke.drag(-500.0, 9000.0);
        assert_eq!(
            stroke.points(),
            &[Pos2::ZERO, Pos2::new(10.0, 10.0), Pos2::new(-500.0, 9000.0)]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let a = StrokeCommand::new(Pos2::ZERO, 1.0);
        let b = StrokeCommand::new(Pos2::ZERO, 1.0);
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }
}
