use egui::Pos2;

use super::CommandId;
use crate::surface::Surface;

/// A glyph stamped onto the canvas.
///
/// Dragging records every position, but only the latest one is drawn: the
/// sticker follows the pointer instead of leaving a trail.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerCommand {
    id: CommandId,
    points: Vec<Pos2>,
    glyph: String,
    size: f32,
}

impl StickerCommand {
    pub fn new(anchor: Pos2, glyph: impl Into<String>, size: f32) -> Self {
        Self {
            id: CommandId::new(),
            points: vec![anchor],
            glyph: glyph.into(),
            size,
        }
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Where the sticker is drawn
    pub fn anchor(&self) -> Pos2 {
        // Construction seeds one point, so the list is never empty.
        self.points.last().copied().unwrap_or_default()
    }

    pub fn drag(&mut self, x: f32, y: f32) {
        self.points.push(Pos2::new(x, y));
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        surface.fill_text(&self.glyph, self.anchor(), self.size);
    }
}
