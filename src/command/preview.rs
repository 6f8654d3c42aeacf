use egui::Pos2;

use crate::surface::Surface;

/// Pen preview circle radius, relative to pen thickness
pub const PEN_PREVIEW_RADIUS_FACTOR: f32 = 1.0;
/// Sticker preview glyph size, relative to the placed sticker
pub const STICKER_PREVIEW_SCALE: f32 = 0.75;

/// Transient cursor indicator; drawn on top of the drawing, never recorded
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewCommand {
    Pen { position: Pos2, thickness: f32 },
    Sticker { position: Pos2, glyph: String, size: f32 },
}

impl PreviewCommand {
    pub fn position(&self) -> Pos2 {
        match self {
            PreviewCommand::Pen { position, .. } | PreviewCommand::Sticker { position, .. } => {
                *position
            }
        }
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        match self {
            PreviewCommand::Pen { position, thickness } => {
                surface.set_line_width(1.0);
                surface.stroke_circle(*position, thickness * PEN_PREVIEW_RADIUS_FACTOR);
            }
            PreviewCommand::Sticker { position, glyph, size } => {
                surface.fill_text(glyph, *position, size * STICKER_PREVIEW_SCALE);
            }
        }
    }
}
