mod history;
mod preview;
mod sticker;
mod stroke;

use egui::Pos2;
use uuid::Uuid;

use crate::surface::Surface;

pub use history::CommandHistory;
pub use preview::{PEN_PREVIEW_RADIUS_FACTOR, PreviewCommand, STICKER_PREVIEW_SCALE};
pub use sticker::StickerCommand;
pub use stroke::StrokeCommand;

/// Identity of a drawing command, assigned when the gesture starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId(Uuid);

impl CommandId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CommandId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// A replayable unit of drawing history
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Stroke(StrokeCommand),
    Sticker(StickerCommand),
}

impl DrawCommand {
    pub fn id(&self) -> CommandId {
        match self {
            DrawCommand::Stroke(stroke) => stroke.id(),
            DrawCommand::Sticker(sticker) => sticker.id(),
        }
    }

    /// Every point recorded during the gesture, in order
    pub fn points(&self) -> &[Pos2] {
        match self {
            DrawCommand::Stroke(stroke) => stroke.points(),
            DrawCommand::Sticker(sticker) => sticker.points(),
        }
    }

    /// Extend the command with the pointer's new position
    pub fn drag(&mut self, x: f32, y: f32) {
        match self {
            DrawCommand::Stroke(stroke) => stroke.drag(x, y),
            DrawCommand::Sticker(sticker) => sticker.drag(x, y),
        }
    }

    /// Replay the command onto a surface
    pub fn display(&self, surface: &mut dyn Surface) {
        match self {
            DrawCommand::Stroke(stroke) => stroke.display(surface),
            DrawCommand::Sticker(sticker) => sticker.display(surface),
        }
    }

    /// Short human-readable description for history listings
    pub fn label(&self) -> String {
        match self {
            DrawCommand::Stroke(stroke) => {
                format!("Stroke {}px ({} points)", stroke.thickness(), stroke.points().len())
            }
            DrawCommand::Sticker(sticker) => format!("Sticker {}", sticker.glyph()),
        }
    }
}

impl From<StrokeCommand> for DrawCommand {
    fn from(stroke: StrokeCommand) -> Self {
        DrawCommand::Stroke(stroke)
    }
}

impl From<StickerCommand> for DrawCommand {
    fn from(sticker: StickerCommand) -> Self {
        DrawCommand::Sticker(sticker)
    }
}
