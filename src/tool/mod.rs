use egui::Pos2;

use crate::command::{DrawCommand, PreviewCommand, StickerCommand, StrokeCommand};
use crate::config::PadConfig;
use crate::error::StickerError;

/// The kinds of mark a gesture can make
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tool {
    ThinPen,
    ThickPen,
    Sticker(String),
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tool::ThinPen => write!(f, "thin pen"),
            Tool::ThickPen => write!(f, "thick pen"),
            Tool::Sticker(glyph) => write!(f, "sticker {glyph}"),
        }
    }
}

impl Tool {
    /// Text shown on the tool's button
    pub fn label(&self) -> &str {
        match self {
            Tool::ThinPen => "thin",
            Tool::ThickPen => "thick",
            Tool::Sticker(glyph) => glyph.as_str(),
        }
    }
}

/// Which tool is active, plus the sticker palette it can be chosen from.
///
/// Exactly one tool is active at any time.
#[derive(Debug, Clone)]
pub struct ToolState {
    active: Tool,
    stickers: Vec<String>,
    thin_pen: f32,
    thick_pen: f32,
    sticker_size: f32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::from_config(&PadConfig::default())
    }
}

impl ToolState {
    /// Thin pen active, palette taken from the config
    pub fn from_config(config: &PadConfig) -> Self {
        let mut stickers: Vec<String> = Vec::with_capacity(config.stickers.len());
        for sticker in &config.stickers {
            if sticker.trim().is_empty() || stickers.contains(sticker) {
                log::warn!("Skipping configured sticker {sticker:?}");
                continue;
            }
            stickers.push(sticker.clone());
        }
        Self {
            active: Tool::ThinPen,
            stickers,
            thin_pen: config.thin_pen,
            thick_pen: config.thick_pen,
            sticker_size: config.sticker_size,
        }
    }

    pub fn active(&self) -> &Tool {
        &self.active
    }

    pub fn is_active(&self, tool: &Tool) -> bool {
        &self.active == tool
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    /// Every selectable tool, in button order
    pub fn tools(&self) -> Vec<Tool> {
        [Tool::ThinPen, Tool::ThickPen]
            .into_iter()
            .chain(self.stickers.iter().cloned().map(Tool::Sticker))
            .collect()
    }

    /// Make `tool` the active one.
    ///
    /// Returns the previously active tool when the selection changed, and
    /// `None` when `tool` was already active or is not on the palette.
    pub fn select(&mut self, tool: Tool) -> Option<Tool> {
        if self.active == tool {
            return None;
        }
        if let Tool::Sticker(glyph) = &tool {
            if !self.stickers.contains(glyph) {
                log::warn!("Ignoring unknown sticker {glyph:?}");
                return None;
            }
        }
        Some(std::mem::replace(&mut self.active, tool))
    }

    /// Add a user-named sticker to the palette.
    ///
    /// Blank names and names already on the palette are refused and leave
    /// the palette untouched. The name is stored exactly as entered.
    pub fn add_custom_sticker(&mut self, name: &str) -> Result<Tool, StickerError> {
        if name.trim().is_empty() {
            return Err(StickerError::Blank);
        }
        if self.stickers.iter().any(|s| s == name) {
            return Err(StickerError::Duplicate(name.to_owned()));
        }
        self.stickers.push(name.to_owned());
        Ok(Tool::Sticker(name.to_owned()))
    }

    /// Line width of a pen tool
    pub fn pen_thickness(&self, tool: &Tool) -> Option<f32> {
        match tool {
            Tool::ThinPen => Some(self.thin_pen),
            Tool::ThickPen => Some(self.thick_pen),
            Tool::Sticker(_) => None,
        }
    }

    /// The command a gesture starting at `at` creates with the active tool
    pub fn start_command(&self, at: Pos2) -> DrawCommand {
        match &self.active {
            Tool::Sticker(glyph) => StickerCommand::new(at, glyph.clone(), self.sticker_size).into(),
            pen => StrokeCommand::new(at, self.pen_thickness(pen).unwrap_or(self.thin_pen)).into(),
        }
    }

    /// The cursor indicator for the active tool at `at`
    pub fn preview(&self, at: Pos2) -> PreviewCommand {
        match &self.active {
            Tool::Sticker(glyph) => PreviewCommand::Sticker {
                position: at,
                glyph: glyph.clone(),
                size: self.sticker_size,
            },
            pen => PreviewCommand::Pen {
                position: at,
                thickness: self.pen_thickness(pen).unwrap_or(self.thin_pen),
            },
        }
    }
}
