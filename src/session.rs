use egui::Pos2;

use crate::command::{CommandHistory, PreviewCommand};
use crate::config::PadConfig;
use crate::error::{ExportError, StickerError};
use crate::event::{EventBus, EventHandler, PadEvent};
use crate::export;
use crate::renderer::Renderer;
use crate::surface::Surface;
use crate::tool::{Tool, ToolState};

/// One drawing pad: history, active tool and cursor preview.
///
/// All mutation goes through these methods, and every change is announced
/// on the event bus so the host knows to redraw.
#[derive(Debug)]
pub struct CanvasSession {
    config: PadConfig,
    history: CommandHistory,
    tools: ToolState,
    preview: Option<PreviewCommand>,
    renderer: Renderer,
    bus: EventBus,
}

impl Default for CanvasSession {
    fn default() -> Self {
        Self::new(PadConfig::default())
    }
}

impl CanvasSession {
    pub fn new(config: PadConfig) -> Self {
        Self {
            tools: ToolState::from_config(&config),
            config,
            history: CommandHistory::new(),
            preview: None,
            renderer: Renderer::new(),
            bus: EventBus::new(),
        }
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn active_tool(&self) -> &Tool {
        self.tools.active()
    }

    pub fn preview(&self) -> Option<&PreviewCommand> {
        self.preview.as_ref()
    }

    /// True between pointer-down and pointer-up
    pub fn is_drawing(&self) -> bool {
        self.history.in_progress().is_some()
    }

    /// Register a handler for pad notifications
    pub fn subscribe(&self, handler: impl EventHandler + 'static) {
        self.bus.subscribe(handler);
    }

    /// Begin a gesture at `(x, y)` with the active tool
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let at = Pos2::new(x, y);
        let command = self.tools.start_command(at);
        log::debug!("Gesture started: {} at {at:?}", command.label());
        self.history.begin(command);
        self.preview = Some(self.tools.preview(at));
        self.bus.emit(PadEvent::DrawingChanged);
    }

    /// Track the pointer; extend the gesture while the button is held
    pub fn pointer_move(&mut self, x: f32, y: f32, button_held: bool) {
        self.preview = Some(self.tools.preview(Pos2::new(x, y)));
        self.bus.emit(PadEvent::ToolMoved);
        if button_held && self.history.drag(x, y) {
            self.bus.emit(PadEvent::DrawingChanged);
        }
    }

    /// Pointer movement away from the canvas: the gesture keeps extending,
    /// but no preview is shown
    pub fn pointer_move_outside(&mut self, x: f32, y: f32, button_held: bool) {
        if button_held && self.history.drag(x, y) {
            self.bus.emit(PadEvent::DrawingChanged);
        }
    }

    /// End the gesture; the command is frozen and committed
    pub fn pointer_up(&mut self) {
        if self.history.finish() {
            log::debug!("Gesture finished, {} commands", self.history.committed().len());
            self.bus.emit(PadEvent::DrawingChanged);
        }
    }

    pub fn pointer_enter(&mut self, x: f32, y: f32) {
        self.preview = Some(self.tools.preview(Pos2::new(x, y)));
        self.bus.emit(PadEvent::ToolMoved);
    }

    pub fn pointer_leave(&mut self) {
        if self.preview.take().is_some() {
            self.bus.emit(PadEvent::ToolMoved);
        }
    }

    /// Switch tools. Returns false when nothing changed.
    pub fn select_tool(&mut self, tool: Tool) -> bool {
        self.pointer_up();
        let Some(old) = self.tools.select(tool) else {
            return false;
        };
        let new = self.tools.active().clone();
        if let Some(preview) = &self.preview {
            self.preview = Some(self.tools.preview(preview.position()));
        }
        self.bus.emit(PadEvent::ToolChanged { old, new });
        true
    }

    /// Put a user-named sticker on the palette and make it the active tool
    pub fn add_custom_sticker(&mut self, name: &str) -> Result<(), StickerError> {
        let tool = self.tools.add_custom_sticker(name)?;
        log::info!("Added custom sticker {name:?}");
        self.select_tool(tool);
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        self.pointer_up();
        let changed = self.history.undo();
        if changed {
            self.bus.emit(PadEvent::DrawingChanged);
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        self.pointer_up();
        let changed = self.history.redo();
        if changed {
            self.bus.emit(PadEvent::DrawingChanged);
        }
        changed
    }

    /// Empty the drawing and both history stacks
    pub fn clear(&mut self) {
        self.history.clear();
        self.bus.emit(PadEvent::DrawingChanged);
    }

    /// Rebuild the surface from history, preview on top
    pub fn redraw(&self, surface: &mut dyn Surface) {
        self.renderer
            .redraw(surface, self.history.commands(), self.preview.as_ref());
    }

    /// Render the committed drawing at export scale and encode it as PNG.
    /// The gesture in progress and the preview are left out.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        export::export_png(self.history.committed(), &self.config)
    }
}
