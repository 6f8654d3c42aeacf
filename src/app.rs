use eframe::egui::{self, Key, KeyboardShortcut, Modifiers, Pos2};

use crate::config::PadConfig;
use crate::event::RepaintOnChange;
use crate::export;
use crate::panels::{central_panel, sticker_prompt, tools_panel};
use crate::session::CanvasSession;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(
    Modifiers {
        shift: true,
        ..Modifiers::COMMAND
    },
    Key::Z,
);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// The eframe shell around a [`CanvasSession`]
pub struct StickerPadApp {
    session: CanvasSession,
    /// Text of the custom sticker prompt while it is open
    pub(crate) sticker_prompt: Option<String>,
    /// Outcome of the last successful export
    status: Option<String>,
    pointer_inside: bool,
    last_pointer: Option<Pos2>,
}

impl StickerPadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PadConfig) -> Self {
        Self::with_context(&cc.egui_ctx, config)
    }

    /// Build the app around an existing egui context
    pub fn with_context(ctx: &egui::Context, config: PadConfig) -> Self {
        let session = CanvasSession::new(config);
        session.subscribe(RepaintOnChange::new(ctx.clone()));
        Self {
            session,
            sticker_prompt: None,
            status: None,
            pointer_inside: false,
            last_pointer: None,
        }
    }

    pub fn session(&self) -> &CanvasSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut CanvasSession {
        &mut self.session
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn open_sticker_prompt(&mut self) {
        self.sticker_prompt.get_or_insert_with(String::new);
    }

    /// Export the drawing. Failures are logged and otherwise leave no trace.
    pub fn export(&mut self) {
        let result = self
            .session
            .export_png()
            .and_then(|bytes| export::deliver(&bytes, self.session.config()));
        match result {
            Ok(destination) => {
                log::info!("Exported drawing to {destination}");
                self.status = Some(format!("exported {destination}"));
            }
            Err(err) => log::error!("Export failed: {err}"),
        }
    }

    pub(crate) fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // A focused text field owns the keyboard, including its own undo.
        if ctx.wants_keyboard_input() {
            return;
        }
        // Redo first: the undo shortcut would also match with shift held.
        let (redo, undo) = ctx.input_mut(|i| {
            let redo = i.consume_shortcut(&REDO) || i.consume_shortcut(&REDO_ALT);
            (redo, i.consume_shortcut(&UNDO))
        });
        if redo {
            self.session.redo();
        }
        if undo {
            self.session.undo();
        }
    }

    /// Translate egui pointer state over the canvas into session pointer events
    pub fn handle_canvas_input(&mut self, ui: &egui::Ui, canvas: &egui::Response) {
        let canvas_rect = canvas.rect;
        let (latest, pressed, held, released) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
            )
        });
        let to_canvas = |pos: Pos2| pos - canvas_rect.min.to_vec2();
        // Windows floating over the canvas hide it from the pointer.
        let inside = latest.filter(|pos| canvas_rect.contains(*pos) && canvas.contains_pointer());

        match (self.pointer_inside, inside) {
            (false, Some(pos)) => {
                let pos = to_canvas(pos);
                self.session.pointer_enter(pos.x, pos.y);
            }
            (true, None) => self.session.pointer_leave(),
            _ => {}
        }
        self.pointer_inside = inside.is_some();

        if pressed {
            if let Some(pos) = inside {
                let pos = to_canvas(pos);
                self.session.pointer_down(pos.x, pos.y);
            }
        }

        // Strokes keep following the pointer off the canvas until release.
        if let Some(pos) = latest {
            if self.last_pointer != Some(pos) {
                let canvas_pos = to_canvas(pos);
                if inside.is_some() {
                    self.session.pointer_move(canvas_pos.x, canvas_pos.y, held);
                } else {
                    self.session
                        .pointer_move_outside(canvas_pos.x, canvas_pos.y, held);
                }
            }
        }
        self.last_pointer = latest;

        if released {
            self.session.pointer_up();
        }
    }
}

impl eframe::App for StickerPadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
        sticker_prompt(self, ctx);
    }
}
