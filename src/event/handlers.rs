use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::{EventHandler, PadEvent};

/// Asks egui for a new frame whenever the pad changes
#[derive(Debug, Clone)]
pub struct RepaintOnChange {
    ctx: egui::Context,
}

impl RepaintOnChange {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintOnChange {
    fn handle_event(&mut self, event: &PadEvent) {
        if let PadEvent::ToolChanged { old, new } = event {
            log::info!("Tool changed: {old} -> {new}");
        }
        self.ctx.request_repaint();
    }
}

/// Collects every event it sees; shared so the subscriber can read it back
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<PadEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, oldest first
    pub fn events(&self) -> Vec<PadEvent> {
        self.events.lock().clone()
    }

    /// Return and forget the events received so far
    pub fn take(&self) -> Vec<PadEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for EventLog {
    fn handle_event(&mut self, event: &PadEvent) {
        self.events.lock().push(event.clone());
    }
}
