mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::PadEvent;
pub use handlers::{EventLog, RepaintOnChange};

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &PadEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&PadEvent) + Send,
{
    fn handle_event(&mut self, event: &PadEvent) {
        self(event)
    }
}
