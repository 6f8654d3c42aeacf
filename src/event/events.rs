use crate::tool::Tool;

/// Notifications published by the canvas session
#[derive(Debug, Clone, PartialEq)]
pub enum PadEvent {
    /// Committed history, the open gesture or the canvas content changed
    DrawingChanged,
    /// The cursor preview moved, appeared or disappeared
    ToolMoved,
    /// A different tool became active
    ToolChanged { old: Tool, new: Tool },
}
