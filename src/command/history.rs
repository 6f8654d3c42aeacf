use super::DrawCommand;

/// Linear undo/redo over committed drawing commands.
///
/// Commands are only ever pushed or popped between the two stacks. The one
/// exception is the gesture in progress, which lives outside both stacks
/// until [`CommandHistory::finish`] commits it.
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Commands in the drawing, oldest first
    committed: Vec<DrawCommand>,
    /// Undone commands; the last one is the next to redo
    redo: Vec<DrawCommand>,
    /// Command still being extended by the current gesture
    in_progress: Option<DrawCommand>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished command to the drawing. New work invalidates redo.
    pub fn commit(&mut self, command: DrawCommand) {
        log::debug!("Commit {} ({})", command.label(), command.id());
        self.committed.push(command);
        self.redo.clear();
    }

    /// Start a gesture with `command`.
    ///
    /// The redo stack is dropped right away, since the gesture is new work.
    /// A gesture left open is committed first.
    pub fn begin(&mut self, command: DrawCommand) {
        self.finish();
        self.redo.clear();
        self.in_progress = Some(command);
    }

    /// Extend the gesture in progress. Returns false if there is none.
    pub fn drag(&mut self, x: f32, y: f32) -> bool {
        match &mut self.in_progress {
            Some(command) => {
                command.drag(x, y);
                true
            }
            None => false,
        }
    }

    /// Freeze the gesture in progress and commit it. Returns false if there is none.
    pub fn finish(&mut self) -> bool {
        match self.in_progress.take() {
            Some(command) => {
                self.commit(command);
                true
            }
            None => false,
        }
    }

    /// Move the newest committed command onto the redo stack
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(command) => {
                log::debug!("Undo {}", command.id());
                self.redo.push(command);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone command back into the drawing
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(command) => {
                log::debug!("Redo {}", command.id());
                self.committed.push(command);
                true
            }
            None => false,
        }
    }

    /// Forget everything, including an open gesture
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo.clear();
        self.in_progress = None;
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn committed(&self) -> &[DrawCommand] {
        &self.committed
    }

    pub fn redo_stack(&self) -> &[DrawCommand] {
        &self.redo
    }

    pub fn in_progress(&self) -> Option<&DrawCommand> {
        self.in_progress.as_ref()
    }

    /// Everything visible on the canvas, in replay order
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.committed.iter().chain(self.in_progress.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.in_progress.is_none()
    }
}
