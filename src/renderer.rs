use crate::command::{DrawCommand, PreviewCommand};
use crate::surface::Surface;

/// Rebuilds the picture from command history.
///
/// The surface holds no state of its own: every frame is cleared and
/// replayed from the commands, so undo and redo are exact.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Clear the surface, replay `commands` back to front, then overlay the preview
    pub fn redraw<'a>(
        &self,
        surface: &mut dyn Surface,
        commands: impl IntoIterator<Item = &'a DrawCommand>,
        preview: Option<&PreviewCommand>,
    ) {
        surface.clear();
        self.replay(surface, commands);
        if let Some(preview) = preview {
            preview.display(surface);
        }
    }

    /// Display `commands` in order without clearing first
    pub fn replay<'a>(
        &self,
        surface: &mut dyn Surface,
        commands: impl IntoIterator<Item = &'a DrawCommand>,
    ) {
        for command in commands {
            command.display(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{StickerCommand, StrokeCommand};
    use egui::Pos2;

    /// Records surface calls so replay order can be checked
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.calls.push("clear".to_owned());
        }

        fn set_line_width(&mut self, width: f32) {
            self.calls.push(format!("width {width}"));
        }

        fn stroke_polyline(&mut self, points: &[Pos2]) {
            self.calls.push(format!("polyline {}", points.len()));
        }

        fn stroke_circle(&mut self, _center: Pos2, radius: f32) {
            self.calls.push(format!("circle {radius}"));
        }

        fn fill_text(&mut self, text: &str, anchor: Pos2, size: f32) {
            self.calls
                .push(format!("text {text} at {},{} size {size}", anchor.x, anchor.y));
        }
    }

    #[test]
    fn test_redraw_order() {
        let mut stroke = StrokeCommand::new(Pos2::ZERO, 2.0);
        stroke.drag(10.0, 10.0);
        let commands: Vec<DrawCommand> = vec![
            stroke.into(),
            StickerCommand::new(Pos2::new(50.0, 50.0), "🍵", 32.0).into(),
        ];
        let preview = PreviewCommand::Pen {
            position: Pos2::new(5.0, 5.0),
            thickness: 6.0,
        };

        let mut surface = RecordingSurface::default();
        Renderer::new().redraw(&mut surface, &commands, Some(&preview));

        assert_eq!(
            surface.calls,
            vec![
                "clear",
                "width 2",
                "polyline 2",
                "text 🍵 at 50,50 size 32",
                "width 1",
                "circle 6",
            ]
        );
    }

    #[test]
    fn test_replay_does_not_clear() {
        let commands: Vec<DrawCommand> = vec![StrokeCommand::new(Pos2::ZERO, 3.0).into()];
        let mut surface = RecordingSurface::default();
        Renderer::new().replay(&mut surface, &commands);
        assert_eq!(surface.calls, vec!["width 3", "polyline 1"]);
    }

    #[test]
    fn test_sticker_preview_is_reduced() {
        let preview = PreviewCommand::Sticker {
            position: Pos2::new(1.0, 2.0),
            glyph: "🐸".to_owned(),
            size: 32.0,
        };
        let mut surface = RecordingSurface::default();
        Renderer::new().redraw(&mut surface, std::iter::empty(), Some(&preview));
        assert_eq!(surface.calls, vec!["clear", "text 🐸 at 1,2 size 24"]);
    }
}
