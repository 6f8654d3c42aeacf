use egui::Pos2;
use pretty_assertions::assert_eq;
use sticker_pad::{CommandHistory, DrawCommand, StickerCommand, StrokeCommand};

fn stroke(points: &[(f32, f32)], thickness: f32) -> DrawCommand {
    let (first, rest) = points.split_first().unwrap();
    let mut stroke = StrokeCommand::new(Pos2::new(first.0, first.1), thickness);
    for (x, y) in rest {
        stroke.drag(*x, *y);
    }
    stroke.into()
}

fn sticker(glyph: &str, x: f32, y: f32) -> DrawCommand {
    StickerCommand::new(Pos2::new(x, y), glyph, 32.0).into()
}

#[test]
fn test_undo_all_restores_prior_state() {
    for prior in 0..3 {
        let mut history = CommandHistory::new();
        for i in 0..prior {
            history.commit(stroke(&[(i as f32, 0.0)], 1.0));
        }
        let before = history.committed().to_vec();

        let added: Vec<DrawCommand> = (0..4)
            .map(|i| sticker("🌸", i as f32, i as f32))
            .collect();
        for command in &added {
            history.commit(command.clone());
        }
        for _ in &added {
            assert!(history.undo());
        }

        assert_eq!(history.committed(), before.as_slice());
        // Stored bottom to top in removal order, so redo pops them in reverse.
        let expected_redo: Vec<DrawCommand> = added.iter().rev().cloned().collect();
        let redo_in_removal_order: Vec<DrawCommand> =
            history.redo_stack().iter().cloned().collect();
        assert_eq!(redo_in_removal_order, expected_redo);
    }
}

#[test]
fn test_redo_restores_identical_command() {
    let mut history = CommandHistory::new();
    let original = stroke(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)], 6.0);
    history.commit(original.clone());

    history.undo();
    history.redo();

    assert_eq!(history.committed(), &[original.clone()]);
    assert_eq!(history.committed()[0].id(), original.id());
    assert!(history.redo_stack().is_empty());
}

#[test]
fn test_commit_after_undo_discards_redo() {
    let mut history = CommandHistory::new();
    history.commit(stroke(&[(0.0, 0.0)], 2.0));
    history.commit(stroke(&[(1.0, 1.0)], 2.0));
    history.undo();
    history.undo();
    assert_eq!(history.redo_stack().len(), 2);

    history.commit(sticker("🐸", 9.0, 9.0));

    assert!(history.redo_stack().is_empty());
    assert!(!history.redo());
    assert_eq!(history.committed().len(), 1);
}

#[test]
fn test_stroke_and_sticker_scenario() {
    let mut history = CommandHistory::new();
    let a = stroke(&[(0.0, 0.0), (10.0, 10.0)], 2.0);
    let b = sticker("🍵", 50.0, 50.0);

    history.commit(a.clone());
    history.commit(b.clone());

    history.undo();
    assert_eq!(history.committed(), &[a.clone()]);
    assert_eq!(history.redo_stack(), &[b.clone()]);

    history.redo();
    assert_eq!(history.committed(), &[a, b]);
    assert!(history.redo_stack().is_empty());

    history.clear();
    assert!(history.committed().is_empty());
    assert!(history.redo_stack().is_empty());
}

#[test]
fn test_empty_history_undo_redo_are_noops() {
    let mut history = CommandHistory::new();
    assert!(!history.undo());
    assert!(!history.redo());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(history.committed().is_empty());
}
