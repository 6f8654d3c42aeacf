use image::GenericImageView;
use sticker_pad::{CanvasSession, ExportError, PadConfig, Tool};

#[test]
fn test_export_dimensions_follow_scale() {
    let mut session = CanvasSession::new(PadConfig::default());
    session.pointer_down(0.0, 128.0);
    session.pointer_move(256.0, 128.0, true);
    session.pointer_up();

    let bytes = session.export_png().unwrap();
    let image = image::load_from_memory(&bytes).unwrap();

    assert_eq!(image.dimensions(), (1024, 1024));
    // The stroke at canvas y=128 lands on export row 512.
    let pixel = image.get_pixel(512, 512);
    assert!(pixel[0] < 128, "expected ink, got {pixel:?}");
    assert_eq!(image.get_pixel(512, 100).0, [255, 255, 255, 255]);
}

#[test]
fn test_export_uses_configured_scale() {
    let config = PadConfig {
        canvas_width: 100,
        canvas_height: 50,
        export_scale: 2,
        ..PadConfig::default()
    };
    let session = CanvasSession::new(config);

    let bytes = session.export_png().unwrap();
    let image = image::load_from_memory(&bytes).unwrap();

    assert_eq!(image.dimensions(), (200, 100));
}

#[test]
fn test_export_leaves_history_untouched() {
    let mut session = CanvasSession::new(PadConfig::default());
    session.pointer_down(5.0, 5.0);
    session.pointer_move(50.0, 50.0, true);
    session.pointer_up();
    let before = session.history().committed().to_vec();

    session.export_png().unwrap();

    assert_eq!(session.history().committed(), before.as_slice());
}

#[test]
fn test_export_skips_open_gesture() {
    let mut session = CanvasSession::new(PadConfig {
        canvas_width: 32,
        canvas_height: 32,
        export_scale: 1,
        ..PadConfig::default()
    });
    session.pointer_down(0.0, 16.0);
    session.pointer_move(32.0, 16.0, true);

    let bytes = session.export_png().unwrap();
    let image = image::load_from_memory(&bytes).unwrap().to_rgba8();

    assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    // The stroke itself is still there once the gesture ends.
    session.pointer_up();
    let committed = sticker_pad::export::render(session.history().committed(), 32, 32, 1).unwrap();
    assert_ne!(committed.pixel(16, 16), Some([255, 255, 255, 255]));
}

#[test]
fn test_exported_sticker_lands_at_anchor() {
    let mut session = CanvasSession::new(PadConfig::default());
    assert!(session.select_tool(Tool::Sticker("🍵".to_owned())));
    session.pointer_down(128.0, 128.0);
    session.pointer_up();

    let bytes = session.export_png().unwrap();
    let image = image::load_from_memory(&bytes).unwrap().to_rgba8();
    let dark = |x: u32, y: u32| image.get_pixel(x, y).0[..3].iter().any(|c| *c < 128);

    let near = (448..576)
        .flat_map(|y| (448..576).map(move |x| (x, y)))
        .filter(|(x, y)| dark(*x, *y))
        .count();
    assert!(near > 100, "only {near} inked pixels around the anchor");
    let far = (0..1024)
        .flat_map(|y| (0..1024).map(move |x| (x, y)))
        .filter(|(x, y)| !(384..640).contains(x) || !(384..640).contains(y))
        .filter(|(x, y)| dark(*x, *y))
        .count();
    assert_eq!(far, 0);
}

#[test]
fn test_oversized_export_is_an_error() {
    // Built directly; loading this config would be rejected by validation.
    let session = CanvasSession::new(PadConfig {
        canvas_width: 20_000,
        canvas_height: 20_000,
        ..PadConfig::default()
    });

    assert!(matches!(
        session.export_png(),
        Err(ExportError::Surface { width: 80_000, height: 80_000 })
    ));
}
