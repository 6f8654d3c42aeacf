use crate::StickerPadApp;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut StickerPadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let config = app.session().config();
        ui.heading(&config.title);

        let size = egui::vec2(config.canvas_width as f32, config.canvas_height as f32);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
        let canvas_rect = response.rect;

        app.handle_canvas_input(ui, &response);

        let mut surface = PainterSurface::new(&painter, canvas_rect);
        app.session().redraw(&mut surface);
        painter.rect_stroke(
            canvas_rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::GRAY),
        );
    });
}
