use eframe::egui;

/// A square-ish toggle button showing a tool's label or sticker glyph
pub struct ToolButton<'a> {
    pub label: &'a str,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self { label, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        // Glyph stickers get a big font, word labels a readable one
        let font_size = if self.label.chars().count() > 2 { 14.0 } else { 22.0 };
        let font_id = egui::FontId::proportional(font_size);
        let text_color = if self.selected {
            egui::Color32::BLACK
        } else {
            egui::Color32::WHITE
        };
        let galley = ui
            .painter()
            .layout_no_wrap(self.label.to_owned(), font_id, text_color);

        let button_size = egui::vec2((galley.size().x + 12.0).max(36.0), 36.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(40) // Lighter gray on hover
            } else {
                egui::Color32::from_gray(30) // Dark gray by default
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_pos = rect.center() - galley.size() / 2.0;
            ui.painter().galley(text_pos, galley, text_color);

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }
}
