use crate::StickerPadApp;

/// Modal asking for the text of a new custom sticker
pub fn sticker_prompt(app: &mut StickerPadApp, ctx: &egui::Context) {
    let Some(mut name) = app.sticker_prompt.take() else {
        return;
    };

    let mut open = true;
    let mut submit = false;
    let mut cancel = false;
    egui::Window::new("Custom sticker")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label("Sticker text:");
            let response = ui.text_edit_singleline(&mut name);
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            ui.horizontal(|ui| {
                if ui.button("add").clicked() {
                    submit = true;
                }
                if ui.button("cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if submit {
        if let Err(err) = app.session_mut().add_custom_sticker(&name) {
            log::warn!("Custom sticker rejected: {err}");
        }
    } else if open && !cancel {
        app.sticker_prompt = Some(name);
    }
}
