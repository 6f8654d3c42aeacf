use crate::StickerPadApp;
use crate::components::ToolButton;

pub fn tools_panel(app: &mut StickerPadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            ui.horizontal_wrapped(|ui| {
                for tool in app.session().tools().tools() {
                    let selected = app.session().tools().is_active(&tool);
                    if ToolButton::new(tool.label(), selected).show(ui).clicked() {
                        log::info!("Tool selected from UI: {tool}");
                        app.session_mut().select_tool(tool);
                    }
                }
            });
            if ui.button("custom sticker…").clicked() {
                app.open_sticker_prompt();
            }
            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.session().history().can_undo();
                let can_redo = app.session().history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("undo")).clicked() {
                    app.session_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("redo")).clicked() {
                    app.session_mut().redo();
                }
                if ui.button("clear").clicked() {
                    app.session_mut().clear();
                }
            });

            if ui.button("export").clicked() {
                app.export();
            }
            if let Some(status) = app.status() {
                ui.small(status);
            }
            ui.separator();

            let history = app.session().history();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.committed().len()));
                ui.label(format!("Redo stack size: {}", history.redo_stack().len()));
            });

            egui::Grid::new("command_history_grid")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Drawing");
                    ui.strong("Redo");
                    ui.end_row();

                    let committed = history.committed();
                    let redo = history.redo_stack();
                    for i in 0..committed.len().max(redo.len()) {
                        ui.label(committed.get(i).map(|c| c.label()).unwrap_or_default());
                        ui.label(redo.get(i).map(|c| c.label()).unwrap_or_default());
                        ui.end_row();
                    }
                });
        });
}
