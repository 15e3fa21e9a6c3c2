use crate::app::DermiApp;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::state::ConfigState;

pub fn show(ctx: &egui::Context, app: &mut DermiApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Select Photo...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    select_photo(app);
                }

                let upload_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::U);
                if ui
                    .add(
                        egui::Button::new("Upload")
                            .shortcut_text(ctx.format_shortcut(&upload_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.try_begin_upload();
                }

                ui.separator();

                if ui.button("Check Endpoint").clicked() {
                    ui.close();
                    app.send_command(WorkerCommand::Probe {
                        config: app.config.to_upload_config(),
                    });
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Defaults").clicked() {
                    ui.close();
                    app.config = ConfigState::default();
                    app.ui_state.add_log("Config reset to defaults".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::O,
            ))
        }) {
            select_photo(app);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::U,
            ))
        }) {
            app.try_begin_upload();
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::Q,
            ))
        }) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

pub(crate) fn select_photo(app: &mut DermiApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "tiff", "tif"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = result_tx.send(WorkerResult::FileChosen { path });
        }
    });
}

fn import_config(app: &mut DermiApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let config = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
            .and_then(|path| {
                let content = std::fs::read_to_string(&path).ok()?;
                toml::from_str(&content).ok()
            });
        if let Some(config) = config {
            let _ = result_tx.send(WorkerResult::ConfigImported { config });
        }
    });
}

fn export_config(app: &mut DermiApp) {
    let config = app.config.to_upload_config();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("dermi_config.toml")
            .save_file()
        {
            if let Ok(content) = toml::to_string_pretty(&config) {
                let _ = std::fs::write(path, content);
            }
        }
    });
}
