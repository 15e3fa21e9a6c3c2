use crate::app::DermiApp;

pub fn show(ctx: &egui::Context, app: &mut DermiApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Progress bar — indeterminate, the request has no milestones.
        if app.ui_state.is_busy() {
            ui.add(
                egui::ProgressBar::new(0.0)
                    .text("Uploading...")
                    .animate(true),
            );
        } else {
            // Invisible placeholder — same height, no animation
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            ui.label(&app.config.endpoint);
            if let Some(path) = app.ui_state.session.selected_file() {
                ui.separator();
                ui.label(
                    path.file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default(),
                );
            }
            if let Some(elapsed) = app.ui_state.last_elapsed {
                ui.separator();
                ui.label(format!("Last analysis: {:.1}s", elapsed.as_secs_f32()));
            }
        });

        ui.add_space(2.0);
    });
}
