use dermi_core::analysis::RgbTriplet;

use crate::app::DermiApp;
use crate::messages::WorkerCommand;
use crate::panels::{menu_bar, section_header};

const LEFT_PANEL_WIDTH: f32 = 280.0;

/// Swatch box, logical pixels.
const SWATCH_SIZE: egui::Vec2 = egui::vec2(100.0, 50.0);

pub fn show(ctx: &egui::Context, app: &mut DermiApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                photo_section(ui, app);
                ui.separator();
                endpoint_section(ui, app);
                ui.separator();
                results_section(ui, app);
            });
        });
}

fn photo_section(ui: &mut egui::Ui, app: &mut DermiApp) {
    section_header(ui, "Photo", None);
    ui.add_space(4.0);

    if ui.button("Select...").clicked() {
        menu_bar::select_photo(app);
    }

    if let Some(path) = app.ui_state.session.selected_file() {
        ui.label(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
    }

    ui.add_space(4.0);

    let busy = app.ui_state.is_busy();
    if ui
        .add_enabled(!busy, egui::Button::new("Upload"))
        .clicked()
    {
        app.try_begin_upload();
    }
}

fn endpoint_section(ui: &mut egui::Ui, app: &mut DermiApp) {
    section_header(ui, "Endpoint", None);
    ui.add_space(4.0);

    ui.add(
        egui::TextEdit::singleline(&mut app.config.endpoint)
            .hint_text("http://localhost:8000/process"),
    );

    ui.checkbox(&mut app.config.round_color_channels, "Round color channels");
    ui.checkbox(
        &mut app.config.gate_on_success,
        "Treat zero index as failure",
    );

    ui.horizontal(|ui| {
        ui.label("Timeout (s)");
        ui.add(egui::DragValue::new(&mut app.config.timeout_secs).range(0..=600));
        if app.config.timeout_secs == 0 {
            ui.small("none");
        }
    });

    if ui.button("Check").clicked() {
        app.send_command(WorkerCommand::Probe {
            config: app.config.to_upload_config(),
        });
    }
}

fn results_section(ui: &mut egui::Ui, app: &mut DermiApp) {
    let status = app.ui_state.is_busy().then_some("working");
    section_header(ui, "Results", status);
    ui.add_space(4.0);

    if app.ui_state.is_busy() {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.label("Loading...");
        });
        return;
    }

    let round = app.config.round_color_channels;
    let Some(analysis) = app.ui_state.session.analysis() else {
        ui.small("No results yet.");
        return;
    };

    if let Some(line) = analysis.index_line() {
        ui.strong(line);
    }

    if let Some(ref lab) = analysis.lab {
        ui.label(lab.summary());
    }

    if let Some(ref rgb) = analysis.rgb {
        ui.add_space(4.0);
        draw_swatch(ui, rgb, round);
        ui.small(rgb.caption(round));
    }
}

fn draw_swatch(ui: &mut egui::Ui, rgb: &RgbTriplet, round: bool) {
    let [r, g, b] = rgb.to_u8(round);
    let (rect, _) = ui.allocate_exact_size(SWATCH_SIZE, egui::Sense::hover());

    // Outer black rect doubles as a 2 px border around the color fill.
    ui.painter().rect_filled(rect, 5.0, egui::Color32::BLACK);
    ui.painter()
        .rect_filled(rect.shrink(2.0), 4.0, egui::Color32::from_rgb(r, g, b));
}
