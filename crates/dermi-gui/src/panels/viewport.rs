use crate::app::DermiApp;

const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 20.0;

pub fn show(ctx: &egui::Context, app: &mut DermiApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        ui.painter()
            .rect_filled(rect, 0.0, egui::Color32::from_gray(30));

        let texture_info = app
            .viewport
            .texture
            .as_ref()
            .map(|t| (t.id(), [t.size()[0] as f32, t.size()[1] as f32]));

        let Some((texture_id, tex_size)) = texture_info else {
            show_placeholder(ui);
            return;
        };

        let image_size = app
            .viewport
            .image_size
            .map(|s| egui::vec2(s[0] as f32, s[1] as f32))
            .unwrap_or_else(|| egui::vec2(tex_size[0], tex_size[1]));

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        // Scroll to zoom toward the cursor.
        let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll_delta != 0.0 && response.hovered() {
            let zoom_factor = (scroll_delta * 0.005).exp();
            let new_zoom = (app.viewport.zoom * zoom_factor).clamp(MIN_ZOOM, MAX_ZOOM);

            if let Some(mouse_pos) = ui.input(|i| i.pointer.hover_pos()) {
                let center = rect.center().to_vec2() + app.viewport.pan_offset;
                let mouse_rel = mouse_pos.to_vec2() - center;
                let scale_change = new_zoom / app.viewport.zoom;
                app.viewport.pan_offset += mouse_rel * (1.0 - scale_change);
            }

            app.viewport.zoom = new_zoom;
        }

        if response.dragged() {
            app.viewport.pan_offset += response.drag_delta();
        }

        if response.double_clicked() {
            fit_to_rect(
                &mut app.viewport.zoom,
                &mut app.viewport.pan_offset,
                image_size,
                rect,
            );
        }

        let scaled = image_size * app.viewport.zoom;
        let img_rect =
            egui::Rect::from_center_size(rect.center() + app.viewport.pan_offset, scaled);
        ui.painter().image(
            texture_id,
            img_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        if !app.viewport.viewing_label.is_empty() {
            ui.painter().text(
                rect.left_top() + egui::vec2(8.0, 8.0),
                egui::Align2::LEFT_TOP,
                &app.viewport.viewing_label,
                egui::FontId::proportional(14.0),
                egui::Color32::from_white_alpha(200),
            );
        }
    });
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Upload a photo to see the processed image")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

fn fit_to_rect(zoom: &mut f32, pan: &mut egui::Vec2, image_size: egui::Vec2, rect: egui::Rect) {
    let available = rect.size();
    let fit = (available.x / image_size.x).min(available.y / image_size.y);
    *zoom = fit.clamp(MIN_ZOOM, MAX_ZOOM);
    *pan = egui::Vec2::ZERO;
}
