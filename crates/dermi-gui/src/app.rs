use std::sync::mpsc;

use dermi_core::session::UploadGateError;

use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{ConfigState, UIState, ViewportState};
use crate::worker;

pub struct DermiApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub config: ConfigState,
    pub show_about: bool,
}

impl DermiApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            config: ConfigState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FileChosen { path } => {
                    self.ui_state.add_log(format!("Selected: {}", path.display()));
                    self.ui_state.session.select_file(path);
                }
                WorkerResult::UploadComplete {
                    analysis,
                    image,
                    elapsed,
                } => {
                    if let Some(ref rgba) = image {
                        self.update_viewport_texture(ctx, rgba, "Processed");
                    }
                    self.ui_state.session.complete(analysis);
                    self.ui_state.last_elapsed = Some(elapsed);
                }
                WorkerResult::UploadRejected { message } => {
                    self.ui_state.session.reject();
                    self.clear_viewport();
                    self.ui_state.add_log(format!("Rejected: {message}"));
                    self.ui_state.alert = Some(message);
                }
                WorkerResult::UploadFailed { message } => {
                    // Transport problems go to the log only; whatever was on
                    // screen before the attempt stays.
                    self.ui_state.session.abort();
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::ConfigImported { config } => {
                    self.config = ConfigState::from_upload_config(&config);
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::ProbeComplete { healthy, message } => {
                    if healthy {
                        self.ui_state.add_log(message);
                    } else {
                        self.ui_state.add_log(format!("ERROR: {message}"));
                    }
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Gate an upload attempt through the session and dispatch it.
    /// The missing-file case surfaces as a blocking alert, before any
    /// request goes out.
    pub fn try_begin_upload(&mut self) {
        match self.ui_state.session.begin_upload() {
            Ok(path) => {
                self.cmd_tx
                    .send(WorkerCommand::Upload {
                        path,
                        config: self.config.to_upload_config(),
                    })
                    .ok();
            }
            Err(UploadGateError::NoFileSelected) => {
                self.ui_state.alert = Some("Please select a file".to_string());
            }
            Err(UploadGateError::UploadInFlight) => {
                self.ui_state
                    .add_log("Upload already in flight, ignoring".into());
            }
        }
    }

    fn update_viewport_texture(
        &mut self,
        ctx: &egui::Context,
        rgba: &image::RgbaImage,
        label: &str,
    ) {
        let image = rgba_to_color_image(rgba);
        let size = image.size;
        let texture = ctx.load_texture("result", image, egui::TextureOptions::LINEAR);
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some(size);
        self.viewport.viewing_label = label.to_string();
    }

    fn clear_viewport(&mut self) {
        self.viewport.texture = None;
        self.viewport.image_size = None;
        self.viewport.viewing_label.clear();
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for DermiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        // Blocking alert — nothing else reacts until it is dismissed.
        if let Some(message) = self.ui_state.alert.clone() {
            egui::Window::new("Upload")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(message);
                        ui.add_space(8.0);
                        if ui.button("OK").clicked() {
                            self.ui_state.alert = None;
                        }
                    });
                });
        }

        // About dialog
        if self.show_about {
            egui::Window::new("About Dermi")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Dermi");
                        ui.label("Skin Image Analysis Client");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
