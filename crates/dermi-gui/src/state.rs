use std::time::Duration;

use dermi_core::config::UploadConfig;
use dermi_core::session::UploadSession;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Selected file, in-flight flag, and last accepted analysis.
    pub session: UploadSession,

    /// Blocking alert text; rendered as a modal window until dismissed.
    pub alert: Option<String>,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// Wall time of the last completed analysis.
    pub last_elapsed: Option<Duration>,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.session.is_uploading()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Original image size (before any display scaling).
    pub image_size: Option<[usize; 2]>,
    pub zoom: f32,
    pub pan_offset: egui::Vec2,
    pub viewing_label: String,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            image_size: None,
            zoom: 1.0,
            pan_offset: egui::Vec2::ZERO,
            viewing_label: String::new(),
        }
    }
}

/// Upload configuration as editable UI fields.
pub struct ConfigState {
    pub endpoint: String,
    pub round_color_channels: bool,
    pub gate_on_success: bool,
    /// Request timeout in seconds; 0 = wait as long as the server does.
    pub timeout_secs: u64,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self::from_upload_config(&UploadConfig::default())
    }
}

impl ConfigState {
    pub fn to_upload_config(&self) -> UploadConfig {
        UploadConfig {
            endpoint: self.endpoint.trim().to_string(),
            round_color_channels: self.round_color_channels,
            gate_on_success: self.gate_on_success,
            timeout_secs: (self.timeout_secs > 0).then_some(self.timeout_secs),
        }
    }

    pub fn from_upload_config(config: &UploadConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            round_color_channels: config.round_color_channels,
            gate_on_success: config.gate_on_success,
            timeout_secs: config.timeout_secs.unwrap_or(0),
        }
    }
}
