use serde::{Deserialize, Serialize};

/// `process` route of a locally running analysis backend.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/process";

/// Everything that varied between deployments of the upload view, collapsed
/// into one parameterized configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Absolute URL of the `process` route.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Round color channels to the nearest integer for display.
    #[serde(default = "default_true")]
    pub round_color_channels: bool,

    /// Treat an erythema index of zero as a failure report and clear results.
    #[serde(default = "default_true")]
    pub gate_on_success: bool,

    /// Request timeout in seconds. Absent = wait as long as the server does.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            round_color_channels: true,
            gate_on_success: true,
            timeout_secs: None,
        }
    }
}
