use std::path::PathBuf;
use std::time::Duration;

use dermi_core::analysis::Analysis;
use dermi_core::config::UploadConfig;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Upload the selected photo to the analysis endpoint.
    Upload { path: PathBuf, config: UploadConfig },

    /// Probe the endpoint's health route.
    Probe { config: UploadConfig },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// A file dialog closed with a chosen photo.
    FileChosen { path: PathBuf },

    /// Upload accepted: interpreted metrics plus the decoded result image.
    UploadComplete {
        analysis: Analysis,
        image: Option<image::RgbaImage>,
        elapsed: Duration,
    },

    /// The endpoint reported a processing failure for this upload.
    UploadRejected { message: String },

    /// The request failed before a usable response existed.
    UploadFailed { message: String },

    /// Configuration imported from a TOML file.
    ConfigImported { config: UploadConfig },

    /// Health probe outcome.
    ProbeComplete { healthy: bool, message: String },

    Log { message: String },
}
