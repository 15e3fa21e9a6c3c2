use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::analysis::Analysis;

/// Why an upload attempt was refused before any request went out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadGateError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("an upload is already in flight")]
    UploadInFlight,
}

/// Per-window upload state: the selected file, the in-flight flag, and the
/// last accepted analysis. At most one upload runs at a time, and the
/// in-flight flag is cleared on every exit path — completion, rejection by
/// the endpoint, and transport failure alike.
#[derive(Debug, Default)]
pub struct UploadSession {
    selected: Option<PathBuf>,
    uploading: bool,
    analysis: Option<Analysis>,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the user's file choice. Existing results are untouched.
    pub fn select_file(&mut self, path: PathBuf) {
        self.selected = Some(path);
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    /// Gate an upload attempt and mark the session in flight.
    /// Returns the file to send.
    pub fn begin_upload(&mut self) -> Result<PathBuf, UploadGateError> {
        if self.uploading {
            return Err(UploadGateError::UploadInFlight);
        }
        let path = self
            .selected
            .clone()
            .ok_or(UploadGateError::NoFileSelected)?;
        self.uploading = true;
        Ok(path)
    }

    /// The endpoint accepted the upload and returned metrics.
    pub fn complete(&mut self, analysis: Analysis) {
        self.analysis = Some(analysis);
        self.uploading = false;
    }

    /// The endpoint reported a processing failure: drop displayed results.
    pub fn reject(&mut self) {
        self.analysis = None;
        self.uploading = false;
    }

    /// The request never produced a usable response. Whatever was on screen
    /// before the attempt stays.
    pub fn abort(&mut self) {
        self.uploading = false;
    }
}
