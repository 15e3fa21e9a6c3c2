use std::path::Path;
use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use reqwest::Url;
use tracing::debug;

use crate::analysis::Analysis;
use crate::config::UploadConfig;
use crate::error::{DermiError, Result};
use crate::protocol::{ProcessResponse, IMAGE_FIELD};

/// Blocking client for the analysis endpoint. Callers that need a responsive
/// UI run it on a worker thread; one request is outstanding at a time.
pub struct ProcessClient {
    http: Client,
    config: UploadConfig,
}

impl ProcessClient {
    pub fn new(config: UploadConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Upload the file at `path` and interpret the response. The file is sent
    /// as-is; the endpoint decides whether it can decode it.
    pub fn process_file(&self, path: &Path) -> Result<Analysis> {
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        self.process_bytes(filename, bytes)
    }

    /// Single POST of multipart form data with one part named `image`.
    pub fn process_bytes(&self, filename: String, bytes: Vec<u8>) -> Result<Analysis> {
        debug!(
            endpoint = %self.config.endpoint,
            file = %filename,
            size = bytes.len(),
            "uploading image"
        );

        let part = Part::bytes(bytes)
            .file_name(filename)
            .mime_str("application/octet-stream")?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let body = self
            .http
            .post(self.config.endpoint.as_str())
            .multipart(form)
            .send()?
            .text()?;

        let response: ProcessResponse = serde_json::from_str(&body)
            .map_err(|e| DermiError::MalformedResponse(e.to_string()))?;
        debug!(?response, "endpoint replied");

        Ok(response.interpret(self.config.gate_on_success)?)
    }

    /// Probe the endpoint's health route (`test`, sibling of `process`).
    /// Any 2xx counts as healthy.
    pub fn probe(&self) -> Result<()> {
        let url = self.probe_url()?;
        debug!(%url, "probing endpoint");
        self.http.get(url).send()?.error_for_status()?;
        Ok(())
    }

    pub fn probe_url(&self) -> Result<Url> {
        let endpoint = Url::parse(&self.config.endpoint)
            .map_err(|e| DermiError::InvalidEndpoint(e.to_string()))?;
        endpoint
            .join("test")
            .map_err(|e| DermiError::InvalidEndpoint(e.to_string()))
    }
}
