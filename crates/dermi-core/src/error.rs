use thiserror::Error;

#[derive(Error, Debug)]
pub enum DermiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("Malformed response body: {0}")]
    MalformedResponse(String),

    #[error("Result image payload is not valid base64: {0}")]
    ImagePayload(#[from] base64::DecodeError),

    #[error("Result image could not be decoded: {0}")]
    ImageFormat(#[from] image::ImageError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

/// Failure reported by the endpoint itself, as opposed to anything going
/// wrong on the way there and back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    #[error("the endpoint reported an erythema index of zero")]
    ZeroErythemaIndex,
}

pub type Result<T> = std::result::Result<T, DermiError>;
