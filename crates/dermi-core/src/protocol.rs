use serde::Deserialize;

use crate::analysis::{Analysis, LabTriplet, ResultImage, RgbTriplet};
use crate::error::ProcessingError;

/// Form field name the endpoint expects the uploaded file under.
pub const IMAGE_FIELD: &str = "image";

/// Raw JSON body of a `process` response. Every field is optional on the
/// wire; unrecognized fields are ignored. Names match the endpoint exactly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessResponse {
    #[serde(rename = "EI")]
    pub ei: Option<f64>,
    pub r: Option<f64>,
    pub g: Option<f64>,
    pub b: Option<f64>,
    pub l: Option<f64>,
    pub a: Option<f64>,
    pub b2: Option<f64>,
    #[serde(rename = "returnImage")]
    pub return_image: Option<String>,
}

impl ProcessResponse {
    /// Interpret the wire response. With `gate_on_success` set, an erythema
    /// index of exactly zero is a failure report, not a measurement.
    pub fn interpret(self, gate_on_success: bool) -> Result<Analysis, ProcessingError> {
        if gate_on_success && self.ei == Some(0.0) {
            return Err(ProcessingError::ZeroErythemaIndex);
        }

        let rgb = match (self.r, self.g, self.b) {
            (Some(r), Some(g), Some(b)) => Some(RgbTriplet { r, g, b }),
            _ => None,
        };
        let lab = match (self.l, self.a, self.b2) {
            (Some(l), Some(a), Some(b)) => Some(LabTriplet { l, a, b }),
            _ => None,
        };

        Ok(Analysis {
            erythema_index: self.ei,
            rgb,
            lab,
            image: self.return_image.map(ResultImage::new),
        })
    }
}
