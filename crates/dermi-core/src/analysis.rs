use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::Result;

/// Corrected median skin color in sRGB, 0–255 per channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbTriplet {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RgbTriplet {
    /// Channel values for display. With `round` set, halfway cases go away
    /// from zero (`f64::round`), so 30.5 becomes 31.
    pub fn channels(&self, round: bool) -> [f64; 3] {
        if round {
            [self.r.round(), self.g.round(), self.b.round()]
        } else {
            [self.r, self.g, self.b]
        }
    }

    /// 8-bit channels for painting the swatch. Out-of-range values saturate.
    pub fn to_u8(&self, round: bool) -> [u8; 3] {
        let [r, g, b] = self.channels(round);
        [r as u8, g as u8, b as u8]
    }

    pub fn caption(&self, round: bool) -> String {
        let [r, g, b] = self.channels(round);
        format!("R: {r} G: {g} B: {b}")
    }
}

/// CIE Lab reading for the same median pixel. `b` is the Lab b* component,
/// carried as `b2` on the wire to keep it apart from the blue channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabTriplet {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl LabTriplet {
    pub fn summary(&self) -> String {
        format!("L: {}  a: {}  b: {}", self.l, self.a, self.b)
    }
}

/// Base64-encoded JPEG returned under `returnImage`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultImage {
    payload: String,
}

impl ResultImage {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Data URI usable as an image source. The single space after the comma
    /// is part of the format downstream consumers key on.
    pub fn data_uri(&self) -> String {
        format!("data:image/jpeg;base64, {}", self.payload)
    }

    /// Decode the base64 payload back into raw JPEG bytes.
    pub fn to_jpeg_bytes(&self) -> Result<Vec<u8>> {
        Ok(BASE64.decode(self.payload.as_bytes())?)
    }

    /// Decode all the way to RGBA pixels, ready for display.
    pub fn to_rgba(&self) -> Result<image::RgbaImage> {
        let bytes = self.to_jpeg_bytes()?;
        let decoded = image::load_from_memory(&bytes)?;
        Ok(decoded.to_rgba8())
    }
}

/// Interpreted endpoint response. The groups are independent: each is present
/// only when every field it needs arrived in the response.
#[derive(Clone, Debug, Default)]
pub struct Analysis {
    pub erythema_index: Option<f64>,
    pub rgb: Option<RgbTriplet>,
    pub lab: Option<LabTriplet>,
    pub image: Option<ResultImage>,
}

impl Analysis {
    pub fn index_line(&self) -> Option<String> {
        self.erythema_index.map(|ei| format!("EI: {ei}"))
    }

    pub fn is_empty(&self) -> bool {
        self.erythema_index.is_none()
            && self.rgb.is_none()
            && self.lab.is_none()
            && self.image.is_none()
    }
}
