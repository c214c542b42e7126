//! Surface → PNG → `data:` URI.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;
use thiserror::Error;

use crate::canvas::surface::DrawingSurface;

/// Prefix of every payload produced by [`ImagePayload::from_surface`].
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    #[error("not a PNG data URI")]
    NotPngDataUri,

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Encode the surface as an 8-bit RGBA PNG.
pub fn encode_png(surface: &DrawingSurface) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, surface.width(), surface.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(surface.as_rgba())?;
        writer.finish()?;
    }
    Ok(buf)
}

/// Self-contained image passed as the token URI of a mint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload(String);

impl ImagePayload {
    /// Serialize the current drawing.
    pub fn from_surface(surface: &DrawingSurface) -> Result<Self, EncodeError> {
        let png = encode_png(surface)?;
        Ok(Self::from_png(&png))
    }

    pub fn from_png(png: &[u8]) -> Self {
        Self(format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode(png)))
    }

    /// Parse an existing data URI, checking only the prefix and base64 body.
    pub fn parse(data_uri: &str) -> Result<Self, EncodeError> {
        let body = data_uri
            .strip_prefix(PNG_DATA_URI_PREFIX)
            .ok_or(EncodeError::NotPngDataUri)?;
        STANDARD.decode(body)?;
        Ok(Self(data_uri.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decoded PNG bytes.
    pub fn png_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let body = self
            .0
            .strip_prefix(PNG_DATA_URI_PREFIX)
            .ok_or(EncodeError::NotPngDataUri)?;
        Ok(STANDARD.decode(body)?)
    }
}

impl fmt::Display for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
