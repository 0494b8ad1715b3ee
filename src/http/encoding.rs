use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Deserialize;

/// Content codings the server knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentEncoding {
    Gzip,
}

impl ContentEncoding {
    /// Token as it appears in `Accept-Encoding` / `Content-Encoding`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Gzip => "gzip",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "gzip" => Some(ContentEncoding::Gzip),
            _ => None,
        }
    }

    /// Runs the whole body through the encoder.
    pub fn encode(&self, body: &[u8]) -> std::io::Result<Vec<u8>> {
        match self {
            ContentEncoding::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(body)?;
                encoder.finish()
            }
        }
    }
}

/// Picks the first scheme listed in `accept_encoding` that is also in `supported`.
///
/// The header is split on `", "`, so `gzip;q=1.0` or `deflate,gzip` do not match.
pub fn negotiate(
    accept_encoding: Option<&str>,
    supported: &[ContentEncoding],
) -> Option<ContentEncoding> {
    accept_encoding?
        .split(", ")
        .filter_map(ContentEncoding::from_token)
        .find(|enc| supported.contains(enc))
}
