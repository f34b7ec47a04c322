use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::{Deserialize, Serialize};

use super::errors::ImageError;

pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Transfer-ready image: base64 payload plus its MIME type.
///
/// Immutable once built; consumed by a single analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    data: String,
    mime_type: String,
}

impl ImagePayload {
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            data: BASE64_STANDARD.encode(bytes),
            mime_type: mime_type.into(),
        }
    }

    /// Builds a payload from raw base64 or a `data:` URL.
    ///
    /// The envelope prefix and any whitespace are removed. The MIME type comes from
    /// `declared_mime` when present, otherwise from the envelope, otherwise it is
    /// sniffed from the decoded bytes.
    pub fn from_base64(raw: &str, declared_mime: Option<&str>) -> Result<Self, ImageError> {
        let (envelope_mime, body) = split_data_url(raw);
        let data: String = body.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = BASE64_STANDARD
            .decode(data.as_bytes())
            .map_err(|_| ImageError::InvalidEncoding)?;
        if bytes.is_empty() {
            return Err(ImageError::InvalidEncoding);
        }

        let mime_type = declared_mime
            .filter(|m| !m.trim().is_empty())
            .map(|m| m.trim().to_string())
            .or(envelope_mime)
            .unwrap_or_else(|| sniff_mime_type(&bytes));

        Ok(Self { data, mime_type })
    }

    /// Base64 payload without any envelope.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn decode(&self) -> Result<Vec<u8>, ImageError> {
        BASE64_STANDARD
            .decode(self.data.as_bytes())
            .map_err(|_| ImageError::InvalidEncoding)
    }
}

/// Splits `data:<mime>;base64,<body>` into its MIME type and body.
/// Input without an envelope is returned unchanged.
pub fn split_data_url(raw: &str) -> (Option<String>, &str) {
    let trimmed = raw.trim();
    let captures = regex::Regex::new(r"^data:([^;,]*)[^,]*,")
        .ok()
        .and_then(|re| re.captures(trimmed));

    match captures {
        Some(caps) => {
            let prefix_len = caps.get(0).map(|m| m.end()).unwrap_or(0);
            let mime = caps
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .filter(|m| !m.is_empty());
            (mime, &trimmed[prefix_len..])
        }
        None => (None, trimmed),
    }
}

/// Guesses the MIME type from magic bytes.
pub fn sniff_mime_type(bytes: &[u8]) -> String {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| FALLBACK_MIME_TYPE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];

    #[test]
    fn should_strip_data_url_envelope() {
        let (mime, body) = split_data_url("data:image/png;base64,aGVsbG8=");
        assert_eq!(mime.as_deref(), Some("image/png"));
        assert_eq!(body, "aGVsbG8=");
    }

    #[test]
    fn should_leave_plain_base64_untouched() {
        let (mime, body) = split_data_url("aGVsbG8=");
        assert!(mime.is_none());
        assert_eq!(body, "aGVsbG8=");
    }

    #[test]
    fn should_prefer_declared_mime_over_envelope() {
        let payload =
            ImagePayload::from_base64("data:image/png;base64,aGVsbG8=", Some("image/webp"))
                .unwrap();
        assert_eq!(payload.mime_type(), "image/webp");
        assert_eq!(payload.data(), "aGVsbG8=");
    }

    #[test]
    fn should_take_mime_from_envelope_when_not_declared() {
        let payload = ImagePayload::from_base64("data:image/gif;base64,aGVsbG8=", None).unwrap();
        assert_eq!(payload.mime_type(), "image/gif");
    }

    #[test]
    fn should_remove_whitespace_inside_payload() {
        let payload = ImagePayload::from_base64("aGVs\nbG8=", Some("image/jpeg")).unwrap();
        assert_eq!(payload.data(), "aGVsbG8=");
        assert_eq!(payload.decode().unwrap(), b"hello");
    }

    #[test]
    fn should_sniff_mime_when_nothing_declared() {
        let raw = BASE64_STANDARD.encode(PNG_MAGIC);
        let payload = ImagePayload::from_base64(&raw, None).unwrap();
        assert_eq!(payload.mime_type(), "image/png");
    }

    #[test]
    fn should_fall_back_to_octet_stream_for_unknown_bytes() {
        assert_eq!(sniff_mime_type(b"not an image"), FALLBACK_MIME_TYPE);
    }

    #[test]
    fn should_reject_invalid_base64() {
        let result = ImagePayload::from_base64("%%%not-base64%%%", Some("image/png"));
        assert!(matches!(result, Err(ImageError::InvalidEncoding)));
    }

    #[test]
    fn should_reject_empty_payload() {
        let result = ImagePayload::from_base64("data:image/png;base64,", None);
        assert!(matches!(result, Err(ImageError::InvalidEncoding)));
    }
}
