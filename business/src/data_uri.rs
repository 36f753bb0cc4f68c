//! Data URI parsing and size estimation.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::DataUriError;

/// A borrowed view of `data:<mime>[;base64],<payload>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUri<'a> {
    pub mime: &'a str,
    pub is_base64: bool,
    pub payload: &'a str,
}

impl<'a> DataUri<'a> {
    pub fn parse(uri: &'a str) -> Result<Self, DataUriError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or(DataUriError::MissingScheme)?;
        let (meta, payload) = rest.split_once(',').ok_or(DataUriError::MissingPayload)?;

        let (mime, is_base64) = match meta.strip_suffix(";base64") {
            Some(mime) => (mime, true),
            None => (meta, false),
        };

        Ok(Self {
            mime,
            is_base64,
            payload,
        })
    }

    /// Raw bytes of the payload. Non-base64 payloads are returned as-is.
    pub fn decode(&self) -> Result<Vec<u8>, DataUriError> {
        if self.is_base64 {
            Ok(STANDARD.decode(self.payload.trim())?)
        } else {
            Ok(self.payload.as_bytes().to_vec())
        }
    }
}

/// Approximate decoded size, in KB, of a base64 data URI of `len` characters.
///
/// `round(len * 0.75 / 1024)`, measured over the whole URI string.
pub fn approx_size_kb(len: usize) -> u64 {
    (len as f64 * 0.75 / 1024.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base64_png() {
        let uri = DataUri::parse("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(uri.mime, "image/png");
        assert!(uri.is_base64);
        assert_eq!(uri.payload, "iVBORw0KGgo=");
        assert_eq!(
            uri.decode().unwrap(),
            vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]
        );
    }

    #[test]
    fn test_parse_plain_payload() {
        let uri = DataUri::parse("data:image/svg+xml,<svg/>").unwrap();
        assert_eq!(uri.mime, "image/svg+xml");
        assert!(!uri.is_base64);
        assert_eq!(uri.decode().unwrap(), b"<svg/>".to_vec());
    }

    #[test]
    fn test_parse_rejects_non_data_uri() {
        assert_eq!(
            DataUri::parse("https://example.com/qr.png"),
            Err(DataUriError::MissingScheme)
        );
        assert_eq!(
            DataUri::parse("data:image/png;base64"),
            Err(DataUriError::MissingPayload)
        );
    }

    #[test]
    fn test_invalid_base64_is_reported() {
        let uri = DataUri::parse("data:image/png;base64,***").unwrap();
        assert!(matches!(uri.decode(), Err(DataUriError::Base64(_))));
    }

    #[test]
    fn test_approx_size_kb_rounds() {
        assert_eq!(approx_size_kb(0), 0);
        // 682 * 0.75 / 1024 = 0.4995
        assert_eq!(approx_size_kb(682), 0);
        // 683 * 0.75 / 1024 = 0.5002
        assert_eq!(approx_size_kb(683), 1);
        assert_eq!(approx_size_kb(4096), 3);
        // 10_000 * 0.75 / 1024 = 7.32
        assert_eq!(approx_size_kb(10_000), 7);
    }
}
