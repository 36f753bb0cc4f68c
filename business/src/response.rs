//! Response bodies of the generation endpoint and how they are interpreted.

use serde::Deserialize;

use crate::GenerateError;

/// The `data` object of a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedQr {
    /// Image as a data URI.
    pub qr_code: String,
    /// Declared output format, e.g. `PNG`.
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<GeneratedQr>,
    pub error: Option<String>,
}

/// A successful generation together with the HTTP status it arrived with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub status: u16,
    pub qr: GeneratedQr,
}

/// Maps a fetch result onto the generate outcome.
///
/// The body is parsed before the status is looked at: an unparsable body is
/// a transport failure whatever the status, a parsed body with a non-2xx
/// status is a server failure even if it claims success.
pub fn interpret_response(
    result: ehttp::Result<ehttp::Response>,
) -> Result<Generated, GenerateError> {
    let response = result.map_err(GenerateError::transport)?;

    let body: GenerateResponse = response.json().map_err(|err| {
        GenerateError::transport(format!(
            "status {}: unparsable body: {err}",
            response.status
        ))
    })?;

    match body {
        GenerateResponse {
            success: true,
            data: Some(qr),
            ..
        } if response.ok => Ok(Generated {
            status: response.status,
            qr,
        }),
        GenerateResponse { error, .. } => Err(GenerateError::server(error)),
    }
}
