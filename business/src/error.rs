//! Error types for the generation workflow and for downloads.

use thiserror::Error;

/// Message shown when the server reports failure without a message.
pub const GENERIC_SERVER_ERROR: &str = "Failed to generate QR code";

/// Message shown for every transport-level failure.
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

/// Message shown when the primary field of the active kind is empty.
pub const VALIDATION_ERROR: &str = "Please fill in all required fields";

/// Everything that can go wrong in one generate cycle.
///
/// `Display` is the user-facing message; the transport detail is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("{VALIDATION_ERROR}")]
    Validation,
    #[error("{0}")]
    Server(String),
    #[error("{NETWORK_ERROR}")]
    Transport(String),
}

impl GenerateError {
    /// Server error with the declared message, or the generic fallback.
    pub fn server(message: Option<String>) -> Self {
        match message {
            Some(message) if !message.is_empty() => Self::Server(message),
            _ => Self::Server(GENERIC_SERVER_ERROR.to_owned()),
        }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport(detail.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataUriError {
    #[error("not a data URI")]
    MissingScheme,
    #[error("data URI has no payload separator")]
    MissingPayload,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    DataUri(#[from] DataUriError),
    #[error("save of {filename} was cancelled")]
    Cancelled { filename: String },
    #[error("failed to save {filename}: {reason}")]
    Save { filename: String, reason: String },
}
