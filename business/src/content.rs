//! Content kinds and the request payloads sent to the generation endpoint.

use serde::Serialize;

use crate::CustomizationOptions;

/// The category of payload being encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentKind {
    #[default]
    Url,
    Text,
    Email,
    Phone,
    Wifi,
}

impl ContentKind {
    /// All kinds, in tab order.
    pub const ALL: [Self; 5] = [Self::Url, Self::Text, Self::Email, Self::Phone, Self::Wifi];

    /// Slug used in the endpoint path and in download filenames.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Text => "text",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Wifi => "wifi",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::Text => "Text",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Wifi => "Wi-Fi",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Kind-specific fields of a generation request.
///
/// Serialized untagged so the fields sit at the top level of the JSON body,
/// next to `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentPayload {
    Url {
        url: String,
    },
    Text {
        text: String,
    },
    Email {
        email: String,
        subject: String,
        message: String,
    },
    Phone {
        phone: String,
    },
    Wifi {
        ssid: String,
        password: String,
        encryption: String,
    },
}

impl ContentPayload {
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Url { .. } => ContentKind::Url,
            Self::Text { .. } => ContentKind::Text,
            Self::Email { .. } => ContentKind::Email,
            Self::Phone { .. } => ContentKind::Phone,
            Self::Wifi { .. } => ContentKind::Wifi,
        }
    }
}

/// A validated request body for `POST /api/v1/qr/{kind}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    #[serde(flatten)]
    pub payload: ContentPayload,
    pub options: CustomizationOptions,
}

impl GenerateRequest {
    pub fn kind(&self) -> ContentKind {
        self.payload.kind()
    }
}
