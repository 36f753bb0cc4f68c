//! Form view abstraction and request assembly.
//!
//! The controller never touches widgets directly. It reads the form through
//! [`FormView`], which the UI implements with [`FormInput`] and tests can
//! implement with anything that hands back strings.

use crate::{ContentKind, ContentPayload, CustomizationOptions, GenerateRequest};

/// Every input the demo form exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Url,
    Text,
    Email,
    EmailSubject,
    EmailMessage,
    Phone,
    WifiSsid,
    WifiPassword,
    WifiEncryption,
}

impl FormField {
    /// The field that must be filled for `kind` to be submittable.
    pub fn primary_for(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Url => Self::Url,
            ContentKind::Text => Self::Text,
            ContentKind::Email => Self::Email,
            ContentKind::Phone => Self::Phone,
            ContentKind::Wifi => Self::WifiSsid,
        }
    }

    /// Fields shown on the tab of `kind`, primary first.
    pub fn for_kind(kind: ContentKind) -> &'static [Self] {
        match kind {
            ContentKind::Url => &[Self::Url],
            ContentKind::Text => &[Self::Text],
            ContentKind::Email => &[Self::Email, Self::EmailSubject, Self::EmailMessage],
            ContentKind::Phone => &[Self::Phone],
            ContentKind::Wifi => &[Self::WifiSsid, Self::WifiPassword, Self::WifiEncryption],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "Website URL",
            Self::Text => "Text Content",
            Self::Email => "Email Address",
            Self::EmailSubject => "Subject",
            Self::EmailMessage => "Message",
            Self::Phone => "Phone Number",
            Self::WifiSsid => "Network Name (SSID)",
            Self::WifiPassword => "Password",
            Self::WifiEncryption => "Encryption",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::Url => "https://example.com",
            Self::Text => "Enter your text here...",
            Self::Email => "contact@example.com",
            Self::EmailSubject => "Email subject (optional)",
            Self::EmailMessage => "Email message (optional)",
            Self::Phone => "+1234567890",
            Self::WifiSsid => "MyWiFiNetwork",
            Self::WifiPassword => "WiFi password",
            Self::WifiEncryption => "",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Text | Self::EmailMessage)
    }
}

/// Read access to the form, as the controller sees it.
pub trait FormView {
    /// Raw (untrimmed) value of a field.
    fn field(&self, field: FormField) -> String;

    /// Current customization options.
    fn options(&self) -> CustomizationOptions;
}

/// Plain form state bound to the egui widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub url: String,
    pub text: String,
    pub email: String,
    pub email_subject: String,
    pub email_message: String,
    pub phone: String,
    pub wifi_ssid: String,
    pub wifi_password: String,
    pub wifi_encryption: String,
    pub options: CustomizationOptions,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            url: String::new(),
            text: String::new(),
            email: String::new(),
            email_subject: String::new(),
            email_message: String::new(),
            phone: String::new(),
            wifi_ssid: String::new(),
            wifi_password: String::new(),
            wifi_encryption: crate::options::WIFI_ENCRYPTIONS[0].to_owned(),
            options: CustomizationOptions::default(),
        }
    }
}

impl FormInput {
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Url => &mut self.url,
            FormField::Text => &mut self.text,
            FormField::Email => &mut self.email,
            FormField::EmailSubject => &mut self.email_subject,
            FormField::EmailMessage => &mut self.email_message,
            FormField::Phone => &mut self.phone,
            FormField::WifiSsid => &mut self.wifi_ssid,
            FormField::WifiPassword => &mut self.wifi_password,
            FormField::WifiEncryption => &mut self.wifi_encryption,
        }
    }

    pub fn field_ref(&self, field: FormField) -> &str {
        match field {
            FormField::Url => &self.url,
            FormField::Text => &self.text,
            FormField::Email => &self.email,
            FormField::EmailSubject => &self.email_subject,
            FormField::EmailMessage => &self.email_message,
            FormField::Phone => &self.phone,
            FormField::WifiSsid => &self.wifi_ssid,
            FormField::WifiPassword => &self.wifi_password,
            FormField::WifiEncryption => &self.wifi_encryption,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }
}

impl FormView for FormInput {
    fn field(&self, field: FormField) -> String {
        self.field_ref(field).to_owned()
    }

    fn options(&self) -> CustomizationOptions {
        self.options.clone()
    }
}

/// Assembles the request for `kind` from the form.
///
/// Returns `None` when the kind's primary field is empty after trimming.
pub fn build_request(kind: ContentKind, form: &dyn FormView) -> Option<GenerateRequest> {
    let trimmed = |field: FormField| form.field(field).trim().to_owned();

    let primary = trimmed(FormField::primary_for(kind));
    if primary.is_empty() {
        return None;
    }

    let payload = match kind {
        ContentKind::Url => ContentPayload::Url { url: primary },
        ContentKind::Text => ContentPayload::Text { text: primary },
        ContentKind::Email => ContentPayload::Email {
            email: primary,
            subject: trimmed(FormField::EmailSubject),
            message: trimmed(FormField::EmailMessage),
        },
        ContentKind::Phone => ContentPayload::Phone { phone: primary },
        ContentKind::Wifi => ContentPayload::Wifi {
            ssid: primary,
            password: trimmed(FormField::WifiPassword),
            // A selection, forwarded as-is.
            encryption: form.field(FormField::WifiEncryption),
        },
    };

    Some(GenerateRequest {
        payload,
        options: form.options(),
    })
}
