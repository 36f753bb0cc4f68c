//! Business layer of the QR demo: request model, form abstraction, the
//! form-to-preview controller and the backend health check.
//!
//! Nothing in here renders anything; the `ui` crate binds these types to
//! egui widgets.

mod api_status;
mod config;
mod content;
mod controller;
mod data_uri;
mod download;
mod error;
mod fetch_service;
mod form;
mod options;
mod response;

pub use api_status::{
    APIAvailability, ApiStatus, CHECK_INTERVAL_MINUTES, RETRY_INTERVAL_MINUTES,
};
pub use config::BusinessConfig;
pub use content::{ContentKind, ContentPayload, GenerateRequest};
pub use controller::{DisplayedQr, Phase, Preview, QrController, ResponseSummary, StatusBadge};
pub use data_uri::{DataUri, approx_size_kb};
pub use download::{DownloadPayload, FileSaver, download_filename};
pub use error::{
    DataUriError, DownloadError, GENERIC_SERVER_ERROR, GenerateError, NETWORK_ERROR,
    VALIDATION_ERROR,
};
pub use fetch_service::{EhttpFetcher, FetchService, OnDone};
pub use form::{FormField, FormInput, FormView, build_request};
pub use options::{
    CustomizationOptions, DEFAULT_BORDER, ERROR_CORRECTION_LEVELS, MODULE_DRAWERS, OUTPUT_FORMATS,
    WIFI_ENCRYPTIONS,
};
pub use response::{GenerateResponse, Generated, GeneratedQr, interpret_response};

#[cfg(any(test, feature = "test-utils"))]
pub use download::MockSaver;
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::{MockFetcher, json_response};
