//! Client-side download of an already generated code.

use chrono::{DateTime, Utc};

use crate::{ContentKind, DataUri, DownloadError, GeneratedQr};

/// Everything a platform saver needs to write the image out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPayload {
    pub filename: String,
    pub mime: String,
    /// The data URI as received, for savers that can hand it to the browser as-is.
    pub data_uri: String,
    pub bytes: Vec<u8>,
}

impl DownloadPayload {
    pub fn from_generated(
        kind: ContentKind,
        qr: &GeneratedQr,
        now: DateTime<Utc>,
    ) -> Result<Self, DownloadError> {
        let uri = DataUri::parse(&qr.qr_code)?;
        Ok(Self {
            filename: download_filename(kind, &qr.format, now),
            mime: uri.mime.to_owned(),
            data_uri: qr.qr_code.clone(),
            bytes: uri.decode()?,
        })
    }

    /// File extension, taken from the filename.
    pub fn extension(&self) -> &str {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or_default()
    }
}

/// `qr-{kind}-{YYYYMMDDTHHMMSS}.{format}` with the format lowercased.
pub fn download_filename(kind: ContentKind, format: &str, now: DateTime<Utc>) -> String {
    format!(
        "qr-{}-{}.{}",
        kind.slug(),
        now.format("%Y%m%dT%H%M%S"),
        format.to_lowercase()
    )
}

/// Platform file-save boundary.
pub trait FileSaver {
    fn save(&self, payload: &DownloadPayload) -> Result<(), DownloadError>;
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockSaver;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::sync::Mutex;

    use super::{DownloadPayload, FileSaver};
    use crate::DownloadError;

    /// Records every payload it is asked to save.
    #[derive(Debug, Default)]
    pub struct MockSaver {
        saved: Mutex<Vec<DownloadPayload>>,
    }

    impl MockSaver {
        pub fn saved(&self) -> Vec<DownloadPayload> {
            self.saved
                .lock()
                .map(|saved| saved.clone())
                .unwrap_or_default()
        }
    }

    impl FileSaver for MockSaver {
        fn save(&self, payload: &DownloadPayload) -> Result<(), DownloadError> {
            if let Ok(mut saved) = self.saved.lock() {
                saved.push(payload.clone());
            }
            Ok(())
        }
    }
}
