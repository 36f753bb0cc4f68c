//! Platform savers for downloading the generated code.
//!
//! # Platform Support
//!
//! - **Native (Windows, macOS, Linux)**: native save dialog via `rfd`, then a plain file write.
//! - **Web (WASM)**: a temporary `<a download>` element pointing at the data URI is clicked.

use qrdemo_business::{DownloadError, DownloadPayload, FileSaver};

/// Saver backed by the system (dialog on native, browser download on web).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFileSaver;

#[cfg(not(target_arch = "wasm32"))]
impl FileSaver for SystemFileSaver {
    fn save(&self, payload: &DownloadPayload) -> Result<(), DownloadError> {
        use rfd::FileDialog;

        let extension = payload.extension();
        let Some(path) = FileDialog::new()
            .set_title("Save QR code")
            .set_file_name(&payload.filename)
            .add_filter(extension.to_uppercase(), &[extension])
            .save_file()
        else {
            return Err(DownloadError::Cancelled {
                filename: payload.filename.clone(),
            });
        };

        std::fs::write(&path, &payload.bytes).map_err(|e| DownloadError::Save {
            filename: path.display().to_string(),
            reason: e.to_string(),
        })?;

        log::info!(
            "Saved {} bytes of {} to {:?}",
            payload.bytes.len(),
            payload.mime,
            path
        );
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl FileSaver for SystemFileSaver {
    fn save(&self, payload: &DownloadPayload) -> Result<(), DownloadError> {
        use wasm_bindgen::JsCast as _;

        let fail = |reason: String| DownloadError::Save {
            filename: payload.filename.clone(),
            reason,
        };

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| fail("no document".to_owned()))?;
        let body = document
            .body()
            .ok_or_else(|| fail("no body element".to_owned()))?;

        let anchor = document
            .create_element("a")
            .map_err(|e| fail(format!("{e:?}")))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| fail("created element was not an anchor".to_owned()))?;
        anchor.set_href(&payload.data_uri);
        anchor.set_download(&payload.filename);

        body.append_child(&anchor)
            .map_err(|e| fail(format!("{e:?}")))?;
        anchor.click();
        body.remove_child(&anchor)
            .map_err(|e| fail(format!("{e:?}")))?;

        log::info!("Browser download started for {}", payload.filename);
        Ok(())
    }
}
