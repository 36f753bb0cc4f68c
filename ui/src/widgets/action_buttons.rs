use chrono::Utc;
use egui::{Button, Response, RichText, Ui};
use qrdemo_business::{DownloadError, FileSaver, FormInput, QrController};

use crate::utils::colors::{COLOR_BRAND, COLOR_GREEN, COLOR_RED};

pub const GENERATE_LABEL: &str = "Generate QR Code";
pub const GENERATING_LABEL: &str = "Generating...";
pub const DOWNLOAD_LABEL: &str = "Download";

/// The submit button. Disabled, with a spinner, while a request is in flight.
pub fn generate_button(controller: &mut QrController, form: &FormInput, ui: &mut Ui) -> Response {
    let generating = controller.is_generating();
    ui.horizontal(|ui| {
        let label = if generating {
            GENERATING_LABEL
        } else {
            GENERATE_LABEL
        };
        let response = ui.add_enabled(
            !generating,
            Button::new(RichText::new(label).color(egui::Color32::WHITE).strong())
                .fill(COLOR_BRAND)
                .min_size(egui::vec2(180.0, 32.0)),
        );
        if generating {
            ui.spinner();
        }
        if response.clicked() {
            controller.generate(form);
        }
        response
    })
    .inner
}

/// Outcome of the last download, shown under the button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadNotice {
    Saved(String),
    Cancelled,
    Failed(String),
}

/// Saves the displayed result. Only rendered while there is one.
///
/// `notice` is keyed by the id of the result it was produced for and is
/// dropped as soon as a different result (or none) is displayed.
pub fn download_button(
    controller: &QrController,
    saver: &dyn FileSaver,
    notice: &mut Option<(u64, DownloadNotice)>,
    ui: &mut Ui,
) -> Option<Response> {
    let Some(current_id) = controller.current_result().map(|displayed| displayed.id) else {
        *notice = None;
        return None;
    };
    if notice.as_ref().is_some_and(|(id, _)| *id != current_id) {
        *notice = None;
    }

    let response = ui.button(DOWNLOAD_LABEL);
    if response.clicked() {
        *notice = match controller.download(saver, Utc::now()) {
            Ok(Some(filename)) => Some(DownloadNotice::Saved(filename)),
            Ok(None) => None,
            Err(DownloadError::Cancelled { .. }) => Some(DownloadNotice::Cancelled),
            Err(err) => {
                log::warn!("Download failed: {err}");
                Some(DownloadNotice::Failed(err.to_string()))
            }
        }
        .map(|notice| (current_id, notice));
    }

    match notice.as_ref().map(|(_, notice)| notice) {
        Some(DownloadNotice::Saved(filename)) => {
            ui.colored_label(COLOR_GREEN, format!("Saved {filename}"));
        }
        Some(DownloadNotice::Cancelled) => {
            ui.weak("Download cancelled");
        }
        Some(DownloadNotice::Failed(reason)) => {
            ui.colored_label(COLOR_RED, reason.as_str());
        }
        None => {}
    }
    Some(response)
}
