//! Preview area: placeholder, spinner, generated image or inline error.

use egui::{Response, RichText, TextureHandle, Ui, vec2};
use qrdemo_business::{DisplayedQr, Preview, QrController};

use crate::utils::colors::{COLOR_RED, COLOR_RED_TINT};
use crate::utils::image_data::ImageData;

pub const PLACEHOLDER_TEXT: &str = "Generate a QR code to see preview";
pub const GENERATING_TEXT: &str = "Generating your QR code...";
pub const PREVIEW_ALT: &str = "Generated QR Code";

/// Largest side the preview image is drawn at.
const PREVIEW_MAX_SIDE: f32 = 300.0;

/// Texture of the displayed result, keyed by its request id.
#[derive(Default)]
pub struct PreviewTexture {
    shown: Option<u64>,
    texture: Option<Result<TextureHandle, String>>,
}

impl PreviewTexture {
    fn get(&mut self, ctx: &egui::Context, displayed: &DisplayedQr) -> Result<&TextureHandle, &str> {
        if self.shown != Some(displayed.id) {
            self.shown = Some(displayed.id);
            self.texture = Some(ImageData::from_data_uri(&displayed.qr.qr_code).map(|image| {
                ctx.load_texture(
                    format!("qr_preview_{}", displayed.id),
                    image.to_color_image(),
                    egui::TextureOptions::NEAREST,
                )
            }));
        }
        match &self.texture {
            Some(Ok(texture)) => Ok(texture),
            Some(Err(err)) => Err(err.as_str()),
            None => Err("no preview"),
        }
    }

    /// Request id of the result the texture was built from.
    pub fn shown(&self) -> Option<u64> {
        self.shown
    }
}

pub fn qr_preview(controller: &QrController, texture: &mut PreviewTexture, ui: &mut Ui) -> Response {
    ui.vertical_centered(|ui| {
        ui.set_min_height(PREVIEW_MAX_SIDE);
        match controller.preview() {
            Preview::Placeholder => {
                ui.add_space(PREVIEW_MAX_SIDE / 3.0);
                ui.label(RichText::new("▦").size(48.0).weak());
                ui.label(PLACEHOLDER_TEXT);
            }
            Preview::Generating => {
                ui.add_space(PREVIEW_MAX_SIDE / 3.0);
                ui.spinner();
                ui.label(GENERATING_TEXT);
            }
            Preview::Image(displayed) => match texture.get(ui.ctx(), displayed) {
                Ok(handle) => {
                    ui.add(
                        egui::Image::new(handle)
                            .max_size(vec2(PREVIEW_MAX_SIDE, PREVIEW_MAX_SIDE))
                            .alt_text(PREVIEW_ALT),
                    );
                }
                Err(reason) => {
                    ui.add_space(PREVIEW_MAX_SIDE / 3.0);
                    ui.label(format!("{} code generated", displayed.qr.format));
                    ui.weak(reason);
                }
            },
            Preview::Error(message) => {
                error_alert(ui, message);
            }
        }
    })
    .response
}

/// Inline alert. The message sits in its own label so it reads verbatim.
fn error_alert(ui: &mut Ui, message: &str) {
    egui::Frame::new()
        .fill(COLOR_RED_TINT)
        .stroke(egui::Stroke::new(1.0, COLOR_RED))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(COLOR_RED, "⚠");
                ui.colored_label(COLOR_RED, message);
            });
        });
}
