use egui::{Response, RichText, Ui};
use qrdemo_business::{ResponseSummary, StatusBadge};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Status badge, format and approximate size of the last success.
pub fn response_summary(summary: &ResponseSummary, ui: &mut Ui) -> Response {
    egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.strong("API Response");
            egui::Grid::new("response_summary")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Status:");
                    status_badge(ui, summary.status);
                    ui.end_row();

                    ui.label("Format:");
                    ui.label(&summary.format);
                    ui.end_row();

                    ui.label("Size:");
                    ui.label(summary.size_text());
                    ui.end_row();
                });
        })
        .response
}

fn status_badge(ui: &mut Ui, badge: StatusBadge) -> Response {
    let color = if badge.is_success() {
        COLOR_GREEN
    } else {
        COLOR_RED
    };
    egui::Frame::new()
        .fill(color)
        .corner_radius(4.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(badge.text()).color(egui::Color32::WHITE))
        })
        .inner
}
