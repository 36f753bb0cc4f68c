use chrono::{DateTime, Utc};
use egui::{Color32, Response, Ui};
use qrdemo_business::{APIAvailability, ApiStatus};

use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};

/// Radius of the status indicator circle (in pixels)
const STATUS_DOT_RADIUS: f32 = 5.0;

fn checked_at(time: DateTime<Utc>) -> String {
    time.format("%H:%M:%S UTC").to_string()
}

/// Tooltip text and dot color for the current health state.
pub fn status_info(status: &ApiStatus) -> (String, Color32) {
    match status.api_availability() {
        APIAvailability::Available(time) => (
            format!("Generator API: available (checked {})", checked_at(time)),
            COLOR_GREEN,
        ),
        APIAvailability::Unavailable((time, err)) => (
            format!("Generator API: {err} (checked {})", checked_at(time)),
            COLOR_RED,
        ),
        APIAvailability::Unknown => ("Generator API: checking".to_owned(), COLOR_AMBER),
    }
}

/// Displays the backend health as a colored dot with a tooltip.
pub fn api_status(status: &ApiStatus, ui: &mut Ui) -> Response {
    let (tooltip, color) = status_info(status);

    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(STATUS_DOT_RADIUS * 2.0, STATUS_DOT_RADIUS * 2.0),
        egui::Sense::hover(),
    );
    ui.painter()
        .circle(rect.center(), STATUS_DOT_RADIUS, color, egui::Stroke::NONE);

    response.on_hover_text(tooltip)
}

#[cfg(test)]
mod api_status_widget_test {
    use std::sync::Arc;

    use chrono::Utc;
    use egui_kittest::Harness;
    use qrdemo_business::{BusinessConfig, MockFetcher, json_response};

    use super::*;

    fn status_after(fetcher: MockFetcher) -> ApiStatus {
        let mut status = ApiStatus::new(BusinessConfig::new("http://qr.test"), Arc::new(fetcher));
        status.poll(Utc::now());
        status.sync();
        status
    }

    #[test]
    fn test_healthy_backend_is_green() {
        let status = status_after(MockFetcher::responding(Ok(json_response(
            200,
            &serde_json::json!({"status": "ok"}),
        ))));
        let (tooltip, color) = status_info(&status);
        assert_eq!(color, COLOR_GREEN);
        assert!(tooltip.contains("available"));
    }

    #[test]
    fn test_failed_ping_is_red_with_reason() {
        let status = status_after(MockFetcher::responding(Err("connection refused".to_owned())));
        let (tooltip, color) = status_info(&status);
        assert_eq!(color, COLOR_RED);
        assert!(tooltip.contains("connection refused"));
    }

    #[test]
    fn test_in_flight_ping_is_amber() {
        let status = status_after(MockFetcher::holding());
        assert_eq!(status_info(&status).1, COLOR_AMBER);
    }

    #[test]
    fn test_api_status_widget_renders() {
        let status = status_after(MockFetcher::holding());
        let mut harness = Harness::new_ui(move |ui| {
            api_status(&status, ui);
        });
        harness.step();
    }
}
