use egui::{Response, Ui};
use qrdemo_business::{ContentKind, QrController};

/// One tab per content kind. Every click resets the preview, even on the
/// active tab.
pub fn content_tabs(controller: &mut QrController, ui: &mut Ui) -> Response {
    ui.horizontal(|ui| {
        for kind in ContentKind::ALL {
            let active = controller.kind() == kind;
            if ui.selectable_label(active, kind.label()).clicked() {
                controller.switch_content_type(kind);
            }
        }
    })
    .response
}

#[cfg(test)]
mod content_tabs_widget_test {
    use std::sync::Arc;

    use egui_kittest::Harness;
    use kittest::Queryable;
    use qrdemo_business::{
        BusinessConfig, FormField, FormInput, MockFetcher, Preview, json_response,
    };
    use serde_json::json;

    use super::*;

    fn harness(controller: QrController) -> Harness<'static, QrController> {
        Harness::new_ui_state(
            |ui, controller: &mut QrController| {
                controller.sync();
                content_tabs(controller, ui);
            },
            controller,
        )
    }

    fn displaying_controller() -> QrController {
        let fetcher = MockFetcher::responding(Ok(json_response(
            200,
            &json!({"success": true, "data": {"qr_code": "data:image/png;base64,iVBORw0KGgo=", "format": "PNG"}}),
        )));
        let mut controller =
            QrController::new(BusinessConfig::new("http://qr.test"), Arc::new(fetcher));
        let mut form = FormInput::default();
        form.set(FormField::Url, "https://example.com");
        controller.generate(&form);
        controller.sync();
        controller
    }

    #[test]
    fn test_clicking_active_tab_resets_preview() {
        let mut harness = harness(displaying_controller());
        harness.step();
        assert!(harness.state().can_download());

        harness.get_by_label("URL").click();
        harness.step();

        assert_eq!(harness.state().kind(), ContentKind::Url);
        assert_eq!(harness.state().preview(), &Preview::Placeholder);
        assert!(!harness.state().can_download());
    }

    #[test]
    fn test_clicking_other_tab_switches_kind() {
        let mut harness = harness(displaying_controller());
        harness.step();

        harness.get_by_label("Wi-Fi").click();
        harness.step();

        assert_eq!(harness.state().kind(), ContentKind::Wifi);
        assert_eq!(harness.state().preview(), &Preview::Placeholder);
    }
}
