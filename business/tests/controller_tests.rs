//! End-to-end request cycles through the public controller API, with a
//! scripted fetcher standing in for the network.

use std::sync::{Arc, Mutex};

use qrdemo_business::{
    BusinessConfig, ContentKind, FetchService, FormField, FormInput, OnDone, Phase, Preview,
    QrController, approx_size_kb,
};

/// Answers every request with the same status and body, and records the
/// URLs it was called with.
#[derive(Debug)]
struct ScriptedFetcher {
    status: u16,
    body: String,
    urls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    fn new(status: u16, body: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            urls: Mutex::new(Vec::new()),
        })
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl FetchService for ScriptedFetcher {
    fn fetch(&self, request: ehttp::Request, on_done: OnDone) {
        self.urls.lock().unwrap().push(request.url.clone());
        on_done(Ok(ehttp::Response {
            url: request.url,
            ok: (200..300).contains(&self.status),
            status: self.status,
            status_text: String::new(),
            headers: Default::default(),
            bytes: self.body.clone().into_bytes(),
        }));
    }
}

fn filled_form() -> FormInput {
    let mut form = FormInput::default();
    form.set(FormField::Url, "https://example.com");
    form.set(FormField::Text, "hello");
    form.set(FormField::Email, "a@example.com");
    form.set(FormField::Phone, "+15550100");
    form.set(FormField::WifiSsid, "HomeNet");
    form
}

#[test]
fn test_every_kind_posts_to_its_endpoint() {
    let _ = env_logger::builder().is_test(true).try_init();

    let qr_code = format!("data:image/png;base64,{}", "A".repeat(4096));
    let fetcher = ScriptedFetcher::new(
        200,
        serde_json::json!({"success": true, "data": {"qr_code": qr_code, "format": "PNG"}}),
    );
    let mut controller = QrController::new(BusinessConfig::new("http://backend"), fetcher.clone());
    let form = filled_form();

    for kind in ContentKind::ALL {
        controller.switch_content_type(kind);
        assert!(controller.generate(&form), "{kind} should be sent");
        controller.sync();

        assert_eq!(controller.phase(), Phase::DisplayingResult);
        let displayed = controller.current_result().unwrap();
        assert_eq!(displayed.kind, kind);

        let summary = controller.summary().unwrap();
        assert_eq!(summary.approx_kb, approx_size_kb(qr_code.len()));
        assert_eq!(summary.size_text(), "~3 KB");
    }

    let expected: Vec<String> = ContentKind::ALL
        .iter()
        .map(|kind| format!("http://backend/api/v1/qr/{}", kind.slug()))
        .collect();
    assert_eq!(fetcher.urls(), expected);
}

#[test]
fn test_http_error_status_with_message() {
    let fetcher = ScriptedFetcher::new(
        422,
        serde_json::json!({"success": false, "error": "Invalid URL format"}),
    );
    let mut controller = QrController::new(BusinessConfig::new("http://backend"), fetcher);

    controller.generate(&filled_form());
    controller.sync();

    assert_eq!(
        controller.preview(),
        &Preview::Error("Invalid URL format".to_owned())
    );
    assert!(!controller.is_generating());
    assert!(!controller.can_download());
}

#[test]
fn test_whitespace_only_primary_field_never_reaches_network() {
    let fetcher = ScriptedFetcher::new(200, serde_json::json!({}));
    let mut controller = QrController::new(BusinessConfig::new("http://backend"), fetcher.clone());

    for kind in ContentKind::ALL {
        let mut form = FormInput::default();
        form.set(FormField::primary_for(kind), "   ");
        controller.switch_content_type(kind);
        assert!(!controller.generate(&form));
        assert_eq!(controller.phase(), Phase::DisplayingError);
    }

    assert!(fetcher.urls().is_empty());
}
