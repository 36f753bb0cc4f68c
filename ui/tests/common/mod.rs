use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use egui_kittest::Harness;
use qrdemo_business::{BusinessConfig, EhttpFetcher, MockSaver};
use qrdemo_ui::QrDemoApp;
use qrdemo_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Tall enough that the whole landing page fits without scrolling.
const WINDOW: egui::Vec2 = egui::vec2(1280.0, 2400.0);

pub struct TestCtx<'a> {
    mock_server: Option<MockServer>,
    harness: Harness<'a, QrDemoApp>,
    saver: Rc<MockSaver>,
}

impl<'a> TestCtx<'a> {
    /// App wired to a mock backend whose `/health` answers `health_status`.
    pub async fn new_app_with_health(health_status: u16) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(health_status).set_body_json(
                serde_json::json!({"status": "healthy"}),
            ))
            .mount(&mock_server)
            .await;

        let mut ctx = Self::with_base_url(mock_server.uri());
        ctx.mock_server = Some(mock_server);
        ctx
    }

    #[allow(unused)]
    pub async fn new_app() -> Self {
        Self::new_app_with_health(200).await
    }

    /// App pointed at `base_url` with no mock server behind it.
    #[allow(unused)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let saver = Rc::new(MockSaver::default());
        let state = State::with_services(
            BusinessConfig::new(base_url),
            Arc::new(EhttpFetcher),
            saver.clone(),
        );
        let harness = Harness::builder()
            .with_size(WINDOW)
            .build_eframe(|cc| QrDemoApp::new(&cc.egui_ctx, state));

        Self {
            mock_server: None,
            harness,
            saver,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, QrDemoApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, QrDemoApp> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        self.mock_server
            .as_ref()
            .expect("context was built without a mock server")
    }

    #[allow(unused)]
    pub fn saver(&self) -> &MockSaver {
        &self.saver
    }

    /// Steps the app until `done` holds, giving the HTTP threads time to
    /// answer between frames. Returns whether it held before the timeout.
    pub async fn wait_until(&mut self, mut done: impl FnMut(&Harness<'a, QrDemoApp>) -> bool) -> bool {
        for _ in 0..50 {
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.harness.step();
            if done(&self.harness) {
                return true;
            }
        }
        false
    }
}

/// A 4x4 PNG encoded as a data URI.
#[allow(unused)]
pub fn png_data_uri() -> String {
    use image::ImageEncoder;
    use image::codecs::png::PngEncoder;

    let pixels = [0u8, 0, 0, 255].repeat(16);
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&pixels, 4, 4, image::ColorType::Rgba8.into())
        .expect("encode test PNG");
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&png)
    )
}

/// Mounts a successful `POST /api/v1/qr/{kind}` answering with `qr_code`.
#[allow(unused)]
pub async fn mount_success(server: &MockServer, kind: &str, qr_code: &str) {
    Mock::given(method("POST"))
        .and(path(format!("/api/v1/qr/{kind}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "qr_code": qr_code, "format": "PNG" }
        })))
        .mount(server)
        .await;
}
