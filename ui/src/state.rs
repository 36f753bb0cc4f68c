use std::rc::Rc;
use std::sync::Arc;

use qrdemo_business::{
    ApiStatus, BusinessConfig, EhttpFetcher, FetchService, FileSaver, FormInput, QrController,
};

use crate::utils::file_saver::SystemFileSaver;
use crate::utils::interaction::ScrollRequest;
use crate::widgets::{DownloadNotice, HeroPattern, PreviewTexture};

/// The main application state.
pub struct State {
    /// Owns the request cycle and what the preview shows.
    pub controller: QrController,
    /// Background health ping of the generator backend.
    pub api_status: ApiStatus,
    /// Values bound to the demo form widgets.
    pub form: FormInput,
    /// Decorative pattern drawn once at startup.
    pub hero: HeroPattern,
    /// Texture of the displayed result, uploaded lazily.
    pub preview_texture: PreviewTexture,
    pub scroll: ScrollRequest,
    pub saver: Rc<dyn FileSaver>,
    /// Outcome of the last download and the result id it belongs to.
    pub download_notice: Option<(u64, DownloadNotice)>,
}

impl Default for State {
    fn default() -> Self {
        Self::with_services(
            BusinessConfig::default(),
            Arc::new(EhttpFetcher),
            Rc::new(SystemFileSaver),
        )
    }
}

impl State {
    pub fn with_services(
        config: BusinessConfig,
        fetcher: Arc<dyn FetchService>,
        saver: Rc<dyn FileSaver>,
    ) -> Self {
        log::info!("Generator backend at {:?}", config.api_url());
        Self {
            controller: QrController::new(config.clone(), fetcher.clone()),
            api_status: ApiStatus::new(config, fetcher),
            form: FormInput::default(),
            hero: HeroPattern::generate(&mut rand::thread_rng()),
            preview_texture: PreviewTexture::default(),
            scroll: ScrollRequest::default(),
            saver,
            download_notice: None,
        }
    }

    pub fn test(base_url: String) -> Self {
        Self::with_services(
            BusinessConfig::new(base_url),
            Arc::new(EhttpFetcher),
            Rc::new(SystemFileSaver),
        )
    }

    /// Lets background completions wake the UI.
    pub fn attach_repaint(&mut self, ctx: &egui::Context) {
        self.controller.set_repaint(ctx.clone());
        self.api_status.set_repaint(ctx.clone());
    }
}
