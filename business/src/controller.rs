//! Form-to-preview controller.
//!
//! One controller lives for the whole app session. Each user action runs one
//! request cycle:
//!
//! `Idle → Validating → (Invalid → Idle with error) | Requesting →
//! (Succeeded → DisplayingResult | Failed → DisplayingError) → Idle`
//!
//! Requests are fire-and-forget. Fetch callbacks push a [`Completion`] into a
//! `flume` channel and [`QrController::sync`] applies them on the UI thread,
//! so the last completion to arrive decides what is displayed. Switching the
//! content kind forgets every pending request id, so the cycle is `Idle` at
//! once and late completions are dropped without touching the preview.

use std::{collections::HashSet, sync::Arc};

use chrono::{DateTime, Utc};
use flume::{Receiver, Sender};
use log::{debug, error, info, warn};

use crate::{
    BusinessConfig, ContentKind, DownloadError, DownloadPayload, FetchService, FileSaver,
    FormView, GenerateError, GenerateRequest, Generated, GeneratedQr, approx_size_kb,
    build_request, interpret_response,
};

/// A result currently shown in the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedQr {
    /// Sequence number of the request that produced it.
    pub id: u64,
    pub kind: ContentKind,
    pub qr: GeneratedQr,
}

/// What the preview area shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Preview {
    #[default]
    Placeholder,
    Generating,
    Image(DisplayedQr),
    Error(String),
}

/// Coarse state of the request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Requesting,
    DisplayingResult,
    DisplayingError,
}

/// Badge shown in the response summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Success(u16),
    Error,
}

impl StatusBadge {
    pub fn text(self) -> String {
        match self {
            Self::Success(code) => format!("{code} OK"),
            Self::Error => "400 Error".to_owned(),
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// The "API response" panel, visible only after a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSummary {
    pub status: StatusBadge,
    pub format: String,
    pub approx_kb: u64,
}

impl ResponseSummary {
    fn from_generated(generated: &Generated) -> Self {
        Self {
            status: StatusBadge::Success(generated.status),
            format: generated.qr.format.clone(),
            approx_kb: approx_size_kb(generated.qr.qr_code.len()),
        }
    }

    pub fn size_text(&self) -> String {
        format!("~{} KB", self.approx_kb)
    }
}

#[derive(Debug)]
struct Completion {
    id: u64,
    kind: ContentKind,
    outcome: Result<Generated, GenerateError>,
}

pub struct QrController {
    config: BusinessConfig,
    fetcher: Arc<dyn FetchService>,
    kind: ContentKind,
    preview: Preview,
    summary: Option<ResponseSummary>,
    badge: Option<StatusBadge>,
    /// Last image shown since the last kind switch; survives loading and errors.
    last_result: Option<DisplayedQr>,
    /// Requests of the active kind still waiting for an answer.
    pending: HashSet<u64>,
    next_id: u64,
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
    repaint: Option<egui::Context>,
}

impl std::fmt::Debug for QrController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QrController")
            .field("config", &self.config)
            .field("kind", &self.kind)
            .field("preview", &self.preview)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl QrController {
    pub fn new(config: BusinessConfig, fetcher: Arc<dyn FetchService>) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            config,
            fetcher,
            kind: ContentKind::default(),
            preview: Preview::Placeholder,
            summary: None,
            badge: None,
            last_result: None,
            pending: HashSet::new(),
            next_id: 1,
            sender,
            receiver,
            repaint: None,
        }
    }

    /// Completions will wake this context so the result shows without input.
    pub fn set_repaint(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn summary(&self) -> Option<&ResponseSummary> {
        self.summary.as_ref()
    }

    /// Badge of the last finished cycle, if any.
    pub fn status_badge(&self) -> Option<StatusBadge> {
        self.badge
    }

    pub fn current_result(&self) -> Option<&DisplayedQr> {
        match &self.preview {
            Preview::Image(displayed) => Some(displayed),
            _ => None,
        }
    }

    pub fn can_download(&self) -> bool {
        self.current_result().is_some()
    }

    pub fn is_generating(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn phase(&self) -> Phase {
        if self.is_generating() {
            return Phase::Requesting;
        }
        match self.preview {
            Preview::Image(_) => Phase::DisplayingResult,
            Preview::Error(_) => Phase::DisplayingError,
            Preview::Placeholder | Preview::Generating => Phase::Idle,
        }
    }

    /// Activates `kind` and discards whatever the preview was showing.
    pub fn switch_content_type(&mut self, kind: ContentKind) {
        debug!("Switching content type {} -> {}", self.kind, kind);
        self.kind = kind;
        if !self.pending.is_empty() {
            debug!("Forgetting {} pending request(s)", self.pending.len());
            self.pending.clear();
        }
        self.preview = Preview::Placeholder;
        self.summary = None;
        self.badge = None;
        self.last_result = None;
    }

    pub fn build_request(&self, form: &dyn FormView) -> Option<GenerateRequest> {
        build_request(self.kind, form)
    }

    /// Validates the form and, if valid, sends it.
    ///
    /// Returns whether a request was sent.
    pub fn generate(&mut self, form: &dyn FormView) -> bool {
        match self.build_request(form) {
            Some(request) => {
                self.submit_request(request);
                true
            }
            None => {
                warn!("Missing required field for {} QR code", self.kind);
                self.show_error(&GenerateError::Validation);
                false
            }
        }
    }

    /// Regenerates after an option change once this kind has produced an image.
    pub fn options_changed(&mut self, form: &dyn FormView) -> bool {
        if self.last_result.is_none() {
            return false;
        }
        debug!("Options changed, regenerating {} QR code", self.kind);
        self.generate(form)
    }

    pub fn submit_request(&mut self, request: GenerateRequest) {
        let id = self.next_id;
        self.next_id += 1;

        let kind = request.kind();
        let url = self.config.generate_url(kind);
        info!("Generating {kind} QR code (request #{id}) via {url}");

        let http_request = match ehttp::Request::json(&url, &request) {
            Ok(http_request) => http_request,
            Err(err) => {
                error!("Failed to encode request #{id}: {err}");
                self.show_error(&GenerateError::transport(err.to_string()));
                return;
            }
        };

        self.pending.insert(id);
        self.preview = Preview::Generating;

        let sender = self.sender.clone();
        let repaint = self.repaint.clone();
        self.fetcher.fetch(
            http_request,
            Box::new(move |result| {
                let completion = Completion {
                    id,
                    kind,
                    outcome: interpret_response(result),
                };
                if sender.send(completion).is_err() {
                    warn!("Controller dropped before request #{id} completed");
                }
                if let Some(ctx) = repaint {
                    ctx.request_repaint();
                }
            }),
        );
    }

    /// Applies every completion that arrived since the last call.
    ///
    /// Call once per frame before rendering.
    pub fn sync(&mut self) {
        while let Ok(completion) = self.receiver.try_recv() {
            self.apply(completion);
        }
    }

    fn apply(&mut self, completion: Completion) {
        let Completion { id, kind, outcome } = completion;

        if !self.pending.remove(&id) {
            debug!("Ignoring request #{id}: content type changed while it was in flight");
            return;
        }

        match outcome {
            Ok(generated) => {
                info!(
                    "Request #{id} succeeded: {} {} bytes",
                    generated.qr.format,
                    generated.qr.qr_code.len()
                );
                self.summary = Some(ResponseSummary::from_generated(&generated));
                self.badge = Some(StatusBadge::Success(generated.status));
                let displayed = DisplayedQr {
                    id,
                    kind,
                    qr: generated.qr,
                };
                self.last_result = Some(displayed.clone());
                self.preview = Preview::Image(displayed);
            }
            Err(err) => {
                match &err {
                    GenerateError::Transport(detail) => {
                        error!("Network error for request #{id}: {detail}");
                    }
                    GenerateError::Server(message) => {
                        warn!("Server rejected request #{id}: {message}");
                    }
                    GenerateError::Validation => {}
                }
                self.show_error(&err);
            }
        }
    }

    fn show_error(&mut self, err: &GenerateError) {
        self.preview = Preview::Error(err.to_string());
        self.summary = None;
        self.badge = Some(StatusBadge::Error);
    }

    /// Saves the displayed image through `saver`.
    ///
    /// Returns the filename written, or `None` when nothing is displayed.
    pub fn download(
        &self,
        saver: &dyn FileSaver,
        now: DateTime<Utc>,
    ) -> Result<Option<String>, DownloadError> {
        let Some(displayed) = self.current_result() else {
            debug!("Download requested before any QR code was generated");
            return Ok(None);
        };

        let payload = DownloadPayload::from_generated(displayed.kind, &displayed.qr, now)?;
        saver.save(&payload)?;
        info!(
            "Saved {} ({} bytes)",
            payload.filename,
            payload.bytes.len()
        );
        Ok(Some(payload.filename))
    }
}
