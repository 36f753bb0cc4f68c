use std::time::Duration;

use chrono::Utc;

use crate::state::State;
use crate::utils::interaction::Section;
use crate::{pages, widgets};

/// Upper bound between frames while idle, so the health check stays on schedule.
const IDLE_REPAINT: Duration = Duration::from_secs(30);

pub struct QrDemoApp {
    pub state: State,
}

impl QrDemoApp {
    /// Called once before the first frame.
    pub fn new(ctx: &egui::Context, mut state: State) -> Self {
        state.attach_repaint(ctx);
        Self { state }
    }
}

impl eframe::App for QrDemoApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply finished requests before anything is drawn
        self.state.controller.sync();
        self.state.api_status.poll(Utc::now());

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("QR Code Generator");
                ui.separator();
                for section in [Section::Features, Section::Demo] {
                    if ui.link(section.label()).clicked() {
                        self.state.scroll.request(section);
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::api_status(&self.state.api_status, ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            pages::home_page(&mut self.state, ui);
        });

        ctx.request_repaint_after(IDLE_REPAINT);
    }
}
