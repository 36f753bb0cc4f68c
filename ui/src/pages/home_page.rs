//! Landing page: hero, features, live demo and pricing.

use egui::{Response, RichText, Ui};

use crate::state::State;
use crate::utils::interaction::Section;
use crate::widgets;

pub fn home_page(state: &mut State, ui: &mut Ui) -> Response {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            hero_section(state, ui);
            ui.add_space(40.0);

            state.scroll.anchor(ui, Section::Features);
            ui.heading("Features");
            ui.add_space(8.0);
            widgets::feature_cards(ui);
            ui.add_space(40.0);

            state.scroll.anchor(ui, Section::Demo);
            ui.heading("Try it");
            ui.add_space(8.0);
            demo_section(state, ui);
            ui.add_space(40.0);

            ui.heading("Pricing");
            ui.add_space(8.0);
            widgets::pricing_cards(ui);
            ui.add_space(24.0);

            powered_by_egui_and_eframe(ui);
            ui.response()
        })
        .inner
}

fn hero_section(state: &mut State, ui: &mut Ui) {
    ui.horizontal_wrapped(|ui| {
        ui.vertical(|ui| {
            ui.set_max_width(420.0);
            ui.add_space(40.0);
            ui.label(RichText::new("QR Code Generator API").size(32.0).strong());
            ui.label("Create styled QR codes for links, text, email, phone numbers and Wi-Fi networks.");
            ui.add_space(12.0);
            if ui.button("Try it now").clicked() {
                state.scroll.request(Section::Demo);
            }
        });
        ui.add_space(24.0);
        widgets::hero_pattern(ui, &state.hero);
    });
}

fn demo_section(state: &mut State, ui: &mut Ui) {
    let State {
        controller,
        form,
        preview_texture,
        saver,
        download_notice,
        ..
    } = state;

    ui.columns(2, |columns| {
        let left = &mut columns[0];
        widgets::content_tabs(controller, left);
        left.add_space(8.0);
        widgets::content_form(form, controller.kind(), left);

        left.collapsing("Customize", |ui| {
            if widgets::options_form(&mut form.options, ui) {
                controller.options_changed(&*form);
            }
        });
        left.add_space(8.0);
        widgets::generate_button(controller, form, left);

        let right = &mut columns[1];
        widgets::qr_preview(controller, preview_texture, right);
        if let Some(summary) = controller.summary() {
            right.add_space(8.0);
            widgets::response_summary(summary, right);
        }
        right.add_space(8.0);
        widgets::download_button(controller, &**saver, download_notice, right);
    });
}

fn powered_by_egui_and_eframe(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Powered by ");
        ui.hyperlink_to("egui", "https://github.com/emilk/egui");
        ui.label(" and ");
        ui.hyperlink_to(
            "eframe",
            "https://github.com/emilk/egui/tree/master/crates/eframe",
        );
        ui.label(".");
    });
}
