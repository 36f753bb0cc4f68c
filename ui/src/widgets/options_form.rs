use egui::{Color32, Response, Ui};
use qrdemo_business::{
    CustomizationOptions, ERROR_CORRECTION_LEVELS, MODULE_DRAWERS, OUTPUT_FORMATS,
};

use crate::utils::colors::{parse_hex_rgb, to_hex_rgb};

/// Module size range offered by the slider.
const SIZE_RANGE: std::ops::RangeInclusive<u32> = 1..=40;

/// Customization controls. Returns `true` when any option was committed.
pub fn options_form(options: &mut CustomizationOptions, ui: &mut Ui) -> bool {
    let mut changed = false;

    egui::Grid::new("options_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Foreground");
            changed |= color_input(ui, &mut options.foreground_color, Color32::BLACK).changed();
            ui.end_row();

            ui.label("Background");
            changed |= color_input(ui, &mut options.background_color, Color32::WHITE).changed();
            ui.end_row();

            ui.label("Module Style");
            changed |= choice(ui, "module_drawer", &mut options.module_drawer, MODULE_DRAWERS);
            ui.end_row();

            ui.label("Error Correction");
            changed |= choice(
                ui,
                "error_correction",
                &mut options.error_correction,
                ERROR_CORRECTION_LEVELS,
            );
            ui.end_row();

            ui.label("Format");
            changed |= choice(ui, "format", &mut options.format, OUTPUT_FORMATS);
            ui.end_row();

            ui.label("Size");
            let slider = ui.add(egui::Slider::new(&mut options.size, SIZE_RANGE));
            // Dragging fires every frame; only the release counts.
            changed |= slider.drag_stopped() || (slider.changed() && !slider.dragged());
            ui.end_row();
        });

    changed
}

fn choice(ui: &mut Ui, id: &str, value: &mut String, options: &[&str]) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for option in options {
                changed |= ui
                    .selectable_value(value, (*option).to_owned(), *option)
                    .changed();
            }
        });
    changed
}

/// Color swatch plus the hex text. Unparseable text leaves the swatch at
/// `fallback` and is still sent as typed.
fn color_input(ui: &mut Ui, hex: &mut String, fallback: Color32) -> Response {
    ui.horizontal(|ui| {
        let mut color = parse_hex_rgb(hex).unwrap_or(fallback);
        let mut swatch = ui.color_edit_button_srgba(&mut color);
        if swatch.changed() {
            *hex = to_hex_rgb(color);
        }

        let text = ui.add(egui::TextEdit::singleline(hex).desired_width(80.0));
        let dirty_id = text.id.with("dirty");
        if text.changed() {
            ui.data_mut(|d| d.insert_temp(dirty_id, true));
        }
        let dirty = ui.data(|d| d.get_temp::<bool>(dirty_id)).unwrap_or(false);
        if dirty && text.lost_focus() {
            ui.data_mut(|d| d.remove::<bool>(dirty_id));
            swatch.mark_changed();
        }
        swatch
    })
    .inner
}
