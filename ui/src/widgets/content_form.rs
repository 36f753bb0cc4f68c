use egui::{Id, Response, Ui};
use qrdemo_business::{ContentKind, FormField, FormInput, WIFI_ENCRYPTIONS};

use crate::utils::interaction::decorated_text_edit;

/// Inputs of the active tab. Values of other tabs are kept as typed.
pub fn content_form(form: &mut FormInput, kind: ContentKind, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        for &field in FormField::for_kind(kind) {
            ui.label(field.label());
            match field {
                FormField::WifiEncryption => {
                    let value = form.field_mut(field);
                    egui::ComboBox::from_id_salt("wifi_encryption")
                        .selected_text(value.as_str())
                        .show_ui(ui, |ui| {
                            for option in WIFI_ENCRYPTIONS {
                                ui.selectable_value(value, (*option).to_owned(), *option);
                            }
                        });
                }
                _ => {
                    decorated_text_edit(
                        ui,
                        Id::new(("form_field", field)),
                        form.field_mut(field),
                        field.hint(),
                        field.is_multiline(),
                        field == FormField::WifiPassword,
                    );
                }
            }
            ui.add_space(6.0);
        }
    })
    .response
}
