//! Page interaction helpers: in-page navigation, reveal-on-scroll and field
//! focus decoration.
//!
//! These are cosmetic. Nothing here touches business state.

use egui::{Align, Id, Stroke, Ui};

use super::colors::{COLOR_BRAND, COLOR_GREEN};

/// Seconds a card takes to fade in.
pub const REVEAL_SECONDS: f32 = 0.6;

/// Vertical distance (in points) a card slides while fading in.
pub const REVEAL_OFFSET: f32 = 30.0;

/// Page sections the top bar can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Features,
    Demo,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::Demo => "Try it",
        }
    }
}

/// A pending "scroll to section" request raised by a nav link.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollRequest {
    pending: Option<Section>,
}

impl ScrollRequest {
    pub fn request(&mut self, section: Section) {
        log::debug!("Scrolling to {section:?}");
        self.pending = Some(section);
    }

    pub fn pending(&self) -> Option<Section> {
        self.pending
    }

    /// Marks where `section` starts. If it was requested, the enclosing
    /// scroll area animates so this point sits at the top.
    pub fn anchor(&mut self, ui: &mut Ui, section: Section) {
        if self.pending == Some(section) {
            ui.scroll_to_cursor(Some(Align::TOP));
            self.pending = None;
        }
    }
}

/// Shows `add_contents` faded out until it first enters the viewport, then
/// fades and slides it in once. It stays visible afterwards.
pub fn reveal<R>(ui: &mut Ui, id: Id, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let seen_id = id.with("revealed");
    let seen = ui.data(|d| d.get_temp::<bool>(seen_id)).unwrap_or(false);
    let t = ui
        .ctx()
        .animate_bool_with_time(id.with("reveal"), seen, REVEAL_SECONDS);

    let inner = ui.scope(|ui| {
        ui.set_opacity(t);
        ui.add_space((1.0 - t) * REVEAL_OFFSET);
        add_contents(ui)
    });

    if !seen && ui.is_rect_visible(inner.response.rect) {
        ui.data_mut(|d| d.insert_temp(seen_id, true));
    }
    inner.inner
}

/// Decoration state of a form field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecor {
    pub focused: bool,
    pub has_value: bool,
}

impl FieldDecor {
    pub fn new(focused: bool, value: &str) -> Self {
        Self {
            focused,
            has_value: !value.trim().is_empty(),
        }
    }

    pub fn stroke(self, ui: &Ui) -> Stroke {
        if self.focused {
            Stroke::new(2.0, COLOR_BRAND)
        } else if self.has_value {
            Stroke::new(1.0, COLOR_GREEN)
        } else {
            ui.visuals().widgets.inactive.bg_stroke
        }
    }
}

/// A text field wrapped in a frame that highlights on focus and marks
/// non-empty content.
pub fn decorated_text_edit(
    ui: &mut Ui,
    id: Id,
    text: &mut String,
    hint: &str,
    multiline: bool,
    password: bool,
) -> egui::Response {
    let decor = ui
        .data(|d| d.get_temp::<FieldDecor>(id))
        .unwrap_or_else(|| FieldDecor::new(false, text));

    let response = egui::Frame::new()
        .stroke(decor.stroke(ui))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::same(2))
        .show(ui, |ui| {
            let edit = if multiline {
                egui::TextEdit::multiline(text).desired_rows(3)
            } else {
                egui::TextEdit::singleline(text)
            };
            ui.add(
                edit.id(id)
                    .hint_text(hint)
                    .password(password)
                    .desired_width(f32::INFINITY)
                    .frame(false),
            )
        })
        .inner;

    let next = FieldDecor::new(response.has_focus(), text);
    if next != decor {
        ui.data_mut(|d| d.insert_temp(id, next));
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_decor_tracks_content_not_whitespace() {
        assert!(!FieldDecor::new(false, "").has_value);
        assert!(!FieldDecor::new(false, "   ").has_value);
        assert!(FieldDecor::new(false, "x").has_value);
        assert!(FieldDecor::new(true, "").focused);
    }

    #[test]
    fn test_scroll_request_is_consumed_by_its_anchor() {
        let ctx = egui::Context::default();
        let mut request = ScrollRequest::default();
        request.request(Section::Demo);

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                request.anchor(ui, Section::Features);
            });
        });
        assert_eq!(request.pending(), Some(Section::Demo));

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                request.anchor(ui, Section::Demo);
            });
        });
        assert_eq!(request.pending(), None);
    }

    #[test]
    fn test_reveal_marks_visible_content_as_seen() {
        let ctx = egui::Context::default();
        let id = Id::new("card");

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                reveal(ui, id, |ui| ui.label("hello"));
            });
        });
        let seen = ctx.data(|d| d.get_temp::<bool>(id.with("revealed")));
        assert_eq!(seen, Some(true));
    }
}
