//! Shared color constants for the UI.

use egui::Color32;

/// Forest green color for healthy/available/success status.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for error/unavailable/failed status.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber color for checking/pending status.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Accent used for the focused field ring and primary buttons.
pub const COLOR_BRAND: Color32 = Color32::from_rgb(37, 99, 235);

/// Translucent red behind inline error alerts.
pub const COLOR_RED_TINT: Color32 = Color32::from_rgba_premultiplied(44, 10, 14, 40);

/// Formats a color the way the generator expects it (`#RRGGBB`).
pub fn to_hex_rgb(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

/// Parses `#RRGGBB` (or `#RGB`) into a color. Alpha is ignored.
pub fn parse_hex_rgb(hex: &str) -> Option<Color32> {
    Color32::from_hex(hex.trim())
        .ok()
        .map(|color| Color32::from_rgb(color.r(), color.g(), color.b()))
}
