//! Customization options forwarded verbatim to the generator.

use serde::Serialize;

/// Border width (in modules) always sent with a request.
pub const DEFAULT_BORDER: u32 = 4;

/// Module drawer styles offered in the options form.
pub const MODULE_DRAWERS: &[&str] = &[
    "square",
    "gapped_square",
    "circle",
    "rounded",
    "vertical_bars",
    "horizontal_bars",
];

/// Error correction levels offered in the options form.
pub const ERROR_CORRECTION_LEVELS: &[&str] = &["L", "M", "Q", "H"];

/// Output formats offered in the options form.
pub const OUTPUT_FORMATS: &[&str] = &["PNG", "JPEG", "SVG"];

/// Wi-Fi encryption modes offered in the Wi-Fi form.
pub const WIFI_ENCRYPTIONS: &[&str] = &["WPA", "WEP", "nopass"];

/// Visual and encoding parameters. None of these are validated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomizationOptions {
    pub foreground_color: String,
    pub background_color: String,
    pub module_drawer: String,
    pub error_correction: String,
    pub format: String,
    pub size: u32,
    pub border: u32,
}

impl Default for CustomizationOptions {
    fn default() -> Self {
        Self {
            foreground_color: "#000000".to_owned(),
            background_color: "#FFFFFF".to_owned(),
            module_drawer: MODULE_DRAWERS[0].to_owned(),
            error_correction: "M".to_owned(),
            format: OUTPUT_FORMATS[0].to_owned(),
            size: 10,
            border: DEFAULT_BORDER,
        }
    }
}
