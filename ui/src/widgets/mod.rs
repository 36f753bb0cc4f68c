mod action_buttons;
pub mod api_status;
mod content_form;
mod content_tabs;
mod hero_pattern;
mod landing_cards;
mod options_form;
mod qr_preview;
mod response_summary;

pub use action_buttons::{
    DOWNLOAD_LABEL, DownloadNotice, GENERATE_LABEL, GENERATING_LABEL, download_button,
    generate_button,
};
pub use api_status::api_status;
pub use content_form::content_form;
pub use content_tabs::content_tabs;
pub use hero_pattern::{Cell, HeroPattern, MODULE_SIZE, PATTERN_MODULES, hero_pattern};
pub use landing_cards::{FEATURES, PRICING, feature_cards, pricing_cards};
pub use options_form::options_form;
pub use qr_preview::{GENERATING_TEXT, PLACEHOLDER_TEXT, PREVIEW_ALT, PreviewTexture, qr_preview};
pub use response_summary::response_summary;
