//! Pages module for the application.
//!
//! The demo is a single scrolling landing page.

mod home_page;

pub use home_page::home_page;
