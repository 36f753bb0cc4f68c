use ustr::Ustr;

use crate::ContentKind;

/// Where the generation backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Base URL without trailing slash. Empty means same-origin.
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn api_url(&self) -> Ustr {
        Ustr::from(&format!("{}/api/v1", self.api_base_url))
    }

    /// `POST` target for generating a code of `kind`.
    pub fn generate_url(&self, kind: ContentKind) -> String {
        format!("{}/qr/{}", self.api_url().as_str(), kind.slug())
    }

    /// Endpoint pinged by the health monitor.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.api_base_url)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                // Served by the backend itself.
                String::new()
            } else {
                "http://localhost:5000".to_owned()
            },
        }
    }
}
