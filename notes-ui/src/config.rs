//! Client configuration, resolved once from the hosting page.
//!
//! There are no environment variables in the browser. The page can steer the
//! client through `<meta name="notes-api-base" content="...">` and the
//! `lang` attribute of `<html>`.

use std::sync::OnceLock;

use crate::format::DateLocale;

/// Port the reference notes server listens on during development
pub const DEV_API_PORT: &str = "5000";
pub const API_BASE_META: &str = "notes-api-base";

pub const TOAST_DISPLAY_MS: u32 = 3000;
pub const TOAST_EXIT_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every `/api/notes` request; empty means same origin
    pub api_base: String,
    /// How long a notification stays fully visible
    pub toast_display_ms: u32,
    /// Length of the slide-out transition before removal
    pub toast_exit_ms: u32,
    pub date_locale: DateLocale,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            toast_display_ms: TOAST_DISPLAY_MS,
            toast_exit_ms: TOAST_EXIT_MS,
            date_locale: DateLocale::default(),
        }
    }
}

impl ClientConfig {
    /// Read configuration from the current document.
    pub fn from_document() -> Self {
        let window = web_sys::window();
        let location = window.as_ref().map(|w| w.location());
        let hostname = location
            .as_ref()
            .and_then(|l| l.hostname().ok())
            .unwrap_or_default();
        let port = location
            .as_ref()
            .and_then(|l| l.port().ok())
            .unwrap_or_default();

        let document = window.and_then(|w| w.document());
        let meta_base = document.as_ref().and_then(|doc| {
            doc.query_selector(&format!("meta[name='{API_BASE_META}']"))
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
        });
        let lang = document
            .as_ref()
            .and_then(|doc| doc.document_element())
            .and_then(|root| root.get_attribute("lang"))
            .unwrap_or_default();

        Self {
            api_base: resolve_api_base(meta_base.as_deref(), &hostname, &port),
            date_locale: DateLocale::from_lang(&lang),
            ..Self::default()
        }
    }
}

/// Pick the API base URL.
/// - An explicit `<meta>` override wins
/// - In development (localhost on another port): use http://localhost:5000
/// - Otherwise: same origin (the server serves the page)
pub fn resolve_api_base(meta_override: Option<&str>, hostname: &str, port: &str) -> String {
    if let Some(base) = meta_override.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }

    let is_local = hostname == "localhost" || hostname == "127.0.0.1";
    if is_local && port != DEV_API_PORT {
        format!("http://localhost:{DEV_API_PORT}")
    } else {
        String::new()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static CLIENT_CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Get the cached client configuration
pub fn client_config() -> &'static ClientConfig {
    CLIENT_CONFIG.get_or_init(ClientConfig::from_document)
}
