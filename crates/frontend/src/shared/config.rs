//! Page configuration
//!
//! Defaults match a page served by the Q&A service itself. A host page can
//! point the client at another server with
//! `<meta name="api-base" content="http://localhost:8000">`.

use contracts::rag::{ASK_PATH, INGEST_PATH};

/// Delay before a success status hides itself
pub const SUCCESS_HIDE_MS: u32 = 3000;

pub const DEFAULT_GREETING: &str =
    "Hello! Upload a document, then ask me anything about it.";

pub const CLEARED_GREETING: &str = "Chat cleared. How can I help you now?";

const API_BASE_META: &str = "api-base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Empty = same origin (relative URLs)
    pub api_base: String,
    pub ingest_path: String,
    pub ask_path: String,
    pub success_hide_ms: u32,
    /// First AI message of a fresh transcript
    pub greeting: String,
    /// The only AI message left after "clear chat"
    pub cleared_greeting: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            ingest_path: INGEST_PATH.to_string(),
            ask_path: ASK_PATH.to_string(),
            success_hide_ms: SUCCESS_HIDE_MS,
            greeting: DEFAULT_GREETING.to_string(),
            cleared_greeting: CLEARED_GREETING.to_string(),
        }
    }
}

impl PageConfig {
    /// Defaults plus overrides found in the host document
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(base) = read_meta(API_BASE_META) {
            log::debug!("api base overridden by <meta name=\"{}\">: {}", API_BASE_META, base);
            config = config.with_api_base(base);
        }
        config
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim().to_string();
        self
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    let meta = document.query_selector(&selector).ok()??;
    meta.get_attribute("content")
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PageConfig::default();
        assert_eq!(config.api_base, "");
        assert_eq!(config.ingest_path, "/ingest");
        assert_eq!(config.ask_path, "/ask");
        assert_eq!(config.success_hide_ms, 3000);
        assert_eq!(config.cleared_greeting, "Chat cleared. How can I help you now?");
    }

    #[test]
    fn test_with_api_base_trims() {
        let config = PageConfig::default().with_api_base("  http://localhost:8000 ");
        assert_eq!(config.api_base, "http://localhost:8000");
    }
}
