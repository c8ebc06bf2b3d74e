//! App Configuration
//!
//! Built-in defaults, optionally overridden from `<meta>` tags in index.html.

use leptos::prelude::*;
use web_sys::Document;

use feedback_core::MAX_CHARS;

pub const DEFAULT_API_BASE: &str = "https://bytegrad.com/course-assets/js/1/api";

/// How long the valid/invalid form state stays on
pub const INDICATOR_MS: u32 = 2000;

/// `<meta name="feedback-api-base" content="...">`
const API_BASE_META: &str = "feedback-api-base";

const DEFAULT_HASHTAGS: &[&str] = &["Nike", "McDonald's", "Starbucks", "ByteGrad", "Netflix"];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the remote collection, without trailing slash
    pub api_base: String,
    pub max_chars: usize,
    pub indicator_ms: u32,
    /// Hashtags shown before any feedback is loaded
    pub default_hashtags: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            max_chars: MAX_CHARS,
            indicator_ms: INDICATOR_MS,
            default_hashtags: DEFAULT_HASHTAGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn from_document(document: &Document) -> Self {
        let config = Self::default();
        match read_meta(document, API_BASE_META) {
            Some(base) => config.with_api_base(&base),
            None => config,
        }
    }

    /// Override the API base; blank values keep the current one
    pub fn with_api_base(mut self, base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        if !base.is_empty() {
            self.api_base = base.to_string();
        }
        self
    }

    pub fn feedbacks_url(&self) -> String {
        format!("{}/feedbacks", self.api_base)
    }
}

fn read_meta(document: &Document, name: &str) -> Option<String> {
    document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}

/// Get the config from context
pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let config = AppConfig::default();
        assert_eq!(
            config.feedbacks_url(),
            "https://bytegrad.com/course-assets/js/1/api/feedbacks"
        );
        assert_eq!(config.max_chars, 150);
        assert_eq!(config.indicator_ms, 2000);
    }

    #[test]
    fn test_api_base_override() {
        let config = AppConfig::default().with_api_base(" http://localhost:8080/api/ ");
        assert_eq!(config.feedbacks_url(), "http://localhost:8080/api/feedbacks");

        let unchanged = AppConfig::default().with_api_base("   ");
        assert_eq!(unchanged.api_base, DEFAULT_API_BASE);
    }
}
