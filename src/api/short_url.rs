//! Absolute short-link formatting.

use crate::config::ShortenerConfig;

/// Builds `{base_url}{redirect_prefix}/{key}`.
///
/// The base address is passed in explicitly; the builder never reads
/// process-wide state.
#[derive(Debug, Clone)]
pub struct ShortUrlBuilder {
    base_url: String,
    redirect_prefix: String,
}

impl ShortUrlBuilder {
    pub fn new(base_url: &str, redirect_prefix: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            redirect_prefix: normalize_prefix(redirect_prefix),
        }
    }

    pub fn from_config(config: &ShortenerConfig) -> Self {
        Self::new(&config.base_url, &config.redirect_prefix)
    }

    pub fn build(&self, key: &str) -> String {
        format!("{}{}/{}", self.base_url, self.redirect_prefix, key)
    }

    pub fn redirect_prefix(&self) -> &str {
        &self.redirect_prefix
    }
}

/// `r`, `/r`, `/r/` → `/r`; empty or `/` → empty.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
