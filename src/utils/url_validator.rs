//! URL 验证模块
//!
//! Targets are checked before they reach key assignment. Only absolute
//! http(s) URLs are accepted; the target is stored exactly as given.

use url::Url;

use crate::errors::LinksyError;

/// URL 验证错误
#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    UnsupportedScheme(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "longUrl is required"),
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "Unsupported URL scheme '{}': only http:// and https:// are allowed",
                scheme
            ),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

impl From<UrlValidationError> for LinksyError {
    fn from(err: UrlValidationError) -> Self {
        LinksyError::validation(err.to_string())
    }
}

/// 验证目标 URL
///
/// javascript:, data:, file: 等协议都会因 scheme 不符而被拒绝
pub fn validate_url(raw: &str) -> Result<(), UrlValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let parsed =
        Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::InvalidFormat("missing host".to_string()));
    }

    Ok(())
}
