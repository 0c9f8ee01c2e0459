use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A key → target mapping. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    pub code: String,
    pub target: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    pub fn new(code: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target: target.into(),
            created_at: Utc::now(),
        }
    }
}
