pub mod health;
pub mod redirect;
pub mod shorten;

pub use health::{AppStartTime, HealthService, health_routes, root_message};
pub use redirect::{RedirectService, redirect_routes};
pub use shorten::{ShortenRequest, ShortenResponse, ShortenService, shorten_routes};

use serde::Serialize;

/// JSON error body: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
