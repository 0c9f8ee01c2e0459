//! HTTP surface
//!
//! - `services`: route handlers (shorten, redirect, health)
//! - `middleware`: request id propagation
//! - `short_url`: absolute short-link formatting

pub mod middleware;
pub mod services;
pub mod short_url;

pub use short_url::ShortUrlBuilder;

use actix_web::web;

/// Registers every route on `cfg`.
///
/// The redirect scope goes last so an empty prefix cannot shadow the
/// other routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig, redirect_prefix: &str) {
    cfg.route("/", web::get().to(services::root_message))
        .service(services::shorten_routes())
        .service(services::health_routes())
        .service(services::redirect_routes(redirect_prefix));
}
