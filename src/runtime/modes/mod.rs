//! Mode routing
//!
//! Only the HTTP server runs as a long-lived mode; one-shot commands live
//! in `interfaces::cli`.

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "server")]
pub use server::run_server;
