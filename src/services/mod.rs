//! Service layer for business logic
//!
//! Shared between the HTTP handlers and the command line.

mod link_service;

pub use link_service::*;
