//! Linksy - deterministic URL shortener
//!
//! Short keys are prefixes of a base62 SHA-256 digest of the target. The
//! prefix length is the smallest prime above the current record count, so
//! keys stay short while the store is small and grow with it; collisions
//! escalate to the next prime length.
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: Command-line interface (default)
//!
//! # Architecture
//! - `keygen`: digest encoding, length selection, collision probing
//! - `storage`: persistence gateway (SQL via sea-orm, in-memory via dashmap)
//! - `services`: create-or-reuse and resolve
//! - `api`: HTTP services and middleware
//! - `interfaces`: command-line commands
//! - `config`: configuration management
//! - `runtime`: application lifecycle and execution modes
//! - `system`: logging

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod keygen;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
