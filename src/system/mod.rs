//! System-level modules
//!
//! Process-wide concerns that sit outside key assignment.

pub mod logging;

pub use logging::init_logging;
