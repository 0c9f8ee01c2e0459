mod config_gen;
mod links;

pub use config_gen::config_generate;
pub use links::{resolve_key, shorten_url, show_stats};
