//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod config;
mod decode;
mod encode;
mod schema;
mod utils;

pub use completions::handle_completions;
pub use config::handle_config;
pub use decode::handle_decode;
pub use encode::handle_encode;
pub use schema::handle_schema;
