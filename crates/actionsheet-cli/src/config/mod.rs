//! Application configuration.
//!
//! A single TOML file with a `[controller]` section holding the
//! busy-reentry policy and queue capacity.

#[allow(clippy::module_inception)]
mod config;

#[allow(clippy::module_name_repetitions)]
pub use config::{AppConfig, resolve_config_path};
