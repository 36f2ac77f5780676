//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions and loading
//! - [`defaults`]: Serde default value functions

mod defaults;
mod types;

pub use types::{ClientConfig, ConfigError, IdentityConfig, LimitsConfig, TimeoutsConfig};
