//! Shared error model and configuration for DocBridge.
//!
//! This crate is the foundation depended on by all other DocBridge crates.
//! It provides:
//! - [`DocBridgeError`] — the unified error type for the ambient surface
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, PathsConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from,
};
pub use error::{DocBridgeError, Result};
