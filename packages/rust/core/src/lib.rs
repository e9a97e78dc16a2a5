//! DocBridge service facade.
//!
//! Ties the documentation sources and the error catalog together into the
//! boundary operations a transport (or the CLI) exposes.

pub mod service;

pub use service::DocService;
