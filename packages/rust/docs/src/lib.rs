//! Documentation registries, identifier codec, and content fetching.
//!
//! This crate owns the document side of the DocBridge engine:
//! - [`Registry`] — immutable per-corpus tables of known documents
//! - [`ids`] — canonical/transport identifier codec with completion
//! - [`DocSource`] — no-fail single-document fetching with per-corpus
//!   post-processing, plus order-preserving aggregate fetches

pub mod aggregate;
pub mod fetch;
pub mod ids;
pub mod registry;

pub use fetch::{DocSource, FetchOutcome};
pub use registry::{Corpus, DocEntry, Registry};
