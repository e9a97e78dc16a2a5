//! Admin API error catalog: model, search, and Markdown rendering.
//!
//! The catalog is a generated JSON dataset describing every error the Lattice
//! Admin API can return, grouped by endpoint. This crate loads it (degrading
//! to empty on any failure), searches it by code or endpoint in document
//! order, and renders matches as Markdown.

pub mod model;
pub mod render;
pub mod search;

pub use model::{AdminApiErrors, CatalogStore, ErrorEnum, ErrorVariant};
pub use render::{render_code_matches, render_endpoint_group, render_summary, render_variant};
pub use search::{search_by_code, search_by_endpoint};
