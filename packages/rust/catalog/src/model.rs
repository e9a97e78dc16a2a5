//! Admin API error catalog: wire model and loading.
//!
//! The catalog is a generated JSON document (camelCase field names) grouping
//! error variants by the endpoint's error enum. It is re-read on every load —
//! no process-wide cache, so no staleness concerns — and a load that fails
//! for any reason degrades to an empty catalog rather than erroring, matching
//! the engine-wide "failure becomes data" policy.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One concrete error variant of an endpoint's error enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorVariant {
    /// Enum variant name in the source code.
    pub name: String,
    /// External error code (primary search key; uniqueness NOT guaranteed).
    pub error_code: String,
    /// HTTP status the endpoint responds with.
    pub http_status_code: u16,
    /// Canonical name of the HTTP status.
    pub status_code_name: String,
    /// Human-readable description.
    pub description: String,
    /// Conditions under which the error occurs. May be empty.
    #[serde(default)]
    pub occurs_when: Vec<String>,
}

/// An error enum attached to one Admin API endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnum {
    /// Rust enum name in the Lattice source.
    pub enum_name: String,
    /// Module path of the enum.
    pub module_path: String,
    /// Source file the enum is defined in.
    pub file_path: String,
    /// Endpoint path (not guaranteed unique across enums).
    pub endpoint: String,
    /// Description of the endpoint's error surface. May be empty.
    #[serde(default)]
    pub description: String,
    /// Variants in source order.
    pub variants: Vec<ErrorVariant>,
}

/// The whole generated catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminApiErrors {
    /// When the catalog was generated.
    pub generated_at: DateTime<Utc>,
    /// Catalog format version.
    pub version: String,
    /// Error enums in generation order. Search preserves this order.
    pub errors: Vec<ErrorEnum>,
}

impl AdminApiErrors {
    /// An empty catalog, stamped now. Returned when loading fails.
    pub fn empty() -> Self {
        Self {
            generated_at: Utc::now(),
            version: "1.0.0".into(),
            errors: Vec::new(),
        }
    }

    /// Total number of variants across all enums.
    pub fn variant_count(&self) -> usize {
        self.errors.iter().map(|e| e.variants.len()).sum()
    }
}

/// Loader bound to the catalog file on disk.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Create a store reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the catalog. Never fails: read or parse errors degrade
    /// to [`AdminApiErrors::empty`] with a warning.
    pub async fn load(&self) -> AdminApiErrors {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "catalog read failed, using empty catalog");
                return AdminApiErrors::empty();
            }
        };

        match serde_json::from_str::<AdminApiErrors>(&content) {
            Ok(catalog) => {
                debug!(
                    path = %self.path.display(),
                    enums = catalog.errors.len(),
                    variants = catalog.variant_count(),
                    "catalog loaded"
                );
                catalog
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "catalog parse failed, using empty catalog");
                AdminApiErrors::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_catalog_parses() {
        let fixture = std::fs::read_to_string(
            "../../../fixtures/json/admin-api-errors.fixture.json",
        )
        .expect("read fixture");
        let catalog: AdminApiErrors = serde_json::from_str(&fixture).expect("parse fixture");

        assert_eq!(catalog.version, "1.0.0");
        assert_eq!(catalog.errors.len(), 3);
        assert_eq!(catalog.errors[0].endpoint, "/datasets/{name}");
        assert_eq!(catalog.errors[0].variants[0].error_code, "DATASET_NOT_FOUND");
        assert!(catalog.variant_count() >= 5);
    }

    #[tokio::test]
    async fn load_missing_file_degrades_to_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(tmp.path().join("nope.json"));

        let catalog = store.load().await;
        assert!(catalog.errors.is_empty());
        assert_eq!(catalog.version, "1.0.0");
    }

    #[tokio::test]
    async fn load_malformed_json_degrades_to_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let catalog = CatalogStore::new(&path).load().await;
        assert!(catalog.errors.is_empty());
        assert_eq!(catalog.variant_count(), 0);
    }

    #[tokio::test]
    async fn load_fixture_file() {
        let store = CatalogStore::new("../../../fixtures/json/admin-api-errors.fixture.json");
        let catalog = store.load().await;
        assert_eq!(catalog.errors.len(), 3);
    }
}
