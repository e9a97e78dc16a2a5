//! Catalog search.
//!
//! Both searches are case-insensitive substring matches that preserve catalog
//! order (outer enum order, then inner variant order). No deduplication and
//! no relevance ranking: first-match-in-document-order wins ties. Codes are
//! not assumed unique across the catalog.

use crate::model::{AdminApiErrors, ErrorEnum, ErrorVariant};

/// Find variants whose error code contains `query` (case-insensitive).
pub fn search_by_code<'a>(
    catalog: &'a AdminApiErrors,
    query: &str,
) -> Vec<(&'a ErrorEnum, &'a ErrorVariant)> {
    let query = query.to_lowercase();

    let mut results = Vec::new();
    for error in &catalog.errors {
        for variant in &error.variants {
            if variant.error_code.to_lowercase().contains(&query) {
                results.push((error, variant));
            }
        }
    }
    results
}

/// Find enums whose endpoint contains `query` (case-insensitive).
pub fn search_by_endpoint<'a>(catalog: &'a AdminApiErrors, query: &str) -> Vec<&'a ErrorEnum> {
    let query = query.to_lowercase();

    catalog
        .errors
        .iter()
        .filter(|error| error.endpoint.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn variant(code: &str) -> ErrorVariant {
        ErrorVariant {
            name: "X".into(),
            error_code: code.into(),
            http_status_code: 404,
            status_code_name: "Not Found".into(),
            description: format!("{code} happened"),
            occurs_when: vec![],
        }
    }

    fn error_enum(endpoint: &str, codes: &[&str]) -> ErrorEnum {
        ErrorEnum {
            enum_name: "TestError".into(),
            module_path: "lattice::admin".into(),
            file_path: "src/admin/error.rs".into(),
            endpoint: endpoint.into(),
            description: String::new(),
            variants: codes.iter().map(|c| variant(c)).collect(),
        }
    }

    fn catalog() -> AdminApiErrors {
        AdminApiErrors {
            generated_at: Utc::now(),
            version: "1.0.0".into(),
            errors: vec![
                error_enum("/datasets/{name}", &["DATASET_NOT_FOUND", "DATASET_INVALID"]),
                error_enum("/jobs/{id}", &["JOB_NOT_FOUND"]),
            ],
        }
    }

    #[test]
    fn code_search_matches_substring() {
        let catalog = catalog();
        let results = search_by_code(&catalog, "NOT_FOUND");

        let codes: Vec<_> = results.iter().map(|(_, v)| v.error_code.as_str()).collect();
        assert_eq!(codes, vec!["DATASET_NOT_FOUND", "JOB_NOT_FOUND"]);
    }

    #[test]
    fn code_search_is_case_insensitive() {
        let catalog = catalog();
        let results = search_by_code(&catalog, "dataset_not_found");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1.error_code, "DATASET_NOT_FOUND");
    }

    #[test]
    fn code_search_exact_match() {
        let catalog = catalog();
        let results = search_by_code(&catalog, "JOB_NOT_FOUND");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0.endpoint, "/jobs/{id}");
    }

    #[test]
    fn code_search_no_match_is_empty() {
        let catalog = catalog();
        assert!(search_by_code(&catalog, "NO_SUCH_CODE").is_empty());
    }

    #[test]
    fn code_search_preserves_catalog_order() {
        let catalog = catalog();
        let results = search_by_code(&catalog, "dataset");
        let codes: Vec<_> = results.iter().map(|(_, v)| v.error_code.as_str()).collect();
        assert_eq!(codes, vec!["DATASET_NOT_FOUND", "DATASET_INVALID"]);
    }

    #[test]
    fn endpoint_search_matches_substring() {
        let catalog = catalog();
        let results = search_by_endpoint(&catalog, "/jobs");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].endpoint, "/jobs/{id}");
    }

    #[test]
    fn endpoint_search_is_case_insensitive() {
        let catalog = catalog();
        let results = search_by_endpoint(&catalog, "/DATASETS");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn endpoint_search_no_match_is_empty() {
        let catalog = catalog();
        assert!(search_by_endpoint(&catalog, "/users").is_empty());
    }
}
