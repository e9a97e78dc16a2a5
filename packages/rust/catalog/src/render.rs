//! Markdown renderers for catalog search results.
//!
//! Renderers are pure string builders over the wire model. Templates are
//! fixed; the only conditional parts are the optional enum description and
//! the "occurs when" list, omitted entirely when empty.

use crate::model::{AdminApiErrors, ErrorEnum, ErrorVariant};

/// Separator between renderings of a multi-result code search.
const MATCH_SEPARATOR: &str = "\n\n---\n\n";

/// Render one code-search match as a standalone Markdown document.
pub fn render_variant(error: &ErrorEnum, variant: &ErrorVariant) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {}", variant.error_code));
    lines.push(String::new());
    lines.push(format!(
        "**HTTP Status:** {} ({})",
        variant.http_status_code, variant.status_code_name
    ));
    lines.push(format!("**Endpoint:** {}", error.endpoint));
    lines.push(format!("**Module:** {}", error.module_path));
    lines.push(String::new());
    lines.push("## Description".into());
    lines.push(String::new());
    lines.push(variant.description.clone());
    lines.push(String::new());

    if !variant.occurs_when.is_empty() {
        lines.push("## This occurs when:".into());
        lines.push(String::new());
        for condition in &variant.occurs_when {
            lines.push(format!("- {condition}"));
        }
        lines.push(String::new());
    }

    lines.push("## Error Response Example".into());
    lines.push(String::new());
    lines.push("```json".into());
    lines.push("{".into());
    lines.push(format!("  \"error_code\": \"{}\",", variant.error_code));
    lines.push(
        "  \"error_message\": \"Detailed error message based on the specific error condition\""
            .into(),
    );
    lines.push("}".into());
    lines.push("```".into());

    lines.join("\n")
}

/// Render every code-search match, separated by horizontal rules.
pub fn render_code_matches(matches: &[(&ErrorEnum, &ErrorVariant)]) -> String {
    matches
        .iter()
        .map(|(error, variant)| render_variant(error, variant))
        .collect::<Vec<_>>()
        .join(MATCH_SEPARATOR)
}

/// Render an endpoint-search result group: per enum, a summary table then a
/// detailed subsection per variant.
pub fn render_endpoint_group(errors: &[&ErrorEnum]) -> String {
    if errors.is_empty() {
        return "No errors found for this endpoint.".into();
    }

    let mut lines: Vec<String> = Vec::new();

    for error in errors {
        lines.push(format!("## {}", error.endpoint));
        lines.push(String::new());
        if !error.description.is_empty() {
            lines.push(error.description.clone());
            lines.push(String::new());
        }

        lines.push("| Error Code | HTTP Status | Description |".into());
        lines.push("|------------|-------------|-------------|".into());
        for variant in &error.variants {
            let description = variant.description.replace('\n', " ");
            lines.push(format!(
                "| `{}` | {} | {} |",
                variant.error_code, variant.http_status_code, description
            ));
        }
        lines.push(String::new());

        for variant in &error.variants {
            lines.push(format!("### {}", variant.error_code));
            lines.push(String::new());
            lines.push(variant.description.clone());
            lines.push(String::new());

            if !variant.occurs_when.is_empty() {
                lines.push("**This occurs when:**".into());
                for condition in &variant.occurs_when {
                    lines.push(format!("- {condition}"));
                }
                lines.push(String::new());
            }
        }

        lines.push("---".into());
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render the whole-catalog digest: header, counts, a full code/status/endpoint
/// table, and usage hints for the narrower operations.
pub fn render_summary(catalog: &AdminApiErrors) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Lattice Admin API Errors".into());
    lines.push(String::new());
    lines.push(format!("Generated: {}", catalog.generated_at.to_rfc3339()));
    lines.push(format!("Catalog version: {}", catalog.version));
    lines.push(format!("Total error codes: {}", catalog.variant_count()));
    lines.push(String::new());
    lines.push("| Error Code | HTTP Status | Endpoint |".into());
    lines.push("|------------|-------------|----------|".into());

    for error in &catalog.errors {
        for variant in &error.variants {
            lines.push(format!(
                "| `{}` | {} | {} |",
                variant.error_code, variant.http_status_code, error.endpoint
            ));
        }
    }

    lines.push(String::new());
    lines.push("Use `docbridge error <code>` to look up a specific error code.".into());
    lines.push(
        "Use `docbridge endpoint <path>` to list every error an endpoint can return.".into(),
    );

    lines.join("\n")
}
