//! Multi-document aggregation.
//!
//! Aggregate fetches fan out one task per document with no concurrency cap
//! (corpora are tens of documents, each a single bounded file read) and
//! recombine results by input index, never by completion order. Per-document
//! failures are already text by the time they are joined, so one bad document
//! never fails the aggregate.

use tracing::instrument;

use crate::fetch::{DocSource, FetchOutcome};

/// Separator between sections of a caller-selected multi-document fetch.
const SELECTED_SEPARATOR: &str = "\n\n\n";

/// Separator between headed sections of a whole-corpus fetch.
const SECTION_SEPARATOR: &str = "\n\n---\n\n";

impl DocSource {
    /// Fetch the given documents concurrently and concatenate them in the
    /// caller's order, separated by a triple newline.
    #[instrument(skip_all, fields(registry = self.registry().name(), count = ids.len()))]
    pub async fn fetch_many(&self, ids: &[String]) -> String {
        let handles: Vec<_> = ids
            .iter()
            .map(|id| {
                let source = self.clone();
                let id = id.clone();
                tokio::spawn(async move { source.fetch(&id).await.into_text() })
            })
            .collect();

        let mut sections = Vec::with_capacity(handles.len());
        for (id, handle) in ids.iter().zip(handles) {
            let text = match handle.await {
                Ok(text) => text,
                // A panicked task degrades to the per-document placeholder.
                Err(e) => FetchOutcome::ReadFailed {
                    id: id.clone(),
                    cause: e.to_string(),
                }
                .into_text(),
            };
            sections.push(text);
        }

        sections.join(SELECTED_SEPARATOR)
    }

    /// Fetch every document in the registry concurrently, prefix each with a
    /// `# <id>` heading, and join sections with a horizontal rule.
    #[instrument(skip_all, fields(registry = self.registry().name()))]
    pub async fn fetch_all(&self) -> String {
        let ids: Vec<&'static str> = self.registry().ids().collect();

        let handles: Vec<_> = ids
            .iter()
            .map(|&id| {
                let source = self.clone();
                tokio::spawn(async move {
                    let text = source.fetch(id).await.into_text();
                    format!("# {id}\n\n{text}")
                })
            })
            .collect();

        let mut sections = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(section) => sections.push(section),
                Err(e) => return format!("Error reading all documentation: {e}"),
            }
        }

        sections.join(SECTION_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    /// Write every core-corpus document into a tempdir, body = its id.
    fn seeded_core(tmp: &tempfile::TempDir) -> DocSource {
        for entry in Registry::core().entries() {
            let path = tmp.path().join(entry.source_path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&path, format!("body of {}", entry.id)).unwrap();
        }
        DocSource::core(tmp.path())
    }

    #[tokio::test]
    async fn fetch_many_preserves_caller_order() {
        let tmp = tempfile::tempdir().unwrap();
        let source = seeded_core(&tmp);

        let ids = vec!["lattice/udfs".to_string(), "lattice".to_string()];
        let output = source.fetch_many(&ids).await;

        let segments: Vec<&str> = output.split("\n\n\n").collect();
        assert_eq!(segments, vec!["body of lattice/udfs", "body of lattice"]);
    }

    #[tokio::test]
    async fn fetch_many_isolates_failures() {
        let tmp = tempfile::tempdir().unwrap();
        let source = seeded_core(&tmp);
        std::fs::remove_file(tmp.path().join("config.md")).unwrap();

        let ids = vec![
            "lattice".to_string(),
            "lattice/config".to_string(),
            "bogus".to_string(),
        ];
        let output = source.fetch_many(&ids).await;

        let segments: Vec<&str> = output.split("\n\n\n").collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], "body of lattice");
        assert!(segments[1].starts_with("Error reading documentation for lattice/config:"));
        assert_eq!(segments[2], "Error: Unknown documentation ID: bogus");
    }

    #[tokio::test]
    async fn fetch_many_empty_input() {
        let tmp = tempfile::tempdir().unwrap();
        let source = seeded_core(&tmp);
        assert_eq!(source.fetch_many(&[]).await, "");
    }

    #[tokio::test]
    async fn fetch_all_heads_every_section_in_registry_order() {
        let tmp = tempfile::tempdir().unwrap();
        let source = seeded_core(&tmp);

        let output = source.fetch_all().await;
        let sections: Vec<&str> = output.split("\n\n---\n\n").collect();
        assert_eq!(sections.len(), Registry::core().entries().len());

        for (section, id) in sections.iter().zip(Registry::core().ids()) {
            assert!(
                section.starts_with(&format!("# {id}\n\n")),
                "section missing heading for {id}"
            );
        }
    }

    #[tokio::test]
    async fn fetch_all_survives_missing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let source = seeded_core(&tmp);
        std::fs::remove_file(tmp.path().join("glossary.md")).unwrap();

        let output = source.fetch_all().await;
        assert!(output.contains("# lattice/glossary"));
        assert!(output.contains("Error reading documentation for lattice/glossary:"));
        // Neighbors unaffected.
        assert!(output.contains("body of lattice/examples"));
    }
}
