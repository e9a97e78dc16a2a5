//! The boundary operations consumed by transports and the CLI.
//!
//! [`DocService`] wires both documentation sources and the error catalog into
//! the operations a transport exposes. Every operation returns plain text (or
//! plain data): failures have already been absorbed into payloads by the
//! layers below, so callers always get a deliverable response.

use tracing::instrument;

use docbridge_catalog::{
    CatalogStore, render_code_matches, render_endpoint_group, render_summary, search_by_code,
    search_by_endpoint,
};
use docbridge_docs::{Corpus, DocEntry, DocSource, ids};
use docbridge_shared::AppConfig;

/// Facade over the documentation sources and the error catalog.
#[derive(Debug, Clone)]
pub struct DocService {
    core: DocSource,
    repo: DocSource,
    catalog: CatalogStore,
}

impl DocService {
    /// Build a service from application config paths.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            core: DocSource::core(&config.paths.core_root),
            repo: DocSource::repo(&config.paths.repo_root),
            catalog: CatalogStore::new(&config.paths.catalog_path),
        }
    }

    /// Build a service from explicit parts (used by tests).
    pub fn with_parts(core: DocSource, repo: DocSource, catalog: CatalogStore) -> Self {
        Self { core, repo, catalog }
    }

    fn source(&self, corpus: Corpus) -> &DocSource {
        match corpus {
            Corpus::Core => &self.core,
            Corpus::Repo => &self.repo,
        }
    }

    /// URI scheme for resource links, per corpus.
    fn scheme(corpus: Corpus) -> &'static str {
        match corpus {
            Corpus::Core => "lattice-docs",
            Corpus::Repo => "lattice-repo-docs",
        }
    }

    // -- document operations ------------------------------------------------

    /// Decode a transport id (falling back to the corpus default on a miss)
    /// and fetch the document it names.
    #[instrument(skip(self))]
    pub async fn resolve_and_fetch(&self, corpus: Corpus, transport_id: &str) -> String {
        let source = self.source(corpus);
        let id = ids::decode(source.registry(), transport_id);
        source.fetch(id).await.into_text()
    }

    /// Complete a partial transport id against the corpus registry.
    pub fn complete(&self, corpus: Corpus, prefix: &str) -> Vec<String> {
        ids::complete(self.source(corpus).registry(), prefix)
    }

    /// Enumerate the corpus for discovery: id, display name, description.
    pub fn list(&self, corpus: Corpus) -> &'static [DocEntry] {
        self.source(corpus).registry().entries()
    }

    /// Fetch the selected documents (canonical ids) concatenated in caller
    /// order.
    #[instrument(skip(self), fields(count = canonical_ids.len()))]
    pub async fn fetch_selected(&self, corpus: Corpus, canonical_ids: &[String]) -> String {
        self.source(corpus).fetch_many(canonical_ids).await
    }

    /// Fetch the entire corpus, one headed section per document.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self, corpus: Corpus) -> String {
        self.source(corpus).fetch_all().await
    }

    /// Render resource links for the selected documents, so a client can load
    /// only what it needs.
    pub fn doc_links(&self, corpus: Corpus, canonical_ids: &[String]) -> String {
        let scheme = Self::scheme(corpus);
        let lines: Vec<String> = canonical_ids
            .iter()
            .map(|id| format!("- {id} Documentation -> {scheme}://{}", ids::encode(id)))
            .collect();

        format!(
            "Resource links (open these URIs via readResource):\n\n{}",
            lines.join("\n")
        )
    }

    // -- catalog operations -------------------------------------------------

    /// Look up error codes matching `code`, rendered as Markdown.
    #[instrument(skip(self))]
    pub async fn lookup_error(&self, code: &str) -> String {
        let catalog = self.catalog.load().await;
        let matches = search_by_code(&catalog, code);

        if matches.is_empty() {
            return format!("No error code found matching: {code}");
        }
        render_code_matches(&matches)
    }

    /// Render every error enum whose endpoint matches `endpoint`.
    #[instrument(skip(self))]
    pub async fn errors_for_endpoint(&self, endpoint: &str) -> String {
        let catalog = self.catalog.load().await;
        let matches = search_by_endpoint(&catalog, endpoint);
        render_endpoint_group(&matches)
    }

    /// Render the whole-catalog digest.
    #[instrument(skip(self))]
    pub async fn all_errors_summary(&self) -> String {
        let catalog = self.catalog.load().await;
        render_summary(&catalog)
    }
}
