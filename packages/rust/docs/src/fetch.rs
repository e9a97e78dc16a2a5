//! Single-document content fetching.
//!
//! A [`DocSource`] binds a registry to a root directory on disk and reads one
//! document per call. Fetching never fails: unknown identifiers and read
//! errors become tagged [`FetchOutcome`] values, rendered to placeholder text
//! only at the output boundary so one bad document can never take down an
//! aggregate fetch.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::registry::{Corpus, Registry};

/// The tagged result of a single-document fetch.
///
/// Callers inside the engine can distinguish outcomes; the boundary collapses
/// everything to text via [`FetchOutcome::into_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Document read (and post-processed) successfully.
    Ok(String),
    /// The identifier is not in the registry.
    UnknownId(String),
    /// The source file could not be read.
    ReadFailed { id: String, cause: String },
}

impl FetchOutcome {
    /// Whether this outcome carries a document body.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Collapse the outcome to the text payload delivered to callers.
    pub fn into_text(self) -> String {
        match self {
            Self::Ok(body) => body,
            Self::UnknownId(id) => format!("Error: Unknown documentation ID: {id}"),
            Self::ReadFailed { id, cause } => {
                format!("Error reading documentation for {id}: {cause}")
            }
        }
    }
}

/// A readable documentation corpus: registry plus on-disk root.
#[derive(Debug, Clone)]
pub struct DocSource {
    registry: &'static Registry,
    root: PathBuf,
    strip_front_matter: bool,
}

impl DocSource {
    /// Core-docs source rooted at `root`. No post-processing.
    pub fn core(root: impl Into<PathBuf>) -> Self {
        Self {
            registry: Registry::core(),
            root: root.into(),
            strip_front_matter: false,
        }
    }

    /// Repo-docs source rooted at a Lattice checkout. Site pages carry a
    /// front-matter block, stripped on fetch.
    pub fn repo(root: impl Into<PathBuf>) -> Self {
        Self {
            registry: Registry::repo(),
            root: root.into(),
            strip_front_matter: true,
        }
    }

    /// Source for a corpus selector, rooted at `root`.
    pub fn for_corpus(corpus: Corpus, root: impl Into<PathBuf>) -> Self {
        match corpus {
            Corpus::Core => Self::core(root),
            Corpus::Repo => Self::repo(root),
        }
    }

    /// The registry this source reads from.
    pub fn registry(&self) -> &'static Registry {
        self.registry
    }

    /// Fetch one document by canonical id. Never fails; every call re-reads
    /// the source file (no caching — documents are small and rarely hot).
    pub async fn fetch(&self, id: &str) -> FetchOutcome {
        let Some(entry) = self.registry.lookup(id) else {
            warn!(registry = self.registry.name(), id, "unknown documentation id");
            return FetchOutcome::UnknownId(id.to_string());
        };

        let path = self.root.join(entry.source_path);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                debug!(registry = self.registry.name(), id, bytes = content.len(), "fetched document");
                let body = if self.strip_front_matter {
                    strip_front_matter(&content)
                } else {
                    content
                };
                FetchOutcome::Ok(body)
            }
            Err(e) => {
                warn!(
                    registry = self.registry.name(),
                    id,
                    path = %path.display(),
                    error = %e,
                    "document read failed"
                );
                FetchOutcome::ReadFailed {
                    id: id.to_string(),
                    cause: e.to_string(),
                }
            }
        }
    }
}

/// Strip a leading `---` front-matter block, if present at the very start.
fn strip_front_matter(content: &str) -> String {
    static FRONT_MATTER_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?s)\A---\n.*?\n---\n\n?").expect("valid regex"));

    FRONT_MATTER_RE.replace(content, "").into_owned()
}
