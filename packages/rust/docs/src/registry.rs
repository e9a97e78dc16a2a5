//! Static documentation registries.
//!
//! Each corpus is a closed, build-time enumeration of documents: a canonical
//! identifier, the source file it resolves to, and display metadata. The two
//! registries (core docs, repo docs) are independent and never merged.

/// A single known document in a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocEntry {
    /// Canonical identifier, `/`-separated (e.g. `lattice/schemas/events`).
    pub id: &'static str,
    /// Source file path relative to the corpus root.
    pub source_path: &'static str,
    /// Human-readable name for discovery listings.
    pub display_name: &'static str,
    /// One-line description for discovery listings.
    pub description: &'static str,
}

/// Which documentation corpus a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corpus {
    /// Hand-maintained platform guides shipped under `docs/`.
    Core,
    /// Site content from the Lattice repository checkout.
    Repo,
}

/// An immutable table of known documents for one corpus.
///
/// Entry order is significant: it drives `fetch-all` section order,
/// completion-list order, and the default document (first entry) that
/// unrecognized transport identifiers decode to.
#[derive(Debug)]
pub struct Registry {
    name: &'static str,
    entries: &'static [DocEntry],
}

impl Registry {
    /// The core-docs registry.
    pub fn core() -> &'static Registry {
        &CORE_REGISTRY
    }

    /// The repo-docs registry.
    pub fn repo() -> &'static Registry {
        &REPO_REGISTRY
    }

    /// Resolve a corpus selector to its registry.
    pub fn for_corpus(corpus: Corpus) -> &'static Registry {
        match corpus {
            Corpus::Core => Self::core(),
            Corpus::Repo => Self::repo(),
        }
    }

    /// Registry name, used in log events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &'static [DocEntry] {
        self.entries
    }

    /// All canonical ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|e| e.id)
    }

    /// Look up an entry by canonical id.
    pub fn lookup(&self, id: &str) -> Option<&'static DocEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The registry's primary document, returned when decoding misses.
    pub fn default_id(&self) -> &'static str {
        self.entries[0].id
    }
}

static CORE_REGISTRY: Registry = Registry {
    name: "core-docs",
    entries: CORE_DOCS,
};

static REPO_REGISTRY: Registry = Registry {
    name: "repo-docs",
    entries: REPO_DOCS,
};

/// Core platform guides, shipped in this repository under `docs/`.
const CORE_DOCS: &[DocEntry] = &[
    DocEntry {
        id: "lattice",
        source_path: "README.md",
        display_name: "Lattice Overview",
        description: "Introduction and overview of the Lattice platform",
    },
    DocEntry {
        id: "lattice/getting-started",
        source_path: "getting-started.md",
        display_name: "Getting Started",
        description: "First steps: installing Lattice and running a pipeline",
    },
    DocEntry {
        id: "lattice/config",
        source_path: "config.md",
        display_name: "Configuration",
        description: "Pipeline and node configuration reference",
    },
    DocEntry {
        id: "lattice/glossary",
        source_path: "glossary.md",
        display_name: "Glossary",
        description: "Definitions of Lattice terminology",
    },
    DocEntry {
        id: "lattice/examples",
        source_path: "examples.md",
        display_name: "Examples",
        description: "Worked examples of common Lattice pipelines",
    },
    DocEntry {
        id: "lattice/querying-data",
        source_path: "querying-data.md",
        display_name: "Querying Data",
        description: "Querying materialized datasets with SQL",
    },
    DocEntry {
        id: "lattice/troubleshooting",
        source_path: "troubleshooting.md",
        display_name: "Troubleshooting",
        description: "Diagnosing common pipeline and ingestion failures",
    },
    DocEntry {
        id: "lattice/udfs",
        source_path: "udfs.md",
        display_name: "User-Defined Functions",
        description: "Writing and registering user-defined functions",
    },
    DocEntry {
        id: "lattice/schemas/events",
        source_path: "schemas/events.md",
        display_name: "Events Schema",
        description: "Schema reference for the events dataset family",
    },
    DocEntry {
        id: "lattice/schemas/blocks",
        source_path: "schemas/blocks.md",
        display_name: "Blocks Schema",
        description: "Schema reference for the blocks dataset family",
    },
    DocEntry {
        id: "lattice/schemas/metrics",
        source_path: "schemas/metrics.md",
        display_name: "Metrics Schema",
        description: "Schema reference for derived metrics datasets",
    },
    DocEntry {
        id: "lattice/manifest-schemas",
        source_path: "manifest-schemas/README.md",
        display_name: "Manifest Schemas",
        description: "Dataset manifest schema reference",
    },
    DocEntry {
        id: "lattice/reorgs",
        source_path: "reorgs.md",
        display_name: "Reorg Handling",
        description: "How Lattice detects and repairs chain reorganizations",
    },
];

/// Site content from the Lattice repository, resolved against the configured
/// `repo_root` checkout.
const REPO_DOCS: &[DocEntry] = &[
    DocEntry {
        id: "lattice-repo",
        source_path: "README.md",
        display_name: "Lattice Main README",
        description: "Main installation and setup guide for Lattice",
    },
    DocEntry {
        id: "lattice-repo/references/concepts",
        source_path: "src/content/docs/References/concepts.md",
        display_name: "Core Concepts",
        description: "Technical overview and core concepts of the Lattice architecture",
    },
    DocEntry {
        id: "lattice-repo/references/operational-mode",
        source_path: "src/content/docs/References/operational-mode.md",
        display_name: "Operational Mode",
        description: "Understanding Lattice's operational modes",
    },
    DocEntry {
        id: "lattice-repo/how-to/single-node",
        source_path: "src/content/docs/How-to Guides/single-node.md",
        display_name: "Single Node Setup",
        description: "Guide to running Lattice in single-node development mode",
    },
    DocEntry {
        id: "lattice-repo/how-to/serverless-mode",
        source_path: "src/content/docs/How-to Guides/serverless-mode.md",
        display_name: "Serverless Mode",
        description: "Guide to deploying Lattice in serverless mode",
    },
    DocEntry {
        id: "lattice-repo/how-to/failover",
        source_path: "src/content/docs/How-to Guides/failover.md",
        display_name: "Failover Drill",
        description: "Guide to running a controlled failover drill",
    },
    DocEntry {
        id: "lattice-repo/quick-start/local",
        source_path: "src/content/docs/Quick Starts/quick-start-local.md",
        display_name: "Local Quick Start",
        description: "Quick start guide for local development with Docker",
    },
    DocEntry {
        id: "lattice-repo/quick-start/installer",
        source_path: "src/content/docs/Quick Starts/quick-start-installer.md",
        display_name: "Installer Quick Start",
        description: "Quick start guide using the latticeup installer",
    },
    DocEntry {
        id: "lattice-repo/docs",
        source_path: "src/content/docs/docs.md",
        display_name: "Documentation Index",
        description: "Main documentation index and overview",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_known_id() {
        let entry = Registry::core().lookup("lattice/config").expect("entry");
        assert_eq!(entry.source_path, "config.md");
        assert_eq!(entry.display_name, "Configuration");
    }

    #[test]
    fn lookup_unknown_id() {
        assert!(Registry::core().lookup("lattice/unknown").is_none());
        assert!(Registry::repo().lookup("lattice/config").is_none());
    }

    #[test]
    fn default_id_is_first_entry() {
        assert_eq!(Registry::core().default_id(), "lattice");
        assert_eq!(Registry::repo().default_id(), "lattice-repo");
    }

    #[test]
    fn ids_are_unique_within_each_registry() {
        for registry in [Registry::core(), Registry::repo()] {
            let ids: HashSet<_> = registry.ids().collect();
            assert_eq!(ids.len(), registry.entries().len(), "{}", registry.name());
        }
    }

    #[test]
    fn registries_never_share_ids() {
        let core: HashSet<_> = Registry::core().ids().collect();
        for id in Registry::repo().ids() {
            assert!(!core.contains(id), "shared id: {id}");
        }
    }

    #[test]
    fn ids_preserve_declaration_order() {
        let ids: Vec<_> = Registry::core().ids().collect();
        assert_eq!(ids[0], "lattice");
        assert_eq!(ids[1], "lattice/getting-started");
        assert_eq!(*ids.last().unwrap(), "lattice/reorgs");
    }

    #[test]
    fn corpus_selector_resolves() {
        assert_eq!(Registry::for_corpus(Corpus::Core).name(), "core-docs");
        assert_eq!(Registry::for_corpus(Corpus::Repo).name(), "repo-docs");
    }
}
