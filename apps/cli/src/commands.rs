//! CLI command definitions, routing, and tracing setup.

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

use docbridge_core::DocService;
use docbridge_docs::Corpus;
use docbridge_shared::{init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// DocBridge — Lattice documentation for agents.
#[derive(Parser)]
#[command(
    name = "docbridge",
    version,
    about = "Resolve, aggregate, and search Lattice documentation and Admin API errors.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Documentation corpus to operate on.
    #[arg(long, default_value = "core", global = true)]
    pub corpus: CorpusArg,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Corpus selector for document subcommands.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum CorpusArg {
    /// Platform guides shipped under docs/.
    Core,
    /// Site content from the Lattice repository checkout.
    Repo,
}

impl From<CorpusArg> for Corpus {
    fn from(arg: CorpusArg) -> Self {
        match arg {
            CorpusArg::Core => Corpus::Core,
            CorpusArg::Repo => Corpus::Repo,
        }
    }
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// List the documents in the corpus (id, name, description).
    List,

    /// Resolve a transport id and print the document it names.
    Resolve {
        /// Flattened identifier, e.g. lattice-schemas-events.
        transport_id: String,
    },

    /// Print transport-id completions for a partial identifier.
    Complete {
        /// Identifier prefix (case-insensitive).
        prefix: String,
    },

    /// Fetch the selected documents, concatenated in the given order.
    Cat {
        /// Canonical ids, e.g. lattice lattice/config lattice/udfs.
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Fetch the whole corpus as one headed document.
    CatAll,

    /// Print resource links for the selected documents.
    Links {
        /// Canonical ids to link.
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Look up Admin API errors by (partial) error code.
    Error {
        /// Error code or fragment, e.g. DATASET_NOT_FOUND or not_found.
        code: String,
    },

    /// List every Admin API error for an endpoint.
    Endpoint {
        /// Endpoint path or fragment, e.g. /jobs.
        path: String,
    },

    /// Print a digest of the whole Admin API error catalog.
    ErrorsSummary,

    /// Write a default config file at ~/.docbridge/docbridge.toml.
    Init,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "docbridge=info",
        1 => "docbridge=debug",
        _ => "docbridge=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    if let Command::Init = cli.command {
        let path = init_config()?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let config = load_config()?;
    let service = DocService::new(&config);
    let corpus = Corpus::from(cli.corpus);
    tracing::debug!(corpus = ?cli.corpus, "service ready");

    let output = match cli.command {
        Command::List => {
            let mut lines = Vec::new();
            for entry in service.list(corpus) {
                lines.push(format!(
                    "{:<40} {} — {}",
                    entry.id, entry.display_name, entry.description
                ));
            }
            lines.join("\n")
        }
        Command::Resolve { transport_id } => service.resolve_and_fetch(corpus, &transport_id).await,
        Command::Complete { prefix } => service.complete(corpus, &prefix).join("\n"),
        Command::Cat { ids } => service.fetch_selected(corpus, &ids).await,
        Command::CatAll => service.fetch_all(corpus).await,
        Command::Links { ids } => service.doc_links(corpus, &ids),
        Command::Error { code } => service.lookup_error(&code).await,
        Command::Endpoint { path } => service.errors_for_endpoint(&path).await,
        Command::ErrorsSummary => service.all_errors_summary().await,
        Command::Init => unreachable!("handled above"),
    };

    println!("{output}");
    Ok(())
}
