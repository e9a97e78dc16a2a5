//! DocBridge CLI — Lattice documentation for agent tooling.
//!
//! Resolves stable document identifiers to Markdown guides, aggregates
//! multi-document fetches, and searches the Admin API error catalog.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
