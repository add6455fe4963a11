//! depsolve CLI - Package installation-order resolver
//!
//! Reads a JSON package manifest, builds the directed dependency graph,
//! and answers installation-order queries from the command line.
//!
//! ## Architecture
//!
//! ```text
//! CLI → manifest (JSON) → dependency graph → iterative resolver
//! ```

mod cli;
mod commands;
mod dependency;
mod error;
mod manifest;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
