//! CLI argument parsing using clap derive macros

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    check::CheckCommand, delta::DeltaCommand, list::ListCommand, order::OrderCommand,
    rank::RankCommand,
};

/// depsolve - Package installation-order resolver
///
/// Reads a JSON package manifest and computes dependency-first
/// installation orders over it.
#[derive(Parser, Debug)]
#[command(name = "depsolve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the package manifest
    #[arg(
        long,
        short = 'm',
        global = true,
        env = "DEPSOLVE_MANIFEST",
        default_value = "packages.json"
    )]
    pub manifest: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all packages in the manifest
    List(ListCommand),

    /// Compute the installation order for a package
    Order(OrderCommand),

    /// Report what must still be installed for a package
    Delta(DeltaCommand),

    /// Show the package with the most dependencies
    Rank(RankCommand),

    /// Validate the manifest and its dependency graph
    Check(CheckCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        // Execute the subcommand
        match self.command {
            Commands::List(cmd) => cmd.execute(&self.manifest, self.verbose),
            Commands::Order(cmd) => cmd.execute(&self.manifest, self.verbose),
            Commands::Delta(cmd) => cmd.execute(&self.manifest, self.verbose),
            Commands::Rank(cmd) => cmd.execute(&self.manifest, self.verbose),
            Commands::Check(cmd) => cmd.execute(&self.manifest, self.verbose),
        }
    }
}
