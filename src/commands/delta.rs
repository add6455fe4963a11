//! Delta command - Packages still needed given one already installed
//!
//! Usage:
//!   depsolve delta <PACKAGE> --installed <PACKAGE>
//!
//! Everything the installed package transitively reaches counts as present
//! and is left out of the reported order.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use console::style;

use crate::dependency::DependencyResolver;
use crate::manifest::Manifest;

/// Report what must still be installed for a package
#[derive(Args, Debug)]
pub struct DeltaCommand {
    /// Package to be installed
    pub package: String,

    /// Package (with its whole closure) already on the system
    #[arg(long, short = 'i')]
    pub installed: String,
}

impl DeltaCommand {
    /// Execute the delta command
    pub fn execute(self, manifest_path: &Path, verbose: bool) -> Result<()> {
        let manifest = Manifest::load(manifest_path)?;
        let resolver = DependencyResolver::from_records(&manifest.packages);

        let order = resolver.to_install(&self.package, &self.installed)?;

        println!(
            "Installing {} with {} already present:",
            style(&self.package).bold(),
            style(&self.installed).bold()
        );

        if order.is_empty() {
            println!("  ✓ already satisfied, nothing to install");
            return Ok(());
        }

        for (i, name) in order.iter().enumerate() {
            println!("  {}. {}", i + 1, name);
        }

        if verbose {
            println!("\n✓ {} package(s) to install", order.len());
        }

        Ok(())
    }
}
