//! Order command - Compute installation orders
//!
//! Usage:
//!   depsolve order <PACKAGE>         # Order for one package and its closure
//!   depsolve order --all             # One order covering every package
//!   depsolve order <PKG> -f json     # Output as JSON

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use serde::Serialize;

use crate::commands::OutputFormat;
use crate::dependency::DependencyResolver;
use crate::manifest::Manifest;

/// Compute the installation order for a package
#[derive(Args, Debug)]
pub struct OrderCommand {
    /// Package to compute the order for
    pub package: Option<String>,

    /// Compute one order covering every package in the manifest
    #[arg(long, conflicts_with = "package")]
    pub all: bool,

    /// Output format: text, json
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Root structure for JSON output
#[derive(Serialize, Debug)]
struct OrderJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    package: Option<String>,
    count: usize,
    order: Vec<String>,
}

impl OrderCommand {
    /// Execute the order command
    pub fn execute(self, manifest_path: &Path, verbose: bool) -> Result<()> {
        let manifest = Manifest::load(manifest_path)?;
        let resolver = DependencyResolver::from_records(&manifest.packages);

        let (package, order) = match self.package {
            Some(ref name) => (Some(name.clone()), resolver.installation_order(name)?),
            None if self.all => (None, resolver.installation_order_for_all()?),
            None => bail!("provide a package name or use --all"),
        };

        if self.format == OutputFormat::Json {
            let output = OrderJson {
                package,
                count: order.len(),
                order,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        match package {
            Some(ref name) => println!("Installation order for {}:", style(name).bold()),
            None => println!(
                "Installation order for all {} package(s):",
                resolver.graph().order()
            ),
        }

        if order.is_empty() {
            println!("  (nothing to install)");
            return Ok(());
        }

        for (i, name) in order.iter().enumerate() {
            println!("  {}. {}", i + 1, name);
        }

        if verbose {
            println!("\n✓ {} package(s) in order", order.len());
        }

        Ok(())
    }
}
