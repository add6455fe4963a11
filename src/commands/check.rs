//! Check command - Validate the manifest's dependency graph
//!
//! Loads the manifest, rebuilds the graph, and verifies that a complete
//! installation order exists. Exits non-zero when the graph is cyclic.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use clap::Args;
use console::style;

use crate::dependency::DependencyResolver;
use crate::error::ResolveError;
use crate::manifest::Manifest;

/// Validate the manifest and its dependency graph
#[derive(Args, Debug)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(self, manifest_path: &Path, verbose: bool) -> Result<()> {
        println!("🔍 Checking {}...\n", manifest_path.display());

        let manifest = Manifest::load(manifest_path)?;
        let resolver = DependencyResolver::from_records(&manifest.packages);
        let graph = resolver.graph();

        println!(
            "  ✅ Manifest parsed: {} package record(s)",
            manifest.packages.len()
        );
        println!(
            "  ✅ Graph built: {} package(s), {} dependency edge(s)",
            graph.order(),
            graph.size()
        );

        let sources = resolver.source_packages();
        if sources.is_empty() {
            println!("  ℹ️  No source packages (every package is depended on)");
        } else {
            println!("  ℹ️  Source package(s): {}", sources.join(", "));
        }

        // Packages that only ever appear on the right-hand side of a
        // dependency list have no record of their own.
        let declared: HashSet<&str> = manifest
            .packages
            .iter()
            .map(|record| record.name.as_str())
            .collect();
        let mut warnings = 0;
        for name in graph.sorted_vertices() {
            if !declared.contains(name) {
                println!(
                    "  ⚠️  {} is only referenced as a dependency, never declared",
                    name
                );
                warnings += 1;
            }
        }

        match resolver.installation_order_for_all() {
            Ok(order) => {
                println!("  ✅ No circular dependencies");

                if verbose && !order.is_empty() {
                    println!("\nFull installation order:");
                    for (i, name) in order.iter().enumerate() {
                        println!("  {}. {}", i + 1, name);
                    }
                }

                if warnings > 0 {
                    println!("\n⚠️  Check passed with {} warning(s)", warnings);
                } else {
                    println!("\n✓ Check passed");
                }
                Ok(())
            }
            Err(err @ ResolveError::Cycle { .. }) => {
                println!("  ❌ {}", style(&err).red());
                println!("\n✗ Check failed");
                std::process::exit(1);
            }
            Err(err) => Err(err.into()),
        }
    }
}
