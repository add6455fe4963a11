//! Rank command - Find the package with the most dependencies
//!
//! Usage:
//!   depsolve rank               # Package with the longest installation order
//!   depsolve rank --verbose     # Include the per-package counts

use std::path::Path;

use anyhow::Result;
use clap::Args;
use console::style;

use crate::dependency::DependencyResolver;
use crate::manifest::Manifest;

/// Show the package with the most dependencies
#[derive(Args, Debug)]
pub struct RankCommand {}

impl RankCommand {
    /// Execute the rank command
    pub fn execute(self, manifest_path: &Path, verbose: bool) -> Result<()> {
        let manifest = Manifest::load(manifest_path)?;
        let resolver = DependencyResolver::from_records(&manifest.packages);

        if verbose {
            let mut counts = resolver.dependency_counts()?;
            // Stable sort keeps ties in label order.
            counts.sort_by(|a, b| b.1.cmp(&a.1));

            println!("Installation-order length per package:");
            for (name, count) in counts {
                println!("  {:>4}  {}", count, name);
            }
            println!();
        }

        match resolver.package_with_max_dependencies()? {
            Some(name) => {
                let count = resolver.installation_order(&name)?.len();
                println!(
                    "{} pulls in the most packages: {} (including itself)",
                    style(&name).bold(),
                    count
                );
            }
            None => println!("ℹ️  No packages in {}", manifest_path.display()),
        }

        Ok(())
    }
}
