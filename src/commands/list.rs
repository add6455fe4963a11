//! List command - Show every package in the manifest
//!
//! Usage:
//!   depsolve list                    # All package names, sorted
//!   depsolve list --format json      # Output as JSON
//!   depsolve list --verbose          # Also show dependencies and sources

use std::path::Path;

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;

use crate::commands::OutputFormat;
use crate::dependency::DependencyResolver;
use crate::manifest::Manifest;

/// List all packages in the manifest
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Output format: text, json
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Root structure for JSON output
#[derive(Serialize, Debug)]
struct ListJson {
    manifest: String,
    package_count: usize,
    dependency_count: usize,
    packages: Vec<PackageJson>,
}

/// One package entry for JSON output
#[derive(Serialize, Debug)]
struct PackageJson {
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<String>,
}

impl ListCommand {
    /// Execute the list command
    pub fn execute(self, manifest_path: &Path, verbose: bool) -> Result<()> {
        let manifest = Manifest::load(manifest_path)?;
        let resolver = DependencyResolver::from_records(&manifest.packages);
        let graph = resolver.graph();

        // Walk graph vertices rather than manifest records so packages that
        // appear only as dependencies are listed too.
        let packages: Vec<PackageJson> = graph
            .sorted_vertices()
            .into_iter()
            .map(|name| PackageJson {
                name: name.to_string(),
                dependencies: graph.neighbors_of(name).unwrap_or(&[]).to_vec(),
            })
            .collect();

        if self.format == OutputFormat::Json {
            let output = ListJson {
                manifest: manifest_path.display().to_string(),
                package_count: graph.order(),
                dependency_count: graph.size(),
                packages,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!("{}", "=".repeat(80));
        println!("Packages in {}", manifest_path.display());
        println!("{}", "=".repeat(80));
        println!();

        for package in &packages {
            if verbose && !package.dependencies.is_empty() {
                println!(
                    "  {} -> {}",
                    style(&package.name).bold(),
                    package.dependencies.join(", ")
                );
            } else {
                println!("  {}", style(&package.name).bold());
            }
        }

        println!(
            "\n{} package(s), {} dependency edge(s)",
            graph.order(),
            graph.size()
        );

        if verbose {
            let sources = resolver.source_packages();
            if !sources.is_empty() {
                println!(
                    "Source packages (nothing depends on them): {}",
                    sources.join(", ")
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_json_keeps_dependencies() {
        let package = PackageJson {
            name: "app".to_string(),
            dependencies: vec!["lib".to_string()],
        };
        let value = serde_json::to_value(&package).unwrap();
        assert_eq!(value["name"], "app");
        assert_eq!(value["dependencies"], serde_json::json!(["lib"]));
    }

    #[test]
    fn test_package_json_omits_empty_dependencies() {
        let package = PackageJson {
            name: "leaf".to_string(),
            dependencies: Vec::new(),
        };
        let value = serde_json::to_value(&package).unwrap();
        assert!(value.get("dependencies").is_none());
    }
}
