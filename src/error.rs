//! Error types for graph queries and manifest loading
//!
//! Core queries fail with `ResolveError`; reading a manifest from disk fails
//! with `ManifestError`. Command code composes both through anyhow.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by dependency graph queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A query referenced a package that is not in the graph
    #[error("package '{name}' was not found in the dependency graph")]
    PackageNotFound { name: String },

    /// A traversal found a back edge on its active path
    #[error("circular dependency detected: {}", format_cycle(.path))]
    Cycle {
        /// Labels on the active path from the repeated vertex onward
        path: Vec<String>,
    },
}

impl ResolveError {
    /// Create a not-found error for the given package name
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::PackageNotFound { name: name.into() }
    }

    /// Create a cycle error from the looping portion of a traversal path
    pub fn cycle(path: Vec<String>) -> Self {
        Self::Cycle { path }
    }
}

/// Render a cycle path as `a -> b -> c -> a`
fn format_cycle(path: &[String]) -> String {
    match path.first() {
        Some(first) => format!("{} -> {}", path.join(" -> "), first),
        None => String::new(),
    }
}

/// Errors raised while loading a package manifest from disk
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file does not exist
    #[error("manifest not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The manifest file exists but could not be read
    #[error("failed to read manifest {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file is not a valid package manifest
    #[error("failed to parse manifest {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
