//! Package manifest parsing
//!
//! A manifest is a JSON document listing every package and its direct
//! dependencies:
//!
//! ```json
//! {
//!   "packages": [
//!     { "name": "A", "dependencies": ["B", "C"] },
//!     { "name": "B", "dependencies": ["D"] },
//!     { "name": "C", "dependencies": ["D"] },
//!     { "name": "D", "dependencies": [] }
//!   ]
//! }
//! ```
//!
//! Loading either fully succeeds or fails with a typed error; there is no
//! partial manifest.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::ManifestError;

/// Root structure of a package manifest
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Every package record in the manifest
    pub packages: Vec<PackageRecord>,
}

/// One package and its direct dependencies
#[derive(Debug, Clone, Deserialize)]
pub struct PackageRecord {
    /// Package name
    pub name: String,

    /// Names of the packages this one directly depends on
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Manifest {
    /// Load a manifest from a JSON file
    ///
    /// A missing file, an unreadable file, and malformed JSON each map to
    /// their own `ManifestError` variant so callers can tell them apart.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ManifestError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ManifestError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
