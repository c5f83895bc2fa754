//! Error handling types and utilities.
//!
//! Every variant is fatal: a lookup either completes or aborts the whole run.
//! Finding nothing is not an error and never surfaces here.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for delphi operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad command-line input, including an empty query.
    #[error("{0}")]
    Usage(String),

    #[error("Cannot find elm.json in project path ({})", path.display())]
    ManifestMissing { path: PathBuf },

    #[error("Failed to read {}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed manifest {}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No Elm home could be determined, so no package can be located.
    #[error(
        "Cannot locate documentation for '{package}': no Elm home configured (set ELM_HOME or pass --elm-home)"
    )]
    PackageStoreUnset { package: String },

    #[error("Documentation not found for '{package}' {version} at {}", path.display())]
    DocNotFound {
        package: String,
        version: String,
        path: PathBuf,
    },

    #[error("Failed to read documentation for '{package}' {version} at {}", path.display())]
    DocRead {
        package: String,
        version: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse documentation for '{package}' {version} at {}", path.display())]
    DocParse {
        package: String,
        version: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read source file {}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}
