//! elm.json parsing.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::IgnoredAny;
use std::path::Path;

pub const MANIFEST_FILE: &str = "elm.json";

/// Package name (`author/project`) to exact version, in manifest order.
pub type Dependencies = IndexMap<String, String>;

#[derive(Debug, Deserialize)]
struct ElmJson {
    dependencies: DependencySets,
}

#[derive(Debug, Deserialize)]
struct DependencySets {
    direct: Dependencies,
    /// Required for a well-formed manifest, but transitive packages cannot be
    /// imported, so they are never searched.
    #[serde(rename = "indirect")]
    _indirect: IgnoredAny,
}

/// Read the direct dependencies from a manifest.
pub fn load_direct_dependencies(manifest_path: &Path) -> Result<Dependencies> {
    if !manifest_path.is_file() {
        return Err(Error::ManifestMissing {
            path: manifest_path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(manifest_path).map_err(|source| Error::ManifestRead {
        path: manifest_path.to_path_buf(),
        source,
    })?;

    let direct = parse_direct_dependencies(&content).map_err(|source| Error::ManifestParse {
        path: manifest_path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        manifest = %manifest_path.display(),
        count = direct.len(),
        "Loaded direct dependencies"
    );

    Ok(direct)
}

fn parse_direct_dependencies(content: &str) -> serde_json::Result<Dependencies> {
    let manifest: ElmJson = serde_json::from_str(content)?;
    Ok(manifest.dependencies.direct)
}
