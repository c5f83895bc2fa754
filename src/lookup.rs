//! The lookup pipeline: manifest, documentation, imports, resolution.

use crate::config::Config;
use crate::docs::Documentation;
use crate::error::{Error, Result};
use crate::imports::{ImportDeclaration, imports_in_scope};
use crate::manifest::load_direct_dependencies;
use crate::query::{Query, classify};
use crate::resolve::{SearchResult, resolve};
use std::path::Path;

/// Everything a query is resolved against, loaded once.
#[derive(Debug)]
pub struct LookupContext {
    pub docs: Documentation,
    pub imports: Vec<ImportDeclaration>,
}

impl LookupContext {
    /// Load the project's direct dependencies' documentation and the imports in
    /// scope in `file`.
    pub fn load(config: &Config, file: &Path) -> Result<Self> {
        let dependencies = load_direct_dependencies(&config.manifest_path())?;
        let docs = config.package_store().load_documentation(&dependencies)?;
        tracing::debug!(
            packages = dependencies.len(),
            modules = docs.len(),
            "Documentation loaded"
        );

        let source_path = config.source_path(file);
        let source = std::fs::read_to_string(&source_path).map_err(|source| Error::SourceRead {
            path: source_path.clone(),
            source,
        })?;
        let imports = imports_in_scope(&source);
        tracing::debug!(
            file = %source_path.display(),
            imports = imports.len(),
            "Imports parsed"
        );

        Ok(Self { docs, imports })
    }

    pub fn resolve(&self, query: &Query) -> Vec<SearchResult> {
        resolve(&self.docs, &self.imports, query)
    }
}

/// Resolve `query` as it would be seen from inside `file`.
///
/// The query is classified before any file is read, so a bad query fails fast.
pub fn lookup(config: &Config, file: &Path, query: &str) -> Result<Vec<SearchResult>> {
    let query = classify(query)?;
    let context = LookupContext::load(config, file)?;
    let results = context.resolve(&query);
    tracing::debug!(%query, results = results.len(), "Lookup complete");
    Ok(results)
}
