//! Package documentation indices and the package store they live in.
//!
//! Every installed package version carries a `documentation.json` generated by
//! the Elm compiler: an array of modules, each listing its documented values.
//! Union types, aliases and operators in the same file are not read.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DOCUMENTATION_FILE: &str = "documentation.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocValue {
    pub name: String,
    pub comment: String,
    /// Type signature, e.g. `(a -> b) -> List a -> List b`.
    #[serde(rename = "type")]
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocModule {
    pub name: String,
    pub comment: String,
    pub values: Vec<DocValue>,
}

/// Every module of every loaded package, in load order.
///
/// Built once per run by [`PackageStore::load_documentation`] and handed to the
/// resolver by reference.
#[derive(Debug, Clone, Default)]
pub struct Documentation {
    modules: Vec<DocModule>,
}

impl Documentation {
    pub fn new(modules: Vec<DocModule>) -> Self {
        Self { modules }
    }

    /// Modules with exactly this name. Usually one; two packages exposing the
    /// same module name yield both.
    pub fn modules_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DocModule> + 'a {
        self.modules.iter().filter(move |module| module.name == name)
    }

    pub fn modules(&self) -> &[DocModule] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    fn extend(&mut self, modules: Vec<DocModule>) {
        self.modules.extend(modules);
    }
}

/// The directory packages are installed into, e.g. `~/.elm/0.19.0/package`.
///
/// `root` is `None` when no Elm home could be determined; every load then fails.
#[derive(Debug, Clone)]
pub struct PackageStore {
    root: Option<PathBuf>,
}

impl PackageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub const fn unavailable() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Path of a package version's documentation index.
    pub fn doc_path(&self, package: &str, version: &str) -> Option<PathBuf> {
        self.root.as_ref().map(|root| {
            let mut path = root.clone();
            // `author/project` becomes two directory levels
            path.extend(package.split('/'));
            path.push(version);
            path.push(DOCUMENTATION_FILE);
            path
        })
    }

    /// Load one package version's modules.
    pub fn load_package(&self, package: &str, version: &str) -> Result<Vec<DocModule>> {
        let path = self
            .doc_path(package, version)
            .ok_or_else(|| Error::PackageStoreUnset {
                package: package.to_string(),
            })?;

        if !path.is_file() {
            return Err(Error::DocNotFound {
                package: package.to_string(),
                version: version.to_string(),
                path,
            });
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(source) => {
                return Err(Error::DocRead {
                    package: package.to_string(),
                    version: version.to_string(),
                    path,
                    source,
                });
            }
        };

        let modules: Vec<DocModule> = match serde_json::from_str(&content) {
            Ok(modules) => modules,
            Err(source) => {
                return Err(Error::DocParse {
                    package: package.to_string(),
                    version: version.to_string(),
                    path,
                    source,
                });
            }
        };

        tracing::debug!(
            package,
            version,
            modules = modules.len(),
            "Loaded documentation"
        );

        Ok(modules)
    }

    /// Load and concatenate the documentation of every dependency, in the
    /// order given. The first failure aborts the whole load.
    pub fn load_documentation<'a, I>(&self, dependencies: I) -> Result<Documentation>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut docs = Documentation::default();
        for (package, version) in dependencies {
            docs.extend(self.load_package(package, version)?);
        }
        Ok(docs)
    }
}
