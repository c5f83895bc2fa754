//! Where the project and the installed packages live.

use crate::docs::PackageStore;
use crate::manifest::MANIFEST_FILE;
use std::path::{Path, PathBuf};

/// Compiler version whose package store is read when none is given.
pub const DEFAULT_ELM_VERSION: &str = "0.19.0";

/// Environment variable overriding the Elm home directory.
pub const ELM_HOME_VAR: &str = "ELM_HOME";

/// Resolved locations for one lookup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding elm.json; source paths are relative to it.
    pub project_root: PathBuf,
    /// Base of the package cache, e.g. `~/.elm`.
    pub elm_home: Option<PathBuf>,
    /// Toolchain segment of the package store path.
    pub elm_version: String,
}

impl Config {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            elm_home: None,
            elm_version: DEFAULT_ELM_VERSION.to_string(),
        }
    }

    #[must_use]
    pub fn with_elm_home(mut self, elm_home: impl Into<PathBuf>) -> Self {
        self.elm_home = Some(elm_home.into());
        self
    }

    #[must_use]
    pub fn with_elm_version(mut self, elm_version: impl Into<String>) -> Self {
        self.elm_version = elm_version.into();
        self
    }

    /// Fill in the Elm home from the environment unless already set.
    #[must_use]
    pub fn with_env_defaults(mut self) -> Self {
        if self.elm_home.is_none() {
            self.elm_home = default_elm_home();
        }
        self
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.project_root.join(MANIFEST_FILE)
    }

    /// Resolve a source file argument. Absolute paths are kept as-is.
    pub fn source_path(&self, file: &Path) -> PathBuf {
        self.project_root.join(file)
    }

    /// `<elm home>/<elm version>/package`
    pub fn package_store(&self) -> PackageStore {
        self.elm_home.as_ref().map_or_else(PackageStore::unavailable, |home| {
            PackageStore::new(home.join(&self.elm_version).join("package"))
        })
    }
}

/// `$ELM_HOME`, else `%APPDATA%/elm`, else `~/.elm`.
fn default_elm_home() -> Option<PathBuf> {
    let from_env = |var: &str| {
        std::env::var_os(var)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    };

    from_env(ELM_HOME_VAR)
        .or_else(|| from_env("APPDATA").map(|appdata| appdata.join("elm")))
        .or_else(|| dirs::home_dir().map(|home| home.join(".elm")))
}
