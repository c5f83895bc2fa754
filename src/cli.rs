use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_ELM_VERSION};

#[derive(Debug, Parser)]
#[command(name = "delphi", version)]
#[command(
    about = "Look up Elm functions and types in the documentation of a project's dependencies",
    long_about = None
)]
pub struct Cli {
    /// Elm file, relative to the project root, whose imports define the scope
    pub file: PathBuf,

    /// Function or type name, optionally qualified (`map`, `Dict.get`, `Html.`)
    pub query: String,

    /// Project root containing elm.json [default: current directory]
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Elm home holding the package cache [default: $ELM_HOME, %APPDATA%/elm, ~/.elm]
    #[arg(long)]
    pub elm_home: Option<PathBuf>,

    /// Compiler version whose package cache is read
    #[arg(long, default_value = DEFAULT_ELM_VERSION)]
    pub elm_version: String,

    /// Log each pipeline stage to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the lookup configuration, defaulting the project root to `cwd`.
    pub fn config(&self, cwd: PathBuf) -> Config {
        let mut config = Config::new(self.project.clone().unwrap_or(cwd))
            .with_elm_version(self.elm_version.clone());
        if let Some(elm_home) = &self.elm_home {
            config = config.with_elm_home(elm_home.clone());
        }
        config.with_env_defaults()
    }
}
