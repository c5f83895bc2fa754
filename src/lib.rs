pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod imports;
pub mod lookup;
pub mod manifest;
pub mod query;
pub mod resolve;
pub mod tracing;

pub use config::Config;
pub use docs::{DocModule, DocValue, Documentation, PackageStore};
pub use error::{Error, Result};
pub use imports::{Exposing, ImportDeclaration};
pub use lookup::{LookupContext, lookup};
pub use query::{Query, classify};
pub use resolve::{SearchResult, resolve};
