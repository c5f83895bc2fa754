//! Query classification.

use crate::error::{Error, Result};
use std::fmt;

/// A lookup request: a bare name, or a name behind a module qualifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `map`
    Unqualified { name: String },
    /// `Dict.map` or `Html.Attributes.cl`. `module_path` is compared with import
    /// aliases verbatim, dots included.
    Qualified { module_path: String, name: String },
}

impl Query {
    /// The final segment, matched as a prefix of value names.
    pub fn name(&self) -> &str {
        match self {
            Self::Unqualified { name } | Self::Qualified { name, .. } => name,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unqualified { name } => write!(f, "{}", name),
            Self::Qualified { module_path, name } => write!(f, "{}.{}", module_path, name),
        }
    }
}

/// Split a dotted query into qualifier and name.
///
/// A trailing dot (`List.`) leaves an empty name, which matches every value of
/// the module.
pub fn classify(query: &str) -> Result<Query> {
    if query.is_empty() {
        return Err(Error::usage(
            "A query is required. Either a function or a type name.",
        ));
    }

    match query.rsplit_once('.') {
        None => Ok(Query::Unqualified {
            name: query.to_string(),
        }),
        Some((module_path, name)) => Ok(Query::Qualified {
            module_path: module_path.to_string(),
            name: name.to_string(),
        }),
    }
}
