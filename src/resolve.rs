//! Resolving a classified query against the imports in scope.
//!
//! Results keep encounter order: modules in documentation load order, values in
//! the order their module documents them. Nothing is ranked or deduplicated.

use crate::docs::{DocValue, Documentation};
use crate::imports::ImportDeclaration;
use crate::query::Query;
use serde::Serialize;

/// Link attached to every result.
pub const REFERENCE_LINK: &str = "http://elm-lang.org";

/// One matched value, in the shape editor integrations for elm-oracle expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub name: String,
    /// `<canonical module>.<name>`
    pub full_name: String,
    pub href: String,
    pub signature: String,
    pub comment: String,
}

impl SearchResult {
    fn new(module_name: &str, value: &DocValue) -> Self {
        Self {
            name: value.name.clone(),
            full_name: format!("{}.{}", module_name, value.name),
            href: REFERENCE_LINK.to_string(),
            signature: value.signature.clone(),
            comment: value.comment.clone(),
        }
    }
}

/// Modules a query should search, as canonical names.
///
/// A qualified query goes to the first import whose alias is the qualifier; an
/// unknown qualifier selects nothing. An unqualified query goes to every import
/// that exposes everything or has an exposed entry starting with the name, one
/// entry per matching import.
pub fn modules_to_search<'a>(imports: &'a [ImportDeclaration], query: &Query) -> Vec<&'a str> {
    match query {
        Query::Qualified { module_path, .. } => imports
            .iter()
            .find(|import| import.alias == *module_path)
            .map(|import| vec![import.module_name.as_str()])
            .unwrap_or_default(),
        Query::Unqualified { name } => imports
            .iter()
            .filter(|import| import.exposing.admits(name))
            .map(|import| import.module_name.as_str())
            .collect(),
    }
}

/// Values of `module_name` whose names start with `prefix` (case-sensitive).
pub fn search_module(docs: &Documentation, module_name: &str, prefix: &str) -> Vec<SearchResult> {
    docs.modules_named(module_name)
        .flat_map(|module| {
            module
                .values
                .iter()
                .filter(|value| value.name.starts_with(prefix))
                .map(|value| SearchResult::new(module_name, value))
        })
        .collect()
}

pub fn resolve(
    docs: &Documentation,
    imports: &[ImportDeclaration],
    query: &Query,
) -> Vec<SearchResult> {
    let modules = modules_to_search(imports, query);
    tracing::debug!(%query, ?modules, "Resolved modules to search");

    modules
        .into_iter()
        .flat_map(|module_name| search_module(docs, module_name, query.name()))
        .collect()
}
