//! Import statement extraction.
//!
//! Elm source is not parsed; import statements are recognised line by line.
//! The supported grammar is a subset of Elm's:
//!
//! ```text
//! import <Module>[ as <Alias>][ exposing (<entry>, <entry>, ...)][ -- comment]
//! ```
//!
//! - The statement must start at column 0 and fit on one line. Imports that
//!   elm-format wraps over several lines are not recognised.
//! - `<Module>` is a dotted path of capitalised segments (`Platform.Cmd`),
//!   `<Alias>` a single capitalised identifier.
//! - Entries are split on commas that are not nested in parentheses, so
//!   `Maybe(Just, Nothing)` stays one entry. Entries are kept as opaque strings.
//! - An entry equal to `..` exposes the whole module.
//! - Block comments are not tracked: a commented-out import at column 0 still
//!   counts.

use regex::Regex;
use std::sync::LazyLock;

/// Imports every Elm module starts with, before its own.
pub const PRELUDE: &str = "import Basics exposing (..)
import List exposing (List, (::))
import Maybe exposing (Maybe(..))
import Result exposing (Result(..))
import String exposing (String)
import Char exposing (Char)
import Tuple

import Debug

import Platform exposing ( Program )
import Platform.Cmd as Cmd exposing ( Cmd )
import Platform.Sub as Sub exposing ( Sub )
";

static IMPORT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^import[ \t]+(?P<module>[A-Z]\w*(?:\.[A-Z]\w*)*)(?:[ \t]+as[ \t]+(?P<alias>[A-Z]\w*))?(?P<rest>[^\r\n]*)\r?$",
    )
    .expect("import header pattern is valid")
});

/// What an import brings into unqualified scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exposing {
    /// No exposing clause: only qualified access.
    Nothing,
    /// `exposing (..)`
    Everything,
    /// An explicit list, entries trimmed and in source order.
    Names(Vec<String>),
}

impl Exposing {
    /// Whether an unqualified lookup of `name` should search this import.
    ///
    /// Entries are matched by prefix in the direction `entry.starts_with(name)`,
    /// so a partial query reaches constructor entries such as `Maybe(..)`.
    pub fn admits(&self, name: &str) -> bool {
        match self {
            Self::Nothing => false,
            Self::Everything => true,
            Self::Names(entries) => entries.iter().any(|entry| entry.starts_with(name)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    /// Canonical module name, e.g. `Platform.Cmd`.
    pub module_name: String,
    /// Local name; equal to `module_name` when there is no `as` clause.
    pub alias: String,
    pub exposing: Exposing,
}

/// Prepend the default imports to a module's source text.
pub fn with_prelude(source: &str) -> String {
    let mut text = String::with_capacity(PRELUDE.len() + source.len());
    text.push_str(PRELUDE);
    text.push_str(source);
    text
}

/// All imports visible in `source`, prelude first.
pub fn imports_in_scope(source: &str) -> Vec<ImportDeclaration> {
    parse_imports(&with_prelude(source))
}

/// Extract import declarations in order of appearance. Lines outside the
/// grammar are skipped.
pub fn parse_imports(text: &str) -> Vec<ImportDeclaration> {
    IMPORT_HEADER
        .captures_iter(text)
        .filter_map(|caps| {
            let module_name = caps["module"].to_string();
            let alias = caps
                .name("alias")
                .map_or_else(|| module_name.clone(), |m| m.as_str().to_string());
            let exposing = parse_tail(&caps["rest"])?;
            Some(ImportDeclaration {
                module_name,
                alias,
                exposing,
            })
        })
        .collect()
}

/// Parse what follows the module name and alias. `None` rejects the line.
fn parse_tail(rest: &str) -> Option<Exposing> {
    if rest.trim().is_empty() {
        return Some(Exposing::Nothing);
    }
    if !rest.starts_with([' ', '\t']) {
        return None;
    }

    let rest = rest.trim_start();
    if is_comment(rest) {
        return Some(Exposing::Nothing);
    }

    let list = rest.strip_prefix("exposing")?.trim_start();
    let (inner, after) = balanced_parens(list)?;
    if !(after.trim().is_empty() || is_comment(after.trim_start())) {
        return None;
    }

    let entries = split_entries(inner);
    if entries.iter().any(|entry| entry == "..") {
        Some(Exposing::Everything)
    } else {
        Some(Exposing::Names(entries))
    }
}

fn is_comment(text: &str) -> bool {
    text.starts_with("--")
}

/// Split `(…)` off the front of `text`, returning the inside and the remainder.
/// `None` when the parentheses do not close on this line.
fn balanced_parens(text: &str) -> Option<(&str, &str)> {
    let body = text.strip_prefix('(')?;
    let mut depth = 1usize;
    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&body[..i], &body[i + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}

fn split_entries(inner: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                entries.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&inner[start..]);

    entries
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
