//! Shared test fixtures for integration tests.
//!
//! [`TempWorkspace`] lays out an Elm project and a package cache side by side in
//! one temporary directory:
//!
//! ```text
//! <tmp>/project/elm.json
//! <tmp>/project/src/Main.elm
//! <tmp>/elm-home/0.19.0/package/<author>/<name>/<version>/documentation.json
//! ```

use delphi::Config;
use delphi::config::DEFAULT_ELM_VERSION;
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Documentation for a slice of elm/core.
pub const CORE_DOCS: &str = r#"[
    {
        "name": "List",
        "comment": "You can create a `List` in Elm with the `[1,2,3]` syntax.",
        "unions": [],
        "aliases": [],
        "binops": [],
        "values": [
            { "name": "map", "comment": " Apply a function to every element of a list.", "type": "(a -> b) -> List a -> List b" },
            { "name": "map2", "comment": " Combine two lists.", "type": "(a -> b -> result) -> List a -> List b -> List result" },
            { "name": "filter", "comment": " Keep elements that satisfy the test.", "type": "(a -> Bool) -> List a -> List a" }
        ]
    },
    {
        "name": "Maybe",
        "comment": "",
        "values": [
            { "name": "withDefault", "comment": " Provide a default value.", "type": "a -> Maybe a -> a" },
            { "name": "map", "comment": " Transform a Maybe value.", "type": "(a -> b) -> Maybe a -> Maybe b" }
        ]
    },
    {
        "name": "Basics",
        "comment": "",
        "values": [
            { "name": "identity", "comment": " Given a value, returns exactly the same value.", "type": "a -> a" },
            { "name": "max", "comment": " Find the larger of two comparables.", "type": "comparable -> comparable -> comparable" }
        ]
    },
    {
        "name": "Platform.Cmd",
        "comment": "",
        "values": [
            { "name": "batch", "comment": " Batch commands together.", "type": "List (Cmd msg) -> Cmd msg" },
            { "name": "none", "comment": " Tell the runtime there are no commands.", "type": "Cmd msg" }
        ]
    },
    {
        "name": "Dict",
        "comment": "",
        "values": [
            { "name": "get", "comment": " Get the value associated with a key.", "type": "comparable -> Dict comparable v -> Maybe v" },
            { "name": "map", "comment": " Apply a function to all values.", "type": "(k -> a -> b) -> Dict k a -> Dict k b" },
            { "name": "member", "comment": " Determine if a key is in a dictionary.", "type": "comparable -> Dict comparable v -> Bool" }
        ]
    }
]"#;

/// Documentation for a slice of elm/html.
pub const HTML_DOCS: &str = r#"[
    {
        "name": "Html.Attributes",
        "comment": "",
        "values": [
            { "name": "class", "comment": " Often used with CSS.", "type": "String -> Html.Attribute msg" },
            { "name": "classList", "comment": " Toggle classes.", "type": "List ( String, Bool ) -> Html.Attribute msg" }
        ]
    },
    {
        "name": "Html",
        "comment": "",
        "values": [
            { "name": "div", "comment": " Generic container.", "type": "List (Attribute msg) -> List (Html msg) -> Html msg" },
            { "name": "text", "comment": " Just put plain text in the DOM.", "type": "String -> Html msg" }
        ]
    }
]"#;

/// A temporary Elm project with its own package cache.
pub struct TempWorkspace {
    _temp: TempDir,
    project: PathBuf,
    elm_home: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates an empty project directory and an empty Elm home.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let project = temp.path().join("project");
        let elm_home = temp.path().join("elm-home");
        std::fs::create_dir_all(&project).expect("Failed to create project directory");
        std::fs::create_dir_all(&elm_home).expect("Failed to create Elm home");
        Self {
            _temp: temp,
            project,
            elm_home,
        }
    }

    /// A project depending on elm/core 1.0.0 and elm/html 1.0.0, both installed.
    pub fn with_core_and_html() -> Self {
        let workspace = Self::new();
        workspace.write_manifest(&[("elm/core", "1.0.0"), ("elm/html", "1.0.0")], &[]);
        workspace.install_package("elm/core", "1.0.0", CORE_DOCS);
        workspace.install_package("elm/html", "1.0.0", HTML_DOCS);
        workspace
    }

    pub fn project(&self) -> &Path {
        &self.project
    }

    pub fn elm_home(&self) -> &Path {
        &self.elm_home
    }

    /// Configuration pointing at this workspace's project and Elm home.
    pub fn config(&self) -> Config {
        Config::new(&self.project).with_elm_home(&self.elm_home)
    }

    /// Writes a file relative to the project root, creating parent directories.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.project.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }

    /// Writes an application elm.json with the given dependency sets.
    pub fn write_manifest(&self, direct: &[(&str, &str)], indirect: &[(&str, &str)]) {
        let to_object = |deps: &[(&str, &str)]| {
            deps.iter()
                .map(|(name, version)| ((*name).to_string(), serde_json::json!(version)))
                .collect::<serde_json::Map<_, _>>()
        };
        let manifest = serde_json::json!({
            "type": "application",
            "source-directories": ["src"],
            "elm-version": DEFAULT_ELM_VERSION,
            "dependencies": {
                "direct": to_object(direct),
                "indirect": to_object(indirect),
            },
            "test-dependencies": { "direct": {}, "indirect": {} }
        });
        self.create_file("elm.json", &manifest.to_string());
    }

    /// Places a documentation index in the package cache.
    pub fn install_package(&self, package: &str, version: &str, docs: &str) {
        let dir = self
            .elm_home
            .join(DEFAULT_ELM_VERSION)
            .join("package")
            .join(package)
            .join(version);
        std::fs::create_dir_all(&dir).expect("Failed to create package directory");
        std::fs::write(dir.join("documentation.json"), docs)
            .expect("Failed to write documentation.json");
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// A project with elm/core and elm/html installed.
#[fixture]
pub fn workspace() -> TempWorkspace {
    TempWorkspace::with_core_and_html()
}
