//! Test fixture loader for the sample thesaurus and golden similarity cases.
//!
//! Fixture files live in the workspace-level `test-fixtures/` directory so every
//! crate's tests can share them.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Relative path of the sample thesaurus.
pub const MINI_CILIN: &str = "cilin/mini_cilin.txt";

/// Relative path of the golden similarity cases.
pub const GOLDEN_CASES: &str = "golden/similarity_cases.json";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Read a fixture file as text.
///
/// # Panics
/// Panics if the file doesn't exist or isn't UTF-8.
pub fn load_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = load_text(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

/// Text of the sample thesaurus.
pub fn mini_cilin() -> String {
    load_text(MINI_CILIN)
}

/// One expected word-to-word score.
#[derive(Debug, Clone, Deserialize)]
pub struct WordCase {
    pub left: String,
    pub right: String,
    pub expected: f64,
    #[serde(default)]
    pub note: String,
}

/// One expected text-to-text score. Texts use `word/tag` notation.
#[derive(Debug, Clone, Deserialize)]
pub struct TextCase {
    pub left: String,
    pub right: String,
    pub expected: f64,
}

/// Golden cases scored against [`MINI_CILIN`].
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCases {
    pub word_pairs: Vec<WordCase>,
    pub text_pairs: Vec<TextCase>,
}

pub fn golden_cases() -> GoldenCases {
    load_fixture(GOLDEN_CASES)
}
