// Single source of truth for all default values.

// --- Thesaurus ---
pub const DEFAULT_THESAURUS_PATH: &str = "model/cilin.txt";
pub const DEFAULT_FAIL_OPEN: bool = true;

// --- Scoring ---
// u: auxiliary particle, x: non-morpheme symbol, w: punctuation.
pub const DEFAULT_EXCLUDED_TAGS: &[&str] = &["u", "x", "w"];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
