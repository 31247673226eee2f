/// Cilin engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exact length of a semantic code, in ASCII characters.
pub const SEMANTIC_CODE_LEN: usize = 8;

/// Highest raw agreement two codes can reach (sum of all level weights).
pub const MAX_AGREEMENT: u8 = 10;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "CILIN_LOG";

/// Span names as constants for programmatic use.
pub mod spans {
    pub const THESAURUS_LOAD: &str = "cilin.thesaurus.load";
    pub const TEXT_SIMILARITY: &str = "cilin.text_similarity";
    pub const RANK: &str = "cilin.rank";
}
