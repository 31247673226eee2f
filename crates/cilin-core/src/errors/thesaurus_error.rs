/// Thesaurus loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ThesaurusError {
    #[error("thesaurus source unavailable: {path}: {reason}")]
    SourceUnavailable { path: String, reason: String },

    #[error("read failed at line {line}: {reason}")]
    ReadFailed { line: usize, reason: String },

    #[error("malformed semantic code {code:?}: {reason}")]
    MalformedCode { code: String, reason: String },
}
