//! Fixed-width hierarchical semantic codes.
//!
//! A code such as `Aa01A01=` is read as six levels, coarsest first:
//!
//! | level       | offset | width | weight |
//! |-------------|--------|-------|--------|
//! | `Major`     | 0      | 1     | 3      |
//! | `Medium`    | 1      | 1     | 3      |
//! | `Minor`     | 2      | 2     | 2      |
//! | `WordGroup` | 4      | 1     | 1      |
//! | `Atom`      | 5      | 2     | 1      |
//! | `Marker`    | 7      | 1     | 0      |
//!
//! The weights sum to [`MAX_AGREEMENT`](crate::constants::MAX_AGREEMENT).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::SEMANTIC_CODE_LEN;
use crate::errors::ThesaurusError;

/// One level of the code taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CodeLevel {
    Major,
    Medium,
    Minor,
    WordGroup,
    Atom,
    Marker,
}

impl CodeLevel {
    /// All levels, coarsest first.
    pub const ALL: [CodeLevel; 6] = [
        CodeLevel::Major,
        CodeLevel::Medium,
        CodeLevel::Minor,
        CodeLevel::WordGroup,
        CodeLevel::Atom,
        CodeLevel::Marker,
    ];

    /// Byte offsets `(start, end)` of this level inside a code.
    pub const fn bounds(self) -> (usize, usize) {
        match self {
            CodeLevel::Major => (0, 1),
            CodeLevel::Medium => (1, 2),
            CodeLevel::Minor => (2, 4),
            CodeLevel::WordGroup => (4, 5),
            CodeLevel::Atom => (5, 7),
            CodeLevel::Marker => (7, 8),
        }
    }

    /// Score contributed when two codes agree on this level.
    pub const fn weight(self) -> u8 {
        match self {
            CodeLevel::Major | CodeLevel::Medium => 3,
            CodeLevel::Minor => 2,
            CodeLevel::WordGroup | CodeLevel::Atom => 1,
            // Compared but never weighted.
            CodeLevel::Marker => 0,
        }
    }
}

/// Relation marker carried in the last character of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeMarker {
    /// `=`: the words are synonyms.
    Synonym,
    /// `#`: the words are related but not synonymous.
    Related,
    /// `@`: the word stands alone in its class.
    Independent,
}

impl CodeMarker {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'=' => Some(CodeMarker::Synonym),
            b'#' => Some(CodeMarker::Related),
            b'@' => Some(CodeMarker::Independent),
            _ => None,
        }
    }
}

/// An immutable 8-character semantic code.
///
/// Only exactly eight ASCII graphic characters are accepted, so every
/// segment offset is always in range.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SemanticCode {
    bytes: [u8; SEMANTIC_CODE_LEN],
}

impl SemanticCode {
    /// Validate and build a code from its textual form.
    pub fn parse(raw: &str) -> Result<Self, ThesaurusError> {
        if !raw.is_ascii() {
            return Err(ThesaurusError::MalformedCode {
                code: raw.to_string(),
                reason: "non-ASCII characters".to_string(),
            });
        }
        let bytes: [u8; SEMANTIC_CODE_LEN] =
            raw.as_bytes()
                .try_into()
                .map_err(|_| ThesaurusError::MalformedCode {
                    code: raw.to_string(),
                    reason: format!("expected {SEMANTIC_CODE_LEN} characters, got {}", raw.len()),
                })?;
        if !bytes.iter().all(u8::is_ascii_graphic) {
            return Err(ThesaurusError::MalformedCode {
                code: raw.to_string(),
                reason: "contains whitespace or control characters".to_string(),
            });
        }
        Ok(Self { bytes })
    }

    /// Raw bytes of one level.
    pub fn segment_bytes(&self, level: CodeLevel) -> &[u8] {
        let (start, end) = level.bounds();
        &self.bytes[start..end]
    }

    /// Textual form of one level.
    pub fn segment(&self, level: CodeLevel) -> &str {
        // parse() only admits ASCII, so any byte range is valid UTF-8.
        std::str::from_utf8(self.segment_bytes(level)).unwrap_or_default()
    }

    /// Whether both codes carry the same value at `level`.
    pub fn agrees_at(&self, other: &SemanticCode, level: CodeLevel) -> bool {
        self.segment_bytes(level) == other.segment_bytes(level)
    }

    pub fn marker(&self) -> Option<CodeMarker> {
        CodeMarker::from_byte(self.bytes[SEMANTIC_CODE_LEN - 1])
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

impl FromStr for SemanticCode {
    type Err = ThesaurusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SemanticCode {
    type Error = ThesaurusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SemanticCode> for String {
    fn from(code: SemanticCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for SemanticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for SemanticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SemanticCode({})", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_follow_fixed_offsets() {
        let code = SemanticCode::parse("Aa01A01=").unwrap();
        assert_eq!(code.segment(CodeLevel::Major), "A");
        assert_eq!(code.segment(CodeLevel::Medium), "a");
        assert_eq!(code.segment(CodeLevel::Minor), "01");
        assert_eq!(code.segment(CodeLevel::WordGroup), "A");
        assert_eq!(code.segment(CodeLevel::Atom), "01");
        assert_eq!(code.segment(CodeLevel::Marker), "=");
    }

    #[test]
    fn weights_sum_to_max_agreement() {
        let total: u8 = CodeLevel::ALL.iter().map(|l| l.weight()).sum();
        assert_eq!(total, crate::constants::MAX_AGREEMENT);
    }

    #[test]
    fn levels_tile_the_whole_code() {
        let mut expected_start = 0;
        for level in CodeLevel::ALL {
            let (start, end) = level.bounds();
            assert_eq!(start, expected_start);
            assert!(end > start);
            expected_start = end;
        }
        assert_eq!(expected_start, SEMANTIC_CODE_LEN);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(SemanticCode::parse("Aa01A01").is_err());
        assert!(SemanticCode::parse("Aa01A01==").is_err());
        assert!(SemanticCode::parse("").is_err());
    }

    #[test]
    fn rejects_non_ascii_and_whitespace() {
        assert!(SemanticCode::parse("Aa01A0人").is_err());
        assert!(SemanticCode::parse("Aa01 01=").is_err());
    }

    #[test]
    fn marker_is_decoded() {
        assert_eq!(
            SemanticCode::parse("Aa01A01=").unwrap().marker(),
            Some(CodeMarker::Synonym)
        );
        assert_eq!(
            SemanticCode::parse("Aa01A02#").unwrap().marker(),
            Some(CodeMarker::Related)
        );
        assert_eq!(
            SemanticCode::parse("Aa01A03@").unwrap().marker(),
            Some(CodeMarker::Independent)
        );
        assert_eq!(SemanticCode::parse("Aa01A03x").unwrap().marker(), None);
    }

    #[test]
    fn serde_uses_textual_form() {
        let code = SemanticCode::parse("Ab02B03=").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"Ab02B03=\"");
        let back: SemanticCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<SemanticCode>("\"short\"").is_err());
    }
}
