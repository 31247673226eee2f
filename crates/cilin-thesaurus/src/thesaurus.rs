use std::collections::HashMap;

use cilin_core::{CodeMarker, SemanticCode};

/// Word → ordered senses lookup, plus the reverse code → members index.
///
/// Every word present maps to at least one code. Senses are kept in the order
/// they were encountered in the source; repeats are kept as well.
#[derive(Debug, Clone, Default)]
pub struct Thesaurus {
    senses: HashMap<String, Vec<SemanticCode>>,
    members: HashMap<SemanticCode, Vec<String>>,
}

impl Thesaurus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `code` to the senses of `word`, creating the entry if absent.
    pub fn insert(&mut self, word: &str, code: SemanticCode) {
        self.senses.entry(word.to_string()).or_default().push(code);
        self.members.entry(code).or_default().push(word.to_string());
    }

    /// Senses of `word`; empty for unknown words.
    pub fn codes(&self, word: &str) -> &[SemanticCode] {
        self.senses.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.senses.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.senses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }

    /// Total number of (word, code) assignments.
    pub fn code_assignments(&self) -> usize {
        self.senses.values().map(Vec::len).sum()
    }

    /// All known words, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.senses.keys().map(String::as_str)
    }

    /// Words listed under exactly this code.
    pub fn members(&self, code: &SemanticCode) -> &[String] {
        self.members.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Words sharing a synonym-marked (`=`) code with `word`, excluding `word`.
    /// First-seen order, no duplicates.
    pub fn synonyms(&self, word: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for code in self.codes(word) {
            if code.marker() != Some(CodeMarker::Synonym) {
                continue;
            }
            for member in self.members(code) {
                if member != word && !out.contains(&member.as_str()) {
                    out.push(member);
                }
            }
        }
        out
    }
}
