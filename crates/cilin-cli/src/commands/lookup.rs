use cilin_core::{CilinResult, SemanticCode};
use cilin_similarity::SimilarityEngine;
use clap::Args;
use serde::Serialize;

use crate::output::emit;

#[derive(Args)]
pub struct LookupArgs {
    /// Words to look up
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Serialize)]
struct WordEntry<'a> {
    word: &'a str,
    codes: &'a [SemanticCode],
    synonyms: Vec<&'a str>,
}

pub fn handle_lookup(engine: &SimilarityEngine, args: &LookupArgs, json: bool) -> CilinResult<()> {
    let thesaurus = engine.thesaurus();
    let entries: Vec<WordEntry<'_>> = args
        .words
        .iter()
        .map(|word| WordEntry {
            word,
            codes: thesaurus.codes(word),
            synonyms: thesaurus.synonyms(word),
        })
        .collect();

    emit(json, &entries, || {
        entries
            .iter()
            .map(|e| {
                if e.codes.is_empty() {
                    format!("{}: (not in thesaurus)", e.word)
                } else {
                    let codes: Vec<&str> = e.codes.iter().map(SemanticCode::as_str).collect();
                    format!("{}: {} | {}", e.word, codes.join(" "), e.synonyms.join(" "))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}
