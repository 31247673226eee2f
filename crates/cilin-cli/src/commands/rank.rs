use cilin_core::CilinResult;
use cilin_similarity::SimilarityEngine;
use clap::Args;

use crate::output::emit;

#[derive(Args)]
pub struct RankArgs {
    /// Query text
    pub query: String,
    /// Candidate texts to score against the query
    #[arg(required = true)]
    pub candidates: Vec<String>,
}

pub fn handle_rank(engine: &SimilarityEngine, args: &RankArgs, json: bool) -> CilinResult<()> {
    let ranked = engine.rank(&args.query, &args.candidates)?;

    emit(json, &ranked, || {
        ranked
            .iter()
            .map(|r| match (r.score, &r.error) {
                (Some(score), _) => format!("{} {} 相似度:{}", args.query, r.text, score),
                (None, Some(err)) => format!("{} {} error: {}", args.query, r.text, err),
                (None, None) => format!("{} {} -", args.query, r.text),
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}
