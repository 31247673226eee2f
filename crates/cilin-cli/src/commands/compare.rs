use cilin_core::CilinResult;
use cilin_similarity::{DirectionalScores, SimilarityEngine};
use clap::Args;
use serde::Serialize;

use crate::output::emit;

#[derive(Args)]
pub struct CompareArgs {
    /// First text
    pub text1: String,
    /// Second text
    pub text2: String,
}

#[derive(Serialize)]
struct CompareReport<'a> {
    text1: &'a str,
    text2: &'a str,
    similarity: f64,
    directional: DirectionalScores,
    degraded: bool,
}

pub fn handle_compare(engine: &SimilarityEngine, args: &CompareArgs, json: bool, verbose: u8) -> CilinResult<()> {
    let directional = engine.directional(&args.text1, &args.text2)?;
    let report = CompareReport {
        text1: &args.text1,
        text2: &args.text2,
        similarity: directional.combined(),
        directional,
        degraded: engine.is_degraded(),
    };

    emit(json, &report, || {
        let mut line = format!("{} {} 相似度:{}", report.text1, report.text2, report.similarity);
        if verbose > 0 {
            line.push_str(&format!(
                " (forward {:.4}, backward {:.4})",
                directional.forward, directional.backward
            ));
        }
        line
    })
}
