//! Cilin CLI
//!
//! Scores the semantic similarity of texts against a Cilin thesaurus.
//!
//! # Commands
//!
//! - `compare <TEXT1> <TEXT2>`: similarity of two texts
//! - `rank <QUERY> <CANDIDATE>...`: candidates ordered by similarity to the query
//! - `lookup <WORD>...`: semantic codes and synonyms of words
//!
//! Without the `jieba` feature texts must be pre-segmented, either as
//! `word/tag` tokens or as plain space-separated words.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use cilin_core::traits::IPosTagger;
use cilin_core::CilinConfig;
use cilin_similarity::{SimilarityEngine, SlashTagger};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, warn};

mod commands;
mod output;
mod tracing_setup;

/// Cilin text similarity
#[derive(Parser)]
#[command(name = "cilin")]
#[command(version = cilin_core::constants::VERSION)]
#[command(about = "Semantic text similarity over a Cilin synonym thesaurus")]
#[command(propagate_version = true)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Thesaurus file (overrides `thesaurus.path`)
    #[arg(long, global = true)]
    dict: Option<PathBuf>,

    /// How input texts are segmented and tagged
    #[arg(long, value_enum, default_value_t = TaggerKind::Slash, global = true)]
    tagger: TaggerKind,

    /// Fail instead of scoring against an empty thesaurus when the dictionary is unreadable
    #[arg(long, global = true)]
    strict: bool,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum TaggerKind {
    /// Pre-segmented `word/tag` text
    Slash,
    /// jieba segmentation (requires the `jieba` feature)
    Jieba,
}

#[derive(Subcommand)]
enum Commands {
    /// Similarity of two texts
    Compare(commands::compare::CompareArgs),
    /// Rank candidate texts by similarity to a query
    Rank(commands::rank::RankArgs),
    /// Show the semantic codes of words
    Lookup(commands::lookup::LookupArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => CilinConfig::from_file(path)?,
        None => CilinConfig::default(),
    };
    if let Some(dict) = &cli.dict {
        config.thesaurus.path = dict.display().to_string();
    }

    tracing_setup::init_tracing(&config.observability, cli.verbose);

    let engine = SimilarityEngine::new(&config, build_tagger(cli.tagger)?)
        .with_context(|| format!("loading thesaurus {}", config.thesaurus.path))?;
    if cli.strict {
        engine.ensure_available()?;
    } else if let Some(event) = engine.degradation() {
        warn!(failure = %event.failure, "running without a thesaurus; every score will be 0");
    }

    match &cli.command {
        Commands::Compare(args) => commands::compare::handle_compare(&engine, args, cli.json, cli.verbose)?,
        Commands::Rank(args) => commands::rank::handle_rank(&engine, args, cli.json)?,
        Commands::Lookup(args) => commands::lookup::handle_lookup(&engine, args, cli.json)?,
    }
    Ok(())
}

fn build_tagger(kind: TaggerKind) -> Result<Box<dyn IPosTagger>> {
    match kind {
        TaggerKind::Slash => Ok(Box::new(SlashTagger::new())),
        #[cfg(feature = "jieba")]
        TaggerKind::Jieba => Ok(Box::new(cilin_similarity::JiebaTagger::default())),
        #[cfg(not(feature = "jieba"))]
        TaggerKind::Jieba => anyhow::bail!("this build has no jieba support; rebuild with `--features jieba`"),
    }
}
