//! Rank command - rank the candidates of a word list against a pattern.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::{format_indices, highlight, OutputFormat, WeightArgs};
use crate::core::types::RankedMatch;
use crate::matching::ranking::{RankPipeline, DEFAULT_TOP_N};
use crate::parsing;

/// Arguments for the rank command
#[derive(Args)]
pub struct RankArgs {
    /// Word list with one candidate per line
    /// Use '-' for stdin
    #[arg(required = true)]
    pub words: PathBuf,

    /// Pattern to search for
    #[arg(required = true)]
    pub pattern: String,

    /// Number of results to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    #[command(flatten)]
    pub weights: WeightArgs,
}

/// Execute rank subcommand
///
/// # Errors
///
/// Returns an error if the word list or score config cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RankArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.weights.score_config()?;
    let words = load_words(&args)?;

    if verbose {
        eprintln!("Loaded {} candidates", words.len());
        eprintln!(
            "Weights: first letter {}, consecutive {}, camel case {}, separator {}, unmatched {}, unmatched leading {}",
            config.first_letter_match,
            config.consecutive_match,
            config.camel_case_match,
            config.separator_match,
            config.unmatched_letter,
            config.unmatched_leading_letter,
        );
    }

    let pipeline = RankPipeline::new(config);
    let ranked = pipeline.rank(&words, &args.pattern, args.top_n);

    match format {
        OutputFormat::Text => {
            if ranked.is_empty() {
                eprintln!("No matching candidates found.");
                return Ok(());
            }
            print_text_results(&ranked);
        }
        OutputFormat::Json => print_json_results(&args.pattern, &ranked)?,
        OutputFormat::Tsv => print_tsv_results(&ranked),
    }

    Ok(())
}

fn load_words(args: &RankArgs) -> anyhow::Result<Vec<String>> {
    use std::io::{self, Read};

    if args.words.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(parsing::wordlist::parse_wordlist_text(&buffer)?);
    }

    Ok(parsing::wordlist::parse_wordlist_file(&args.words)?)
}

fn print_text_results(ranked: &[RankedMatch<'_>]) {
    let width = ranked
        .iter()
        .map(|r| r.text.chars().count() + r.indices.len() * 2)
        .max()
        .unwrap_or(0);

    for (i, r) in ranked.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  {:>5}",
            i + 1,
            highlight(r.text, &r.indices),
            r.score,
        );
    }
}

/// One JSON result row: the match plus its 1-based rank
#[derive(Serialize)]
struct JsonResult<'r, 'a> {
    rank: usize,
    #[serde(flatten)]
    result: &'r RankedMatch<'a>,
}

#[derive(Serialize)]
struct JsonOutput<'r, 'a> {
    pattern: &'r str,
    results: Vec<JsonResult<'r, 'a>>,
}

fn print_json_results(pattern: &str, ranked: &[RankedMatch<'_>]) -> anyhow::Result<()> {
    let output = JsonOutput {
        pattern,
        results: ranked
            .iter()
            .enumerate()
            .map(|(i, result)| JsonResult { rank: i + 1, result })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(ranked: &[RankedMatch<'_>]) {
    println!("rank\ttext\tscore\tindices\tcandidate");
    for (i, r) in ranked.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            i + 1,
            r.text,
            r.score,
            format_indices(&r.indices),
            r.candidate,
        );
    }
}
