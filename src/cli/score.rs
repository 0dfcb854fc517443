//! Score command - align a pattern against one text and explain the result.
//!
//! Useful for tuning weights: shows the chosen alignment and how much each
//! bonus and penalty contributed.

use clap::Args;

use crate::cli::{format_indices, highlight, OutputFormat, WeightArgs};
use crate::core::types::MatchOutcome;
use crate::matching::engine::MatchEngine;
use crate::matching::prefilter::fuzzy_contains;
use crate::matching::scoring::ScoreBreakdown;

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Text to search within
    #[arg(required = true)]
    pub text: String,

    /// Pattern to search for
    #[arg(required = true)]
    pub pattern: String,

    #[command(flatten)]
    pub weights: WeightArgs,
}

/// Result of scoring one text, ready for output
struct ScoreResult {
    text: String,
    pattern: String,
    /// The pattern occurs in order, regardless of score
    occurs: bool,
    found: Option<(Vec<usize>, ScoreBreakdown)>,
}

/// Execute score subcommand
///
/// # Errors
///
/// Returns an error if the score config cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ScoreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.weights.score_config()?;
    let engine = MatchEngine::new(config);

    let found = match engine.align(&args.text, &args.pattern) {
        MatchOutcome::Found(m) => {
            let chars: Vec<char> = args.text.chars().collect();
            let breakdown = ScoreBreakdown::calculate(&m.indices, &chars, engine.config());
            Some((m.indices, breakdown))
        }
        MatchOutcome::NoMatch => None,
    };

    let result = ScoreResult {
        occurs: args.pattern.is_empty() || fuzzy_contains(&args.text, &args.pattern),
        text: args.text,
        pattern: args.pattern,
        found,
    };

    match format {
        OutputFormat::Text => print_text_result(&result, verbose),
        OutputFormat::Json => print_json_result(&result)?,
        OutputFormat::Tsv => print_tsv_result(&result),
    }

    Ok(())
}

fn print_text_result(result: &ScoreResult, verbose: bool) {
    let Some((indices, breakdown)) = &result.found else {
        if result.occurs {
            println!(
                "No match: '{}' occurs in '{}' but no alignment scores above zero",
                result.pattern, result.text
            );
        } else {
            println!("No match: '{}' does not occur in '{}'", result.pattern, result.text);
        }
        return;
    };

    println!("\n   Match: {}", highlight(&result.text, indices));
    println!("   Indices: [{}]", format_indices(indices));
    println!("   Score: {}", breakdown.total);

    if verbose {
        println!("\n   Leading penalty: {:>5}", breakdown.leading_penalty);
        println!("   First letter:    {:>5}", breakdown.first_letter);
        println!("   Consecutive:     {:>5}", breakdown.consecutive);
        println!("   Camel case:      {:>5}", breakdown.camel_case);
        println!("   Separator:       {:>5}", breakdown.separator);
        println!("   Unmatched:       {:>5}", breakdown.unmatched);
    }
    println!();
}

fn print_json_result(result: &ScoreResult) -> anyhow::Result<()> {
    let output = match &result.found {
        Some((indices, breakdown)) => serde_json::json!({
            "text": result.text,
            "pattern": result.pattern,
            "matched": true,
            "indices": indices,
            "score": breakdown.total,
            "breakdown": breakdown,
        }),
        None => serde_json::json!({
            "text": result.text,
            "pattern": result.pattern,
            "matched": false,
            "occurs": result.occurs,
        }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_result(result: &ScoreResult) {
    println!("text\tpattern\tmatched\tscore\tindices\tleading\tfirst_letter\tconsecutive\tcamel_case\tseparator\tunmatched");
    match &result.found {
        Some((indices, b)) => println!(
            "{}\t{}\ttrue\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            result.text,
            result.pattern,
            b.total,
            format_indices(indices),
            b.leading_penalty,
            b.first_letter,
            b.consecutive,
            b.camel_case,
            b.separator,
            b.unmatched,
        ),
        None => println!(
            "{}\t{}\tfalse\t\t\t\t\t\t\t\t",
            result.text, result.pattern
        ),
    }
}
