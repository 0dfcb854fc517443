//! Command-line interface for fuzzy-rank.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **rank**: Rank the candidates of a word list against a pattern
//! - **score**: Align a pattern against one text and explain the score
//!
//! ## Usage
//!
//! ```text
//! # Top 20 words for a pattern
//! fuzzy-rank rank words.txt gebi
//!
//! # Pipe candidates from another tool
//! find . -type f | fuzzy-rank rank - srcmain -n 5
//!
//! # JSON output for scripting
//! fuzzy-rank rank words.txt gebi --format json
//!
//! # Why does this candidate score what it does?
//! fuzzy-rank score getElementById gebi
//!
//! # Tune weights from a file, then override one
//! fuzzy-rank rank words.txt gebi --config weights.json --camel-case 50
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::ScoreConfig;

pub mod rank;
pub mod score;

#[derive(Parser)]
#[command(name = "fuzzy-rank")]
#[command(version)]
#[command(about = "Fuzzy-match and rank candidates the way interactive fuzzy finders do")]
#[command(
    long_about = "fuzzy-rank matches a short pattern against candidate strings and ranks them.\n\nA candidate matches when the pattern's characters occur in it in order, ignoring case. Matches are scored with bonuses for:\n- Word starts and the first character\n- Consecutive runs\n- camelCase boundaries\n- Characters after a space or underscore"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the candidates of a word list against a pattern
    Rank(rank::RankArgs),

    /// Align a pattern against a single text and explain its score
    Score(score::ScoreArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Scoring weight options shared by every command.
///
/// Precedence: built-in defaults, then `--config`, then individual flags.
#[derive(clap::Args, Debug, Default)]
pub struct WeightArgs {
    /// JSON file with score weights (missing fields keep their defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bonus for a pair starting at the first character (default 15)
    #[arg(long, allow_negative_numbers = true)]
    pub first_letter: Option<i32>,

    /// Bonus for adjacent matched characters (default 15)
    #[arg(long, allow_negative_numbers = true)]
    pub consecutive: Option<i32>,

    /// Bonus for a lowercase match followed by an uppercase match (default 30)
    #[arg(long, allow_negative_numbers = true)]
    pub camel_case: Option<i32>,

    /// Bonus when a match is a space or underscore (default 30)
    #[arg(long, allow_negative_numbers = true)]
    pub separator: Option<i32>,

    /// Penalty per position of the last match, charged per pair (default -1)
    #[arg(long, allow_negative_numbers = true)]
    pub unmatched: Option<i32>,

    /// Penalty per unmatched leading character, at most 3 (default -5)
    #[arg(long, allow_negative_numbers = true)]
    pub unmatched_leading: Option<i32>,
}

impl WeightArgs {
    /// Build the score config these options describe
    ///
    /// # Errors
    ///
    /// Returns an error if `--config` cannot be read or parsed.
    pub fn score_config(&self) -> anyhow::Result<ScoreConfig> {
        let mut config = match &self.config {
            Some(path) => ScoreConfig::load_from_file(path)?,
            None => ScoreConfig::default(),
        };

        if let Some(w) = self.first_letter {
            config = config.with_first_letter_match(w);
        }
        if let Some(w) = self.consecutive {
            config = config.with_consecutive_match(w);
        }
        if let Some(w) = self.camel_case {
            config = config.with_camel_case_match(w);
        }
        if let Some(w) = self.separator {
            config = config.with_separator_match(w);
        }
        if let Some(w) = self.unmatched {
            config = config.with_unmatched_letter(w);
        }
        if let Some(w) = self.unmatched_leading {
            config = config.with_unmatched_leading_letter(w);
        }

        Ok(config)
    }
}

/// Render `text` with each matched character wrapped in brackets
pub(crate) fn highlight(text: &str, indices: &[usize]) -> String {
    let mut out = String::with_capacity(text.len() + indices.len() * 2);
    let mut matched = indices.iter().peekable();

    for (i, c) in text.chars().enumerate() {
        if matched.peek() == Some(&&i) {
            matched.next();
            out.push('[');
            out.push(c);
            out.push(']');
        } else {
            out.push(c);
        }
    }

    out
}

/// Render indices as a comma-separated list
pub(crate) fn format_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
