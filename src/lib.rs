//! # fuzzy-rank
//!
//! A library for fuzzy subsequence matching and ranking, in the style of
//! interactive fuzzy finders.
//!
//! Type a few letters, get the best-matching identifiers, words, or paths.
//! A pattern matches a candidate when its characters appear in the candidate
//! in order. Matches are scored so that word starts, consecutive runs,
//! camelCase boundaries, and characters after separators rank highest.
//!
//! ## Features
//!
//! - **Best alignment search**: Explores every placement of the pattern, not just the greedy one
//! - **Tunable scoring**: All bonuses and penalties come from an injected [`ScoreConfig`]
//! - **Top-N ranking**: Stable, deterministic ordering over large candidate sets
//! - **Explainable scores**: [`ScoreBreakdown`] splits a score into its terms
//!
//! ## Example
//!
//! ```rust
//! use fuzzy_rank::{MatchEngine, MatchOutcome, RankPipeline, ScoreConfig};
//!
//! let engine = MatchEngine::new(ScoreConfig::default());
//! match engine.align("2nd", "2nd") {
//!     MatchOutcome::Found(m) => assert_eq!(m.score, 41),
//!     MatchOutcome::NoMatch => unreachable!(),
//! }
//!
//! let words = ["apple", "snapshot", "map"];
//! let ranked = RankPipeline::default().rank(&words, "ap", 10);
//! assert_eq!(ranked[0].text, "apple");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Score configuration and result types
//! - [`matching`]: Matching engine, scoring, and ranking
//! - [`parsing`]: Word list loading
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::config::{ConfigError, ScoreConfig};
pub use crate::core::types::*;
pub use matching::engine::MatchEngine;
pub use matching::ranking::RankPipeline;
pub use matching::scoring::ScoreBreakdown;
