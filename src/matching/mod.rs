//! Fuzzy matching engine, scoring model, and ranking pipeline.
//!
//! This module provides the core matching functionality:
//!
//! - [`MatchEngine`]: Best-scoring alignment of a pattern onto one text
//! - [`score`]: Heuristic score of a complete alignment
//! - [`ScoreBreakdown`]: The same score split into its individual terms
//! - [`RankPipeline`]: Top-N candidates for a pattern, best first
//! - [`fuzzy_contains`]: Cheap boolean subsequence pre-filter
//!
//! ## Matching Algorithm
//!
//! A pattern matches a text when its characters occur in the text in order,
//! not necessarily contiguously, ignoring case. Many alignments are usually
//! possible; the engine searches all of them and keeps the best:
//!
//! 1. **Hard cut**: If any pattern character cannot be placed, there is no match
//! 2. **Search**: Each occurrence is either matched now or deferred to a later one
//! 3. **Positivity gate**: The best alignment is reported only if it scores above zero
//!
//! ## Scoring
//!
//! For each adjacent pair of matched positions `a < b`:
//!
//! - **First letter**: `a` is position 0
//! - **Consecutive**: `b == a + 1`
//! - **Camel case**: `text[a]` is lowercase and `text[b]` is uppercase
//! - **Separator**: `text[a]` is a space or underscore
//! - **Unmatched tail**: penalty scaled by the last matched position
//!
//! plus a penalty for up to three unmatched leading characters.
//!
//! ## Example
//!
//! ```rust
//! use fuzzy_rank::{RankPipeline, ScoreConfig};
//!
//! let words = ["getElementById", "get_element", "gel", "angel"];
//! let pipeline = RankPipeline::new(ScoreConfig::default());
//!
//! for m in pipeline.rank(&words, "gel", 3) {
//!     println!("{} ({}) {:?}", m.text, m.score, m.indices);
//! }
//! ```

pub mod engine;
pub mod prefilter;
pub mod ranking;
pub mod scoring;

pub use engine::MatchEngine;
pub use prefilter::fuzzy_contains;
pub use ranking::{RankPipeline, DEFAULT_TOP_N};
pub use scoring::{score, ScoreBreakdown};
