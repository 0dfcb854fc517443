//! Core data types for fuzzy matching and ranking.
//!
//! - [`ScoreConfig`]: Immutable weights for every bonus and penalty
//! - [`MatchOutcome`]: Result of aligning one pattern against one text
//! - [`FuzzyMatch`]: A complete alignment and its score
//! - [`RankedMatch`]: A scored alignment that remembers its candidate
//!
//! ## Positions
//!
//! All indices are **character** positions (Unicode scalar values), not byte
//! offsets. `"héllo"` has its `l` at position 2 even though it starts at byte 3.

pub mod config;
pub mod types;
