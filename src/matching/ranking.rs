use tracing::debug;

use crate::core::config::ScoreConfig;
use crate::core::types::{FuzzyMatch, MatchOutcome, RankedMatch, Score};
use crate::matching::engine::MatchEngine;

/// Default number of results returned by a ranking
pub const DEFAULT_TOP_N: usize = 20;

/// Ranks a collection of candidates against a pattern
#[derive(Debug, Clone, Default)]
pub struct RankPipeline {
    engine: MatchEngine,
}

impl RankPipeline {
    #[must_use]
    pub fn new(config: ScoreConfig) -> Self {
        Self {
            engine: MatchEngine::new(config),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Return the `top_n` best candidates for `pattern`, best first.
    ///
    /// A single-character pattern takes a fast path: the first `top_n`
    /// candidates *containing that exact character* (case-sensitive) are
    /// returned in input order, each scored `first_letter_match`.
    ///
    /// Any other pattern is aligned against every candidate with
    /// [`MatchEngine`]. Non-matches are dropped and the rest are sorted by
    /// score, descending. Equal scores keep their input order.
    ///
    /// ```
    /// use fuzzy_rank::RankPipeline;
    ///
    /// let pipeline = RankPipeline::default();
    /// let ranked = pipeline.rank(&["apple", "snapshot", "map"], "ap", 10);
    /// let texts: Vec<&str> = ranked.iter().map(|r| r.text).collect();
    /// assert_eq!(texts, ["apple", "map", "snapshot"]);
    /// ```
    #[must_use]
    pub fn rank<'a, S: AsRef<str>>(
        &self,
        candidates: &'a [S],
        pattern: &str,
        top_n: usize,
    ) -> Vec<RankedMatch<'a>> {
        if top_n == 0 || candidates.is_empty() {
            return Vec::new();
        }

        let pattern_chars: Vec<char> = pattern.chars().collect();

        if let [single] = pattern_chars.as_slice() {
            return self.rank_single_char(candidates, *single, top_n);
        }

        let mut results: Vec<RankedMatch<'a>> = candidates
            .iter()
            .enumerate()
            .filter_map(|(i, candidate)| {
                let text = candidate.as_ref();
                let chars: Vec<char> = text.chars().collect();
                match self.engine.align_chars(&chars, &pattern_chars) {
                    MatchOutcome::Found(m) => Some(RankedMatch::from_match(m, text, i)),
                    MatchOutcome::NoMatch => None,
                }
            })
            .collect();

        let matched = results.len();

        // Stable sort keeps input order among equal scores
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(top_n);

        debug!(
            candidates = candidates.len(),
            matched,
            returned = results.len(),
            "ranked candidates"
        );

        results
    }

    fn rank_single_char<'a, S: AsRef<str>>(
        &self,
        candidates: &'a [S],
        needle: char,
        top_n: usize,
    ) -> Vec<RankedMatch<'a>> {
        let score = Score::from(self.engine.config().first_letter_match);

        let results: Vec<RankedMatch<'a>> = candidates
            .iter()
            .enumerate()
            .filter_map(|(i, candidate)| {
                let text = candidate.as_ref();
                let position = text.chars().position(|c| c == needle)?;
                let m = FuzzyMatch {
                    indices: vec![position],
                    score,
                };
                Some(RankedMatch::from_match(m, text, i))
            })
            .take(top_n)
            .collect();

        debug!(
            candidates = candidates.len(),
            returned = results.len(),
            "ranked candidates by single character"
        );

        results
    }
}
