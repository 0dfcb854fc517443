use tracing::trace;

use crate::core::config::ScoreConfig;
use crate::core::types::{FuzzyMatch, MatchOutcome, Score};
use crate::matching::prefilter::{chars_eq_ignore_case, is_subsequence};
use crate::matching::scoring::{leading_penalty, score, unmatched_penalty, PairBonus};

/// Best completion found from one (pattern position, text position) state
#[derive(Debug, Clone, Copy)]
struct Step {
    /// Pair bonuses and tail penalties from this state to the end of the pattern
    value: Score,
    /// Text position chosen for the next pattern character
    next: Option<usize>,
}

/// Finds the best-scoring alignment of a pattern onto a text.
///
/// Every way of placing the pattern's characters, in order, onto matching
/// text characters is a candidate. At each occurrence the search either
/// matches the current pattern character there or defers it to a later
/// occurrence. Only the best complete alignment is kept, and only if it
/// scores strictly above zero: a candidate whose every alignment is poor is
/// reported as [`MatchOutcome::NoMatch`].
///
/// Comparisons are case-insensitive.
///
/// ```
/// use fuzzy_rank::{MatchEngine, MatchOutcome};
///
/// let engine = MatchEngine::default();
/// let MatchOutcome::Found(m) = engine.align("2nd", "2nd") else { panic!() };
/// assert_eq!(m.indices, vec![0, 1, 2]);
/// assert_eq!(m.score, 41);
///
/// assert_eq!(engine.align("xyz", "abc"), MatchOutcome::NoMatch);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: ScoreConfig,
}

impl MatchEngine {
    #[must_use]
    pub fn new(config: ScoreConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// Align `pattern` against `text`
    #[must_use]
    pub fn align(&self, text: &str, pattern: &str) -> MatchOutcome {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        self.align_chars(&text, &pattern)
    }

    pub(crate) fn align_chars(&self, text: &[char], pattern: &[char]) -> MatchOutcome {
        if pattern.is_empty() {
            return MatchOutcome::Found(FuzzyMatch {
                indices: Vec::new(),
                score: score(&[], text, &self.config),
            });
        }

        if text.is_empty() || pattern.len() > text.len() {
            return MatchOutcome::NoMatch;
        }

        // An unmatchable character anywhere rules out every alignment
        if !is_subsequence(pattern, text) {
            return MatchOutcome::NoMatch;
        }

        let Some((indices, best)) = self.best_alignment(text, pattern) else {
            return MatchOutcome::NoMatch;
        };

        if indices.len() != pattern.len() {
            return MatchOutcome::NoMatch;
        }

        if best <= 0 {
            trace!(score = best, "best alignment is not positive, suppressing match");
            return MatchOutcome::NoMatch;
        }

        MatchOutcome::Found(FuzzyMatch {
            indices,
            score: best,
        })
    }

    /// Search all alignments, memoized on (pattern position, text position).
    ///
    /// The table is filled from the last pattern character backwards so no
    /// recursion is needed. `steps[j][a]` is the best completion when
    /// `pattern[j]` is matched at `text[a]`. Positions that leave too few
    /// text characters for the rest of the pattern are never visited.
    ///
    /// Past the adjacent position, a pair's bonus depends on the later
    /// character only through its case, so each row keeps the best later
    /// completion per case class and every cell is filled in constant time.
    ///
    /// Ties keep the earliest position, so among equally scored alignments
    /// the lexicographically smallest one wins.
    fn best_alignment(&self, text: &[char], pattern: &[char]) -> Option<(Vec<usize>, Score)> {
        let n = text.len();
        let k = pattern.len();
        let pairs = Score::try_from(k - 1).unwrap_or(Score::MAX);

        let mut steps: Vec<Vec<Option<Step>>> = vec![vec![None; n]; k];

        for j in (0..k).rev() {
            // Leave room for pattern[j + 1..]
            let last_start = n - (k - j);
            let later = (j + 1 < k).then(|| Successors::from_row(&steps[j + 1], text));

            for a in j..=last_start {
                if !chars_eq_ignore_case(pattern[j], text[a]) {
                    continue;
                }

                let Some(later) = &later else {
                    steps[j][a] = Some(Step {
                        value: pairs.saturating_mul(unmatched_penalty(a, &self.config)),
                        next: None,
                    });
                    continue;
                };

                let adjacent = steps[j + 1][a + 1].map(|s| (a + 1, s.value));
                let mut best: Option<Step> = None;
                for (b, tail) in [adjacent, later.upper_from(a + 2), later.other_from(a + 2)]
                    .into_iter()
                    .flatten()
                {
                    let value = PairBonus::calculate(text, a, b, &self.config)
                        .total()
                        .saturating_add(tail);
                    let better = best.map_or(true, |s| {
                        value > s.value || (value == s.value && s.next.map_or(true, |next| b < next))
                    });
                    if better {
                        best = Some(Step {
                            value,
                            next: Some(b),
                        });
                    }
                }
                steps[j][a] = best;
            }
        }

        let mut root: Option<(usize, Score)> = None;
        for (a, step) in steps[0].iter().enumerate() {
            let Some(step) = step else {
                continue;
            };
            let total = leading_penalty(a, &self.config).saturating_add(step.value);
            if root.map_or(true, |(_, s)| total > s) {
                root = Some((a, total));
            }
        }

        let (start, total) = root?;

        let mut indices = Vec::with_capacity(k);
        let mut cursor = Some(start);
        let mut j = 0;
        while let Some(a) = cursor {
            indices.push(a);
            cursor = steps[j][a].and_then(|s| s.next);
            j += 1;
        }

        Some((indices, total))
    }
}

/// Best filled cell at or after each text position, split by whether the
/// text character there is uppercase
struct Successors {
    upper: Vec<Option<(usize, Score)>>,
    other: Vec<Option<(usize, Score)>>,
}

impl Successors {
    fn from_row(row: &[Option<Step>], text: &[char]) -> Self {
        let n = row.len();
        let mut upper = vec![None; n + 1];
        let mut other = vec![None; n + 1];

        for b in (0..n).rev() {
            upper[b] = upper[b + 1];
            other[b] = other[b + 1];

            let Some(step) = row[b] else {
                continue;
            };
            let slot = if text[b].is_uppercase() {
                &mut upper[b]
            } else {
                &mut other[b]
            };
            // >= so the earlier position wins a tie
            if slot.map_or(true, |(_, value)| step.value >= value) {
                *slot = Some((b, step.value));
            }
        }

        Self { upper, other }
    }

    fn upper_from(&self, from: usize) -> Option<(usize, Score)> {
        self.upper.get(from).copied().flatten()
    }

    fn other_from(&self, from: usize) -> Option<(usize, Score)> {
        self.other.get(from).copied().flatten()
    }
}
