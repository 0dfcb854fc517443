use serde::Serialize;

use crate::core::config::ScoreConfig;
use crate::core::types::Score;

/// Convert a character position to a score factor
#[inline]
fn position_to_score(position: usize) -> Score {
    #[allow(clippy::cast_possible_wrap)]
    {
        position as Score
    }
}

/// Penalty for characters before the first match, capped at three characters
#[inline]
pub(crate) fn leading_penalty(first: usize, config: &ScoreConfig) -> Score {
    position_to_score(first.min(3)).saturating_mul(Score::from(config.unmatched_leading_letter))
}

/// Unmatched-tail penalty charged once per adjacent pair, keyed on the last match
#[inline]
pub(crate) fn unmatched_penalty(last: usize, config: &ScoreConfig) -> Score {
    position_to_score(last).saturating_mul(Score::from(config.unmatched_letter))
}

/// Bonuses earned by one adjacent pair of matched positions `a < b`
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PairBonus {
    pub first_letter: Score,
    pub consecutive: Score,
    pub camel_case: Score,
    pub separator: Score,
}

impl PairBonus {
    pub fn calculate(text: &[char], a: usize, b: usize, config: &ScoreConfig) -> Self {
        let prev = text.get(a).copied();
        let next = text.get(b).copied();

        let first_letter = if a == 0 { config.first_letter_match } else { 0 };
        let consecutive = if b == a + 1 { config.consecutive_match } else { 0 };
        let camel_case = match (prev, next) {
            (Some(p), Some(n)) if p.is_lowercase() && n.is_uppercase() => config.camel_case_match,
            _ => 0,
        };
        let separator = match prev {
            Some(' ' | '_') => config.separator_match,
            _ => 0,
        };

        Self {
            first_letter: Score::from(first_letter),
            consecutive: Score::from(consecutive),
            camel_case: Score::from(camel_case),
            separator: Score::from(separator),
        }
    }

    pub fn total(&self) -> Score {
        self.first_letter + self.consecutive + self.camel_case + self.separator
    }
}

/// Per-term decomposition of an alignment's score.
///
/// Sums saturate at the bounds of [`Score`] instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Unmatched leading characters, at most three counted
    pub leading_penalty: Score,

    /// Pairs starting at position 0
    pub first_letter: Score,

    /// Pairs of adjacent positions
    pub consecutive: Score,

    /// Lowercase-to-uppercase transitions
    pub camel_case: Score,

    /// Pairs whose earlier match is a space or underscore
    pub separator: Score,

    /// Unmatched-tail penalty, summed over every pair
    pub unmatched: Score,

    /// Sum of all terms
    pub total: Score,
}

impl ScoreBreakdown {
    /// Score `indices` against `text`, keeping each term separate.
    ///
    /// The unmatched-tail term uses the *last* matched position for every
    /// pair, so it is charged `indices.len() - 1` times. A single index has
    /// no pairs and scores only its leading penalty; no indices score zero.
    #[must_use]
    pub fn calculate(indices: &[usize], text: &[char], config: &ScoreConfig) -> Self {
        let (Some(&first), Some(&last)) = (indices.first(), indices.last()) else {
            return Self::default();
        };

        let mut breakdown = Self {
            leading_penalty: leading_penalty(first, config),
            ..Self::default()
        };

        for pair in indices.windows(2) {
            let bonus = PairBonus::calculate(text, pair[0], pair[1], config);
            breakdown.first_letter = breakdown.first_letter.saturating_add(bonus.first_letter);
            breakdown.consecutive = breakdown.consecutive.saturating_add(bonus.consecutive);
            breakdown.camel_case = breakdown.camel_case.saturating_add(bonus.camel_case);
            breakdown.separator = breakdown.separator.saturating_add(bonus.separator);
            breakdown.unmatched = breakdown
                .unmatched
                .saturating_add(unmatched_penalty(last, config));
        }

        breakdown.total = [
            breakdown.first_letter,
            breakdown.consecutive,
            breakdown.camel_case,
            breakdown.separator,
            breakdown.unmatched,
        ]
        .into_iter()
        .fold(breakdown.leading_penalty, Score::saturating_add);

        breakdown
    }
}

/// Score a complete alignment of a pattern onto `text`
#[must_use]
pub fn score(indices: &[usize], text: &[char], config: &ScoreConfig) -> Score {
    ScoreBreakdown::calculate(indices, text, config).total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_score_consecutive_from_start() {
        let config = ScoreConfig::default();
        // (15 + 15 - 2) + (15 - 2)
        assert_eq!(score(&[0, 1, 2], &chars("2nd"), &config), 41);
    }

    #[test]
    fn test_breakdown_terms() {
        let config = ScoreConfig::default();
        let breakdown = ScoreBreakdown::calculate(&[0, 1, 2], &chars("2nd"), &config);
        assert_eq!(breakdown.leading_penalty, 0);
        assert_eq!(breakdown.first_letter, 15);
        assert_eq!(breakdown.consecutive, 30);
        assert_eq!(breakdown.camel_case, 0);
        assert_eq!(breakdown.separator, 0);
        assert_eq!(breakdown.unmatched, -4);
        assert_eq!(breakdown.total, 41);
    }

    #[test]
    fn test_leading_penalty_capped() {
        let config = ScoreConfig::default();
        let text = chars("xxxxxxxxab");
        let breakdown = ScoreBreakdown::calculate(&[8, 9], &text, &config);
        assert_eq!(breakdown.leading_penalty, -15);
        assert_eq!(breakdown.total, -15 + 15 - 9);
    }

    #[test]
    fn test_camel_case_bonus() {
        let config = ScoreConfig::default();
        let text = chars("fooBar");
        // o@2 -> B@3: consecutive + camel case, leading -10, unmatched -3
        assert_eq!(score(&[2, 3], &text, &config), -10 + 15 + 30 - 3);
        // o@1 -> B@3: camel case only
        assert_eq!(score(&[1, 3], &text, &config), -5 + 30 - 3);
    }

    #[test]
    fn test_separator_bonus_uses_earlier_match() {
        let config = ScoreConfig::default();
        let text = chars("foo_bar");
        let breakdown = ScoreBreakdown::calculate(&[3, 4], &text, &config);
        assert_eq!(breakdown.separator, 30);

        let spaced = chars("foo bar");
        let breakdown = ScoreBreakdown::calculate(&[3, 4], &spaced, &config);
        assert_eq!(breakdown.separator, 30);

        // separator after the earlier match does not count
        let breakdown = ScoreBreakdown::calculate(&[2, 4], &text, &config);
        assert_eq!(breakdown.separator, 0);
    }

    #[test]
    fn test_unmatched_charged_per_pair() {
        let config = ScoreConfig::default();
        let text = chars("abcdefgh");
        let breakdown = ScoreBreakdown::calculate(&[0, 2, 4, 6], &text, &config);
        assert_eq!(breakdown.unmatched, -6 * 3);
    }

    #[test]
    fn test_single_index_scores_leading_only() {
        let config = ScoreConfig::default();
        let text = chars("abc");
        assert_eq!(score(&[0], &text, &config), 0);
        assert_eq!(score(&[2], &text, &config), -10);
    }

    #[test]
    fn test_empty_indices_score_zero() {
        let config = ScoreConfig::default();
        assert_eq!(
            ScoreBreakdown::calculate(&[], &chars("abc"), &config),
            ScoreBreakdown::default()
        );
        assert_eq!(score(&[], &[], &config), 0);
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let config = ScoreConfig::default().with_unmatched_letter(i32::MIN);
        let indices: Vec<usize> = (0..70_000).collect();
        let text = vec!['a'; indices.len()];
        // 69_999 pairs * 69_999 * i32::MIN is far below i64::MIN
        let breakdown = ScoreBreakdown::calculate(&indices, &text, &config);
        assert_eq!(breakdown.unmatched, Score::MIN);
        // Bonuses are added before the saturated tail term
        assert_eq!(breakdown.total, Score::MIN + 15 + 15 * 69_999);
    }

    #[test]
    fn test_custom_weights() {
        let config = ScoreConfig::default()
            .with_consecutive_match(100)
            .with_unmatched_letter(0);
        assert_eq!(score(&[0, 1, 2], &chars("2nd"), &config), 15 + 200);
    }
}
