//! Property tests for alignment and ranking.

use fuzzy_rank::matching::{fuzzy_contains, score};
use fuzzy_rank::{MatchEngine, MatchOutcome, RankPipeline, ScoreConfig};
use proptest::prelude::*;

fn eq_ignore_case(a: char, b: char) -> bool {
    a.to_ascii_lowercase() == b.to_ascii_lowercase()
}

/// Best score over every alignment, by exhaustive enumeration
fn brute_force_best(text: &[char], pattern: &[char], config: &ScoreConfig) -> Option<i64> {
    fn walk(
        text: &[char],
        pattern: &[char],
        from: usize,
        prefix: &mut Vec<usize>,
        config: &ScoreConfig,
        best: &mut Option<i64>,
    ) {
        if prefix.len() == pattern.len() {
            let s = score(prefix, text, config);
            if best.map_or(true, |b| s > b) {
                *best = Some(s);
            }
            return;
        }
        for i in from..text.len() {
            if eq_ignore_case(pattern[prefix.len()], text[i]) {
                prefix.push(i);
                walk(text, pattern, i + 1, prefix, config, best);
                prefix.pop();
            }
        }
    }

    let mut best = None;
    walk(text, pattern, 0, &mut Vec::new(), config, &mut best);
    best
}

proptest! {
    #[test]
    fn prop_non_subsequence_never_matches(
        text in "[aAbBcC_ ]{0,10}",
        pattern in "[abcAB_]{1,5}",
    ) {
        let engine = MatchEngine::default();
        if !fuzzy_contains(&text, &pattern) {
            prop_assert_eq!(engine.align(&text, &pattern), MatchOutcome::NoMatch);
        }
    }

    #[test]
    fn prop_found_alignment_is_complete(
        text in "[aAbBcC_ ]{0,10}",
        pattern in "[abcAB_]{1,5}",
    ) {
        let engine = MatchEngine::default();
        if let MatchOutcome::Found(m) = engine.align(&text, &pattern) {
            let text_chars: Vec<char> = text.chars().collect();
            let pattern_chars: Vec<char> = pattern.chars().collect();

            prop_assert_eq!(m.indices.len(), pattern_chars.len());
            prop_assert!(m.indices.windows(2).all(|w| w[0] < w[1]));
            for (j, &i) in m.indices.iter().enumerate() {
                prop_assert!(eq_ignore_case(text_chars[i], pattern_chars[j]));
            }
            prop_assert!(m.score > 0);
            prop_assert_eq!(m.score, score(&m.indices, &text_chars, engine.config()));
        }
    }

    #[test]
    fn prop_align_finds_best_positive_alignment(
        text in "[aAbB_ ]{0,9}",
        pattern in "[abAB]{1,4}",
    ) {
        let engine = MatchEngine::default();
        let text_chars: Vec<char> = text.chars().collect();
        let pattern_chars: Vec<char> = pattern.chars().collect();
        let best = brute_force_best(&text_chars, &pattern_chars, engine.config());

        match engine.align(&text, &pattern) {
            MatchOutcome::Found(m) => prop_assert_eq!(Some(m.score), best),
            MatchOutcome::NoMatch => prop_assert!(best.map_or(true, |s| s <= 0)),
        }
    }

    #[test]
    fn prop_rank_is_sorted_and_consistent(
        candidates in proptest::collection::vec("[aAbBcC_ ]{0,8}", 0..12),
        pattern in "[abcAB]{2,4}",
        top_n in 0usize..15,
    ) {
        let pipeline = RankPipeline::default();
        let ranked = pipeline.rank(&candidates, &pattern, top_n);

        prop_assert!(ranked.len() <= top_n);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].candidate < pair[1].candidate);
            }
        }
        for r in &ranked {
            prop_assert_eq!(r.text, candidates[r.candidate].as_str());
            prop_assert_eq!(pipeline.engine().align(r.text, &pattern).score(), Some(r.score));
        }

        let matching = candidates
            .iter()
            .filter(|c| pipeline.engine().align(c, &pattern).is_match())
            .count();
        prop_assert_eq!(ranked.len(), matching.min(top_n));
    }

    #[test]
    fn prop_single_char_fast_path(
        candidates in proptest::collection::vec("[aAbB]{0,5}", 0..12),
        needle in "[aAbB]",
        top_n in 0usize..15,
    ) {
        let pipeline = RankPipeline::default();
        let ranked = pipeline.rank(&candidates, &needle, top_n);
        let needle_char = needle.chars().next().unwrap();

        let expected: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.contains(needle_char))
            .map(|(i, _)| i)
            .take(top_n)
            .collect();
        let actual: Vec<usize> = ranked.iter().map(|r| r.candidate).collect();
        prop_assert_eq!(actual, expected);

        for r in &ranked {
            prop_assert_eq!(r.score, 15);
            prop_assert_eq!(r.indices.len(), 1);
            prop_assert_eq!(r.text.chars().nth(r.indices[0]), Some(needle_char));
        }
    }

    #[test]
    fn prop_empty_pattern_always_found(text in "[aAbB_ ]{0,10}") {
        let engine = MatchEngine::default();
        match engine.align(&text, "") {
            MatchOutcome::Found(m) => {
                prop_assert!(m.indices.is_empty());
                prop_assert_eq!(m.score, 0);
            }
            MatchOutcome::NoMatch => prop_assert!(false, "empty pattern must match"),
        }
    }
}
