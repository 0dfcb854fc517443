use serde::Serialize;

/// Signed relevance score. Higher is more relevant.
pub type Score = i64;

/// A complete alignment of a pattern onto a text, with its score.
///
/// `indices[i]` is the character position in the text matched by the
/// i-th pattern character. Indices are strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    pub indices: Vec<usize>,
    pub score: Score,
}

/// Outcome of aligning one pattern against one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The pattern does not occur, or every alignment scored `<= 0`
    NoMatch,
    /// Best-scoring complete alignment
    Found(FuzzyMatch),
}

impl MatchOutcome {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[must_use]
    pub fn score(&self) -> Option<Score> {
        match self {
            Self::NoMatch => None,
            Self::Found(m) => Some(m.score),
        }
    }

    #[must_use]
    pub fn into_match(self) -> Option<FuzzyMatch> {
        match self {
            Self::NoMatch => None,
            Self::Found(m) => Some(m),
        }
    }
}

/// A ranked candidate, borrowing the text it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMatch<'a> {
    /// Matched character positions in `text`
    pub indices: Vec<usize>,

    pub score: Score,

    /// The candidate text
    pub text: &'a str,

    /// Position of the candidate in the input collection
    pub candidate: usize,
}

impl<'a> RankedMatch<'a> {
    pub(crate) fn from_match(m: FuzzyMatch, text: &'a str, candidate: usize) -> Self {
        Self {
            indices: m.indices,
            score: m.score,
            text,
            candidate,
        }
    }
}
