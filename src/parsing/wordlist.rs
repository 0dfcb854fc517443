use std::path::Path;

use thiserror::Error;

/// Maximum number of candidates accepted from a single word list
pub const MAX_WORDS: usize = 10_000_000;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Too many words: {0} exceeds maximum allowed ({MAX_WORDS})")]
    TooManyWords(usize),
}

/// Parse a word list file with one candidate per line
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or is not UTF-8, or
/// `ParseError::TooManyWords` if the limit is exceeded.
pub fn parse_wordlist_file(path: &Path) -> Result<Vec<String>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_wordlist_text(&content)
}

/// Parse word list text with one candidate per line.
///
/// Lines are kept verbatim apart from the line terminator (`\n` or
/// `\r\n`), since surrounding whitespace changes match positions and
/// bonuses. Empty lines are skipped. Order is preserved, as it decides ties
/// during ranking.
///
/// # Errors
///
/// Returns `ParseError::TooManyWords` if the limit is exceeded.
pub fn parse_wordlist_text(text: &str) -> Result<Vec<String>, ParseError> {
    let mut words = Vec::new();

    for word in text.lines() {
        if word.is_empty() {
            continue;
        }

        if words.len() >= MAX_WORDS {
            return Err(ParseError::TooManyWords(words.len() + 1));
        }

        words.push(word.to_string());
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_wordlist_text() {
        let words = parse_wordlist_text("apple\nsnapshot\nmap\n").unwrap();
        assert_eq!(words, vec!["apple", "snapshot", "map"]);
    }

    #[test]
    fn test_parse_wordlist_skips_empty_lines() {
        let words = parse_wordlist_text("\napple\n\nmap\r\n\r\n").unwrap();
        assert_eq!(words, vec!["apple", "map"]);
    }

    #[test]
    fn test_parse_wordlist_keeps_surrounding_whitespace() {
        let words = parse_wordlist_text("  apple \n\tmap\r\n").unwrap();
        assert_eq!(words, vec!["  apple ", "\tmap"]);
    }

    #[test]
    fn test_parse_wordlist_keeps_inner_spaces() {
        let words = parse_wordlist_text("open file\nsave_as\n").unwrap();
        assert_eq!(words, vec!["open file", "save_as"]);
    }

    #[test]
    fn test_parse_wordlist_empty() {
        assert!(parse_wordlist_text("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_wordlist_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2nd").unwrap();
        writeln!(file, "second").unwrap();

        let words = parse_wordlist_file(file.path()).unwrap();
        assert_eq!(words, vec!["2nd", "second"]);
    }

    #[test]
    fn test_parse_wordlist_missing_file() {
        let err = parse_wordlist_file(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
