//! Splitting lines on a literal or regular-expression pattern

use crate::error::ConfigError;
use memchr::memmem::Finder;
use regex::bytes::Regex;

/// How the pattern text is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternKind {
    /// Exact byte sequence
    #[default]
    Literal,
    /// Regular expression
    Regex,
}

/// A piece of one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// The bytes of the piece, pattern excluded
    pub text: &'a [u8],
    /// Whether a pattern occurrence immediately precedes this piece
    pub starts_new_chunk: bool,
}

impl<'a> Fragment<'a> {
    /// Continuation of whatever chunk is open
    pub fn continuation(text: &'a [u8]) -> Self {
        Self {
            text,
            starts_new_chunk: false,
        }
    }

    /// First piece of a new chunk
    pub fn chunk_start(text: &'a [u8]) -> Self {
        Self {
            text,
            starts_new_chunk: true,
        }
    }
}

/// Splits lines on every non-overlapping pattern occurrence
#[derive(Debug, Clone)]
pub enum Splitter {
    /// Split on an exact byte sequence
    Literal(Finder<'static>),
    /// Split on every match of a compiled regular expression
    Regex(Regex),
}

impl Splitter {
    /// Build a splitter for `pattern`
    pub fn new(pattern: &str, kind: PatternKind) -> Result<Self, ConfigError> {
        match kind {
            PatternKind::Literal => Self::literal(pattern),
            PatternKind::Regex => Self::regex(pattern),
        }
    }

    /// Build a literal splitter
    pub fn literal(pattern: &str) -> Result<Self, ConfigError> {
        if pattern.is_empty() {
            return Err(ConfigError::EmptyPattern);
        }
        Ok(Splitter::Literal(
            Finder::new(pattern.as_bytes()).into_owned(),
        ))
    }

    /// Build a regular-expression splitter
    pub fn regex(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Splitter::Regex(regex))
    }

    /// Which kind of pattern this splitter matches
    pub fn kind(&self) -> PatternKind {
        match self {
            Splitter::Literal(_) => PatternKind::Literal,
            Splitter::Regex(_) => PatternKind::Regex,
        }
    }

    /// Split `line` into fragments
    ///
    /// Without a match the whole line comes back as one continuation
    /// fragment. With K matches there are K+1 fragments and every fragment
    /// after the first starts a new chunk. Zero-width regex matches are split
    /// on like any other match.
    pub fn split<'a>(&self, line: &'a [u8]) -> Vec<Fragment<'a>> {
        let pieces: Vec<&'a [u8]> = match self {
            Splitter::Literal(finder) => split_literal(finder, line),
            Splitter::Regex(regex) => regex.split(line).collect(),
        };

        pieces
            .into_iter()
            .enumerate()
            .map(|(i, text)| Fragment {
                text,
                starts_new_chunk: i > 0,
            })
            .collect()
    }
}

fn split_literal<'a>(finder: &Finder<'_>, line: &'a [u8]) -> Vec<&'a [u8]> {
    let needle_len = finder.needle().len();
    let mut pieces = Vec::new();
    let mut start = 0;

    for pos in finder.find_iter(line) {
        pieces.push(&line[start..pos]);
        start = pos + needle_len;
    }
    pieces.push(&line[start..]);

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(fragments: &[Fragment<'a>]) -> Vec<&'a [u8]> {
        fragments.iter().map(|f| f.text).collect()
    }

    #[test]
    fn test_no_match_single_continuation() {
        let splitter = Splitter::literal("X").unwrap();
        let fragments = splitter.split(b"hello\n");
        assert_eq!(fragments, vec![Fragment::continuation(b"hello\n")]);
    }

    #[test]
    fn test_literal_split_flags() {
        let splitter = Splitter::literal("X").unwrap();
        let fragments = splitter.split(b"aXbXc\n");
        assert_eq!(
            fragments,
            vec![
                Fragment::continuation(b"a"),
                Fragment::chunk_start(b"b"),
                Fragment::chunk_start(b"c\n"),
            ]
        );
    }

    #[test]
    fn test_literal_match_at_edges() {
        let splitter = Splitter::literal("--").unwrap();
        let fragments = splitter.split(b"--a--");
        assert_eq!(texts(&fragments), vec![&b""[..], b"a", b""]);
        assert!(!fragments[0].starts_new_chunk);
        assert!(fragments[2].starts_new_chunk);
    }

    #[test]
    fn test_literal_matches_do_not_overlap() {
        let splitter = Splitter::literal("aa").unwrap();
        assert_eq!(texts(&splitter.split(b"aaaaa")), vec![&b""[..], b"", b"a"]);
    }

    #[test]
    fn test_regex_split() {
        let splitter = Splitter::new(r"\d+", PatternKind::Regex).unwrap();
        let fragments = splitter.split(b"one12two345three\n");
        assert_eq!(texts(&fragments), vec![&b"one"[..], b"two", b"three\n"]);
        assert_eq!(splitter.kind(), PatternKind::Regex);
    }

    #[test]
    fn test_regex_metacharacters_are_literal_in_literal_mode() {
        let splitter = Splitter::new(".", PatternKind::Literal).unwrap();
        assert_eq!(texts(&splitter.split(b"a.b")), vec![&b"a"[..], b"b"]);
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let err = Splitter::new("(", PatternKind::Regex).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { ref pattern, .. } if pattern == "("));
    }

    #[test]
    fn test_empty_literal_rejected() {
        assert!(matches!(
            Splitter::literal(""),
            Err(ConfigError::EmptyPattern)
        ));
    }

    #[test]
    fn test_zero_width_regex_is_not_special_cased() {
        let splitter = Splitter::regex("").unwrap();
        let fragments = splitter.split(b"ab");
        assert!(fragments.len() > 2);
        let joined: Vec<u8> = fragments.iter().flat_map(|f| f.text.to_vec()).collect();
        assert_eq!(joined, b"ab");
    }

    #[test]
    fn test_non_utf8_bytes_pass_through() {
        let splitter = Splitter::literal("|").unwrap();
        let fragments = splitter.split(b"\xff\xfe|\x80\n");
        assert_eq!(texts(&fragments), vec![&b"\xff\xfe"[..], b"\x80\n"]);
    }
}
