//! Recognizers consulted by the tokenizer at each scan position.
//!
//! A recognizer looks at the text starting exactly at the scan cursor and
//! reports the leading fragment it accepts. The tokenizer asks a fixed,
//! ordered list of them and takes the first answer.

use regex::Regex;

use crate::token::TokenKind;
use crate::trie::Trie;

/// ASCII letters and digits. Classes are spelled out so Unicode digits never match.
pub const LATIN_PATTERN: &str = r"^[A-Za-z0-9]+";

/// ASCII digits only.
pub const NUMERIC_PATTERN: &str = r"^[0-9]+";

/// Something that can claim a leading fragment of a text.
pub trait Recognizer: Send + Sync {
    /// The kind assigned to tokens this recognizer produces
    fn kind(&self) -> TokenKind;

    /// Return the fragment this recognizer accepts at the very start of
    /// `text`, or `None`. Must never return an empty fragment.
    fn recognize<'a>(&self, text: &'a str) -> Option<&'a str>;
}

/// A regex-backed recognizer anchored at the start of its input
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    kind: TokenKind,
    regex: Regex,
}

impl PatternMatcher {
    /// Compile a matcher. `pattern` should start with `^`.
    pub fn new(kind: TokenKind, pattern: &str) -> Result<Self, regex::Error> {
        Ok(PatternMatcher {
            kind,
            regex: Regex::new(pattern)?,
        })
    }

    /// The underlying pattern
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Longest leading run matched by the pattern; empty runs count as no match.
    pub fn find<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.regex
            .find(text)
            .filter(|m| m.start() == 0 && !m.is_empty())
            .map(|m| m.as_str())
    }
}

impl Recognizer for PatternMatcher {
    fn kind(&self) -> TokenKind {
        self.kind
    }

    fn recognize<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.find(text)
    }
}

impl Recognizer for Trie {
    fn kind(&self) -> TokenKind {
        TokenKind::Word
    }

    fn recognize<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.longest_prefix(text)
    }
}

/// The two fixed pattern matchers, in priority order
#[derive(Debug, Clone)]
pub struct PatternMatchers {
    /// ASCII alphanumeric runs
    pub latin: PatternMatcher,
    /// ASCII digit runs. Its alphabet is a subset of `latin`'s, so it only
    /// fires on its own if the latin pattern is narrowed.
    pub numeric: PatternMatcher,
}

impl PatternMatchers {
    /// Compile the fixed patterns
    pub fn new() -> Result<Self, regex::Error> {
        Ok(PatternMatchers {
            latin: PatternMatcher::new(TokenKind::Latin, LATIN_PATTERN)?,
            numeric: PatternMatcher::new(TokenKind::Num, NUMERIC_PATTERN)?,
        })
    }

    /// Latin run at the start of `text`
    pub fn match_latin_run<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.latin.find(text)
    }

    /// Digit run at the start of `text`
    pub fn match_numeric_run<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.numeric.find(text)
    }
}
